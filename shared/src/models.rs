use serde::{Deserialize, Serialize};

/// Kind of a job event shown on the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobEventKind {
    Internship,
    Placement,
}

impl JobEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internship => "internship",
            Self::Placement => "placement",
        }
    }
}

/// Job event as supplied by the API; never mutated locally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEvent {
    pub company: String,
    #[serde(rename = "type")]
    pub kind: JobEventKind,
    pub role: String,
    pub time: String,
}
