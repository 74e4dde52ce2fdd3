use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::JobEvent;

/// Date key (`YYYY-MM-DD`) to the events of that day, in received order
pub type EventsByDate = HashMap<String, Vec<JobEvent>>;

// ============================================================================
// Job Events API Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct JobEventsResponse {
    pub success: bool,
    #[serde(default)]
    pub events: EventsByDate,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport succeeded but the API flagged the request as failed
    #[error("Failed to fetch events")]
    ApiRejected,
    /// Request, network or decode failure; carries the underlying message
    #[error("{0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobEventKind;

    #[test]
    fn test_response_deserializes_events_by_date() {
        let body = r#"{
            "success": true,
            "events": {
                "2025-01-05": [
                    { "company": "Acme", "type": "internship", "role": "SWE Intern", "time": "10:00 AM" },
                    { "company": "Globex", "type": "placement", "role": "Graduate Engineer", "time": "2:00 PM" }
                ]
            }
        }"#;

        let response: JobEventsResponse = serde_json::from_str(body).expect("valid body");
        assert!(response.success);

        let day = &response.events["2025-01-05"];
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].company, "Acme");
        assert_eq!(day[0].kind, JobEventKind::Internship);
        assert_eq!(day[1].kind, JobEventKind::Placement);
    }

    #[test]
    fn test_rejected_response_parses_without_events() {
        let response: JobEventsResponse =
            serde_json::from_str(r#"{ "success": false }"#).expect("valid body");
        assert!(!response.success);
        assert!(response.events.is_empty());
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::ApiRejected.to_string(), "Failed to fetch events");
        assert_eq!(
            FetchError::Transport("Network request failed".to_string()).to_string(),
            "Network request failed"
        );
    }
}
