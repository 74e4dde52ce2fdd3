use chrono::SecondsFormat;
use gloo_net::http::Request;
use shared::api::{EventsByDate, FetchError, JobEventsResponse};
use shared::grid::VisibleMonth;
use web_sys::RequestCredentials;

const API_BASE_URL: &str = "http://localhost:8080/api";

pub struct ApiService;

impl ApiService {
    /// Fetches the events of every day in `month`, keyed by date.
    ///
    /// A transport-level failure (network, non-2xx status, undecodable body)
    /// surfaces its own message; a well-formed response with `success: false`
    /// maps to the generic `ApiRejected`.
    pub async fn fetch_job_events(month: VisibleMonth) -> Result<EventsByDate, FetchError> {
        let url = format!("{}/job-events", API_BASE_URL);
        let (start, end) = month.request_window();

        let response = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .query([
                ("startDate", start.to_rfc3339_opts(SecondsFormat::Millis, true)),
                ("endDate", end.to_rfc3339_opts(SecondsFormat::Millis, true)),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Transport(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let body: JobEventsResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !body.success {
            return Err(FetchError::ApiRejected);
        }

        Ok(body.events)
    }
}
