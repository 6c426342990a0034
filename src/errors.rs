use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

/// Everything that can sink a scrape. Every variant surfaces to the
/// caller as a 500 with the message text; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("{0}")]
    Validation(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to fetch website: {status} {status_text}")]
    Fetch { status: u16, status_text: String },
    #[error("Website appears to be a parked domain or placeholder page")]
    ParkingPage,
    #[error("Failed to save scrape record: {0}")]
    Persistence(String),
}

impl ResponseError for ScrapeError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError().json(json!({ "error": self.to_string() }))
    }
}
