use std::time::Duration;

use url::Url;

use crate::errors::ScrapeError;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; ProbeBot/1.0; +https://probe.dev/bot)";

pub struct FetchedPage {
    pub final_url: String,
    pub body: String,
}

/// One GET, redirects followed. `final_url` is the post-redirect URL,
/// which may differ from what the caller asked for.
pub async fn fetch_page(website_url: &str) -> Result<FetchedPage, ScrapeError> {
    let parsed_url = Url::parse(website_url)
        .map_err(|e| ScrapeError::Network(format!("invalid url {}: {}", website_url, e)))?;

    if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
        return Err(ScrapeError::Network(format!(
            "unsupported scheme: {}",
            parsed_url.scheme()
        )));
    }

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap();

    let response = client
        .get(parsed_url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(|e| ScrapeError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Fetch {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let final_url = response.url().to_string();
    let body = response
        .text()
        .await
        .map_err(|e| ScrapeError::Network(e.to_string()))?;

    log::info!("Fetched {} ({} bytes)", final_url, body.len());

    Ok(FetchedPage { final_url, body })
}
