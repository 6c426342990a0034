use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;

use crate::{domain::scrape_result::ExtractionResult, errors::ScrapeError};

/// Client for the scrape-record store. The backend exposes a REST
/// upsert over the `website_scrapes` table keyed by
/// (user_id, website_url); a later scrape overwrites the earlier row.
pub struct Vault {
    client: Client,
    api_url: String,
    service_key: String,
}

#[derive(Serialize)]
struct ScrapeRecordRow<'a> {
    user_id: &'a str,
    website_url: &'a str,
    scraped_data: &'a ExtractionResult,
    last_scraped_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Vault {
    pub fn new(api_url: String, service_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        Vault {
            client,
            api_url,
            service_key,
        }
    }

    pub async fn upsert_scrape(
        &self,
        user_id: &str,
        website_url: &str,
        data: &ExtractionResult,
    ) -> Result<(), ScrapeError> {
        let now = Utc::now();
        let row = ScrapeRecordRow {
            user_id,
            website_url,
            scraped_data: data,
            last_scraped_at: now,
            updated_at: now,
        };

        let url = format!(
            "{}/rest/v1/website_scrapes?on_conflict=user_id,website_url",
            self.api_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(url)
            .header("apikey", &self.service_key)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.service_key),
            )
            .header("Prefer", "resolution=merge-duplicates")
            .json(&row)
            .send()
            .await
            .map_err(|e| ScrapeError::Persistence(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Upsert failed for {}: {} {}", website_url, status, body);
            return Err(ScrapeError::Persistence(format!("{}: {}", status, body)));
        }

        log::info!("Stored scrape record for {} / {}", user_id, website_url);

        Ok(())
    }
}
