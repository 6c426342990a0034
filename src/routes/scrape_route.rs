use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{scrape_result::ExtractionResult, signals},
    errors::ScrapeError,
    services::{fetch_page, Vault},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScrapeRequest {
    website_url: Option<String>,
    user_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrapeResponse {
    success: bool,
    message: String,
    extracted_data: ExtractionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    final_url: Option<String>,
}

#[post("/scrape")]
pub async fn scrape_website(
    vault: web::Data<Vault>,
    body: web::Bytes,
) -> Result<HttpResponse, ScrapeError> {
    /*
    1. Validate the request body before touching the network
    2. Fetch the page, following redirects
    3. Refuse parked/placeholder domains outright
    4. Extract signals from the markup
    5. Upsert the record keyed by (userId, websiteUrl)
    */

    let request: ScrapeRequest = serde_json::from_slice(&body)
        .map_err(|e| ScrapeError::Validation(format!("invalid request body: {}", e)))?;

    let website_url = request
        .website_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ScrapeError::Validation("websiteUrl is required".to_string()))?;
    let user_id = request
        .user_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ScrapeError::Validation("userId is required".to_string()))?;

    log::info!("Scraping {} for user {}", website_url, user_id);

    let page = fetch_page(website_url).await?;

    if signals::is_parking_page(&page.body) {
        log::info!("Refusing parked page content from {}", page.final_url);
        return Err(ScrapeError::ParkingPage);
    }

    let extracted_data = ExtractionResult::from_markup(&page.body, &page.final_url);

    vault
        .upsert_scrape(user_id, website_url, &extracted_data)
        .await?;

    let final_url = (page.final_url != website_url).then(|| page.final_url.clone());

    Ok(HttpResponse::Ok().json(ScrapeResponse {
        success: true,
        message: format!("Successfully scraped {}", page.final_url),
        extracted_data,
        final_url,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};

    use super::*;

    fn test_vault() -> web::Data<Vault> {
        web::Data::new(Vault::new(
            "http://localhost:54321".to_string(),
            "test-key".to_string(),
        ))
    }

    #[actix_web::test]
    async fn missing_user_id_fails_before_any_fetch() {
        let app =
            test::init_service(App::new().app_data(test_vault()).service(scrape_website)).await;

        let req = test::TestRequest::post()
            .uri("/scrape")
            .set_json(serde_json::json!({ "websiteUrl": "https://example.com" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "userId is required");
    }

    #[actix_web::test]
    async fn missing_website_url_fails_before_any_fetch() {
        let app =
            test::init_service(App::new().app_data(test_vault()).service(scrape_website)).await;

        let req = test::TestRequest::post()
            .uri("/scrape")
            .set_json(serde_json::json!({ "userId": "user-1" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "websiteUrl is required");
    }
}
