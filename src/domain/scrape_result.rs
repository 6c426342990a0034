use chrono::{DateTime, Utc};
use scraper::Html;
use serde::Serialize;

use crate::domain::{markup, signals};

const MAX_MAIN_CONTENT_CHARS: usize = 2000;

/// Signals pulled out of a single fetched page. Extraction is best
/// effort: a page without a title or description gets empty strings,
/// not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub url: String,
    pub title: String,
    pub description: String,
    pub main_content: String,
    pub business_keywords: Vec<String>,
    pub company_terms: Vec<String>,
    pub navigation_items: Vec<String>,
    pub extracted_at: DateTime<Utc>,
    pub word_count: usize,
}

impl ExtractionResult {
    pub fn from_markup(markup_text: &str, url: &str) -> Self {
        let document = Html::parse_document(markup_text);
        let cleaned = markup::markup_to_text(markup_text);

        ExtractionResult {
            url: url.to_string(),
            title: markup::extract_title(&document),
            description: markup::extract_meta_description(&document),
            main_content: cleaned.chars().take(MAX_MAIN_CONTENT_CHARS).collect(),
            business_keywords: signals::match_business_keywords(&cleaned),
            company_terms: signals::count_company_terms(markup_text),
            navigation_items: markup::extract_navigation_items(&document),
            extracted_at: Utc::now(),
            word_count: cleaned.split_whitespace().count(),
        }
    }
}
