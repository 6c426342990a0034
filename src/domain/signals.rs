use std::collections::HashMap;

use regex::Regex;

const MAX_COMPANY_TERMS: usize = 20;

pub const PARKING_PHRASES: [&str; 8] = [
    "domain for sale",
    "this domain may be for sale",
    "buy this domain",
    "parked domain",
    "domain parking",
    "coming soon",
    "under construction",
    "website is for sale",
];

pub const BUSINESS_KEYWORDS: [&str; 30] = [
    "services",
    "products",
    "solutions",
    "consulting",
    "software",
    "technology",
    "marketing",
    "sales",
    "business",
    "company",
    "enterprise",
    "agency",
    "digital",
    "design",
    "development",
    "management",
    "strategy",
    "finance",
    "insurance",
    "healthcare",
    "education",
    "manufacturing",
    "retail",
    "ecommerce",
    "logistics",
    "analytics",
    "security",
    "cloud",
    "innovation",
    "support",
];

pub const COMMON_WORDS: [&str; 26] = [
    "The",
    "This",
    "That",
    "These",
    "Those",
    "Our",
    "Your",
    "And",
    "For",
    "With",
    "From",
    "Home",
    "About",
    "About Us",
    "Contact",
    "Contact Us",
    "Services",
    "Products",
    "Blog",
    "News",
    "Privacy",
    "Terms",
    "Login",
    "Sign",
    "Menu",
    "Search",
];

pub fn is_parking_page(markup: &str) -> bool {
    let lowered = markup.to_lowercase();
    PARKING_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}

pub fn match_business_keywords(cleaned_text: &str) -> Vec<String> {
    let lowered = cleaned_text.to_lowercase();
    BUSINESS_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}

/// Repeated capitalized runs are a cheap stand-in for brand and product
/// names. Counts are keyed by the exact matched string, so "Acme Corp"
/// with a single space is one term while a line break between the words
/// yields two.
pub fn count_company_terms(markup: &str) -> Vec<String> {
    let capitalized_re = Regex::new(r"[A-Z][a-z]+(?: [A-Z][a-z]+)*").unwrap();

    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut first_seen: Vec<String> = vec![];

    for matched in capitalized_re.find_iter(markup) {
        let term = matched.as_str();
        if term.len() <= 2 || COMMON_WORDS.contains(&term) {
            continue;
        }

        let count = counts.entry(term.to_string()).or_insert(0);
        if *count == 0 {
            first_seen.push(term.to_string());
        }
        *count += 1;
    }

    first_seen
        .into_iter()
        .filter(|term| counts[term] > 1)
        .take(MAX_COMPANY_TERMS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parking_page_detected_case_insensitively() {
        let markup = "<html><body><h1>THIS DOMAIN MAY BE FOR SALE</h1></body></html>";
        assert!(is_parking_page(markup));

        let markup = "<html><body>Our new site is Coming Soon!</body></html>";
        assert!(is_parking_page(markup));

        let markup = "<p>This domain may be for sale. Inquire within.</p>";
        assert!(is_parking_page(markup));
    }

    #[test]
    fn regular_content_is_not_a_parking_page() {
        let markup = "<html><body>We sell hand-made furniture in Portland.</body></html>";
        assert!(!is_parking_page(markup));
    }

    #[test]
    fn business_keywords_returned_in_vocabulary_order() {
        let text = "We offer software consulting and managed services, with a focus on innovation";
        let keywords = match_business_keywords(text);

        assert_eq!(keywords, vec!["services", "consulting", "software", "innovation"]);
    }

    #[test]
    fn business_keywords_empty_when_none_present() {
        let keywords = match_business_keywords("nothing relevant here");
        assert!(keywords.is_empty());
    }

    #[test]
    fn company_terms_require_more_than_one_occurrence() {
        let markup = "<p>Acme Corp builds Widget Pro. Widget Pro ships with Acme Corp support. Solo mention.</p>";
        let terms = count_company_terms(markup);

        assert_eq!(terms, vec!["Acme Corp", "Widget Pro"]);
    }

    #[test]
    fn company_terms_skip_common_and_short_words() {
        let markup = "The price went up. The cost went down. Xy rocks. Xy rolls.";
        let terms = count_company_terms(markup);

        assert!(terms.is_empty());
    }

    #[test]
    fn company_terms_capped_at_twenty() {
        let mut markup = String::new();
        for c in 'a'..='y' {
            let term = format!("Brand{}", c);
            markup.push_str(&format!("{}. {}. ", term, term));
        }
        let terms = count_company_terms(&markup);

        assert_eq!(terms.len(), 20);
        assert_eq!(terms[0], "Branda");
        assert_eq!(terms[19], "Brandt");
    }
}
