pub mod markup;
pub mod scrape_result;
pub mod signals;
