use regex::Regex;
use scraper::{ElementRef, Html, Selector};

const MAX_NAV_ITEMS: usize = 15;
const MAX_NAV_ITEM_LEN: usize = 50;

/// Reduces raw markup to plain text: script and style blocks go first,
/// then every remaining tag, then whitespace runs collapse to single
/// spaces. Tag removal is pattern based, so badly broken markup can
/// leak fragments through.
pub fn markup_to_text(markup: &str) -> String {
    let script_re = Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap();
    let style_re = Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap();
    let tag_re = Regex::new(r"<[^>]+>").unwrap();

    let without_scripts = script_re.replace_all(markup, " ");
    let without_styles = style_re.replace_all(&without_scripts, " ");
    let without_tags = tag_re.replace_all(&without_styles, " ");

    without_tags
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn extract_title(document: &Html) -> String {
    let title_selector = Selector::parse("title").unwrap();

    document
        .select(&title_selector)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

pub fn extract_meta_description(document: &Html) -> String {
    let meta_selector = Selector::parse("meta").unwrap();

    document
        .select(&meta_selector)
        .filter(|meta| {
            meta.value()
                .attr("name")
                .is_some_and(|name| name.eq_ignore_ascii_case("description"))
        })
        .find_map(|meta| meta.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// Anchor labels from `<nav>` blocks and menu-classed `<ul>` blocks, in
/// document order. A menu list nested inside a nav contributes twice.
pub fn extract_navigation_items(document: &Html) -> Vec<String> {
    let nav_selector = Selector::parse("nav").unwrap();
    let ul_selector = Selector::parse("ul").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let mut blocks: Vec<ElementRef> = document.select(&nav_selector).collect();
    blocks.extend(document.select(&ul_selector).filter(|ul| {
        ul.value()
            .attr("class")
            .is_some_and(|class| class.to_lowercase().contains("menu"))
    }));

    let mut items: Vec<String> = vec![];
    for block in blocks {
        for anchor in block.select(&anchor_selector) {
            let label = anchor.text().collect::<String>();
            let label = label.trim();
            if !label.is_empty() && label.len() < MAX_NAV_ITEM_LEN {
                items.push(label.to_string());
            }
        }
    }

    items.truncate(MAX_NAV_ITEMS);
    items
}
