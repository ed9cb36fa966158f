//! Text extraction from fetched pages
//!
//! Document pages (index variant) resolve their title through a fallback
//! chain and take their content from the configured container. Single pages
//! use the `<title>` text and the whole `<body>`.

use crate::crawler::rules::ExtractionRules;
use scraper::{ElementRef, Html, Selector};

/// Title and text pulled from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub title: String,
    /// `None` when the content container is missing from the page
    pub content: Option<String>,
}

/// Extracts title and container text from a document page
///
/// Title resolution order:
/// 1. first heading with non-empty text
/// 2. non-empty `<title>` text
/// 3. the configured fallback
///
/// The configured suffix pattern is then removed from the title.
pub fn extract_document(html: &str, rules: &ExtractionRules) -> ExtractedText {
    let document = Html::parse_document(html);

    let title = first_text(&document, &rules.heading_selector)
        .or_else(|| first_text(&document, &rules.title_selector))
        .unwrap_or_else(|| rules.untitled_fallback.clone());
    let title = rules.title_suffix.replace(&title, "").trim().to_string();

    let containers: Vec<ElementRef> = document.select(&rules.content_selector).collect();
    let content = if containers.is_empty() {
        None
    } else {
        let text: String = containers.iter().flat_map(|e| e.text()).collect();
        Some(finish_text(&text, rules.collapse_whitespace))
    };

    ExtractedText { title, content }
}

/// Extracts `<title>` text and whole-body text from a single page
///
/// A missing `<title>` gives an empty title; a missing `<body>` gives empty
/// content.
pub fn extract_page(html: &str, rules: &ExtractionRules) -> ExtractedText {
    let document = Html::parse_document(html);

    let title = document
        .select(&rules.title_selector)
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let body: String = document
        .select(&rules.body_selector)
        .flat_map(|e| e.text())
        .collect();

    ExtractedText {
        title,
        content: Some(finish_text(&body, rules.collapse_whitespace)),
    }
}

/// Text of the first matching element whose trimmed text is non-empty
fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .map(|e| e.text().collect::<String>().trim().to_string())
        .find(|s| !s.is_empty())
}

fn finish_text(text: &str, collapse: bool) -> String {
    if collapse {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        text.trim().to_string()
    }
}
