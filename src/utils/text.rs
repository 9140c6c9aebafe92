// src/utils/text.rs

//! Text flattening for parsed HTML.

use scraper::{ElementRef, Html};

/// Concatenate the element's text nodes, each trimmed, skipping blank ones.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

/// Like [`stripped_text`], but ignores every text node inside `excluded`.
pub fn stripped_text_excluding(element: ElementRef<'_>, excluded: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter(|node| !node.ancestors().any(|a| a.id() == excluded.id()))
        .filter_map(|node| node.value().as_text().map(|t| t.trim().to_string()))
        .collect()
}

/// Trimmed, non-blank text nodes of the element, one per line.
pub fn text_lines(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Visible text of a whole page.
///
/// Script and style contents are dropped, each line is trimmed and split on
/// double spaces, and blank chunks are removed.
pub fn page_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let raw: String = document
        .root_element()
        .descendants()
        .filter(|node| {
            !node.ancestors().any(|a| {
                a.value()
                    .as_element()
                    .is_some_and(|e| matches!(e.name(), "script" | "style"))
            })
        })
        .filter_map(|node| node.value().as_text().map(|t| String::from(&**t)))
        .collect();

    raw.lines()
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
