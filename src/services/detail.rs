// src/services/detail.rs

//! Decision page extraction.
//!
//! The header zone and the body zone are parsed independently, so a page
//! whose body markup drifted still yields its header fields and vice versa.
//! The flattened body text is always kept as `full_content`.

use scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::models::{DetailRecord, SiteSelectors};
use crate::utils::parse_selector;
use crate::utils::text::{stripped_text, stripped_text_excluding, text_lines};

/// Structured body section a heading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// 주문
    DecisionText,
    /// 이유
    Reason,
    /// 적용 조항
    AppliedRules,
}

impl SectionKind {
    /// Keyword groups in matching order.
    const GROUPS: [(SectionKind, &'static [&'static str]); 3] = [
        (SectionKind::DecisionText, &["주문", "주 문"]),
        (SectionKind::Reason, &["이유", "이 유"]),
        (SectionKind::AppliedRules, &["적용", "조항"]),
    ];

    /// Classify a section heading by substring containment.
    ///
    /// Groups are tried in order and the first match wins, so a heading
    /// such as "이유 및 적용 조항" is a `Reason`.
    pub fn classify(heading: &str) -> Option<Self> {
        Self::GROUPS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| heading.contains(k)))
            .map(|(kind, _)| *kind)
    }
}

/// Parses a decision page into a `DetailRecord`.
pub struct DetailExtractor {
    container: Selector,
    header: Selector,
    kind: Selector,
    heading: Selector,
    number: Selector,
    outlet: Selector,
    publisher_marker: String,
    body: Selector,
    section: Selector,
    section_heading: Selector,
    section_content: Selector,
}

impl DetailExtractor {
    /// Compile the decision-page selectors.
    pub fn new(selectors: &SiteSelectors) -> Result<Self> {
        Ok(Self {
            container: parse_selector(&selectors.detail_container)?,
            header: parse_selector(&selectors.detail_header)?,
            kind: parse_selector(&selectors.detail_type)?,
            heading: parse_selector(&selectors.detail_heading)?,
            number: parse_selector(&selectors.detail_number)?,
            outlet: parse_selector(&selectors.detail_outlet)?,
            publisher_marker: selectors.publisher_marker.clone(),
            body: parse_selector(&selectors.detail_body)?,
            section: parse_selector(&selectors.body_section)?,
            section_heading: parse_selector(&selectors.section_heading)?,
            section_content: parse_selector(&selectors.section_content)?,
        })
    }

    /// Extract a record. Missing zones leave their fields empty.
    pub fn extract(&self, html: &str) -> DetailRecord {
        let document = Html::parse_document(html);
        let mut detail = DetailRecord::default();

        let Some(container) = document.select(&self.container).next() else {
            log::debug!("Decision container not found");
            return detail;
        };

        match container.select(&self.header).next() {
            Some(header) => self.parse_header(header, &mut detail),
            None => log::debug!("Decision header zone not found"),
        }
        match container.select(&self.body).next() {
            Some(body) => self.parse_body(body, &mut detail),
            None => log::debug!("Decision body zone not found"),
        }

        detail
    }

    fn parse_header(&self, header: ElementRef<'_>, detail: &mut DetailRecord) {
        if let Some(badge) = header.select(&self.kind).next() {
            detail.decision_type = stripped_text(badge);
        }

        // Number and title share one heading node: take the marker, then the rest
        if let Some(heading) = header.select(&self.heading).next() {
            match heading.select(&self.number).next() {
                Some(marker) => {
                    detail.decision_no = stripped_text(marker);
                    detail.title = stripped_text_excluding(heading, marker);
                }
                None => detail.title = stripped_text(heading),
            }
        }

        if let Some(line) = header.select(&self.outlet).next() {
            let (newspaper, publisher) = split_outlet(&stripped_text(line), &self.publisher_marker);
            detail.newspaper = newspaper;
            detail.publisher = publisher;
        }
    }

    fn parse_body(&self, body: ElementRef<'_>, detail: &mut DetailRecord) {
        for section in body.select(&self.section) {
            let Some(heading) = section.select(&self.section_heading).next() else {
                continue;
            };
            let Some(content) = section.select(&self.section_content).next() else {
                continue;
            };

            let heading_text = stripped_text(heading);
            let content_text = text_lines(content);

            match SectionKind::classify(&heading_text) {
                Some(SectionKind::DecisionText) => detail.decision_text = content_text,
                Some(SectionKind::Reason) => detail.reason = content_text,
                Some(SectionKind::AppliedRules) => detail.applied_rules = content_text,
                None => log::debug!("Unrecognised section heading: {heading_text}"),
            }
        }

        detail.full_content = text_lines(body);
    }
}

impl Default for DetailExtractor {
    fn default() -> Self {
        Self::new(&SiteSelectors::default()).expect("default selectors are valid")
    }
}

/// Split an outlet line at the first publisher marker.
///
/// Text before the marker is the outlet; the marker and everything after it
/// is the publisher. Without a marker the whole line is the outlet.
pub fn split_outlet(line: &str, marker: &str) -> (String, String) {
    match line.split_once(marker) {
        Some((outlet, rest)) => {
            let publisher = format!("{marker} {}", rest.trim());
            (outlet.trim().to_string(), publisher.trim_end().to_string())
        }
        None => (line.trim().to_string(), String::new()),
    }
}
