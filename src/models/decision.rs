//! Adjudication record types.

use serde::{Deserialize, Serialize};

/// Placeholder title used when neither the detail page nor the list row has one.
pub const UNTITLED: &str = "제목 없음";

/// One row of a monthly list page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListEntry {
    /// Title shown in the list (may be empty)
    pub title: String,

    /// Absolute URL of the decision page
    pub url: String,

    /// Decision number, e.g. "2025-1268"
    pub decision_no: Option<String>,

    /// Decision type badge, e.g. "주의"
    pub decision_type: Option<String>,
}

/// Fields parsed from one decision page.
///
/// Every field defaults to the empty string; a page without the main
/// container yields `DetailRecord::default()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailRecord {
    pub title: String,
    pub decision_no: String,
    pub decision_type: String,

    /// Outlet name, the part of the header line before the publisher marker
    pub newspaper: String,

    /// Publisher line, starting with the publisher marker
    pub publisher: String,

    /// 주문
    pub decision_text: String,

    /// 이유
    pub reason: String,

    /// 적용 조항
    pub applied_rules: String,

    /// Flattened text of the whole body zone
    pub full_content: String,
}

impl DetailRecord {
    /// True when none of the structured body sections were found.
    pub fn has_structured_body(&self) -> bool {
        !(self.decision_text.is_empty() && self.reason.is_empty() && self.applied_rules.is_empty())
    }
}

/// A list entry reconciled with its detail record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergedRecord {
    /// Resolved title, never empty
    pub title: String,
    pub decision_no: String,
    pub decision_type: String,
    pub newspaper: String,
    pub publisher: String,
    pub decision_text: String,
    pub reason: String,
    pub applied_rules: String,
    pub full_content: String,

    /// Source URL, taken from the list entry
    pub url: String,

    /// Title as it appeared on the list page
    pub list_title: String,

    /// Document file name, set once the document has been persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl MergedRecord {
    /// True when none of the structured body sections are present.
    pub fn uses_fallback_body(&self) -> bool {
        self.decision_text.is_empty() && self.reason.is_empty() && self.applied_rules.is_empty()
    }

    /// Attach the persisted document name. Later calls keep the first name.
    pub fn attach_filename(&mut self, filename: impl Into<String>) {
        if self.filename.is_none() {
            self.filename = Some(filename.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_default_is_all_empty() {
        let detail = DetailRecord::default();
        assert!(detail.title.is_empty());
        assert!(detail.full_content.is_empty());
        assert!(!detail.has_structured_body());
    }

    #[test]
    fn test_attach_filename_only_once() {
        let mut record = MergedRecord {
            title: "t".into(),
            decision_no: String::new(),
            decision_type: String::new(),
            newspaper: String::new(),
            publisher: String::new(),
            decision_text: String::new(),
            reason: "r".into(),
            applied_rules: String::new(),
            full_content: String::new(),
            url: "https://example.com".into(),
            list_title: String::new(),
            filename: None,
        };
        record.attach_filename("a.md");
        record.attach_filename("b.md");
        assert_eq!(record.filename.as_deref(), Some("a.md"));
        assert!(!record.uses_fallback_body());
    }
}
