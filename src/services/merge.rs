// src/services/merge.rs

//! Reconciles list entries with their decision pages.

use crate::error::Result;
use crate::models::{DetailRecord, ListEntry, MergedRecord, UNTITLED};

/// Merge a list entry with its parsed decision page.
///
/// Non-empty detail fields win. The title falls back to the list title and
/// then to [`UNTITLED`]; decision number and type fall back to the list
/// values. URL and list title always come from the list entry.
pub fn merge(entry: &ListEntry, detail: DetailRecord) -> MergedRecord {
    let title = [detail.title.as_str(), entry.title.as_str()]
        .into_iter()
        .map(str::trim)
        .find(|t| !t.is_empty())
        .unwrap_or(UNTITLED)
        .to_string();

    MergedRecord {
        title,
        decision_no: prefer(detail.decision_no, entry.decision_no.as_deref()),
        decision_type: prefer(detail.decision_type, entry.decision_type.as_deref()),
        newspaper: detail.newspaper,
        publisher: detail.publisher,
        decision_text: detail.decision_text,
        reason: detail.reason,
        applied_rules: detail.applied_rules,
        full_content: detail.full_content,
        url: entry.url.clone(),
        list_title: entry.title.clone(),
        filename: None,
    }
}

/// Merge, or skip the entry when its decision page could not be obtained.
pub fn merge_or_skip(entry: &ListEntry, detail: Result<DetailRecord>) -> Option<MergedRecord> {
    match detail {
        Ok(detail) => Some(merge(entry, detail)),
        Err(error) => {
            log::warn!(
                "Skipping '{}' ({}): {}",
                entry.title, entry.url, error
            );
            None
        }
    }
}

fn prefer(primary: String, fallback: Option<&str>) -> String {
    if primary.is_empty() {
        fallback.unwrap_or_default().to_string()
    } else {
        primary
    }
}
