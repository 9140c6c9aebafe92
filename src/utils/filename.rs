// src/utils/filename.rs

//! File name sanitizing and document naming.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{MergedRecord, Period};

/// Maximum length of a sanitized name, in characters, before the extension.
pub const MAX_FILENAME_CHARS: usize = 200;

/// Extension appended to every document.
pub const DOCUMENT_EXTENSION: &str = ".md";

/// Maximum length of a sanitized name in UTF-8 bytes. Keeps the full file
/// name, extension and temp suffix included, under the 255-byte limit of
/// common filesystems.
pub const MAX_FILENAME_BYTES: usize = 240 - DOCUMENT_EXTENSION.len();

static FORBIDDEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("static regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Map an arbitrary title to a safe file name stem.
///
/// Forbidden characters become `_`, whitespace runs collapse to one space,
/// and the result is trimmed and cut on a character boundary to at most
/// [`MAX_FILENAME_CHARS`] characters and [`MAX_FILENAME_BYTES`] bytes.
/// Idempotent.
pub fn sanitize(name: &str) -> String {
    let replaced = FORBIDDEN.replace_all(name, "_");
    let collapsed = WHITESPACE.replace_all(&replaced, " ");
    let trimmed = collapsed.trim();

    let mut cut = trimmed
        .char_indices()
        .nth(MAX_FILENAME_CHARS)
        .map_or(trimmed.len(), |(i, _)| i);
    if cut > MAX_FILENAME_BYTES {
        cut = MAX_FILENAME_BYTES;
        while !trimmed.is_char_boundary(cut) {
            cut -= 1;
        }
    }

    // Cutting can expose a trailing space
    trimmed[..cut].trim_end().to_string()
}

/// Unsanitized stem for a record: `{decision_no}_{title}`, or
/// `{year}{month:02}_{seq:03}_{title}` when there is no decision number.
pub fn document_stem(record: &MergedRecord, period: Period, seq: usize) -> String {
    if record.decision_no.is_empty() {
        format!(
            "{}{:02}_{:03}_{}",
            period.year, period.month, seq, record.title
        )
    } else {
        format!("{}_{}", record.decision_no, record.title)
    }
}

/// Final document file name, sanitized and with the extension appended.
pub fn document_filename(record: &MergedRecord, period: Period, seq: usize) -> String {
    let name = sanitize(&document_stem(record, period, seq));
    if name.ends_with(DOCUMENT_EXTENSION) {
        name
    } else {
        format!("{name}{DOCUMENT_EXTENSION}")
    }
}
