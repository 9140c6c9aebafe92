// src/render/mod.rs

//! Markdown rendering for decision documents and period indexes.

mod document;
mod index;

use chrono::{DateTime, Local};

use crate::models::{MergedRecord, Period};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders records as Markdown, stamped with a fixed generation time.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    generated_at: DateTime<Local>,
}

impl MarkdownRenderer {
    /// Renderer stamped with the current local time.
    pub fn new() -> Self {
        Self::at(Local::now())
    }

    /// Renderer stamped with the given time.
    pub fn at(generated_at: DateTime<Local>) -> Self {
        Self { generated_at }
    }

    fn timestamp(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Render one decision document.
    pub fn render_decision(&self, record: &MergedRecord) -> String {
        document::render(record, &self.timestamp())
    }

    /// Render the index of a period, in the given record order.
    pub fn render_index(&self, period: Period, records: &[MergedRecord]) -> String {
        index::render(period, records, &self.timestamp())
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
