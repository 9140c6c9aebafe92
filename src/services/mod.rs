//! Extraction services.
//!
//! - List page parsing (`ListExtractor`)
//! - Decision page parsing (`DetailExtractor`)
//! - List/detail reconciliation (`merge`, `merge_or_skip`)
//! - The strategy seam the pipeline depends on (`ExtractionStrategy`)

mod detail;
mod list;
mod merge;
mod strategy;

pub use detail::{DetailExtractor, SectionKind, split_outlet};
pub use list::ListExtractor;
pub use merge::{merge, merge_or_skip};
pub use strategy::{ExtractionStrategy, SiteExtractor};
