//! Pipeline entry points.
//!
//! - `Archiver`: scrape and save a single period
//! - `run_archive`: all configured periods, sequentially

pub mod period;
pub mod run;

pub use period::{Archiver, PeriodReport, SaveOutcome, ScrapeOutcome};
pub use run::{RunSummary, run_archive};
