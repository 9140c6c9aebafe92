// src/models/mod.rs

//! Domain models for the archiver.
//!
//! Records produced by the extractors, the periods they belong to, and the
//! configuration that drives a run.

mod config;
mod decision;
mod period;
mod selectors;

// Re-export all public types
pub use config::{Config, CrawlerConfig, LoggingConfig, OutputConfig, SiteConfig};
pub use decision::{DetailRecord, ListEntry, MergedRecord, UNTITLED};
pub use period::{Period, TargetPeriod};
pub use selectors::SiteSelectors;
