// src/pipeline/period.rs

//! Archiving of a single period: list → decisions → documents → index.

use std::sync::Arc;

use url::Url;

use crate::error::Result;
use crate::models::{CrawlerConfig, MergedRecord, Period, TargetPeriod};
use crate::render::MarkdownRenderer;
use crate::services::{ExtractionStrategy, merge_or_skip};
use crate::storage::DocumentStorage;
use crate::utils::filename::document_filename;
use crate::utils::http::{Fetcher, pause, request_delay};

/// Records scraped for one period.
#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    /// Entries found on the list page
    pub listed: usize,
    /// Entries whose decision page could not be fetched
    pub skipped: usize,
    /// Merged records, in list order
    pub records: Vec<MergedRecord>,
}

/// Documents persisted for one period.
#[derive(Debug, Default)]
pub struct SaveOutcome {
    /// Records that were written, with their file names attached
    pub saved: Vec<MergedRecord>,
    /// Records whose document could not be written
    pub write_failures: usize,
    /// Location of the index, if one was written
    pub index_location: Option<String>,
}

/// Summary of one archived period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodReport {
    pub period: Period,
    pub listed: usize,
    pub merged: usize,
    pub skipped: usize,
    pub saved: usize,
    pub write_failures: usize,
    pub index_location: Option<String>,
}

/// Scrapes periods and persists their documents.
pub struct Archiver {
    strategy: Arc<dyn ExtractionStrategy>,
    fetcher: Arc<dyn Fetcher>,
    storage: Arc<dyn DocumentStorage>,
    base: Url,
    crawler: CrawlerConfig,
}

impl Archiver {
    pub fn new(
        strategy: Arc<dyn ExtractionStrategy>,
        fetcher: Arc<dyn Fetcher>,
        storage: Arc<dyn DocumentStorage>,
        base: Url,
        crawler: CrawlerConfig,
    ) -> Self {
        Self {
            strategy,
            fetcher,
            storage,
            base,
            crawler,
        }
    }

    pub(super) fn crawler(&self) -> &CrawlerConfig {
        &self.crawler
    }

    /// Fetch the list page of `target` and every decision page on it.
    ///
    /// Fails only when the list page itself cannot be fetched. A decision
    /// page that fails is skipped.
    pub async fn scrape(&self, target: &TargetPeriod) -> Result<ScrapeOutcome> {
        let period = target.period();
        log::info!(
            "Scraping {} with '{}' strategy",
            period.label(),
            self.strategy.name()
        );

        let list_html = self.fetcher.fetch(&target.url).await?;
        let entries = self.strategy.extract_list(&list_html, &self.base);

        let mut outcome = ScrapeOutcome {
            listed: entries.len(),
            ..ScrapeOutcome::default()
        };

        if entries.is_empty() {
            log::warn!("No decisions listed for {}", period.label());
            return Ok(outcome);
        }
        log::info!("Found {} decisions for {}", entries.len(), period.label());

        let total = entries.len();
        for (idx, entry) in entries.iter().enumerate() {
            log::info!("[{}/{}] {}", idx + 1, total, entry.title);

            let detail = self
                .fetcher
                .fetch(&entry.url)
                .await
                .map(|html| self.strategy.extract_detail(&html));

            match merge_or_skip(entry, detail) {
                Some(record) => outcome.records.push(record),
                None => outcome.skipped += 1,
            }

            pause(request_delay(&self.crawler, &entry.url)).await;
        }

        log::info!(
            "Scraped {}: {} merged, {} skipped",
            period.label(),
            outcome.records.len(),
            outcome.skipped
        );
        Ok(outcome)
    }

    /// Render and write each record, then the period index.
    ///
    /// A record that fails to write is left out of the index. No index is
    /// written when nothing was saved.
    pub async fn save(
        &self,
        period: Period,
        records: Vec<MergedRecord>,
        renderer: &MarkdownRenderer,
    ) -> SaveOutcome {
        let mut outcome = SaveOutcome::default();
        if records.is_empty() {
            log::warn!("Nothing to save for {}", period.label());
            return outcome;
        }

        let total = records.len();
        for (idx, mut record) in records.into_iter().enumerate() {
            let seq = idx + 1;
            let filename = document_filename(&record, period, seq);
            let content = renderer.render_decision(&record);

            match self.storage.write_document(period, &filename, &content).await {
                Ok(location) => {
                    log::info!("[{seq}/{total}] Saved {location}");
                    record.attach_filename(filename);
                    outcome.saved.push(record);
                }
                Err(error) => {
                    outcome.write_failures += 1;
                    log::warn!("Failed to save '{}': {}", record.title, error);
                }
            }
        }

        if outcome.saved.is_empty() {
            return outcome;
        }

        let index = renderer.render_index(period, &outcome.saved);
        match self
            .storage
            .write_document(period, &period.index_filename(), &index)
            .await
        {
            Ok(location) => {
                log::info!("Index written to {location}");
                outcome.index_location = Some(location);
            }
            Err(error) => log::error!("Failed to write index for {}: {}", period.label(), error),
        }

        outcome
    }

    /// Scrape and save one period.
    pub async fn archive(&self, target: &TargetPeriod) -> Result<PeriodReport> {
        let period = target.period();
        let scraped = self.scrape(target).await?;
        let merged = scraped.records.len();

        let renderer = MarkdownRenderer::new();
        let saved = self.save(period, scraped.records, &renderer).await;

        Ok(PeriodReport {
            period,
            listed: scraped.listed,
            merged,
            skipped: scraped.skipped,
            saved: saved.saved.len(),
            write_failures: saved.write_failures,
            index_location: saved.index_location,
        })
    }
}
