// src/pipeline/run.rs

//! Sequential archiving of all configured periods.

use std::time::Duration;

use crate::models::TargetPeriod;
use crate::utils::http::pause;

use super::period::{Archiver, PeriodReport};

/// Summary of a whole run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<PeriodReport>,
    pub failed_periods: usize,
}

impl RunSummary {
    pub fn total_saved(&self) -> usize {
        self.reports.iter().map(|r| r.saved).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.reports.iter().map(|r| r.skipped).sum()
    }
}

/// Archive every target in order, one period at a time.
///
/// A period whose list page cannot be fetched is logged and counted; the
/// remaining periods still run.
pub async fn run_archive(archiver: &Archiver, targets: &[TargetPeriod]) -> RunSummary {
    let mut summary = RunSummary::default();
    let period_delay = Duration::from_millis(archiver.crawler().period_delay_ms);

    for (idx, target) in targets.iter().enumerate() {
        if idx > 0 {
            pause(period_delay).await;
        }

        match archiver.archive(target).await {
            Ok(report) => {
                if report.saved == 0 {
                    log::warn!("{}: 0 decisions saved", report.period.label());
                } else {
                    log::info!(
                        "{}: {} of {} decisions saved",
                        report.period.label(),
                        report.saved,
                        report.listed
                    );
                }
                summary.reports.push(report);
            }
            Err(error) => {
                summary.failed_periods += 1;
                log::error!("Failed to archive {}: {}", target.period().label(), error);
            }
        }
    }

    log::info!(
        "Run complete: {} periods, {} documents saved, {} decisions skipped, {} periods failed",
        summary.reports.len(),
        summary.total_saved(),
        summary.total_skipped(),
        summary.failed_periods
    );
    summary
}
