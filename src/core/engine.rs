use crate::core::matcher::Matcher;
use crate::domain::model::Roster;
use crate::domain::ports::{Notifier, RosterSource};
use crate::utils::error::{Result, SantaError};

/// Outcome of one engine run: how many pairings were made, how many
/// notifications went out, and which ones failed.
#[derive(Debug, Default)]
pub struct RunReport {
    pub matched: usize,
    pub notified: usize,
    pub failed_notifications: Vec<(String, String)>,
}

/// Orchestrates the pipeline: fetch roster, match, notify. Matching is
/// synchronous; only the two I/O edges are async.
pub struct SantaEngine<S: RosterSource, N: Notifier> {
    source: S,
    notifier: N,
    matcher: Matcher,
    expected_count: Option<usize>,
}

impl<S: RosterSource, N: Notifier> SantaEngine<S, N> {
    pub fn new(source: S, notifier: N, matcher: Matcher) -> Self {
        Self {
            source,
            notifier,
            matcher,
            expected_count: None,
        }
    }

    /// Fail the run up front if the roster does not have exactly `count`
    /// rows. Guards against a half-filled spreadsheet.
    pub fn with_expected_count(mut self, count: Option<usize>) -> Self {
        self.expected_count = count;
        self
    }

    pub async fn run(&mut self) -> Result<RunReport> {
        tracing::info!("Fetching roster...");
        let records = self.source.fetch().await?;
        tracing::info!("Fetched {} participants", records.len());

        if let Some(expected) = self.expected_count {
            if records.len() != expected {
                return Err(SantaError::invalid_roster(format!(
                    "expected {} participants, roster has {}",
                    expected,
                    records.len()
                )));
            }
        }

        let roster = Roster::new(records)?;

        tracing::info!("Generating matches...");
        let assignment = self.matcher.run(&roster)?;
        tracing::info!("Matched {} participants", assignment.len());

        let mut report = RunReport {
            matched: assignment.len(),
            ..RunReport::default()
        };

        tracing::info!("Sending notifications...");
        for gifter in roster.iter() {
            // run() validated the assignment, so the lookups always hit
            let receiver = assignment
                .receiver_of(&gifter.name)
                .and_then(|name| roster.get(name));
            let Some(receiver) = receiver else { continue };

            match self.notifier.notify(gifter, receiver).await {
                Ok(()) => report.notified += 1,
                Err(e) => {
                    tracing::warn!("Notification to {} failed: {}", gifter.name, e);
                    report
                        .failed_notifications
                        .push((gifter.name.clone(), e.to_string()));
                }
            }
        }

        tracing::info!(
            "Run complete: {} matched, {} notified, {} failed",
            report.matched,
            report.notified,
            report.failed_notifications.len()
        );
        Ok(report)
    }
}
