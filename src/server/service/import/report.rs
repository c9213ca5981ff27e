use crate::model::import::ImportResultDto;

/// Outcome of one entity class, or of one scalar setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Number of records that could not be written
    Failed(usize),
    /// Number of records not attempted, because they were already imported or a
    /// record they depend on is missing
    Skipped(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassOutcome {
    pub label: &'static str,
    pub outcome: Outcome,
}

impl ClassOutcome {
    pub fn success(label: &'static str) -> Self {
        Self {
            label,
            outcome: Outcome::Success,
        }
    }

    pub fn failed(label: &'static str, count: usize) -> Self {
        Self {
            label,
            outcome: Outcome::Failed(count),
        }
    }

    /// Outcome of a single write, logging the failure.
    pub fn from_result<E: std::fmt::Display>(label: &'static str, result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::success(label),
            Err(e) => {
                tracing::warn!("Failed to import {}: {}", label, e);
                Self::failed(label, 1)
            }
        }
    }
}

/// Per-record counters of one entity class.
#[derive(Debug)]
pub struct Tally {
    label: &'static str,
    created: usize,
    failed: usize,
    skipped: usize,
}

impl Tally {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            created: 0,
            failed: 0,
            skipped: 0,
        }
    }

    pub fn created(&mut self) {
        self.created += 1;
    }

    pub fn skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn skipped_many(&mut self, count: usize) {
        self.skipped += count;
    }

    pub fn failed<E: std::fmt::Display>(&mut self, err: E) {
        tracing::warn!("Failed to import record of {}: {}", self.label, err);
        self.failed += 1;
    }

    pub fn failed_many(&mut self, count: usize) {
        self.failed += count;
    }

    /// Records the result of writing one record.
    pub fn record<E: std::fmt::Display>(&mut self, result: Result<(), E>) {
        match result {
            Ok(()) => self.created(),
            Err(e) => self.failed(e),
        }
    }

    /// Folds the counters into one outcome.
    ///
    /// Any failure marks the class failed. A class where nothing was written but
    /// something was skipped is reported as skipped. Everything else, including a class
    /// with no records at all, is a success.
    pub fn finish(self) -> ClassOutcome {
        let outcome = if self.failed > 0 {
            Outcome::Failed(self.failed)
        } else if self.created == 0 && self.skipped > 0 {
            Outcome::Skipped(self.skipped)
        } else {
            Outcome::Success
        };

        ClassOutcome {
            label: self.label,
            outcome,
        }
    }
}

/// Aggregated outcome of a whole import run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub success: Vec<String>,
    pub failed: Vec<String>,
    pub skipped: Vec<String>,
}

impl ImportReport {
    pub fn push(&mut self, outcome: ClassOutcome) {
        match outcome.outcome {
            Outcome::Success => self.success.push(outcome.label.to_string()),
            Outcome::Failed(count) => self.failed.push(counted(outcome.label, count)),
            Outcome::Skipped(count) => self.skipped.push(counted(outcome.label, count)),
        }
    }

    pub fn extend(&mut self, outcomes: impl IntoIterator<Item = ClassOutcome>) {
        for outcome in outcomes {
            self.push(outcome);
        }
    }

    pub fn into_dto(self) -> ImportResultDto {
        ImportResultDto {
            success: self.success,
            failed: self.failed,
            skipped: self.skipped,
        }
    }
}

fn counted(label: &str, count: usize) -> String {
    format!("{} (x{})", label, count)
}
