//! Configuration options for a conversion run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What to do with a row whose email was already accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// Drop later rows that repeat an email (case-insensitive).
    #[default]
    Remove,
    /// Forward every valid row.
    Keep,
}

/// How much of the column and tag listings the report shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportDetail {
    /// First few columns and the most frequent tags.
    #[default]
    Summary,
    /// Every column and every tag.
    Full,
}

/// Options controlling one invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Output location; derived from the input path when unset.
    pub output_path: Option<PathBuf>,
    pub duplicates: DuplicatePolicy,
    /// Run the analyzer only; skip normalization and writing.
    pub analyze_only: bool,
    pub detail: ReportDetail,
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_path(mut self, path: Option<PathBuf>) -> Self {
        self.output_path = path;
        self
    }

    pub fn with_keep_duplicates(mut self, keep: bool) -> Self {
        self.duplicates = if keep {
            DuplicatePolicy::Keep
        } else {
            DuplicatePolicy::Remove
        };
        self
    }

    pub fn with_analyze_only(mut self, enable: bool) -> Self {
        self.analyze_only = enable;
        self
    }

    pub fn with_verbose(mut self, enable: bool) -> Self {
        self.detail = if enable {
            ReportDetail::Full
        } else {
            ReportDetail::Summary
        };
        self
    }

    pub fn keep_duplicates(&self) -> bool {
        self.duplicates == DuplicatePolicy::Keep
    }

    pub fn verbose(&self) -> bool {
        self.detail == ReportDetail::Full
    }
}
