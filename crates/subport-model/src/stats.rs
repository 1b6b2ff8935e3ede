//! Run-scoped counters produced by analysis and conversion.

use serde::{Deserialize, Serialize};

/// Counters for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Rows offered to the normalizer.
    pub total_rows: usize,
    /// Rows accepted and forwarded to the writer.
    pub processed: usize,
    /// Rows rejected for any reason.
    pub skipped: usize,
    /// Rows rejected because the email was missing or malformed.
    pub invalid_emails: usize,
    /// Rows rejected because the email was already seen.
    pub duplicates: usize,
    /// Accepted rows whose cleaned tag field is non-empty.
    pub tags_cleaned: usize,
}

impl ConversionStats {
    /// `processed + skipped == total_rows` and skips break down into
    /// invalid and duplicate rows.
    pub fn is_balanced(&self) -> bool {
        self.processed + self.skipped == self.total_rows
            && self.skipped == self.invalid_emails + self.duplicates
    }

    /// The run succeeded but nothing was accepted.
    pub fn is_empty_result(&self) -> bool {
        self.processed == 0
    }
}

/// Occurrences of one cleaned tag across the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Read-only statistics over raw input rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Column names in order of first appearance.
    pub columns: Vec<String>,
    pub total_rows: usize,
    pub valid_emails: usize,
    /// Rows whose email is missing or malformed.
    pub invalid_emails: usize,
    /// Subset of `invalid_emails` where the email was blank or absent.
    pub missing_emails: usize,
    /// Distinct valid emails, compared case-insensitively.
    pub unique_emails: usize,
    /// Valid rows whose email was already seen earlier in the input.
    pub duplicate_emails: usize,
    /// Distinct addresses that occur on more than one row.
    pub duplicated_addresses: usize,
    /// Tag frequencies, most frequent first; ties keep first appearance.
    pub tag_frequency: Vec<TagCount>,
}

impl AnalysisReport {
    pub fn unique_tag_count(&self) -> usize {
        self.tag_frequency.len()
    }

    pub fn top_tags(&self, limit: usize) -> &[TagCount] {
        &self.tag_frequency[..self.tag_frequency.len().min(limit)]
    }

    pub fn tag_count(&self, tag: &str) -> Option<usize> {
        self.tag_frequency
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.count)
    }
}
