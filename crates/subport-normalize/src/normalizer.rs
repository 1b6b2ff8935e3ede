//! Per-row accept/reject orchestration.
//!
//! For each raw row, in input order:
//!
//! 1. Project the row onto the target columns ([`ColumnMap::map_record`]).
//! 2. Clean the tag field ([`clean_tags`]).
//! 3. Validate the trimmed email; invalid rows are rejected.
//! 4. Under [`DuplicatePolicy::Remove`], reject rows whose email was already
//!    accepted (case-insensitive).
//! 5. Forward everything else unchanged in order.

use tracing::trace;

use subport_model::{
    ConversionOptions, ConversionStats, DuplicatePolicy, NormalizedRecord, RawRecord,
};

use crate::dedupe::Deduplicator;
use crate::email::is_valid_email;
use crate::mapping::ColumnMap;
use crate::tags::clean_tags;

/// What happened to one input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Accepted(NormalizedRecord),
    /// Email missing or malformed; carries the trimmed value.
    InvalidEmail { email: String },
    /// Email already accepted earlier in the run.
    Duplicate { email: String },
}

impl RowOutcome {
    pub fn into_record(self) -> Option<NormalizedRecord> {
        match self {
            RowOutcome::Accepted(record) => Some(record),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RowOutcome::Accepted(_) => "accepted",
            RowOutcome::InvalidEmail { .. } => "invalid_email",
            RowOutcome::Duplicate { .. } => "duplicate",
        }
    }
}

/// Accepted rows plus the counters of the run that produced them.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub records: Vec<NormalizedRecord>,
    pub stats: ConversionStats,
}

/// Run-scoped normalizer. Create one per conversion; its seen-email set and
/// counters are never shared between runs.
#[derive(Debug, Clone)]
pub struct Normalizer {
    columns: ColumnMap,
    duplicates: DuplicatePolicy,
    seen: Deduplicator,
    stats: ConversionStats,
}

impl Normalizer {
    pub fn new(columns: ColumnMap, options: &ConversionOptions) -> Self {
        Self {
            columns,
            duplicates: options.duplicates,
            seen: Deduplicator::new(),
            stats: ConversionStats::default(),
        }
    }

    /// Normalizer whose column map is resolved from a header row.
    pub fn for_headers<'a, I>(headers: I, options: &ConversionOptions) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::new(ColumnMap::resolve(headers), options)
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    pub fn stats(&self) -> &ConversionStats {
        &self.stats
    }

    /// Normalize one row and update the run counters.
    pub fn normalize(&mut self, record: &RawRecord) -> RowOutcome {
        let row = self.stats.total_rows;
        self.stats.total_rows += 1;
        let outcome = self.decide(record);
        match &outcome {
            RowOutcome::Accepted(normalized) => {
                self.stats.processed += 1;
                if !normalized.tags.is_empty() {
                    self.stats.tags_cleaned += 1;
                }
            }
            RowOutcome::InvalidEmail { .. } => {
                self.stats.skipped += 1;
                self.stats.invalid_emails += 1;
            }
            RowOutcome::Duplicate { .. } => {
                self.stats.skipped += 1;
                self.stats.duplicates += 1;
            }
        }
        trace!(row, outcome = outcome.label(), "normalized row");
        outcome
    }

    fn decide(&mut self, record: &RawRecord) -> RowOutcome {
        let mut normalized = self.columns.map_record(record);
        normalized.tags = clean_tags(&normalized.tags).to_joined();
        if !is_valid_email(&normalized.email) {
            return RowOutcome::InvalidEmail {
                email: normalized.email,
            };
        }
        let is_new = self.seen.check_and_register(&normalized.email);
        if !is_new && self.duplicates == DuplicatePolicy::Remove {
            return RowOutcome::Duplicate {
                email: normalized.email,
            };
        }
        RowOutcome::Accepted(normalized)
    }

    /// Normalize every row and return the accepted records with the counters.
    pub fn normalize_all<'r, I>(mut self, records: I) -> Conversion
    where
        I: IntoIterator<Item = &'r RawRecord>,
    {
        let records = records
            .into_iter()
            .filter_map(|record| self.normalize(record).into_record())
            .collect();
        Conversion {
            records,
            stats: self.stats,
        }
    }
}

/// One-shot conversion of a loaded table.
pub fn normalize_records(
    headers: &[String],
    records: &[RawRecord],
    options: &ConversionOptions,
) -> Conversion {
    Normalizer::for_headers(headers.iter().map(String::as_str), options).normalize_all(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(email: &str, tags: &str) -> RawRecord {
        RawRecord::from_pairs([("Email Address", email), ("TAGS", tags)])
    }

    #[test]
    fn invalid_email_is_counted_and_skipped() {
        let mut normalizer = Normalizer::new(ColumnMap::default(), &ConversionOptions::default());
        let outcome = normalizer.normalize(&row("invalid.email.com", "VIP"));
        assert_eq!(
            outcome,
            RowOutcome::InvalidEmail {
                email: "invalid.email.com".to_string()
            }
        );
        assert_eq!(normalizer.stats().invalid_emails, 1);
        assert_eq!(normalizer.stats().skipped, 1);
        assert_eq!(normalizer.stats().processed, 0);
    }

    #[test]
    fn noise_tags_still_accept_row() {
        let mut normalizer = Normalizer::new(ColumnMap::default(), &ConversionOptions::default());
        let outcome = normalizer.normalize(&row("a@example.com", ",,;|"));
        let record = outcome.into_record().expect("accepted");
        assert_eq!(record.tags, "");
        assert_eq!(normalizer.stats().tags_cleaned, 0);
        assert_eq!(normalizer.stats().processed, 1);
    }

    #[test]
    fn duplicate_is_rejected_case_insensitively() {
        let mut normalizer = Normalizer::new(ColumnMap::default(), &ConversionOptions::default());
        assert!(normalizer.normalize(&row("A@x.com", "")).into_record().is_some());
        let outcome = normalizer.normalize(&row("a@x.com", ""));
        assert_eq!(
            outcome,
            RowOutcome::Duplicate {
                email: "a@x.com".to_string()
            }
        );
        assert_eq!(normalizer.stats().duplicates, 1);
        assert!(normalizer.stats().is_balanced());
    }

    #[test]
    fn keep_policy_forwards_duplicates() {
        let options = ConversionOptions::new().with_keep_duplicates(true);
        let mut normalizer = Normalizer::new(ColumnMap::default(), &options);
        assert!(normalizer.normalize(&row("A@x.com", "")).into_record().is_some());
        assert!(normalizer.normalize(&row("a@x.com", "")).into_record().is_some());
        assert_eq!(normalizer.stats().duplicates, 0);
        assert_eq!(normalizer.stats().processed, 2);
    }

    #[test]
    fn email_case_is_preserved_in_output() {
        let mut normalizer = Normalizer::new(ColumnMap::default(), &ConversionOptions::default());
        let record = normalizer
            .normalize(&row(" Jose@Example.CO ", "VIP"))
            .into_record()
            .expect("accepted");
        assert_eq!(record.email, "Jose@Example.CO");
        assert_eq!(record.tags, "VIP");
        assert_eq!(normalizer.stats().tags_cleaned, 1);
    }
}
