//! Read-only statistics over raw records.
//!
//! The analyzer never mutates its input and does not depend on the
//! normalizer; tags are counted for every row regardless of whether the row
//! would be accepted.

use std::collections::HashMap;

use subport_model::{AnalysisReport, RawRecord, TagCount, TargetColumn};

use crate::email::{email_key, is_valid_email};
use crate::mapping::ColumnMap;
use crate::tags::clean_tags;

/// Single-pass accumulator behind [`AnalysisReport`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    columns: ColumnMap,
    report: AnalysisReport,
    email_counts: HashMap<String, usize>,
    tag_index: HashMap<String, usize>,
}

impl Analyzer {
    /// Start an analysis; `headers` seeds the column inventory and the
    /// column mapping.
    pub fn new(headers: &[String]) -> Self {
        let mut analyzer = Self {
            columns: ColumnMap::resolve(headers.iter().map(String::as_str)),
            report: AnalysisReport::default(),
            email_counts: HashMap::new(),
            tag_index: HashMap::new(),
        };
        for header in headers {
            analyzer.note_column(header);
        }
        analyzer
    }

    fn note_column(&mut self, column: &str) {
        if !self.report.columns.iter().any(|known| known == column) {
            self.report.columns.push(column.to_string());
        }
    }

    fn note_tag(&mut self, tag: &str) {
        match self.tag_index.get(tag) {
            Some(&idx) => self.report.tag_frequency[idx].count += 1,
            None => {
                self.tag_index
                    .insert(tag.to_string(), self.report.tag_frequency.len());
                self.report.tag_frequency.push(TagCount {
                    tag: tag.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn observe(&mut self, record: &RawRecord) {
        self.report.total_rows += 1;
        for column in record.columns() {
            self.note_column(column);
        }

        let email = self.columns.value(record, TargetColumn::Email).trim();
        if email.is_empty() {
            self.report.invalid_emails += 1;
            self.report.missing_emails += 1;
        } else if is_valid_email(email) {
            self.report.valid_emails += 1;
            let count = self.email_counts.entry(email_key(email)).or_insert(0);
            if *count > 0 {
                self.report.duplicate_emails += 1;
            }
            *count += 1;
        } else {
            self.report.invalid_emails += 1;
        }

        let tags = clean_tags(self.columns.value(record, TargetColumn::Tags));
        for tag in tags.iter() {
            self.note_tag(tag);
        }
    }

    pub fn finish(mut self) -> AnalysisReport {
        self.report.unique_emails = self.email_counts.len();
        self.report.duplicated_addresses = self
            .email_counts
            .values()
            .filter(|&&count| count > 1)
            .count();
        // Stable sort: equal counts keep first-appearance order.
        self.report
            .tag_frequency
            .sort_by(|a, b| b.count.cmp(&a.count));
        self.report
    }
}

/// Analyze a loaded table in one pass.
pub fn analyze_records(headers: &[String], records: &[RawRecord]) -> AnalysisReport {
    let mut analyzer = Analyzer::new(headers);
    for record in records {
        analyzer.observe(record);
    }
    analyzer.finish()
}
