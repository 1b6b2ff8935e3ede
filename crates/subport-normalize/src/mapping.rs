//! Source column to target column mapping.

use subport_model::{NormalizedRecord, RawRecord, TargetColumn};

/// Resolved source column for each target column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    sources: [&'static str; 4],
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            sources: TargetColumn::ALL.map(TargetColumn::default_source),
        }
    }
}

impl ColumnMap {
    /// Pick, for every target, the highest-priority alias present in `headers`.
    ///
    /// Targets with no alias present fall back to the export default, which
    /// then reads as empty for every row.
    pub fn resolve<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers: Vec<&str> = headers.into_iter().collect();
        let sources = TargetColumn::ALL.map(|column| {
            column
                .source_aliases()
                .iter()
                .copied()
                .find(|alias| headers.contains(alias))
                .unwrap_or_else(|| column.default_source())
        });
        Self { sources }
    }

    pub fn source(&self, column: TargetColumn) -> &'static str {
        self.sources[column as usize]
    }

    /// Value of the source column for `column`, or `""` when absent.
    pub fn value<'r>(&self, record: &'r RawRecord, column: TargetColumn) -> &'r str {
        record.get(self.source(column)).unwrap_or_default()
    }

    /// Project a raw row onto the four target fields.
    ///
    /// The email is trimmed, names are whitespace-normalized and the tag field
    /// is carried over untouched for the tag cleaner. Absent or blank source
    /// values become empty strings; unknown columns are dropped.
    pub fn map_record(&self, record: &RawRecord) -> NormalizedRecord {
        NormalizedRecord {
            email: self.value(record, TargetColumn::Email).trim().to_string(),
            first_name: clean_name(self.value(record, TargetColumn::FirstName)),
            last_name: clean_name(self.value(record, TargetColumn::LastName)),
            tags: blank_to_empty(self.value(record, TargetColumn::Tags)),
        }
    }
}

fn blank_to_empty(value: &str) -> String {
    if value.trim().is_empty() {
        String::new()
    } else {
        value.to_string()
    }
}

/// Trim a name and collapse internal whitespace runs; letters of any script
/// are kept as-is.
pub fn clean_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
