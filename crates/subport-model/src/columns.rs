//! Target schema columns and the source aliases they are filled from.

use serde::{Deserialize, Serialize};

/// One of the four columns of the import schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TargetColumn {
    Email,
    FirstName,
    LastName,
    Tags,
}

impl TargetColumn {
    /// All target columns, in output order.
    pub const ALL: [TargetColumn; 4] = [
        TargetColumn::Email,
        TargetColumn::FirstName,
        TargetColumn::LastName,
        TargetColumn::Tags,
    ];

    /// Header written to the output file.
    pub fn header(self) -> &'static str {
        match self {
            TargetColumn::Email => "Email",
            TargetColumn::FirstName => "First Name",
            TargetColumn::LastName => "Last Name",
            TargetColumn::Tags => "Tags",
        }
    }

    /// Source column names accepted for this target, highest priority first.
    ///
    /// A file that already uses the target name wins over the export alias.
    pub fn source_aliases(self) -> &'static [&'static str] {
        match self {
            TargetColumn::Email => &["Email", "Email Address"],
            TargetColumn::FirstName => &["First Name"],
            TargetColumn::LastName => &["Last Name"],
            TargetColumn::Tags => &["Tags", "TAGS"],
        }
    }

    /// The export alias used when a file carries none of the aliases.
    pub fn default_source(self) -> &'static str {
        match self {
            TargetColumn::Email => "Email Address",
            TargetColumn::FirstName => "First Name",
            TargetColumn::LastName => "Last Name",
            TargetColumn::Tags => "TAGS",
        }
    }
}

/// Header row of the output file.
pub fn target_headers() -> [&'static str; 4] {
    TargetColumn::ALL.map(TargetColumn::header)
}
