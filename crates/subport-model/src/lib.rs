pub mod columns;
pub mod options;
pub mod record;
pub mod stats;
pub mod tags;

pub use columns::{TargetColumn, target_headers};
pub use options::{ConversionOptions, DuplicatePolicy, ReportDetail};
pub use record::{NormalizedRecord, RawRecord};
pub use stats::{AnalysisReport, ConversionStats, TagCount};
pub use tags::{TAG_SEPARATOR, TagSet};
