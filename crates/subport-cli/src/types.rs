use std::path::PathBuf;

use subport_model::{AnalysisReport, ConversionStats};

/// Everything the report needs about one invocation.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub analysis: AnalysisReport,
    /// `None` in analyze-only mode.
    pub conversion: Option<ConversionSummary>,
}

#[derive(Debug)]
pub struct ConversionSummary {
    pub output_path: PathBuf,
    pub stats: ConversionStats,
    /// Source column the emails were read from.
    pub email_column: String,
}
