use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use subport_ingest::{SubscriberTable, read_subscriber_table};
use subport_model::{ConversionOptions, TargetColumn};
use subport_normalize::{Conversion, Normalizer, RowOutcome, analyze_records};
use subport_output::{default_output_path, write_normalized_csv};

use crate::logging::redact_value;
use crate::types::{ConversionSummary, RunResult};

/// Load `input`, analyze it and, unless analyze-only, convert and write the
/// import file.
///
/// Nothing is written until every row has been normalized; any load or write
/// failure is returned as an error and no result is produced.
pub fn run(input: &Path, options: &ConversionOptions) -> Result<RunResult> {
    let run_span = info_span!("run", input = %input.display());
    let _run_guard = run_span.enter();

    // =========================================================================
    // Stage 1: Load
    // =========================================================================
    let load_start = Instant::now();
    let table = info_span!("load")
        .in_scope(|| read_subscriber_table(input))
        .with_context(|| format!("load {}", input.display()))?;
    info!(
        columns = table.headers.len(),
        rows = table.row_count(),
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );

    // =========================================================================
    // Stage 2: Analyze (read-only)
    // =========================================================================
    let analyze_start = Instant::now();
    let analysis =
        info_span!("analyze").in_scope(|| analyze_records(&table.headers, &table.records));
    info!(
        valid_emails = analysis.valid_emails,
        invalid_emails = analysis.invalid_emails,
        duplicate_emails = analysis.duplicate_emails,
        unique_tags = analysis.unique_tag_count(),
        duration_ms = analyze_start.elapsed().as_millis(),
        "analysis complete"
    );

    if options.analyze_only {
        return Ok(RunResult {
            input: input.to_path_buf(),
            analysis,
            conversion: None,
        });
    }

    // =========================================================================
    // Stage 3: Convert
    // =========================================================================
    let convert_start = Instant::now();
    let (conversion, email_column) = info_span!("convert").in_scope(|| convert(&table, options));
    info!(
        processed = conversion.stats.processed,
        skipped = conversion.stats.skipped,
        invalid_emails = conversion.stats.invalid_emails,
        duplicates = conversion.stats.duplicates,
        duration_ms = convert_start.elapsed().as_millis(),
        "conversion complete"
    );

    // =========================================================================
    // Stage 4: Write
    // =========================================================================
    let output_path = options
        .output_path
        .clone()
        .unwrap_or_else(|| default_output_path(input));
    let write_start = Instant::now();
    let rows = info_span!("write", output = %output_path.display())
        .in_scope(|| write_normalized_csv(&output_path, &conversion.records))
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(
        rows,
        duration_ms = write_start.elapsed().as_millis(),
        "write complete"
    );
    if conversion.stats.is_empty_result() {
        warn!(
            output = %output_path.display(),
            "no rows accepted; import file contains only the header"
        );
    }

    Ok(RunResult {
        input: input.to_path_buf(),
        analysis,
        conversion: Some(ConversionSummary {
            output_path,
            stats: conversion.stats,
            email_column,
        }),
    })
}

fn convert(table: &SubscriberTable, options: &ConversionOptions) -> (Conversion, String) {
    let mut normalizer =
        Normalizer::for_headers(table.headers.iter().map(String::as_str), options);
    let email_column = normalizer.columns().source(TargetColumn::Email);
    if !table.has_column(email_column) {
        warn!(
            expected = ?TargetColumn::Email.source_aliases(),
            "no email column found; every row will be skipped"
        );
    }
    let mut records = Vec::with_capacity(table.row_count());
    for (idx, record) in table.records.iter().enumerate() {
        match normalizer.normalize(record) {
            RowOutcome::Accepted(normalized) => records.push(normalized),
            RowOutcome::InvalidEmail { email } => {
                debug!(record = idx + 1, email = redact_value(&email), "skipping invalid email");
            }
            RowOutcome::Duplicate { email } => {
                debug!(record = idx + 1, email = redact_value(&email), "skipping duplicate email");
            }
        }
    }
    let conversion = Conversion {
        records,
        stats: *normalizer.stats(),
    };
    (conversion, email_column.to_string())
}
