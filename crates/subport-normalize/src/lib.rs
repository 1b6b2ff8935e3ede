//! Subscriber record normalization.
//!
//! This crate holds the conversion core:
//!
//! - **mapping**: source column aliases to the four target columns
//! - **tags**: tag field cleaning, splitting and rejoining
//! - **email**: cheap syntactic email validation
//! - **dedupe**: run-scoped, case-insensitive seen-email tracking
//! - **normalizer**: per-row accept/reject orchestration and counters
//! - **analyzer**: read-only statistics over raw records

pub mod analyzer;
pub mod dedupe;
pub mod email;
pub mod mapping;
pub mod normalizer;
pub mod tags;

pub use analyzer::{Analyzer, analyze_records};
pub use dedupe::Deduplicator;
pub use email::{email_key, is_valid_email};
pub use mapping::{ColumnMap, clean_name};
pub use normalizer::{Conversion, Normalizer, RowOutcome, normalize_records};
pub use tags::{QUOTE_CHARS, TAG_DELIMITERS, clean_tag_string, clean_tags};
