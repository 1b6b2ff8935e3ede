//! Import file generation.
//!
//! Accepted records are written as a comma-delimited file with the fixed
//! header `Email,First Name,Last Name,Tags`; values containing the delimiter,
//! quotes or line breaks are quoted.

mod csv_writer;
mod error;
mod paths;

pub use csv_writer::{write_normalized_csv, write_normalized_to};
pub use error::{OutputError, Result};
pub use paths::{OUTPUT_SUFFIX, default_output_path};
