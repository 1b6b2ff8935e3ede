//! CLI library components for the subscriber export converter.

#![allow(missing_docs)]

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
