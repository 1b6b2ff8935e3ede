pub mod csv_table;
pub mod error;

pub use csv_table::{SubscriberTable, read_subscriber_table, read_subscriber_table_from_reader};
pub use error::{IngestError, Result};
