//! piggy-ingest: read transactions from CSV and JSON exports.
//!
//! Importing never fails towards the caller: a missing, unreadable or
//! malformed source yields no transactions and a warning.

pub mod parsers;
pub mod types;

use piggy_core::Transaction;
use std::path::Path;
use tracing::{info, warn};

pub use parsers::csv_file::read_csv_file;
pub use parsers::json_file::read_json_file;
pub use types::{RawRecord, SourceFormat};

/// Import one file, choosing the reader by extension.
pub fn import_financial_data(path: impl AsRef<Path>) -> Vec<Transaction> {
    let path = path.as_ref();
    if !path.exists() {
        warn!(path = %path.display(), "file not found");
        return Vec::new();
    }

    let result = match SourceFormat::from_path(path) {
        Some(SourceFormat::Csv) => read_csv_file(path),
        Some(SourceFormat::Json) => read_json_file(path),
        None => {
            warn!(path = %path.display(), "unsupported file format");
            return Vec::new();
        }
    };

    match result {
        Ok(txns) => {
            info!(path = %path.display(), count = txns.len(), "imported transactions");
            txns
        }
        Err(e) => {
            warn!(path = %path.display(), error = %format_args!("{e:#}"), "import failed");
            Vec::new()
        }
    }
}

/// Import several files and concatenate them in the given order.
pub fn import_all<P: AsRef<Path>>(paths: &[P]) -> Vec<Transaction> {
    paths.iter().flat_map(import_financial_data).collect()
}
