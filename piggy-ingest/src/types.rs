use piggy_core::Transaction;
use piggy_core::transaction::parse_amount;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Json,
}

impl SourceFormat {
    /// Detect the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(SourceFormat::Csv),
            "json" => Some(SourceFormat::Json),
            _ => None,
        }
    }
}

/// One row as it appears in a CSV export. Every column is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub date: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
}

impl RawRecord {
    pub fn into_transaction(self) -> Transaction {
        Transaction::from_fields(
            self.date.as_deref(),
            self.amount.as_deref().map(parse_amount),
            self.description.as_deref(),
        )
    }
}
