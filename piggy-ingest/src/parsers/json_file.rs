//! Structured-document export reader.
//!
//! Expected shape:
//!   {"transactions": [{"date": "2024-01-10", "amount": 50000, "description": "Зарплата"}]}
//!
//! `amount` may be a number or a numeric string.

use anyhow::{Context, Result};
use piggy_core::Transaction;
use piggy_core::transaction::parse_amount;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Document {
    transactions: Vec<JsonRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct JsonRecord {
    date: Option<String>,
    amount: Option<Value>,
    description: Option<String>,
}

impl JsonRecord {
    fn amount(&self) -> Option<f64> {
        match self.amount.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => Some(parse_amount(s)),
            _ => None,
        }
    }

    fn into_transaction(self) -> Transaction {
        let amount = self.amount();
        Transaction::from_fields(self.date.as_deref(), amount, self.description.as_deref())
    }
}

pub fn read_json_file(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_json(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_json(text: &str) -> Result<Vec<Transaction>> {
    let doc: Document = serde_json::from_str(text)?;
    Ok(doc
        .transactions
        .into_iter()
        .map(JsonRecord::into_transaction)
        .collect())
}
