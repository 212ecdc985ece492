//! Transaction record consumed by the categorizer and the aggregation views

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Category reported for a transaction the categorizer has not seen yet
pub const UNCATEGORIZED: &str = "Без категории";

/// Date format accepted at the input boundary
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single income or expense line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Calendar date; `None` when absent or unparseable
    pub date: Option<NaiveDate>,
    /// Positive = income, negative = expense
    pub amount: f64,
    /// Free text, only used for categorization
    pub description: String,
    /// Assigned once by the categorizer
    category: Option<String>,
}

/// Direction of money flow, as the importer labels it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Flow {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

impl Transaction {
    /// Create an uncategorized transaction
    pub fn new(date: Option<NaiveDate>, amount: f64, description: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            description: description.into(),
            category: None,
        }
    }

    /// Create a transaction that already carries its category, e.g. one
    /// read back from a previous analysis
    pub fn categorized(
        date: Option<NaiveDate>,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::new(date, amount, description)
        }
    }

    /// Build a transaction from possibly-missing importer fields.
    ///
    /// Missing or unparseable values are replaced here, once:
    /// date → `None`, amount → `0.0`, description → `""`.
    pub fn from_fields(date: Option<&str>, amount: Option<f64>, description: Option<&str>) -> Self {
        Self::new(
            date.and_then(parse_date),
            amount.filter(|a| a.is_finite()).unwrap_or(0.0),
            description.unwrap_or("").trim(),
        )
    }

    /// Category name, or [`UNCATEGORIZED`] before assignment
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }

    pub fn is_categorized(&self) -> bool {
        self.category.is_some()
    }

    /// Assign the category. A transaction can only be categorized once.
    pub fn assign_category(&mut self, category: impl Into<String>) -> Result<()> {
        if let Some(existing) = &self.category {
            return Err(Error::CategoryAlreadyAssigned(existing.clone()));
        }
        self.category = Some(category.into());
        Ok(())
    }


    pub fn flow(&self) -> Flow {
        if self.amount >= 0.0 {
            Flow::Income
        } else {
            Flow::Expense
        }
    }

    /// Returns true if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Returns true if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Absolute value of a negative amount, zero otherwise
    pub fn expense_magnitude(&self) -> f64 {
        if self.is_expense() { -self.amount } else { 0.0 }
    }
}

/// Parse a `YYYY-MM-DD` date, tolerating surrounding whitespace
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(d) => Some(d),
        Err(e) => {
            debug!(date = raw, error = %e, "unparseable date, excluded from time views");
            None
        }
    }
}

/// Parse a signed amount; anything that is not a finite number becomes 0
pub fn parse_amount(raw: &str) -> f64 {
    let raw = raw.trim();
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            if !raw.is_empty() {
                debug!(amount = raw, "invalid amount, treated as 0");
            }
            0.0
        }
    }
}
