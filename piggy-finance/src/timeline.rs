//! Monthly and quarterly income/expense buckets

use chrono::{Datelike, NaiveDate};
use piggy_core::{Flow, Transaction};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Number of categories reported per bucket
pub const TOP_CATEGORIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "quarter")]
    Quarter,
}

impl Period {
    /// Bucket key: `YYYY-MM` or `YYYY-Qn`
    pub fn key(&self, date: NaiveDate) -> String {
        match self {
            Period::Month => date.format("%Y-%m").to_string(),
            Period::Quarter => format!("{}-Q{}", date.year(), (date.month() - 1) / 3 + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeBucket {
    pub key: String,
    /// Sum of non-negative amounts
    pub income: f64,
    /// Sum of negative amounts
    pub expenses: f64,
    /// Category of each expense, in the order observed
    pub categories: Vec<String>,
    pub top_categories: Vec<CategoryCount>,
}

impl TimeBucket {
    fn new(key: String) -> Self {
        Self {
            key,
            income: 0.0,
            expenses: 0.0,
            categories: Vec::new(),
            top_categories: Vec::new(),
        }
    }
}

/// Group dated transactions into buckets, chronologically ordered.
/// Undated transactions are left out.
pub fn time_series(transactions: &[Transaction], period: Period) -> Vec<TimeBucket> {
    let mut buckets: BTreeMap<String, TimeBucket> = BTreeMap::new();
    for t in transactions {
        let Some(date) = t.date else {
            debug!(description = %t.description, "no date, excluded from time series");
            continue;
        };
        let key = period.key(date);
        let bucket = buckets.entry(key.clone()).or_insert_with(|| TimeBucket::new(key));
        match t.flow() {
            Flow::Income => bucket.income += t.amount,
            Flow::Expense => {
                bucket.expenses += t.amount;
                bucket.categories.push(t.category().to_string());
            }
        }
    }

    buckets
        .into_values()
        .map(|mut b| {
            b.top_categories = most_common(&b.categories, TOP_CATEGORIES);
            b
        })
        .collect()
}

/// The `n` most frequent items; ties keep first-occurrence order
pub(crate) fn most_common(items: &[String], n: usize) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|c| &c.category == item) {
            Some(c) => c.count += 1,
            None => counts.push(CategoryCount {
                category: item.clone(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}
