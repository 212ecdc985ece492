//! Historical per-category monthly spending averages.
//!
//! A category's average covers only the months in which it had at least one
//! expense; absent months are not counted as zero.

use piggy_core::Transaction;
use piggy_core::money::round2;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::timeline::Period;

/// Number of categories kept in [`HistoricalAverages::top`]
pub const TOP_AVERAGES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAverage {
    pub category: String,
    /// Mean monthly expense magnitude, rounded to 2 decimals
    pub average: f64,
    /// Months with at least one expense in this category
    pub months: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistoricalAverages {
    /// Every category with expense history, in first-seen order
    pub averages: Vec<CategoryAverage>,
    /// Largest averages first
    pub top: Vec<CategoryAverage>,
}

impl HistoricalAverages {
    pub fn get(&self, category: &str) -> Option<f64> {
        self.averages
            .iter()
            .find(|a| a.category == category)
            .map(|a| a.average)
    }

    /// Sum of all category averages
    pub fn total(&self) -> f64 {
        self.averages.iter().map(|a| a.average).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }
}

pub fn historical_averages(transactions: &[Transaction]) -> HistoricalAverages {
    let mut table: Vec<(String, BTreeMap<String, f64>)> = Vec::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        let Some(date) = t.date else { continue };
        let month = Period::Month.key(date);
        let idx = match table.iter().position(|(c, _)| c == t.category()) {
            Some(i) => i,
            None => {
                table.push((t.category().to_string(), BTreeMap::new()));
                table.len() - 1
            }
        };
        *table[idx].1.entry(month).or_insert(0.0) += t.expense_magnitude();
    }

    let averages: Vec<CategoryAverage> = table
        .into_iter()
        .filter(|(_, months)| !months.is_empty())
        .map(|(category, months)| {
            let sum: f64 = months.values().sum();
            CategoryAverage {
                category,
                average: round2(sum / months.len() as f64),
                months: months.len(),
            }
        })
        .collect();

    let mut top = averages.clone();
    top.sort_by(|a, b| b.average.total_cmp(&a.average));
    top.truncate(TOP_AVERAGES);

    HistoricalAverages { averages, top }
}
