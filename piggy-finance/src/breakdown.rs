//! Per-category breakdown with share of total expenses

use piggy_core::Transaction;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    /// Signed sum of every transaction in the category
    pub sum: f64,
    pub count: usize,
    /// Sum of the category's negative amounts
    pub expense_sum: f64,
    /// Share of total expense magnitude, 0..=100
    pub percent: f64,
}

/// Totals per category, largest absolute sum first.
/// Categories with equal absolute sums keep first-seen order.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for t in transactions {
        let idx = match totals.iter().position(|c| c.category == t.category()) {
            Some(i) => i,
            None => {
                totals.push(CategoryTotal {
                    category: t.category().to_string(),
                    sum: 0.0,
                    count: 0,
                    expense_sum: 0.0,
                    percent: 0.0,
                });
                totals.len() - 1
            }
        };
        let entry = &mut totals[idx];
        entry.sum += t.amount;
        entry.count += 1;
        if t.is_expense() {
            entry.expense_sum += t.amount;
        }
    }

    let total_expense: f64 = totals.iter().map(|c| c.expense_sum).sum();
    if total_expense != 0.0 {
        for c in &mut totals {
            c.percent = c.expense_sum / total_expense * 100.0;
        }
    }

    totals.sort_by(|a, b| b.sum.abs().total_cmp(&a.sum.abs()));
    totals
}
