//! Basic totals over a transaction set

use piggy_core::Transaction;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BasicStats {
    /// Sum of positive amounts
    pub total_income: f64,
    /// Sum of negative amounts (kept negative)
    pub total_expense: f64,
    pub balance: f64,
    pub transaction_count: usize,
    pub income_transactions: usize,
    pub expense_transactions: usize,
}

pub fn basic_stats(transactions: &[Transaction]) -> BasicStats {
    let mut stats = transactions.iter().fold(BasicStats::default(), |mut acc, t| {
        acc.transaction_count += 1;
        if t.is_income() {
            acc.total_income += t.amount;
            acc.income_transactions += 1;
        } else if t.is_expense() {
            acc.total_expense += t.amount;
            acc.expense_transactions += 1;
        }
        acc
    });
    stats.balance = stats.total_income + stats.total_expense;
    stats
}
