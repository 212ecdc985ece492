//! Budget template derived from historical averages, and the comparison of
//! that template against actual spend.

use piggy_core::Transaction;
use piggy_core::money::round2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::history::HistoricalAverages;

/// Label of the synthetic savings entry
pub const SAVINGS: &str = "накопления";

/// Budget planner tuning. Missing fields take the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BudgetConfig {
    /// Headroom applied to each historical average
    pub limit_factor: f64,
    /// Share of total income set aside as savings
    pub income_savings_rate: f64,
    /// Share of summed averages used when income is unknown
    pub expense_savings_rate: f64,
    pub savings_label: String,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            limit_factor: 1.05,
            income_savings_rate: 0.15,
            expense_savings_rate: 0.10,
            savings_label: SAVINGS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetEntry {
    pub category: String,
    pub limit: f64,
    pub recommended: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetTemplate {
    /// Category entries in history order, savings last
    pub entries: Vec<BudgetEntry>,
}

impl BudgetTemplate {
    pub fn get(&self, category: &str) -> Option<&BudgetEntry> {
        self.entries.iter().find(|e| e.category == category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    #[serde(rename = "within-budget")]
    WithinBudget,
    #[serde(rename = "exceeded")]
    Exceeded,
}

impl BudgetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetStatus::WithinBudget => "В пределах бюджета",
            BudgetStatus::Exceeded => "Превышен бюджет",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub category: String,
    pub limit: f64,
    /// Expense magnitude spent in the category
    pub actual: f64,
    /// `limit - actual`
    pub difference: f64,
    pub status: BudgetStatus,
}

/// Build a budget from historical averages.
///
/// Savings are `income_savings_rate` of `total_income` when it is known and
/// nonzero, otherwise `expense_savings_rate` of the summed averages.
pub fn create_budget_template(
    history: &HistoricalAverages,
    total_income: Option<f64>,
    config: &BudgetConfig,
) -> BudgetTemplate {
    let mut entries: Vec<BudgetEntry> = history
        .averages
        .iter()
        .map(|a| BudgetEntry {
            category: a.category.clone(),
            limit: round2(a.average * config.limit_factor),
            recommended: a.average,
        })
        .collect();

    let savings = match total_income {
        Some(income) if income != 0.0 => round2(income * config.income_savings_rate),
        _ => round2(history.total() * config.expense_savings_rate),
    };
    // The savings entry replaces a spending category with the same name
    if let Some(pos) = entries.iter().position(|e| e.category == config.savings_label) {
        let shadowed = entries.remove(pos);
        warn!(
            category = %shadowed.category,
            average = shadowed.recommended,
            "spending category shares the savings label, replaced by savings entry"
        );
    }
    entries.push(BudgetEntry {
        category: config.savings_label.clone(),
        limit: savings,
        recommended: savings,
    });

    BudgetTemplate { entries }
}

/// Compare each budgeted category against what was actually spent across
/// all transactions.
pub fn compare_budget_vs_actual(budget: &BudgetTemplate, transactions: &[Transaction]) -> Vec<ComparisonEntry> {
    let actual = transactions
        .iter()
        .filter(|t| t.is_expense())
        .fold(HashMap::<&str, f64>::new(), |mut acc, t| {
            *acc.entry(t.category()).or_insert(0.0) += t.expense_magnitude();
            acc
        });

    budget
        .entries
        .iter()
        .map(|entry| {
            let spent = actual.get(entry.category.as_str()).copied().unwrap_or(0.0);
            let difference = entry.limit - spent;
            ComparisonEntry {
                category: entry.category.clone(),
                limit: entry.limit,
                actual: spent,
                difference,
                status: if difference >= 0.0 {
                    BudgetStatus::WithinBudget
                } else {
                    BudgetStatus::Exceeded
                },
            }
        })
        .collect()
}
