//! Full pipeline: categorize, aggregate, plan the budget, compare.

use piggy_core::{Taxonomy, Transaction};
use serde::Serialize;
use tracing::debug;

use crate::breakdown::{CategoryTotal, category_breakdown};
use crate::budget::{BudgetConfig, BudgetTemplate, ComparisonEntry, compare_budget_vs_actual, create_budget_template};
use crate::categorizer::categorize_all;
use crate::history::{HistoricalAverages, historical_averages};
use crate::stats::{BasicStats, basic_stats};
use crate::timeline::{Period, TimeBucket, time_series};

/// Every analytical view over one categorized transaction set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub transactions: Vec<Transaction>,
    pub stats: BasicStats,
    pub categories: Vec<CategoryTotal>,
    pub monthly: Vec<TimeBucket>,
    pub quarterly: Vec<TimeBucket>,
    pub history: HistoricalAverages,
    pub budget: BudgetTemplate,
    pub comparison: Vec<ComparisonEntry>,
}

impl Analysis {
    /// Categorize `transactions` and compute all views.
    pub fn run(mut transactions: Vec<Transaction>, taxonomy: &Taxonomy, budget_config: &BudgetConfig) -> Self {
        let assigned = categorize_all(&mut transactions, taxonomy);
        debug!(assigned, total = transactions.len(), "categorized transactions");

        let stats = basic_stats(&transactions);
        let categories = category_breakdown(&transactions);
        let monthly = time_series(&transactions, Period::Month);
        let quarterly = time_series(&transactions, Period::Quarter);
        let history = historical_averages(&transactions);
        let budget = create_budget_template(&history, Some(stats.total_income), budget_config);
        let comparison = compare_budget_vs_actual(&budget, &transactions);

        Self {
            transactions,
            stats,
            categories,
            monthly,
            quarterly,
            history,
            budget,
            comparison,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
