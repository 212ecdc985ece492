//! piggy-finance: keyword categorizer, spend aggregation views and budget planner

pub mod analysis;
pub mod breakdown;
pub mod budget;
pub mod categorizer;
pub mod history;
pub mod stats;
pub mod timeline;

pub use analysis::Analysis;
pub use breakdown::{CategoryTotal, category_breakdown};
pub use budget::{
    BudgetConfig, BudgetEntry, BudgetStatus, BudgetTemplate, ComparisonEntry, compare_budget_vs_actual,
    create_budget_template,
};
pub use categorizer::{categorize, categorize_all};
pub use history::{HistoricalAverages, historical_averages};
pub use stats::{BasicStats, basic_stats};
pub use timeline::{Period, TimeBucket, time_series};
