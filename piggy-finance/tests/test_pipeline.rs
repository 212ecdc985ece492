use chrono::NaiveDate;
use piggy_core::money::round2;
use piggy_core::{Taxonomy, Transaction};
use piggy_finance::budget::SAVINGS;
use piggy_finance::{Analysis, BudgetConfig, BudgetStatus};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn scenario() -> Vec<Transaction> {
    vec![
        Transaction::new(NaiveDate::from_ymd_opt(2024, 1, 15), -1500.50, "Продукты в Пятерочке"),
        Transaction::new(NaiveDate::from_ymd_opt(2024, 1, 10), 50000.0, "Зарплата"),
    ]
}

fn mixed() -> Vec<Transaction> {
    vec![
        Transaction::from_fields(Some("2024-01-15"), Some(-1500.50), Some("Продукты в Пятерочке")),
        Transaction::from_fields(Some("2024-01-10"), Some(50000.0), Some("Зарплата")),
        Transaction::from_fields(Some("2024-01-08"), Some(-350.0), Some("Метро")),
        Transaction::from_fields(Some("2024-01-05"), Some(-1200.0), Some("Ресторан Суши")),
        Transaction::from_fields(Some("2024-01-03"), Some(-450.0), Some("Аптека")),
        Transaction::from_fields(Some("2024-02-11"), Some(-2100.25), Some("Магнит у дома")),
        Transaction::from_fields(Some("2024-02-14"), Some(-3000.0), Some("Подарок на праздник")),
        Transaction::from_fields(Some("2024-04-02"), Some(-999.0), Some("Погашение кредита")),
        Transaction::from_fields(Some("2024-04-10"), Some(51000.0), Some("Зачисление зарплаты")),
        Transaction::from_fields(None, Some(-77.0), Some("что-то непонятное")),
        Transaction::from_fields(Some("31/12/2024"), None, None),
    ]
}

/// The worked example: one grocery purchase and one salary payment in January 2024.
#[test]
fn test_scenario_end_to_end() {
    let analysis = Analysis::run(scenario(), &Taxonomy::builtin(), &BudgetConfig::default());

    assert_eq!(analysis.transactions[0].category(), "продукты");
    assert_eq!(analysis.transactions[1].category(), "зарплата и доходы");

    let s = &analysis.stats;
    assert_eq!(s.total_income, 50000.00);
    assert_eq!(s.total_expense, -1500.50);
    assert_eq!(s.balance, 48499.50);
    assert_eq!(s.transaction_count, 2);

    assert_eq!(analysis.monthly.len(), 1);
    let jan = &analysis.monthly[0];
    assert_eq!(jan.key, "2024-01");
    assert_eq!(jan.income, 50000.00);
    assert_eq!(jan.expenses, -1500.50);
    assert_eq!(jan.top_categories.len(), 1);
    assert_eq!(jan.top_categories[0].category, "продукты");
    assert_eq!(jan.top_categories[0].count, 1);

    assert_eq!(analysis.quarterly[0].key, "2024-Q1");

    let groceries = analysis.budget.get("продукты").unwrap();
    assert_eq!(groceries.recommended, 1500.50);
    assert_eq!(groceries.limit, 1575.53);
    assert_eq!(analysis.budget.get(SAVINGS).unwrap().limit, 7500.0);

    let cmp = &analysis.comparison[0];
    assert_eq!(cmp.category, "продукты");
    assert_eq!(cmp.actual, 1500.50);
    assert_eq!(cmp.status, BudgetStatus::WithinBudget);
}

#[test]
fn test_totals_are_consistent() {
    let analysis = Analysis::run(mixed(), &Taxonomy::builtin(), &BudgetConfig::default());
    let s = &analysis.stats;

    assert!(close(s.total_income + s.total_expense, s.balance));
    assert_eq!(s.transaction_count, 11);

    let category_sum: f64 = analysis.categories.iter().map(|c| c.sum).sum();
    assert!(close(category_sum, s.total_income + s.total_expense));

    let percent: f64 = analysis
        .categories
        .iter()
        .filter(|c| c.expense_sum < 0.0)
        .map(|c| c.percent)
        .sum();
    assert!((percent - 100.0).abs() < 1e-6, "percent sums to {percent}");

    for w in analysis.categories.windows(2) {
        assert!(w[0].sum.abs() >= w[1].sum.abs());
    }
}

#[test]
fn test_undated_rows_only_leave_time_views() {
    let analysis = Analysis::run(mixed(), &Taxonomy::builtin(), &BudgetConfig::default());

    let other = analysis
        .categories
        .iter()
        .find(|c| c.category == Taxonomy::builtin().other())
        .unwrap();
    assert_eq!(other.count, 2);
    assert_eq!(other.sum, -77.0);

    let dated_expenses: f64 = analysis.monthly.iter().map(|b| b.expenses).sum();
    assert!(close(dated_expenses, analysis.stats.total_expense + 77.0));

    let keys: Vec<&str> = analysis.monthly.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, ["2024-01", "2024-02", "2024-04"]);
    let quarters: Vec<&str> = analysis.quarterly.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(quarters, ["2024-Q1", "2024-Q2"]);

    assert_eq!(analysis.history.get(Taxonomy::builtin().other()), None);
    let other_cmp = analysis.comparison.iter().find(|c| c.category == "другое");
    assert!(other_cmp.is_none());
}

#[test]
fn test_budget_limits_follow_averages() {
    let analysis = Analysis::run(mixed(), &Taxonomy::builtin(), &BudgetConfig::default());

    assert_eq!(analysis.history.get("продукты"), Some(1800.38));
    assert!(analysis.history.top.len() <= 3);
    assert_eq!(analysis.history.top[0].category, "подарки");

    for entry in analysis.budget.entries.iter().filter(|e| e.category != SAVINGS) {
        assert_eq!(entry.limit, round2(entry.recommended * 1.05));
    }
    assert_eq!(analysis.budget.entries.last().unwrap().category, SAVINGS);
    assert_eq!(analysis.comparison.len(), analysis.budget.entries.len());
}

#[test]
fn test_pipeline_is_idempotent() {
    let taxonomy = Taxonomy::builtin();
    let config = BudgetConfig::default();
    let first = Analysis::run(mixed(), &taxonomy, &config);
    let second = Analysis::run(mixed(), &taxonomy, &config);
    assert_eq!(first, second);

    // Feeding already-categorized transactions back in changes nothing.
    let again = Analysis::run(first.transactions.clone(), &taxonomy, &config);
    assert_eq!(again, first);
}

#[test]
fn test_empty_input() {
    let analysis = Analysis::run(Vec::new(), &Taxonomy::builtin(), &BudgetConfig::default());
    assert!(analysis.is_empty());
    assert_eq!(analysis.stats.balance, 0.0);
    assert!(analysis.categories.is_empty());
    assert!(analysis.monthly.is_empty());
    assert_eq!(analysis.budget.entries.len(), 1);
    assert_eq!(analysis.comparison[0].limit, 0.0);
}

#[test]
fn test_result_serializes() {
    let analysis = Analysis::run(scenario(), &Taxonomy::builtin(), &BudgetConfig::default());
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["stats"]["transaction_count"], 2);
    assert_eq!(json["monthly"][0]["key"], "2024-01");
    assert_eq!(json["monthly"][0]["top_categories"][0]["category"], "продукты");
    assert_eq!(json["comparison"][0]["status"], "within-budget");
}
