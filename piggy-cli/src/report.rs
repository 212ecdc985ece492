//! Console rendering of an [`Analysis`].

use piggy_finance::Analysis;
use piggy_finance::timeline::TimeBucket;
use std::fmt::{self, Write};

const RULE_WIDTH: usize = 70;

pub fn render_text(analysis: &Analysis) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, analysis)?;
    Ok(out)
}

fn write_report(out: &mut String, a: &Analysis) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "Финансовый отчёт")?;
    writeln!(out, "{rule}")?;

    let s = &a.stats;
    writeln!(out, "Доходы:  {:.2}", s.total_income)?;
    writeln!(out, "Расходы: {:.2}", s.total_expense.abs())?;
    writeln!(out, "Баланс:  {:.2}", s.balance)?;
    writeln!(
        out,
        "Операций: {} (доходов: {}, расходов: {})",
        s.transaction_count, s.income_transactions, s.expense_transactions
    )?;

    writeln!(out, "\nРасходы по категориям:")?;
    for c in &a.categories {
        writeln!(out, "  {}: {:.2} руб. ({:.1}%)", c.category, c.sum.abs(), c.percent)?;
    }

    writeln!(out, "\nАнализ по месяцам:")?;
    write_buckets(out, &a.monthly)?;

    writeln!(out, "\nАнализ по кварталам:")?;
    write_buckets(out, &a.quarterly)?;

    writeln!(out, "\nРекомендации (средние траты в месяц):")?;
    for avg in &a.history.top {
        writeln!(out, "  {}: {:.2} руб.", avg.category, avg.average)?;
    }

    writeln!(out, "\nСравнение с бюджетом:")?;
    for c in &a.comparison {
        writeln!(
            out,
            "  {}: потрачено {:.2} / лимит {:.2} → {}",
            c.category,
            c.actual,
            c.limit,
            c.status.label()
        )?;
    }
    Ok(())
}

fn write_buckets(out: &mut String, buckets: &[TimeBucket]) -> fmt::Result {
    for b in buckets {
        let top = b
            .top_categories
            .iter()
            .map(|c| format!("{} ({})", c.category, c.count))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "  {}: доход {:.2} | расход {:.2} → топ: {}",
            b.key,
            b.income,
            b.expenses.abs(),
            top
        )?;
    }
    Ok(())
}
