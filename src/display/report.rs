//! Report formatting for terminal output

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{BudgetRecord, BudgetWarning, Money, Period, Transaction};
use crate::reports::SummaryReport;
use crate::services::{BudgetSet, ExpenseRecorded};

use super::theme::Theme;

/// Reminder appended to a summary when 10% or less of the budget is left
pub const REMINDER: &str = "REMINDER: You have 10% or less of your original budget left!";

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Expenses")]
    count: usize,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a date with the configured strftime pattern, ISO if it is invalid
pub fn format_date(date: NaiveDate, settings: &Settings) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(&settings.date_format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Shown in place of a total that does not fit in cents
const OUT_OF_RANGE: &str = "out of range";

fn format_optional_money(amount: Option<Money>, settings: &Settings) -> String {
    amount.map_or_else(|| OUT_OF_RANGE.to_string(), |m| settings.format_money(m))
}

/// Confirmation after setting a budget
pub fn format_budget_set(confirmation: &BudgetSet, settings: &Settings) -> String {
    format!(
        "Budget of {} set for {}.",
        settings.format_money(confirmation.budget),
        confirmation.period
    )
}

/// Confirmation after recording an expense
pub fn format_expense_recorded(
    recorded: &ExpenseRecorded,
    settings: &Settings,
    theme: &Theme,
) -> String {
    match recorded.remaining {
        Some(remaining) => format!(
            "Expense added. Remaining budget: {}",
            theme.credit(&settings.format_money(remaining))
        ),
        None => format!(
            "Expense added. No budget is set for {}, so the remaining balance could not be updated.",
            recorded.period
        ),
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format a budget warning, with the remaining amount on its own line
pub fn format_warning(warning: &BudgetWarning, settings: &Settings, theme: &Theme) -> String {
    match warning {
        BudgetWarning::Exceeded => {
            theme.warning("WARNING: You have exceeded your budget for this month!")
        }
        BudgetWarning::NearLimit { remaining } => format!(
            "{}\nRemaining: {}",
            theme.warning("WARNING: You are within 10% of your budget limit for this month!"),
            theme.debit(&settings.format_money(*remaining))
        ),
    }
}

/// Budget / spent / remaining lines for a period
pub fn format_budget_status(
    period: Period,
    record: Option<&BudgetRecord>,
    settings: &Settings,
    theme: &Theme,
) -> String {
    let Some(record) = record else {
        return theme.warning(&format!("Budget hasn't been set for {}.", period));
    };

    let remaining = settings.format_money(record.remaining);
    let remaining = if record.remaining.is_negative() {
        theme.debit(&remaining)
    } else {
        theme.credit(&remaining)
    };

    format!(
        "Budget for {}\n  Budget:    {}\n  Spent:     {}\n  Remaining: {}",
        period,
        settings.format_money(record.budget),
        theme.debit(&format_optional_money(record.spent(), settings)),
        remaining
    )
}

/// Full expense summary: category table, totals and the 10% reminder
pub fn format_summary(report: &SummaryReport, settings: &Settings, theme: &Theme) -> String {
    let mut output = theme.header(&format!("Expense Summary for {}", report.period));
    output.push('\n');

    if report.category_totals.is_empty() {
        output.push_str("No expenses recorded yet.\n");
    } else {
        let rows: Vec<CategoryRow> = report
            .category_totals
            .iter()
            .map(|c| CategoryRow {
                category: c.category.clone(),
                count: c.transaction_count,
                amount: settings.format_money(c.total),
                share: format_percentage(report.category_percentage(c)),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
        output.push_str(&table.to_string());
        output.push('\n');
    }

    output.push_str(&format!(
        "\nTotal Expenses: {}\n",
        theme.debit(&settings.format_money(report.total_expenses))
    ));
    output.push_str(&format!(
        "Remaining Budget: {}\n",
        theme.credit(&settings.format_money(report.remaining_budget))
    ));

    if report.reminder_present {
        output.push_str(&theme.warning(REMINDER));
        output.push('\n');
    }

    output
}

/// Table of transactions in entry order
pub fn format_transactions(
    period: Period,
    transactions: &[Transaction],
    settings: &Settings,
) -> String {
    if transactions.is_empty() {
        return format!("No expenses recorded for {}.", period);
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|t| TransactionRow {
            date: format_date(t.date, settings),
            category: t.category.clone(),
            amount: settings.format_money(t.amount),
        })
        .collect();

    let total = Money::checked_sum(transactions.iter().map(|t| &t.amount));

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()));

    format!(
        "Expenses for {}\n{}\n{} expense(s), total {}",
        period,
        table,
        transactions.len(),
        format_optional_money(total, settings)
    )
}
