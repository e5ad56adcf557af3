//! Period aggregation: bucketed sums, latest-value selection,
//! carry-forward fill, and the monthly summary view model.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};

use crate::period::{month_label, Period};
use crate::records::{Expense, Income, Monetary, Saving, SavingType, Snapshot};

/// Calendar-month bucket key.
pub type MonthKey = (i32, u32);

/// One row of the monthly summary, covering a single calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub income: f64,
    pub expenses: f64,
    /// Monthly equivalent of active fixed expenses; identical across rows.
    pub fixed: f64,
    /// Latest observed balance within the month, if any.
    pub savings_balance: Option<f64>,
    pub net: f64,
}

/// Income and expense totals for a filtered window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PeriodTotals {
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

/// Sums record amounts per exact calendar day. Days without records are
/// absent from the map.
pub fn sum_by_day<T: Monetary>(items: &[T]) -> BTreeMap<NaiveDate, f64> {
    let mut buckets = BTreeMap::new();
    for item in items {
        *buckets.entry(item.date()).or_insert(0.0) += item.amount();
    }
    buckets
}

/// Sums record amounts per calendar month.
pub fn sum_by_month<T: Monetary>(items: &[T]) -> BTreeMap<MonthKey, f64> {
    let mut buckets = BTreeMap::new();
    for item in items {
        *buckets.entry(month_key(item.date())).or_insert(0.0) += item.amount();
    }
    buckets
}

/// Amount of the latest-dated record, ties resolving to the record stored
/// last.
pub fn latest_amount<'a, T, I>(items: I) -> Option<f64>
where
    T: Monetary + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut best: Option<(NaiveDate, f64)> = None;
    for item in items {
        if best.map_or(true, |(date, _)| item.date() >= date) {
            best = Some((item.date(), item.amount()));
        }
    }
    best.map(|(_, amount)| amount)
}

/// Fills an ascending date axis with the most recent balance on or before
/// each date. Dates preceding the first balance stay unset.
pub fn carry_forward(axis: &[NaiveDate], balances: &BTreeMap<NaiveDate, f64>) -> Vec<Option<f64>> {
    axis.iter()
        .map(|date| balances.range(..=date).next_back().map(|(_, value)| *value))
        .collect()
}

/// Sum of monthly equivalents over currently active fixed expenses. The
/// figure does not vary by month.
pub fn fixed_monthly_total(snapshot: &Snapshot) -> f64 {
    snapshot
        .active_fixed_expenses()
        .map(|fixed| fixed.monthly_equivalent())
        .sum()
}

/// Builds the monthly summary, most recent month first.
///
/// Every month appearing in any of the three record lists is seeded, so a
/// month with income but no expenses reports 0 expenses rather than being
/// dropped. Net flow here is `income - expenses - fixed`; the
/// period-filtered totals in [`period_totals`] intentionally use the
/// simpler `income - expenses`.
pub fn monthly_summaries(snapshot: &Snapshot) -> Vec<MonthSummary> {
    let expense_sums = sum_by_month(&snapshot.expenses);
    let income_sums = sum_by_month(&snapshot.incomes);
    let balances: Vec<&Saving> = snapshot
        .savings
        .iter()
        .filter(|saving| saving.saving_type == SavingType::Balance)
        .collect();

    let mut months: BTreeSet<MonthKey> = BTreeSet::new();
    months.extend(expense_sums.keys().copied());
    months.extend(income_sums.keys().copied());
    months.extend(balances.iter().map(|saving| month_key(saving.date)));

    let fixed = fixed_monthly_total(snapshot);

    months
        .into_iter()
        .rev()
        .map(|(year, month)| {
            let income = income_sums.get(&(year, month)).copied().unwrap_or(0.0);
            let expenses = expense_sums.get(&(year, month)).copied().unwrap_or(0.0);
            let savings_balance = latest_amount(
                balances
                    .iter()
                    .copied()
                    .filter(|saving| month_key(saving.date) == (year, month)),
            );
            MonthSummary {
                year,
                month,
                label: format!("{} {}", month_label(month), year),
                income,
                expenses,
                fixed,
                savings_balance,
                net: income - expenses - fixed,
            }
        })
        .collect()
}

/// Income/expense totals restricted to the active period, with
/// `net = income - expenses`.
pub fn period_totals(
    expenses: &[Expense],
    incomes: &[Income],
    period: Option<&Period>,
) -> PeriodTotals {
    let income: f64 = incomes
        .iter()
        .filter(|income| crate::period::is_in_period(income.date, period))
        .map(|income| income.amount)
        .sum();
    let spent: f64 = expenses
        .iter()
        .filter(|expense| crate::period::is_in_period(expense.date, period))
        .map(|expense| expense.amount)
        .sum();
    PeriodTotals {
        income,
        expenses: spent,
        net: income - spent,
    }
}

pub(crate) fn month_key(date: NaiveDate) -> MonthKey {
    (date.year(), date.month())
}
