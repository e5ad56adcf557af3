//! Trend projection: cumulative cash-flow series and fixed-horizon
//! extrapolation from historical daily averages.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::records::{Monetary, Saving, SavingType, Snapshot};
use crate::summary::sum_by_day;

/// Fixed projection horizon.
pub const PROJECTION_DAYS: i64 = 30;

/// One point of a chartable series, in base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// A historical series with its speculative continuation.
///
/// `actual` covers dates on or before the reference date; `future` keeps
/// cumulative totals for future-dated entries on a separate track so they
/// are never merged with history. `projected` extends the last actual
/// value by the average daily rate.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesProjection {
    pub actual: Vec<SeriesPoint>,
    pub future: Vec<SeriesPoint>,
    pub daily_rate: f64,
    pub projected: Vec<SeriesPoint>,
}

/// One chartable row: a date with its cumulative actual and projected
/// values, whichever are defined there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub actual: Option<f64>,
    pub projected: Option<f64>,
}

/// Projections for the three flows plus the derived net figure.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendReport {
    pub income: SeriesProjection,
    pub expenses: SeriesProjection,
    pub savings: SeriesProjection,
    /// Projected income total minus projected expense total at the
    /// horizon.
    pub net_projection: f64,
}

/// Cumulative-to-date series split at the reference date. The future
/// segment continues the running total but stays on its own track.
pub fn cumulative_split<T: Monetary>(
    items: &[T],
    reference: NaiveDate,
) -> (Vec<SeriesPoint>, Vec<SeriesPoint>) {
    let daily = sum_by_day(items);
    let mut actual = Vec::new();
    let mut future = Vec::new();
    let mut running = 0.0;
    for (date, amount) in daily {
        running += amount;
        let point = SeriesPoint {
            date,
            value: running,
        };
        if date <= reference {
            actual.push(point);
        } else {
            future.push(point);
        }
    }
    (actual, future)
}

/// Average amount per day over the past portion of a record list: total
/// of past amounts divided by the inclusive day span between the earliest
/// and latest past dates, clamped to at least one day.
pub fn average_daily_rate<T: Monetary>(items: &[T], reference: NaiveDate) -> f64 {
    let mut total = 0.0;
    let mut earliest: Option<NaiveDate> = None;
    let mut latest: Option<NaiveDate> = None;
    for item in items.iter().filter(|item| item.date() <= reference) {
        total += item.amount();
        earliest = Some(earliest.map_or(item.date(), |date| date.min(item.date())));
        latest = Some(latest.map_or(item.date(), |date| date.max(item.date())));
    }
    match (earliest, latest) {
        (Some(first), Some(last)) => {
            let span = ((last - first).num_days() + 1).max(1);
            total / span as f64
        }
        _ => 0.0,
    }
}

/// Average daily balance growth from explicit balance records only. Needs
/// at least two distinct dated balances, otherwise 0. No carry-forward is
/// applied here.
pub fn savings_growth_rate(savings: &[Saving]) -> f64 {
    let balances: Vec<&Saving> = savings
        .iter()
        .filter(|saving| saving.saving_type == SavingType::Balance)
        .collect();
    let earliest = balances.iter().map(|saving| saving.date).min();
    let latest = balances.iter().map(|saving| saving.date).max();
    let (first, last) = match (earliest, latest) {
        (Some(first), Some(last)) if first != last => (first, last),
        _ => return 0.0,
    };
    // Ties on a shared date resolve to storage order: first record for the
    // earliest date, last record for the latest.
    let first_amount = balances
        .iter()
        .find(|saving| saving.date == first)
        .map(|saving| saving.amount)
        .unwrap_or(0.0);
    let last_amount = balances
        .iter()
        .rev()
        .find(|saving| saving.date == last)
        .map(|saving| saving.amount)
        .unwrap_or(0.0);
    let span = (last - first).num_days().max(1);
    (last_amount - first_amount) / span as f64
}

/// Extends a series by `PROJECTION_DAYS` points from its last known
/// value, rounding each point to the nearest whole base unit.
pub fn project(last_value: f64, daily_rate: f64, from: NaiveDate) -> Vec<SeriesPoint> {
    (1..=PROJECTION_DAYS)
        .map(|day| SeriesPoint {
            date: from + Duration::days(day),
            value: (last_value + daily_rate * day as f64).round(),
        })
        .collect()
}

/// Builds the full trend report for a snapshot as of `reference`.
pub fn trend_report(snapshot: &Snapshot, reference: NaiveDate) -> TrendReport {
    let income = project_cash_flow(&snapshot.incomes, reference);
    let expenses = project_cash_flow(&snapshot.expenses, reference);
    let savings = project_savings(&snapshot.savings, reference);
    let net_projection = horizon_value(&income) - horizon_value(&expenses);
    TrendReport {
        income,
        expenses,
        savings,
        net_projection,
    }
}

fn project_cash_flow<T: Monetary>(items: &[T], reference: NaiveDate) -> SeriesProjection {
    let (actual, future) = cumulative_split(items, reference);
    let daily_rate = average_daily_rate(items, reference);
    let last_value = actual.last().map_or(0.0, |point| point.value);
    let projected = project(last_value, daily_rate, reference);
    SeriesProjection {
        actual,
        future,
        daily_rate,
        projected,
    }
}

fn project_savings(savings: &[Saving], reference: NaiveDate) -> SeriesProjection {
    // Balances are snapshots rather than deltas: keep one point per date,
    // the last stored record winning on ties.
    let mut per_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for saving in savings
        .iter()
        .filter(|saving| saving.saving_type == SavingType::Balance)
    {
        per_date.insert(saving.date, saving.amount);
    }
    let (actual, future): (Vec<SeriesPoint>, Vec<SeriesPoint>) = per_date
        .into_iter()
        .map(|(date, value)| SeriesPoint { date, value })
        .partition(|point| point.date <= reference);
    let daily_rate = savings_growth_rate(savings);
    let last_value = actual.last().map_or(0.0, |point| point.value);
    let projected = project(last_value, daily_rate, reference);
    SeriesProjection {
        actual,
        future,
        daily_rate,
        projected,
    }
}

/// Flattens a projection into the date/actual/projected rows the chart
/// layer consumes. History comes first, then the projected continuation.
pub fn chart_points(series: &SeriesProjection) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = series
        .actual
        .iter()
        .map(|point| ChartPoint {
            date: point.date,
            actual: Some(point.value),
            projected: None,
        })
        .collect();
    points.extend(series.projected.iter().map(|point| ChartPoint {
        date: point.date,
        actual: None,
        projected: Some(point.value),
    }));
    points
}

fn horizon_value(series: &SeriesProjection) -> f64 {
    series
        .projected
        .last()
        .map_or(0.0, |point| point.value)
}
