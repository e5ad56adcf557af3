//! Hierarchical time windows (year → quarter → month → week) and the
//! record filter built on them.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::records::Dated;

/// Level of a period within the year tree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PeriodKind {
    Year,
    Quarter,
    Month,
    Week,
}

/// A named, inclusive calendar window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Period {
    pub kind: PeriodKind,
    pub year: i32,
    /// Quarter (1-4), month (1-12), or week-of-month ordinal; absent for
    /// year periods.
    pub ordinal: Option<u32>,
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Builds a period with validated inclusive bounds.
    pub fn new(
        kind: PeriodKind,
        year: i32,
        ordinal: Option<u32>,
        label: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, CoreError> {
        if end < start {
            return Err(CoreError::InvalidPeriod(format!(
                "end {} precedes start {}",
                end, start
            )));
        }
        Ok(Self {
            kind,
            year,
            ordinal,
            label: label.into(),
            start,
            end,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A period with its sub-periods, forming the selectable tree for a year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodNode {
    pub period: Period,
    pub children: Vec<PeriodNode>,
}

/// True when no filter is active or the date falls inside the window.
pub fn is_in_period(date: NaiveDate, period: Option<&Period>) -> bool {
    match period {
        None => true,
        Some(period) => period.contains(date),
    }
}

/// Selection semantics of the period tree: re-selecting the active period
/// clears the filter, any other period replaces it outright.
pub fn toggle(selected: Option<Period>, clicked: Period) -> Option<Period> {
    match selected {
        Some(current) if current == clicked => None,
        _ => Some(clicked),
    }
}

/// Restricts a record slice to the active period, if any.
pub fn filter_in_period<'a, T: Dated>(items: &'a [T], period: Option<&Period>) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| is_in_period(item.date(), period))
        .collect()
}

/// Builds the fixed year → quarter → month → week tree.
pub fn period_tree(year: i32) -> PeriodNode {
    let quarters = (1..=4u32)
        .map(|quarter| {
            let months = quarter_months(quarter)
                .map(|month| {
                    let weeks = weeks_of_month(year, month)
                        .into_iter()
                        .map(|week| PeriodNode {
                            period: week,
                            children: Vec::new(),
                        })
                        .collect();
                    PeriodNode {
                        period: month_period(year, month),
                        children: weeks,
                    }
                })
                .collect();
            PeriodNode {
                period: quarter_period(year, quarter),
                children: months,
            }
        })
        .collect();
    PeriodNode {
        period: year_period(year),
        children: quarters,
    }
}

pub fn year_period(year: i32) -> Period {
    Period {
        kind: PeriodKind::Year,
        year,
        ordinal: None,
        label: year.to_string(),
        start: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
    }
}

pub fn quarter_period(year: i32, quarter: u32) -> Period {
    let first_month = (quarter - 1) * 3 + 1;
    let last_month = first_month + 2;
    Period {
        kind: PeriodKind::Quarter,
        year,
        ordinal: Some(quarter),
        label: format!("Q{} {}", quarter, year),
        start: NaiveDate::from_ymd_opt(year, first_month, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(year, last_month, days_in_month(year, last_month)).unwrap(),
    }
}

pub fn month_period(year: i32, month: u32) -> Period {
    Period {
        kind: PeriodKind::Month,
        year,
        ordinal: Some(month),
        label: format!("{} {}", month_label(month), year),
        start: NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)).unwrap(),
    }
}

/// Non-overlapping 7-day windows counted from the 1st; the final week is
/// truncated at the month's last day.
pub fn weeks_of_month(year: i32, month: u32) -> Vec<Period> {
    let last_day = days_in_month(year, month);
    let mut weeks = Vec::new();
    let mut start_day = 1u32;
    let mut ordinal = 1u32;
    while start_day <= last_day {
        let end_day = (start_day + 6).min(last_day);
        weeks.push(Period {
            kind: PeriodKind::Week,
            year,
            ordinal: Some(ordinal),
            label: format!("{} {}-{}", month_label(month), start_day, end_day),
            start: NaiveDate::from_ymd_opt(year, month, start_day).unwrap(),
            end: NaiveDate::from_ymd_opt(year, month, end_day).unwrap(),
        });
        start_day += 7;
        ordinal += 1;
    }
    weeks
}

fn quarter_months(quarter: u32) -> impl Iterator<Item = u32> {
    let first = (quarter - 1) * 3 + 1;
    first..=first + 2
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    (first_next - Duration::days(1)).day()
}

pub(crate) fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}
