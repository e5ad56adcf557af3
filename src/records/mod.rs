//! Record types owned by the persistence layer and read by the analytics
//! engine, plus the immutable snapshot bundling them.

pub mod expense;
pub mod fixed_expense;
pub mod goal;
pub mod income;
pub mod migrate;
pub mod saving;
pub mod snapshot;
pub mod target;

pub use expense::{Expense, ExpenseCategory};
pub use fixed_expense::{FixedExpense, FixedExpenseCategory, Frequency};
pub use goal::{Goal, GoalCategory, GoalTask};
pub use income::{Income, IncomeType};
pub use saving::{Saving, SavingType};
pub use snapshot::{Snapshot, CURRENT_SCHEMA_VERSION, MAX_ACTIVE_GOALS};
pub use target::{FinancialTarget, TargetKind, TargetPeriod};

use chrono::NaiveDate;

/// Seam for records carrying a calendar date, used by the time filter and
/// the aggregator.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// Dated records carrying a monetary amount in base units.
pub trait Monetary: Dated {
    fn amount(&self) -> f64;
}
