use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Dated, Monetary};

/// A one-time expense entry, dated to a calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    /// Amount in base currency units.
    pub amount: f64,
    #[serde(default)]
    pub category: ExpenseCategory,
    /// Marks unconfirmed or future entries awaiting review.
    #[serde(default)]
    pub needs_check: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<Uuid>,
}

impl Expense {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            description: description.into(),
            amount,
            category: ExpenseCategory::default(),
            needs_check: false,
            goal_id: None,
            task_id: None,
        }
    }

    /// Builds the expense auto-created when a goal task is funded.
    pub fn for_goal(
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        goal_id: Uuid,
        task_id: Option<Uuid>,
    ) -> Self {
        let mut expense = Self::new(date, description, amount);
        expense.goal_id = Some(goal_id);
        expense.task_id = task_id;
        expense
    }
}

impl Dated for Expense {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Monetary for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Categories for one-time expenses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExpenseCategory {
    Housing,
    Groceries,
    Transport,
    Health,
    Entertainment,
    Clothing,
    Education,
    Misc,
}

impl ExpenseCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Groceries => "Groceries",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Clothing => "Clothing",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Misc => "Misc",
        }
    }
}

impl Default for ExpenseCategory {
    fn default() -> Self {
        ExpenseCategory::Misc
    }
}
