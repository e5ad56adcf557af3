use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A life or financial goal, with optional task lists whose entries may be
/// funded by auto-created expenses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub category: GoalCategory,
    #[serde(default)]
    pub pre_tasks: Vec<GoalTask>,
    #[serde(default)]
    pub post_tasks: Vec<GoalTask>,
    #[serde(default)]
    pub post_dreams: Vec<GoalTask>,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            deadline: None,
            completed: false,
            category: GoalCategory::default(),
            pre_tasks: Vec::new(),
            post_tasks: Vec::new(),
            post_dreams: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// A goal counts toward the active-goal limit once it has a title and
    /// is not completed.
    pub fn is_active(&self) -> bool {
        !self.completed && !self.title.trim().is_empty()
    }
}

/// A step attached to a goal, optionally linked to the expense that
/// funds it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTask {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_id: Option<Uuid>,
}

impl GoalTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            done: false,
            expense_id: None,
        }
    }
}

/// Broad grouping used when goals are listed and decomposed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GoalCategory {
    Finance,
    Career,
    Health,
    Relationships,
    Personal,
}

impl Default for GoalCategory {
    fn default() -> Self {
        GoalCategory::Personal
    }
}
