use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::Currency;

use super::{
    expense::Expense,
    fixed_expense::FixedExpense,
    goal::Goal,
    income::Income,
    saving::{Saving, SavingType},
    target::{FinancialTarget, TargetKind, TargetPeriod},
};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Cap on simultaneously active titled goals, enforced at creation.
pub const MAX_ACTIVE_GOALS: usize = 10;

/// A consistent point-in-time view of every record collection.
///
/// The analytics functions only ever read a snapshot; mutations are owned
/// by the persistence layer, which is expected to rebuild or refresh the
/// snapshot after every change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub incomes: Vec<Income>,
    #[serde(default)]
    pub savings: Vec<Saving>,
    #[serde(default)]
    pub fixed_expenses: Vec<FixedExpense>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub targets: Vec<FinancialTarget>,
    /// The single top-priority goal, if any.
    #[serde(default)]
    pub priority_goal: Option<Uuid>,
    #[serde(default = "Snapshot::schema_version_default")]
    pub schema_version: u8,
}

impl Snapshot {
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            incomes: Vec::new(),
            savings: Vec::new(),
            fixed_expenses: Vec::new(),
            goals: Vec::new(),
            targets: Vec::new(),
            priority_goal: None,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn active_fixed_expenses(&self) -> impl Iterator<Item = &FixedExpense> {
        self.fixed_expenses.iter().filter(|fixed| fixed.is_active)
    }

    pub fn active_goal_count(&self) -> usize {
        self.goals.iter().filter(|goal| goal.is_active()).count()
    }

    /// Whether another goal may be created without breaking the
    /// active-goal cap. Existing overflow is never pruned retroactively.
    pub fn can_add_goal(&self) -> bool {
        self.active_goal_count() < MAX_ACTIVE_GOALS
    }

    /// The most recent observed balance. Date ties resolve to the record
    /// stored last.
    pub fn latest_balance(&self) -> Option<f64> {
        latest_of_type(&self.savings, SavingType::Balance).map(|saving| saving.amount)
    }

    /// The most recent goal-type saving, resolving date ties to the record
    /// stored last.
    pub fn latest_goal_saving(&self) -> Option<&Saving> {
        latest_of_type(&self.savings, SavingType::Goal)
    }

    pub fn find_target(
        &self,
        kind: TargetKind,
        period: TargetPeriod,
        currency: Currency,
    ) -> Option<&FinancialTarget> {
        self.targets.iter().find(|target| {
            target.kind == kind && target.period == period && target.currency == currency
        })
    }

    pub fn goal(&self, id: Uuid) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

fn latest_of_type(savings: &[Saving], saving_type: SavingType) -> Option<&Saving> {
    let mut best: Option<&Saving> = None;
    for saving in savings.iter().filter(|s| s.saving_type == saving_type) {
        if best.map_or(true, |current| saving.date >= current.date) {
            best = Some(saving);
        }
    }
    best
}
