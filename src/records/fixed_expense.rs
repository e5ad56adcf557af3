use serde::{Deserialize, Serialize};
use uuid::Uuid;

const WEEKS_PER_MONTH: f64 = 4.33;

/// A recurring obligation. Its monthly equivalent is always derived,
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedExpense {
    pub id: Uuid,
    pub description: String,
    /// Recurring amount in base currency units.
    pub amount: f64,
    pub frequency: Frequency,
    #[serde(default = "FixedExpense::active_default")]
    pub is_active: bool,
    #[serde(default)]
    pub category: FixedExpenseCategory,
}

impl FixedExpense {
    pub fn new(description: impl Into<String>, amount: f64, frequency: Frequency) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            frequency,
            is_active: true,
            category: FixedExpenseCategory::default(),
        }
    }

    /// The amount normalized to one calendar month.
    pub fn monthly_equivalent(&self) -> f64 {
        self.frequency.monthly_equivalent(self.amount)
    }

    fn active_default() -> bool {
        true
    }
}

/// Billing cadence of a fixed expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Frequency {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    /// Normalizes an amount billed at this cadence to a monthly figure.
    pub fn monthly_equivalent(&self, amount: f64) -> f64 {
        match self {
            Frequency::Weekly => amount * WEEKS_PER_MONTH,
            Frequency::Monthly => amount,
            Frequency::Quarterly => amount / 3.0,
            Frequency::Yearly => amount / 12.0,
        }
    }
}

/// Categories for recurring bills.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FixedExpenseCategory {
    Housing,
    Utilities,
    Insurance,
    Subscriptions,
    Transport,
    Other,
}

impl FixedExpenseCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FixedExpenseCategory::Housing => "Housing",
            FixedExpenseCategory::Utilities => "Utilities",
            FixedExpenseCategory::Insurance => "Insurance",
            FixedExpenseCategory::Subscriptions => "Subscriptions",
            FixedExpenseCategory::Transport => "Transport",
            FixedExpenseCategory::Other => "Other",
        }
    }
}

impl Default for FixedExpenseCategory {
    fn default() -> Self {
        FixedExpenseCategory::Other
    }
}
