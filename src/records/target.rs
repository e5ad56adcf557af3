use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::Currency;

/// A per-period financial target. At most one exists per
/// (kind, period, currency) triple; updates find-or-create against that
/// composite key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialTarget {
    pub id: Uuid,
    pub kind: TargetKind,
    /// Amount in base currency units, positive by caller contract.
    pub amount: f64,
    /// The currency the target was defined in, kept for display fidelity.
    pub currency: Currency,
    pub period: TargetPeriod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FinancialTarget {
    pub fn new(kind: TargetKind, amount: f64, currency: Currency, period: TargetPeriod) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            currency,
            period,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Which cash-flow direction the target constrains.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Income,
    Expense,
    Savings,
}

/// The cadence a target applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TargetPeriod {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}
