//! Keeps the monthly savings target and the goal-type saving record
//! numerically consistent.
//!
//! The two directions are separate commands that never invoke each other,
//! so no reentrancy guard is needed: the caller picks the command matching
//! the side the user edited, applies the returned upsert, and stops. The
//! active display currency is an explicit parameter rather than ambient
//! state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::{self, Currency};
use crate::records::{Saving, SavingType, Snapshot, TargetKind, TargetPeriod};

/// Mutation description for a goal-type saving: update `id` when present,
/// otherwise create a new record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingUpsert {
    pub id: Option<Uuid>,
    pub date: NaiveDate,
    /// Desired-savings amount in base units.
    pub amount: f64,
}

/// Mutation description for a financial target, keyed by
/// (kind, period, currency).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetUpsert {
    pub id: Option<Uuid>,
    pub kind: TargetKind,
    pub period: TargetPeriod,
    pub currency: Currency,
    /// Target amount expressed in `currency`.
    pub amount: f64,
}

/// The user edited or created the monthly savings target in `currency`.
///
/// Converts the amount to base units and directs it at the latest
/// goal-type saving (date ties resolve to storage order), or at a new
/// record dated today when none exists. Never triggers a target write.
pub fn apply_target_edit(
    snapshot: &Snapshot,
    amount: f64,
    currency: Currency,
    today: NaiveDate,
) -> SavingUpsert {
    let amount_base = currency::to_base(amount, currency);
    match snapshot.latest_goal_saving() {
        Some(saving) => SavingUpsert {
            id: Some(saving.id),
            date: saving.date,
            amount: amount_base,
        },
        None => SavingUpsert {
            id: None,
            date: today,
            amount: amount_base,
        },
    }
}

/// The user created or edited a saving record.
///
/// Goal-type savings propagate to the monthly savings target for the
/// active display currency; balance savings and non-monthly targets are
/// untouched. Never triggers a saving write.
pub fn apply_saving_edit(
    snapshot: &Snapshot,
    saving: &Saving,
    currency: Currency,
) -> Option<TargetUpsert> {
    if saving.saving_type != SavingType::Goal {
        return None;
    }
    let existing = snapshot.find_target(TargetKind::Savings, TargetPeriod::Monthly, currency);
    Some(TargetUpsert {
        id: existing.map(|target| target.id),
        kind: TargetKind::Savings,
        period: TargetPeriod::Monthly,
        currency,
        amount: currency::from_base(saving.amount, currency),
    })
}
