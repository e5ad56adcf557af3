use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Dated, Monetary};

/// A savings entry. The amount is a balance snapshot on that date, not a
/// delta; only the latest entry matters for balance queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Saving {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Balance in base currency units.
    pub amount: f64,
    #[serde(default)]
    pub saving_type: SavingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Saving {
    pub fn new(date: NaiveDate, amount: f64, saving_type: SavingType) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            saving_type,
            note: None,
        }
    }
}

impl Dated for Saving {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Monetary for Saving {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// A `Balance` saving is an observed balance; a `Goal` saving is the
/// desired balance and participates in target synchronization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SavingType {
    Balance,
    Goal,
}

impl Default for SavingType {
    fn default() -> Self {
        SavingType::Balance
    }
}
