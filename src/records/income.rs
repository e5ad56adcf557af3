use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Dated, Monetary};

/// An income entry with an independent lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    pub id: Uuid,
    pub date: NaiveDate,
    pub source: String,
    /// Amount in base currency units.
    pub amount: f64,
    #[serde(default)]
    pub income_type: IncomeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Income {
    pub fn new(date: NaiveDate, source: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            source: source.into(),
            amount,
            income_type: IncomeType::default(),
            note: None,
        }
    }
}

impl Dated for Income {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Monetary for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Distinguishes money received from money earned but not yet paid out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IncomeType {
    Cash,
    Accrued,
}

impl Default for IncomeType {
    fn default() -> Self {
        IncomeType::Cash
    }
}
