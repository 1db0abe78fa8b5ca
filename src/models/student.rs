//! Student model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::models::document::{require, Entity};
use crate::utils::errors::{BdeError, Result};

/// Class levels offered by the school
pub const CLASS_LEVELS: [&str; 7] = [
    "Prépa 1",
    "Prépa 2",
    "Licence 1",
    "Licence 2",
    "Licence 3",
    "Master 1",
    "Master 2",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub name: String,
    pub level: String,
    pub has_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,
}

impl Student {
    /// A new, unpaid student
    pub fn new(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
            has_paid: false,
            payment_date: None,
            amount: None,
        }
    }

    /// Record the dues payment
    pub fn mark_paid(&mut self, amount: u32, date: NaiveDate) {
        self.has_paid = true;
        self.amount = Some(amount);
        self.payment_date = Some(date);
    }

    /// Cancel the payment, back to the unpaid state
    pub fn mark_unpaid(&mut self) {
        self.has_paid = false;
        self.amount = None;
        self.payment_date = None;
    }

    /// Flip between paid and unpaid
    pub fn toggle_payment(&mut self, amount: u32, date: NaiveDate) {
        if self.has_paid {
            self.mark_unpaid();
        } else {
            self.mark_paid(amount, date);
        }
    }
}

impl Entity for Student {
    const COLLECTION: &'static str = "students";

    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        if !CLASS_LEVELS.contains(&self.level.as_str()) {
            return Err(BdeError::InvalidInput(format!("Unknown class level: {}", self.level)));
        }
        Ok(())
    }
}
