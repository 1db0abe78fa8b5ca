//! Tutoring mentor model

use serde::{Deserialize, Serialize};
use crate::models::document::{require, Entity, Orderable};
use crate::utils::errors::{BdeError, Result};
use crate::utils::helpers::is_valid_whatsapp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub name: String,
    pub subject: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Entity for Mentor {
    const COLLECTION: &'static str = "mentors";

    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("subject", &self.subject)?;
        if !self.whatsapp.is_empty() && !is_valid_whatsapp(&self.whatsapp) {
            return Err(BdeError::InvalidInput(format!("Invalid WhatsApp contact: {}", self.whatsapp)));
        }
        Ok(())
    }

    fn display_order(&self) -> Option<u32> {
        self.order
    }
}

impl Orderable for Mentor {
    fn set_display_order(&mut self, order: Option<u32>) {
        self.order = order;
    }
}
