//! Club model

use serde::{Deserialize, Serialize};
use crate::models::document::{require, Entity};
use crate::utils::errors::{BdeError, Result};
use crate::utils::helpers::{is_valid_whatsapp, whatsapp_link};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub leader_name: String,
    #[serde(default)]
    pub leader_whatsapp: String,
    #[serde(default)]
    pub activities: Vec<String>,
}

impl Club {
    /// wa.me link to the club leader, when a contact is set
    pub fn leader_link(&self) -> Option<String> {
        (!self.leader_whatsapp.is_empty()).then(|| whatsapp_link(&self.leader_whatsapp))
    }
}

impl Entity for Club {
    const COLLECTION: &'static str = "clubs";

    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("leaderName", &self.leader_name)?;
        if !self.leader_whatsapp.is_empty() && !is_valid_whatsapp(&self.leader_whatsapp) {
            return Err(BdeError::InvalidInput(format!(
                "Invalid WhatsApp contact: {}", self.leader_whatsapp
            )));
        }
        if self.activities.iter().any(|activity| activity.trim().is_empty()) {
            return Err(BdeError::InvalidInput("Activities cannot be blank".to_string()));
        }
        Ok(())
    }
}
