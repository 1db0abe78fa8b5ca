//! Team member model

use serde::{Deserialize, Serialize};
use crate::models::document::{require, Entity};
use crate::utils::errors::{BdeError, Result};
use crate::utils::helpers::{is_valid_image_source, is_valid_whatsapp, whatsapp_link};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub whatsapp: String,
}

impl Member {
    pub fn contact_link(&self) -> Option<String> {
        (!self.whatsapp.is_empty()).then(|| whatsapp_link(&self.whatsapp))
    }
}

impl Entity for Member {
    const COLLECTION: &'static str = "members";

    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("role", &self.role)?;
        if !self.photo_url.is_empty() && !is_valid_image_source(&self.photo_url) {
            return Err(BdeError::InvalidInput("Invalid photo URL".to_string()));
        }
        if !self.whatsapp.is_empty() && !is_valid_whatsapp(&self.whatsapp) {
            return Err(BdeError::InvalidInput(format!("Invalid WhatsApp contact: {}", self.whatsapp)));
        }
        Ok(())
    }
}
