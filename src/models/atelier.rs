//! Workshop (atelier) model

use serde::{Deserialize, Serialize};
use crate::models::document::{require, Entity, Orderable};
use crate::utils::errors::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Atelier {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Entity for Atelier {
    const COLLECTION: &'static str = "ateliers";

    fn validate(&self) -> Result<()> {
        require("name", &self.name)
    }

    fn display_order(&self) -> Option<u32> {
        self.order
    }
}

impl Orderable for Atelier {
    fn set_display_order(&mut self, order: Option<u32>) {
        self.order = order;
    }
}
