//! Roster entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::models::document::{require, Entity};
use crate::models::student::CLASS_LEVELS;
use crate::utils::errors::{BdeError, Result};

/// Field holding the club or atelier id, used for roster queries
pub const PARENT_FIELD: &str = "parentId";

/// A student signed up to a club or an atelier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub parent_id: String,
    pub student_name: String,
    pub level: String,
    pub registered_at: DateTime<Utc>,
}

impl Registration {
    /// Sign-up stamped with the current time
    pub fn new(parent_id: impl Into<String>, student_name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            parent_id: parent_id.into(),
            student_name: student_name.into(),
            level: level.into(),
            registered_at: Utc::now(),
        }
    }
}

impl Entity for Registration {
    const COLLECTION: &'static str = "club_registrations";

    fn validate(&self) -> Result<()> {
        require("parentId", &self.parent_id)?;
        require("studentName", &self.student_name)?;
        if !CLASS_LEVELS.contains(&self.level.as_str()) {
            return Err(BdeError::InvalidInput(format!("Unknown class level: {}", self.level)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_field_matches_serialization() {
        let value = serde_json::to_value(Registration::new("club-1", "Koné Awa", "Prépa 1")).unwrap();
        assert_eq!(value[PARENT_FIELD], "club-1");
        assert!(value.get("registeredAt").is_some());
    }
}
