//! Authentication middleware
//!
//! Guards protected back-office operations behind a live admin session.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use crate::services::auth::{AdminSession, AuthService, SessionClaims};
use crate::utils::errors::{BdeError, Result};

/// Route guard for admin pages
#[derive(Debug, Clone)]
pub struct SessionGuard {
    auth: AuthService,
}

impl SessionGuard {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }

    /// Let the request through only with an unexpired, authentic session
    pub fn require(&self, session: Option<&AdminSession>) -> Result<SessionClaims> {
        self.require_at(session, Utc::now())
    }

    pub fn require_at(&self, session: Option<&AdminSession>, now: DateTime<Utc>) -> Result<SessionClaims> {
        let Some(session) = session else {
            debug!("Protected page requested without a session");
            return Err(BdeError::Authentication("Login required".to_string()));
        };

        if session.is_expired_at(now) {
            warn!(username = %session.username, expires_at = %session.expires_at, "Session expired");
            return Err(BdeError::SessionExpired);
        }

        let claims = self.auth.verify(&session.token)?;
        if claims.sub != session.username {
            warn!(username = %session.username, "Session token does not match its user");
            return Err(BdeError::Authentication("Session token mismatch".to_string()));
        }

        Ok(claims)
    }
}
