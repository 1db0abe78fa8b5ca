//! Back-office authentication service
//!
//! Staff log in with the configured credentials and receive an
//! [`AdminSession`]: a signed token with an explicit expiry that protected
//! operations check instead of a global logged-in flag.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::config::AuthConfig;
use crate::utils::errors::{BdeError, Result};

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// A logged-in staff member
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Exchange credentials for a session
    pub fn login(&self, username: &str, password: &str) -> Result<AdminSession> {
        self.login_at(username, password, Utc::now())
    }

    /// Same as [`login`](Self::login) with an explicit clock
    pub fn login_at(&self, username: &str, password: &str, now: DateTime<Utc>) -> Result<AdminSession> {
        let username_ok = constant_time_eq(username.trim().as_bytes(), self.config.username.as_bytes());
        let password_ok = constant_time_eq(password.as_bytes(), self.config.password.as_bytes());
        if !(username_ok && password_ok) || self.config.password.is_empty() {
            warn!(username = username, "Rejected back-office login");
            return Err(BdeError::Authentication("Invalid username or password".to_string()));
        }

        let expires_at = Duration::try_minutes(self.config.session_ttl_minutes)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| BdeError::Config("Session TTL out of range".to_string()))?;
        let claims = SessionClaims {
            sub: self.config.username.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        info!(username = %claims.sub, expires_at = %expires_at, "Back-office login");
        Ok(AdminSession {
            username: claims.sub,
            token,
            issued_at: now,
            expires_at,
        })
    }

    /// Check a token's signature and expiry
    pub fn verify(&self, token: &str) -> Result<SessionClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        match decode::<SessionClaims>(token, &self.decoding_key, &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => Err(BdeError::SessionExpired),
            Err(e) => Err(e.into()),
        }
    }

    /// Rebuild a session from a token presented by the client
    pub fn resume(&self, token: &str) -> Result<AdminSession> {
        let claims = self.verify(token)?;
        let issued_at = timestamp(claims.iat)?;
        let expires_at = timestamp(claims.exp)?;
        Ok(AdminSession {
            username: claims.sub,
            token: token.to_string(),
            issued_at,
            expires_at,
        })
    }

    /// End a session; the caller drops every copy of it
    pub fn logout(&self, session: AdminSession) {
        info!(username = %session.username, "Back-office logout");
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("username", &self.config.username)
            .field("session_ttl_minutes", &self.config.session_ttl_minutes)
            .finish_non_exhaustive()
    }
}

fn timestamp(seconds: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| BdeError::Authentication("Invalid session timestamp".to_string()))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
