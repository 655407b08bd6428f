//! Signed session tokens.
//!
//! # Responsibility
//! - Issue HS256-signed tokens carrying the numeric user id.
//! - Validate tokens and decode their user id.
//!
//! # Invariants
//! - Issued tokens expire one hour after issuance.
//! - Validation failures never reveal why a token was rejected.

use crate::auth::{AuthResult, UserId};
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Validity window of an issued token, in seconds.
const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Payload carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    /// Expiry as epoch seconds.
    pub exp: i64,
}

/// Boolean validity answer for the verification contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCheck {
    pub valid: bool,
    pub user_id: Option<UserId>,
}

/// Issues and validates session tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a token for `user_id`, valid for one hour from `issued_at`.
    pub fn issue(&self, user_id: UserId, issued_at: DateTime<Utc>) -> AuthResult<String> {
        let claims = Claims {
            user_id,
            exp: issued_at.timestamp() + TOKEN_TTL_SECS,
        };
        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Validates `token` and returns the user id it carries.
    ///
    /// # Errors
    /// - `Token` for malformed, tampered or expired input.
    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims.user_id)
    }

    /// Verification in the boundary's answer shape: validity plus decoded
    /// user id, with no error detail.
    pub fn check(&self, token: &str) -> TokenCheck {
        match self.verify(token) {
            Ok(user_id) => TokenCheck {
                valid: true,
                user_id: Some(user_id),
            },
            Err(_) => TokenCheck {
                valid: false,
                user_id: None,
            },
        }
    }
}
