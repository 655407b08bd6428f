//! Authentication boundary: credential verification and signed tokens.
//!
//! # Responsibility
//! - Keep the credential check behind a trait so the boundary stays
//!   testable and replaceable.
//! - Issue and validate the signed session tokens gating document access.
//!
//! # Invariants
//! - Unknown user and wrong password are indistinguishable to callers.
//! - Stored passwords exist only as bcrypt hashes.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod token;

pub use token::{Claims, TokenCheck, TokenService};

/// Numeric user identity carried in token payloads.
pub type UserId = i64;

pub type AuthResult<T> = Result<T, AuthError>;

/// Error for credential and token operations.
#[derive(Debug)]
pub enum AuthError {
    /// Unknown user or wrong password; deliberately undifferentiated.
    InvalidCredentials,
    /// The stored password hash is unusable.
    BadPasswordHash(bcrypt::BcryptError),
    /// Token signing or validation failed.
    Token(jsonwebtoken::errors::Error),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "Invalid credentials"),
            Self::BadPasswordHash(err) => write!(f, "unusable password hash: {err}"),
            Self::Token(err) => write!(f, "token rejected: {err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCredentials => None,
            Self::BadPasswordHash(err) => Some(err),
            Self::Token(err) => Some(err),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(value: jsonwebtoken::errors::Error) -> Self {
        Self::Token(value)
    }
}

/// Credential check seam used by the session service.
pub trait CredentialVerifier {
    /// Returns the verified user id, or `InvalidCredentials`.
    fn verify(&self, username: &str, password: &str) -> AuthResult<UserId>;
}

/// The realm's single keeper of the gate.
const REALM_USER_ID: UserId = 1;
const REALM_USERNAME: &str = "karna";
// bcrypt hash of the keeper's passphrase.
const REALM_PASSWORD_HASH: &str = "$2a$10$EMr8S7KjD9diH9/x6Gn.O.a53GKwh2sa3h9S3b4fzR3jgIxOTilfy";

/// Verifier holding exactly one user with a bcrypt-hashed password.
pub struct FixedUserVerifier {
    user_id: UserId,
    username: String,
    password_hash: String,
}

impl FixedUserVerifier {
    /// Builds a verifier for an arbitrary single user.
    pub fn new(user_id: UserId, username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// The realm's built-in user.
    pub fn realm_keeper() -> Self {
        Self::new(REALM_USER_ID, REALM_USERNAME, REALM_PASSWORD_HASH)
    }
}

impl Default for FixedUserVerifier {
    fn default() -> Self {
        Self::realm_keeper()
    }
}

impl CredentialVerifier for FixedUserVerifier {
    fn verify(&self, username: &str, password: &str) -> AuthResult<UserId> {
        if username != self.username {
            return Err(AuthError::InvalidCredentials);
        }

        let matches =
            bcrypt::verify(password, &self.password_hash).map_err(AuthError::BadPasswordHash)?;
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(self.user_id)
    }
}

/// Hashes a password for storage in a verifier.
pub fn hash_password(password: &str) -> AuthResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(AuthError::BadPasswordHash)
}

#[cfg(test)]
mod tests {
    use super::{hash_password, CredentialVerifier, FixedUserVerifier};

    #[test]
    fn fresh_hash_verifies_and_rejects_wrong_password() {
        let hash = hash_password("ember-hoard").unwrap();
        assert!(hash.starts_with("$2"));

        let verifier = FixedUserVerifier::new(7, "smaug", hash);
        assert_eq!(verifier.verify("smaug", "ember-hoard").unwrap(), 7);
        assert!(verifier.verify("smaug", "ember-horde").is_err());
        assert!(verifier.verify("bilbo", "ember-hoard").is_err());
    }
}
