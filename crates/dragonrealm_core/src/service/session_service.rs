//! Login session use-cases.
//!
//! # Responsibility
//! - Drive the credential check and token issuance on login.
//! - Maintain the client-side logged-in flag slot.
//!
//! # Invariants
//! - A failed login leaves the logged-in flag untouched.
//! - The flag guards client-side routing only; the token is the credential.

use crate::auth::{AuthError, CredentialVerifier, TokenCheck, TokenService, UserId};
use crate::store::slot::{SlotStore, LOGIN_FLAG_SLOT};
use crate::store::{StoreError, StoreResult};
use chrono::Utc;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for login/logout use-cases.
#[derive(Debug)]
pub enum SessionError {
    Auth(AuthError),
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Auth(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<AuthError> for SessionError {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Successful login result.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user_id: UserId,
    /// Bearer token for document access, valid one hour.
    pub token: String,
}

/// Session facade over a credential verifier and the flag slot.
pub struct SessionService<S: SlotStore, V: CredentialVerifier> {
    slots: S,
    verifier: V,
    tokens: TokenService,
}

impl<S: SlotStore, V: CredentialVerifier> SessionService<S, V> {
    pub fn new(slots: S, verifier: V, tokens: TokenService) -> Self {
        Self {
            slots,
            verifier,
            tokens,
        }
    }

    /// Verifies credentials, issues a token and raises the logged-in flag.
    ///
    /// # Errors
    /// - `Auth(InvalidCredentials)` for any unknown user or wrong password;
    ///   the flag slot is not written in that case.
    pub fn login(&mut self, username: &str, password: &str) -> Result<LoginOutcome, SessionError> {
        let user_id = match self.verifier.verify(username, password) {
            Ok(user_id) => user_id,
            Err(err) => {
                warn!("event=login module=session status=rejected");
                return Err(err.into());
            }
        };

        let token = self.tokens.issue(user_id, Utc::now())?;
        self.slots.write(LOGIN_FLAG_SLOT, "true")?;
        info!("event=login module=session status=ok user_id={user_id}");

        Ok(LoginOutcome { user_id, token })
    }

    /// Clears the logged-in flag.
    pub fn logout(&mut self) -> StoreResult<()> {
        self.slots.clear(LOGIN_FLAG_SLOT)?;
        info!("event=logout module=session status=ok");
        Ok(())
    }

    /// Reads the client-side logged-in flag.
    pub fn is_logged_in(&self) -> StoreResult<bool> {
        Ok(self.slots.read(LOGIN_FLAG_SLOT)?.as_deref() == Some("true"))
    }

    /// Checks a bearer token in the boundary's validity shape.
    pub fn verify_token(&self, token: &str) -> TokenCheck {
        self.tokens.check(token)
    }
}
