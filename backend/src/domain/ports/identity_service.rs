//! Driving port for account registration and authentication.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! register accounts and check credentials without knowing the backing store.
//! HTTP handler tests substitute the fixture or a mock instead of wiring
//! persistence.

use async_trait::async_trait;

use crate::domain::{Error, IdentityName, LoginCredentials, Registration};

/// Domain use-case port for identity management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Create an account and return its identity name.
    async fn register(&self, registration: &Registration) -> Result<IdentityName, Error>;

    /// Validate credentials and return the authenticated identity name.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<IdentityName, Error>;
}

/// Fixture identity service with a single known account.
///
/// `admin@example.com` / `Passw0rd!` authenticates; registration always
/// succeeds without storing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIdentityService;

/// Email accepted by [`FixtureIdentityService`].
pub const FIXTURE_EMAIL: &str = "admin@example.com";
/// Password accepted by [`FixtureIdentityService`].
pub const FIXTURE_PASSWORD: &str = "Passw0rd!";

#[async_trait]
impl IdentityService for FixtureIdentityService {
    async fn register(&self, registration: &Registration) -> Result<IdentityName, Error> {
        Ok(registration.name().clone())
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<IdentityName, Error> {
        if credentials.email().eq_ignore_ascii_case(FIXTURE_EMAIL)
            && credentials.password() == FIXTURE_PASSWORD
        {
            IdentityName::new(FIXTURE_EMAIL)
                .map_err(|err| Error::internal(format!("invalid fixture identity: {err}")))
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}
