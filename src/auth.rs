//! Operator credential store.
//!
//! A toy username/password pair guarding the operator API, a stand-in for
//! real authentication. The pair is seeded from environment variables
//! (falling back to the documented defaults) and can be updated at runtime
//! through the settings endpoint.

use std::sync::RwLock;

use crate::config::{
    ADMIN_PASS_ENV, ADMIN_USER_ENV, DEFAULT_ADMIN_PASS, DEFAULT_ADMIN_USER,
};

/// Process-wide mutable credential pair.
pub struct AdminCredentials {
    pair: RwLock<(String, String)>,
}

impl AdminCredentials {
    /// Seeds the pair from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let username =
            std::env::var(ADMIN_USER_ENV).unwrap_or_else(|_| DEFAULT_ADMIN_USER.to_string());
        let password =
            std::env::var(ADMIN_PASS_ENV).unwrap_or_else(|_| DEFAULT_ADMIN_PASS.to_string());
        if password == DEFAULT_ADMIN_PASS {
            log::warn!("operator API is using the default credentials; set {ADMIN_USER_ENV}/{ADMIN_PASS_ENV}");
        }
        Self::new(username, password)
    }

    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            pair: RwLock::new((username.into(), password.into())),
        }
    }

    /// Checks a presented pair against the current credentials.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let pair = self.pair.read().expect("credentials lock poisoned");
        pair.0 == username && pair.1 == password
    }

    /// Replaces the credential pair.
    pub fn update(&self, username: impl Into<String>, password: impl Into<String>) {
        let mut pair = self.pair.write().expect("credentials lock poisoned");
        *pair = (username.into(), password.into());
        log::info!("operator credentials updated");
    }
}
