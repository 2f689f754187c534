//! One-time codes for creating the first administrator.
//!
//! When the server starts without any admin, a random code is generated and logged.
//! Presenting it to the bootstrap endpoint creates an admin account; the code is
//! consumed on success and expires after a short TTL either way.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use subtle::ConstantTimeEq;
use tokio::sync::RwLock;

/// Default lifetime of a bootstrap code.
pub const BOOTSTRAP_CODE_TTL: Duration = Duration::from_secs(60);

const CODE_LENGTH: usize = 32;

#[derive(Clone)]
struct BootstrapCode {
    code: String,
    expires_at: Instant,
}

impl BootstrapCode {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code.as_bytes().ct_eq(input.as_bytes()).into()
    }
}

/// Holds at most one active bootstrap code, shared through `AppState`.
#[derive(Clone)]
pub struct BootstrapCodeService {
    code: Arc<RwLock<Option<BootstrapCode>>>,
    ttl: Duration,
}

impl BootstrapCodeService {
    pub fn new() -> Self {
        Self::with_ttl(BOOTSTRAP_CODE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a random 32-character alphanumeric code, replacing any previous one.
    pub async fn generate(&self) -> String {
        let code = Self::random_code();
        *self.code.write().await = Some(BootstrapCode {
            code: code.clone(),
            expires_at: Instant::now() + self.ttl,
        });
        code
    }

    /// Validates `input` and consumes the stored code when it matches.
    ///
    /// # Returns
    /// - `true` - Code matched and had not expired; it can no longer be used
    /// - `false` - No code, wrong code or expired code (expired codes are discarded)
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut code = self.code.write().await;

        let Some(stored) = code.as_ref() else {
            return false;
        };

        if stored.is_expired() {
            *code = None;
            return false;
        }

        if stored.matches(input) {
            *code = None;
            return true;
        }

        false
    }

    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        match code.as_ref() {
            Some(stored) if stored.is_expired() => {
                *code = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    fn random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }
}

impl Default for BootstrapCodeService {
    fn default() -> Self {
        Self::new()
    }
}
