//! Bundled stand-in provider
//!
//! Accepts every interactive sign-in and any phone number of plausible
//! length, and confirms exactly one code (from settings).

use std::time::Duration;

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{LedgerlyError, LedgerlyResult};

use super::{Identity, IdentityProvider, PhoneVerification};

/// Shortest number the provider will send a code to
pub const MIN_PHONE_LEN: usize = 6;

#[derive(Debug, Clone)]
pub struct LocalIdentityProvider {
    verification_code: String,
    latency: Duration,
}

impl LocalIdentityProvider {
    pub fn new(verification_code: impl Into<String>) -> Self {
        Self {
            verification_code: verification_code.into(),
            latency: Duration::ZERO,
        }
    }

    /// Simulated network latency per call
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn wait(&self) {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
    }
}

impl IdentityProvider for LocalIdentityProvider {
    fn name(&self) -> &str {
        "local"
    }

    fn sign_in_interactive(&self) -> LedgerlyResult<Identity> {
        self.wait();
        info!(provider = self.name(), "Interactive sign-in accepted");
        Ok(Identity {
            uid: Uuid::new_v4().to_string(),
            display_name: None,
            email: Some("user@example.com".into()),
            phone: None,
        })
    }

    fn send_code(&self, phone: &str) -> LedgerlyResult<PhoneVerification> {
        self.wait();
        let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < MIN_PHONE_LEN {
            warn!(provider = self.name(), "Rejected phone number");
            return Err(LedgerlyError::Auth(format!(
                "Invalid phone number: {}",
                phone
            )));
        }
        info!(provider = self.name(), "Verification code sent");
        Ok(PhoneVerification {
            verification_id: Uuid::new_v4().to_string(),
            phone: phone.to_string(),
        })
    }

    fn confirm(&self, verification: &PhoneVerification, code: &str) -> LedgerlyResult<Identity> {
        self.wait();
        if code != self.verification_code {
            warn!(provider = self.name(), "Verification code rejected");
            return Err(LedgerlyError::InvalidCode);
        }
        Ok(Identity {
            uid: verification.verification_id.clone(),
            display_name: None,
            email: None,
            phone: Some(verification.phone.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_flow() {
        let provider = LocalIdentityProvider::new("123456");
        let verification = provider.send_code("+919876543210").unwrap();

        let err = provider.confirm(&verification, "000000").unwrap_err();
        assert_eq!(err.to_string(), "Invalid OTP");

        let identity = provider.confirm(&verification, "123456").unwrap();
        assert_eq!(identity.phone.as_deref(), Some("+919876543210"));
    }

    #[test]
    fn test_short_number_is_a_provider_error() {
        let provider = LocalIdentityProvider::new("123456");
        let err = provider.send_code("+1234").unwrap_err();
        assert!(matches!(err, LedgerlyError::Auth(_)));
    }

    #[test]
    fn test_interactive_sign_in() {
        let identity = LocalIdentityProvider::new("123456").sign_in_interactive().unwrap();
        assert!(!identity.uid.is_empty());
    }
}
