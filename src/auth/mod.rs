//! Identity provider boundary
//!
//! The app never verifies credentials itself. It asks an `IdentityProvider`
//! to sign the user in (interactively, or by a one-time code sent to a
//! phone) and only flips the session's authenticated flag on success.
//! Provider tokens are not kept.

mod local;

pub use local::LocalIdentityProvider;

use serde::{Deserialize, Serialize};

use crate::error::LedgerlyResult;

/// Who signed in, as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Handle for a code that has been sent and awaits confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneVerification {
    pub verification_id: String,
    /// Full number including the dial prefix
    pub phone: String,
}

/// External sign-in service
///
/// Calls may block; the auth screen runs them on a scoped task.
pub trait IdentityProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Provider-hosted sign-in (the "Continue with Google" button)
    fn sign_in_interactive(&self) -> LedgerlyResult<Identity>;

    /// Send a one-time code to `phone` (dial prefix included)
    fn send_code(&self, phone: &str) -> LedgerlyResult<PhoneVerification>;

    /// Confirm the code. A wrong code is `LedgerlyError::InvalidCode`.
    fn confirm(&self, verification: &PhoneVerification, code: &str) -> LedgerlyResult<Identity>;
}

/// Entry in the phone country picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub dial: &'static str,
    pub name: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { code: "IN", dial: "+91", name: "India" },
    Country { code: "US", dial: "+1", name: "United States" },
    Country { code: "GB", dial: "+44", name: "United Kingdom" },
    Country { code: "CA", dial: "+1", name: "Canada" },
    Country { code: "AU", dial: "+61", name: "Australia" },
    Country { code: "DE", dial: "+49", name: "Germany" },
    Country { code: "FR", dial: "+33", name: "France" },
    Country { code: "IT", dial: "+39", name: "Italy" },
    Country { code: "ES", dial: "+34", name: "Spain" },
    Country { code: "BR", dial: "+55", name: "Brazil" },
    Country { code: "MX", dial: "+52", name: "Mexico" },
    Country { code: "CN", dial: "+86", name: "China" },
    Country { code: "JP", dial: "+81", name: "Japan" },
    Country { code: "KR", dial: "+82", name: "South Korea" },
    Country { code: "SG", dial: "+65", name: "Singapore" },
];

/// `+91` + `9876543210`
pub fn full_phone(country: &Country, local_number: &str) -> String {
    format!("{}{}", country.dial, local_number.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_table() {
        assert_eq!(COUNTRIES.len(), 15);
        assert_eq!(COUNTRIES[0].dial, "+91");
        assert_eq!(COUNTRIES[2].code, "GB");
        assert_eq!(COUNTRIES[2].dial, "+44");
    }

    #[test]
    fn test_full_phone() {
        assert_eq!(full_phone(&COUNTRIES[1], " 5550001 "), "+15550001");
    }
}
