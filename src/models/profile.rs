//! Onboarding output: the personal and business profiles, and the session mode

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency;

/// Top-level partition of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    None,
    Personal,
    Business,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Personal => write!(f, "personal"),
            Self::Business => write!(f, "business"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub currency: String,
    pub occupation: String,
    pub phone: String,
    pub email: String,
}

impl UserProfile {
    /// First word of the full name, for greetings
    pub fn first_name(&self) -> &str {
        self.full_name.split_whitespace().next().unwrap_or("User")
    }

    pub fn currency_symbol(&self) -> &'static str {
        currency::symbol_for(Some(&self.currency))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    /// An address without coordinates
    pub fn address_only(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            lat: 0.0,
            lng: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub owner_name: String,
    pub business_name: String,
    #[serde(default)]
    pub industries: Vec<String>,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl BusinessProfile {
    pub fn currency_symbol(&self) -> &'static str {
        currency::symbol_for(Some(&self.currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name() {
        let profile = UserProfile {
            full_name: "Asha Verma".into(),
            profile_picture: None,
            currency: "INR".into(),
            occupation: "Engineer".into(),
            phone: String::new(),
            email: String::new(),
        };
        assert_eq!(profile.first_name(), "Asha");
        assert_eq!(profile.currency_symbol(), "₹");
    }

    #[test]
    fn test_blank_name_greets_user() {
        let profile = UserProfile {
            full_name: "  ".into(),
            profile_picture: None,
            currency: "USD".into(),
            occupation: String::new(),
            phone: String::new(),
            email: String::new(),
        };
        assert_eq!(profile.first_name(), "User");
    }

    #[test]
    fn test_mode_serialization() {
        assert_eq!(serde_json::to_string(&Mode::Business).unwrap(), "\"business\"");
    }
}
