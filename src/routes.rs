//! Navigation surface
//!
//! Every screen has exactly one path. Paths group under `/personal/...` and
//! `/business/...`; anything unrecognised resolves to `NotFound`.

use std::fmt;
use std::str::FromStr;

use crate::error::LedgerlyError;
use crate::models::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Auth,
    ModeSelection,
    PersonalOnboarding,
    PersonalHome,
    PersonalAdd,
    PersonalBudget,
    PersonalAnalysis,
    PersonalChat,
    PersonalProfile,
    BusinessOnboarding,
    BusinessDashboard,
    BusinessProducts,
    BusinessAdd,
    BusinessAnalysis,
    BusinessInvestments,
    BusinessProfile,
    BusinessChat,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 18] = [
        Self::Auth,
        Self::ModeSelection,
        Self::PersonalOnboarding,
        Self::PersonalHome,
        Self::PersonalAdd,
        Self::PersonalBudget,
        Self::PersonalAnalysis,
        Self::PersonalChat,
        Self::PersonalProfile,
        Self::BusinessOnboarding,
        Self::BusinessDashboard,
        Self::BusinessProducts,
        Self::BusinessAdd,
        Self::BusinessAnalysis,
        Self::BusinessInvestments,
        Self::BusinessProfile,
        Self::BusinessChat,
        Self::NotFound,
    ];

    /// Canonical path. `NotFound` has none of its own and reports `*`.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Auth => "/",
            Self::ModeSelection => "/mode-selection",
            Self::PersonalOnboarding => "/personal/onboarding",
            Self::PersonalHome => "/personal/home",
            Self::PersonalAdd => "/personal/add",
            Self::PersonalBudget => "/personal/budget",
            Self::PersonalAnalysis => "/personal/analysis",
            Self::PersonalChat => "/personal/chat",
            Self::PersonalProfile => "/personal/profile",
            Self::BusinessOnboarding => "/business/onboarding",
            Self::BusinessDashboard => "/business/dashboard",
            Self::BusinessProducts => "/business/products",
            Self::BusinessAdd => "/business/add",
            Self::BusinessAnalysis => "/business/analysis",
            Self::BusinessInvestments => "/business/investments",
            Self::BusinessProfile => "/business/profile",
            Self::BusinessChat => "/business/chat",
            Self::NotFound => "*",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Auth => "Sign in",
            Self::ModeSelection => "Choose mode",
            Self::PersonalOnboarding | Self::BusinessOnboarding => "Set up your profile",
            Self::PersonalHome => "Home",
            Self::PersonalAdd => "Add transaction",
            Self::PersonalBudget => "Budget",
            Self::PersonalAnalysis | Self::BusinessAnalysis => "Analysis",
            Self::PersonalChat | Self::BusinessChat => "Assistant",
            Self::PersonalProfile | Self::BusinessProfile => "Profile",
            Self::BusinessDashboard => "Dashboard",
            Self::BusinessProducts => "Products & services",
            Self::BusinessAdd => "Add entry",
            Self::BusinessInvestments => "Investments",
            Self::NotFound => "Not found",
        }
    }

    /// Resolve a path; unknown paths give `NotFound`
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };
        Self::ALL
            .iter()
            .copied()
            .find(|route| *route != Self::NotFound && route.path() == normalized)
            .unwrap_or(Self::NotFound)
    }

    /// Mode whose screen tree this route belongs to
    pub fn mode(&self) -> Mode {
        match self {
            Self::PersonalOnboarding
            | Self::PersonalHome
            | Self::PersonalAdd
            | Self::PersonalBudget
            | Self::PersonalAnalysis
            | Self::PersonalChat
            | Self::PersonalProfile => Mode::Personal,
            Self::BusinessOnboarding
            | Self::BusinessDashboard
            | Self::BusinessProducts
            | Self::BusinessAdd
            | Self::BusinessAnalysis
            | Self::BusinessInvestments
            | Self::BusinessProfile
            | Self::BusinessChat => Mode::Business,
            Self::Auth | Self::ModeSelection | Self::NotFound => Mode::None,
        }
    }

    /// Where a mode lands after onboarding
    pub fn home_for(mode: Mode) -> Self {
        match mode {
            Mode::Personal => Self::PersonalHome,
            Mode::Business => Self::BusinessDashboard,
            Mode::None => Self::ModeSelection,
        }
    }

    pub fn onboarding_for(mode: Mode) -> Self {
        match mode {
            Mode::Personal => Self::PersonalOnboarding,
            Mode::Business => Self::BusinessOnboarding,
            Mode::None => Self::ModeSelection,
        }
    }

    /// Screens that show the mode's navigation bar
    pub fn has_nav_bar(&self) -> bool {
        !matches!(
            self,
            Self::Auth
                | Self::ModeSelection
                | Self::PersonalOnboarding
                | Self::BusinessOnboarding
                | Self::NotFound
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Route {
    type Err = LedgerlyError;

    /// Strict parse: unknown paths are an error rather than `NotFound`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::parse(s) {
            Self::NotFound => Err(LedgerlyError::route_not_found(s)),
            route => Ok(route),
        }
    }
}

/// One entry of a mode's bottom navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    /// Shortcut key in the TUI
    pub key: char,
}

const PERSONAL_NAV: &[NavItem] = &[
    NavItem { route: Route::PersonalHome, label: "Home", key: '1' },
    NavItem { route: Route::PersonalBudget, label: "Budget", key: '2' },
    NavItem { route: Route::PersonalAdd, label: "Add", key: '3' },
    NavItem { route: Route::PersonalAnalysis, label: "Analysis", key: '4' },
    NavItem { route: Route::PersonalChat, label: "Chat", key: '5' },
    NavItem { route: Route::PersonalProfile, label: "Profile", key: '6' },
];

const BUSINESS_NAV: &[NavItem] = &[
    NavItem { route: Route::BusinessDashboard, label: "Dashboard", key: '1' },
    NavItem { route: Route::BusinessProducts, label: "Products", key: '2' },
    NavItem { route: Route::BusinessAdd, label: "Add", key: '3' },
    NavItem { route: Route::BusinessAnalysis, label: "Analysis", key: '4' },
    NavItem { route: Route::BusinessInvestments, label: "Investments", key: '5' },
    NavItem { route: Route::BusinessChat, label: "Chat", key: '6' },
    NavItem { route: Route::BusinessProfile, label: "Profile", key: '7' },
];

pub fn nav_items(mode: Mode) -> &'static [NavItem] {
    match mode {
        Mode::Personal => PERSONAL_NAV,
        Mode::Business => BUSINESS_NAV,
        Mode::None => &[],
    }
}
