//! Three-step onboarding flows
//!
//! Each step gates "next" on its own fields. Finishing writes the profile
//! to the store in one replacement and lands on the mode's home screen.

use chrono::NaiveDate;
use tracing::info;

use crate::auth::Identity;
use crate::error::{LedgerlyError, LedgerlyResult};
use crate::models::currency::{self, Currency, BUSINESS_CURRENCY_COUNT, CURRENCIES};
use crate::models::{BusinessProfile, Location, Mode, UserProfile};
use crate::routes::Route;
use crate::store::Store;

use super::input::TextInput;
use super::FormScreen;

pub const TOTAL_STEPS: u8 = 3;
const MIN_NAME_CHARS: usize = 2;

pub const DEFAULT_PHONE: &str = "+1 (555) 000-0000";
pub const DEFAULT_EMAIL: &str = "user@example.com";

fn long_enough(input: &TextInput) -> bool {
    input.value().chars().count() >= MIN_NAME_CHARS
}

fn currency_index(code: &str, offered: usize) -> usize {
    CURRENCIES[..offered]
        .iter()
        .position(|c| c.code == code)
        .unwrap_or(0)
}

/// Step progress as a whole percentage, for the progress bar
pub fn progress_percent(step: u8) -> u16 {
    (u16::from(step) * 100 + u16::from(TOTAL_STEPS) / 2) / u16::from(TOTAL_STEPS)
}

// --- personal ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FullName,
    Occupation,
    Phone,
    Email,
}

#[derive(Debug, Clone)]
pub struct PersonalOnboarding {
    pub step: u8,
    pub full_name: TextInput,
    pub currency_index: usize,
    pub occupation: TextInput,
    pub phone: TextInput,
    pub email: TextInput,
    pub focus: PersonalField,
}

impl PersonalOnboarding {
    pub fn new(default_currency: &str) -> Self {
        Self {
            step: 1,
            full_name: TextInput::new("Full name").placeholder("Your name"),
            currency_index: currency_index(default_currency, CURRENCIES.len()),
            occupation: TextInput::new("Occupation").placeholder("e.g. Engineer"),
            phone: TextInput::new("Phone").content(DEFAULT_PHONE),
            email: TextInput::new("Email").content(DEFAULT_EMAIL),
            focus: PersonalField::FullName,
        }
    }

    /// Pre-fill contact fields from the signed-in identity
    pub fn with_identity(mut self, identity: &Identity) -> Self {
        if let Some(name) = &identity.display_name {
            self.full_name.set(name.clone());
        }
        if let Some(phone) = &identity.phone {
            self.phone.set(phone.clone());
        }
        if let Some(email) = &identity.email {
            self.email.set(email.clone());
        }
        self
    }

    pub fn currency(&self) -> &'static Currency {
        &CURRENCIES[self.currency_index % CURRENCIES.len()]
    }

    pub fn cycle_currency(&mut self, forward: bool) {
        self.currency_index = cycle(self.currency_index, CURRENCIES.len(), forward);
    }

    pub fn is_step_valid(&self) -> bool {
        match self.step {
            1 => long_enough(&self.full_name),
            2 => long_enough(&self.occupation),
            _ => true,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.step > 1
    }

    pub fn back(&mut self) {
        if self.can_go_back() {
            self.step -= 1;
            self.focus = self.first_field();
        }
    }

    /// Advance a step, or finish on the last one
    pub fn next(&mut self, store: &mut Store) -> LedgerlyResult<Option<Route>> {
        if !self.is_step_valid() {
            return Err(LedgerlyError::Validation(format!(
                "Step {} is incomplete",
                self.step
            )));
        }
        if self.step < TOTAL_STEPS {
            self.step += 1;
            self.focus = self.first_field();
            return Ok(None);
        }

        let profile = self.profile();
        info!(currency = %profile.currency, "Personal onboarding finished");
        store.set_user_profile(Some(profile));
        if store.mode() != Mode::Personal {
            store.set_mode(Mode::Personal);
        }
        Ok(Some(Route::PersonalHome))
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            full_name: self.full_name.trimmed().to_string(),
            profile_picture: None,
            currency: self.currency().code.to_string(),
            occupation: self.occupation.trimmed().to_string(),
            phone: self.phone.trimmed().to_string(),
            email: self.email.trimmed().to_string(),
        }
    }

    fn first_field(&self) -> PersonalField {
        match self.step {
            1 => PersonalField::FullName,
            2 => PersonalField::Occupation,
            _ => PersonalField::Phone,
        }
    }
}

impl FormScreen for PersonalOnboarding {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        Some(match self.focus {
            PersonalField::FullName => &mut self.full_name,
            PersonalField::Occupation => &mut self.occupation,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Email => &mut self.email,
        })
    }

    fn next_field(&mut self) {
        if self.step == 3 {
            self.focus = match self.focus {
                PersonalField::Phone => PersonalField::Email,
                _ => PersonalField::Phone,
            };
        }
    }

    fn prev_field(&mut self) {
        self.next_field();
    }
}

// --- business ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessField {
    OwnerName,
    BusinessName,
    Industry,
    StartDate,
    Location,
}

#[derive(Debug, Clone)]
pub struct BusinessOnboarding {
    pub step: u8,
    pub owner_name: TextInput,
    pub business_name: TextInput,
    pub industries: Vec<String>,
    pub industry: TextInput,
    pub currency_index: usize,
    pub start_date: TextInput,
    pub location: TextInput,
    pub focus: BusinessField,
}

impl BusinessOnboarding {
    pub fn new(default_currency: &str) -> Self {
        Self {
            step: 1,
            owner_name: TextInput::new("Owner name"),
            business_name: TextInput::new("Business name"),
            industries: Vec::new(),
            industry: TextInput::new("Industry").placeholder("Type a tag, Enter to add"),
            currency_index: currency_index(default_currency, BUSINESS_CURRENCY_COUNT),
            start_date: TextInput::new("Start date").placeholder("YYYY-MM-DD"),
            location: TextInput::new("Location").placeholder("Optional address"),
            focus: BusinessField::OwnerName,
        }
    }

    pub fn currency(&self) -> &'static Currency {
        &CURRENCIES[self.currency_index % BUSINESS_CURRENCY_COUNT]
    }

    pub fn cycle_currency(&mut self, forward: bool) {
        self.currency_index = cycle(self.currency_index, BUSINESS_CURRENCY_COUNT, forward);
    }

    /// Add the typed tag; duplicates and blanks are ignored
    pub fn add_industry(&mut self) {
        let tag = self.industry.trimmed().to_string();
        if !tag.is_empty() && !self.industries.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            self.industries.push(tag);
        }
        self.industry.clear();
    }

    /// Toggle a suggested tag on or off
    pub fn toggle_industry(&mut self, tag: &str) {
        match self.industries.iter().position(|t| t == tag) {
            Some(i) => {
                self.industries.remove(i);
            }
            None => self.industries.push(tag.to_string()),
        }
    }

    pub fn remove_last_industry(&mut self) {
        self.industries.pop();
    }

    pub fn parsed_start_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.start_date.trimmed(), "%Y-%m-%d").ok()
    }

    pub fn is_step_valid(&self) -> bool {
        match self.step {
            1 => long_enough(&self.owner_name) && long_enough(&self.business_name),
            2 => !self.industries.is_empty() && currency::find(self.currency().code).is_some(),
            _ => self.parsed_start_date().is_some(),
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.step > 1
    }

    pub fn back(&mut self) {
        if self.can_go_back() {
            self.step -= 1;
            self.focus = self.first_field();
        }
    }

    pub fn next(&mut self, store: &mut Store) -> LedgerlyResult<Option<Route>> {
        if !self.is_step_valid() {
            return Err(LedgerlyError::Validation(format!(
                "Step {} is incomplete",
                self.step
            )));
        }
        if self.step < TOTAL_STEPS {
            self.step += 1;
            self.focus = self.first_field();
            return Ok(None);
        }

        let profile = self.profile();
        info!(
            currency = %profile.currency,
            industries = profile.industries.len(),
            "Business onboarding finished"
        );
        store.set_business_profile(Some(profile));
        if store.mode() != Mode::Business {
            store.set_mode(Mode::Business);
        }
        Ok(Some(Route::BusinessDashboard))
    }

    pub fn profile(&self) -> BusinessProfile {
        let address = self.location.trimmed();
        BusinessProfile {
            owner_name: self.owner_name.trimmed().to_string(),
            business_name: self.business_name.trimmed().to_string(),
            industries: self.industries.clone(),
            currency: self.currency().code.to_string(),
            start_date: self.parsed_start_date(),
            location: (!address.is_empty()).then(|| Location::address_only(address)),
        }
    }

    fn first_field(&self) -> BusinessField {
        match self.step {
            1 => BusinessField::OwnerName,
            2 => BusinessField::Industry,
            _ => BusinessField::StartDate,
        }
    }
}

impl FormScreen for BusinessOnboarding {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        Some(match self.focus {
            BusinessField::OwnerName => &mut self.owner_name,
            BusinessField::BusinessName => &mut self.business_name,
            BusinessField::Industry => &mut self.industry,
            BusinessField::StartDate => &mut self.start_date,
            BusinessField::Location => &mut self.location,
        })
    }

    fn next_field(&mut self) {
        self.focus = match self.focus {
            BusinessField::OwnerName => BusinessField::BusinessName,
            BusinessField::BusinessName => BusinessField::OwnerName,
            BusinessField::Industry => BusinessField::Industry,
            BusinessField::StartDate => BusinessField::Location,
            BusinessField::Location => BusinessField::StartDate,
        };
    }

    fn prev_field(&mut self) {
        self.next_field();
    }
}

pub(crate) fn cycle(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

/// Step through a category palette. With nothing picked yet, the first press
/// lands on the first entry (or the last, going backwards).
pub(crate) fn palette_step(
    index: usize,
    len: usize,
    forward: bool,
    nothing_picked: bool,
) -> usize {
    match (nothing_picked, forward) {
        (true, true) => 0,
        (true, false) => len.saturating_sub(1),
        _ => cycle(index, len, forward),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.insert(c);
        }
    }

    #[test]
    fn test_personal_steps() {
        let mut store = Store::new();
        let mut flow = PersonalOnboarding::new("INR");
        assert_eq!(flow.currency().code, "INR");
        assert!(!flow.can_go_back());

        type_into(&mut flow.full_name, "A");
        assert!(flow.next(&mut store).unwrap_err().is_validation());
        type_into(&mut flow.full_name, "sha Verma");
        assert_eq!(flow.next(&mut store).unwrap(), None);

        assert!(!flow.is_step_valid());
        type_into(&mut flow.occupation, "Engineer");
        assert_eq!(flow.next(&mut store).unwrap(), None);

        assert_eq!(flow.step, 3);
        assert_eq!(flow.phone.value(), DEFAULT_PHONE);
        assert_eq!(flow.next(&mut store).unwrap(), Some(Route::PersonalHome));

        let profile = store.user_profile().unwrap();
        assert_eq!(profile.full_name, "Asha Verma");
        assert_eq!(profile.currency, "INR");
        assert_eq!(profile.email, DEFAULT_EMAIL);
        assert_eq!(store.mode(), Mode::Personal);
    }

    #[test]
    fn test_identity_prefills_contact() {
        let identity = Identity {
            uid: "u1".into(),
            display_name: None,
            email: Some("asha@example.org".into()),
            phone: None,
        };
        let flow = PersonalOnboarding::new("USD").with_identity(&identity);
        assert_eq!(flow.email.value(), "asha@example.org");
        assert_eq!(flow.phone.value(), DEFAULT_PHONE);
    }

    #[test]
    fn test_business_steps() {
        let mut store = Store::new();
        let mut flow = BusinessOnboarding::new("JPY");
        assert_eq!(flow.currency().code, "USD");

        type_into(&mut flow.owner_name, "Ravi");
        assert!(!flow.is_step_valid());
        type_into(&mut flow.business_name, "Ravi Traders");
        flow.next(&mut store).unwrap();

        assert!(!flow.is_step_valid());
        type_into(&mut flow.industry, "Retail");
        flow.add_industry();
        type_into(&mut flow.industry, "retail");
        flow.add_industry();
        assert_eq!(flow.industries, vec!["Retail"]);
        flow.cycle_currency(false);
        assert_eq!(flow.currency().code, "INR");
        flow.next(&mut store).unwrap();

        assert!(!flow.is_step_valid());
        type_into(&mut flow.start_date, "2024-06-01");
        assert_eq!(flow.next(&mut store).unwrap(), Some(Route::BusinessDashboard));

        let profile = store.business_profile().unwrap();
        assert_eq!(profile.currency, "INR");
        assert_eq!(profile.start_date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert!(profile.location.is_none());
    }

    #[test]
    fn test_back_and_progress() {
        let mut flow = BusinessOnboarding::new("USD");
        flow.step = 2;
        flow.back();
        assert_eq!(flow.step, 1);
        flow.back();
        assert_eq!(flow.step, 1);
        assert_eq!(progress_percent(1), 33);
        assert_eq!(progress_percent(2), 67);
        assert_eq!(progress_percent(3), 100);
    }
}
