//! Screen view-models
//!
//! Each screen is a small state machine over its form fields plus the
//! actions that read or mutate the [`Store`](crate::store::Store). The TUI
//! renders them and forwards key presses; nothing here touches the terminal.

pub mod auth;
pub mod budget;
pub mod catalog;
pub mod chat;
pub mod entry_form;
pub mod input;
pub mod investments;
pub mod mode_selection;
pub mod onboarding;
pub mod profile;
pub mod transaction_form;

pub use auth::{AuthScreen, AuthStep};
pub use budget::{BudgetEditor, BudgetTarget};
pub use catalog::{CatalogField, CatalogScreen, CatalogTab};
pub use chat::ChatScreen;
pub use entry_form::{references_for, EntryForm, EntryReference};
pub use input::TextInput;
pub use investments::{InvestmentField, InvestmentsScreen};
pub use mode_selection::ModeSelectionScreen;
pub use onboarding::{BusinessField, BusinessOnboarding, PersonalField, PersonalOnboarding};
pub use profile::{ProfileAction, ProfileScreen};
pub use transaction_form::{TransactionField, TransactionForm};

/// A screen with text fields the key handler can type into
pub trait FormScreen {
    /// The field that receives typed characters, if any
    fn focused_input(&mut self) -> Option<&mut TextInput>;

    fn next_field(&mut self) {}

    fn prev_field(&mut self) {}
}
