//! Sign-in screen: provider sign-in, or phone number then one-time code
//!
//! Provider calls run on a scoped task. Leaving the screen drops the task,
//! so a sign-in that completes afterwards never touches the store.

use std::sync::Arc;

use tracing::{info, warn};

use crate::auth::{full_phone, Country, Identity, IdentityProvider, PhoneVerification, COUNTRIES};
use crate::error::{LedgerlyError, LedgerlyResult};
use crate::routes::Route;
use crate::store::Store;
use crate::tasks::{ScopedTask, TaskPoll};

use super::input::TextInput;
use super::FormScreen;

pub const MIN_PHONE_CHARS: usize = 6;
pub const CODE_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStep {
    #[default]
    Main,
    Phone,
    Otp,
}

/// What a finished provider call produced
#[derive(Debug)]
enum ProviderReply {
    SignedIn(Identity),
    CodeSent(PhoneVerification),
}

pub struct AuthScreen {
    provider: Arc<dyn IdentityProvider>,
    pub step: AuthStep,
    pub country_index: usize,
    pub phone: TextInput,
    pub code: TextInput,
    verification: Option<PhoneVerification>,
    pending: Option<ScopedTask<LedgerlyResult<ProviderReply>>>,
    /// Blocking alert text, shown until dismissed
    pub alert: Option<String>,
    identity: Option<Identity>,
}

impl AuthScreen {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            step: AuthStep::Main,
            country_index: 0,
            phone: TextInput::new("Phone number").placeholder("Phone number"),
            code: TextInput::new("Code").placeholder("Enter OTP").max_len(CODE_LENGTH),
            verification: None,
            pending: None,
            alert: None,
            identity: None,
        }
    }

    pub fn country(&self) -> &'static Country {
        &COUNTRIES[self.country_index % COUNTRIES.len()]
    }

    pub fn next_country(&mut self) {
        self.country_index = (self.country_index + 1) % COUNTRIES.len();
    }

    pub fn prev_country(&mut self) {
        self.country_index = (self.country_index + COUNTRIES.len() - 1) % COUNTRIES.len();
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_send_code(&self) -> bool {
        !self.is_busy() && self.phone.char_len() >= MIN_PHONE_CHARS
    }

    pub fn can_verify(&self) -> bool {
        !self.is_busy() && self.verification.is_some() && self.code.char_len() == CODE_LENGTH
    }

    pub fn use_phone(&mut self) {
        self.step = AuthStep::Phone;
    }

    pub fn back(&mut self) {
        self.cancel_pending();
        self.step = match self.step {
            AuthStep::Otp => AuthStep::Phone,
            AuthStep::Phone | AuthStep::Main => AuthStep::Main,
        };
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn sign_in_interactive(&mut self) {
        if self.is_busy() {
            return;
        }
        let provider = Arc::clone(&self.provider);
        self.pending = Some(ScopedTask::spawn("interactive-sign-in", move |_| {
            provider.sign_in_interactive().map(ProviderReply::SignedIn)
        }));
    }

    pub fn send_code(&mut self) {
        if !self.can_send_code() {
            return;
        }
        let provider = Arc::clone(&self.provider);
        let phone = full_phone(self.country(), self.phone.value());
        self.pending = Some(ScopedTask::spawn("send-code", move |_| {
            provider.send_code(&phone).map(ProviderReply::CodeSent)
        }));
    }

    pub fn verify(&mut self) {
        if !self.can_verify() {
            return;
        }
        let Some(verification) = self.verification.clone() else {
            return;
        };
        let provider = Arc::clone(&self.provider);
        let code = self.code.value().to_string();
        self.pending = Some(ScopedTask::spawn("confirm-code", move |_| {
            provider
                .confirm(&verification, &code)
                .map(ProviderReply::SignedIn)
        }));
    }

    /// Apply a finished provider call. Returns where to navigate on sign-in.
    pub fn poll(&mut self, store: &mut Store) -> Option<Route> {
        let task = self.pending.as_mut()?;
        let outcome = match task.poll() {
            TaskPoll::Pending => return None,
            TaskPoll::Cancelled => {
                self.pending = None;
                return None;
            }
            TaskPoll::Ready(outcome) => outcome,
        };
        self.pending = None;

        match outcome {
            Ok(ProviderReply::CodeSent(verification)) => {
                self.verification = Some(verification);
                self.code.clear();
                self.step = AuthStep::Otp;
                None
            }
            Ok(ProviderReply::SignedIn(identity)) => {
                info!(provider = self.provider.name(), "Signed in");
                store.set_authenticated(true);
                self.identity = Some(identity);
                Some(Route::ModeSelection)
            }
            Err(err) => {
                warn!(error = %err, "Sign-in step failed");
                self.alert = Some(alert_message(&err));
                None
            }
        }
    }

    /// Identity from the last successful sign-in
    pub fn take_identity(&mut self) -> Option<Identity> {
        self.identity.take()
    }

    pub fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }
}

impl FormScreen for AuthScreen {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.step {
            AuthStep::Main => None,
            AuthStep::Phone => Some(&mut self.phone),
            AuthStep::Otp => Some(&mut self.code),
        }
    }
}

/// Provider errors show the provider's own message
fn alert_message(err: &LedgerlyError) -> String {
    match err {
        LedgerlyError::Auth(message) => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::LocalIdentityProvider;
    use std::time::{Duration, Instant};

    fn screen() -> AuthScreen {
        AuthScreen::new(Arc::new(LocalIdentityProvider::new("123456")))
    }

    fn settle(screen: &mut AuthScreen, store: &mut Store) -> Option<Route> {
        let deadline = Instant::now() + Duration::from_secs(2);
        while screen.is_busy() && Instant::now() < deadline {
            if let Some(route) = screen.poll(store) {
                return Some(route);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    fn type_into(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.insert(c);
        }
    }

    #[test]
    fn test_phone_gating() {
        let mut screen = screen();
        screen.use_phone();
        type_into(&mut screen.phone, "12345");
        assert!(!screen.can_send_code());
        type_into(&mut screen.phone, "6");
        assert!(screen.can_send_code());
    }

    #[test]
    fn test_phone_sign_in() {
        let mut store = Store::new();
        let mut screen = screen();
        screen.use_phone();
        type_into(&mut screen.phone, "9876543210");
        screen.send_code();
        assert_eq!(settle(&mut screen, &mut store), None);
        assert_eq!(screen.step, AuthStep::Otp);

        type_into(&mut screen.code, "12345");
        assert!(!screen.can_verify());
        type_into(&mut screen.code, "6");
        screen.verify();
        assert_eq!(settle(&mut screen, &mut store), Some(Route::ModeSelection));
        assert!(store.is_authenticated());
        assert_eq!(
            screen.take_identity().and_then(|i| i.phone).as_deref(),
            Some("+919876543210")
        );
    }

    #[test]
    fn test_wrong_code_alerts() {
        let mut store = Store::new();
        let mut screen = screen();
        screen.use_phone();
        type_into(&mut screen.phone, "9876543210");
        screen.send_code();
        settle(&mut screen, &mut store);

        type_into(&mut screen.code, "000000");
        screen.verify();
        settle(&mut screen, &mut store);
        assert_eq!(screen.alert.as_deref(), Some("Invalid OTP"));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_leaving_discards_pending_sign_in() {
        let provider = LocalIdentityProvider::new("123456").with_latency(Duration::from_millis(50));
        let mut screen = AuthScreen::new(Arc::new(provider));
        let mut store = Store::new();

        screen.sign_in_interactive();
        screen.back();
        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(screen.poll(&mut store), None);
        assert!(!store.is_authenticated());
    }
}
