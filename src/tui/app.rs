//! Application state for the TUI
//!
//! `App` owns the context (settings, paths, session store), the current
//! route and one view-model per screen. Screen actions that touch the store
//! live here so the key handler stays a thin dispatch table.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::assistant::Persona;
use crate::auth::{Identity, IdentityProvider};
use crate::error::{LedgerlyError, LedgerlyResult};
use crate::models::Mode;
use crate::routes::{nav_items, Route};
use crate::screens::{
    references_for, AuthScreen, BudgetEditor, BusinessOnboarding, CatalogScreen, ChatScreen,
    EntryForm, FormScreen, InvestmentsScreen, ModeSelectionScreen, PersonalOnboarding,
    ProfileAction, ProfileScreen, TransactionForm,
};
use crate::services::{AnalysisPeriod, Granularity};
use crate::store::{AppContext, Store};

use super::widgets::{Notification, NotificationQueue};

pub struct App {
    pub context: AppContext,
    pub route: Route,
    pub should_quit: bool,
    pub notifications: NotificationQueue,

    provider: Arc<dyn IdentityProvider>,
    identity: Option<Identity>,

    pub auth: AuthScreen,
    pub mode_selection: ModeSelectionScreen,
    pub personal_onboarding: PersonalOnboarding,
    pub business_onboarding: BusinessOnboarding,
    pub transaction_form: TransactionForm,
    pub entry_form: EntryForm,
    /// Position in the entry form's reference list
    pub reference_index: Option<usize>,
    pub budget_editor: BudgetEditor,
    pub analysis_period: AnalysisPeriod,
    pub granularity: Granularity,
    pub catalog: CatalogScreen,
    pub investments: InvestmentsScreen,
    /// Only exists while a chat route is showing
    pub chat: Option<ChatScreen>,
    pub profile: ProfileScreen,
}

impl App {
    pub fn new(context: AppContext, provider: Arc<dyn IdentityProvider>) -> Self {
        let today = today();
        let currency = context.settings().default_currency.clone();
        Self {
            route: Route::Auth,
            should_quit: false,
            notifications: NotificationQueue::new(),
            auth: AuthScreen::new(Arc::clone(&provider)),
            provider,
            identity: None,
            mode_selection: ModeSelectionScreen::new(),
            personal_onboarding: PersonalOnboarding::new(&currency),
            business_onboarding: BusinessOnboarding::new(&currency),
            transaction_form: TransactionForm::new(today),
            entry_form: EntryForm::new(today),
            reference_index: None,
            budget_editor: BudgetEditor::new(),
            analysis_period: AnalysisPeriod::default(),
            granularity: Granularity::default(),
            catalog: CatalogScreen::new(),
            investments: InvestmentsScreen::new(),
            chat: None,
            profile: ProfileScreen::new(),
            context,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn store(&self) -> LedgerlyResult<&Store> {
        self.context.store()
    }

    pub fn mode(&self) -> Mode {
        self.store().map(Store::mode).unwrap_or_default()
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Surface a failed action as a toast; validation problems are warnings
    pub fn report(&mut self, result: LedgerlyResult<()>) {
        if let Err(err) = result {
            let notification = if err.is_validation() {
                Notification::warning(err.to_string())
            } else {
                Notification::error(err.to_string())
            };
            self.notify(notification);
        }
    }

    // --- navigation ---

    /// Switch screens. The screen being left drops any pending work; the
    /// screen being entered starts from a fresh form.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        let from = self.route;
        debug!(from = %from, to = %route, "Navigating");
        self.leave(from);
        self.enter(route);
        self.route = route;
    }

    /// Follow a navigation-bar shortcut. Returns false when `key` is not one.
    pub fn navigate_by_key(&mut self, key: char) -> bool {
        if !self.route.has_nav_bar() {
            return false;
        }
        match nav_items(self.mode()).iter().find(|item| item.key == key) {
            Some(item) => {
                self.navigate(item.route);
                true
            }
            None => false,
        }
    }

    /// Home of the current mode, or sign-in when there is no session
    pub fn home_route(&self) -> Route {
        match self.store() {
            Ok(store) if store.is_authenticated() => Route::home_for(store.mode()),
            _ => Route::Auth,
        }
    }

    fn leave(&mut self, route: Route) {
        match route {
            Route::Auth => self.auth.cancel_pending(),
            Route::PersonalChat | Route::BusinessChat => {
                if let Some(mut chat) = self.chat.take() {
                    chat.leave();
                }
            }
            Route::PersonalBudget => self.budget_editor.cancel(),
            Route::BusinessProducts => self.catalog.close_form(),
            Route::BusinessInvestments => self.investments.close_form(),
            _ => {}
        }
    }

    fn enter(&mut self, route: Route) {
        let currency = self.context.settings().default_currency.clone();
        match route {
            Route::Auth => self.auth = AuthScreen::new(Arc::clone(&self.provider)),
            Route::ModeSelection => self.mode_selection = ModeSelectionScreen::new(),
            Route::PersonalOnboarding => {
                let screen = PersonalOnboarding::new(&currency);
                self.personal_onboarding = match &self.identity {
                    Some(identity) => screen.with_identity(identity),
                    None => screen,
                };
            }
            Route::BusinessOnboarding => {
                self.business_onboarding = BusinessOnboarding::new(&currency);
            }
            Route::PersonalAdd => self.transaction_form = TransactionForm::new(today()),
            Route::BusinessAdd => {
                self.entry_form = EntryForm::new(today());
                self.reference_index = None;
            }
            Route::PersonalChat | Route::BusinessChat => {
                let delay = Duration::from_millis(self.context.settings().assistant_delay_ms);
                self.chat = Some(ChatScreen::new(Persona::for_mode(route.mode()), delay));
            }
            Route::PersonalProfile | Route::BusinessProfile => self.profile = ProfileScreen::new(),
            _ => {}
        }
    }

    /// Periodic work: expire toasts, deliver finished background results
    pub fn on_tick(&mut self) {
        self.notifications.remove_expired();

        if self.route == Route::Auth && self.auth.is_busy() {
            let next = match self.context.store_mut() {
                Ok(store) => self.auth.poll(store),
                Err(err) => {
                    self.notify(Notification::error(err.to_string()));
                    None
                }
            };
            if let Some(route) = next {
                self.identity = self.auth.take_identity();
                self.navigate(route);
            }
        }

        if let Some(chat) = self.chat.as_mut() {
            chat.poll();
        }
    }

    /// The view-model that receives typed text on the current route
    pub fn active_form(&mut self) -> Option<&mut dyn FormScreen> {
        match self.route {
            Route::Auth => Some(&mut self.auth),
            Route::PersonalOnboarding => Some(&mut self.personal_onboarding),
            Route::BusinessOnboarding => Some(&mut self.business_onboarding),
            Route::PersonalAdd => Some(&mut self.transaction_form),
            Route::BusinessAdd => Some(&mut self.entry_form),
            Route::PersonalBudget => Some(&mut self.budget_editor),
            Route::BusinessProducts => Some(&mut self.catalog),
            Route::BusinessInvestments => Some(&mut self.investments),
            Route::PersonalChat | Route::BusinessChat => {
                self.chat.as_mut().map(|chat| chat as &mut dyn FormScreen)
            }
            _ => None,
        }
    }

    // --- screen actions ---

    pub fn select_mode(&mut self, mode: Mode) -> LedgerlyResult<()> {
        let route = self.mode_selection.select(self.context.store_mut()?, mode);
        self.navigate(route);
        Ok(())
    }

    pub fn personal_onboarding_next(&mut self) -> LedgerlyResult<()> {
        if let Some(route) = self.personal_onboarding.next(self.context.store_mut()?)? {
            self.navigate(route);
        }
        Ok(())
    }

    pub fn business_onboarding_next(&mut self) -> LedgerlyResult<()> {
        if let Some(route) = self.business_onboarding.next(self.context.store_mut()?)? {
            self.navigate(route);
        }
        Ok(())
    }

    pub fn save_transaction(&mut self) -> LedgerlyResult<()> {
        let route = self
            .transaction_form
            .save(self.context.store_mut()?, today())?;
        self.notify(Notification::success("Transaction saved"));
        self.navigate(route);
        Ok(())
    }

    pub fn save_entry(&mut self) -> LedgerlyResult<()> {
        let route = self.entry_form.save(self.context.store_mut()?, today())?;
        self.notify(Notification::success("Entry saved"));
        self.navigate(route);
        Ok(())
    }

    /// Step through the catalog items or templates the entry can reference
    pub fn cycle_reference(&mut self) -> LedgerlyResult<()> {
        let references = references_for(self.store()?, self.entry_form.kind);
        if references.is_empty() {
            return Err(LedgerlyError::Validation(format!(
                "Nothing to reference for {} entries",
                self.entry_form.kind
            )));
        }
        let next = self
            .reference_index
            .map(|i| (i + 1) % references.len())
            .unwrap_or(0);
        self.reference_index = Some(next);
        self.entry_form.select_reference(references[next].clone());
        Ok(())
    }

    pub fn clear_reference(&mut self) {
        self.reference_index = None;
        self.entry_form.clear_reference();
    }

    pub fn commit_budget(&mut self) -> LedgerlyResult<()> {
        self.budget_editor.commit(self.context.store_mut()?);
        Ok(())
    }

    pub fn begin_budget_edit(&mut self) -> LedgerlyResult<()> {
        self.budget_editor.begin_edit(self.context.store()?);
        Ok(())
    }

    pub fn move_budget_selection(&mut self, forward: bool) -> LedgerlyResult<()> {
        self.budget_editor
            .move_selection(self.context.store()?, forward);
        Ok(())
    }

    pub fn save_catalog_item(&mut self) -> LedgerlyResult<()> {
        let tab = self.catalog.tab;
        self.catalog.save(self.context.store_mut()?)?;
        self.notify(Notification::success(format!("Added to {}", tab.label())));
        Ok(())
    }

    pub fn save_investment(&mut self) -> LedgerlyResult<()> {
        self.investments.save(self.context.store_mut()?)?;
        self.notify(Notification::success("Investment added"));
        Ok(())
    }

    pub fn send_chat(&mut self) {
        if let Some(chat) = self.chat.as_mut() {
            chat.send();
        }
    }

    pub fn send_suggestion(&mut self, index: usize) {
        if let Some(chat) = self.chat.as_mut() {
            chat.send_suggestion(index);
        }
    }

    pub fn activate_profile_action(&mut self) -> LedgerlyResult<()> {
        match self.profile.selected_action() {
            ProfileAction::SwitchMode => {
                let route = self.profile.switch_mode();
                self.navigate(route);
            }
            ProfileAction::ExportData => {
                let store = self.context.store()?;
                let path = self.profile.export(store, self.context.paths())?;
                self.notify(Notification::success(format!("Exported to {}", path.display())));
            }
            ProfileAction::LogOut => {
                let route = self.profile.log_out(self.context.store_mut()?);
                self.identity = None;
                self.navigate(route);
            }
        }
        Ok(())
    }
}

/// Local calendar date, used as the default for new entries
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
