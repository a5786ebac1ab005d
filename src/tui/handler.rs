//! Key handling
//!
//! Order of precedence: Ctrl+C, a blocking alert, Alt+nav shortcuts, the
//! current screen's own keys, text editing in the focused field, and last
//! the global keys (`q`, nav shortcuts) when no field has focus.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::category::INDUSTRY_SUGGESTIONS;
use crate::models::Mode;
use crate::routes::Route;
use crate::screens::{AuthStep, CatalogTab, TextInput, TransactionField};
use crate::services::AnalysisPeriod;

use super::app::App;
use super::event::Event;

pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.route == Route::Auth && app.auth.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.auth.dismiss_alert();
        }
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        if let KeyCode::Char(c) = key.code {
            if app.navigate_by_key(c) {
                return Ok(());
            }
        }
    }

    if handle_screen_key(app, key) {
        return Ok(());
    }

    if let Some(form) = app.active_form() {
        match key.code {
            KeyCode::Tab => {
                form.next_field();
                return Ok(());
            }
            KeyCode::BackTab => {
                form.prev_field();
                return Ok(());
            }
            _ => {}
        }
        if let Some(input) = form.focused_input() {
            if edit_input(input, key) {
                return Ok(());
            }
        }
    }

    if let KeyCode::Char(c) = key.code {
        if c == 'q' {
            app.quit();
        } else {
            app.navigate_by_key(c);
        }
    }
    Ok(())
}

/// Line editing for the focused field. Returns true when the key was used.
fn edit_input(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            input.insert(c);
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

fn ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// Plain character with no modifier other than shift
fn plain(key: &KeyEvent, c: char) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        && key.code == KeyCode::Char(c)
}

/// Keys a screen handles itself. Returns true when the key was consumed.
fn handle_screen_key(app: &mut App, key: KeyEvent) -> bool {
    match app.route {
        Route::Auth => handle_auth_key(app, key),
        Route::ModeSelection => handle_mode_selection_key(app, key),
        Route::PersonalOnboarding => handle_personal_onboarding_key(app, key),
        Route::BusinessOnboarding => handle_business_onboarding_key(app, key),
        Route::PersonalAdd => handle_transaction_form_key(app, key),
        Route::BusinessAdd => handle_entry_form_key(app, key),
        Route::PersonalBudget => handle_budget_key(app, key),
        Route::PersonalAnalysis => handle_personal_analysis_key(app, key),
        Route::BusinessAnalysis => {
            if key.code == KeyCode::Tab || plain(&key, 'g') {
                app.granularity = app.granularity.toggle();
                return true;
            }
            false
        }
        Route::BusinessProducts => handle_catalog_key(app, key),
        Route::BusinessInvestments => handle_investments_key(app, key),
        Route::PersonalChat | Route::BusinessChat => handle_chat_key(app, key),
        Route::PersonalProfile | Route::BusinessProfile => handle_profile_key(app, key),
        Route::NotFound => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                let home = app.home_route();
                app.navigate(home);
                return true;
            }
            false
        }
        Route::PersonalHome | Route::BusinessDashboard => false,
    }
}

fn handle_auth_key(app: &mut App, key: KeyEvent) -> bool {
    match app.auth.step {
        AuthStep::Main => match key.code {
            KeyCode::Enter => app.auth.sign_in_interactive(),
            KeyCode::Char('g') => app.auth.sign_in_interactive(),
            KeyCode::Char('p') => app.auth.use_phone(),
            _ => return false,
        },
        AuthStep::Phone => match key.code {
            KeyCode::Up => app.auth.prev_country(),
            KeyCode::Down => app.auth.next_country(),
            KeyCode::Enter => app.auth.send_code(),
            KeyCode::Esc => app.auth.back(),
            _ => return false,
        },
        AuthStep::Otp => match key.code {
            KeyCode::Enter => app.auth.verify(),
            KeyCode::Esc => app.auth.back(),
            _ => return false,
        },
    }
    true
}

fn handle_mode_selection_key(app: &mut App, key: KeyEvent) -> bool {
    let result = match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
            app.mode_selection.toggle();
            Ok(())
        }
        KeyCode::Enter => {
            let mode = app.mode_selection.highlighted_mode();
            app.select_mode(mode)
        }
        KeyCode::Char('p') => app.select_mode(Mode::Personal),
        KeyCode::Char('b') => app.select_mode(Mode::Business),
        _ => return false,
    };
    app.report(result);
    true
}

fn handle_personal_onboarding_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            let result = app.personal_onboarding_next();
            app.report(result);
        }
        KeyCode::Esc => app.personal_onboarding.back(),
        KeyCode::Up if app.personal_onboarding.step == 2 => {
            app.personal_onboarding.cycle_currency(false)
        }
        KeyCode::Down if app.personal_onboarding.step == 2 => {
            app.personal_onboarding.cycle_currency(true)
        }
        _ => return false,
    }
    true
}

fn handle_business_onboarding_key(app: &mut App, key: KeyEvent) -> bool {
    let on_tags = app.business_onboarding.step == 2;
    let typing_tag = !app.business_onboarding.industry.is_blank();
    match key.code {
        KeyCode::Enter if on_tags && typing_tag => app.business_onboarding.add_industry(),
        KeyCode::Enter => {
            let result = app.business_onboarding_next();
            app.report(result);
        }
        KeyCode::Esc => app.business_onboarding.back(),
        KeyCode::Up if on_tags => app.business_onboarding.cycle_currency(false),
        KeyCode::Down if on_tags => app.business_onboarding.cycle_currency(true),
        KeyCode::Backspace if on_tags && !typing_tag => {
            app.business_onboarding.remove_last_industry()
        }
        KeyCode::F(n) if on_tags => {
            match INDUSTRY_SUGGESTIONS.get(usize::from(n).saturating_sub(1)) {
                Some(tag) => app.business_onboarding.toggle_industry(tag),
                None => return false,
            }
        }
        _ => return false,
    }
    true
}

fn handle_transaction_form_key(app: &mut App, key: KeyEvent) -> bool {
    let on_category = app.transaction_form.focus == TransactionField::Category;
    match key.code {
        _ if ctrl(&key, 't') => app.transaction_form.toggle_kind(),
        KeyCode::Up if on_category => app.transaction_form.cycle_palette(false),
        KeyCode::Down if on_category => app.transaction_form.cycle_palette(true),
        KeyCode::Enter => {
            let result = app.save_transaction();
            app.report(result);
        }
        KeyCode::Esc => app.navigate(Route::PersonalHome),
        _ => return false,
    }
    true
}

fn handle_entry_form_key(app: &mut App, key: KeyEvent) -> bool {
    let result = match key.code {
        _ if ctrl(&key, 't') => {
            app.entry_form.cycle_kind();
            app.reference_index = None;
            Ok(())
        }
        _ if ctrl(&key, 'r') => app.cycle_reference(),
        _ if ctrl(&key, 'x') => {
            app.clear_reference();
            Ok(())
        }
        KeyCode::Up if app.entry_form.focus == TransactionField::Category => {
            app.entry_form.cycle_palette(false);
            Ok(())
        }
        KeyCode::Down if app.entry_form.focus == TransactionField::Category => {
            app.entry_form.cycle_palette(true);
            Ok(())
        }
        KeyCode::Enter => app.save_entry(),
        KeyCode::Esc => {
            app.navigate(Route::BusinessDashboard);
            Ok(())
        }
        _ => return false,
    };
    app.report(result);
    true
}

fn handle_budget_key(app: &mut App, key: KeyEvent) -> bool {
    let result = if app.budget_editor.is_editing() {
        match key.code {
            KeyCode::Enter => app.commit_budget(),
            KeyCode::Esc => {
                app.budget_editor.cancel();
                Ok(())
            }
            _ => return false,
        }
    } else {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_budget_selection(false),
            KeyCode::Down | KeyCode::Char('j') => app.move_budget_selection(true),
            KeyCode::Enter | KeyCode::Char('e') => app.begin_budget_edit(),
            _ => return false,
        }
    };
    app.report(result);
    true
}

fn handle_personal_analysis_key(app: &mut App, key: KeyEvent) -> bool {
    app.analysis_period = match key.code {
        KeyCode::Tab => app.analysis_period.toggle(),
        KeyCode::Char('w') => AnalysisPeriod::Weekly,
        KeyCode::Char('m') => AnalysisPeriod::Monthly,
        _ => return false,
    };
    true
}

fn handle_catalog_key(app: &mut App, key: KeyEvent) -> bool {
    if app.catalog.form_open {
        match key.code {
            _ if ctrl(&key, 't') && app.catalog.tab == CatalogTab::Expenses => {
                app.catalog.toggle_expense_kind()
            }
            KeyCode::Enter => {
                let result = app.save_catalog_item();
                app.report(result);
            }
            KeyCode::Esc => app.catalog.close_form(),
            _ => return false,
        }
    } else {
        match key.code {
            KeyCode::Right | KeyCode::Tab => {
                let next = app.catalog.tab.next();
                app.catalog.switch_tab(next);
            }
            KeyCode::Left | KeyCode::BackTab => {
                let prev = app.catalog.tab.next().next();
                app.catalog.switch_tab(prev);
            }
            KeyCode::Char('n') | KeyCode::Char('a') => app.catalog.open_form(),
            _ => return false,
        }
    }
    true
}

fn handle_investments_key(app: &mut App, key: KeyEvent) -> bool {
    if app.investments.form_open {
        match key.code {
            _ if ctrl(&key, 't') => app.investments.toggle_kind(),
            KeyCode::Up => app.investments.cycle_category(false),
            KeyCode::Down => app.investments.cycle_category(true),
            KeyCode::Enter => {
                let result = app.save_investment();
                app.report(result);
            }
            KeyCode::Esc => app.investments.close_form(),
            _ => return false,
        }
    } else {
        match key.code {
            KeyCode::Char('n') | KeyCode::Char('a') => app.investments.open_form(),
            _ => return false,
        }
    }
    true
}

fn handle_chat_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.send_chat(),
        KeyCode::Esc => {
            let home = app.home_route();
            app.navigate(home);
        }
        KeyCode::F(n) => app.send_suggestion(usize::from(n).saturating_sub(1)),
        _ => return false,
    }
    true
}

fn handle_profile_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.profile.move_selection(false),
        KeyCode::Down | KeyCode::Char('j') => app.profile.move_selection(true),
        KeyCode::Char('f') => app.profile.cycle_format(),
        KeyCode::Enter => {
            let result = app.activate_profile_action();
            app.report(result);
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::LocalIdentityProvider;
    use crate::config::{LedgerlyPaths, Settings};
    use crate::models::Money;
    use crate::store::AppContext;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn personal_app() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerlyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let context = AppContext::new(Settings::default(), paths);
        let mut app = App::new(context, Arc::new(LocalIdentityProvider::new("123456")));
        app.context.store_mut().unwrap().set_authenticated(true);
        app.select_mode(Mode::Personal).unwrap();
        (temp_dir, app)
    }

    #[test]
    fn test_typing_into_add_form_does_not_navigate() {
        let (_dir, mut app) = personal_app();
        app.navigate(Route::PersonalAdd);

        type_text(&mut app, "Groceries");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "150");
        assert_eq!(app.route, Route::PersonalAdd);
        assert_eq!(app.transaction_form.amount.value(), "150");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::PersonalHome);
        let store = app.store().unwrap();
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.transactions()[0].amount, Money::from_units(150));
    }

    #[test]
    fn test_nav_digits_outside_forms() {
        let (_dir, mut app) = personal_app();
        app.navigate(Route::PersonalHome);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.route, Route::PersonalAnalysis);
        press(&mut app, KeyCode::Char('w'));
        assert_eq!(app.analysis_period, AnalysisPeriod::Weekly);
    }

    #[test]
    fn test_alt_navigation_from_a_form() {
        let (_dir, mut app) = personal_app();
        app.navigate(Route::PersonalAdd);
        let key = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT);
        handle_event(&mut app, Event::Key(key)).unwrap();
        assert_eq!(app.route, Route::PersonalHome);
    }

    #[test]
    fn test_onboarding_blocks_short_name() {
        let (_dir, mut app) = personal_app();
        assert_eq!(app.route, Route::PersonalOnboarding);
        type_text(&mut app, "A");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.personal_onboarding.step, 1);
        assert!(!app.notifications.is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let (_dir, mut app) = personal_app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_event(&mut app, Event::Key(key)).unwrap();
        assert!(app.should_quit);
    }
}
