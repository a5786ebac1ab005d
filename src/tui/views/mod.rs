//! Per-route views
//!
//! Every view reads the app and the store and draws; none of them mutate
//! state.

pub mod auth;
pub mod business;
pub mod chat;
pub mod nav_bar;
pub mod onboarding;
pub mod personal;
pub mod profile;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::routes::Route;
use crate::store::Store;

use super::app::App;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area(), app.route.has_nav_bar());

    render_header(frame, app, layout.header);

    let store = match app.context.store() {
        Ok(store) => store,
        Err(err) => {
            render_message(frame, layout.main, "Error", &err.to_string());
            return;
        }
    };

    match app.route {
        Route::Auth => auth::render(frame, app, store, layout.main),
        Route::ModeSelection => auth::render_mode_selection(frame, app, layout.main),
        Route::PersonalOnboarding => onboarding::render_personal(frame, app, layout.main),
        Route::BusinessOnboarding => onboarding::render_business(frame, app, layout.main),
        Route::PersonalHome => personal::render_home(frame, app, store, layout.main),
        Route::PersonalAdd => personal::render_add(frame, app, layout.main),
        Route::PersonalBudget => personal::render_budget(frame, app, store, layout.main),
        Route::PersonalAnalysis => personal::render_analysis(frame, app, store, layout.main),
        Route::BusinessDashboard => business::render_dashboard(frame, app, store, layout.main),
        Route::BusinessProducts => business::render_products(frame, app, store, layout.main),
        Route::BusinessAdd => business::render_add(frame, app, store, layout.main),
        Route::BusinessAnalysis => business::render_analysis(frame, app, store, layout.main),
        Route::BusinessInvestments => {
            business::render_investments(frame, app, store, layout.main)
        }
        Route::PersonalChat | Route::BusinessChat => chat::render(frame, app, layout.main),
        Route::PersonalProfile | Route::BusinessProfile => {
            profile::render(frame, app, store, layout.main)
        }
        Route::NotFound => render_message(
            frame,
            layout.main,
            "Not found",
            "This page does not exist. Press Enter to go home.",
        ),
    }

    if app.route.has_nav_bar() {
        nav_bar::render(frame, app, store, layout.nav_bar);
    }
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let area = toast_area(frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mode = app.mode();
    let title = Line::from(vec![
        Span::styled(
            " Ledgerly ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(app.route.title(), Style::default().fg(Color::White)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title_bottom(Line::from(format!(" {} ", app.route.path())).alignment(Alignment::Right));
    let paragraph = Paragraph::new(title).block(block);
    frame.render_widget(paragraph, area);

    if !matches!(mode, crate::models::Mode::None) {
        let label = format!(" {} mode ", mode);
        let width = label.chars().count() as u16;
        if area.width > width + 2 {
            let badge = Rect::new(area.right() - width - 2, area.y + 1, width, 1);
            frame.render_widget(
                Paragraph::new(label).style(Style::default().fg(Color::Black).bg(Color::Cyan)),
                badge,
            );
        }
    }
}

/// A bordered box with a title and one paragraph of text
pub fn render_message(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Small bordered card showing a label and a big value
pub fn render_card(frame: &mut Frame, area: Rect, label: &str, value: String, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let paragraph = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(paragraph, area);
}

/// Text bar of `width` cells filled to `percent`
pub fn percent_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled.min(width)))
}

/// Currency symbol for the session's active profile
pub fn symbol(store: &Store) -> &'static str {
    store.currency_symbol()
}

fn toast_area(area: Rect) -> Rect {
    let width = 44.min(area.width);
    let height = 4.min(area.height);
    Rect::new(area.right().saturating_sub(width), area.y, width, height)
}
