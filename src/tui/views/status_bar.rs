//! Status line: key hints for the current screen

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::routes::Route;
use crate::screens::AuthStep;
use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", hints(app)),
        Style::default().fg(Color::White),
    )];
    if app.route.has_nav_bar() {
        spans.push(Span::styled(
            " Alt+digit: jump │ Ctrl+C: quit ",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hints(app: &App) -> &'static str {
    match app.route {
        Route::Auth => match app.auth.step {
            _ if app.auth.is_busy() => "Signing in...",
            AuthStep::Main => "Enter/g: continue with provider │ p: use phone │ q: quit",
            AuthStep::Phone => "↑↓: country │ Enter: send code │ Esc: back",
            AuthStep::Otp => "Enter: verify │ Esc: back",
        },
        Route::ModeSelection => "↑↓: choose │ Enter: select │ p/b: personal/business",
        Route::PersonalOnboarding | Route::BusinessOnboarding => {
            "Enter: next │ Esc: back │ Tab: next field │ ↑↓: currency"
        }
        Route::PersonalAdd => "Tab: field │ ↑↓: category │ Ctrl+T: income/expense │ Enter: save",
        Route::BusinessAdd => {
            "Tab: field │ Ctrl+T: type │ Ctrl+R: reference │ Ctrl+X: clear ref │ Enter: save"
        }
        Route::PersonalBudget if app.budget_editor.is_editing() => "Enter: save │ Esc: cancel",
        Route::PersonalBudget => "↑↓: select │ Enter: edit limit",
        Route::PersonalAnalysis => "w: weekly │ m: monthly │ Tab: toggle",
        Route::BusinessAnalysis => "Tab/g: monthly/quarterly",
        Route::BusinessProducts if app.catalog.form_open => "Tab: field │ Enter: save │ Esc: close",
        Route::BusinessProducts => "←→: tab │ n: add",
        Route::BusinessInvestments if app.investments.form_open => {
            "↑↓: category │ Ctrl+T: kind │ Enter: save │ Esc: close"
        }
        Route::BusinessInvestments => "n: add investment",
        Route::PersonalChat | Route::BusinessChat => {
            "Enter: send │ F1-F4: suggestions │ Esc: leave"
        }
        Route::PersonalProfile | Route::BusinessProfile => {
            "↑↓: select │ Enter: run │ f: export format"
        }
        Route::PersonalHome | Route::BusinessDashboard => "q: quit",
        Route::NotFound => "Enter: home",
    }
}
