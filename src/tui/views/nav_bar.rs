//! Bottom navigation for the active mode

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::routes::nav_items;
use crate::store::Store;
use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, store: &Store, area: Rect) {
    let mut spans = Vec::new();
    for item in nav_items(store.mode()) {
        let style = if item.route == app.route {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {}:{} ", item.key, item.label), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
