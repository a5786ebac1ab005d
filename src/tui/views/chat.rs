//! Assistant chat transcript

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::assistant::Role;
use crate::tui::app::App;
use crate::tui::widgets::InputField;

use super::render_message;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(chat) = &app.chat else {
        render_message(frame, area, "Assistant", "The assistant is not available.");
        return;
    };
    let conversation = &chat.conversation;
    let persona = conversation.persona();

    let suggestions = if conversation.shows_suggestions() {
        persona.suggested_questions()
    } else {
        Vec::new()
    };
    let suggestion_height = if suggestions.is_empty() {
        0
    } else {
        suggestions.len() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(suggestion_height),
            Constraint::Length(3),
        ])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for message in conversation.messages() {
        let (who, color) = match message.role {
            Role::User => ("You", Color::Cyan),
            Role::Assistant => (persona.title(), Color::Green),
        };
        lines.push(Line::from(Span::styled(
            format!("{}:", who),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for text in message.content.lines() {
            lines.push(Line::from(format!("  {}", text)));
        }
        lines.push(Line::default());
    }
    if chat.is_typing() {
        lines.push(Line::from(Span::styled(
            format!("{} is typing...", persona.title()),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    // Keep the newest lines in view
    let visible = chunks[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(
                Block::default()
                    .title(format!(" {} ", persona.title()))
                    .borders(Borders::ALL),
            ),
        chunks[0],
    );

    if !suggestions.is_empty() {
        let items: Vec<Line> = suggestions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                Line::from(vec![
                    Span::styled(format!(" F{} ", i + 1), Style::default().fg(Color::Yellow)),
                    Span::raw(*q),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(items).block(
                Block::default()
                    .title(" Suggested questions ")
                    .borders(Borders::ALL),
            ),
            chunks[1],
        );
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(chunks[2]);
    frame.render_widget(block, chunks[2]);
    frame.render_widget(InputField::new(&chat.input).focused(true).label_width(7), inner);
}
