//! Sign-in and mode selection

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::models::Mode;
use crate::screens::mode_selection::CHOICES;
use crate::screens::AuthStep;
use crate::store::Store;
use crate::tui::app::App;
use crate::tui::layout::{centered_rect, rows};
use crate::tui::widgets::InputField;

pub fn render(frame: &mut Frame, app: &App, _store: &Store, area: Rect) {
    let auth = &app.auth;
    let panel = centered_rect(60, 60, area);
    let block = Block::default()
        .title(" Welcome to Ledgerly ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let lines = rows(inner, 6);
    match auth.step {
        AuthStep::Main => {
            frame.render_widget(
                Paragraph::new("Track personal and business finances in one place."),
                lines[0],
            );
            frame.render_widget(Paragraph::new("[Enter] Continue with provider"), lines[2]);
            frame.render_widget(Paragraph::new("[p]     Continue with phone"), lines[3]);
        }
        AuthStep::Phone => {
            let country = auth.country();
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("       Country: ", Style::default().fg(Color::Cyan)),
                    Span::raw(format!("{} {} ({})", country.code, country.dial, country.name)),
                ])),
                lines[0],
            );
            frame.render_widget(InputField::new(&auth.phone).focused(true), lines[1]);
            let hint = if auth.can_send_code() {
                Span::styled("Enter to send code", Style::default().fg(Color::Green))
            } else {
                Span::styled("At least 6 digits", Style::default().fg(Color::DarkGray))
            };
            frame.render_widget(Paragraph::new(Line::from(hint)), lines[3]);
        }
        AuthStep::Otp => {
            frame.render_widget(
                Paragraph::new("Enter the 6-digit code we sent you."),
                lines[0],
            );
            frame.render_widget(InputField::new(&auth.code).focused(true), lines[1]);
            let hint = if auth.can_verify() {
                Span::styled("Enter to verify", Style::default().fg(Color::Green))
            } else {
                Span::styled("6 digits", Style::default().fg(Color::DarkGray))
            };
            frame.render_widget(Paragraph::new(Line::from(hint)), lines[3]);
        }
    }

    if auth.is_busy() {
        frame.render_widget(
            Paragraph::new(Span::styled("Please wait...", Style::default().fg(Color::Yellow))),
            lines[5],
        );
    }

    if let Some(alert) = &auth.alert {
        let popup = centered_rect(50, 30, area);
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(" Sign-in failed ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        frame.render_widget(
            Paragraph::new(format!("{}\n\n[Enter] OK", alert))
                .wrap(Wrap { trim: true })
                .block(block),
            popup,
        );
    }
}

pub fn render_mode_selection(frame: &mut Frame, app: &App, area: Rect) {
    let panel = centered_rect(50, 50, area);
    let highlighted = app.mode_selection.highlighted_mode();
    let items: Vec<ListItem> = CHOICES
        .iter()
        .map(|mode| {
            let (title, detail) = match mode {
                Mode::Personal => ("Personal", "Budgets, spending and savings"),
                _ => ("Business", "Revenue, catalog and investments"),
            };
            let style = if *mode == highlighted {
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(vec![
                Line::from(Span::styled(format!(" {} ", title), style)),
                Line::from(Span::styled(
                    format!("   {}", detail),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
            ])
        })
        .collect();

    frame.render_widget(
        List::new(items).block(
            Block::default()
                .title(" How will you use Ledgerly? ")
                .borders(Borders::ALL),
        ),
        panel,
    );
}
