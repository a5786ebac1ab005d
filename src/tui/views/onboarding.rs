//! Onboarding steps with a progress gauge

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::category::INDUSTRY_SUGGESTIONS;
use crate::screens::onboarding::{progress_percent, TOTAL_STEPS};
use crate::screens::{BusinessField, PersonalField};
use crate::tui::app::App;
use crate::tui::layout::rows;
use crate::tui::widgets::InputField;

fn frame_step(frame: &mut Frame, area: Rect, title: &str, step: u8, valid: bool) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    frame.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(format!(
                " Step {} of {} ",
                step, TOTAL_STEPS
            )))
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(progress_percent(step)),
        chunks[0],
    );

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL);
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let next = if step == TOTAL_STEPS { "Finish" } else { "Next" };
    let style = if valid {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" [Enter] {} ", next), style)),
        chunks[2],
    );
    inner
}

pub fn render_personal(frame: &mut Frame, app: &App, area: Rect) {
    let screen = &app.personal_onboarding;
    let title = match screen.step {
        1 => "About you",
        2 => "Money preferences",
        _ => "Contact details",
    };
    let inner = frame_step(frame, area, title, screen.step, screen.is_step_valid());
    let lines = rows(inner, 4);

    match screen.step {
        1 => frame.render_widget(
            InputField::new(&screen.full_name).focused(screen.focus == PersonalField::FullName),
            lines[0],
        ),
        2 => {
            let currency = screen.currency();
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("      Currency: ", Style::default().fg(Color::Cyan)),
                    Span::raw(format!(
                        "◀ {} {} ({}) ▶",
                        currency.symbol, currency.code, currency.name
                    )),
                ])),
                lines[0],
            );
            frame.render_widget(
                InputField::new(&screen.occupation)
                    .focused(screen.focus == PersonalField::Occupation),
                lines[1],
            );
        }
        _ => {
            frame.render_widget(
                InputField::new(&screen.phone).focused(screen.focus == PersonalField::Phone),
                lines[0],
            );
            frame.render_widget(
                InputField::new(&screen.email).focused(screen.focus == PersonalField::Email),
                lines[1],
            );
        }
    }
}

pub fn render_business(frame: &mut Frame, app: &App, area: Rect) {
    let screen = &app.business_onboarding;
    let title = match screen.step {
        1 => "Your business",
        2 => "Industries and currency",
        _ => "Start date and location",
    };
    let inner = frame_step(frame, area, title, screen.step, screen.is_step_valid());
    let lines = rows(inner, 6);

    match screen.step {
        1 => {
            frame.render_widget(
                InputField::new(&screen.owner_name)
                    .focused(screen.focus == BusinessField::OwnerName),
                lines[0],
            );
            frame.render_widget(
                InputField::new(&screen.business_name)
                    .focused(screen.focus == BusinessField::BusinessName),
                lines[1],
            );
        }
        2 => {
            frame.render_widget(
                InputField::new(&screen.industry).focused(screen.focus == BusinessField::Industry),
                lines[0],
            );
            let tags: Vec<Span> = screen
                .industries
                .iter()
                .map(|t| {
                    Span::styled(
                        format!(" {} ", t),
                        Style::default().fg(Color::Black).bg(Color::Cyan),
                    )
                })
                .flat_map(|span| [span, Span::raw(" ")])
                .collect();
            frame.render_widget(Paragraph::new(Line::from(tags)), lines[1]);
            let suggestions = INDUSTRY_SUGGESTIONS
                .iter()
                .enumerate()
                .map(|(i, tag)| format!("F{} {}", i + 1, tag))
                .collect::<Vec<_>>()
                .join("  ");
            frame.render_widget(
                Paragraph::new(Span::styled(suggestions, Style::default().fg(Color::DarkGray))),
                lines[2],
            );
            let currency = screen.currency();
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("      Currency: ", Style::default().fg(Color::Cyan)),
                    Span::raw(format!("◀ {} {} ▶", currency.symbol, currency.code)),
                ])),
                lines[4],
            );
        }
        _ => {
            frame.render_widget(
                InputField::new(&screen.start_date)
                    .focused(screen.focus == BusinessField::StartDate),
                lines[0],
            );
            frame.render_widget(
                InputField::new(&screen.location).focused(screen.focus == BusinessField::Location),
                lines[1],
            );
        }
    }
}
