//! Profile details, mode switch, export and log out

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::Mode;
use crate::screens::ProfileAction;
use crate::store::Store;
use crate::tui::app::App;

fn detail<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {:>12}: ", label), Style::default().fg(Color::Cyan)),
        Span::raw(value),
    ])
}

fn details(store: &Store) -> Vec<Line<'static>> {
    match store.mode() {
        Mode::Personal => match store.user_profile() {
            Some(p) => vec![
                detail("Name", p.full_name.clone()),
                detail("Occupation", p.occupation.clone()),
                detail("Currency", format!("{} ({})", p.currency, p.currency_symbol())),
                detail("Phone", p.phone.clone()),
                detail("Email", p.email.clone()),
            ],
            None => vec![Line::from(" No personal profile yet.")],
        },
        Mode::Business => match store.business_profile() {
            Some(p) => vec![
                detail("Business", p.business_name.clone()),
                detail("Owner", p.owner_name.clone()),
                detail("Industries", p.industries.join(", ")),
                detail("Currency", format!("{} ({})", p.currency, p.currency_symbol())),
                detail(
                    "Started",
                    p.start_date
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
                detail(
                    "Location",
                    p.location
                        .as_ref()
                        .map(|l| l.address.clone())
                        .unwrap_or_else(|| "-".to_string()),
                ),
            ],
            None => vec![Line::from(" No business profile yet.")],
        },
        Mode::None => vec![Line::from(" No mode selected.")],
    }
}

pub fn render(frame: &mut Frame, app: &App, store: &Store, area: Rect) {
    let screen = &app.profile;
    let lines = details(store);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(lines.len() as u16 + 2),
            Constraint::Length(ProfileAction::ALL.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title(" Profile ").borders(Borders::ALL)),
        chunks[0],
    );

    let selected = screen.selected_action();
    let items: Vec<ListItem> = ProfileAction::ALL
        .iter()
        .map(|action| {
            let label = match action {
                ProfileAction::ExportData => {
                    format!(" {} ({})", action.label(), screen.export_format().extension())
                }
                _ => format!(" {}", action.label()),
            };
            let style = if *action == selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(label).style(style)
        })
        .collect();
    frame.render_widget(
        List::new(items).block(Block::default().title(" Actions ").borders(Borders::ALL)),
        chunks[1],
    );

    let data = match &screen.last_export {
        Some(path) => Line::from(vec![
            Span::raw(" Last export: "),
            Span::styled(
                path.display().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            " Press f to pick an export format, Enter to run the action.",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(
        Paragraph::new(data).block(Block::default().title(" Data ").borders(Borders::ALL)),
        chunks[2],
    );
}
