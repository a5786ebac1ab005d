//! Personal mode: home, add transaction, budget, analysis

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::display::format_transaction_row;
use crate::models::{Money, TransactionType};
use crate::screens::{BudgetTarget, TransactionField};
use crate::services::{BudgetHealth, PersonalService};
use crate::store::Store;
use crate::tui::app::{today, App};
use crate::tui::layout::rows;
use crate::tui::widgets::InputField;

use super::{percent_bar, render_card, symbol};

fn health_color(health: BudgetHealth) -> Color {
    match health {
        BudgetHealth::OnTrack => Color::Green,
        BudgetHealth::Warning => Color::Yellow,
        BudgetHealth::Exceeded => Color::Red,
    }
}

pub fn render_home(frame: &mut Frame, app: &App, store: &Store, area: Rect) {
    let summary = PersonalService::new(store).summary(app.context.settings().recent_limit);
    let symbol = symbol(store);
    let name = store.user_profile().map(|p| p.first_name()).unwrap_or("User");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" Hello, {}!", name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[1]);
    let balance_color = if summary.balance.is_negative() {
        Color::Red
    } else {
        Color::Cyan
    };
    let card = |money: Money| money.format_with_symbol(symbol);
    render_card(frame, cards[0], "Balance", card(summary.balance), balance_color);
    render_card(frame, cards[1], "Income", card(summary.income), Color::Green);
    render_card(frame, cards[2], "Expenses", card(summary.expenses), Color::Red);

    let items: Vec<ListItem> = if summary.recent.is_empty() {
        vec![ListItem::new("No transactions yet. Press 3 to add one.")]
    } else {
        summary
            .recent
            .iter()
            .map(|txn| {
                let color = match txn.kind {
                    TransactionType::Income => Color::Green,
                    TransactionType::Expense => Color::Red,
                };
                ListItem::new(format_transaction_row(txn, symbol)).style(Style::default().fg(color))
            })
            .collect()
    };
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .title(" Recent transactions ")
                .borders(Borders::ALL),
        ),
        chunks[2],
    );
}

pub fn render_add(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.transaction_form;
    let block = Block::default()
        .title(" Add transaction ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = rows(inner, 9);
    let kind_span = |kind: TransactionType| {
        let style = if form.kind == kind {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(format!(" {} ", kind.label()), style)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("          Type: ", Style::default().fg(Color::Cyan)),
            kind_span(TransactionType::Income),
            Span::raw(" "),
            kind_span(TransactionType::Expense),
        ])),
        lines[0],
    );

    frame.render_widget(
        InputField::new(&form.category).focused(form.focus == TransactionField::Category),
        lines[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("                {}", form.palette().join(" · ")),
            Style::default().fg(Color::DarkGray),
        )),
        lines[2],
    );
    frame.render_widget(
        InputField::new(&form.amount).focused(form.focus == TransactionField::Amount),
        lines[3],
    );
    frame.render_widget(
        InputField::new(&form.date).focused(form.focus == TransactionField::Date),
        lines[4],
    );
    frame.render_widget(
        InputField::new(&form.notes).focused(form.focus == TransactionField::Notes),
        lines[5],
    );

    let save_style = if form.can_save() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(" [Enter] Save transaction ", save_style)),
        lines[7],
    );
}

pub fn render_budget(frame: &mut Frame, app: &App, store: &Store, area: Rect) {
    let status = PersonalService::new(store).budget_status();
    let symbol = symbol(store);
    let editor = &app.budget_editor;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let total_style = if editor.selected == 0 {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let overview = vec![
        Line::from(Span::styled(
            format!(
                " Total budget {}   Spent {}   Remaining {}",
                status.total.format_with_symbol(symbol),
                status.spent.format_with_symbol(symbol),
                status.remaining.format_with_symbol(symbol)
            ),
            total_style,
        )),
        Line::from(vec![
            Span::styled(
                format!(" {} ", percent_bar(status.percent_used, 30)),
                Style::default().fg(health_color(status.health)),
            ),
            Span::raw(format!("{:.0}% {}", status.percent_used, status.health.label())),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(overview).block(Block::default().title(" Budget ").borders(Borders::ALL)),
        chunks[0],
    );

    let items: Vec<ListItem> = status
        .categories
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let selected = editor.selected == i + 1;
            let style = if selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {:16}", row.category), style),
                Span::styled(
                    format!(" {} ", percent_bar(row.percent_used, 20)),
                    Style::default().fg(health_color(row.health)),
                ),
                Span::raw(format!(
                    "{} / {}",
                    row.spent.format_with_symbol(symbol),
                    row.limit.format_with_symbol(symbol)
                )),
            ]))
        })
        .collect();
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .title(" Category limits ")
                .borders(Borders::ALL),
        ),
        chunks[1],
    );

    if let Some(target) = &editor.editing {
        let label = match target {
            BudgetTarget::Total => "Total".to_string(),
            BudgetTarget::Category(name) => name.clone(),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" Editing {}: ", label),
                Style::default().fg(Color::Cyan),
            )),
            chunks[2],
        );
        let offset = (label.chars().count() + 11) as u16;
        let field = Rect {
            x: chunks[2].x + offset.min(chunks[2].width),
            width: chunks[2].width.saturating_sub(offset),
            ..chunks[2]
        };
        frame.render_widget(InputField::new(&editor.value).focused(true).label_width(0), field);
    }
}

pub fn render_analysis(frame: &mut Frame, app: &App, store: &Store, area: Rect) {
    let analysis = PersonalService::new(store).analysis(app.analysis_period, today());
    let symbol = symbol(store);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4), Constraint::Length(5)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[0]);
    render_card(frame, cards[0], analysis.period.label(), String::new(), Color::Cyan);
    let card = |money: Money| money.format_with_symbol(symbol);
    render_card(frame, cards[1], "Income", card(analysis.income), Color::Green);
    render_card(frame, cards[2], "Expenses", card(analysis.expenses), Color::Red);

    let items: Vec<ListItem> = if analysis.breakdown.is_empty() {
        vec![ListItem::new("No expenses in this period.")]
    } else {
        analysis
            .breakdown
            .iter()
            .map(|share| {
                ListItem::new(format!(
                    " {:16} {} {:>10} {:>5.1}%",
                    share.category,
                    percent_bar(share.percentage, 20),
                    share.amount.format_with_symbol(symbol),
                    share.percentage
                ))
            })
            .collect()
    };
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .title(" Spending by category ")
                .borders(Borders::ALL),
        ),
        chunks[1],
    );

    let top = analysis
        .top_category
        .as_ref()
        .map(|c| format!("{} ({})", c.category, c.amount.format_with_symbol(symbol)))
        .unwrap_or_else(|| "None yet".to_string());
    let insights = vec![
        Line::from(format!(" Top spending category: {}", top)),
        Line::from(format!(" Savings rate: {}", analysis.savings_rate_display())),
        Line::from(Span::styled(
            format!(" {}", analysis.verdict.message()),
            Style::default().fg(Color::Yellow),
        )),
    ];
    frame.render_widget(
        Paragraph::new(insights).block(Block::default().title(" Insights ").borders(Borders::ALL)),
        chunks[2],
    );
}
