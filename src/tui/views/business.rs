//! Business mode: dashboard, catalog, add entry, analysis, investments

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};

use crate::display::{format_entry_row, truncate};
use crate::models::{BusinessEntryType, InvestmentCategory};
use crate::screens::{references_for, CatalogField, CatalogTab, InvestmentField, TransactionField};
use crate::services::{BusinessService, InvestmentService};
use crate::store::Store;
use crate::tui::app::App;
use crate::tui::layout::rows;
use crate::tui::widgets::InputField;

use super::{percent_bar, render_card, symbol};

fn entry_color(kind: BusinessEntryType) -> Color {
    match kind {
        BusinessEntryType::Revenue => Color::Green,
        BusinessEntryType::Expense => Color::Red,
        BusinessEntryType::Investment => Color::Blue,
    }
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
}

pub fn render_dashboard(frame: &mut Frame, app: &App, store: &Store, area: Rect) {
    let summary = BusinessService::new(store).summary(app.context.settings().recent_limit);
    let symbol = symbol(store);
    let business = store
        .business_profile()
        .map(|p| p.business_name.as_str())
        .unwrap_or("Your business");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", business),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[1]);
    render_card(frame, top[0], "Revenue", summary.revenue.format_with_symbol(symbol), Color::Green);
    render_card(frame, top[1], "Expenses", summary.expenses.format_with_symbol(symbol), Color::Red);
    render_card(
        frame,
        top[2],
        "Investments",
        summary.investments.format_with_symbol(symbol),
        Color::Blue,
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(chunks[2]);
    let profit_color = if summary.net_profit.is_negative() {
        Color::Red
    } else {
        Color::Cyan
    };
    render_card(
        frame,
        bottom[0],
        "Net profit",
        summary.net_profit.format_with_symbol(symbol),
        profit_color,
    );
    render_card(
        frame,
        bottom[1],
        "Profit margin",
        format!("{:.1}%", summary.profit_margin),
        profit_color,
    );

    let items: Vec<ListItem> = if summary.recent.is_empty() {
        vec![ListItem::new("No entries yet. Press 3 to record one.")]
    } else {
        summary
            .recent
            .iter()
            .map(|entry| {
                ListItem::new(format_entry_row(entry, symbol))
                    .style(Style::default().fg(entry_color(entry.kind)))
            })
            .collect()
    };
    frame.render_widget(List::new(items).block(bordered("Recent entries")), chunks[3]);
}

pub fn render_products(frame: &mut Frame, app: &App, store: &Store, area: Rect) {
    let catalog = &app.catalog;
    let symbol = symbol(store);

    let form_height = if catalog.form_open {
        catalog.fields().len() as u16 + 4
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(form_height),
        ])
        .split(area);

    let titles: Vec<&str> = CatalogTab::ALL.iter().map(|t| t.label()).collect();
    let selected = CatalogTab::ALL
        .iter()
        .position(|t| *t == catalog.tab)
        .unwrap_or(0);
    frame.render_widget(
        Tabs::new(titles)
            .select(selected)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        chunks[0],
    );

    let items: Vec<ListItem> = match catalog.tab {
        CatalogTab::Products => store
            .products()
            .iter()
            .map(|p| {
                ListItem::new(format!(
                    " {:20} {:12} cost {:>9}  price {:>9}  qty {:>4}  profit {:>9}  margin {}%",
                    truncate(&p.name, 20),
                    truncate(&p.category, 12),
                    p.cost_price.format_with_symbol(symbol),
                    p.selling_price.format_with_symbol(symbol),
                    p.quantity,
                    p.profit_per_unit().format_with_symbol(symbol),
                    p.margin_percent()
                ))
            })
            .collect(),
        CatalogTab::Services => store
            .services()
            .iter()
            .map(|s| {
                ListItem::new(format!(
                    " {:20} {:12} cost {:>9}  price {:>9}  profit {:>9}  margin {}%",
                    truncate(&s.name, 20),
                    truncate(&s.category, 12),
                    s.cost.format_with_symbol(symbol),
                    s.selling_price.format_with_symbol(symbol),
                    s.profit_per_sale().format_with_symbol(symbol),
                    s.margin_percent()
                ))
            })
            .collect(),
        CatalogTab::Expenses => store
            .expense_definitions()
            .iter()
            .map(|d| {
                let amount = d
                    .default_amount
                    .map(|a| a.format_with_symbol(symbol))
                    .unwrap_or_else(|| "-".to_string());
                ListItem::new(format!(
                    " {:24} {:8} {:>10}",
                    truncate(&d.name, 24),
                    d.expense_type,
                    amount
                ))
            })
            .collect(),
    };
    let items = if items.is_empty() {
        vec![ListItem::new(format!(
            "No {} yet. Press n to add one.",
            catalog.tab.label().to_lowercase()
        ))]
    } else {
        items
    };
    frame.render_widget(List::new(items).block(bordered(catalog.tab.label())), chunks[1]);

    if !catalog.form_open {
        return;
    }

    let block = bordered("New item").border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(chunks[2]);
    frame.render_widget(block, chunks[2]);
    let lines = rows(inner, catalog.fields().len() + 1);

    let mut price = catalog.price.clone();
    if catalog.tab == CatalogTab::Expenses {
        price.label = "Default amount".to_string();
    }
    for (line, field) in lines.iter().zip(catalog.fields()) {
        let input = match field {
            CatalogField::Name => &catalog.name,
            CatalogField::Category => &catalog.category,
            CatalogField::Cost => &catalog.cost,
            CatalogField::Price => &price,
            CatalogField::Quantity => &catalog.quantity,
        };
        frame.render_widget(
            InputField::new(input).focused(catalog.focus == *field),
            *line,
        );
    }
    if catalog.tab == CatalogTab::Expenses {
        if let Some(line) = lines.get(catalog.fields().len()) {
            frame.render_widget(
                Paragraph::new(format!(
                    "          Kind: {}  (Ctrl+T to change)",
                    catalog.expense_kind
                )),
                *line,
            );
        }
    }
}

pub fn render_add(frame: &mut Frame, app: &App, store: &Store, area: Rect) {
    let form = &app.entry_form;
    let symbol = symbol(store);
    let block = bordered("Record entry").border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = rows(inner, 10);
    let mut kinds = vec![Span::styled("          Type: ", Style::default().fg(Color::Cyan))];
    for kind in BusinessEntryType::ALL {
        let style = if form.kind == kind {
            Style::default().fg(Color::Black).bg(entry_color(kind))
        } else {
            Style::default().fg(Color::Gray)
        };
        kinds.push(Span::styled(format!(" {} ", kind.label()), style));
        kinds.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(kinds)), lines[0]);

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

    let available = references_for(store, form.kind).len();
    let reference = match &form.reference {
        Some(r) => {
            let amount = r
                .amount
                .map(|a| format!(" @ {}", a.format_with_symbol(symbol)))
                .unwrap_or_default();
            format!("     Reference: {} ({}){}", r.name, r.kind, amount)
        }
        None if available == 0 => "     Reference: none available".to_string(),
        None => format!("     Reference: none ({} available, Ctrl+R)", available),
    };
    frame.render_widget(Paragraph::new(reference), lines[3]);

    frame.render_widget(
        InputField::new(&form.amount).focused(form.focus == TransactionField::Amount),
        lines[4],
    );
    frame.render_widget(
        InputField::new(&form.date).focused(form.focus == TransactionField::Date),
        lines[5],
    );
    frame.render_widget(
        InputField::new(&form.notes).focused(form.focus == TransactionField::Notes),
        lines[6],
    );

    let save_style = if form.can_save() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(" [Enter] Save entry ", save_style)),
        lines[8],
    );
}

pub fn render_analysis(frame: &mut Frame, app: &App, store: &Store, area: Rect) {
    let service = BusinessService::new(store);
    let symbol = symbol(store);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(chunks[0]);

    for (column, kind) in columns
        .iter()
        .zip([BusinessEntryType::Revenue, BusinessEntryType::Expense])
    {
        let shares = service.breakdown(kind);
        let items: Vec<ListItem> = if shares.is_empty() {
            vec![ListItem::new(format!("No {} yet.", kind.label().to_lowercase()))]
        } else {
            shares
                .iter()
                .map(|share| {
                    ListItem::new(format!(
                        " {:14} {} {:>5.1}%",
                        truncate(&share.category, 14),
                        share.amount.format_with_symbol(symbol),
                        share.percentage
                    ))
                })
                .collect()
        };
        frame.render_widget(
            List::new(items)
                .block(bordered(&format!("{} by category", kind.label())))
                .style(Style::default().fg(entry_color(kind))),
            *column,
        );
    }

    let series = service.series(app.granularity);
    let items: Vec<ListItem> = if series.is_empty() {
        vec![ListItem::new("Record revenue or expenses to see trends.")]
    } else {
        series
            .iter()
            .map(|bucket| {
                let color = if bucket.profit.is_negative() {
                    Color::Red
                } else {
                    Color::Green
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!(
                        " {:9} revenue {:>11}  expenses {:>11}  ",
                        bucket.label,
                        bucket.revenue.format_with_symbol(symbol),
                        bucket.expenses.format_with_symbol(symbol)
                    )),
                    Span::styled(
                        format!("profit {}", bucket.profit.format_with_symbol(symbol)),
                        Style::default().fg(color),
                    ),
                ]))
            })
            .collect()
    };
    frame.render_widget(
        List::new(items).block(bordered(&format!("{} trend", app.granularity.label()))),
        chunks[1],
    );
}

pub fn render_investments(frame: &mut Frame, app: &App, store: &Store, area: Rect) {
    let summary = InvestmentService::new(store).summary();
    let symbol = symbol(store);
    let screen = &app.investments;

    let form_height = if screen.form_open { 8 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(form_height),
        ])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(chunks[0]);
    let total = summary.total.format_with_symbol(symbol);
    render_card(frame, cards[0], "Total invested", total, Color::Blue);
    render_card(frame, cards[1], "Investments", summary.count.to_string(), Color::Cyan);

    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(chunks[1]);

    let distribution: Vec<ListItem> = summary
        .distribution
        .iter()
        .map(|share| {
            ListItem::new(format!(
                " {:12} {} {:>5.1}%",
                share.category.label(),
                percent_bar(share.percentage, 12),
                share.percentage
            ))
        })
        .collect();
    frame.render_widget(List::new(distribution).block(bordered("Distribution")), lists[0]);

    let holdings: Vec<ListItem> = if store.investments().is_empty() {
        vec![ListItem::new("No investments yet. Press n to add one.")]
    } else {
        store
            .investments()
            .iter()
            .map(|i| {
                ListItem::new(format!(
                    " {} {:18} {:9} {}",
                    i.date.format("%Y-%m-%d"),
                    truncate(&i.name, 18),
                    i.investment_type,
                    i.amount.format_with_symbol(symbol)
                ))
            })
            .collect()
    };
    frame.render_widget(List::new(holdings).block(bordered("Holdings")), lists[1]);

    if !screen.form_open {
        return;
    }

    let block = bordered("New investment").border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(chunks[2]);
    frame.render_widget(block, chunks[2]);
    let lines = rows(inner, 6);

    let categories: Vec<&str> = InvestmentCategory::ALL.iter().map(|c| c.label()).collect();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("      Category: ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("◀ {} ▶", screen.category()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", categories.join(", ")),
                Style::default().fg(Color::DarkGray),
            ),
        ])),
        lines[0],
    );
    frame.render_widget(
        Paragraph::new(format!("          Kind: {}  (Ctrl+T to change)", screen.kind)),
        lines[1],
    );
    frame.render_widget(
        InputField::new(&screen.name).focused(screen.focus == InvestmentField::Name),
        lines[2],
    );
    frame.render_widget(
        InputField::new(&screen.date).focused(screen.focus == InvestmentField::Date),
        lines[3],
    );
    frame.render_widget(
        InputField::new(&screen.amount).focused(screen.focus == InvestmentField::Amount),
        lines[4],
    );
}
