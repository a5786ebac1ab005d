//! Screen regions

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, main content, navigation bar and status line
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub nav_bar: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, with_nav_bar: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(if with_nav_bar { 1 } else { 0 }),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            main: chunks[1],
            nav_bar: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// A rectangle of the given percentage size, centred in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Split `area` into one-line rows, plus whatever is left at the bottom
pub fn rows(area: Rect, count: usize) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(1); count];
    constraints.push(Constraint::Min(0));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_bar_collapses() {
        let area = Rect::new(0, 0, 80, 24);
        let with = AppLayout::new(area, true);
        let without = AppLayout::new(area, false);
        assert_eq!(with.nav_bar.height, 1);
        assert_eq!(without.nav_bar.height, 0);
        assert_eq!(without.main.height, with.main.height + 1);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, area);
        assert!(inner.x >= area.x && inner.right() <= area.right());
        assert!(inner.y >= area.y && inner.bottom() <= area.bottom());
    }
}
