//! Rendering for [`TextInput`](crate::screens::TextInput) fields

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::screens::TextInput;

/// One labelled input line, with a block cursor when focused
pub struct InputField<'a> {
    input: &'a TextInput,
    focused: bool,
    label_width: usize,
}

impl<'a> InputField<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            focused: false,
            label_width: 14,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    fn spans(&self) -> Vec<Span<'a>> {
        let label_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let mut spans = vec![Span::styled(
            format!("{:>width$}: ", self.input.label, width = self.label_width),
            label_style,
        )];

        let value = self.input.value();
        if value.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.input.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ));
            return spans;
        }

        let value_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };
        if !self.focused {
            spans.push(Span::styled(value.to_string(), value_style));
            return spans;
        }

        let before: String = value.chars().take(self.input.cursor()).collect();
        let mut rest = value.chars().skip(self.input.cursor());
        let under_cursor = rest.next().unwrap_or(' ');
        let after: String = rest.collect();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            under_cursor.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(after, value_style));
        spans
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(self.spans());
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_placeholder_when_empty_and_unfocused() {
        let input = TextInput::new("Amount").placeholder("0");
        let spans = InputField::new(&input).label_width(6).spans();
        assert_eq!(text(&spans), "Amount: 0");
    }

    #[test]
    fn test_cursor_splits_multibyte_text() {
        let mut input = TextInput::new("Note");
        input.set("₹50");
        input.move_start();
        let spans = InputField::new(&input).focused(true).label_width(4).spans();
        assert_eq!(spans[2].content, "₹");
        assert_eq!(spans[3].content, "50");
    }
}
