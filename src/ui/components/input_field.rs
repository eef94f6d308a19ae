//! Compact single-line text input used by the rating and submission forms.
//!
//! Renders as `Label: value` with a block cursor when focused; required
//! fields carry a `*` marker.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::{COLOR_ACCENT, COLOR_DIM, COLOR_TEXT};

/// Configuration for a one-line labeled input.
#[derive(Debug, Clone)]
pub struct InputField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    pub required: bool,
    pub placeholder: Option<&'a str>,
}

impl<'a> InputField<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            required: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Build the rendered line for this field.
    pub fn line(&self) -> Line<'a> {
        let label_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(COLOR_DIM)
        };

        let mut spans = vec![Span::styled(format!("{:<24}", self.label_text()), label_style)];

        if self.value.is_empty() {
            if let Some(placeholder) = self.placeholder {
                spans.push(Span::styled(
                    placeholder.to_string(),
                    Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
                ));
            }
        } else {
            spans.push(Span::styled(
                self.value.to_string(),
                Style::default().fg(COLOR_TEXT),
            ));
        }

        if self.focused {
            spans.push(Span::styled("▏", Style::default().fg(COLOR_ACCENT)));
        }

        Line::from(spans)
    }

    fn label_text(&self) -> String {
        if self.required {
            format!("{} *:", self.label)
        } else {
            format!("{}:", self.label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_marker_appears_in_label() {
        let field = InputField::new("Name", "").required(true);
        assert_eq!(field.label_text(), "Name *:");
        let field = InputField::new("Author", "");
        assert_eq!(field.label_text(), "Author:");
    }

    #[test]
    fn focused_field_carries_a_cursor() {
        let field = InputField::new("Name", "nmap").focused(true);
        let line = field.line();
        assert_eq!(line.spans.last().unwrap().content, "▏");
    }

    #[test]
    fn placeholder_shows_only_when_empty() {
        let field = InputField::new("Tags", "").placeholder("web, scanner");
        let line = field.line();
        assert!(line.spans.iter().any(|s| s.content == "web, scanner"));

        let field = InputField::new("Tags", "recon").placeholder("web, scanner");
        let line = field.line();
        assert!(line.spans.iter().all(|s| s.content != "web, scanner"));
    }
}
