//! Submission screen: the new-tool form.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::state::SubmitField;
use crate::ui::components::InputField;
use crate::ui::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled("New tool", Style::default().fg(COLOR_DIM)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let submit = &app.submit;
    let mut lines: Vec<Line> = SubmitField::ALL
        .iter()
        .map(|field| {
            InputField::new(field.label(), submit.field_value(*field))
                .required(field.is_required())
                .focused(submit.focus == *field)
                .line()
        })
        .collect();

    lines.push(Line::default());
    if submit.submitting {
        lines.push(Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(COLOR_ACCENT),
        )));
    } else if let Some(error) = &submit.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(COLOR_ERROR),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Fields marked * are required.",
            Style::default().fg(COLOR_DIM),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
