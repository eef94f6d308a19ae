//! UI rendering for the Armory catalog client.
//!
//! Rendering is a pure function of `&App`: each screen module takes the
//! frame and the state and draws, never mutating anything.

pub mod components;
pub mod detail;
pub mod listing;
pub mod stars;
pub mod submit;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};

// ============================================================================
// Theme
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for focus and highlights
pub const COLOR_ACCENT: Color = Color::LightGreen;

/// Dim text for secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Plain foreground text
pub const COLOR_TEXT: Color = Color::Gray;

/// Star color
pub const COLOR_STAR: Color = Color::Yellow;

/// Error text color
pub const COLOR_ERROR: Color = Color::LightRed;

/// Badge (category/language/tag) color
pub const COLOR_BADGE: Color = Color::Cyan;

// ============================================================================
// Rendering
// ============================================================================

/// Render the UI for the current screen.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(1),    // screen body
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    render_title(frame, chunks[0], app);

    match app.screen {
        Screen::Listing => listing::render(frame, chunks[1], app),
        Screen::Detail => detail::render(frame, chunks[1], app),
        Screen::Submit => submit::render(frame, chunks[1], app),
    }

    render_hints(frame, chunks[2], app);
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let subtitle = match app.screen {
        Screen::Listing => "security tool catalog",
        Screen::Detail => "tool details",
        Screen::Submit => "submit a tool",
    };
    let line = Line::from(vec![
        Span::styled(" ARMORY ", Style::default().fg(COLOR_ACCENT)),
        Span::styled(format!("· {subtitle}"), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.screen {
        Screen::Listing => {
            "Tab focus · ↑↓ select · ←→ cycle · Enter open · n new tool · r reload · q quit"
        }
        Screen::Detail => "Tab field · ↑↓ stars · Enter submit rating · Esc back",
        Screen::Submit => "Tab/↑↓ field · Enter submit · Esc back",
    };
    let line = Line::from(Span::styled(format!(" {hints}"), Style::default().fg(COLOR_DIM)));
    frame.render_widget(Paragraph::new(line), area);
}
