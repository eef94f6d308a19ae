//! Listing screen: stats banner, filter bar, and the tool card grid.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::Stats;
use crate::state::ListingFocus;
use crate::ui::components::tool_card::{render_tool_card, CARD_HEIGHT};
use crate::ui::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_TEXT};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // stats banner
            Constraint::Length(3), // filter bar
            Constraint::Min(1),    // grid
        ])
        .split(area);

    render_stats(frame, chunks[0], app.listing.stats.as_ref());
    render_filters(frame, chunks[1], app);
    render_grid(frame, chunks[2], app);
}

fn render_stats(frame: &mut Frame, area: Rect, stats: Option<&Stats>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The banner only renders once stats resolved; a stats failure
    // leaves it blank without blocking the rest of the page.
    let Some(stats) = stats else { return };

    let average = match stats.average_rating {
        Some(avg) => format!("{avg:.1}"),
        None => "N/A".to_string(),
    };
    let cell = |label: &str, value: String| {
        vec![
            Span::styled(value, Style::default().fg(COLOR_ACCENT)),
            Span::styled(format!(" {label}   "), Style::default().fg(COLOR_DIM)),
        ]
    };
    let mut spans = Vec::new();
    spans.extend(cell("tools", stats.total_tools.to_string()));
    spans.extend(cell("ratings", stats.total_ratings.to_string()));
    spans.extend(cell("categories", stats.categories.to_string()));
    spans.extend(cell("avg rating", average));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        inner,
    );
}

fn render_filters(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(area);

    let filters = &app.listing.filters;
    let focus = app.listing.focus;

    filter_box(
        frame,
        chunks[0],
        "Search",
        &filters.search,
        Some("type to search..."),
        focus == ListingFocus::Search,
    );
    let category = if filters.category.is_empty() {
        "All categories"
    } else {
        &filters.category
    };
    filter_box(
        frame,
        chunks[1],
        "Category ←→",
        category,
        None,
        focus == ListingFocus::Category,
    );
    filter_box(
        frame,
        chunks[2],
        "Language",
        &filters.language,
        Some("e.g. Python"),
        focus == ListingFocus::Language,
    );
    filter_box(
        frame,
        chunks[3],
        "Sort ←→",
        filters.sort_by.label(),
        None,
        focus == ListingFocus::Sort,
    );
}

fn filter_box(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: Option<&str>,
    focused: bool,
) {
    let border = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(title.to_string(), Style::default().fg(COLOR_DIM)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if value.is_empty() {
        match placeholder {
            Some(p) => Line::from(Span::styled(p.to_string(), Style::default().fg(COLOR_DIM))),
            None => Line::default(),
        }
    } else {
        let mut spans = vec![Span::styled(value.to_string(), Style::default().fg(COLOR_TEXT))];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(COLOR_ACCENT)));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_grid(frame: &mut Frame, area: Rect, app: &App) {
    let listing = &app.listing;

    if listing.is_loading() && listing.tools.is_empty() {
        centered_message(frame, area, "Loading tools...", COLOR_ACCENT);
        return;
    }
    if listing.is_empty_result() {
        centered_message(
            frame,
            area,
            "No tools found. Try adjusting your filters.",
            COLOR_DIM,
        );
        return;
    }

    // Window of fully visible cards around the selection.
    let capacity = (area.height / CARD_HEIGHT).max(1) as usize;
    let first = if listing.selected >= capacity {
        listing.selected + 1 - capacity
    } else {
        0
    };

    let mut y = area.y;
    for (index, tool) in listing.tools.iter().enumerate().skip(first).take(capacity) {
        let card_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: CARD_HEIGHT.min(area.y + area.height - y),
        };
        if card_area.height < CARD_HEIGHT {
            break;
        }
        render_tool_card(frame, card_area, tool, index == listing.selected);
        y += CARD_HEIGHT;
    }
}

fn centered_message(frame: &mut Frame, area: Rect, message: &str, color: ratatui::style::Color) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color),
    )))
    .alignment(Alignment::Center);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    frame.render_widget(paragraph, vertical[1]);
}
