//! Detail screen: one tool with its ratings and the rating form.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::{split_tags, Rating, Tool};
use crate::state::{DetailStatus, RatingField, RatingForm};
use crate::ui::components::InputField;
use crate::ui::{stars, COLOR_ACCENT, COLOR_BADGE, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_TEXT};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    match (&app.detail.status, &app.detail.tool) {
        (DetailStatus::NotFound, _) => {
            centered(frame, area, "Tool not found", "Press Esc to go back");
        }
        (DetailStatus::Failed(e), None) => {
            centered(frame, area, "Could not load tool", e);
        }
        (DetailStatus::Loading, None) => {
            centered(frame, area, "Loading tool details...", "");
        }
        // A refresh keeps the previous tool on screen until the fresh
        // one lands.
        (_, Some(tool)) => render_tool(frame, area, tool, &app.detail.form),
        (DetailStatus::Ready, None) => {}
    }
}

fn centered(frame: &mut Frame, area: Rect, headline: &str, detail: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            headline.to_string(),
            Style::default().fg(COLOR_TEXT),
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(detail.to_string(), Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Center),
        chunks[2],
    );
}

fn render_tool(frame: &mut Frame, area: Rect, tool: &Tool, form: &RatingForm) {
    let guide_height = |text: &Option<String>| -> u16 {
        match text {
            Some(t) => (t.lines().count() as u16 + 2).min(8),
            None => 0,
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),                              // header
            Constraint::Length(guide_height(&tool.installation_guide)),
            Constraint::Length(guide_height(&tool.usage_example)),
            Constraint::Min(3),                                 // ratings
            Constraint::Length(7),                              // rating form
        ])
        .split(area);

    render_header(frame, chunks[0], tool);
    if tool.installation_guide.is_some() {
        render_guide(frame, chunks[1], "Installation", tool.installation_guide.as_deref());
    }
    if tool.usage_example.is_some() {
        render_guide(frame, chunks[2], "Usage example", tool.usage_example.as_deref());
    }
    render_ratings(frame, chunks[3], tool);
    render_form(frame, chunks[4], form);
}

fn render_header(frame: &mut Frame, area: Rect, tool: &Tool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(4);

    let mut title = vec![Span::styled(
        tool.name.clone(),
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    )];
    if let Some(author) = &tool.author {
        title.push(Span::styled(format!("  by {author}"), Style::default().fg(COLOR_DIM)));
    }
    lines.push(Line::from(title));

    let mut badges = vec![Span::styled(
        format!("[{}]", tool.category),
        Style::default().fg(COLOR_BADGE),
    )];
    if let Some(language) = &tool.language {
        badges.push(Span::styled(
            format!(" [{language}]"),
            Style::default().fg(COLOR_BADGE),
        ));
    }
    // The aggregate only exists once the tool has ratings.
    if let Some(average) = tool.average_rating {
        badges.push(Span::raw("  "));
        badges.extend(stars::spans(average, true));
        badges.push(Span::styled(
            format!("  {} ratings", tool.rating_count),
            Style::default().fg(COLOR_DIM),
        ));
    }
    lines.push(Line::from(badges));

    lines.push(Line::from(Span::styled(
        tool.description.clone(),
        Style::default().fg(COLOR_TEXT),
    )));

    let mut links = Vec::new();
    if let Some(url) = &tool.github_url {
        links.push(Span::styled(format!("gh: {url}  "), Style::default().fg(COLOR_DIM)));
    }
    if let Some(url) = &tool.website_url {
        links.push(Span::styled(format!("web: {url}  "), Style::default().fg(COLOR_DIM)));
    }
    if let Some(tags) = &tool.tags {
        for tag in split_tags(tags) {
            links.push(Span::styled(format!("#{tag} "), Style::default().fg(COLOR_DIM)));
        }
    }
    lines.push(Line::from(links));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_guide(frame: &mut Frame, area: Rect, title: &str, text: Option<&str>) {
    let Some(text) = text else { return };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(title.to_string(), Style::default().fg(COLOR_DIM)));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(text.to_string()).style(Style::default().fg(COLOR_ACCENT)),
        inner,
    );
}

fn render_ratings(frame: &mut Frame, area: Rect, tool: &Tool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled("Community ratings", Style::default().fg(COLOR_DIM)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if tool.ratings.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No ratings yet. Be the first to rate this tool!",
                Style::default().fg(COLOR_DIM),
            )),
            inner,
        );
        return;
    }

    // Server-defined order, as many as fit (2 rows per entry).
    let mut lines = Vec::new();
    let capacity = (inner.height / 2).max(1) as usize;
    for rating in tool.ratings.iter().take(capacity) {
        lines.extend(rating_lines(rating));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn rating_lines(rating: &Rating) -> Vec<Line<'static>> {
    let mut header = vec![Span::styled(
        rating.user_name.clone(),
        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
    )];
    header.push(Span::raw("  "));
    // Individual scores are integral, so these never show a half star.
    header.extend(stars::spans(rating.rating as f64, false));
    header.push(Span::styled(
        format!("  {}", rating.created_at.format("%Y-%m-%d")),
        Style::default().fg(COLOR_DIM),
    ));

    let comment = match &rating.comment {
        Some(comment) => Line::from(Span::styled(
            format!("  {comment}"),
            Style::default().fg(COLOR_TEXT),
        )),
        None => Line::default(),
    };
    vec![Line::from(header), comment]
}

fn render_form(frame: &mut Frame, area: Rect, form: &RatingForm) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled("Add your rating", Style::default().fg(COLOR_DIM)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        InputField::new("Your name", &form.user_name)
            .required(true)
            .focused(form.focus == RatingField::Name)
            .line(),
        score_line(form),
        InputField::new("Comment", &form.comment)
            .placeholder("optional")
            .focused(form.focus == RatingField::Comment)
            .line(),
    ];

    if form.submitting {
        lines.push(Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(COLOR_ACCENT),
        )));
    } else if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(COLOR_ERROR),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn score_line(form: &RatingForm) -> Line<'static> {
    let focused = form.focus == RatingField::Score;
    let label_style = if focused {
        Style::default().fg(ratatui::style::Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let mut spans = vec![Span::styled(format!("{:<24}", "Rating:"), label_style)];
    spans.extend(stars::spans(form.rating as f64, false));
    spans.push(Span::styled(
        format!(
            "  {} {}",
            form.rating,
            if form.rating == 1 { "star" } else { "stars" }
        ),
        Style::default().fg(COLOR_TEXT),
    ));
    if focused {
        spans.push(Span::styled("  ↑↓ adjust", Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}
