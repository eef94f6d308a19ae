//! Tool card: one list-item summary in the listing grid.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{split_tags, ToolSummary};
use crate::ui::{stars, COLOR_ACCENT, COLOR_BADGE, COLOR_BORDER, COLOR_DIM, COLOR_TEXT};

/// Cards show at most this many tags.
const MAX_CARD_TAGS: usize = 3;

/// Render one tool summary card. The selected card gets an accented
/// border.
pub fn render_tool_card(frame: &mut Frame, area: Rect, tool: &ToolSummary, selected: bool) {
    let border_color = if selected { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(3);

    // Name, plus a github marker when a repo link exists.
    let mut header = vec![Span::styled(
        tool.name.clone(),
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    )];
    if tool.github_url.is_some() {
        header.push(Span::styled("  [gh]", Style::default().fg(COLOR_DIM)));
    }
    lines.push(Line::from(header));

    lines.push(Line::from(Span::styled(
        tool.description.clone(),
        Style::default().fg(COLOR_TEXT),
    )));

    lines.push(badges_line(tool));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Bottom card row: category/language badges, tags, stars, rating count.
fn badges_line(tool: &ToolSummary) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("[{}]", tool.category),
        Style::default().fg(COLOR_BADGE),
    )];
    if let Some(language) = &tool.language {
        spans.push(Span::styled(
            format!(" [{language}]"),
            Style::default().fg(COLOR_BADGE),
        ));
    }
    if let Some(tags) = &tool.tags {
        for tag in split_tags(tags).into_iter().take(MAX_CARD_TAGS) {
            spans.push(Span::styled(
                format!(" #{tag}"),
                Style::default().fg(COLOR_DIM),
            ));
        }
    }
    spans.push(Span::raw("  "));
    // No aggregate is shown for unrated tools.
    if let Some(average) = tool.average_rating {
        spans.extend(stars::spans(average, true));
        spans.push(Span::styled(
            format!(
                "  {} {}",
                tool.rating_count,
                if tool.rating_count == 1 { "rating" } else { "ratings" }
            ),
            Style::default().fg(COLOR_DIM),
        ));
    } else {
        spans.push(Span::styled("no ratings yet", Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

/// Rows a card occupies in the grid, border included.
pub const CARD_HEIGHT: u16 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> ToolSummary {
        ToolSummary {
            id: 1,
            name: "nmap".into(),
            description: "Network scanner".into(),
            category: "Recon".into(),
            language: Some("C".into()),
            tags: Some("network, scanner , recon, extra".into()),
            average_rating: None,
            rating_count: 0,
            github_url: None,
        }
    }

    #[test]
    fn unrated_card_shows_no_average() {
        let line = badges_line(&summary());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("no ratings yet"));
        assert!(!text.contains("0.0"));
        assert!(!text.contains('★'));
    }

    #[test]
    fn card_tags_are_trimmed_and_capped() {
        let line = badges_line(&summary());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("#network"));
        assert!(text.contains("#scanner"));
        assert!(text.contains("#recon"));
        assert!(!text.contains("#extra"));
        assert!(!text.contains("# "));
    }

    #[test]
    fn rated_card_shows_stars_and_count() {
        let mut tool = summary();
        tool.average_rating = Some(4.5);
        tool.rating_count = 2;
        let line = badges_line(&tool);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("(4.5)"));
        assert!(text.contains("2 ratings"));
    }
}
