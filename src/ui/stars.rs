//! Star rendering shared by cards, the detail header, and rating rows.

use ratatui::style::Style;
use ratatui::text::Span;

use crate::ui::{COLOR_DIM, COLOR_STAR, COLOR_TEXT};

/// Total star slots per rating line.
pub const SLOTS: u8 = 5;

const FULL: &str = "★";
const EMPTY: &str = "☆";

/// Breakdown of a rating value into star glyphs.
///
/// `floor(r)` slots render full; one more renders half when the
/// fractional part is ≥ 0.5; the rest render empty. Integer ratings
/// (individual rating entries are always integral) never produce a
/// half star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stars {
    pub full: u8,
    pub half: bool,
}

impl Stars {
    pub fn from_value(rating: f64) -> Self {
        let clamped = rating.clamp(0.0, SLOTS as f64);
        let full = clamped.floor() as u8;
        let half = full < SLOTS && clamped - full as f64 >= 0.5;
        Self { full, half }
    }

    pub fn empty_slots(&self) -> u8 {
        SLOTS - self.full - u8::from(self.half)
    }
}

/// Spans for a rating value: stars plus an optional numeric suffix
/// like "(4.5)". A half star renders as a dimmed full glyph.
pub fn spans(rating: f64, with_value: bool) -> Vec<Span<'static>> {
    let stars = Stars::from_value(rating);
    let mut out = Vec::with_capacity(SLOTS as usize + 1);
    for _ in 0..stars.full {
        out.push(Span::styled(FULL, Style::default().fg(COLOR_STAR)));
    }
    if stars.half {
        out.push(Span::styled(FULL, Style::default().fg(COLOR_DIM)));
    }
    for _ in 0..stars.empty_slots() {
        out.push(Span::styled(EMPTY, Style::default().fg(COLOR_DIM)));
    }
    if with_value {
        out.push(Span::styled(
            format!(" ({rating:.1})"),
            Style::default().fg(COLOR_TEXT),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_ratings_never_half() {
        for r in 1..=5u8 {
            let stars = Stars::from_value(r as f64);
            assert_eq!(stars.full, r);
            assert!(!stars.half, "rating {r} produced a half star");
            assert_eq!(stars.empty_slots(), 5 - r);
        }
    }

    #[test]
    fn half_star_at_point_five() {
        let stars = Stars::from_value(4.5);
        assert_eq!(stars.full, 4);
        assert!(stars.half);
        assert_eq!(stars.empty_slots(), 0);
    }

    #[test]
    fn below_point_five_rounds_down() {
        let stars = Stars::from_value(3.49);
        assert_eq!(stars.full, 3);
        assert!(!stars.half);
        assert_eq!(stars.empty_slots(), 2);
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(Stars::from_value(7.2), Stars { full: 5, half: false });
        assert_eq!(Stars::from_value(-1.0), Stars { full: 0, half: false });
    }

    #[test]
    fn spans_cover_all_slots() {
        let line = spans(2.5, false);
        assert_eq!(line.len(), 5);
        let line = spans(2.5, true);
        assert_eq!(line.len(), 6);
        assert_eq!(line[5].content, " (2.5)");
    }
}
