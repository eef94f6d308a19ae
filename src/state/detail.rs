//! Detail screen state: the fetched tool and the rating form.

use crate::models::{RatingDraft, Tool};

/// Lifecycle of the detail fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailStatus {
    #[default]
    Loading,
    Ready,
    /// Terminal state; no further fetch attempts for this id
    NotFound,
    Failed(String),
}

/// Which rating-form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingField {
    #[default]
    Name,
    Score,
    Comment,
}

impl RatingField {
    pub fn next(self) -> Self {
        match self {
            RatingField::Name => RatingField::Score,
            RatingField::Score => RatingField::Comment,
            RatingField::Comment => RatingField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            RatingField::Name => RatingField::Comment,
            RatingField::Score => RatingField::Name,
            RatingField::Comment => RatingField::Score,
        }
    }
}

/// The rating submission form. Entered values survive a failed
/// submission; only a successful one clears them.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingForm {
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub focus: RatingField,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for RatingForm {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            rating: 5,
            comment: String::new(),
            focus: RatingField::default(),
            submitting: false,
            error: None,
        }
    }
}

impl RatingForm {
    /// Build the request draft. Returns None when user_name is blank;
    /// no request is issued in that case.
    pub fn to_draft(&self) -> Option<RatingDraft> {
        let user_name = self.user_name.trim();
        if user_name.is_empty() {
            return None;
        }
        let comment = self.comment.trim();
        Some(RatingDraft {
            user_name: user_name.to_string(),
            rating: self.rating,
            comment: if comment.is_empty() {
                None
            } else {
                Some(comment.to_string())
            },
        })
    }

    pub fn step_rating(&mut self, up: bool) {
        self.rating = if up {
            (self.rating + 1).min(5)
        } else {
            (self.rating - 1).max(1)
        };
    }

    /// Reset to the pristine form (after a successful submission).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn type_char(&mut self, c: char) {
        match self.focus {
            RatingField::Name => self.user_name.push(c),
            RatingField::Comment => self.comment.push(c),
            RatingField::Score => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            RatingField::Name => {
                self.user_name.pop();
            }
            RatingField::Comment => {
                self.comment.pop();
            }
            RatingField::Score => {}
        }
    }
}

/// State for the detail screen.
#[derive(Debug, Default)]
pub struct DetailState {
    /// Id currently shown; set even while the fetch is in flight
    pub tool_id: Option<i64>,
    pub tool: Option<Tool>,
    pub status: DetailStatus,
    pub form: RatingForm,
}

impl DetailState {
    /// Start a fresh fetch for a tool, resetting the form.
    pub fn open(&mut self, id: i64) {
        self.tool_id = Some(id);
        self.tool = None;
        self.status = DetailStatus::Loading;
        self.form = RatingForm::default();
    }

    /// Re-fetch in place (after a rating was accepted); the form is
    /// already cleared by the caller and the old tool stays visible
    /// until the fresh one lands.
    pub fn begin_refresh(&mut self) {
        self.status = DetailStatus::Loading;
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool_id = Some(tool.id);
        self.tool = Some(tool);
        self.status = DetailStatus::Ready;
    }

    pub fn set_not_found(&mut self) {
        self.tool = None;
        self.status = DetailStatus::NotFound;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_user_name_yields_no_draft() {
        let mut form = RatingForm::default();
        form.user_name = "   ".into();
        assert!(form.to_draft().is_none());
    }

    #[test]
    fn draft_defaults_to_five_and_omits_blank_comment() {
        let mut form = RatingForm::default();
        form.user_name = "alice".into();
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.rating, 5);
        assert_eq!(draft.comment, None);
    }

    #[test]
    fn rating_steps_stay_in_range() {
        let mut form = RatingForm::default();
        form.step_rating(true);
        assert_eq!(form.rating, 5);
        for _ in 0..10 {
            form.step_rating(false);
        }
        assert_eq!(form.rating, 1);
    }

    #[test]
    fn clear_resets_entered_values() {
        let mut form = RatingForm::default();
        form.user_name = "bob".into();
        form.comment = "great".into();
        form.rating = 2;
        form.error = Some("boom".into());
        form.clear();
        assert_eq!(form, RatingForm::default());
    }

    #[test]
    fn open_resets_form_and_status() {
        let mut state = DetailState::default();
        state.form.user_name = "carol".into();
        state.status = DetailStatus::NotFound;
        state.open(9);
        assert_eq!(state.tool_id, Some(9));
        assert_eq!(state.status, DetailStatus::Loading);
        assert!(state.form.user_name.is_empty());
    }
}
