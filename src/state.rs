//! Per-screen application state.
//!
//! Each screen owns its own private state struct; nothing here is shared
//! across screens except through explicit navigation in [`crate::app`].

pub mod detail;
pub mod listing;
pub mod submit;

pub use detail::{DetailState, DetailStatus, RatingField, RatingForm};
pub use listing::{FilterState, ListingFocus, ListingState};
pub use submit::{SubmitField, SubmitState};
