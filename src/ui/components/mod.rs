//! Reusable UI components.

pub mod input_field;
pub mod tool_card;

pub use input_field::InputField;
pub use tool_card::render_tool_card;
