//! Utility functions

pub mod badges;
pub mod tags;

pub use badges::{difficulty_color, format_percentage, sentiment_emoji, tag_chips};
pub use tags::tag_color;
