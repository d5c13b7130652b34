//! Badge and decoration helpers for generated documents

use crate::constants::{
    difficulty_colors, emojis, LIKE_RATIO_DOWN, LIKE_RATIO_UP, SHIELDS_URL,
};
use crate::utils::tags::tag_color;

/// Sentiment marker derived from the like ratio; empty when neutral.
///
/// A ratio of exactly 0.8 counts as a thumbs-up.
pub fn sentiment_emoji(likes: u64, dislikes: u64) -> &'static str {
    let votes = likes + dislikes;
    if votes == 0 {
        return "";
    }

    let ratio = likes as f64 / votes as f64;
    if ratio >= LIKE_RATIO_UP {
        emojis::THUMBS_UP
    } else if ratio < LIKE_RATIO_DOWN {
        emojis::THUMBS_DOWN
    } else {
        ""
    }
}

/// Badge colour for a difficulty label; anything unrecognized is treated as hard
pub fn difficulty_color(difficulty: &str) -> &'static str {
    match difficulty {
        "Easy" => difficulty_colors::EASY,
        "Medium" => difficulty_colors::MEDIUM,
        _ => difficulty_colors::HARD,
    }
}

/// Large difficulty badge shown under the page title
pub fn difficulty_badge(difficulty: &str) -> String {
    format!(
        "![]({}/-{}-{}.svg?style=for-the-badge)",
        SHIELDS_URL,
        difficulty,
        difficulty_color(difficulty)
    )
}

/// Space-separated chips for every tag with a known colour
pub fn tag_chips<'a>(tags: impl IntoIterator<Item = &'a str>) -> String {
    tags.into_iter()
        .filter_map(|name| {
            tag_color(name).map(|color| {
                format!(
                    "![]({}/-{}-{}.svg?style=flat-square)",
                    SHIELDS_URL,
                    escape_badge_text(name),
                    color
                )
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// shields.io treats a single hyphen as a field separator
pub fn escape_badge_text(text: &str) -> String {
    text.replace('-', "--")
}

/// Percentage rounded to two decimals, printed with at least one fractional digit
pub fn format_percentage(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{:.2}", rounded);
    let trimmed = text.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}
