//! Problem detail model

use serde::{Deserialize, Serialize};

/// Rich attributes of one problem, fetched on demand by slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetail {
    pub title: String,
    /// Difficulty label ("Easy", "Medium", "Hard")
    pub difficulty: String,
    pub likes: u64,
    pub dislikes: u64,
    pub topic_tags: Vec<TopicTag>,
}

/// Topic tag attached to a problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicTag {
    pub name: String,
}

impl ProblemDetail {
    /// Tag names in API order
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.topic_tags.iter().map(|t| t.name.as_str())
    }
}
