use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    /// Raw markdown as submitted.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_html: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The caller-supplied part of a comment. Id, post binding and timestamp
/// are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub content: String,
    pub content_html: Option<String>,
}

impl NewComment {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_html: None,
        }
    }

    pub fn with_html(mut self, html: String) -> Self {
        self.content_html = Some(html);
        self
    }

    pub(crate) fn into_comment(self, post_id: Uuid) -> Comment {
        Comment {
            id: Uuid::new_v4(),
            post_id,
            content: self.content,
            content_html: self.content_html,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
