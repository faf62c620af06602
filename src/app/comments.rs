use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::app::markdown::MarkdownRenderer;
use crate::domain::comment::{Comment, NewComment};
use crate::infra::store::{Store, StoreError, StoreResult};

#[derive(Debug, Error)]
pub enum CommentError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to render markdown")]
    Render(#[source] fmt::Error),
}

#[derive(Clone)]
pub struct CommentService {
    store: Arc<dyn Store>,
    markdown: Option<MarkdownRenderer>,
}

impl CommentService {
    /// With `markdown` unset, comments are stored raw and carry no HTML.
    pub fn new(store: Arc<dyn Store>, markdown: Option<MarkdownRenderer>) -> Self {
        Self { store, markdown }
    }

    pub fn create_comment(&self, post_id: Uuid, content: String) -> Result<Comment, CommentError> {
        let mut comment = NewComment::new(content);
        if let Some(renderer) = &self.markdown {
            let html = renderer
                .render(&comment.content)
                .map_err(CommentError::Render)?;
            comment = comment.with_html(html);
        }

        let comment = self.store.create_comment(post_id, comment)?;
        tracing::info!(post_id = %post_id, comment_id = %comment.id, "comment created");
        Ok(comment)
    }

    /// Unlike [`Store::list_comments`], an unknown post is an error here:
    /// the API answers 404 rather than an empty list.
    pub fn list_comments(&self, post_id: Uuid) -> StoreResult<Vec<Comment>> {
        self.store.get_post(post_id)?;
        self.store.list_comments(post_id)
    }
}
