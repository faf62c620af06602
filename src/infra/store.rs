use thiserror::Error;
use uuid::Uuid;

use crate::domain::comment::{Comment, NewComment};
use crate::domain::post::Post;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("post with id {0} not found")]
    PostNotFound(Uuid),

    /// Unexpected failure inside a backend. The in-memory store never
    /// produces it.
    #[error("store backend failure: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub posts: usize,
    pub comments: usize,
}

/// Repository for posts and their comments.
///
/// Implementations must be safe to share between request tasks and must
/// assign ids and timestamps themselves. `create_comment` checks the parent
/// post and appends in one atomic step.
pub trait Store: Send + Sync + 'static {
    /// Inserts a post. `content` is expected to be validated by the caller.
    fn create_post(&self, content: String) -> StoreResult<Post>;

    fn get_post(&self, id: Uuid) -> StoreResult<Post>;

    /// All posts in insertion order. Empty, not an error, on an empty store.
    fn list_posts(&self) -> StoreResult<Vec<Post>>;

    /// Fails with [`StoreError::PostNotFound`] without mutating anything when
    /// `post_id` does not name a stored post.
    fn create_comment(&self, post_id: Uuid, comment: NewComment) -> StoreResult<Comment>;

    /// Comments of a post in insertion order. Unknown post ids yield an
    /// empty list; callers that need a 404 check the post separately.
    fn list_comments(&self, post_id: Uuid) -> StoreResult<Vec<Comment>>;

    fn stats(&self) -> StoreResult<StoreStats>;
}
