use std::sync::Arc;

use uuid::Uuid;

use crate::domain::post::{Post, PostWithComments};
use crate::infra::store::{Store, StoreResult};

#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn Store>,
}

impl PostService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub fn create_post(&self, content: String) -> StoreResult<Post> {
        let post = self.store.create_post(content)?;
        tracing::info!(post_id = %post.id, "post created");
        Ok(post)
    }

    pub fn get_post(&self, post_id: Uuid) -> StoreResult<Post> {
        self.store.get_post(post_id)
    }

    /// Posts are never deleted, so the two reads cannot disagree about the
    /// post's existence.
    pub fn get_post_with_comments(&self, post_id: Uuid) -> StoreResult<PostWithComments> {
        let post = self.store.get_post(post_id)?;
        let comments = self.store.list_comments(post_id)?;
        Ok(PostWithComments { post, comments })
    }

    pub fn list_posts(&self) -> StoreResult<Vec<Post>> {
        self.store.list_posts()
    }
}
