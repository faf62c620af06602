//! In-memory [`Store`] backed by a single reader/writer lock.

use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::comment::{Comment, NewComment};
use crate::domain::post::Post;
use crate::infra::store::{Store, StoreError, StoreResult, StoreStats};

#[derive(Default)]
struct Tables {
    /// Insertion order.
    posts: Vec<Post>,
    post_index: HashMap<Uuid, usize>,
    comments: HashMap<Uuid, Vec<Comment>>,
    comment_count: usize,
}

impl Tables {
    fn post(&self, id: Uuid) -> Option<&Post> {
        self.post_index.get(&id).map(|&slot| &self.posts[slot])
    }
}

/// Lives for the whole process; nothing is ever removed.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for InMemoryStore {
    fn create_post(&self, content: String) -> StoreResult<Post> {
        let post = Post::new(content);

        let mut tables = self.tables.write();
        let slot = tables.posts.len();
        tables.post_index.insert(post.id, slot);
        tables.posts.push(post.clone());

        Ok(post)
    }

    fn get_post(&self, id: Uuid) -> StoreResult<Post> {
        self.tables
            .read()
            .post(id)
            .cloned()
            .ok_or(StoreError::PostNotFound(id))
    }

    fn list_posts(&self) -> StoreResult<Vec<Post>> {
        Ok(self.tables.read().posts.clone())
    }

    fn create_comment(&self, post_id: Uuid, comment: NewComment) -> StoreResult<Comment> {
        let mut tables = self.tables.write();
        if tables.post(post_id).is_none() {
            return Err(StoreError::PostNotFound(post_id));
        }

        let comment = comment.into_comment(post_id);
        tables
            .comments
            .entry(post_id)
            .or_default()
            .push(comment.clone());
        tables.comment_count += 1;

        Ok(comment)
    }

    fn list_comments(&self, post_id: Uuid) -> StoreResult<Vec<Comment>> {
        let tables = self.tables.read();
        Ok(tables.comments.get(&post_id).cloned().unwrap_or_default())
    }

    fn stats(&self) -> StoreResult<StoreStats> {
        let tables = self.tables.read();
        Ok(StoreStats {
            posts: tables.posts.len(),
            comments: tables.comment_count,
        })
    }
}
