use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author_id: i64,
}

#[derive(Debug, Clone)]
pub(crate) struct PostPatch {
    pub(crate) title: String,
    pub(crate) content: String,
}

#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    /// Returns the post as re-read from storage, with the server-assigned id
    /// and the denormalized author nick.
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError>;
    /// Posts authored by `user_id` or by anyone `user_id` follows,
    /// de-duplicated, newest first (descending id).
    async fn feed_for_user(&self, user_id: i64) -> Result<Vec<Post>, DomainError>;
    /// Title and content only; author and like count are immutable here.
    async fn update_post(&self, id: i64, patch: PostPatch) -> Result<bool, DomainError>;
    async fn delete_post(&self, id: i64) -> Result<bool, DomainError>;
    async fn find_by_author(&self, author_id: i64) -> Result<Vec<Post>, DomainError>;
    /// Single atomic increment, never read-modify-write.
    async fn like_post(&self, id: i64) -> Result<bool, DomainError>;
    /// Single atomic decrement floored at zero.
    async fn deslike_post(&self, id: i64) -> Result<bool, DomainError>;
}
