use std::sync::Arc;

use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::ensure_owner;
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post, UpdatePostRequest};

pub(crate) struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub(crate) fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// The author always comes from the authenticated caller; nothing in the
    /// payload can override it.
    pub(crate) async fn create_post(
        &self,
        author_id: i64,
        req: CreatePostRequest,
    ) -> Result<Post, DomainError> {
        let req = req.validate()?;

        self.posts
            .create_post(NewPost {
                title: req.title,
                content: req.content,
                author_id,
            })
            .await
    }

    pub(crate) async fn feed(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
        self.posts.feed_for_user(user_id).await
    }

    pub(crate) async fn get_post(&self, post_id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("post id: {post_id}")))
    }

    pub(crate) async fn update_post(
        &self,
        actor_id: i64,
        post_id: i64,
        req: UpdatePostRequest,
    ) -> Result<(), DomainError> {
        let post = self.get_post(post_id).await?;
        ensure_owner(
            actor_id,
            post.author_id,
            "you cannot update a post that is not yours",
        )?;
        let req = req.validate()?;

        let updated = self
            .posts
            .update_post(
                post_id,
                PostPatch {
                    title: req.title,
                    content: req.content,
                },
            )
            .await?;
        if !updated {
            return Err(DomainError::NotFound(format!("post id: {post_id}")));
        }
        Ok(())
    }

    pub(crate) async fn delete_post(&self, actor_id: i64, post_id: i64) -> Result<(), DomainError> {
        let post = self.get_post(post_id).await?;
        ensure_owner(
            actor_id,
            post.author_id,
            "you cannot delete a post that is not yours",
        )?;

        let deleted = self.posts.delete_post(post_id).await?;
        if !deleted {
            return Err(DomainError::NotFound(format!("post id: {post_id}")));
        }
        Ok(())
    }

    pub(crate) async fn posts_by_user(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
        self.posts.find_by_author(user_id).await
    }

    pub(crate) async fn like_post(&self, post_id: i64) -> Result<(), DomainError> {
        let liked = self.posts.like_post(post_id).await?;
        if !liked {
            return Err(DomainError::NotFound(format!("post id: {post_id}")));
        }
        Ok(())
    }

    pub(crate) async fn deslike_post(&self, post_id: i64) -> Result<(), DomainError> {
        let desliked = self.posts.deslike_post(post_id).await?;
        if !desliked {
            return Err(DomainError::NotFound(format!("post id: {post_id}")));
        }
        Ok(())
    }
}
