use std::sync::Arc;

use crate::domain::{CreatePost, NewPost, Post};
use crate::error::DomainError;
use crate::ports::{CategoryRepository, PostRepository, UserRepository};

/// Creates posts after resolving their user and category.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            posts,
            users,
            categories,
        }
    }

    /// Create a post.
    ///
    /// References are resolved before anything is written, so a missing user
    /// or category never leaves a partial record behind.
    pub async fn create(&self, command: CreatePost) -> Result<Post, DomainError> {
        command.validate()?;

        let user = self
            .users
            .find_by_id(command.user_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "User",
                id: command.user_id,
            })?;

        let category = self
            .categories
            .find_by_id(command.category_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Category",
                id: command.category_id,
            })?;

        if let Some(attachment) = &command.attachment {
            tracing::debug!(
                filename = %attachment.filename,
                size = attachment.bytes.len(),
                "Attaching uploaded file to post"
            );
        }

        let post = self.posts.insert(NewPost::from_command(command)).await?;

        tracing::info!(
            post_id = post.id,
            user_id = user.id,
            category_id = category.id,
            has_content = post.content.is_some(),
            "Post created"
        );

        Ok(post)
    }
}
