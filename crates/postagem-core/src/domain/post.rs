use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::DomainError;

/// Status assigned when the client does not send one.
pub const DEFAULT_POST_STATUS: &str = "ATIVO";

/// Post entity - a persisted user publication.
///
/// There is deliberately no genre field: a post belongs to exactly one user
/// and one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: i64,
    pub caption: String,
    pub description: String,
    #[serde(skip_serializing)]
    pub content: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub category_id: i64,
    pub status: String,
}

/// A post that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub caption: String,
    pub description: String,
    pub content: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub category_id: i64,
    pub status: String,
}

impl NewPost {
    /// Build the record to persist, stamping the creation time from the server clock.
    pub fn from_command(command: CreatePost) -> Self {
        let status = command
            .status
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_POST_STATUS.to_string());

        Self {
            caption: command.caption,
            description: command.description,
            content: command.attachment.map(|a| a.bytes),
            created_at: Utc::now(),
            user_id: command.user_id,
            category_id: command.category_id,
            status,
        }
    }

    pub fn with_id(self, id: i64) -> Post {
        Post {
            id,
            caption: self.caption,
            description: self.description,
            content: self.content,
            created_at: self.created_at,
            user_id: self.user_id,
            category_id: self.category_id,
            status: self.status,
        }
    }
}

/// Validated input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePost {
    pub caption: String,
    pub description: String,
    pub user_id: i64,
    pub category_id: i64,
    pub status: Option<String>,
    pub attachment: Option<Attachment>,
}

impl CreatePost {
    /// Identity columns start at 1, so zero or negative ids can never resolve.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.user_id <= 0 {
            return Err(DomainError::Validation(
                "usuario.id must be a positive integer".to_string(),
            ));
        }
        if self.category_id <= 0 {
            return Err(DomainError::Validation(
                "categoria.id must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

/// An uploaded file, fully buffered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub bytes: Vec<u8>,
}
