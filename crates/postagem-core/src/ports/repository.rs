use async_trait::async_trait;

use crate::domain::{Category, Genre, NewPost, Post, User};
use crate::error::RepoError;

/// Generic read-side repository trait.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Return every entity in insertion order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;
}

/// User lookups, used to resolve the owner of a post.
pub trait UserRepository: BaseRepository<User, i64> {}

/// Category lookups and listing.
pub trait CategoryRepository: BaseRepository<Category, i64> {}

/// Genre listing.
pub trait GenreRepository: BaseRepository<Genre, i64> {}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// Persist a new post as a single atomic write, returning it with its assigned id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;
}
