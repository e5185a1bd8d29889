//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::ActiveModelTrait;

use postagem_core::domain::{NewPost, Post};
use postagem_core::error::RepoError;
use postagem_core::ports::{CategoryRepository, GenreRepository, PostRepository, UserRepository};

use super::entity::category::Entity as CategoryEntity;
use super::entity::genre::Entity as GenreEntity;
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::Entity as UserEntity;
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL category repository.
pub type PostgresCategoryRepository = PostgresBaseRepository<CategoryEntity>;

/// PostgreSQL genre repository.
pub type PostgresGenreRepository = PostgresBaseRepository<GenreEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

impl UserRepository for PostgresUserRepository {}

impl CategoryRepository for PostgresCategoryRepository {}

impl GenreRepository for PostgresGenreRepository {}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = post.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Post row inserted");

        Ok(model.into())
    }
}
