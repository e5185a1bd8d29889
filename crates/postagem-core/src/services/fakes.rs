//! Minimal port implementations for service tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Category, Genre, NewPost, Post, User};
use crate::error::RepoError;
use crate::ports::{
    BaseRepository, CategoryRepository, GenreRepository, PostRepository, UserRepository,
};

#[derive(Default)]
pub struct FakeStore {
    users: Vec<User>,
    categories: Vec<Category>,
    genres: Vec<Genre>,
    posts: Mutex<Vec<Post>>,
    fail_inserts: bool,
}

impl FakeStore {
    pub fn seeded() -> Self {
        Self {
            users: vec![User {
                id: 1,
                name: "ana".to_string(),
            }],
            categories: vec![
                Category {
                    id: 10,
                    name: "Fotografia".to_string(),
                },
                Category {
                    id: 11,
                    name: "Música".to_string(),
                },
            ],
            genres: vec![Genre {
                id: 1,
                name: "Rock".to_string(),
            }],
            ..Default::default()
        }
    }

    pub fn failing_inserts(mut self) -> Self {
        self.fail_inserts = true;
        self
    }

    pub fn posts(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseRepository<User, i64> for FakeStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.users.clone())
    }
}

impl UserRepository for FakeStore {}

#[async_trait]
impl BaseRepository<Category, i64> for FakeStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, RepoError> {
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        Ok(self.categories.clone())
    }
}

impl CategoryRepository for FakeStore {}

#[async_trait]
impl BaseRepository<Genre, i64> for FakeStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>, RepoError> {
        Ok(self.genres.iter().find(|g| g.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Genre>, RepoError> {
        Ok(self.genres.clone())
    }
}

impl GenreRepository for FakeStore {}

#[async_trait]
impl BaseRepository<Post, i64> for FakeStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.posts().into_iter().find(|p| p.id == id))
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts())
    }
}

#[async_trait]
impl PostRepository for FakeStore {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        if self.fail_inserts {
            return Err(RepoError::Connection("connection refused".to_string()));
        }
        let mut posts = self.posts.lock().unwrap();
        let post = post.with_id(posts.len() as i64 + 1);
        posts.push(post.clone());
        Ok(post)
    }
}
