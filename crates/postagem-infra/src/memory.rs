//! In-memory storage - used as fallback when PostgreSQL is not configured,
//! and as the store behind the HTTP tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postagem_core::domain::{Category, Genre, NewPost, Post, User};
use postagem_core::error::RepoError;
use postagem_core::ports::{
    BaseRepository, CategoryRepository, GenreRepository, PostRepository, UserRepository,
};

const DEMO_CATEGORIES: [&str; 3] = ["Fotografia", "Música", "Arte"];
const DEMO_GENRES: [&str; 3] = ["Rock", "Samba", "MPB"];

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    categories: Vec<Category>,
    genres: Vec<Genre>,
    posts: Vec<Post>,
}

/// All tables behind one async RwLock.
///
/// Ids are assigned sequentially per table, starting at 1, inside the same
/// write lock that stores the row. Note: Data is lost on process restart.
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    pub async fn add_user(&self, name: &str) -> User {
        let mut tables = self.tables.write().await;
        let user = User {
            id: tables.users.len() as i64 + 1,
            name: name.to_string(),
        };
        tables.users.push(user.clone());
        user
    }

    pub async fn add_category(&self, name: &str) -> Category {
        let mut tables = self.tables.write().await;
        let category = Category {
            id: tables.categories.len() as i64 + 1,
            name: name.to_string(),
        };
        tables.categories.push(category.clone());
        category
    }

    pub async fn add_genre(&self, name: &str) -> Genre {
        let mut tables = self.tables.write().await;
        let genre = Genre {
            id: tables.genres.len() as i64 + 1,
            name: name.to_string(),
        };
        tables.genres.push(genre.clone());
        genre
    }

    /// Store pre-filled with one user plus a few categories and genres, so the
    /// create path works when no database is configured.
    pub async fn with_demo_data() -> Self {
        let store = Self::new();
        let user = store.add_user("demo").await;
        for name in DEMO_CATEGORIES {
            store.add_category(name).await;
        }
        for name in DEMO_GENRES {
            store.add_genre(name).await;
        }
        tracing::warn!(
            user_id = user.id,
            categories = DEMO_CATEGORIES.len(),
            genres = DEMO_GENRES.len(),
            "Seeded in-memory store with demo reference data"
        );
        store
    }

    /// Snapshot of every stored post.
    pub async fn posts(&self) -> Vec<Post> {
        self.tables.read().await.posts.clone()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, i64> for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.tables.read().await.users.clone())
    }
}

impl UserRepository for InMemoryStore {}

#[async_trait]
impl BaseRepository<Category, i64> for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        Ok(self.tables.read().await.categories.clone())
    }
}

impl CategoryRepository for InMemoryStore {}

#[async_trait]
impl BaseRepository<Genre, i64> for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.genres.iter().find(|g| g.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Genre>, RepoError> {
        Ok(self.tables.read().await.genres.clone())
    }
}

impl GenreRepository for InMemoryStore {}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts().await)
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut tables = self.tables.write().await;

        if !tables.users.iter().any(|u| u.id == post.user_id) {
            return Err(RepoError::Constraint(format!(
                "usuario_id {} does not exist",
                post.user_id
            )));
        }
        if !tables.categories.iter().any(|c| c.id == post.category_id) {
            return Err(RepoError::Constraint(format!(
                "categoria_id {} does not exist",
                post.category_id
            )));
        }

        let post = post.with_id(tables.posts.len() as i64 + 1);
        tables.posts.push(post.clone());
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn new_post(user_id: i64, category_id: i64) -> NewPost {
        NewPost {
            caption: "legenda".to_string(),
            description: "descricao".to_string(),
            content: None,
            created_at: Utc::now(),
            user_id,
            category_id,
            status: "ATIVO".to_string(),
        }
    }

    #[tokio::test]
    async fn test_reference_listing_keeps_insertion_order() {
        let store = InMemoryStore::new();
        store.add_category("Viagem").await;
        store.add_category("Arte").await;
        store.add_category("Comida").await;

        let first: Vec<Category> = store.find_all().await.unwrap();
        let second: Vec<Category> = store.find_all().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["Viagem", "Arte", "Comida"]
        );
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryStore::new();
        store.add_user("ana").await;
        store.add_category("Arte").await;

        let a = store.insert(new_post(1, 1)).await.unwrap();
        let b = store.insert(new_post(1, 1)).await.unwrap();

        assert_eq!((a.id, b.id), (1, 2));
        let found: Option<Post> = store.find_by_id(2).await.unwrap();
        assert_eq!(found, Some(b));
    }

    #[tokio::test]
    async fn test_demo_data_allows_a_post() {
        let store = InMemoryStore::with_demo_data().await;

        let categories: Vec<Category> = store.find_all().await.unwrap();
        let genres: Vec<Genre> = store.find_all().await.unwrap();
        assert_eq!(categories.first().map(|c| c.id), Some(1));
        assert_eq!(genres.len(), 3);

        let post = store.insert(new_post(1, categories[0].id)).await.unwrap();
        assert_eq!(post.id, 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_dangling_foreign_keys() {
        let store = InMemoryStore::new();
        store.add_user("ana").await;

        let err = store.insert(new_post(1, 9)).await.unwrap_err();

        assert!(matches!(err, RepoError::Constraint(_)));
        assert!(store.posts().await.is_empty());
    }
}
