use std::sync::Arc;

use crate::domain::{Category, Genre};
use crate::error::DomainError;
use crate::ports::{CategoryRepository, GenreRepository};

/// Read-only listing of reference data.
#[derive(Clone)]
pub struct ReferenceService {
    genres: Arc<dyn GenreRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ReferenceService {
    pub fn new(genres: Arc<dyn GenreRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { genres, categories }
    }

    pub async fn list_genres(&self) -> Result<Vec<Genre>, DomainError> {
        Ok(self.genres.find_all().await?)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.categories.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::FakeStore;

    #[tokio::test]
    async fn test_listings_are_stable() {
        let store = Arc::new(FakeStore::seeded());
        let service = ReferenceService::new(store.clone(), store.clone());

        let first = service.list_categories().await.unwrap();
        let second = service.list_categories().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![10, 11]
        );

        let genres = service.list_genres().await.unwrap();
        assert_eq!(genres.len(), 1);
        assert_eq!(genres[0].name, "Rock");
    }
}
