//! Application state - shared across all handlers.

use std::sync::Arc;

use postagem_core::services::{PostService, ReferenceService};
use postagem_infra::InMemoryStore;
use postagem_infra::database::DatabaseConnections;

#[cfg(feature = "postgres")]
use postagem_infra::database::{
    PostgresCategoryRepository, PostgresGenreRepository, PostgresPostRepository,
    PostgresUserRepository,
};

use crate::config::AppConfig;
use crate::handlers::form::FormLimits;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub references: ReferenceService,
    pub form_limits: FormLimits,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let form_limits = FormLimits::new(config.max_upload_bytes);

        #[cfg(feature = "postgres")]
        let connections = match &config.database {
            Some(db_config) => match DatabaseConnections::init(db_config).await {
                Ok(connections) => Some(Arc::new(connections)),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    None
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                None
            }
        };

        #[cfg(not(feature = "postgres"))]
        let connections: Option<Arc<DatabaseConnections>> = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            None
        };

        let state = match connections {
            #[cfg(feature = "postgres")]
            Some(connections) => Self::postgres(connections, form_limits),
            _ => Self::in_memory(Arc::new(InMemoryStore::with_demo_data().await), form_limits),
        };

        tracing::info!(
            storage = if state.db.is_some() { "postgres" } else { "memory" },
            "Application state initialized"
        );

        state
    }

    /// State backed by a single in-memory store.
    pub fn in_memory(store: Arc<InMemoryStore>, form_limits: FormLimits) -> Self {
        Self {
            posts: PostService::new(store.clone(), store.clone(), store.clone()),
            references: ReferenceService::new(store.clone(), store),
            form_limits,
            db: None,
        }
    }

    #[cfg(feature = "postgres")]
    fn postgres(connections: Arc<DatabaseConnections>, form_limits: FormLimits) -> Self {
        let conn = &connections.main;
        let categories = Arc::new(PostgresCategoryRepository::new(conn.clone()));

        Self {
            posts: PostService::new(
                Arc::new(PostgresPostRepository::new(conn.clone())),
                Arc::new(PostgresUserRepository::new(conn.clone())),
                categories.clone(),
            ),
            references: ReferenceService::new(
                Arc::new(PostgresGenreRepository::new(conn.clone())),
                categories,
            ),
            form_limits,
            db: Some(connections),
        }
    }
}
