use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

use postagem_core::domain::{Category, NewPost, Post, User};
use postagem_core::error::RepoError;
use postagem_core::ports::{BaseRepository, PostRepository};

use crate::database::entity::{category, post, user};
use crate::database::postgres_repo::{
    PostgresCategoryRepository, PostgresPostRepository, PostgresUserRepository,
};

fn new_post(content: Option<Vec<u8>>) -> NewPost {
    NewPost {
        caption: "Test Post".to_owned(),
        description: "Content".to_owned(),
        content,
        created_at: Utc::now(),
        user_id: 3,
        category_id: 5,
        status: "ATIVO".to_owned(),
    }
}

#[tokio::test]
async fn test_find_user_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user::Model {
            id: 3,
            name: "ana".to_owned(),
        }]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let result: Option<User> = repo.find_by_id(3).await.unwrap();

    let user = result.unwrap();
    assert_eq!(user.id, 3);
    assert_eq!(user.name, "ana");
}

#[tokio::test]
async fn test_find_missing_user_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let result: Option<User> = repo.find_by_id(404).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_all_categories_orders_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            category::Model {
                id: 1,
                name: "Fotografia".to_owned(),
            },
            category::Model {
                id: 2,
                name: "Música".to_owned(),
            },
        ]])
        .into_connection();

    let repo = PostgresCategoryRepository::new(db);

    let categories: Vec<Category> = repo.find_all().await.unwrap();
    assert_eq!(
        categories.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![1, 2]
    );

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains("ORDER BY"), "{log}");
}

#[tokio::test]
async fn test_insert_post_returns_assigned_id() {
    let now = Utc::now();
    let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post::Model {
            id: 21,
            caption: "Test Post".to_owned(),
            description: "Content".to_owned(),
            content: Some(bytes.clone()),
            created_at: now.into(),
            user_id: 3,
            category_id: 5,
            status: "ATIVO".to_owned(),
        }]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let post: Post = repo.insert(new_post(Some(bytes.clone()))).await.unwrap();
    assert_eq!(post.id, 21);
    assert_eq!(post.content, Some(bytes));

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains("INSERT INTO"), "{log}");
    assert!(log.contains("postagem"), "{log}");
    assert!(log.contains("usuario_id"), "{log}");
    assert!(!log.contains("genero"), "{log}");
}

#[tokio::test]
async fn test_insert_failure_maps_to_repo_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("disk full".to_owned())])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let err = repo.insert(new_post(None)).await.unwrap_err();
    assert!(matches!(err, RepoError::Query(_)));
}
