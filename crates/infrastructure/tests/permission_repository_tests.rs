use chave_admin_application::ports::PermissionRepository;
use chave_admin_infrastructure::repositories::SqlitePermissionRepository;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(
        r#"
        CREATE TABLE permissions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            key TEXT NOT NULL UNIQUE,
            description TEXT,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    for (id, name) in [(1, "users.read"), (2, "users.write"), (3, "reports.read")] {
        sqlx::query("INSERT INTO permissions (id, name, key) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(name.replace('.', "-"))
            .execute(&pool)
            .await
            .unwrap();
    }

    pool
}

#[tokio::test]
async fn test_get_by_id_found() {
    let pool = create_test_db().await;
    let repo = SqlitePermissionRepository::new(pool);

    let permission = repo.get_by_id(2).await.unwrap().unwrap();
    assert_eq!(permission.id, 2);
    assert_eq!(permission.name.as_ref(), "users.write");
}

#[tokio::test]
async fn test_get_by_id_missing_returns_none() {
    let pool = create_test_db().await;
    let repo = SqlitePermissionRepository::new(pool);

    assert!(repo.get_by_id(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_by_ids_returns_found_subset() {
    let pool = create_test_db().await;
    let repo = SqlitePermissionRepository::new(pool);

    let found = repo.get_by_ids(&[1, 3]).await.unwrap();
    let ids: Vec<i64> = found.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_get_by_ids_silently_drops_missing() {
    let pool = create_test_db().await;
    let repo = SqlitePermissionRepository::new(pool);

    let found = repo.get_by_ids(&[2, 404, 3]).await.unwrap();
    let ids: Vec<i64> = found.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
async fn test_get_by_ids_empty_input() {
    let pool = create_test_db().await;
    let repo = SqlitePermissionRepository::new(pool);

    let found = repo.get_by_ids(&[]).await.unwrap();
    assert!(found.is_empty());
}
