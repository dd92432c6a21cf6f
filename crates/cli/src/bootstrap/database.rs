use chave_admin_domain::config::DatabaseConfig;
use chave_admin_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", cfg.path);

    let pool = create_pool(&cfg.path, cfg).await.map_err(|e| {
        error!("Failed to initialize database pool: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Database initialized successfully (pool max={}, min={})",
        cfg.max_connections, cfg.min_connections
    );

    Ok(pool)
}
