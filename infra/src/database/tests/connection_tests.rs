//! Unit tests for database connection pool

use mall_shared::config::DatabaseConfig;

use crate::database::connection::{DatabasePool, PoolStatistics};
use crate::database::MIGRATOR;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("mall_infra=debug")
        .try_init();
}

#[tokio::test]
async fn test_pool_creation_with_invalid_url() {
    let config = DatabaseConfig::new("invalid://url");

    let result = DatabasePool::new(config).await;
    assert!(result.is_err());
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_pool_health_check() -> anyhow::Result<()> {
    init_tracing();
    let config = DatabaseConfig::from_env().with_max_connections(5);

    let pool = DatabasePool::new(config).await?;
    assert!(pool.health_check().await?);
    Ok(())
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_migrations_apply_cleanly() -> anyhow::Result<()> {
    init_tracing();
    let config = DatabaseConfig::from_env().with_max_connections(5);

    let pool = DatabasePool::new(config).await?;
    MIGRATOR.run(pool.get_pool()).await?;
    Ok(())
}

#[test]
fn test_pool_statistics_display() {
    let stats = PoolStatistics {
        connections: 5,
        idle_connections: 3,
        max_connections: 10,
    };

    let display = format!("{}", stats);
    assert!(display.contains("5/10"));
    assert!(display.contains("3 idle"));
}
