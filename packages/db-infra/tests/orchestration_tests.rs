use db_infra::config::db::{DbKind, RuntimeEnv};
use db_infra::infra::db::orchestrate_migration_internal;
use db_infra::{orchestrate_migration, DbInfraError};
use migration::count_applied_migrations;
use migration::sea_orm::{ConnectOptions, Database, DatabaseConnection};
use migration::MigrationCommand;
use serial_test::serial;

async fn mem_pool() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.min_connections(1).max_connections(1).sqlx_logging(false);
    Database::connect(opt).await.expect("connect sqlite memory")
}

#[tokio::test]
async fn up_runs_and_is_idempotent() {
    let pool = mem_pool().await;

    orchestrate_migration_internal(
        &pool,
        RuntimeEnv::Test,
        DbKind::SqliteMemory,
        MigrationCommand::Up,
    )
    .await
    .expect("first up");
    let before = count_applied_migrations(&pool).await.expect("count");

    orchestrate_migration_internal(
        &pool,
        RuntimeEnv::Test,
        DbKind::SqliteMemory,
        MigrationCommand::Up,
    )
    .await
    .expect("second up");
    let after = count_applied_migrations(&pool).await.expect("count");

    assert_eq!(before, after, "migration count changed on second up");
}

#[tokio::test]
async fn reset_leaves_no_migrations_applied() {
    let pool = mem_pool().await;

    orchestrate_migration_internal(
        &pool,
        RuntimeEnv::Test,
        DbKind::SqliteMemory,
        MigrationCommand::Up,
    )
    .await
    .expect("up");

    orchestrate_migration_internal(
        &pool,
        RuntimeEnv::Test,
        DbKind::SqliteMemory,
        MigrationCommand::Reset,
    )
    .await
    .expect("reset");

    assert_eq!(count_applied_migrations(&pool).await.expect("count"), 0);
}

#[tokio::test]
async fn status_makes_no_schema_change() {
    let pool = mem_pool().await;

    orchestrate_migration_internal(
        &pool,
        RuntimeEnv::Test,
        DbKind::SqliteMemory,
        MigrationCommand::Status,
    )
    .await
    .expect("status");

    assert_eq!(count_applied_migrations(&pool).await.expect("count"), 0);
}

#[tokio::test]
#[serial]
async fn missing_mysql_config_fails_before_connecting() {
    std::env::remove_var("TEST_DB");
    std::env::remove_var("TREEFAMS_DB_USER");
    std::env::remove_var("TREEFAMS_DB_PASSWORD");

    let res = orchestrate_migration(RuntimeEnv::Test, DbKind::Mysql, MigrationCommand::Up).await;

    match res {
        Err(DbInfraError::Config { .. }) => {}
        other => panic!("expected config error, got {other:?}"),
    }
}
