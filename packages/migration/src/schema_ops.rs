//! Shared idempotent schema operations.
//!
//! Both column-add migrations go through `ensure_column` instead of carrying
//! their own check-then-alter logic.

use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseBackend, DbErr, Statement};
use sea_orm_migration::SchemaManager;

/// A column that must exist on a table after the migration runs.
///
/// `default` is a string literal; it is quoted when the ALTER statement is
/// built. `after` is a position hint honored on MySQL only — SQLite appends
/// new columns at the end of the table.
pub struct ColumnSpec<'a> {
    pub table: &'a str,
    pub column: &'a str,
    pub sql_type: &'a str,
    pub not_null: bool,
    pub default: Option<&'a str>,
    pub after: Option<&'a str>,
}

/// Add the column if it is missing; no-op if it is already there.
///
/// Returns `true` if an ALTER was issued. The single ALTER is not wrapped in
/// a transaction; DDL atomicity is whatever the engine provides.
pub async fn ensure_column(
    manager: &SchemaManager<'_>,
    spec: &ColumnSpec<'_>,
) -> Result<bool, DbErr> {
    if manager.has_column(spec.table, spec.column).await? {
        tracing::info!(
            "column '{}' already exists on '{}', skipping",
            spec.column,
            spec.table
        );
        return Ok(false);
    }

    tracing::info!("adding column '{}' to '{}'", spec.column, spec.table);

    let backend = manager.get_database_backend();
    let mut sql = format!(
        "ALTER TABLE {} ADD COLUMN {} {}",
        spec.table, spec.column, spec.sql_type
    );
    if spec.not_null {
        sql.push_str(" NOT NULL");
    }
    if let Some(default) = spec.default {
        sql.push_str(&format!(" DEFAULT '{default}'"));
    }
    if let (DatabaseBackend::MySql, Some(after)) = (backend, spec.after) {
        sql.push_str(&format!(" AFTER {after}"));
    }

    manager
        .get_connection()
        .execute(Statement::from_string(backend, sql))
        .await?;

    tracing::info!("column '{}' added to '{}'", spec.column, spec.table);
    Ok(true)
}

/// Drop the column if it exists. Counterpart of `ensure_column` for `down()`.
pub async fn drop_column_if_exists(
    manager: &SchemaManager<'_>,
    table: &str,
    column: &str,
) -> Result<(), DbErr> {
    if !manager.has_column(table, column).await? {
        return Ok(());
    }
    let backend = manager.get_database_backend();
    manager
        .get_connection()
        .execute(Statement::from_string(
            backend,
            format!("ALTER TABLE {table} DROP COLUMN {column}"),
        ))
        .await?;
    Ok(())
}

/// Fetch the live column list of a table, in catalog order.
pub async fn table_columns<C: ConnectionTrait>(
    conn: &C,
    table: &str,
) -> Result<Vec<String>, DbErr> {
    let backend = conn.get_database_backend();
    let stmt = match backend {
        DatabaseBackend::MySql => Statement::from_string(
            backend,
            format!(
                "SELECT COLUMN_NAME AS name FROM INFORMATION_SCHEMA.COLUMNS \
                 WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = '{table}' \
                 ORDER BY ORDINAL_POSITION"
            ),
        ),
        DatabaseBackend::Sqlite => Statement::from_string(
            backend,
            format!("SELECT name FROM pragma_table_info('{table}')"),
        ),
        other => {
            return Err(DbErr::Custom(format!(
                "column introspection not supported for backend {other:?}"
            )))
        }
    };

    let rows = conn.query_all(stmt).await?;
    let mut columns = Vec::with_capacity(rows.len());
    for row in rows {
        columns.push(row.try_get::<String>("", "name")?);
    }
    Ok(columns)
}

/// Diff the observed column set against an expected list and log the gaps.
///
/// Advisory only: missing columns are reported, never created here. Returns
/// the missing names so callers (and tests) can inspect them.
pub async fn report_missing_columns(
    manager: &SchemaManager<'_>,
    table: &str,
    expected: &[&str],
) -> Result<Vec<String>, DbErr> {
    let observed = table_columns(manager.get_connection(), table).await?;
    tracing::info!("existing columns on '{}': {:?}", table, observed);

    let missing: Vec<String> = expected
        .iter()
        .filter(|col| !observed.iter().any(|o| o == *col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        tracing::info!("all expected columns exist on '{}'", table);
    } else {
        tracing::warn!(
            "missing columns on '{}': {:?}; create these manually or via a follow-up migration",
            table,
            missing
        );
    }

    Ok(missing)
}
