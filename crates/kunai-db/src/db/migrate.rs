use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// ## Summary
/// Applies pending schema migrations over a blocking connection.
///
/// ## Errors
/// Returns an error if the connection cannot be established or a migration fails.
#[tracing::instrument(skip(database_url))]
pub async fn run_migrations(database_url: &str) -> anyhow::Result<()> {
    let url = database_url.to_string();
    let applied = tokio::task::spawn_blocking(move || {
        let mut conn = diesel::PgConnection::establish(&url)?;
        let versions = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| anyhow::anyhow!("Failed to run migrations: {e}"))?;
        Ok::<_, anyhow::Error>(versions.len())
    })
    .await??;

    tracing::info!(applied, "Database migrations applied");

    Ok(())
}
