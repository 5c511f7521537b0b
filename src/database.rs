use sqlx::mysql::{MySql, MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::Transaction;

use crate::{config::DatabaseSettings, error::ApiError};

/// Paired read-only and read-write connection pools.
///
/// Every SELECT goes through [`Database::read`], every write through
/// [`Database::write`]. Multi-statement writes open an explicit transaction with
/// [`Database::begin`] and thread the returned handle through the unit of work;
/// dropping the handle without committing rolls back.
#[derive(Clone)]
pub struct Database {
    ro: MySqlPool,
    rw: MySqlPool,
}

impl Database {
    /// Open both pools eagerly, failing if either connection cannot be established.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, ApiError> {
        let options = connect_options(settings);

        let ro = MySqlPoolOptions::new()
            .connect_with(options.clone())
            .await?;
        let rw = MySqlPoolOptions::new().connect_with(options).await?;

        tracing::info!(
            host = %settings.host,
            schema = %settings.schema,
            "database pools established"
        );

        Ok(Self { ro, rw })
    }

    /// Build both pools without touching the network. Connections are
    /// established on first use.
    pub fn connect_lazy(settings: &DatabaseSettings) -> Self {
        let options = connect_options(settings);

        Self {
            ro: MySqlPoolOptions::new().connect_lazy_with(options.clone()),
            rw: MySqlPoolOptions::new().connect_lazy_with(options),
        }
    }

    /// Pool for SELECT statements.
    pub fn read(&self) -> &MySqlPool {
        &self.ro
    }

    /// Pool for INSERT/UPDATE statements outside a transaction.
    pub fn write(&self) -> &MySqlPool {
        &self.rw
    }

    /// Open a transaction on the read-write pool. The caller owns the handle:
    /// commit explicitly, or let drop roll it back.
    pub async fn begin(&self) -> Result<Transaction<'static, MySql>, ApiError> {
        Ok(self.rw.begin().await?)
    }

    pub async fn run_migrations(&self) -> Result<(), ApiError> {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&self.rw).await?;
        tracing::info!("database migrations completed");
        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), ApiError> {
        sqlx::query("SELECT 1").execute(&self.ro).await?;
        Ok(())
    }
}

fn connect_options(settings: &DatabaseSettings) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(&settings.pass)
        .database(&settings.schema)
        .charset(&settings.charset)
        .collation(&settings.collation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> DatabaseSettings {
        DatabaseSettings {
            host: "localhost".to_string(),
            port: 3306,
            user: "cadastro".to_string(),
            pass: "cadastro".to_string(),
            schema: "cadastro".to_string(),
            charset: "utf8mb4".to_string(),
            collation: "utf8mb4_general_ci".to_string(),
        }
    }

    #[tokio::test]
    async fn test_connect_lazy_builds_without_server() {
        let database = Database::connect_lazy(&test_settings());

        // No I/O yet; both pools are live handles.
        assert!(!database.read().is_closed());
        assert!(!database.write().is_closed());
    }
}
