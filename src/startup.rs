use sea_orm::DatabaseConnection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::{Config, IntegrationsConfig},
    error::Error,
    integration::IntegrationsHandle,
};

/// Install the global tracing subscriber
///
/// Falls back to `info` if the filter directive cannot be parsed.
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {:?}, using info: {}", filter, e);
        EnvFilter::new("info")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the initial integrations registry from the settings snapshot
pub fn build_integrations(config: IntegrationsConfig) -> Result<IntegrationsHandle, Error> {
    Ok(IntegrationsHandle::from_config(config)?)
}
