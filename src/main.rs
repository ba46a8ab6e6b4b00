use removarr::{
    config::{self, Config, IntegrationsConfig},
    model::app::AppState,
    scheduler::start_scheduler,
    service::{settings::SettingsService, sync::SyncService},
    startup,
    util::gate::StoreGate,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing(&config.log_filter);

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), removarr::error::Error> {
    let db = startup::connect_to_database(&config).await?;

    let settings = SettingsService::new(&db).get_all().await?;
    let integrations_config = IntegrationsConfig::from_settings(&settings, config.request_timeout);
    let interval = config::sync_interval(&settings);
    let integrations = startup::build_integrations(integrations_config)?;

    let state = AppState {
        db,
        integrations,
        gate: StoreGate::new(),
        request_timeout: config.request_timeout,
    };

    let mut sched = start_scheduler(&state, interval).await?;

    tracing::info!("Starting removarr");
    SyncService::spawn_full_sync(state.clone());

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
    sched.shutdown().await?;

    Ok(())
}
