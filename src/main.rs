use chrono::Utc;
use quest_tracker::{
    AppState, Config, DayKey, Store, load_storage, logging, router, save_store,
    timers::{spawn_persist_timer, spawn_rollover_timer},
};
use std::net::SocketAddr;
use tokio::fs;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let today = DayKey::today();
    let storage = load_storage(&config.data_path).await;
    let (mut store, notifications) = Store::open(
        &storage,
        today,
        Utc::now().timestamp_millis(),
        config.seed_sample_data,
        config.rollover_policy(),
    );
    for notification in &notifications {
        info!(?notification, "startup");
    }
    save_store(&config.data_path, &mut store, today).await?;

    let state = AppState::new(config.data_path.clone(), store, config.rollover_policy());
    let persist = spawn_persist_timer(state.clone(), config.persist_interval);
    let rollover = spawn_rollover_timer(state.clone(), config.rollover_interval);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    persist.abort();
    rollover.abort();
    if let Err(err) = state.persist(DayKey::today()).await {
        error!(?err, "final save failed");
        return Err(err.into());
    }
    info!("state saved, exiting");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(?err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
