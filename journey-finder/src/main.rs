use tracing::info;
use tracing_subscriber::EnvFilter;

use journey_finder::config::ServerConfig;
use journey_finder::store::{TrainStore, load_sample_data};
use journey_finder::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("journey_finder=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Open the train store, file-backed when configured
    let store = match &config.data_file {
        Some(path) => {
            info!(path = %path.display(), "opening train store");
            TrainStore::open(path)
                .await
                .expect("Failed to open train store")
        }
        None => TrainStore::in_memory(),
    };

    if config.seed_sample_data {
        load_sample_data(&store)
            .await
            .expect("Failed to load sample trains");
    }
    info!(trains = store.len().await, "train store ready");

    let state = AppState::new(store);
    let app = create_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listen address");
    info!(addr = %config.addr, "Journey Finder listening on http://{}", config.addr);
    info!("  GET  /health      - Health check");
    info!("  GET  /api/routes  - Search journeys (?from=&to=[&sort=fare|arrival|type])");
    info!("  GET  /api/trains  - List trains");
    info!("  POST /api/trains  - Add or replace a train");

    axum::serve(listener, app).await.expect("Server error");
}
