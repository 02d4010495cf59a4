use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stockplan_api::{create_app, AppState, ServiceConfig};
use stockplan_store::{load_csv, DemandStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env();

    let mut store = DemandStore::new();
    if let Some(path) = &config.data_path {
        match load_csv(path) {
            Ok(records) => {
                for record in records {
                    if let Err(err) = store.append(record) {
                        warn!(%err, "skipping invalid seed record");
                    }
                }
            }
            Err(err) => warn!(%err, "could not seed demand history"),
        }
    }

    let bind_addr = config.bind_addr.clone();
    let state = AppState::with_store(config, store);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();
    info!("stockplan API server running on http://{}", bind_addr);

    axum::serve(listener, app).await.unwrap();
}
