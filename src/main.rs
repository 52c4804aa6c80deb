//! Identity service - Entry Point
//!
//! Authenticates newline-delimited JSON credentials read from stdin against the
//! configured identity store.

use log::{error, info};
use std::error::Error;
use tokio::io::{self, BufReader};

use identity_auth::AuthService;
use identity_auth::config::{ServiceConfig, StoreBackend};
use identity_auth::handler::serve_lines;
use identity_auth::identity::Identity;
use identity_auth::seed::seed_missing_demo_identities;
use identity_auth::store::{FileStore, MemoryStore, RecordStore};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching identity service...");

    let config = match ServiceConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match config.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory identity store");
            run(MemoryStore::<Identity>::new(), &config).await
        }
        StoreBackend::File => match FileStore::<Identity>::open(config.store_path()).await {
            Ok(store) => {
                info!("Using datafile identity store at {}", store.path().display());
                run(store, &config).await
            }
            Err(e) => Err(e.into()),
        },
    };

    if let Err(e) = result {
        error!("Identity service stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run<S: RecordStore<Identity>>(
    store: S,
    config: &ServiceConfig,
) -> Result<(), Box<dyn Error>> {
    if config.seed_demo_data {
        let inserted = seed_missing_demo_identities(&store).await?;
        info!("Demo data ready ({} identities inserted)", inserted);
    }

    let service = AuthService::new(store);
    info!(
        "Accepting credentials on stdin (types: {})",
        service.registry().credential_types().join(", ")
    );

    serve_lines(&service, BufReader::new(io::stdin()), io::stdout()).await?;
    Ok(())
}
