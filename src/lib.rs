//! visitor_status library: visitor intelligence pipeline
//!
//! This library records site visits, enriches each one with best-effort
//! network location and a device/browser fingerprint, persists the records
//! in a SQLite ledger, and serves an operator API with live aggregate
//! statistics, a filtered table view, map data, and block/unblock controls.
//!
//! # Example
//!
//! ```no_run
//! use visitor_status::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 8080,
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error_handling;
pub mod fingerprint;
pub mod ingest;
pub mod initialization;
pub mod location;
pub mod server;
pub mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use run::run_server;

// Internal run module (wires the pipeline together)
mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::{info, warn};
    use tokio_util::sync::CancellationToken;

    use crate::auth::AdminCredentials;
    use crate::config::{Config, DASHBOARD_REFRESH_INTERVAL};
    use crate::dashboard::{spawn_refresher, Dashboard};
    use crate::ingest::{IngestionGuard, MemorySessionStore, Tracker};
    use crate::initialization::init_client;
    use crate::location::lookup_tiers;
    use crate::server::{start_server, AppState};
    use crate::storage::{init_db_pool_with_path, run_migrations, VisitorLedger};

    /// Runs the visitor tracking server with the provided configuration.
    ///
    /// This is the main entry point for the library. It initializes the
    /// database and HTTP client, starts the background dashboard refresher,
    /// and serves the tracking endpoint and operator API until the server
    /// exits. The refresher is cancelled on the way out so no recurring
    /// work leaks past shutdown.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - Database initialization or migration fails
    /// - The HTTP client cannot be constructed
    /// - The server cannot bind its address
    pub async fn run_server(config: Config) -> Result<()> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        let pool = init_db_pool_with_path(&config.db_path)
            .await
            .context("Failed to initialize database pool")?;
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        let ledger = VisitorLedger::new(Arc::clone(&pool));

        let session_store = Arc::new(MemorySessionStore::new());
        let guard = IngestionGuard::new(session_store);
        let tracker = Arc::new(Tracker::new(
            client,
            lookup_tiers(&config),
            ledger.clone(),
            guard,
        ));

        let dashboard = Arc::new(Dashboard::new(ledger.clone()));
        if let Err(e) = dashboard.refresh().await {
            warn!("initial dashboard refresh failed: {e}");
        }

        let cancel = CancellationToken::new();
        let refresher = spawn_refresher(
            Arc::clone(&dashboard),
            DASHBOARD_REFRESH_INTERVAL,
            cancel.child_token(),
        );

        let state = AppState {
            tracker,
            ledger,
            dashboard,
            credentials: Arc::new(AdminCredentials::from_env()),
        };

        info!(
            "Starting visitor_status (db: {})",
            config.db_path.display()
        );
        let result = start_server(&config.bind, config.port, state).await;

        cancel.cancel();
        let _ = refresher.await;

        result
    }
}
