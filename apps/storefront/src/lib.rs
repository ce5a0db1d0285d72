//! # Storefront Library
//!
//! Application layer of the storefront: session state, the simulated
//! catalog fetch, the commands and the text driver that runs them.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (startup & driver loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Immutable product table
//! │   ├── session.rs  ◄─── Search, category and quantity pickers
//! │   ├── loading.rs  ◄─── Simulated latency gate
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Product list and category commands
//! │   ├── cart.rs     ◄─── Quantity and cart commands
//! │   ├── loading.rs  ◄─── Simulated fetch commands
//! │   └── config.rs   ◄─── Configuration command
//! ├── driver.rs       ◄─── Line parser and dispatcher
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront State                                     │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ CatalogState │ │ SessionState │ │ LoadingState │ │ ConfigState  │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │ • Products   │ │ • Search     │ │ • isLoading  │ │ • Store name │   │
//! │  │   (Arc)      │ │ • Category   │ │ • Timer task │ │ • Delay      │   │
//! │  │              │ │ • Pickers    │ │              │ │ • Currency   │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  Each command borrows only the state it needs.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod driver;
pub mod error;
pub mod state;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use driver::LineOutcome;
use state::{CatalogState, ConfigState, LoadingState, SessionState};

/// Every piece of state the driver hands to commands.
#[derive(Debug)]
pub struct AppState {
    pub catalog: CatalogState,
    pub session: SessionState,
    pub loading: LoadingState,
    pub config: ConfigState,
}

impl AppState {
    /// Fresh session over the sample catalog, with the startup fetch
    /// already in flight.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: ConfigState) -> Self {
        AppState {
            catalog: CatalogState::default(),
            session: SessionState::new(),
            loading: LoadingState::start(config.loading_delay()),
            config,
        }
    }
}

/// Runs the storefront until stdin closes or `quit` is read.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,storefront=debug, override with RUST_LOG           │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults, then STOREFRONT_* environment variables                 │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CatalogState: sample products                                     │
/// │     • SessionState: empty search, all categories, no pickers            │
/// │     • LoadingState: flag up, cleared after the configured delay         │
/// │                                                                         │
/// │  4. Driver Loop ──────────────────────────────────────────────────────► │
/// │     • One command per stdin line, one JSON document per stdout line     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> std::io::Result<()> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(
        store = %config.store_name,
        delay_ms = config.loading_delay_ms,
        "Starting storefront"
    );

    let state = AppState::new(config);
    info!(products = state.catalog.inner().len(), "State initialized");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        match driver::handle_line(&state, &line) {
            LineOutcome::Respond(response) => {
                let mut out = serde_json::to_vec(&response)?;
                out.push(b'\n');
                stdout.write_all(&out).await?;
                stdout.flush().await?;
            }
            LineOutcome::Ignore => {}
            LineOutcome::Quit => break,
        }
    }

    info!("Storefront stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only responses.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for storefront crates only
/// - Default: `info,storefront=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
