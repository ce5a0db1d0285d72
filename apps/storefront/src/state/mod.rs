//! # State Module
//!
//! Manages application state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of one struct holding everything, each concern gets its own state
//! type and each command declares exactly the states it reads:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ CatalogState │ │ SessionState │ │ LoadingState │ │ ConfigState  │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │ Arc<Catalog> │ │ Arc<Mutex<   │ │ watch flag + │ │ store name   │   │
//! │  │ (immutable)  │ │   Session>>  │ │ tokio timer  │ │ currency     │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: read-only after startup                               │
//! │  • SessionState: protected by Arc<Mutex<T>>                            │
//! │  • LoadingState: watch channel; timer handle behind a Mutex            │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod loading;
mod session;

pub use catalog::CatalogState;
pub use config::{ConfigState, DEFAULT_LOADING_DELAY_MS};
pub use loading::{LoadingState, LoadingStatus};
pub use session::{Session, SessionState};
