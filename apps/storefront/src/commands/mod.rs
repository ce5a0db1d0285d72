//! # Commands Module
//!
//! Every operation the storefront exposes. Each command is a plain function
//! that borrows only the state it needs and returns a serializable response.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Search, category selection, category list
//! ├── cart.rs     ◄─── Quantity pickers and cart summary
//! ├── loading.rs  ◄─── Simulated fetch
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin: "qty 1 3"                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  driver::Command::parse ──► Command::ChangeQuantity { 1, "3" }          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  cart::change_quantity(                                                 │
//! │      &CatalogState,   ◄── immutable product table                      │
//! │      &SessionState,   ◄── search, category, pickers                    │
//! │      &LoadingState,   ◄── disables controls while loading              │
//! │      &ConfigState,    ◄── currency display                             │
//! │      1, "3".into(),                                                     │
//! │  ) -> Result<QuantityChangeResponse, ApiError>                          │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  stdout: {"ok":true,"data":{...}}                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the loading gate
//! fn simulate_fetch(loading: &LoadingState)
//!
//! // Needs the catalog and the session
//! fn list_categories(catalog: &CatalogState, session: &SessionState, ...)
//! ```

pub mod cart;
pub mod config;
pub mod loading;
pub mod product;
