//! # Storefront Entry Point
//!
//! Reads commands from stdin and answers each with a JSON line on stdout.
//!
//! ```text
//! $ printf 'qty 1 2\ncart\n' | storefront
//! {"ok":true,"data":{"changed":true,"entry":2,...}}
//! {"ok":true,"data":{"isLoading":true,"items":[...],"grandTotalDisplay":"Rp 30.000",...}}
//! ```
//!
//! The setup lives in lib.rs so it can be tested.

#[tokio::main]
async fn main() -> std::io::Result<()> {
    storefront_app::run().await
}
