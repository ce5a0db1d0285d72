//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::Serialize;
use std::time::Duration;
use storefront_core::format::MAX_DECIMALS;
use storefront_core::{CurrencyFormat, Money};
use tracing::warn;

/// Default simulated loading delay.
pub const DEFAULT_LOADING_DELAY_MS: u64 = 800;

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the header
    pub store_name: String,

    /// How long the simulated fetch keeps the loading flag up
    pub loading_delay_ms: u64,

    /// Currency display rules
    pub currency: CurrencyFormat,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Apotek Sehat"
    /// - Loading delay: 800 ms
    /// - Currency: Rupiah, no decimals (`Rp 15.000`)
    fn default() -> Self {
        ConfigState {
            store_name: "Apotek Sehat".to_string(),
            loading_delay_ms: DEFAULT_LOADING_DELAY_MS,
            currency: CurrencyFormat::default(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_LOADING_DELAY_MS`: Override loading delay (e.g., "250")
    /// - `STOREFRONT_CURRENCY_SYMBOL`: Override currency symbol
    /// - `STOREFRONT_CURRENCY_DECIMALS`: Override minor-unit digits (0-4)
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(delay) = lookup("STOREFRONT_LOADING_DELAY_MS") {
            match delay.trim().parse::<u64>() {
                Ok(ms) => config.loading_delay_ms = ms,
                Err(_) => warn!(value = %delay, "Ignoring invalid STOREFRONT_LOADING_DELAY_MS"),
            }
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            config.currency.symbol = symbol;
        }

        if let Some(decimals) = lookup("STOREFRONT_CURRENCY_DECIMALS") {
            match decimals.trim().parse::<u8>() {
                Ok(d) if d <= MAX_DECIMALS => config.currency.decimals = d,
                _ => warn!(value = %decimals, "Ignoring invalid STOREFRONT_CURRENCY_DECIMALS"),
            }
        }

        config
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    /// Formats a minor-unit amount as a currency string.
    pub fn format_currency(&self, minor: i64) -> String {
        self.currency.format(Money::from_minor(minor))
    }
}
