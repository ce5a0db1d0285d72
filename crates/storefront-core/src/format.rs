//! # Currency Formatting
//!
//! Turns a [`Money`] amount into the string shown next to a product or in
//! the cart summary. One format is active per process; the default mirrors
//! Indonesian Rupiah conventions (`Rp 15.000`), which is what the sample
//! catalog is priced in.
//!
//! ```rust
//! use storefront_core::{CurrencyFormat, Money};
//!
//! let idr = CurrencyFormat::default();
//! assert_eq!(idr.format(Money::from_minor(1_250_000)), "Rp 1.250.000");
//!
//! let usd = CurrencyFormat::usd();
//! assert_eq!(usd.format(Money::from_minor(123_456)), "$1,234.56");
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Most minor-unit digits a format will render.
pub const MAX_DECIMALS: u8 = 4;

/// Display rules for monetary amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    /// Currency symbol placed before the amount.
    pub symbol: String,

    /// Number of minor-unit digits (0 for IDR, 2 for USD). Values above
    /// [`MAX_DECIMALS`] are rendered as [`MAX_DECIMALS`].
    pub decimals: u8,

    /// Separator between groups of three integer digits.
    pub group_separator: char,

    /// Separator between the integer and fractional parts.
    pub decimal_separator: char,

    /// Whether a space follows the symbol.
    pub symbol_spacing: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            symbol: "Rp".to_string(),
            decimals: 0,
            group_separator: '.',
            decimal_separator: ',',
            symbol_spacing: true,
        }
    }
}

impl CurrencyFormat {
    /// US dollar style: `$1,234.56`.
    pub fn usd() -> Self {
        CurrencyFormat {
            symbol: "$".to_string(),
            decimals: 2,
            group_separator: ',',
            decimal_separator: '.',
            symbol_spacing: false,
        }
    }

    /// Formats an amount.
    ///
    /// Negative amounts carry a leading `-` before the symbol.
    pub fn format(&self, amount: Money) -> String {
        let decimals = self.decimals.min(MAX_DECIMALS);
        let minor = amount.minor();
        let magnitude = minor.unsigned_abs();
        let divisor = 10_u64.pow(u32::from(decimals));
        let whole = magnitude / divisor;
        let frac = magnitude % divisor;

        let mut out = String::new();
        if minor < 0 {
            out.push('-');
        }
        out.push_str(&self.symbol);
        if self.symbol_spacing {
            out.push(' ');
        }
        out.push_str(&group_digits(whole, self.group_separator));
        if decimals > 0 {
            out.push(self.decimal_separator);
            out.push_str(&format!("{:0width$}", frac, width = usize::from(decimals)));
        }
        out
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
