//! # Quantity Pickers
//!
//! Every product row has a quantity picker: a text field flanked by `-` and
//! `+` buttons. This module turns whatever the picker sends into a safe value
//! and keeps the per-product results.
//!
//! ## Normalization Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Raw input                 Result                                       │
//! │  ─────────                 ──────                                       │
//! │  ""                        Unset   (field cleared, distinct from 0)     │
//! │  "7", 7                    7                                            │
//! │  "150", 150                99      (clamped)                            │
//! │  "-5", -5                  0       (clamped)                            │
//! │  "12abc", "3.9"            12, 3   (leading integer wins)               │
//! │  "abc", "   "              0       (not a number)                       │
//! │                                                                         │
//! │  There is no rejection path: the picker never shows an error, it       │
//! │  only auto-corrects.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::types::ProductId;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Raw Input
// =============================================================================

/// What a quantity picker sends: typed text, or a number from `-`/`+`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawQuantity {
    Number(i64),
    Text(String),
}

impl RawQuantity {
    pub fn text(value: impl Into<String>) -> Self {
        RawQuantity::Text(value.into())
    }

    pub fn number(value: i64) -> Self {
        RawQuantity::Number(value)
    }

    /// The cleared-field input.
    pub fn empty() -> Self {
        RawQuantity::Text(String::new())
    }
}

impl From<&str> for RawQuantity {
    fn from(value: &str) -> Self {
        RawQuantity::text(value)
    }
}

impl From<i64> for RawQuantity {
    fn from(value: i64) -> Self {
        RawQuantity::Number(value)
    }
}

// =============================================================================
// Quantity Entry
// =============================================================================

/// A normalized picker value.
///
/// `Unset` is a cleared field. It resolves to zero for cart purposes but is
/// kept apart from `Value(0)` so the field keeps showing as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantityEntry {
    #[default]
    Unset,
    /// Always in `0..=99`.
    Value(u8),
}

impl QuantityEntry {
    /// Quantity used for cart math; `Unset` counts as zero.
    #[inline]
    pub fn resolved(&self) -> u8 {
        match self {
            QuantityEntry::Unset => 0,
            QuantityEntry::Value(n) => *n,
        }
    }

    #[inline]
    pub fn is_unset(&self) -> bool {
        matches!(self, QuantityEntry::Unset)
    }

    /// Text the picker's field should show.
    pub fn display(&self) -> String {
        match self {
            QuantityEntry::Unset => String::new(),
            QuantityEntry::Value(n) => n.to_string(),
        }
    }
}

/// Serializes as `""` for `Unset` and as a plain number otherwise.
impl Serialize for QuantityEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QuantityEntry::Unset => serializer.serialize_str(""),
            QuantityEntry::Value(n) => serializer.serialize_u8(*n),
        }
    }
}

/// Accepts anything a picker could send and normalizes it.
impl<'de> Deserialize<'de> for QuantityEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawQuantity::deserialize(deserializer)?;
        Ok(normalize(&raw))
    }
}

// =============================================================================
// Normalization
// =============================================================================

/// Coerces raw picker input into a [`QuantityEntry`].
///
/// ## Example
/// ```rust
/// use storefront_core::quantity::{normalize, QuantityEntry, RawQuantity};
///
/// assert_eq!(normalize(&RawQuantity::text("150")), QuantityEntry::Value(99));
/// assert_eq!(normalize(&RawQuantity::text("-5")), QuantityEntry::Value(0));
/// assert_eq!(normalize(&RawQuantity::text("")), QuantityEntry::Unset);
/// assert_eq!(normalize(&RawQuantity::text("abc")), QuantityEntry::Value(0));
/// ```
pub fn normalize(raw: &RawQuantity) -> QuantityEntry {
    let numeric = match raw {
        RawQuantity::Text(text) if text.is_empty() => return QuantityEntry::Unset,
        RawQuantity::Text(text) => parse_leading_int(text).unwrap_or(0),
        RawQuantity::Number(n) => *n,
    };

    QuantityEntry::Value(clamp_quantity(numeric))
}

fn clamp_quantity(value: i64) -> u8 {
    // Bounded by MAX_ITEM_QUANTITY, so the cast cannot truncate.
    value.clamp(0, i64::from(MAX_ITEM_QUANTITY)) as u8
}

/// Reads the integer at the start of `text`.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit. Digit runs too long for `i64` saturate.
fn parse_leading_int(text: &str) -> Option<i64> {
    let rest = text.trim_start();
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

// =============================================================================
// Quantity Store
// =============================================================================

/// Per-product picker values.
///
/// A missing key behaves like quantity zero. Entries are overwritten on every
/// change and never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuantityStore {
    entries: BTreeMap<ProductId, QuantityEntry>,
}

impl QuantityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes `raw` and stores it for `id`, returning the stored entry.
    pub fn set(&mut self, id: ProductId, raw: RawQuantity) -> QuantityEntry {
        let entry = normalize(&raw);
        self.entries.insert(id, entry);
        entry
    }

    pub fn get(&self, id: ProductId) -> Option<QuantityEntry> {
        self.entries.get(&id).copied()
    }

    /// Picker value for `id`, `Unset` entries and missing keys both being 0.
    pub fn resolved(&self, id: ProductId) -> u8 {
        self.get(id).map(|e| e.resolved()).unwrap_or(0)
    }

    /// Text the picker for `id` shows. A product never touched shows `0`.
    pub fn display(&self, id: ProductId) -> String {
        self.get(id)
            .unwrap_or(QuantityEntry::Value(0))
            .display()
    }

    pub fn can_increment(&self, id: ProductId) -> bool {
        self.resolved(id) < MAX_ITEM_QUANTITY
    }

    pub fn can_decrement(&self, id: ProductId) -> bool {
        self.resolved(id) > 0
    }

    /// The `+` button. Returns `false` (and changes nothing) at 99.
    ///
    /// A cleared field counts as zero, so `+` on it yields 1.
    pub fn increment(&mut self, id: ProductId) -> bool {
        if !self.can_increment(id) {
            return false;
        }
        let next = i64::from(self.resolved(id)) + 1;
        self.set(id, RawQuantity::Number(next));
        true
    }

    /// The `-` button. Returns `false` (and changes nothing) at 0.
    pub fn decrement(&mut self, id: ProductId) -> bool {
        if !self.can_decrement(id) {
            return false;
        }
        let next = i64::from(self.resolved(id)) - 1;
        self.set(id, RawQuantity::Number(next));
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductId, QuantityEntry)> + '_ {
        self.entries.iter().map(|(id, e)| (*id, *e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
