use serde::{Deserialize, Serialize};

use crate::domain::{ItemId, Quality};

/// Value of one nullable numeric quote column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PriceCell {
    /// A concrete silver amount reported by the API.
    Number(u64),
    /// An error sentinel standing in for a price (`"Error: ..."`).
    Error(String),
    /// No market data for this column.
    Null,
}

impl PriceCell {
    pub fn from_quote(value: Option<u64>) -> Self {
        match value {
            Some(amount) => Self::Number(amount),
            None => Self::Null,
        }
    }

    /// Render for a CSV cell: digits, sentinel text, or the empty string.
    pub fn as_csv_field(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Error(message) => message.clone(),
            Self::Null => String::new(),
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// The eight price/date fields of one upstream market entry.
///
/// Every field is independently optional; the upstream API omits fields it
/// has no data for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PriceEntry {
    pub sell_price_min: Option<u64>,
    pub sell_price_min_date: Option<String>,
    pub sell_price_max: Option<u64>,
    pub sell_price_max_date: Option<String>,
    pub buy_price_min: Option<u64>,
    pub buy_price_min_date: Option<String>,
    pub buy_price_max: Option<u64>,
    pub buy_price_max_date: Option<String>,
}

/// One output row per (item, city, quality) tuple attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRecord {
    pub item_id: ItemId,
    pub city: String,
    pub quality: Quality,
    pub sell_price_min: PriceCell,
    pub sell_price_min_date: Option<String>,
    pub sell_price_max: PriceCell,
    pub sell_price_max_date: Option<String>,
    pub buy_price_min: PriceCell,
    pub buy_price_min_date: Option<String>,
    pub buy_price_max: PriceCell,
    pub buy_price_max_date: Option<String>,
    /// Hour-granularity stamp shared by every record of one batch.
    pub fetch_time: String,
}

impl PriceRecord {
    /// Record populated from a decoded upstream entry.
    pub fn quoted(
        item_id: ItemId,
        city: impl Into<String>,
        quality: Quality,
        fetch_time: impl Into<String>,
        entry: PriceEntry,
    ) -> Self {
        Self {
            item_id,
            city: city.into(),
            quality,
            sell_price_min: PriceCell::from_quote(entry.sell_price_min),
            sell_price_min_date: entry.sell_price_min_date,
            sell_price_max: PriceCell::from_quote(entry.sell_price_max),
            sell_price_max_date: entry.sell_price_max_date,
            buy_price_min: PriceCell::from_quote(entry.buy_price_min),
            buy_price_min_date: entry.buy_price_min_date,
            buy_price_max: PriceCell::from_quote(entry.buy_price_max),
            buy_price_max_date: entry.buy_price_max_date,
            fetch_time: fetch_time.into(),
        }
    }

    /// Record with every quote column null: "no market data available".
    pub fn empty(
        item_id: ItemId,
        city: impl Into<String>,
        quality: Quality,
        fetch_time: impl Into<String>,
    ) -> Self {
        Self::quoted(item_id, city, quality, fetch_time, PriceEntry::default())
    }

    /// Sentinel record preserving the one-record-per-tuple invariant under
    /// failure: `sell_price_min` carries the error text, everything else is
    /// null.
    pub fn failed(
        item_id: ItemId,
        city: impl Into<String>,
        quality: Quality,
        fetch_time: impl Into<String>,
        message: &str,
    ) -> Self {
        let mut record = Self::empty(item_id, city, quality, fetch_time);
        record.sell_price_min = PriceCell::Error(format!("Error: {message}"));
        record
    }
}
