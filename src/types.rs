//! Record types: [`Bid`], [`Offer`] and the executed [`Order`].
//!
//! Ids are plain strings. An empty id counts as absent, and so does a `None`
//! price; [`crate::validation`] rejects both before an entry reaches the book.

use rust_decimal::Decimal;
use std::fmt;

/// Standing buy interest: `quantity` units of `item_id` at up to `price_per_unit` each.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Bid {
    #[serde(default)]
    pub item_id: String,
    #[serde(default)]
    pub buyer_id: String,
    pub quantity: i64,
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
}

impl Bid {
    pub fn new(
        item_id: impl Into<String>,
        buyer_id: impl Into<String>,
        quantity: i64,
        price_per_unit: Decimal,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            buyer_id: buyer_id.into(),
            quantity,
            price_per_unit: Some(price_per_unit),
        }
    }
}

/// Standing sell interest: `quantity` units of `item_id` at `price_per_unit` or more.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Offer {
    #[serde(default)]
    pub item_id: String,
    #[serde(default)]
    pub seller_id: String,
    pub quantity: i64,
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
}

impl Offer {
    pub fn new(
        item_id: impl Into<String>,
        seller_id: impl Into<String>,
        quantity: i64,
        price_per_unit: Decimal,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            seller_id: seller_id.into(),
            quantity,
            price_per_unit: Some(price_per_unit),
        }
    }
}

/// A completed trade between one buyer and one seller. Never mutated once recorded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Order {
    pub buyer_id: String,
    pub seller_id: String,
    pub item_id: String,
    pub quantity: i64,
    pub price_per_unit: Decimal,
}

/// One submission in a replayable stream.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MarketEntry {
    Bid(Bid),
    Offer(Offer),
}

fn fmt_price(price: &Option<Decimal>) -> String {
    match price {
        Some(p) => p.to_string(),
        None => "none".into(),
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bid [item_id={}, buyer_id={}, quantity={}, price_per_unit={}]",
            self.item_id,
            self.buyer_id,
            self.quantity,
            fmt_price(&self.price_per_unit)
        )
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Offer [item_id={}, seller_id={}, quantity={}, price_per_unit={}]",
            self.item_id,
            self.seller_id,
            self.quantity,
            fmt_price(&self.price_per_unit)
        )
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order [buyer_id={}, seller_id={}, item_id={}, quantity={}, price_per_unit={}]",
            self.buyer_id, self.seller_id, self.item_id, self.quantity, self.price_per_unit
        )
    }
}
