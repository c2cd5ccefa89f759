//! Matching engine facade.
//!
//! Wraps an injected [`MarketBook`]: validates submissions, runs
//! [`crate::matching`] and answers the participant and price queries.

use crate::book::MarketBook;
use crate::error::Result;
use crate::matching::{match_bid, match_offer};
use crate::types::{Bid, MarketEntry, Offer, Order};
use crate::validation::{validate_bid, validate_offer};
use log::{debug, info};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, PoisonError};

/// Anything that accepts bids and offers. Lets replay helpers drive any engine.
pub trait MatchingEngine {
    fn submit_bid(&self, bid: Bid) -> Result<Vec<Order>>;

    fn submit_offer(&self, offer: Offer) -> Result<Vec<Order>>;

    fn submit(&self, entry: MarketEntry) -> Result<Vec<Order>> {
        match entry {
            MarketEntry::Bid(bid) => self.submit_bid(bid),
            MarketEntry::Offer(offer) => self.submit_offer(offer),
        }
    }
}

/// Matching engine over one market book.
///
/// Submissions are serialized: the scan of one collection and the writes to the
/// others run as a single critical section, so a resting entry can never be
/// matched twice by concurrent callers. Queries read snapshots and never block
/// on submissions.
#[derive(Debug)]
pub struct Engine {
    book: Arc<MarketBook>,
    submit_lock: Mutex<()>,
}

impl Engine {
    /// Creates an engine over `book`. The book may be shared with inspectors.
    pub fn new(book: Arc<MarketBook>) -> Self {
        Self {
            book,
            submit_lock: Mutex::new(()),
        }
    }

    pub fn book(&self) -> &Arc<MarketBook> {
        &self.book
    }

    /// Submits a bid. Returns the order it executed, if any; an unmatched bid rests.
    ///
    /// Returns `Err` without touching the book if the bid is malformed.
    pub fn submit_bid(&self, bid: Bid) -> Result<Vec<Order>> {
        validate_bid(&bid)?;
        info!(
            "bid submitted item_id={} buyer_id={} quantity={} price={:?}",
            bid.item_id, bid.buyer_id, bid.quantity, bid.price_per_unit
        );
        let _guard = self.submit_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let executed: Vec<Order> = match_bid(&self.book, bid).into_iter().collect();
        log_orders(&executed);
        Ok(executed)
    }

    /// Submits an offer. Returns the orders it executed, in execution order; any
    /// unmatched remainder rests.
    ///
    /// Returns `Err` without touching the book if the offer is malformed.
    pub fn submit_offer(&self, offer: Offer) -> Result<Vec<Order>> {
        validate_offer(&offer)?;
        info!(
            "offer submitted item_id={} seller_id={} quantity={} price={:?}",
            offer.item_id, offer.seller_id, offer.quantity, offer.price_per_unit
        );
        let _guard = self.submit_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let executed = match_offer(&self.book, offer);
        log_orders(&executed);
        Ok(executed)
    }

    /// Resting bids of `buyer_id`, in book order.
    pub fn list_bids_by_buyer(&self, buyer_id: &str) -> Vec<Bid> {
        debug!("list_bids_by_buyer buyer_id={}", buyer_id);
        self.book
            .bids()
            .snapshot()
            .iter()
            .filter(|bid| bid.buyer_id == buyer_id)
            .cloned()
            .collect()
    }

    /// Resting offers of `seller_id`, in book order.
    pub fn list_offers_by_seller(&self, seller_id: &str) -> Vec<Offer> {
        debug!("list_offers_by_seller seller_id={}", seller_id);
        self.book
            .offers()
            .snapshot()
            .iter()
            .filter(|offer| offer.seller_id == seller_id)
            .cloned()
            .collect()
    }

    /// Executed orders where `buyer_id` bought, in execution order.
    pub fn list_orders_by_buyer(&self, buyer_id: &str) -> Vec<Order> {
        debug!("list_orders_by_buyer buyer_id={}", buyer_id);
        self.book
            .orders()
            .snapshot()
            .iter()
            .filter(|order| order.buyer_id == buyer_id)
            .cloned()
            .collect()
    }

    /// Executed orders where `seller_id` sold, in execution order.
    pub fn list_orders_by_seller(&self, seller_id: &str) -> Vec<Order> {
        debug!("list_orders_by_seller seller_id={}", seller_id);
        self.book
            .orders()
            .snapshot()
            .iter()
            .filter(|order| order.seller_id == seller_id)
            .cloned()
            .collect()
    }

    /// Highest resting bid price for the item (None if no bids).
    pub fn current_bid_price(&self, item_id: &str) -> Option<Decimal> {
        debug!("current_bid_price item_id={}", item_id);
        self.book
            .bids()
            .snapshot()
            .iter()
            .filter(|bid| bid.item_id == item_id)
            .filter_map(|bid| bid.price_per_unit)
            .max()
    }

    /// Lowest resting offer price for the item (None if no offers).
    pub fn current_offer_price(&self, item_id: &str) -> Option<Decimal> {
        debug!("current_offer_price item_id={}", item_id);
        self.book
            .offers()
            .snapshot()
            .iter()
            .filter(|offer| offer.item_id == item_id)
            .filter_map(|offer| offer.price_per_unit)
            .min()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Arc::new(MarketBook::new()))
    }
}

impl MatchingEngine for Engine {
    fn submit_bid(&self, bid: Bid) -> Result<Vec<Order>> {
        Engine::submit_bid(self, bid)
    }

    fn submit_offer(&self, offer: Offer) -> Result<Vec<Order>> {
        Engine::submit_offer(self, offer)
    }
}

fn log_orders(orders: &[Order]) {
    for order in orders {
        info!(
            "order executed buyer_id={} seller_id={} item_id={} quantity={} price={}",
            order.buyer_id, order.seller_id, order.item_id, order.quantity, order.price_per_unit
        );
    }
}
