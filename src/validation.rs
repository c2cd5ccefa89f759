//! Structural checks applied before an entry reaches the engine.
//!
//! A bid is rejected when its item id, buyer id or price is absent, or its
//! quantity is not positive. Offers follow the same rule with the seller id.

use crate::error::{MarketError, Result};
use crate::types::{Bid, Offer};

pub fn is_valid_bid(bid: &Bid) -> bool {
    !bid.item_id.is_empty()
        && !bid.buyer_id.is_empty()
        && bid.price_per_unit.is_some()
        && bid.quantity > 0
}

pub fn is_valid_offer(offer: &Offer) -> bool {
    !offer.item_id.is_empty()
        && !offer.seller_id.is_empty()
        && offer.price_per_unit.is_some()
        && offer.quantity > 0
}

pub fn validate_bid(bid: &Bid) -> Result<()> {
    if is_valid_bid(bid) {
        Ok(())
    } else {
        Err(MarketError::InvalidEntity(format!("Invalid Bid entered : {}", bid)))
    }
}

pub fn validate_offer(offer: &Offer) -> Result<()> {
    if is_valid_offer(offer) {
        Ok(())
    } else {
        Err(MarketError::InvalidEntity(format!(
            "Invalid Offer entered : {}",
            offer
        )))
    }
}
