//! First-fit matching of bids against offers.
//!
//! A resting entry is compatible when it is for the same item, the bid price is
//! at or above the offer price, and the offer quantity covers the whole bid
//! quantity. The scan takes the first compatible entry in book order, not the
//! best-priced one. Trades execute at the lower of the two prices.
//!
//! Because the offer always has to cover the bid, an incoming bid executes at
//! most once, while an incoming offer can consume several resting bids.

use crate::book::MarketBook;
use crate::types::{Bid, Offer, Order};
use log::debug;
use rust_decimal::Decimal;

/// Execution price if `bid` and `offer` can trade, `None` otherwise.
pub fn fill_price(bid: &Bid, offer: &Offer) -> Option<Decimal> {
    if bid.item_id != offer.item_id || offer.quantity < bid.quantity {
        return None;
    }
    match (bid.price_per_unit, offer.price_per_unit) {
        (Some(bid_px), Some(offer_px)) if bid_px >= offer_px => Some(bid_px.min(offer_px)),
        _ => None,
    }
}

pub fn crosses(bid: &Bid, offer: &Offer) -> bool {
    fill_price(bid, offer).is_some()
}

/// Matches an incoming bid against the resting offers.
///
/// On a match the offer is removed (exact quantity) or shrunk in place, and the
/// executed order is appended to the book and returned. Otherwise the bid rests.
pub fn match_bid(book: &MarketBook, bid: Bid) -> Option<Order> {
    let matched = book.offers().update(|offers| {
        let (idx, price) = offers
            .iter()
            .enumerate()
            .find_map(|(i, offer)| fill_price(&bid, offer).map(|px| (i, px)))?;
        let seller_id = if offers[idx].quantity == bid.quantity {
            debug!("offer quantity equals bid quantity, removing offer from the book");
            offers.remove(idx).seller_id
        } else {
            debug!("offer quantity exceeds bid quantity, reducing resting offer");
            let offer = &mut offers[idx];
            offer.quantity -= bid.quantity;
            offer.seller_id.clone()
        };
        Some((seller_id, price))
    });

    match matched {
        Some((seller_id, price)) => {
            debug!("bid matched an offer from seller_id={}", seller_id);
            let order = Order {
                buyer_id: bid.buyer_id,
                seller_id,
                item_id: bid.item_id,
                quantity: bid.quantity,
                price_per_unit: price,
            };
            book.orders().push(order.clone());
            Some(order)
        }
        None => {
            debug!("no matching offer, bid rests in the book");
            book.bids().push(bid);
            None
        }
    }
}

/// Matches an incoming offer against the resting bids, repeatedly.
///
/// Every matched bid is consumed whole. While quantity is left over the offer
/// keeps scanning; once nothing matches, the remainder rests in the book.
/// Returns the executed orders in execution order.
pub fn match_offer(book: &MarketBook, mut offer: Offer) -> Vec<Order> {
    let mut executed = Vec::new();
    loop {
        let matched = book.bids().update(|bids| {
            let (idx, price) = bids
                .iter()
                .enumerate()
                .find_map(|(i, bid)| fill_price(bid, &offer).map(|px| (i, px)))?;
            Some((bids.remove(idx), price))
        });

        let Some((bid, price)) = matched else {
            debug!(
                "no matching bid, offer rests in the book with quantity={}",
                offer.quantity
            );
            book.offers().push(offer);
            break;
        };

        debug!("offer matched a bid from buyer_id={}", bid.buyer_id);
        let order = Order {
            buyer_id: bid.buyer_id,
            seller_id: offer.seller_id.clone(),
            item_id: offer.item_id.clone(),
            quantity: bid.quantity,
            price_per_unit: price,
        };
        book.orders().push(order.clone());
        executed.push(order);

        if offer.quantity == bid.quantity {
            break;
        }
        offer.quantity -= bid.quantity;
    }
    executed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn fill_price_is_lower_of_the_two() {
        let bid = Bid::new("X", "B", 5, dec!(12));
        let offer = Offer::new("X", "S", 5, dec!(10));
        assert_eq!(fill_price(&bid, &offer), Some(dec!(10)));
    }

    #[test]
    fn no_cross_when_bid_below_offer() {
        let bid = Bid::new("X", "B", 5, dec!(9.99));
        let offer = Offer::new("X", "S", 5, dec!(10));
        assert!(!crosses(&bid, &offer));
    }

    #[test]
    fn no_cross_when_offer_cannot_cover_bid() {
        let bid = Bid::new("X", "B", 6, dec!(10));
        let offer = Offer::new("X", "S", 5, dec!(10));
        assert!(!crosses(&bid, &offer));
    }

    #[test]
    fn no_cross_across_items() {
        let bid = Bid::new("X", "B", 1, dec!(10));
        let offer = Offer::new("Y", "S", 1, dec!(10));
        assert!(!crosses(&bid, &offer));
    }

    #[test]
    fn bid_takes_first_compatible_offer_not_cheapest() {
        let book = MarketBook::new();
        book.offers().push(Offer::new("X", "S1", 5, dec!(10)));
        book.offers().push(Offer::new("X", "S2", 5, dec!(8)));
        let order = match_bid(&book, Bid::new("X", "B", 5, dec!(10))).unwrap();
        assert_eq!(order.seller_id, "S1");
        assert_eq!(order.price_per_unit, dec!(10));
        assert_eq!(book.offers().to_vec(), vec![Offer::new("X", "S2", 5, dec!(8))]);
    }

    #[test]
    fn bid_skips_offers_too_small_to_cover_it() {
        let book = MarketBook::new();
        book.offers().push(Offer::new("X", "S1", 2, dec!(10)));
        book.offers().push(Offer::new("X", "S2", 7, dec!(10)));
        let order = match_bid(&book, Bid::new("X", "B", 4, dec!(10))).unwrap();
        assert_eq!(order.seller_id, "S2");
        assert_eq!(
            book.offers().to_vec(),
            vec![
                Offer::new("X", "S1", 2, dec!(10)),
                Offer::new("X", "S2", 3, dec!(10)),
            ]
        );
        assert!(book.bids().is_empty());
    }

    #[test]
    fn unmatched_bid_rests_unchanged() {
        let book = MarketBook::new();
        book.offers().push(Offer::new("X", "S", 5, dec!(11)));
        let bid = Bid::new("X", "B", 5, dec!(10));
        assert!(match_bid(&book, bid.clone()).is_none());
        assert_eq!(book.bids().to_vec(), vec![bid]);
        assert!(book.orders().is_empty());
        assert_eq!(book.offers().len(), 1);
    }

    #[test]
    fn offer_cascades_over_several_bids() {
        let book = MarketBook::new();
        book.bids().push(Bid::new("X", "B1", 2, dec!(10)));
        book.bids().push(Bid::new("Y", "B9", 1, dec!(50)));
        book.bids().push(Bid::new("X", "B2", 3, dec!(11)));
        let orders = match_offer(&book, Offer::new("X", "S", 6, dec!(10)));
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].buyer_id, "B1");
        assert_eq!(orders[0].quantity, 2);
        assert_eq!(orders[1].buyer_id, "B2");
        assert_eq!(orders[1].quantity, 3);
        assert_eq!(orders[1].price_per_unit, dec!(10));
        assert_eq!(book.bids().to_vec(), vec![Bid::new("Y", "B9", 1, dec!(50))]);
        assert_eq!(book.offers().to_vec(), vec![Offer::new("X", "S", 1, dec!(10))]);
        assert_eq!(book.orders().to_vec(), orders);
    }

    #[test]
    fn offer_stops_when_remaining_quantity_too_small() {
        let book = MarketBook::new();
        book.bids().push(Bid::new("X", "B1", 3, dec!(10)));
        book.bids().push(Bid::new("X", "B2", 3, dec!(10)));
        let orders = match_offer(&book, Offer::new("X", "S", 4, dec!(10)));
        assert_eq!(orders.len(), 1);
        assert_eq!(book.bids().to_vec(), vec![Bid::new("X", "B2", 3, dec!(10))]);
        assert_eq!(book.offers().to_vec(), vec![Offer::new("X", "S", 1, dec!(10))]);
    }

    #[test]
    fn long_cascade_does_not_recurse() {
        let book = MarketBook::new();
        for i in 0..10_000 {
            book.bids().push(Bid::new("X", format!("B{}", i), 1, dec!(10)));
        }
        let orders = match_offer(&book, Offer::new("X", "S", 10_000, dec!(10)));
        assert_eq!(orders.len(), 10_000);
        assert!(book.bids().is_empty());
        assert!(book.offers().is_empty());
    }
}
