//! # Online Marketplace
//!
//! In-memory continuous double auction: buyers post bids, sellers post offers,
//! and compatible pairs execute as orders.
//!
//! ## Entry point
//!
//! Use [`Engine`] as the single entry point: create it over a [`MarketBook`]
//! with [`Engine::new`] (or [`Engine::default`] for a fresh book), then
//! [`Engine::submit_bid`] and [`Engine::submit_offer`]. Queries list entries
//! by participant and report the best resting prices per item.
//!
//! ## Example
//!
//! ```rust
//! use online_marketplace::{Bid, Engine, Offer};
//! use rust_decimal::Decimal;
//!
//! let engine = Engine::default();
//! engine
//!     .submit_offer(Offer::new("Xbox", "seller-1", 5, Decimal::from(300)))
//!     .unwrap();
//! let executed = engine
//!     .submit_bid(Bid::new("Xbox", "buyer-1", 2, Decimal::from(320)))
//!     .unwrap();
//! assert_eq!(executed.len(), 1);
//! assert_eq!(executed[0].price_per_unit, Decimal::from(300));
//! assert_eq!(engine.list_offers_by_seller("seller-1")[0].quantity, 3);
//! ```
//!
//! ## Lower-level API
//!
//! [`match_bid`] and [`match_offer`] run the algorithm directly on a book
//! without validation or the submission lock.

pub mod book;
pub mod config;
pub mod engine;
pub mod error;
pub mod market_data_gen;
pub mod matching;
pub mod types;
pub mod validation;

pub use book::{BookSnapshot, MarketBook, SharedList};
pub use config::ReplayConfig;
pub use engine::{Engine, MatchingEngine};
pub use error::{MarketError, Result};
pub use market_data_gen::{replay_into_engine, Generator, GeneratorConfig, ReplaySummary};
pub use matching::{match_bid, match_offer};
pub use types::{Bid, MarketEntry, Offer, Order};
pub use validation::{validate_bid, validate_offer};
