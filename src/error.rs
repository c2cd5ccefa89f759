//! Errors raised by the marketplace.

use thiserror::Error;

/// The single checked failure of the core: a malformed bid or offer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    #[error("invalid marketplace entity: {0}")]
    InvalidEntity(String),
}

pub type Result<T> = std::result::Result<T, MarketError>;
