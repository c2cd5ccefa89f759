//! In-memory market book: resting bids, resting offers and executed orders.
//!
//! Each collection is a [`SharedList`], a copy-on-write list. Readers take a
//! snapshot (`Arc<Vec<T>>`) that never changes underneath them; writers are
//! serialized per list and publish a new version. Nothing here spans two lists;
//! cross-list atomicity is the engine's job.

use crate::types::{Bid, Offer, Order};
use std::sync::{Arc, PoisonError, RwLock};

/// Thread-safe copy-on-write list.
#[derive(Debug)]
pub struct SharedList<T> {
    inner: RwLock<Arc<Vec<T>>>,
}

impl<T: Clone> SharedList<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Current version of the list. Later writes are not visible through it.
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Runs `f` against the list under the writer lock and publishes the result.
    ///
    /// Outstanding snapshots keep the previous version; the vector is only
    /// copied when such a snapshot exists.
    pub fn update<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(Arc::make_mut(&mut *guard))
    }

    pub fn push(&self, item: T) {
        self.update(|items| items.push(item));
    }

    /// Removes the first element matching `pred`, returning it.
    pub fn remove_first(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.update(|items| {
            let idx = items.iter().position(|item| pred(item))?;
            Some(items.remove(idx))
        })
    }

    pub fn retain(&self, pred: impl FnMut(&T) -> bool) {
        self.update(|items| items.retain(pred));
    }

    pub fn clear(&self) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(Vec::new());
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Owned copy of the current elements, in insertion order.
    pub fn to_vec(&self) -> Vec<T> {
        self.snapshot().as_ref().clone()
    }
}

impl<T: Clone> Default for SharedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable copy of a [`MarketBook`] for inspection and dumps.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BookSnapshot {
    pub bids: Vec<Bid>,
    pub offers: Vec<Offer>,
    pub orders: Vec<Order>,
}

/// The three collections of one market. Construct one per market and hand it
/// to [`crate::Engine::new`]; several books may live in the same process.
#[derive(Debug, Default)]
pub struct MarketBook {
    bids: SharedList<Bid>,
    offers: SharedList<Offer>,
    orders: SharedList<Order>,
}

impl MarketBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resting bids (live list, not a copy).
    pub fn bids(&self) -> &SharedList<Bid> {
        &self.bids
    }

    /// Resting offers (live list, not a copy).
    pub fn offers(&self) -> &SharedList<Offer> {
        &self.offers
    }

    /// Executed orders, append-only during matching (live list, not a copy).
    pub fn orders(&self) -> &SharedList<Order> {
        &self.orders
    }

    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            bids: self.bids.to_vec(),
            offers: self.offers.to_vec(),
            orders: self.orders.to_vec(),
        }
    }
}
