use serde::Serialize;

use floridaman_core::traits::RandomSource;

/// Fixed-capacity uniform sample over a stream of unknown length.
///
/// Serialises as the retained items only; `seen` stays internal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Reservoir<T> {
    items: Vec<T>,
    #[serde(skip)]
    seen: u64,
    #[serde(skip)]
    capacity: usize,
}

impl<T> Reservoir<T> {
    pub fn new(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity), seen: 0, capacity }
    }

    /// Offer the next stream element. Appends while below capacity; after
    /// that, draws `idx` uniformly in `0..seen` and replaces slot `idx` only
    /// when it is a retained slot, so each element survives with
    /// probability `capacity / seen`.
    pub fn offer<R: RandomSource + ?Sized>(&mut self, item: T, rng: &mut R) {
        self.seen += 1;
        if self.items.len() < self.capacity {
            self.items.push(item);
            return;
        }
        let idx = (rng.uniform() * self.seen as f64).floor() as u64;
        if let Some(slot) = usize::try_from(idx).ok().and_then(|i| self.items.get_mut(i)) {
            *slot = item;
        }
    }

    /// Count an element that can never be retained.
    pub fn skip(&mut self) {
        self.seen += 1;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn seen(&self) -> u64 {
        self.seen
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
