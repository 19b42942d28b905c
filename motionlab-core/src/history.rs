//! Fixed-capacity time series
//!
//! Bodies record one sample per integration step and plot widgets keep their
//! own, usually shorter, buffers. Both evict the oldest entry once full, so
//! iteration order is always time order.

use crate::error::PhysicsError;
use std::collections::VecDeque;

/// Default capacity for particle and rigid-body history
pub const DEFAULT_HISTORY_CAPACITY: usize = 500;

/// Ordered series holding at most `capacity` elements
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedSeries<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedSeries<T> {
    pub fn new(capacity: usize) -> Result<Self, PhysicsError> {
        if capacity == 0 {
            return Err(PhysicsError::InvalidCapacity);
        }
        Ok(Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append `item`, evicting the oldest element when full
    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn oldest(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> BoundedSeries<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl BoundedSeries<f32> {
    /// `(min, max)` over the stored values, `None` when empty
    pub fn range(&self) -> Option<(f32, f32)> {
        self.items.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

impl<'a, T> IntoIterator for &'a BoundedSeries<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Two series that always advance together, e.g. position/velocity pairs for
/// a phase-space plot. There is no way to push to only one side.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedSeries<A, B> {
    first: BoundedSeries<A>,
    second: BoundedSeries<B>,
}

impl<A, B> PairedSeries<A, B> {
    pub fn new(capacity: usize) -> Result<Self, PhysicsError> {
        Ok(Self {
            first: BoundedSeries::new(capacity)?,
            second: BoundedSeries::new(capacity)?,
        })
    }

    pub fn push(&mut self, a: A, b: B) {
        self.first.push(a);
        self.second.push(b);
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.first.len(), self.second.len());
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.first.capacity()
    }

    pub fn first(&self) -> &BoundedSeries<A> {
        &self.first
    }

    pub fn second(&self) -> &BoundedSeries<B> {
        &self.second
    }

    pub fn latest(&self) -> Option<(&A, &B)> {
        self.first.latest().zip(self.second.latest())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&A, &B)> + '_ {
        self.first.iter().zip(self.second.iter())
    }

    pub fn clear(&mut self) {
        self.first.clear();
        self.second.clear();
    }
}
