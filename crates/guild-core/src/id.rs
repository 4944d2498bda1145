use serde::Deserialize;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic id wrapper providing compile-time type safety over a raw `u64`.
///
/// Every entity in the simulation (contract draft, board contract, active
/// contract, hero) is identified by one monotonic counter per entity kind;
/// `Id<T>` keeps a contract id from being accidentally compared against a
/// hero id even though both are plain integers underneath.
pub struct Id<T> {
    inner: u64,
    marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wraps a raw value. Panics in debug builds on `0`, which is never a
    /// valid id (invariant IDS__POSITIVE in spec.md section 3).
    pub fn new(inner: u64) -> Self {
        debug_assert!(inner > 0, "ids are 1-based; 0 is never issued");
        Self {
            inner,
            marker: PhantomData,
        }
    }
    pub fn get(&self) -> u64 {
        self.inner
    }
    /// Reinterprets this id as belonging to a different entity kind while
    /// keeping the same underlying integer. Used when an event needs to
    /// reference an id by its raw value across a type boundary.
    pub fn cast<U>(self) -> Id<U> {
        Id {
            inner: self.inner,
            marker: PhantomData,
        }
    }
}

impl<T> Copy for Id<T> {}
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for Id<T> {}
impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for Id<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Id").field(&self.inner).finish()
    }
}
impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl<T> From<Id<T>> for u64 {
    fn from(id: Id<T>) -> Self {
        id.inner
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.inner)
    }
}
impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Id::new)
    }
}

/// Issues ids for one entity kind, strictly increasing and never reused.
///
/// Invariant (spec.md section 3, IDS__MONOTONIC): `next() > id` for every
/// id this counter has ever issued. The counter itself is the witness —
/// callers never need to scan the roster to find the high-water mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCounter<T> {
    next: u64,
    #[serde(skip)]
    marker: PhantomData<T>,
}

impl<T> IdCounter<T> {
    /// Starts issuing from `1`.
    pub fn new() -> Self {
        Self {
            next: 1,
            marker: PhantomData,
        }
    }
    /// The next id this counter would issue, without issuing it.
    pub fn peek(&self) -> u64 {
        self.next
    }
    /// Issues the next id and advances the counter.
    pub fn issue(&mut self) -> Id<T> {
        let id = Id::new(self.next);
        self.next += 1;
        id
    }
    /// True if `id` could have come from this counter (strictly below the
    /// next value about to be issued).
    pub fn has_issued(&self, id: Id<T>) -> bool {
        id.get() < self.next
    }
}

impl<T> Default for IdCounter<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn issues_starting_at_one() {
        let mut counter = IdCounter::<Marker>::new();
        let first = counter.issue();
        assert_eq!(first.get(), 1);
        assert_eq!(counter.peek(), 2);
    }

    #[test]
    fn monotonic_and_witnessed() {
        let mut counter = IdCounter::<Marker>::new();
        let a = counter.issue();
        let b = counter.issue();
        assert!(b > a);
        assert!(counter.has_issued(a));
        assert!(counter.has_issued(b));
        assert!(!counter.has_issued(Id::new(counter.peek())));
    }

    #[test]
    fn cast_preserves_value() {
        struct Other;
        let id: Id<Marker> = Id::new(7);
        let cast: Id<Other> = id.cast();
        assert_eq!(cast.get(), 7);
    }
}
