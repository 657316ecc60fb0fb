use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::trace;

use super::{NonEmptyList, Partition};
use crate::EmptyError;

/// An ordered map that guarantees at least one entry exists.
///
/// The head is always the entry with the smallest key, and `rest` never
/// holds that key. Every constructor either places new entries by direct
/// comparison with the head or goes through `reorder`, so
/// equal maps have equal representations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptyMap<K, V> {
    head: (K, V),
    rest: BTreeMap<K, V>,
}

impl<K: Ord, V> NonEmptyMap<K, V> {
    pub fn singleton(key: K, value: V) -> Self {
        Self {
            head: (key, value),
            rest: BTreeMap::new(),
        }
    }

    /// Builds a map from a candidate head and arbitrary other entries. If
    /// `rest` also holds `key`, the explicit `(key, value)` pair wins.
    pub fn with_pair(key: K, value: V, rest: BTreeMap<K, V>) -> Self {
        Self::reorder((key, value), rest)
    }

    /// Returns `None` if `entries` is empty.
    pub fn from_map(mut entries: BTreeMap<K, V>) -> Option<Self> {
        let head = entries.pop_first()?;
        Some(Self {
            head,
            rest: entries,
        })
    }

    /// Later entries overwrite earlier entries with the same key.
    pub fn from_list(entries: NonEmptyList<(K, V)>) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let ((key, value), rest) = entries.into_parts();
        rest.into_iter()
            .fold(Self::singleton(key, value), |map, (key, value)| {
                map.insert(key, value)
            })
    }

    /// Restores the head-is-minimum invariant for an arbitrary head and
    /// rest. Idempotent.
    fn reorder(head: (K, V), mut rest: BTreeMap<K, V>) -> Self {
        rest.remove(&head.0);
        let promote = matches!(rest.first_key_value(), Some((smallest, _)) if *smallest < head.0);
        if !promote {
            return Self { head, rest };
        }
        match rest.pop_first() {
            Some(smallest) => {
                trace!(rest_len = rest.len(), "promoting smaller key into map head");
                rest.insert(head.0, head.1);
                Self {
                    head: smallest,
                    rest,
                }
            }
            None => Self { head, rest },
        }
    }

    /// The entry with the smallest key.
    pub fn head(&self) -> (&K, &V) {
        (&self.head.0, &self.head.1)
    }

    /// Every entry except the head, all with keys greater than the head's.
    pub fn rest(&self) -> &BTreeMap<K, V> {
        &self.rest
    }

    /// The entry with the largest key.
    pub fn last(&self) -> (&K, &V) {
        self.rest
            .last_key_value()
            .unwrap_or((&self.head.0, &self.head.1))
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let head_key: &Q = self.head.0.borrow();
        if head_key == key {
            Some(&self.head.1)
        } else {
            self.rest.get(key)
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + '_ {
        std::iter::once((&self.head.0, &self.head.1)).chain(self.rest.iter())
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    pub fn into_map(self) -> BTreeMap<K, V> {
        let mut entries = self.rest;
        entries.insert(self.head.0, self.head.1);
        entries
    }

    pub fn to_list(&self) -> NonEmptyList<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let head = (self.head.0.clone(), self.head.1.clone());
        let rest = self
            .rest
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        NonEmptyList::new(head, rest)
    }

    /// Inserts or replaces an entry.
    pub fn insert(self, key: K, value: V) -> Self {
        let Self { head, mut rest } = self;
        match key.cmp(&head.0) {
            Ordering::Equal => Self {
                head: (key, value),
                rest,
            },
            Ordering::Less => {
                rest.insert(head.0, head.1);
                Self {
                    head: (key, value),
                    rest,
                }
            }
            Ordering::Greater => {
                rest.insert(key, value);
                Self { head, rest }
            }
        }
    }

    /// Removes `key`, or returns `None` if that was the only entry.
    pub fn remove<Q>(self, key: &Q) -> Option<Self>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Self { head, mut rest } = self;
        let head_key: &Q = head.0.borrow();
        if head_key == key {
            return Self::from_map(rest);
        }
        rest.remove(key);
        Some(Self { head, rest })
    }

    /// Calls `f` with the current value for `key` (if any). Returning `None`
    /// removes the entry; the whole map becomes `None` if it was the last.
    pub fn update<F>(self, key: K, f: F) -> Option<Self>
    where
        F: FnOnce(Option<V>) -> Option<V>,
    {
        let Self { head, mut rest } = self;
        if key == head.0 {
            return match f(Some(head.1)) {
                Some(value) => Some(Self {
                    head: (key, value),
                    rest,
                }),
                None => Self::from_map(rest),
            };
        }
        let current = rest.remove(&key);
        let map = Self { head, rest };
        match f(current) {
            Some(value) => Some(map.insert(key, value)),
            None => Some(map),
        }
    }

    /// Transforms values only; keys and ordering are untouched.
    pub fn map_values<W, F>(self, mut f: F) -> NonEmptyMap<K, W>
    where
        F: FnMut(&K, V) -> W,
    {
        let (key, value) = self.head;
        let value = f(&key, value);
        let rest = self
            .rest
            .into_iter()
            .map(|(key, value)| {
                let value = f(&key, value);
                (key, value)
            })
            .collect();
        NonEmptyMap {
            head: (key, value),
            rest,
        }
    }

    /// Transforms every entry, keys included. When two entries land on the
    /// same key the one produced from the smaller original key is dropped,
    /// except that the former head's entry is always kept.
    pub fn map<K2, W, F>(self, mut f: F) -> NonEmptyMap<K2, W>
    where
        K2: Ord,
        F: FnMut(K, V) -> (K2, W),
    {
        let head = f(self.head.0, self.head.1);
        let rest = self
            .rest
            .into_iter()
            .map(|(key, value)| f(key, value))
            .collect();
        NonEmptyMap::reorder(head, rest)
    }

    pub fn filter<F>(self, mut predicate: F) -> Option<Self>
    where
        F: FnMut(&K, &V) -> bool,
    {
        let Self { head, mut rest } = self;
        let keep_head = predicate(&head.0, &head.1);
        rest.retain(|key, value| predicate(key, value));
        if keep_head {
            Some(Self { head, rest })
        } else {
            Self::from_map(rest)
        }
    }

    pub fn partition<F>(self, mut predicate: F) -> Partition<Self>
    where
        F: FnMut(&K, &V) -> bool,
    {
        let Self { head, rest } = self;
        let head_matched = predicate(&head.0, &head.1);
        let (matches, non_matches): (BTreeMap<K, V>, BTreeMap<K, V>) = rest
            .into_iter()
            .partition(|(key, value)| predicate(key, value));
        let (same, other) = if head_matched {
            (matches, non_matches)
        } else {
            (non_matches, matches)
        };
        Partition::from_routed(
            head_matched,
            Self { head, rest: same },
            Self::from_map(other),
        )
    }

    /// Combines two maps. On duplicate keys the entry from `self` wins.
    pub fn union(self, other: Self) -> Self {
        let Self {
            head: left_head,
            rest: mut left_rest,
        } = self;
        let Self {
            head: right_head,
            rest: mut right_rest,
        } = other;
        let head = match left_head.0.cmp(&right_head.0) {
            Ordering::Less => {
                right_rest.insert(right_head.0, right_head.1);
                left_head
            }
            Ordering::Greater => {
                left_rest.insert(left_head.0, left_head.1);
                right_head
            }
            Ordering::Equal => left_head,
        };
        let mut rest = right_rest;
        rest.append(&mut left_rest);
        Self { head, rest }
    }

    /// Entries of `self` whose keys are absent from `other`.
    pub fn diff<W>(self, other: &NonEmptyMap<K, W>) -> Option<Self> {
        let mut entries = self.into_map();
        entries.retain(|key, _| !other.contains_key(key));
        Self::from_map(entries)
    }

    /// Entries of `self` whose keys are also in `other`. Values come from
    /// `self`.
    pub fn intersect<W>(self, other: &NonEmptyMap<K, W>) -> Option<Self> {
        let mut entries = self.into_map();
        entries.retain(|key, _| other.contains_key(key));
        Self::from_map(entries)
    }

    /// Folds over entries in ascending key order.
    pub fn fold<A, F>(self, init: A, mut f: F) -> A
    where
        F: FnMut(A, K, V) -> A,
    {
        let acc = f(init, self.head.0, self.head.1);
        self.rest
            .into_iter()
            .fold(acc, |acc, (key, value)| f(acc, key, value))
    }
}

impl<K: Ord, V> From<(K, V)> for NonEmptyMap<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::singleton(key, value)
    }
}

impl<K: Ord, V> TryFrom<BTreeMap<K, V>> for NonEmptyMap<K, V> {
    type Error = EmptyError;

    fn try_from(entries: BTreeMap<K, V>) -> Result<Self, Self::Error> {
        Self::from_map(entries).ok_or(EmptyError::NoFields)
    }
}

impl<K: Ord, V> From<NonEmptyMap<K, V>> for BTreeMap<K, V> {
    fn from(map: NonEmptyMap<K, V>) -> Self {
        map.into_map()
    }
}

impl<K: Ord, V> IntoIterator for NonEmptyMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::collections::btree_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_map().into_iter()
    }
}
