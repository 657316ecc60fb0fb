use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::trace;

use super::{NonEmptyList, Partition};
use crate::EmptyError;

/// An ordered set that guarantees at least one member exists.
///
/// The head is always the smallest member and is never repeated in `rest`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptySet<K> {
    head: K,
    rest: BTreeSet<K>,
}

impl<K: Ord> NonEmptySet<K> {
    pub fn singleton(head: K) -> Self {
        Self {
            head,
            rest: BTreeSet::new(),
        }
    }

    /// Builds a set from a candidate head and arbitrary other members.
    pub fn with_value(head: K, rest: BTreeSet<K>) -> Self {
        Self::reorder(head, rest)
    }

    /// Returns `None` if `members` is empty.
    pub fn from_set(mut members: BTreeSet<K>) -> Option<Self> {
        let head = members.pop_first()?;
        Some(Self {
            head,
            rest: members,
        })
    }

    pub fn from_list(members: NonEmptyList<K>) -> Self
    where
        K: Clone,
    {
        let (head, rest) = members.into_parts();
        Self::reorder(head, rest.into_iter().collect())
    }

    fn reorder(head: K, mut rest: BTreeSet<K>) -> Self {
        rest.remove(&head);
        let promote = matches!(rest.first(), Some(smallest) if *smallest < head);
        if !promote {
            return Self { head, rest };
        }
        match rest.pop_first() {
            Some(smallest) => {
                trace!(rest_len = rest.len(), "promoting smaller member into set head");
                rest.insert(head);
                Self {
                    head: smallest,
                    rest,
                }
            }
            None => Self { head, rest },
        }
    }

    /// The smallest member.
    pub fn head(&self) -> &K {
        &self.head
    }

    pub fn rest(&self) -> &BTreeSet<K> {
        &self.rest
    }

    /// The largest member.
    pub fn last(&self) -> &K {
        self.rest.last().unwrap_or(&self.head)
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let head: &Q = self.head.borrow();
        head == value || self.rest.contains(value)
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|member| other.contains(member))
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &K> + '_ {
        std::iter::once(&self.head).chain(self.rest.iter())
    }

    pub fn into_set(self) -> BTreeSet<K> {
        let mut members = self.rest;
        members.insert(self.head);
        members
    }

    pub fn to_list(&self) -> NonEmptyList<K>
    where
        K: Clone,
    {
        NonEmptyList::new(self.head.clone(), self.rest.iter().cloned().collect())
    }

    pub fn insert(self, value: K) -> Self {
        let Self { head, mut rest } = self;
        match value.cmp(&head) {
            Ordering::Equal => Self { head, rest },
            Ordering::Less => {
                rest.insert(head);
                Self { head: value, rest }
            }
            Ordering::Greater => {
                rest.insert(value);
                Self { head, rest }
            }
        }
    }

    /// Removes `value`, or returns `None` if it was the only member.
    pub fn remove<Q>(self, value: &Q) -> Option<Self>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Self { head, mut rest } = self;
        let head_value: &Q = head.borrow();
        if head_value == value {
            return Self::from_set(rest);
        }
        rest.remove(value);
        Some(Self { head, rest })
    }

    pub fn map<U, F>(self, mut f: F) -> NonEmptySet<U>
    where
        U: Ord,
        F: FnMut(K) -> U,
    {
        let head = f(self.head);
        let rest = self.rest.into_iter().map(f).collect();
        NonEmptySet::reorder(head, rest)
    }

    pub fn filter<F>(self, mut predicate: F) -> Option<Self>
    where
        F: FnMut(&K) -> bool,
    {
        let Self { head, mut rest } = self;
        let keep_head = predicate(&head);
        rest.retain(|member| predicate(member));
        if keep_head {
            Some(Self { head, rest })
        } else {
            Self::from_set(rest)
        }
    }

    pub fn partition<F>(self, mut predicate: F) -> Partition<Self>
    where
        F: FnMut(&K) -> bool,
    {
        let Self { head, rest } = self;
        let head_matched = predicate(&head);
        let (matches, non_matches): (BTreeSet<K>, BTreeSet<K>) =
            rest.into_iter().partition(|member| predicate(member));
        let (same, other) = if head_matched {
            (matches, non_matches)
        } else {
            (non_matches, matches)
        };
        Partition::from_routed(
            head_matched,
            Self { head, rest: same },
            Self::from_set(other),
        )
    }

    pub fn union(self, other: Self) -> Self {
        let Self {
            head: left_head,
            rest: mut left_rest,
        } = self;
        let Self {
            head: right_head,
            rest: mut right_rest,
        } = other;
        let head = match left_head.cmp(&right_head) {
            Ordering::Less => {
                right_rest.insert(right_head);
                left_head
            }
            Ordering::Greater => {
                left_rest.insert(left_head);
                right_head
            }
            Ordering::Equal => left_head,
        };
        let mut rest = right_rest;
        rest.append(&mut left_rest);
        Self { head, rest }
    }

    /// Members of `self` absent from `other`.
    pub fn diff(self, other: &Self) -> Option<Self> {
        let mut members = self.into_set();
        members.retain(|member| !other.contains(member));
        Self::from_set(members)
    }

    pub fn intersect(self, other: &Self) -> Option<Self> {
        let mut members = self.into_set();
        members.retain(|member| other.contains(member));
        Self::from_set(members)
    }

    /// Folds over members in ascending order.
    pub fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: FnMut(A, K) -> A,
    {
        std::iter::once(self.head).chain(self.rest).fold(init, f)
    }
}

impl<K: Ord> From<K> for NonEmptySet<K> {
    fn from(head: K) -> Self {
        Self::singleton(head)
    }
}

impl<K: Ord> TryFrom<BTreeSet<K>> for NonEmptySet<K> {
    type Error = EmptyError;

    fn try_from(members: BTreeSet<K>) -> Result<Self, Self::Error> {
        Self::from_set(members).ok_or(EmptyError::NoElements)
    }
}

impl<K: Ord> From<NonEmptySet<K>> for BTreeSet<K> {
    fn from(set: NonEmptySet<K>) -> Self {
        set.into_set()
    }
}

impl<K: Ord> IntoIterator for NonEmptySet<K> {
    type Item = K;
    type IntoIter = std::collections::btree_set::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_set().into_iter()
    }
}
