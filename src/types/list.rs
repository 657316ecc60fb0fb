use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::ops::{Add, Mul};

use im_rc::Vector;

use super::Partition;
use crate::EmptyError;

/// A persistent list that guarantees at least one element exists.
///
/// The remaining elements live in an [`im_rc::Vector`], so cloning a list and
/// deriving new lists from it shares structure instead of copying.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptyList<T: Clone> {
    head: T,
    rest: Vector<T>,
}

impl<T: Clone> NonEmptyList<T> {
    pub fn new(head: T, rest: Vector<T>) -> Self {
        Self { head, rest }
    }

    /// Create a list with a single element
    pub fn singleton(head: T) -> Self {
        Self {
            head,
            rest: Vector::new(),
        }
    }

    /// Returns `None` if `items` is empty.
    pub fn from_vector(mut items: Vector<T>) -> Option<Self> {
        let head = items.pop_front()?;
        Some(Self { head, rest: items })
    }

    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        Self::from_iter_opt(items)
    }

    /// Collects an iterator, returning `None` if it yields nothing.
    pub fn from_iter_opt<I>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter();
        let head = items.next()?;
        Some(Self {
            head,
            rest: items.collect(),
        })
    }

    /// Get the first element (guaranteed to exist)
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Every element after the head.
    pub fn rest(&self) -> &Vector<T> {
        &self.rest
    }

    pub fn last(&self) -> &T {
        self.rest.last().unwrap_or(&self.head)
    }

    /// Get the length (always >= 1)
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn is_singleton(&self) -> bool {
        self.rest.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        match index {
            0 => Some(&self.head),
            _ => self.rest.get(index - 1),
        }
    }

    /// Iterator over all elements
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        std::iter::once(&self.head).chain(self.rest.iter())
    }

    pub fn into_parts(self) -> (T, Vector<T>) {
        (self.head, self.rest)
    }

    pub fn into_vector(self) -> Vector<T> {
        let mut items = self.rest;
        items.push_front(self.head);
        items
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Prepends `item`, which becomes the new head.
    pub fn cons(self, item: T) -> Self {
        let mut rest = self.rest;
        rest.push_front(self.head);
        Self { head: item, rest }
    }

    pub fn push(mut self, item: T) -> Self {
        self.rest.push_back(item);
        self
    }

    pub fn append(mut self, other: Self) -> Self {
        self.rest.append(other.into_vector());
        self
    }

    /// Flattens a non-empty list of non-empty lists.
    pub fn concat(lists: NonEmptyList<Self>) -> Self {
        lists.reduce(Self::append)
    }

    pub fn concat_map<U, F>(self, f: F) -> NonEmptyList<U>
    where
        U: Clone,
        F: FnMut(T) -> NonEmptyList<U>,
    {
        NonEmptyList::concat(self.map(f))
    }

    pub fn reverse(self) -> Self {
        let Self { head, mut rest } = self;
        match rest.pop_back() {
            None => Self::singleton(head),
            Some(last) => {
                let mut reversed: Vector<T> = rest.iter().rev().cloned().collect();
                reversed.push_back(head);
                Self {
                    head: last,
                    rest: reversed,
                }
            }
        }
    }

    pub fn map<U, F>(self, mut f: F) -> NonEmptyList<U>
    where
        U: Clone,
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        NonEmptyList {
            head,
            rest: self.rest.into_iter().map(f).collect(),
        }
    }

    /// Like [`map`](Self::map), passing each element's position as well.
    pub fn indexed_map<U, F>(self, mut f: F) -> NonEmptyList<U>
    where
        U: Clone,
        F: FnMut(usize, T) -> U,
    {
        let head = f(0, self.head);
        let rest = self
            .rest
            .into_iter()
            .enumerate()
            .map(|(i, item)| f(i + 1, item))
            .collect();
        NonEmptyList { head, rest }
    }

    /// Combines two lists element-wise. The result is as long as the shorter
    /// input.
    pub fn map2<U, R, F>(self, other: NonEmptyList<U>, mut f: F) -> NonEmptyList<R>
    where
        U: Clone,
        R: Clone,
        F: FnMut(T, U) -> R,
    {
        let head = f(self.head, other.head);
        let rest = self
            .rest
            .into_iter()
            .zip(other.rest)
            .map(|(a, b)| f(a, b))
            .collect();
        NonEmptyList { head, rest }
    }

    pub fn zip<U: Clone>(self, other: NonEmptyList<U>) -> NonEmptyList<(T, U)> {
        self.map2(other, |a, b| (a, b))
    }

    /// Places `separator` between every pair of adjacent elements.
    pub fn intersperse(self, separator: T) -> Self {
        let mut rest = Vector::new();
        for item in self.rest {
            rest.push_back(separator.clone());
            rest.push_back(item);
        }
        Self {
            head: self.head,
            rest,
        }
    }

    /// Keeps the first `n` elements. The head is always kept, so `take(0)`
    /// yields a singleton.
    pub fn take(self, n: usize) -> Self {
        let Self { head, mut rest } = self;
        let keep = n.saturating_sub(1).min(rest.len());
        let _ = rest.split_off(keep);
        Self { head, rest }
    }

    /// Drops the first `n` elements. Dropping everything leaves the last
    /// element rather than an empty list.
    pub fn drop(self, n: usize) -> Self {
        if n == 0 {
            return self;
        }
        let Self { head, mut rest } = self;
        let remaining = rest.split_off((n - 1).min(rest.len()));
        match Self::from_vector(remaining) {
            Some(list) => list,
            None => Self::singleton(rest.pop_back().unwrap_or(head)),
        }
    }

    /// Removes the head. Returns `None` for a singleton.
    pub fn pop(self) -> Option<Self> {
        Self::from_vector(self.rest)
    }

    pub fn replace_head(self, head: T) -> Self {
        Self {
            head,
            rest: self.rest,
        }
    }

    pub fn map_head<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        Self {
            head: f(self.head),
            rest: self.rest,
        }
    }

    pub fn sort(self) -> Self
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp)
    }

    /// Stable sort by `compare`.
    pub fn sort_by<F>(self, mut compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let Self { head, rest } = self;
        let mut rest: Vec<T> = rest.into_iter().collect();
        rest.sort_by(&mut compare);
        // the head precedes elements that compare equal to it
        let at = rest.partition_point(|item| compare(item, &head) == Ordering::Less);
        if at == 0 {
            return Self {
                head,
                rest: rest.into_iter().collect(),
            };
        }
        let smallest = std::mem::replace(&mut rest[0], head);
        rest[..at].rotate_left(1);
        Self {
            head: smallest,
            rest: rest.into_iter().collect(),
        }
    }

    pub fn sort_by_key<K, F>(self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)))
    }

    /// Removes consecutive repeated elements.
    pub fn dedup(self) -> Self
    where
        T: PartialEq,
    {
        let mut rest: Vector<T> = Vector::new();
        for item in self.rest {
            if *rest.last().unwrap_or(&self.head) != item {
                rest.push_back(item);
            }
        }
        Self {
            head: self.head,
            rest,
        }
    }

    /// Removes every element equal to an earlier one.
    pub fn unique(self) -> Self
    where
        T: Ord,
    {
        let mut seen = BTreeSet::new();
        seen.insert(self.head.clone());
        let rest = self
            .rest
            .into_iter()
            .filter(|item| seen.insert(item.clone()))
            .collect();
        Self {
            head: self.head,
            rest,
        }
    }

    /// Left fold starting from the head.
    pub fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        std::iter::once(self.head).chain(self.rest).fold(init, f)
    }

    pub fn fold_right<A, F>(self, init: A, mut f: F) -> A
    where
        F: FnMut(T, A) -> A,
    {
        let acc = self
            .rest
            .iter()
            .rev()
            .cloned()
            .fold(init, |acc, item| f(item, acc));
        f(self.head, acc)
    }

    /// Folds without an initial value, using the head as the seed.
    pub fn reduce<F>(self, f: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        self.rest.into_iter().fold(self.head, f)
    }

    pub fn maximum(&self) -> &T
    where
        T: Ord,
    {
        self.rest
            .iter()
            .fold(&self.head, |best, item| if *item >= *best { item } else { best })
    }

    pub fn minimum(&self) -> &T
    where
        T: Ord,
    {
        self.rest
            .iter()
            .fold(&self.head, |best, item| if *item < *best { item } else { best })
    }

    pub fn maximum_by_key<K, F>(&self, mut key: F) -> &T
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let init = (key(&self.head), &self.head);
        self.rest
            .iter()
            .fold(init, |best, item| {
                let k = key(item);
                if k >= best.0 {
                    (k, item)
                } else {
                    best
                }
            })
            .1
    }

    pub fn minimum_by_key<K, F>(&self, mut key: F) -> &T
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let init = (key(&self.head), &self.head);
        self.rest
            .iter()
            .fold(init, |best, item| {
                let k = key(item);
                if k < best.0 {
                    (k, item)
                } else {
                    best
                }
            })
            .1
    }

    /// Sum of all elements. No zero value is needed since the list is never
    /// empty.
    pub fn sum(self) -> T
    where
        T: Add<Output = T>,
    {
        self.reduce(Add::add)
    }

    pub fn product(self) -> T
    where
        T: Mul<Output = T>,
    {
        self.reduce(Mul::mul)
    }

    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(|item| predicate(item))
    }

    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(|item| predicate(item))
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Keeps the elements satisfying `predicate`, or `None` if none do.
    pub fn filter<F>(self, mut predicate: F) -> Option<Self>
    where
        F: FnMut(&T) -> bool,
    {
        let keep_head = predicate(&self.head);
        let rest: Vector<T> = self.rest.into_iter().filter(|item| predicate(item)).collect();
        if keep_head {
            Some(Self {
                head: self.head,
                rest,
            })
        } else {
            Self::from_vector(rest)
        }
    }

    pub fn filter_map<U, F>(self, mut f: F) -> Option<NonEmptyList<U>>
    where
        U: Clone,
        F: FnMut(T) -> Option<U>,
    {
        let head = f(self.head);
        let rest: Vector<U> = self.rest.into_iter().filter_map(f).collect();
        match head {
            Some(head) => Some(NonEmptyList { head, rest }),
            None => NonEmptyList::from_vector(rest),
        }
    }

    pub fn partition<F>(self, mut predicate: F) -> Partition<Self>
    where
        F: FnMut(&T) -> bool,
    {
        let head_matched = predicate(&self.head);
        let (matches, non_matches): (Vector<T>, Vector<T>) =
            self.rest.into_iter().partition(|item| predicate(item));
        let (same, other) = if head_matched {
            (matches, non_matches)
        } else {
            (non_matches, matches)
        };
        Partition::from_routed(
            head_matched,
            Self::new(self.head, same),
            Self::from_vector(other),
        )
    }
}

impl<T: Clone> From<T> for NonEmptyList<T> {
    fn from(head: T) -> Self {
        Self::singleton(head)
    }
}

impl<T: Clone> TryFrom<Vector<T>> for NonEmptyList<T> {
    type Error = EmptyError;

    fn try_from(items: Vector<T>) -> Result<Self, Self::Error> {
        Self::from_vector(items).ok_or(EmptyError::NoElements)
    }
}

impl<T: Clone> TryFrom<Vec<T>> for NonEmptyList<T> {
    type Error = EmptyError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(items).ok_or(EmptyError::NoElements)
    }
}

impl<T: Clone> From<NonEmptyList<T>> for Vector<T> {
    fn from(list: NonEmptyList<T>) -> Self {
        list.into_vector()
    }
}

impl<T: Clone> From<NonEmptyList<T>> for Vec<T> {
    fn from(list: NonEmptyList<T>) -> Self {
        std::iter::once(list.head).chain(list.rest).collect()
    }
}

impl<T: Clone> IntoIterator for NonEmptyList<T> {
    type Item = T;
    type IntoIter = im_rc::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vector().into_iter()
    }
}
