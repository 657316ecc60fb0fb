use std::ops::{Add, Bound, Index, Mul, RangeBounds};

use super::{NonEmptyList, Partition};
use crate::EmptyError;

/// A random-access array that guarantees at least one element exists.
///
/// Index 0 is the head; index `i > 0` is `rest[i - 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptyArray<T> {
    head: T,
    rest: Vec<T>,
}

impl<T> NonEmptyArray<T> {
    pub fn new(head: T, rest: Vec<T>) -> Self {
        Self { head, rest }
    }

    /// Create a new NonEmptyArray with a single element
    pub fn singleton(head: T) -> Self {
        Self {
            head,
            rest: Vec::new(),
        }
    }

    /// Returns `None` if `items` is empty.
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        Self::from_iter_opt(items)
    }

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

    pub fn rest(&self) -> &[T] {
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

    /// Replaces the element at `index`. An out-of-range index leaves the
    /// array unchanged.
    pub fn set(self, index: usize, value: T) -> Self {
        self.update(index, |_| value)
    }

    /// Applies `f` to the element at `index`, if there is one.
    pub fn update<F>(mut self, index: usize, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        if index == 0 {
            return Self {
                head: f(self.head),
                rest: self.rest,
            };
        }
        if index <= self.rest.len() {
            let mut tail = self.rest.split_off(index - 1);
            let mut tail_items = tail.drain(..);
            if let Some(old) = tail_items.next() {
                self.rest.push(f(old));
            }
            self.rest.extend(tail_items);
        }
        self
    }

    /// Iterator over all elements
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        std::iter::once(&self.head).chain(self.rest.iter())
    }

    pub fn into_parts(self) -> (T, Vec<T>) {
        (self.head, self.rest)
    }

    pub fn into_vec(self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len());
        items.push(self.head);
        items.extend(self.rest);
        items
    }

    pub fn to_list(self) -> NonEmptyList<T>
    where
        T: Clone,
    {
        NonEmptyList::new(self.head, self.rest.into_iter().collect())
    }

    /// Add an element to the end
    pub fn push(mut self, value: T) -> Self {
        self.rest.push(value);
        self
    }

    pub fn append(mut self, other: Self) -> Self {
        self.rest.reserve(other.len());
        self.rest.push(other.head);
        self.rest.extend(other.rest);
        self
    }

    pub fn reverse(self) -> Self {
        let Self { head, mut rest } = self;
        match rest.pop() {
            None => Self::singleton(head),
            Some(last) => {
                rest.reverse();
                rest.push(head);
                Self { head: last, rest }
            }
        }
    }

    pub fn map<U, F>(self, mut f: F) -> NonEmptyArray<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        NonEmptyArray {
            head,
            rest: self.rest.into_iter().map(f).collect(),
        }
    }

    pub fn indexed_map<U, F>(self, mut f: F) -> NonEmptyArray<U>
    where
        F: FnMut(usize, T) -> U,
    {
        let head = f(0, self.head);
        let rest = self
            .rest
            .into_iter()
            .enumerate()
            .map(|(i, item)| f(i + 1, item))
            .collect();
        NonEmptyArray { head, rest }
    }

    pub fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        std::iter::once(self.head).chain(self.rest).fold(init, f)
    }

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

    pub fn filter<F>(self, mut predicate: F) -> Option<Self>
    where
        F: FnMut(&T) -> bool,
    {
        let keep_head = predicate(&self.head);
        let mut rest = self.rest;
        rest.retain(|item| predicate(item));
        if keep_head {
            Some(Self {
                head: self.head,
                rest,
            })
        } else {
            Self::from_vec(rest)
        }
    }

    pub fn filter_map<U, F>(self, mut f: F) -> Option<NonEmptyArray<U>>
    where
        F: FnMut(T) -> Option<U>,
    {
        let head = f(self.head);
        let rest: Vec<U> = self.rest.into_iter().filter_map(f).collect();
        match head {
            Some(head) => Some(NonEmptyArray { head, rest }),
            None => NonEmptyArray::from_vec(rest),
        }
    }

    pub fn partition<F>(self, mut predicate: F) -> Partition<Self>
    where
        F: FnMut(&T) -> bool,
    {
        let head_matched = predicate(&self.head);
        let (matches, non_matches): (Vec<T>, Vec<T>) =
            self.rest.into_iter().partition(|item| predicate(item));
        let (same, other) = if head_matched {
            (matches, non_matches)
        } else {
            (non_matches, matches)
        };
        Partition::from_routed(
            head_matched,
            Self::new(self.head, same),
            Self::from_vec(other),
        )
    }

    /// Elements in `range`, clamped to the array bounds. `None` when the
    /// clamped range is empty.
    pub fn slice<R>(self, range: R) -> Option<Self>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        }
        .min(len);
        if start >= end {
            return None;
        }
        Self::from_iter_opt(self.into_vec().into_iter().take(end).skip(start))
    }
}

impl<T> From<T> for NonEmptyArray<T> {
    fn from(head: T) -> Self {
        Self::singleton(head)
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyArray<T> {
    type Error = EmptyError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(items).ok_or(EmptyError::NoElements)
    }
}

impl<T> From<NonEmptyArray<T>> for Vec<T> {
    fn from(array: NonEmptyArray<T>) -> Self {
        array.into_vec()
    }
}

impl<T> Index<usize> for NonEmptyArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.head,
            _ => &self.rest[index - 1],
        }
    }
}

impl<T> IntoIterator for NonEmptyArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
