use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::EmptyError;

/// A string that guarantees at least one character exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptyString {
    head: char,
    rest: String,
}

impl NonEmptyString {
    pub fn new(head: char, rest: impl Into<String>) -> Self {
        Self {
            head,
            rest: rest.into(),
        }
    }

    pub fn singleton(head: char) -> Self {
        Self {
            head,
            rest: String::new(),
        }
    }

    /// Returns `None` for an empty string.
    pub fn from_string(mut text: String) -> Option<Self> {
        let head = text.chars().next()?;
        let rest = text.split_off(head.len_utf8());
        Some(Self { head, rest })
    }

    pub fn head(&self) -> char {
        self.head
    }

    /// Everything after the first character.
    pub fn tail(&self) -> &str {
        &self.rest
    }

    pub fn last(&self) -> char {
        self.rest.chars().next_back().unwrap_or(self.head)
    }

    /// Number of characters (always >= 1).
    pub fn len(&self) -> usize {
        1 + self.rest.chars().count()
    }

    pub fn chars(&self) -> impl DoubleEndedIterator<Item = char> + '_ {
        std::iter::once(self.head).chain(self.rest.chars())
    }

    pub fn into_string(self) -> String {
        let mut text = String::with_capacity(self.head.len_utf8() + self.rest.len());
        text.push(self.head);
        text.push_str(&self.rest);
        text
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.to_string().contains(pattern)
    }

    pub fn cons(self, c: char) -> Self {
        let rest = self.into_string();
        Self { head: c, rest }
    }

    pub fn push(mut self, c: char) -> Self {
        self.rest.push(c);
        self
    }

    pub fn push_str(mut self, text: &str) -> Self {
        self.rest.push_str(text);
        self
    }

    pub fn append(mut self, other: &NonEmptyString) -> Self {
        self.rest.push(other.head);
        self.rest.push_str(&other.rest);
        self
    }

    pub fn reverse(self) -> Self {
        let Self { head, rest } = self;
        let mut reversed = rest.chars().rev();
        match reversed.next() {
            None => Self::singleton(head),
            Some(last) => {
                let mut rest: String = reversed.collect();
                rest.push(head);
                Self { head: last, rest }
            }
        }
    }

    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(char) -> char,
    {
        let head = f(self.head);
        Self {
            head,
            rest: self.rest.chars().map(f).collect(),
        }
    }

    pub fn filter<F>(self, mut predicate: F) -> Option<Self>
    where
        F: FnMut(char) -> bool,
    {
        let keep_head = predicate(self.head);
        let mut rest = self.rest;
        rest.retain(&mut predicate);
        if keep_head {
            Some(Self {
                head: self.head,
                rest,
            })
        } else {
            Self::from_string(rest)
        }
    }

    pub fn to_uppercase(&self) -> Self {
        Self::respell(self.head, self.to_string().to_uppercase())
    }

    pub fn to_lowercase(&self) -> Self {
        Self::respell(self.head, self.to_string().to_lowercase())
    }

    /// Case mapping never empties a string; `fallback` only covers the
    /// impossible empty result.
    fn respell(fallback: char, text: String) -> Self {
        Self::from_string(text).unwrap_or_else(|| Self::singleton(fallback))
    }

    pub fn repeat(self, times: NonZeroUsize) -> Self {
        let whole = self.to_string();
        let mut rest = self.rest;
        rest.reserve(whole.len() * (times.get() - 1));
        for _ in 1..times.get() {
            rest.push_str(&whole);
        }
        Self {
            head: self.head,
            rest,
        }
    }

    /// Removes leading and trailing whitespace, or `None` if nothing else
    /// remains.
    pub fn trim(&self) -> Option<Self> {
        Self::from_str(self.to_string().trim()).ok()
    }

    /// Prepends `fill` until the string is `width` characters long.
    pub fn pad_left(self, width: usize, fill: char) -> Self {
        let missing = width.saturating_sub(self.len());
        self.surround(missing, 0, fill)
    }

    /// Appends `fill` until the string is `width` characters long.
    pub fn pad_right(self, width: usize, fill: char) -> Self {
        let missing = width.saturating_sub(self.len());
        self.surround(0, missing, fill)
    }

    /// Centers the string in `width` characters. When the padding is odd the
    /// extra `fill` goes on the left.
    pub fn pad(self, width: usize, fill: char) -> Self {
        let missing = width.saturating_sub(self.len());
        self.surround(missing.div_ceil(2), missing / 2, fill)
    }

    fn surround(self, left: usize, right: usize, fill: char) -> Self {
        let mut rest = String::new();
        let head = if left == 0 {
            self.head
        } else {
            rest.extend(std::iter::repeat(fill).take(left - 1));
            rest.push(self.head);
            fill
        };
        rest.push_str(&self.rest);
        rest.extend(std::iter::repeat(fill).take(right));
        Self { head, rest }
    }
}

impl From<char> for NonEmptyString {
    fn from(head: char) -> Self {
        Self::singleton(head)
    }
}

impl FromStr for NonEmptyString {
    type Err = EmptyError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut chars = text.chars();
        let head = chars.next().ok_or(EmptyError::EmptyString)?;
        Ok(Self {
            head,
            rest: chars.as_str().to_owned(),
        })
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = EmptyError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::from_string(text).ok_or(EmptyError::EmptyString)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = EmptyError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<NonEmptyString> for String {
    fn from(text: NonEmptyString) -> Self {
        text.into_string()
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.head, self.rest)
    }
}
