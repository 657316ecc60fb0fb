//! Serde encode/decode for the non-empty collections.
//!
//! Every collection serializes exactly like its plain counterpart: lists,
//! arrays and sets as sequences, maps as maps, strings as strings. Decoding
//! rejects empty payloads with the matching [`EmptyError`] message.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::{EmptyError, NonEmptyArray, NonEmptyList, NonEmptyMap, NonEmptySet, NonEmptyString};

fn empty<E: serde::de::Error>(kind: EmptyError) -> E {
    debug!(error = %kind, "rejecting empty payload");
    E::custom(kind)
}

impl<T: Clone + Serialize> Serialize for NonEmptyList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Clone + Deserialize<'de>> Deserialize<'de> for NonEmptyList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        NonEmptyList::from_vec(items).ok_or_else(|| empty(EmptyError::NoElements))
    }
}

impl<T: Serialize> Serialize for NonEmptyArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmptyArray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        NonEmptyArray::from_vec(items).ok_or_else(|| empty(EmptyError::NoElements))
    }
}

impl Serialize for NonEmptyString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NonEmptyString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        NonEmptyString::from_string(text).ok_or_else(|| empty(EmptyError::EmptyString))
    }
}

impl<K: Ord + Serialize> Serialize for NonEmptySet<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Decodes through [`NonEmptyList`], so the smallest member becomes the head
/// whatever order the payload lists them in.
impl<'de, K: Ord + Clone + Deserialize<'de>> Deserialize<'de> for NonEmptySet<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        NonEmptyList::<K>::deserialize(deserializer).map(NonEmptySet::from_list)
    }
}

impl<K: Ord + Serialize, V: Serialize> Serialize for NonEmptyMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct NonEmptyMapVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for NonEmptyMapVisitor<K, V>
where
    K: Ord + Deserialize<'de>,
    V: Deserialize<'de>,
{
    type Value = NonEmptyMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with at least one entry")
    }

    // The first entry is only a candidate head; `with_pair` moves the true
    // minimum into place.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let Some((key, mut value)) = access.next_entry::<K, V>()? else {
            return Err(empty(EmptyError::NoFields));
        };
        let mut rest = BTreeMap::new();
        while let Some((other_key, other_value)) = access.next_entry::<K, V>()? {
            if other_key == key {
                value = other_value;
            } else {
                rest.insert(other_key, other_value);
            }
        }
        Ok(NonEmptyMap::with_pair(key, value, rest))
    }
}

impl<'de, K, V> Deserialize<'de> for NonEmptyMap<K, V>
where
    K: Ord + Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NonEmptyMapVisitor(PhantomData))
    }
}
