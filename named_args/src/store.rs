use crate::{grammar, Error, Result, Value};
use itertools::Itertools;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Insertion-ordered named arguments.
///
/// Keys are unique and matched exactly. Re-adding a key replaces its value
/// and keeps the key's original position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Store(pub(crate) Vec<(String, Value)>);

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from alternating key and value items.
    ///
    /// Fails on an odd number of items, or when a key position holds
    /// anything but a non-empty string.
    pub fn from_pairs<I>(items: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let items = items.into_iter().map(Into::into).collect_vec();
        if items.len() % 2 != 0 {
            return Err(Error::malformed(format!(
                "odd number of key/value items ({})",
                items.len()
            )));
        }
        let mut store = Store::new();
        for (index, (key, value)) in items.into_iter().tuples().enumerate() {
            let key = match key {
                Value::Str(key) if !key.is_empty() => key,
                Value::Str(_) => {
                    return Err(Error::malformed(format!("pair {index} has an empty key")))
                }
                other => {
                    return Err(Error::malformed(format!(
                        "pair {index} has a {} key, expected a string",
                        other.kind()
                    )))
                }
            };
            store.add(key, value);
        }
        Ok(store)
    }

    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn defined(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let position = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(position).1)
    }

    /// Adds every entry of `other`, overwriting existing keys.
    pub fn merge(&mut self, other: Store) {
        self.extend(other);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl FromStr for Store {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        grammar::parse(s)
    }
}

impl<K, V> FromIterator<(K, V)> for Store
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut store = Store::new();
        store.extend(iter);
        store
    }
}

impl<K, V> Extend<(K, V)> for Store
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl IntoIterator for Store {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for Store {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Store {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(StoreVisitor)
    }
}

struct StoreVisitor;

impl<'de> Visitor<'de> for StoreVisitor {
    type Value = Store;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a map of argument names to scalar values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Store, A::Error> {
        let mut store = Store::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            store.add(key, value);
        }
        Ok(store)
    }
}
