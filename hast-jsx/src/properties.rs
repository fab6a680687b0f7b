use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::number::format_number;

/// The value of one hast property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// `null` or `undefined`.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// A number, possibly `NaN`.
    Number(f64),
    /// A string.
    String(String),
    /// A list of tokens, such as a class list.
    List(Vec<ListItem>),
}

impl PropertyValue {
    /// Whether JavaScript would consider the value falsy.
    ///
    /// Lists are objects and therefore never falsy, even when empty.
    pub fn is_falsy(&self) -> bool {
        match self {
            PropertyValue::Null => true,
            PropertyValue::Bool(value) => !value,
            PropertyValue::Number(value) => *value == 0.0 || value.is_nan(),
            PropertyValue::String(value) => value.is_empty(),
            PropertyValue::List(_) => false,
        }
    }

    /// Whether the value is the number `NaN`.
    pub fn is_nan(&self) -> bool {
        matches!(self, PropertyValue::Number(value) if value.is_nan())
    }
}

/// Formats the value the way JavaScript's `String(value)` does.
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Null => f.write_str("null"),
            PropertyValue::Bool(value) => write!(f, "{value}"),
            PropertyValue::Number(value) => f.write_str(&format_number(*value)),
            PropertyValue::String(value) => f.write_str(value),
            PropertyValue::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

/// One token of a [`PropertyValue::List`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListItem {
    /// A numeric token.
    Number(f64),
    /// A string token.
    String(String),
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListItem::Number(value) => f.write_str(&format_number(*value)),
            ListItem::String(value) => f.write_str(value),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(value.into())
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl<T: Into<ListItem>> From<Vec<T>> for PropertyValue {
    fn from(items: Vec<T>) -> Self {
        PropertyValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropertyValue::Null, Into::into)
    }
}

impl From<f64> for ListItem {
    fn from(value: f64) -> Self {
        ListItem::Number(value)
    }
}

impl From<i32> for ListItem {
    fn from(value: i32) -> Self {
        ListItem::Number(value.into())
    }
}

impl From<&str> for ListItem {
    fn from(value: &str) -> Self {
        ListItem::String(value.to_owned())
    }
}

impl From<String> for ListItem {
    fn from(value: String) -> Self {
        ListItem::String(value)
    }
}

/// The properties of a hast element.
///
/// Entries keep their insertion order. A property map may inherit from a
/// shared prototype: [`get`](Self::get) sees inherited entries, while
/// [`iter`](Self::iter), [`len`](Self::len) and [`has_own`](Self::has_own)
/// only see the map's own entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    own: IndexMap<String, PropertyValue>,
    prototype: Option<Arc<Properties>>,
}

impl Properties {
    /// An empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty property map inheriting from `prototype`.
    pub fn inheriting(prototype: Arc<Properties>) -> Self {
        Self {
            own: IndexMap::new(),
            prototype: Some(prototype),
        }
    }

    /// The prototype this map inherits from, if any.
    pub fn prototype(&self) -> Option<&Arc<Properties>> {
        self.prototype.as_ref()
    }

    /// Set an own entry, returning the previous own value.
    ///
    /// Replacing a value keeps the key's original position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.own.insert(key.into(), value.into())
    }

    /// Remove an own entry, keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<PropertyValue> {
        self.own.shift_remove(key)
    }

    /// Look a key up in this map, then along the prototype chain.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        let mut properties = self;
        loop {
            if let Some(value) = properties.own.get(key) {
                return Some(value);
            }
            properties = properties.prototype.as_deref()?;
        }
    }

    /// Look a key up among own entries only.
    pub fn get_own(&self, key: &str) -> Option<&PropertyValue> {
        self.own.get(key)
    }

    /// Whether `key` is an own entry.
    pub fn has_own(&self, key: &str) -> bool {
        self.own.contains_key(key)
    }

    /// Own entries, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.own.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Own keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.own.keys().map(String::as_str)
    }

    /// Number of own entries.
    pub fn len(&self) -> usize {
        self.own.len()
    }

    /// Whether there are no own entries.
    pub fn is_empty(&self) -> bool {
        self.own.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            own: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            prototype: None,
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Properties
where
    K: Into<String>,
    V: Into<PropertyValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Deserializes from a JSON object; every key becomes an own entry.
impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self {
            own: IndexMap::deserialize(deserializer)?,
            prototype: None,
        })
    }
}
