//! Decoded observation values.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A decoded observation, nested according to the handler hierarchy.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use quarry_core::ObsValue;
///
/// let mut slot = IndexMap::new();
/// slot.insert("type".to_string(), ObsValue::Enum { token: "none".into(), index: 1 });
/// slot.insert("damage".to_string(), ObsValue::Int(0));
/// let obs = ObsValue::Map(slot);
///
/// assert_eq!(obs.get("type").and_then(ObsValue::as_token), Some("none"));
/// assert_eq!(obs.get("damage").and_then(ObsValue::as_int), Some(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObsValue {
    /// One member of an enumeration space.
    Enum {
        /// The vocabulary entry.
        token: String,
        /// Position of `token` in the sorted vocabulary.
        index: usize,
    },
    /// A bounded integer.
    Int(i64),
    /// Child name to child value, in child order.
    Map(IndexMap<String, ObsValue>),
}

impl ObsValue {
    /// Token of an `Enum` value.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Self::Enum { token, .. } => Some(token),
            _ => None,
        }
    }

    /// Index of an `Enum` value.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Enum { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Integer of an `Int` value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Entries of a `Map` value.
    pub fn as_map(&self) -> Option<&IndexMap<String, ObsValue>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Child `name` of a `Map` value.
    pub fn get(&self, name: &str) -> Option<&ObsValue> {
        self.as_map()?.get(name)
    }

    /// Follow child names through nested maps.
    pub fn lookup<I, S>(&self, names: I) -> Option<&ObsValue>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut head = self;
        for name in names {
            head = head.get(name.as_ref())?;
        }
        Some(head)
    }

    /// JSON rendering for consumers that want a plain dictionary:
    /// enumerations become their token, integers stay numbers.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Enum { token, .. } => Value::String(token.clone()),
            Self::Int(v) => Value::from(*v),
            Self::Map(m) => Value::Object(
                m.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}
