use crate::{error::ConstructError, value::Value};
use derive_more::{Deref, IntoIterator};
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, BTreeSet, HashMap};

///
/// Input
///
/// Caller-supplied key/value overrides for one `new` or `put` call.
/// Order is kept for error reporting only; keys must be unique.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq)]
pub struct Input(Vec<(String, Value)>);

impl Input {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Builder-style append.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.push((key.into(), value.into()));
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    ///
    /// from_json
    ///
    /// Build an input from a JSON object. Top-level keys become input keys;
    /// non-object documents and nested objects are rejected.
    ///
    pub fn from_json(json: &JsonValue) -> Result<Self, ConstructError> {
        let JsonValue::Object(map) = json else {
            return Err(ConstructError::invalid_input(
                "construction input must be a JSON object",
            ));
        };

        map.iter()
            .map(|(key, value)| {
                Value::try_from(value.clone())
                    .map(|value| (key.clone(), value))
                    .map_err(|err| match err {
                        ConstructError::InvalidInput { message } => {
                            ConstructError::invalid_input(format!("key '{key}': {message}"))
                        }
                        other => other,
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Parse a JSON document and build an input from its top-level object.
    pub fn from_json_str(s: &str) -> Result<Self, ConstructError> {
        let json: JsonValue = serde_json::from_str(s)
            .map_err(|err| ConstructError::invalid_input(format!("malformed JSON: {err}")))?;

        Self::from_json(&json)
    }

    ///
    /// into_entries
    ///
    /// Consume the input, rejecting duplicate raw keys.
    ///
    pub fn into_entries(self, record: &'static str) -> Result<Vec<(String, Value)>, ConstructError> {
        let mut seen = BTreeSet::new();
        for (key, _) in &self.0 {
            if !seen.insert(key.as_str()) {
                return Err(ConstructError::DuplicateKey {
                    record,
                    key: key.clone(),
                });
            }
        }

        Ok(self.0)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Input
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Input
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<Vec<(String, Value)>> for Input {
    fn from(pairs: Vec<(String, Value)>) -> Self {
        Self(pairs)
    }
}

impl From<BTreeMap<String, Value>> for Input {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl<S: std::hash::BuildHasher> From<HashMap<String, Value, S>> for Input {
    fn from(map: HashMap<String, Value, S>) -> Self {
        Self(map.into_iter().collect())
    }
}

///
/// input
///
/// Build an `Input` inline.
///
/// `input! { x: 1, y: 2 }` uses identifier keys;
/// `input! { "firstName" => "Ada" }` accepts any string key.
///
#[macro_export]
macro_rules! input {
    () => {
        $crate::input::Input::new()
    };
    ( $( $key:literal => $value:expr ),+ $(,)? ) => {
        $crate::input::Input::new()
            $( .with($key, $value) )+
    };
    ( $( $key:ident : $value:expr ),+ $(,)? ) => {
        $crate::input::Input::new()
            $( .with(::core::stringify!($key), $value) )+
    };
}

///
/// TESTS
///
