//! Named parameters passed to link resolution
//!
//! A [`LinkRequest`] is an immutable snapshot of key/value pairs, typically the
//! route parameters needed to build a URL (`{"id": 42}` for `/orders/{id}`).

use crate::core::error::{HypermediaError, Result};
use crate::core::guard::require_non_blank;
use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

static NULL: Value = Value::Null;

/// Read-only, non-empty set of link parameters
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRequest {
    parameters: IndexMap<String, Value>,
}

impl LinkRequest {
    /// Snapshot the given parameters
    ///
    /// Fails with [`InvalidArgument`](HypermediaError::InvalidArgument) when
    /// no parameters are supplied or when any key is blank.
    ///
    /// ```
    /// use hal_links::core::LinkRequest;
    ///
    /// let request = LinkRequest::new([("id", 42)]).unwrap();
    /// assert_eq!(request.get_value_or_default_as::<u32>("id").unwrap(), 42);
    /// ```
    pub fn new<I, K, V>(parameters: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut snapshot = IndexMap::new();
        for (key, value) in parameters {
            let key = key.into();
            require_non_blank("key", &key)?;
            snapshot.insert(key, value.into());
        }

        if snapshot.is_empty() {
            return Err(HypermediaError::null_or_empty("requestParameters"));
        }

        Ok(Self {
            parameters: snapshot,
        })
    }

    /// Build a request from anything that serializes to a JSON object
    ///
    /// Handy for passing a parameter struct straight through:
    /// `LinkRequest::from_serializable(&OrderRoute { id: 7 })`.
    ///
    /// Fails with [`Serialization`](HypermediaError::Serialization) when `args`
    /// cannot be serialized at all.
    pub fn from_serializable<T: Serialize + ?Sized>(args: &T) -> Result<Self> {
        match serde_json::to_value(args).map_err(HypermediaError::Serialization)? {
            Value::Object(map) => Self::new(map),
            _ => Err(HypermediaError::null_or_empty("requestParameters")),
        }
    }

    pub fn contains_key(&self, key: &str) -> Result<bool> {
        require_non_blank("key", key)?;
        Ok(self.parameters.contains_key(key))
    }

    /// Raw stored value, or `Value::Null` when the key is absent
    pub fn get_value_or_default(&self, key: &str) -> Result<&Value> {
        require_non_blank("key", key)?;
        Ok(self.parameters.get(key).unwrap_or(&NULL))
    }

    /// Stored value converted to `T`, or `T::default()` when the key is absent
    ///
    /// Fails with [`InvalidCast`](HypermediaError::InvalidCast) when the stored
    /// value has a shape `T` cannot be read from.
    pub fn get_value_or_default_as<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        require_non_blank("key", key)?;

        let Some(value) = self.parameters.get(key) else {
            return Ok(T::default());
        };

        T::deserialize(value).map_err(|source| HypermediaError::InvalidCast {
            key: key.to_string(),
            expected: std::any::type_name::<T>(),
            source,
        })
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }

    /// Parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.parameters.iter().map(|(k, v)| (k.as_str(), v))
    }
}
