//! Partial customer payloads for `PUT /customer/:id`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};
use crate::types::Customer;

/// Wire keys the server owns; never sent in an update.
const SERVER_OWNED_KEYS: [&str; 2] = ["id", "updatedAt"];

/// A partial customer: a subset of the top-level wire fields.
///
/// Nested objects (`address`, `correspondenceAddress`) and contact lists are
/// always sent whole when they change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerPatch(Map<String, Value>);

impl CustomerPatch {
    /// Every submittable field of `customer`.
    pub fn full(customer: &Customer) -> Result<Self> {
        let mut fields = to_object(customer)?;
        for key in SERVER_OWNED_KEYS {
            fields.remove(key);
        }
        Ok(Self(fields))
    }

    /// Fields of `current` that differ from `original`.
    ///
    /// A changed `type` implies the variant fields changed too, so they are
    /// included whenever they differ, nulls included.
    pub fn diff(original: &Customer, current: &Customer) -> Result<Self> {
        let before = to_object(original)?;
        let after = to_object(current)?;

        let fields = after
            .into_iter()
            .filter(|(key, _)| !SERVER_OWNED_KEYS.contains(&key.as_str()))
            .filter(|(key, value)| before.get(key) != Some(value))
            .collect();
        Ok(Self(fields))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Changed keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

fn to_object(customer: &Customer) -> Result<Map<String, Value>> {
    match serde_json::to_value(customer) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ClientError::SerializationError {
            detail: format!("customer serialized to non-object JSON: {other}"),
        }),
        Err(e) => Err(ClientError::SerializationError {
            detail: e.to_string(),
        }),
    }
}
