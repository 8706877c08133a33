// Copyright 2025 MeridianDB
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.

//! Free-form collection metadata with a closed value kind set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::CatalogError;

/// A single metadata value.
///
/// The kind set is closed: downstream serialization and query planning match
/// exhaustively on it. On the wire each value is tagged with its kind, so a
/// round trip through storage reproduces the same kind, not a coerced one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum MetadataValue {
    #[serde(rename = "string")]
    Str(String),
    #[serde(rename = "int")]
    Int(i64),
    #[serde(rename = "float")]
    Float(f64),
}

impl MetadataValue {
    /// Kind discriminator as written on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            MetadataValue::Str(_) => "string",
            MetadataValue::Int(_) => "int",
            MetadataValue::Float(_) => "float",
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Str(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Str(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::Int(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Float(value)
    }
}

impl From<MetadataValue> for serde_json::Value {
    fn from(value: MetadataValue) -> Self {
        match value {
            MetadataValue::Str(s) => serde_json::Value::String(s),
            MetadataValue::Int(i) => serde_json::Value::from(i),
            MetadataValue::Float(f) => serde_json::Value::from(f),
        }
    }
}

impl TryFrom<&serde_json::Value> for MetadataValue {
    type Error = CatalogError;

    /// Admit only the closed kind set; booleans, nulls, arrays and objects
    /// coming from loosely typed clients are rejected rather than coerced.
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        if let Some(s) = value.as_str() {
            return Ok(MetadataValue::Str(s.to_string()));
        }
        if let Some(i) = value.as_i64() {
            return Ok(MetadataValue::Int(i));
        }
        if let Some(f) = value.as_f64() {
            return Ok(MetadataValue::Float(f));
        }
        Err(CatalogError::InvalidRecord(format!(
            "unsupported metadata value: {}",
            value
        )))
    }
}

/// String-keyed metadata mapping attached to a collection.
///
/// Records carry it as `Option<CollectionMetadata>`: an absent mapping is
/// distinct from a present-but-empty one, and appliers must not collapse
/// the two.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CollectionMetadata(HashMap<String, MetadataValue>);

impl CollectionMetadata {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Option<MetadataValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<MetadataValue> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetadataValue)> {
        self.0.iter()
    }
}

impl FromIterator<(String, MetadataValue)> for CollectionMetadata {
    fn from_iter<I: IntoIterator<Item = (String, MetadataValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// How an update request treats a collection's existing metadata.
///
/// Decoded from the `reset_metadata` flag and the optional metadata payload
/// of an update request, so appliers match on three explicit cases instead
/// of re-deriving the flag/option combinations.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataUpdate {
    /// Leave existing metadata untouched.
    Unchanged,
    /// Drop existing metadata entirely.
    Clear,
    /// Replace existing metadata with the supplied mapping.
    Replace(CollectionMetadata),
}
