// Copyright 2025 MeridianDB
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.

//! Identifier and timestamp primitives shared across the catalog layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Logical timestamp ordering catalog mutations.
///
/// Monotonic marker assigned by the log, not wall-clock time.
pub type Timestamp = i64;

/// Opaque identifier shared with the catalog's collaborators.
///
/// Wraps a UUID so collection and segment ids cannot be mixed up with other
/// string-typed values. The textual form is the canonical hyphenated UUID;
/// the binary form is the 16-byte UUID. The nil id is a sentinel meaning
/// "no id" where an identifier is optional (e.g. filter criteria).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UniqueId(Uuid);

impl UniqueId {
    /// Generate a fresh random (v4) id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The nil sentinel id.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UniqueId {
    fn default() -> Self {
        Self::nil()
    }
}

impl From<Uuid> for UniqueId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UniqueId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

pub type CollectionId = UniqueId;
pub type SegmentId = UniqueId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_sentinel() {
        assert!(UniqueId::nil().is_nil());
        assert!(UniqueId::default().is_nil());
        assert!(!UniqueId::new().is_nil());
        assert_eq!(UniqueId::nil(), UniqueId::nil());
    }

    #[test]
    fn test_textual_round_trip() {
        let id = UniqueId::new();
        let parsed: UniqueId = id.to_string().parse().expect("canonical form must parse");
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_distinct_ids_differ() {
        assert_ne!(UniqueId::new(), UniqueId::new());
    }
}
