// Copyright 2025 MeridianDB
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.

//! Collection catalog records and the lookup filter predicate.
//!
//! A collection is a named, versioned logical grouping of vector data,
//! scoped to a tenant and database. The types here are plain values passed
//! across the catalog boundary: mutation requests flow in, compaction flush
//! results flow back. Every optional field distinguishes "absent" from
//! "present with a default value"; appliers depend on that distinction and
//! must never coerce one into the other.

use serde::{Deserialize, Serialize};

use super::metadata::{CollectionMetadata, MetadataUpdate};
use super::segment::FlushSegmentCompaction;
use crate::core::{Timestamp, UniqueId};

/// Canonical catalog record for a collection.
///
/// For a persisted record `id` is never nil and `tenant_id`/`database_name`
/// are never empty; `ts` marks the last applied mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    pub id: UniqueId,
    pub name: String,
    pub topic: String,
    /// Absent until the first vectors are ingested, then fixed.
    pub dimension: Option<i32>,
    pub metadata: Option<CollectionMetadata>,
    pub tenant_id: String,
    pub database_name: String,
    pub ts: Timestamp,
}

impl Collection {
    /// Binary form used when shipping records across process boundaries.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Request to create a collection.
///
/// The id is caller-supplied; whether an absent id is generated on the
/// caller's side or by the applier is applier policy, the record just
/// carries whatever the caller chose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateCollection {
    pub id: UniqueId,
    pub name: String,
    pub topic: String,
    pub dimension: Option<i32>,
    pub metadata: Option<CollectionMetadata>,
    /// When true and a same-name collection already exists in scope, the
    /// applier returns the existing record instead of failing.
    pub get_or_create: bool,
    pub tenant_id: String,
    pub database_name: String,
    pub ts: Timestamp,
}

/// Request to remove a collection from its tenant/database scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteCollection {
    pub id: UniqueId,
    pub tenant_id: String,
    pub database_name: String,
    /// Orders the deletion against concurrent mutations.
    pub ts: Timestamp,
}

/// Partial update of a collection.
///
/// `None` in an optional field means "do not change"; `Some(v)` means "set
/// to v". `reset_metadata` clears existing metadata before any supplied
/// metadata is applied, so "clear everything" is expressible separately
/// from "leave metadata untouched".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCollection {
    pub id: UniqueId,
    pub name: Option<String>,
    pub topic: Option<String>,
    pub dimension: Option<i32>,
    pub metadata: Option<CollectionMetadata>,
    pub reset_metadata: bool,
    pub tenant_id: String,
    pub database_name: String,
    pub ts: Timestamp,
}

impl UpdateCollection {
    /// Decode the `reset_metadata` flag and the optional metadata payload
    /// into the three explicit cases an applier has to handle.
    pub fn metadata_update(&self) -> MetadataUpdate {
        match (&self.metadata, self.reset_metadata) {
            (None, false) => MetadataUpdate::Unchanged,
            (None, true) => MetadataUpdate::Clear,
            (Some(metadata), _) => MetadataUpdate::Replace(metadata.clone()),
        }
    }
}

/// Flush result a compaction run reports back to the catalog once segment
/// data is durable.
///
/// `current_collection_version` is the version the compaction ran against;
/// the applier rejects the flush if the collection has advanced since.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlushCollectionCompaction {
    pub id: UniqueId,
    pub tenant_id: String,
    /// Write-ahead log offset up to which compaction is complete.
    pub log_position: i64,
    pub current_collection_version: i32,
    pub flush_segment_compactions: Vec<FlushSegmentCompaction>,
}

/// Returned to the compaction subsystem after a flush is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlushCollectionInfo {
    pub id: String,
    pub collection_version: i32,
    pub tenant_last_compaction_time: i64,
}

/// Match a collection against optional lookup criteria.
///
/// A nil `collection_id` places no constraint on the id; `None` name/topic
/// criteria place none on theirs. Supplied criteria are compared exactly
/// (case-sensitive, no globbing) and AND-combined. Pure and total: no side
/// effects, no error cases.
pub fn filter_collection(
    collection: &Collection,
    collection_id: UniqueId,
    collection_name: Option<&str>,
    collection_topic: Option<&str>,
) -> bool {
    if !collection_id.is_nil() && collection_id != collection.id {
        return false;
    }
    if let Some(name) = collection_name {
        if name != collection.name {
            return false;
        }
    }
    if let Some(topic) = collection_topic {
        if topic != collection.topic {
            return false;
        }
    }
    true
}
