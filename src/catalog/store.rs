// Copyright 2025 MeridianDB
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.

//! In-memory catalog applier.
//!
//! Reference applier for the collection mutation records: it applies
//! create/update/delete requests and compaction flushes against a plain
//! in-process map, with the same field semantics a deployment-grade catalog
//! service has to honor. It is not persistent and not synchronized;
//! durability and transactional concerns belong to the surrounding system.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use tracing::{debug, info, warn};

use super::collection::{
    filter_collection, Collection, CreateCollection, DeleteCollection,
    FlushCollectionCompaction, FlushCollectionInfo, UpdateCollection,
};
use super::metadata::MetadataUpdate;
use crate::core::{CatalogError, UniqueId};

/// One cataloged collection plus its compaction bookkeeping.
#[derive(Debug, Clone)]
struct CollectionEntry {
    record: Collection,
    /// Advances by one on every applied compaction flush.
    version: i32,
    /// Log offset up to which the collection's data has been compacted.
    log_position: i64,
}

/// In-memory collection catalog keyed by collection id.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    collections: BTreeMap<UniqueId, CollectionEntry>,
    tenant_last_compaction: HashMap<String, i64>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a create request.
    ///
    /// With `get_or_create` set, a same-scope name clash returns the
    /// existing record unchanged; differing non-identifying fields in the
    /// request (dimension, metadata, ...) are ignored, not merged.
    pub fn create_collection(
        &mut self,
        request: CreateCollection,
    ) -> Result<Collection, CatalogError> {
        if request.id.is_nil() {
            return Err(CatalogError::InvalidRecord(
                "collection id must not be nil".to_string(),
            ));
        }
        if request.tenant_id.is_empty() || request.database_name.is_empty() {
            return Err(CatalogError::InvalidRecord(
                "tenant id and database name must not be empty".to_string(),
            ));
        }

        if let Some(existing) =
            self.find_by_name(&request.tenant_id, &request.database_name, &request.name)
        {
            if request.get_or_create {
                debug!("Returning existing collection: {}", existing.name);
                return Ok(existing.clone());
            }
            return Err(CatalogError::AlreadyExists(request.name));
        }
        if self.collections.contains_key(&request.id) {
            return Err(CatalogError::AlreadyExists(request.id.to_string()));
        }

        info!("🆕 Creating collection: {} ({})", request.name, request.id);
        let record = Collection {
            id: request.id,
            name: request.name,
            topic: request.topic,
            dimension: request.dimension,
            metadata: request.metadata,
            tenant_id: request.tenant_id,
            database_name: request.database_name,
            ts: request.ts,
        };
        self.collections.insert(
            record.id,
            CollectionEntry {
                record: record.clone(),
                version: 0,
                log_position: 0,
            },
        );
        Ok(record)
    }

    pub fn get_collection(&self, id: &UniqueId) -> Option<&Collection> {
        self.collections.get(id).map(|entry| &entry.record)
    }

    /// List cataloged collections matching the given criteria.
    pub fn list_collections(
        &self,
        collection_id: UniqueId,
        collection_name: Option<&str>,
        collection_topic: Option<&str>,
    ) -> Vec<Collection> {
        self.collections
            .values()
            .filter(|entry| {
                filter_collection(&entry.record, collection_id, collection_name, collection_topic)
            })
            .map(|entry| entry.record.clone())
            .collect()
    }

    /// Apply a partial update. Fields left `None` in the request stay
    /// untouched on the record.
    pub fn update_collection(
        &mut self,
        request: UpdateCollection,
    ) -> Result<Collection, CatalogError> {
        let metadata_update = request.metadata_update();
        let entry = self
            .collections
            .get_mut(&request.id)
            .ok_or_else(|| CatalogError::NotFound(request.id.to_string()))?;

        debug!("Updating collection: {}", request.id);
        if let Some(name) = request.name {
            entry.record.name = name;
        }
        if let Some(topic) = request.topic {
            entry.record.topic = topic;
        }
        if let Some(dimension) = request.dimension {
            entry.record.dimension = Some(dimension);
        }
        match metadata_update {
            MetadataUpdate::Unchanged => {}
            MetadataUpdate::Clear => entry.record.metadata = None,
            MetadataUpdate::Replace(metadata) => entry.record.metadata = Some(metadata),
        }
        entry.record.ts = request.ts;
        Ok(entry.record.clone())
    }

    /// Apply a delete request, returning the removed record.
    pub fn delete_collection(
        &mut self,
        request: DeleteCollection,
    ) -> Result<Collection, CatalogError> {
        match self.collections.get(&request.id) {
            Some(entry)
                if entry.record.tenant_id == request.tenant_id
                    && entry.record.database_name == request.database_name => {}
            _ => return Err(CatalogError::NotFound(request.id.to_string())),
        }
        let entry = self
            .collections
            .remove(&request.id)
            .ok_or_else(|| CatalogError::NotFound(request.id.to_string()))?;
        info!(
            "🗑️ Deleted collection: {} ({})",
            entry.record.name, request.id
        );
        Ok(entry.record)
    }

    /// Apply a compaction flush, advancing the collection version and log
    /// position and stamping the tenant's last compaction time.
    ///
    /// A flush performed against any version other than the recorded one is
    /// rejected so a lagging compactor cannot clobber newer state.
    pub fn flush_compaction(
        &mut self,
        flush: FlushCollectionCompaction,
    ) -> Result<FlushCollectionInfo, CatalogError> {
        let entry = self
            .collections
            .get_mut(&flush.id)
            .ok_or_else(|| CatalogError::NotFound(flush.id.to_string()))?;

        if flush.current_collection_version != entry.version {
            warn!(
                "Rejecting compaction flush for {}: flushed against v{}, catalog at v{}",
                flush.id, flush.current_collection_version, entry.version
            );
            return Err(CatalogError::StaleCompactionVersion {
                collection_id: flush.id.to_string(),
                flushed: flush.current_collection_version,
                current: entry.version,
            });
        }

        entry.version += 1;
        entry.log_position = flush.log_position;
        let collection_version = entry.version;

        let last_compaction_time = Utc::now().timestamp();
        self.tenant_last_compaction
            .insert(flush.tenant_id.clone(), last_compaction_time);

        info!(
            "✅ Applied compaction flush for {}: {} segments, log position {}, now v{}",
            flush.id,
            flush.flush_segment_compactions.len(),
            flush.log_position,
            collection_version
        );

        Ok(FlushCollectionInfo {
            id: flush.id.to_string(),
            collection_version,
            tenant_last_compaction_time: last_compaction_time,
        })
    }

    /// Compaction version currently recorded for a collection.
    pub fn collection_version(&self, id: &UniqueId) -> Option<i32> {
        self.collections.get(id).map(|entry| entry.version)
    }

    /// Log offset up to which a collection has been compacted.
    pub fn log_position(&self, id: &UniqueId) -> Option<i64> {
        self.collections.get(id).map(|entry| entry.log_position)
    }

    pub fn tenant_last_compaction_time(&self, tenant_id: &str) -> Option<i64> {
        self.tenant_last_compaction.get(tenant_id).copied()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    fn find_by_name(&self, tenant_id: &str, database_name: &str, name: &str) -> Option<&Collection> {
        self.collections
            .values()
            .map(|entry| &entry.record)
            .find(|record| {
                record.tenant_id == tenant_id
                    && record.database_name == database_name
                    && record.name == name
            })
    }
}
