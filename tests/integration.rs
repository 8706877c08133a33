// Copyright 2025 MeridianDB
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.

//! End-to-end exercise of the catalog data model: records cross a
//! serialization boundary, get applied to a catalog, and compaction
//! flushes advance the version bookkeeping.

use std::collections::HashMap;

use meridiandb_catalog::{
    filter_collection, CatalogError, Collection, CollectionMetadata, CreateCollection,
    DeleteCollection, FlushCollectionCompaction, FlushSegmentCompaction, MemoryCatalog,
    MetadataValue, UniqueId, UpdateCollection,
};

fn sample_create(name: &str, tenant_id: &str) -> CreateCollection {
    let mut metadata = CollectionMetadata::new();
    metadata.insert("model", "all-MiniLM-L6-v2");
    metadata.insert("shard_count", 4i64);
    metadata.insert("recall_target", 0.95);

    CreateCollection {
        id: UniqueId::new(),
        name: name.to_string(),
        topic: format!("{}/{}", tenant_id, name),
        dimension: Some(384),
        metadata: Some(metadata),
        get_or_create: false,
        tenant_id: tenant_id.to_string(),
        database_name: "default".to_string(),
        ts: 1,
    }
}

#[test]
fn collection_lifecycle_through_catalog() {
    let mut catalog = MemoryCatalog::new();

    // Create, simulating the request crossing a process boundary first.
    let request = sample_create("docs", "tenant-a");
    let wire = serde_json::to_string(&request).unwrap();
    let request: CreateCollection = serde_json::from_str(&wire).unwrap();
    let created = catalog.create_collection(request).unwrap();
    assert_eq!(created.dimension, Some(384));
    assert_eq!(
        created.metadata.as_ref().unwrap().get("shard_count"),
        Some(&MetadataValue::Int(4))
    );

    // The predicate drives listing.
    let listed = catalog.list_collections(UniqueId::nil(), Some("docs"), None);
    assert_eq!(listed, vec![created.clone()]);

    // Partial update: only the topic moves, metadata stays untouched.
    let updated = catalog
        .update_collection(UpdateCollection {
            id: created.id,
            name: None,
            topic: Some("tenant-a/docs-archive".to_string()),
            dimension: None,
            metadata: None,
            reset_metadata: false,
            tenant_id: created.tenant_id.clone(),
            database_name: created.database_name.clone(),
            ts: 2,
        })
        .unwrap();
    assert_eq!(updated.topic, "tenant-a/docs-archive");
    assert_eq!(updated.metadata, created.metadata);

    // Compaction reports a flush against the current version.
    let flush = FlushCollectionCompaction {
        id: created.id,
        tenant_id: created.tenant_id.clone(),
        log_position: 8192,
        current_collection_version: 0,
        flush_segment_compactions: vec![FlushSegmentCompaction::new(
            UniqueId::new(),
            HashMap::from([
                (
                    "hnsw_index".to_string(),
                    vec!["segments/3f/hnsw.bin".to_string()],
                ),
                (
                    "metadata".to_string(),
                    vec![
                        "segments/3f/meta_0.parquet".to_string(),
                        "segments/3f/meta_1.parquet".to_string(),
                    ],
                ),
            ]),
        )],
    };
    let info = catalog.flush_compaction(flush.clone()).unwrap();
    assert_eq!(info.collection_version, 1);
    assert_eq!(catalog.log_position(&created.id), Some(8192));

    // Replaying the same flush is stale now.
    assert!(matches!(
        catalog.flush_compaction(flush),
        Err(CatalogError::StaleCompactionVersion { .. })
    ));

    // Delete within scope empties the catalog.
    catalog
        .delete_collection(DeleteCollection {
            id: created.id,
            tenant_id: created.tenant_id.clone(),
            database_name: created.database_name.clone(),
            ts: 3,
        })
        .unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn records_round_trip_across_wire_forms() {
    let request = sample_create("images", "tenant-b");

    // Textual form.
    let json = serde_json::to_string(&request).unwrap();
    let from_json: CreateCollection = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, request);

    // Binary form of the catalog record itself.
    let collection = Collection {
        id: request.id,
        name: request.name.clone(),
        topic: request.topic.clone(),
        dimension: request.dimension,
        metadata: request.metadata.clone(),
        tenant_id: request.tenant_id.clone(),
        database_name: request.database_name.clone(),
        ts: request.ts,
    };
    let bytes = collection.to_bytes().unwrap();
    let decoded = Collection::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, collection);

    // Kind tags survive both forms.
    let metadata = decoded.metadata.unwrap();
    assert_eq!(metadata.get("model").unwrap().kind(), "string");
    assert_eq!(metadata.get("shard_count").unwrap().kind(), "int");
    assert_eq!(metadata.get("recall_target").unwrap().kind(), "float");
}

#[test]
fn get_or_create_returns_existing_record() {
    let mut catalog = MemoryCatalog::new();
    let first = catalog
        .create_collection(sample_create("docs", "tenant-a"))
        .unwrap();

    let mut second = sample_create("docs", "tenant-a");
    second.get_or_create = true;
    second.dimension = Some(768);
    let returned = catalog.create_collection(second).unwrap();

    assert_eq!(returned, first);
    assert_eq!(catalog.len(), 1);
}

#[test]
fn filter_predicate_works_without_a_store() {
    let collection = Collection {
        id: UniqueId::new(),
        name: "docs".to_string(),
        topic: "t1".to_string(),
        dimension: None,
        metadata: None,
        tenant_id: "tenant-a".to_string(),
        database_name: "default".to_string(),
        ts: 0,
    };

    assert!(filter_collection(&collection, UniqueId::nil(), None, None));
    assert!(filter_collection(&collection, collection.id, Some("docs"), Some("t1")));
    assert!(!filter_collection(&collection, collection.id, Some("docs"), Some("t2")));
}
