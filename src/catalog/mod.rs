// Copyright 2025 MeridianDB
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.

//! Collection catalog data model: records, metadata, and matching logic.

pub mod collection;
pub mod metadata;
pub mod segment;
pub mod store;

pub use collection::{
    filter_collection, Collection, CreateCollection, DeleteCollection,
    FlushCollectionCompaction, FlushCollectionInfo, UpdateCollection,
};
pub use metadata::{CollectionMetadata, MetadataUpdate, MetadataValue};
pub use segment::FlushSegmentCompaction;
pub use store::MemoryCatalog;
