/*
 * Copyright 2025 MeridianDB
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! # MeridianDB Catalog - Collection Metadata Model
//!
//! Record types and matching logic for collections: named, versioned
//! logical groupings of vector data inside the MeridianDB catalog layer.
//! A collection is identified by a unique id, scoped to a tenant and
//! database, and carries a dimensionality, free-form metadata, and a
//! logical timestamp marking its last mutation.
//!
//! ## Key Pieces
//!
//! - **Collection records**: the canonical catalog record plus
//!   create/update/delete mutation requests with precise absent-vs-present
//!   semantics on every optional field
//! - **Metadata**: string-keyed mapping over a closed, tagged value kind
//!   set (string / int / float) that round-trips losslessly
//! - **Compaction flushes**: records carrying log position and collection
//!   version so the catalog can reject stale compaction results
//! - **Filter predicate**: [`catalog::filter_collection`], the pure
//!   AND-combined exact-match building block for list/query operations
//! - **[`catalog::MemoryCatalog`]**: in-memory reference applier of the
//!   mutation records
//!
//! All record types are plain values: cheap to clone, serde-serializable,
//! and safe to share read-only across threads.

pub mod catalog;
pub mod core;

pub use self::catalog::{
    filter_collection, Collection, CollectionMetadata, CreateCollection, DeleteCollection,
    FlushCollectionCompaction, FlushCollectionInfo, FlushSegmentCompaction, MemoryCatalog,
    MetadataUpdate, MetadataValue, UpdateCollection,
};
pub use self::core::{CatalogError, CollectionId, SegmentId, Timestamp, UniqueId};
