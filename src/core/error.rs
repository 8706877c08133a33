// Copyright 2025 MeridianDB
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.

use thiserror::Error;

/// Errors surfaced when applying catalog mutation records.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Collection not found: {0}")]
    NotFound(String),

    #[error("Collection already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error(
        "Stale compaction version for collection {collection_id}: \
         flushed against v{flushed}, catalog at v{current}"
    )]
    StaleCompactionVersion {
        collection_id: String,
        flushed: i32,
        current: i32,
    },
}
