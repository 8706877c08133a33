// Copyright 2025 MeridianDB
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.

//! Segment-level flush payloads reported by the compactor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::SegmentId;

/// Files durably written for one segment during a compaction flush.
///
/// `file_paths` maps a file type produced by the compactor ("hnsw_index",
/// "metadata", ...) to the ordered list of paths written for it. The catalog
/// records the payload verbatim; only the segment storage engine interprets
/// the paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlushSegmentCompaction {
    pub segment_id: SegmentId,
    pub file_paths: HashMap<String, Vec<String>>,
}

impl FlushSegmentCompaction {
    pub fn new(segment_id: SegmentId, file_paths: HashMap<String, Vec<String>>) -> Self {
        Self {
            segment_id,
            file_paths,
        }
    }
}
