// Copyright 2025 MeridianDB
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.

pub mod error;
pub mod types;

pub use error::CatalogError;
pub use types::{CollectionId, SegmentId, Timestamp, UniqueId};
