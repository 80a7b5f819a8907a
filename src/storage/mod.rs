// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Storage statistics module.
//!
//! This module provides the snapshot value object and the reader that
//! queries the operating system for filesystem capacity.

pub mod info;
pub mod reader;

// Re-export commonly used items for the public library API.
// Internal code imports from the submodules directly.
#[allow(unused_imports)]
pub use info::StorageSnapshot;
#[allow(unused_imports)]
pub use reader::{create_storage_reader, LocalStorageReader, StorageReader};
