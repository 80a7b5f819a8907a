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

//! Storage reader trait and implementations.
//!
//! This module provides the [`StorageReader`] trait for reading filesystem
//! capacity and a [`LocalStorageReader`] implementation using `sysinfo::Disks`.

use std::path::PathBuf;

use sysinfo::Disks;

use crate::error::{Error, Result};
use crate::storage::info::StorageSnapshot;

/// Trait for reading storage statistics of a monitored path.
///
/// Implementations must be thread-safe (`Send + Sync`) to allow
/// concurrent access from request handlers.
///
/// # Example
///
/// ```rust,no_run
/// use storage_info::storage::StorageReader;
///
/// fn print_storage(reader: &dyn StorageReader) -> storage_info::Result<()> {
///     let snapshot = reader.snapshot()?;
///     println!("{} bytes available", snapshot.available_bytes);
///     Ok(())
/// }
/// ```
pub trait StorageReader: Send + Sync {
    /// Take a point-in-time snapshot of total, used and available bytes.
    ///
    /// Fails when the monitored path does not exist, is inaccessible, or
    /// is not on any detected filesystem. Never returns partial values.
    fn snapshot(&self) -> Result<StorageSnapshot>;
}

/// Local storage reader using `sysinfo::Disks`.
///
/// Resolves the monitored path to the disk whose mount point is its
/// longest prefix and reports that filesystem's capacity. Used bytes are
/// derived as `total - available`, so
/// `used_bytes + available_bytes == total_bytes` holds for every snapshot.
pub struct LocalStorageReader {
    path: PathBuf,
}

impl LocalStorageReader {
    /// Create a reader for the given filesystem path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageReader for LocalStorageReader {
    fn snapshot(&self) -> Result<StorageSnapshot> {
        // Canonicalize surfaces a missing or unreadable path as an I/O
        // error before any mount-point matching happens.
        let path = std::fs::canonicalize(&self.path)?;
        let disks = Disks::new_with_refreshed_list();

        let disk = disks
            .list()
            .iter()
            .filter(|disk| path.starts_with(disk.mount_point()))
            .max_by_key(|disk| disk.mount_point().as_os_str().len())
            .ok_or_else(|| Error::MountNotFound(self.path.clone()))?;

        let total_bytes = disk.total_space();
        let available_bytes = disk.available_space();
        Ok(StorageSnapshot {
            total_bytes,
            used_bytes: total_bytes.saturating_sub(available_bytes),
            available_bytes,
        })
    }
}

/// Create a storage reader for a path on the local system.
///
/// This is a factory function that returns a boxed [`StorageReader`] trait
/// object, allowing tests to substitute mock readers.
pub fn create_storage_reader(path: impl Into<PathBuf>) -> Box<dyn StorageReader> {
    Box::new(LocalStorageReader::new(path))
}
