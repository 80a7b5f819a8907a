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

//! Unified error types for the storage-info service.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for storage-info operations.
///
/// Covers failures of the filesystem-statistics query as well as I/O
/// errors from the listener lifecycle.
#[derive(Debug, Error)]
pub enum Error {
    /// No detected filesystem contains the monitored path.
    #[error("No filesystem found for path: {}", .0.display())]
    MountNotFound(PathBuf),

    /// An I/O error occurred.
    ///
    /// This wraps standard I/O errors from accessing the monitored path
    /// and from binding or serving the TCP listener.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for storage-info operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MountNotFound(PathBuf::from("/data"));
        assert_eq!(err.to_string(), "No filesystem found for path: /data");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
