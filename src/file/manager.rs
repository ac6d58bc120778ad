// PixivCore - pixiv artwork asset retrieval
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! File operations
//!
//! # Key Operations
//! - Directory creation (recursive, idempotent)
//! - Create-or-truncate writes of a whole buffer
//!
//! Writes are not atomic. An existing file is overwritten without warning, and a
//! failure halfway through `write_all` leaves whatever was written on disk. The
//! handle is closed on every path when the `File` drops.

use crate::error::{PixivError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Ensure directory exists, creating parent directories as needed
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| {
        PixivError::FileIoError(format!(
            "Failed to create directory {}: {}",
            path.display(),
            e
        ))
    })
}

/// Write `contents` to `path`, creating missing parent directories
///
/// The file is created or truncated, written fully, flushed and closed.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }

    let mut file = File::create(path).map_err(|e| {
        PixivError::FileIoError(format!("Failed to create {}: {}", path.display(), e))
    })?;

    file.write_all(contents)
        .and_then(|_| file.flush())
        .map_err(|e| {
            PixivError::FileIoError(format!("Failed to write {}: {}", path.display(), e))
        })?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directory_exists() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("c");

        ensure_directory_exists(&nested).unwrap();
        assert!(nested.is_dir());

        // Second call is a no-op
        ensure_directory_exists(&nested).unwrap();
    }

    #[test]
    fn test_write_file_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("deep").join("1_p0.png");

        write_file(&path, b"\x89PNG data").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"\x89PNG data");
    }

    #[test]
    fn test_write_file_truncates_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("file.bin");

        write_file(&path, b"a much longer first version").unwrap();
        write_file(&path, b"short").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"short");
    }

    #[test]
    fn test_write_file_into_existing_file_as_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = write_file(&blocker.join("child.png"), b"data").unwrap_err();
        assert!(err.is_file_error());
    }
}
