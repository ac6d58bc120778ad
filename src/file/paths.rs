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


//! Download file naming
//!
//! - Page images: `{id}_p{page}.{extension}`
//! - Animated archives: `{id}_ugoira1920x1080.zip`

use crate::error::{PixivError, Result};
use std::path::{Path, PathBuf};

/// File name of one page image
///
/// # Errors
/// `InvalidArgument` if the extension is empty or contains a path separator,
/// so a hostile URL cannot place the file outside the destination folder.
pub fn page_file_name(artwork_id: u64, page: u32, extension: &str) -> Result<String> {
    if extension.is_empty() || extension.contains(['/', '\\']) {
        return Err(PixivError::invalid_argument(format!(
            "Unusable file extension '{}' for artwork {} page {}",
            extension, artwork_id, page
        )));
    }

    Ok(format!("{}_p{}.{}", artwork_id, page, extension))
}

/// Full path of one page image inside `folder`
pub fn page_file_path(folder: &Path, artwork_id: u64, page: u32, extension: &str) -> Result<PathBuf> {
    Ok(folder.join(page_file_name(artwork_id, page, extension)?))
}

/// File name of an animated frame archive, matching the server's name
pub fn animated_archive_file_name(artwork_id: u64) -> String {
    format!("{}_ugoira1920x1080.zip", artwork_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_file_name() {
        assert_eq!(page_file_name(12345678, 0, "png").unwrap(), "12345678_p0.png");
        assert_eq!(page_file_name(12345678, 11, "jpg").unwrap(), "12345678_p11.jpg");
    }

    #[test]
    fn test_page_file_name_rejects_separators() {
        assert!(page_file_name(1, 0, "").is_err());
        assert!(page_file_name(1, 0, "net/img/1_p0").is_err());
        assert!(page_file_name(1, 0, "..\\x").is_err());
    }

    #[test]
    fn test_page_file_path() {
        let path = page_file_path(Path::new("out"), 7, 2, "gif").unwrap();
        assert_eq!(path, Path::new("out").join("7_p2.gif"));
    }

    #[test]
    fn test_animated_archive_file_name() {
        assert_eq!(animated_archive_file_name(44298467), "44298467_ugoira1920x1080.zip");
    }
}
