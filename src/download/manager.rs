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


//! Download orchestration for artwork assets
//!
//! # Download Flow
//! 1. Resolve the URL from metadata (see [`crate::api::resolver`])
//! 2. GET it through an [`HttpTransport`] with the required Referer
//! 3. Create missing parent directories
//! 4. Create or truncate the destination file and write every byte
//!
//! # Batch Downloads
//! `download_all_pages` walks pages `0..page_count` in order, one page fully on
//! disk before the next fetch starts. The first failure stops the loop and is
//! returned unchanged; pages already written stay on disk. There is no
//! resumption and no partial-success report.
//!
//! Every call blocks the calling thread. Nothing is retried.

use crate::api::client::{status_error, HttpTransport};
use crate::api::metadata::{ArtworkInfo, IllustType, ImageSize};
use crate::api::resolver::ResolvedAssetRequest;
use crate::error::{PixivError, Result};
use crate::file::manager::{ensure_directory_exists, write_file};
use crate::file::paths::page_file_path;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Download configuration
///
/// Defaults used by front ends; the orchestrator itself takes explicit
/// arguments on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Output directory for downloaded files
    pub output_directory: PathBuf,

    /// Size tier used when none is given
    pub image_size: ImageSize,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            output_directory: PathBuf::from("."),
            image_size: ImageSize::Original,
        }
    }
}

impl DownloadConfig {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            PixivError::FileIoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// A resolved request paired with the file it will be written to
#[derive(Debug, Clone)]
pub struct DownloadTarget {
    pub request: ResolvedAssetRequest,
    pub path: PathBuf,
}

/// Fetch a resolved request and return the body bytes
///
/// # Errors
/// - `NetworkError` - transport failure or non-2xx status
/// - `MissingResponseBody` - the response carried no body
pub fn fetch_bytes<T: HttpTransport>(transport: &T, request: &ResolvedAssetRequest) -> Result<Vec<u8>> {
    let response = transport.execute(Method::GET, &request.url, &request.headers)?;

    if !response.is_success() {
        return Err(status_error(response.status, &request.url));
    }

    let body = response.body.ok_or_else(|| PixivError::MissingResponseBody {
        url: request.url.clone(),
    })?;

    debug!(url = %request.url, bytes = body.len(), "fetched asset");
    Ok(body)
}

/// Downloads assets of one artwork
///
/// Borrows the artwork's metadata for its whole lifetime and owns (or borrows,
/// via `&T`) the transport.
///
/// # Example
/// ```rust,no_run
/// use pixiv_core::api::client::PixivClient;
/// use pixiv_core::api::metadata::{ArtworkInfo, ImageSize};
/// use pixiv_core::download::ArtworkDownloader;
///
/// # fn example() -> pixiv_core::error::Result<()> {
/// let client = PixivClient::new()?;
/// let document = client.fetch_metadata_document(12345678)?;
/// let artwork = ArtworkInfo::new(12345678, &document);
///
/// let downloader = ArtworkDownloader::new(artwork, &client);
/// downloader.download_all_pages("downloads/12345678".as_ref(), ImageSize::Original)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ArtworkDownloader<'a, T> {
    artwork: ArtworkInfo<'a>,
    transport: T,
}

impl<'a, T: HttpTransport> ArtworkDownloader<'a, T> {
    pub fn new(artwork: ArtworkInfo<'a>, transport: T) -> Self {
        Self { artwork, transport }
    }

    pub fn artwork(&self) -> ArtworkInfo<'a> {
        self.artwork
    }

    /// Fetch a resolved request with this downloader's transport
    pub fn fetch_bytes(&self, request: &ResolvedAssetRequest) -> Result<Vec<u8>> {
        fetch_bytes(&self.transport, request)
    }

    /// Bytes of one page at one size
    ///
    /// The page index is checked before any request is made.
    pub fn image_bytes(&self, page: u32, size: ImageSize) -> Result<Vec<u8>> {
        let request = self.artwork.resolve_page_request(page, size)?;
        self.fetch_bytes(&request)
    }

    /// Bytes of the animated frame archive
    ///
    /// Unlike [`download_animated_archive`](Self::download_animated_archive) this
    /// does not check the artwork type.
    pub fn animated_archive_bytes(&self) -> Result<Vec<u8>> {
        let request = self.artwork.resolve_animated_archive_request()?;
        self.fetch_bytes(&request)
    }

    /// Fetch a target and write it to its path
    ///
    /// Returns the number of bytes written.
    pub fn download_target(&self, target: &DownloadTarget) -> Result<u64> {
        let bytes = self.fetch_bytes(&target.request)?;
        write_file(&target.path, &bytes)?;
        Ok(bytes.len() as u64)
    }

    /// Download one page to `path`
    ///
    /// # Errors
    /// - `InvalidArgument` - page out of range (no request is made)
    /// - `NetworkError` / `MissingResponseBody` - fetch failed
    /// - `FileIoError` - directory creation or write failed
    pub fn download_page(&self, path: &Path, page: u32, size: ImageSize) -> Result<()> {
        let target = DownloadTarget {
            request: self.artwork.resolve_page_request(page, size)?,
            path: path.to_path_buf(),
        };

        let bytes = self.download_target(&target)?;
        info!(artwork_id = self.artwork.id(), page, bytes, path = %path.display(), "downloaded page");
        Ok(())
    }

    /// Download one page at original size
    pub fn download_page_original(&self, path: &Path, page: u32) -> Result<()> {
        self.download_page(path, page, ImageSize::Original)
    }

    /// Download the first page at original size
    pub fn download_first_page(&self, path: &Path) -> Result<()> {
        self.download_page(path, 0, ImageSize::Original)
    }

    /// Download every page into `folder` as `{id}_p{page}.{extension}`
    ///
    /// The extension comes from each page's original-size URL, whatever `size`
    /// is requested. Stops at the first failure and returns it; earlier pages stay
    /// on disk.
    ///
    /// Returns the written paths in page order.
    pub fn download_all_pages(&self, folder: &Path, size: ImageSize) -> Result<Vec<PathBuf>> {
        let page_count = self.artwork.page_count()?;
        ensure_directory_exists(folder)?;

        let mut written = Vec::new();
        for page in 0..page_count {
            let extension = self.artwork.image_file_extension(page)?;
            let target = DownloadTarget {
                request: self.artwork.resolve_page_request(page, size)?,
                path: page_file_path(folder, self.artwork.id(), page, &extension)?,
            };

            let bytes = self.download_target(&target)?;
            debug!(artwork_id = self.artwork.id(), page, bytes, "page saved");
            written.push(target.path);
        }

        info!(
            artwork_id = self.artwork.id(),
            pages = page_count,
            folder = %folder.display(),
            "downloaded all pages"
        );
        Ok(written)
    }

    /// Download the animated frame archive to `path`
    ///
    /// # Errors
    /// - `InvalidArgument` - the artwork is not animated (checked before any request)
    /// - `TimestampParse` - `createDate` is malformed
    /// - `NetworkError` / `MissingResponseBody` / `FileIoError` as for pages
    pub fn download_animated_archive(&self, path: &Path) -> Result<()> {
        let kind = self.artwork.illust_type()?;
        if kind != IllustType::Animated {
            return Err(PixivError::invalid_argument(format!(
                "Artwork {} is not an ugoira (type: {})",
                self.artwork.id(),
                kind
            )));
        }

        let target = DownloadTarget {
            request: self.artwork.resolve_animated_archive_request()?,
            path: path.to_path_buf(),
        };

        let bytes = self.download_target(&target)?;
        info!(artwork_id = self.artwork.id(), bytes, path = %path.display(), "downloaded ugoira archive");
        Ok(())
    }
}

// ===== TESTS =====
