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


//! Asset URL resolution
//!
//! Turns metadata into concrete download URLs. Everything here is pure: no I/O,
//! no state.
//!
//! # Page URLs
//! The metadata only carries page-0 URLs. Other pages live at the same path with
//! the marker `{id}_p0` replaced by `{id}_p{page}`:
//!
//! ```text
//! .../img/2021/03/05/14/07/09/12345678_p0.png
//! .../img/2021/03/05/14/07/09/12345678_p2.png
//! ```
//!
//! # Animated archive URL
//! The frame archive of an animated artwork is never listed in metadata. Its
//! path is keyed by the creation moment in storage time:
//!
//! ```text
//! https://i.pximg.net/img-zip-ugoira/img/{YYYY}/{MM}/{DD}/{HH}/{mm}/{SS}/{id}_ugoira1920x1080.zip
//! ```

use crate::api::client::required_headers;
use crate::api::metadata::{ArtworkInfo, CreationTimestamp, ImageSize};
use crate::error::{PixivError, Result};
use reqwest::header::HeaderMap;

/// Host and path prefix of animated frame archives
pub const UGOIRA_ARCHIVE_BASE_URL: &str = "https://i.pximg.net/img-zip-ugoira/img";

/// A URL ready to be fetched, with the headers the server requires
#[derive(Debug, Clone)]
pub struct ResolvedAssetRequest {
    pub url: String,
    pub headers: HeaderMap,
    /// Page index for page images, `None` for the animated archive
    pub page: Option<u32>,
}

impl ResolvedAssetRequest {
    pub fn new(url: String, page: Option<u32>) -> Self {
        Self {
            url,
            headers: required_headers(),
            page,
        }
    }
}

/// Replace the page-0 marker of `template` with the marker for `page`
pub fn page_url(template: &str, artwork_id: u64, page: u32) -> String {
    template.replace(
        &format!("{}_p0", artwork_id),
        &format!("{}_p{}", artwork_id, page),
    )
}

/// Archive URL of an animated artwork
pub fn animated_archive_url(artwork_id: u64, created: &CreationTimestamp) -> String {
    format!(
        "{}/{}/{:02}/{:02}/{:02}/{:02}/{:02}/{}_ugoira1920x1080.zip",
        UGOIRA_ARCHIVE_BASE_URL,
        created.year,
        created.month,
        created.day,
        created.hour,
        created.minute,
        created.second,
        artwork_id
    )
}

/// Text after the final `.` of a URL (the whole URL if it has none)
pub fn file_extension(url: &str) -> &str {
    url.rsplit_once('.').map_or(url, |(_, extension)| extension)
}

impl<'a> ArtworkInfo<'a> {
    /// URL of one page at one size
    ///
    /// # Errors
    /// - `InvalidArgument` if `page >= page_count()`
    /// - `MetadataNotFound` if the page count or the size tier is missing
    pub fn resolve_page_url(&self, page: u32, size: ImageSize) -> Result<String> {
        let page_count = self.page_count()?;
        if page >= page_count {
            return Err(PixivError::invalid_argument(format!(
                "page {} exceeds artwork's page count ({})",
                page, page_count
            )));
        }

        let template = self.image_url_template(size)?;
        Ok(page_url(template, self.id(), page))
    }

    /// Page URL bundled with the required request headers
    pub fn resolve_page_request(&self, page: u32, size: ImageSize) -> Result<ResolvedAssetRequest> {
        Ok(ResolvedAssetRequest::new(
            self.resolve_page_url(page, size)?,
            Some(page),
        ))
    }

    /// URL of the full-resolution frame archive
    ///
    /// Does not check the artwork type; the URL of a non-animated artwork
    /// simply does not exist on the server.
    ///
    /// # Errors
    /// `TimestampParse` or `MetadataNotFound` if `createDate` is unusable.
    pub fn resolve_animated_archive_url(&self) -> Result<String> {
        let created = self.creation_timestamp()?;
        Ok(animated_archive_url(self.id(), &created))
    }

    /// Archive URL bundled with the required request headers
    pub fn resolve_animated_archive_request(&self) -> Result<ResolvedAssetRequest> {
        Ok(ResolvedAssetRequest::new(self.resolve_animated_archive_url()?, None))
    }

    /// File extension of the original-size image of a page (`png`, `jpg`, ...)
    pub fn image_file_extension(&self, page: u32) -> Result<String> {
        let url = self.resolve_page_url(page, ImageSize::Original)?;
        Ok(file_extension(&url).to_string())
    }
}

// ===== TESTS =====
