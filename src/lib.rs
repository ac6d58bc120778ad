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


//! Artwork metadata resolution and asset downloads for pixiv
//!
//! Given an artwork id and its pre-fetched metadata document, this crate
//! answers structural questions about the artwork, derives page- and
//! size-specific download URLs (including the undocumented archive URL of
//! animated artworks) and downloads the assets to disk.
//!
//! ```rust,no_run
//! use pixiv_core::{ArtworkDownloader, ArtworkInfo, ImageSize, PixivClient};
//!
//! # fn example() -> pixiv_core::Result<()> {
//! let client = PixivClient::new()?;
//! let document = client.fetch_metadata_document(12345678)?;
//! let artwork = ArtworkInfo::new(12345678, &document);
//!
//! let url = artwork.resolve_page_url(0, ImageSize::Large)?;
//! println!("{url}");
//!
//! ArtworkDownloader::new(artwork, &client)
//!     .download_all_pages("downloads".as_ref(), ImageSize::Original)?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod download;
pub mod error;
pub mod file;

pub use api::{ArtworkInfo, CreationTimestamp, IllustType, ImageSize, MetadataDocument, PixivClient};
pub use download::ArtworkDownloader;
pub use error::{ErrorKind, PixivError, Result};
