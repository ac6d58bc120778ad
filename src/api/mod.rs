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


//! pixiv web API access
//!
//! Metadata lookups, URL resolution and the blocking HTTP transport.

pub mod client;
pub mod metadata;
pub mod resolver;

// Re-export commonly used types
pub use client::{ClientConfig, HttpResponse, HttpTransport, PixivClient, PIXIV_REFERER};
pub use metadata::{ArtworkInfo, CreationTimestamp, IllustType, ImageSize, MetadataDocument};
pub use resolver::ResolvedAssetRequest;
