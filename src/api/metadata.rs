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


//! Artwork metadata access
//!
//! # Key Functionality
//! - Hold a parsed metadata document ([`MetadataDocument`])
//! - Typed, fail-fast lookups for one artwork id ([`ArtworkInfo`])
//! - Closed subtype mapping ([`IllustType`])
//! - Size tiers ([`ImageSize`]) and creation timestamps ([`CreationTimestamp`])
//!
//! # Document Shape
//!
//! The document uses the site's preload-data layout. Every artwork lives under
//! `illust.<id>`:
//!
//! ```json
//! {
//!   "illust": {
//!     "12345678": {
//!       "illustType": 0,
//!       "pageCount": 3,
//!       "createDate": "2021-03-05T05:07:09+00:00",
//!       "urls": {
//!         "mini": "...", "thumb": "...", "small": "...",
//!         "regular": "...", "original": "https://i.pximg.net/img-original/img/2021/03/05/14/07/09/12345678_p0.png"
//!       },
//!       "viewCount": 100, "responseCount": 0
//!     }
//!   }
//! }
//! ```
//!
//! A missing id or key is always an error ([`PixivError::MetadataNotFound`]);
//! nothing falls back to a default value.

use crate::error::{PixivError, Result};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// UTC offset of the time zone the image servers use for storage paths (JST)
pub const STORAGE_UTC_OFFSET_SECS: i32 = 9 * 3600;

// ============================================================================
// ENUMS
// ============================================================================

/// Artwork subtype
///
/// Encoded as `illustType` in the metadata. The mapping is closed: an unknown
/// code is an error, never a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IllustType {
    /// Single static illustration (code 0)
    Static,
    /// Multi-page manga (code 1)
    Paginated,
    /// Animated frames distributed as a zip archive, "ugoira" (code 2)
    Animated,
}

impl IllustType {
    /// Numeric code used by the metadata
    pub fn code(&self) -> i64 {
        match self {
            IllustType::Static => 0,
            IllustType::Paginated => 1,
            IllustType::Animated => 2,
        }
    }
}

impl TryFrom<i64> for IllustType {
    type Error = PixivError;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            0 => Ok(IllustType::Static),
            1 => Ok(IllustType::Paginated),
            2 => Ok(IllustType::Animated),
            other => Err(PixivError::invalid_argument(format!(
                "Unknown illustration type code: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for IllustType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IllustType::Static => "illustration",
            IllustType::Paginated => "manga",
            IllustType::Animated => "ugoira",
        };
        f.write_str(name)
    }
}

/// Image size tier
///
/// Each tier maps to one key of the `urls` object. The site calls the
/// medium tier `small` and the large tier `regular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Mini,
    #[serde(alias = "thumb")]
    Thumbnail,
    #[serde(alias = "small")]
    Medium,
    #[serde(alias = "regular")]
    Large,
    Original,
}

impl ImageSize {
    /// All tiers, smallest first
    pub const ALL: [ImageSize; 5] = [
        ImageSize::Mini,
        ImageSize::Thumbnail,
        ImageSize::Medium,
        ImageSize::Large,
        ImageSize::Original,
    ];

    /// Key of this tier inside the `urls` object
    pub fn key(&self) -> &'static str {
        match self {
            ImageSize::Mini => "mini",
            ImageSize::Thumbnail => "thumb",
            ImageSize::Medium => "small",
            ImageSize::Large => "regular",
            ImageSize::Original => "original",
        }
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        ImageSize::Original
    }
}

impl FromStr for ImageSize {
    type Err = PixivError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mini" => Ok(ImageSize::Mini),
            "thumbnail" | "thumb" => Ok(ImageSize::Thumbnail),
            "medium" | "small" => Ok(ImageSize::Medium),
            "large" | "regular" => Ok(ImageSize::Large),
            "original" => Ok(ImageSize::Original),
            other => Err(PixivError::invalid_argument(format!("Unknown image size: {}", other))),
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// TIMESTAMP
// ============================================================================

/// Calendar fields of a creation moment, in storage time (JST)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CreationTimestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CreationTimestamp {
    /// Parse a metadata timestamp
    ///
    /// Accepted forms:
    /// - RFC 3339 with offset (`2021-03-05T05:07:09+00:00`), converted to JST
    /// - `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DDTHH:MM:SS`, taken as JST already
    ///
    /// # Errors
    /// `TimestampParse` if none of the forms match.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();

        if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
            let storage_zone = FixedOffset::east_opt(STORAGE_UTC_OFFSET_SECS)
                .ok_or_else(|| PixivError::timestamp_parse(value, "invalid storage offset"))?;
            return Ok(Self::from_naive(&datetime.with_timezone(&storage_zone).naive_local()));
        }

        NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
            .map(|naive| Self::from_naive(&naive))
            .map_err(|e| PixivError::timestamp_parse(value, e.to_string()))
    }

    fn from_naive(naive: &NaiveDateTime) -> Self {
        Self {
            year: naive.year(),
            month: naive.month(),
            day: naive.day(),
            hour: naive.hour(),
            minute: naive.minute(),
            second: naive.second(),
        }
    }
}

impl FromStr for CreationTimestamp {
    type Err = PixivError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CreationTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

// ============================================================================
// DOCUMENT
// ============================================================================

/// Parsed metadata document
///
/// Owned by the caller. [`ArtworkInfo`] only borrows it.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataDocument {
    root: Value,
}

impl MetadataDocument {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Wrap the `body` of an AJAX `illust/{id}` response as `{"illust": {id: body}}`
    pub fn from_ajax_body(artwork_id: u64, body: Value) -> Self {
        let mut artworks = Map::new();
        artworks.insert(artwork_id.to_string(), body);

        let mut root = Map::new();
        root.insert("illust".to_string(), Value::Object(artworks));

        Self::new(Value::Object(root))
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    /// Entry for one artwork id
    ///
    /// # Errors
    /// `MetadataNotFound` if `illust` or `illust.<id>` is absent.
    pub fn artwork(&self, artwork_id: u64) -> Result<&Value> {
        self.root
            .get("illust")
            .ok_or_else(|| PixivError::not_found("illust"))?
            .get(artwork_id.to_string())
            .ok_or_else(|| PixivError::not_found(format!("illust.{}", artwork_id)))
    }
}

impl FromStr for MetadataDocument {
    type Err = PixivError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(s)?))
    }
}

impl From<Value> for MetadataDocument {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

// ============================================================================
// ACCESSOR
// ============================================================================

/// Read-only view of one artwork inside a [`MetadataDocument`]
///
/// Cheap to copy. Every lookup goes back to the document, so a missing key is
/// reported by the call that needs it.
#[derive(Debug, Clone, Copy)]
pub struct ArtworkInfo<'a> {
    id: u64,
    document: &'a MetadataDocument,
}

impl<'a> ArtworkInfo<'a> {
    pub fn new(id: u64, document: &'a MetadataDocument) -> Self {
        Self { id, document }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn document(&self) -> &'a MetadataDocument {
        self.document
    }

    /// Number of pages (frames for an animated artwork count as one page)
    pub fn page_count(&self) -> Result<u32> {
        let count = self.u64_field("pageCount")?;
        u32::try_from(count).map_err(|_| self.type_error("pageCount", "a page count"))
    }

    /// Artwork subtype
    ///
    /// # Errors
    /// - `MetadataNotFound` if `illustType` is absent
    /// - `InvalidArgument` if the code is not 0, 1 or 2
    pub fn illust_type(&self) -> Result<IllustType> {
        let value = self.field("illustType")?;
        let code = value
            .as_i64()
            .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
            .ok_or_else(|| self.type_error("illustType", "an integer"))?;
        IllustType::try_from(code)
    }

    /// Creation moment, in storage time
    pub fn creation_timestamp(&self) -> Result<CreationTimestamp> {
        CreationTimestamp::parse(self.str_field("createDate")?)
    }

    /// Last upload moment, in storage time
    pub fn upload_timestamp(&self) -> Result<CreationTimestamp> {
        CreationTimestamp::parse(self.str_field("uploadDate")?)
    }

    /// Page-0 URL registered for a size tier
    pub fn image_url_template(&self, size: ImageSize) -> Result<&'a str> {
        let urls = self.field("urls")?;
        urls.get(size.key())
            .ok_or_else(|| self.missing(&format!("urls.{}", size.key())))?
            .as_str()
            .ok_or_else(|| self.type_error(&format!("urls.{}", size.key()), "a string"))
    }

    pub fn response_count(&self) -> Result<u64> {
        self.u64_field("responseCount")
    }

    pub fn view_count(&self) -> Result<u64> {
        self.u64_field("viewCount")
    }

    pub fn like_count(&self) -> Result<u64> {
        self.u64_field("likeCount")
    }

    pub fn bookmark_count(&self) -> Result<u64> {
        self.u64_field("bookmarkCount")
    }

    pub fn comment_count(&self) -> Result<u64> {
        self.u64_field("commentCount")
    }

    /// Title (`illustTitle`, falling back to `title`)
    pub fn title(&self) -> Result<&'a str> {
        self.str_field("illustTitle").or_else(|_| self.str_field("title"))
    }

    /// Caption HTML (`description`, falling back to `illustComment`)
    pub fn description(&self) -> Result<&'a str> {
        self.str_field("description")
            .or_else(|_| self.str_field("illustComment"))
    }

    /// Author id; the site sends it as a string
    pub fn user_id(&self) -> Result<u64> {
        self.u64_field("userId")
    }

    pub fn user_name(&self) -> Result<&'a str> {
        self.str_field("userName")
    }

    /// Page-0 pixel size as `(width, height)`
    pub fn dimensions(&self) -> Result<(u64, u64)> {
        Ok((self.u64_field("width")?, self.u64_field("height")?))
    }

    /// Tag names in display order
    pub fn tags(&self) -> Result<Vec<&'a str>> {
        let tags = self
            .field("tags")?
            .get("tags")
            .and_then(Value::as_array)
            .ok_or_else(|| self.missing("tags.tags"))?;

        Ok(tags
            .iter()
            .filter_map(|tag| tag.get("tag").and_then(Value::as_str))
            .collect())
    }

    // ===== lookup helpers =====

    fn field(&self, key: &str) -> Result<&'a Value> {
        self.document
            .artwork(self.id)?
            .get(key)
            .ok_or_else(|| self.missing(key))
    }

    fn str_field(&self, key: &str) -> Result<&'a str> {
        self.field(key)?
            .as_str()
            .ok_or_else(|| self.type_error(key, "a string"))
    }

    /// Unsigned integer field; numeric strings are accepted
    fn u64_field(&self, key: &str) -> Result<u64> {
        let value = self.field(key)?;
        value
            .as_u64()
            .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
            .ok_or_else(|| self.type_error(key, "an unsigned integer"))
    }

    fn missing(&self, key: &str) -> PixivError {
        PixivError::not_found(format!("illust.{}.{}", self.id, key))
    }

    fn type_error(&self, key: &str, expected: &str) -> PixivError {
        PixivError::InvalidApiResponse {
            message: format!("illust.{}.{} is not {}", self.id, key, expected),
            response_body: None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    const ID: u64 = 12345678;

    fn test_document() -> MetadataDocument {
        MetadataDocument::new(json!({
            "illust": {
                "12345678": {
                    "illustType": 1,
                    "illustTitle": "Sketches",
                    "description": "three pages",
                    "userId": "42",
                    "userName": "artist",
                    "pageCount": 3,
                    "width": 1200,
                    "height": 1600,
                    "createDate": "2021-03-05T05:07:09+00:00",
                    "uploadDate": "2021-03-06T00:00:00+00:00",
                    "viewCount": 1500,
                    "likeCount": 120,
                    "bookmarkCount": 200,
                    "commentCount": 4,
                    "responseCount": 2,
                    "tags": { "tags": [ { "tag": "オリジナル" }, { "tag": "sketch" } ] },
                    "urls": {
                        "mini": "https://i.pximg.net/c/48x48/img-master/img/2021/03/05/14/07/09/12345678_p0_square1200.jpg",
                        "thumb": "https://i.pximg.net/c/250x250_80_a2/img-master/img/2021/03/05/14/07/09/12345678_p0_square1200.jpg",
                        "small": "https://i.pximg.net/c/540x540_70/img-master/img/2021/03/05/14/07/09/12345678_p0_master1200.jpg",
                        "regular": "https://i.pximg.net/img-master/img/2021/03/05/14/07/09/12345678_p0_master1200.jpg",
                        "original": "https://i.pximg.net/img-original/img/2021/03/05/14/07/09/12345678_p0.png"
                    }
                }
            }
        }))
    }

    #[test]
    fn test_illust_type_mapping() {
        assert_eq!(IllustType::try_from(0).unwrap(), IllustType::Static);
        assert_eq!(IllustType::try_from(1).unwrap(), IllustType::Paginated);
        assert_eq!(IllustType::try_from(2).unwrap(), IllustType::Animated);

        for code in [-1, 3, 99] {
            let err = IllustType::try_from(code).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_illust_type_code_roundtrip() {
        for kind in [IllustType::Static, IllustType::Paginated, IllustType::Animated] {
            assert_eq!(IllustType::try_from(kind.code()).unwrap(), kind);
        }
    }

    #[test]
    fn test_image_size_parse() {
        assert_eq!("thumbnail".parse::<ImageSize>().unwrap(), ImageSize::Thumbnail);
        assert_eq!("thumb".parse::<ImageSize>().unwrap(), ImageSize::Thumbnail);
        assert_eq!("Medium".parse::<ImageSize>().unwrap(), ImageSize::Medium);
        assert_eq!("regular".parse::<ImageSize>().unwrap(), ImageSize::Large);
        assert_eq!("original".parse::<ImageSize>().unwrap(), ImageSize::Original);
        assert!("huge".parse::<ImageSize>().is_err());
    }

    #[test]
    fn test_timestamp_rfc3339_converted_to_storage_time() {
        let ts = CreationTimestamp::parse("2021-03-05T05:07:09+00:00").unwrap();
        assert_eq!(ts.to_string(), "2021-03-05 14:07:09");

        // Already in JST
        let ts = CreationTimestamp::parse("2021-03-05T14:07:09+09:00").unwrap();
        assert_eq!(ts.to_string(), "2021-03-05 14:07:09");
    }

    #[test]
    fn test_timestamp_crosses_midnight() {
        let ts = CreationTimestamp::parse("2020-12-31T20:00:00+00:00").unwrap();
        assert_eq!(
            ts,
            CreationTimestamp { year: 2021, month: 1, day: 1, hour: 5, minute: 0, second: 0 }
        );
    }

    #[test]
    fn test_timestamp_naive_forms() {
        let expected = CreationTimestamp { year: 2021, month: 3, day: 5, hour: 14, minute: 7, second: 9 };
        assert_eq!(CreationTimestamp::parse("2021-03-05 14:07:09").unwrap(), expected);
        assert_eq!(CreationTimestamp::parse("2021-03-05T14:07:09").unwrap(), expected);
    }

    #[test]
    fn test_timestamp_malformed() {
        for bad in ["", "yesterday", "2021-13-05 14:07:09", "2021/03/05 14:07:09"] {
            let err = CreationTimestamp::parse(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "{bad}");
        }
    }

    #[test]
    fn test_accessors() {
        let document = test_document();
        let artwork = ArtworkInfo::new(ID, &document);

        assert_eq!(artwork.page_count().unwrap(), 3);
        assert_eq!(artwork.illust_type().unwrap(), IllustType::Paginated);
        assert_eq!(artwork.response_count().unwrap(), 2);
        assert_eq!(artwork.view_count().unwrap(), 1500);
        assert_eq!(artwork.like_count().unwrap(), 120);
        assert_eq!(artwork.bookmark_count().unwrap(), 200);
        assert_eq!(artwork.comment_count().unwrap(), 4);
        assert_eq!(artwork.title().unwrap(), "Sketches");
        assert_eq!(artwork.description().unwrap(), "three pages");
        assert_eq!(artwork.user_id().unwrap(), 42);
        assert_eq!(artwork.user_name().unwrap(), "artist");
        assert_eq!(artwork.dimensions().unwrap(), (1200, 1600));
        assert_eq!(artwork.tags().unwrap(), vec!["オリジナル", "sketch"]);
        assert_eq!(artwork.creation_timestamp().unwrap().to_string(), "2021-03-05 14:07:09");
        assert_eq!(artwork.upload_timestamp().unwrap().to_string(), "2021-03-06 09:00:00");
    }

    #[test]
    fn test_image_url_template_per_size() {
        let document = test_document();
        let artwork = ArtworkInfo::new(ID, &document);

        assert!(artwork
            .image_url_template(ImageSize::Original)
            .unwrap()
            .ends_with("12345678_p0.png"));
        assert!(artwork
            .image_url_template(ImageSize::Large)
            .unwrap()
            .starts_with("https://i.pximg.net/img-master/"));

        for size in ImageSize::ALL {
            let template = artwork.image_url_template(size).unwrap();
            assert!(template.contains("12345678_p0"), "{} -> {}", size, template);
        }
    }

    #[test]
    fn test_missing_size_key_is_not_found() {
        let mut value = test_document().into_value();
        value["illust"]["12345678"]["urls"]
            .as_object_mut()
            .unwrap()
            .remove("small");
        let document = MetadataDocument::new(value);
        let artwork = ArtworkInfo::new(ID, &document);

        match artwork.image_url_template(ImageSize::Medium) {
            Err(PixivError::MetadataNotFound { key }) => assert_eq!(key, "illust.12345678.urls.small"),
            other => panic!("expected MetadataNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_artwork_id_fails_every_accessor() {
        let document = test_document();
        let artwork = ArtworkInfo::new(1, &document);

        assert_eq!(artwork.page_count().unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(artwork.illust_type().unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(artwork.creation_timestamp().unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(artwork.response_count().unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(
            artwork.image_url_template(ImageSize::Original).unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_missing_page_count_is_not_found() {
        let mut value = test_document().into_value();
        value["illust"]["12345678"]
            .as_object_mut()
            .unwrap()
            .remove("pageCount");
        let document = MetadataDocument::new(value);

        match ArtworkInfo::new(ID, &document).page_count() {
            Err(PixivError::MetadataNotFound { key }) => assert_eq!(key, "illust.12345678.pageCount"),
            other => panic!("expected MetadataNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_create_date_is_not_found() {
        let mut value = test_document().into_value();
        value["illust"]["12345678"]
            .as_object_mut()
            .unwrap()
            .remove("createDate");
        let document = MetadataDocument::new(value);
        let artwork = ArtworkInfo::new(ID, &document);

        match artwork.creation_timestamp() {
            Err(PixivError::MetadataNotFound { key }) => assert_eq!(key, "illust.12345678.createDate"),
            other => panic!("expected MetadataNotFound, got {:?}", other),
        }
        // Other fields of the same entry stay readable
        assert_eq!(artwork.page_count().unwrap(), 3);
    }

    #[test]
    fn test_numeric_strings_accepted_for_type_and_page_count() {
        let mut value = test_document().into_value();
        value["illust"]["12345678"]["illustType"] = json!("2");
        value["illust"]["12345678"]["pageCount"] = json!("1");
        let document = MetadataDocument::new(value);
        let artwork = ArtworkInfo::new(ID, &document);

        assert_eq!(artwork.illust_type().unwrap(), IllustType::Animated);
        assert_eq!(artwork.page_count().unwrap(), 1);
    }

    #[test]
    fn test_non_numeric_illust_type_is_parse_error() {
        let mut value = test_document().into_value();
        value["illust"]["12345678"]["illustType"] = json!("manga");
        let document = MetadataDocument::new(value);

        let err = ArtworkInfo::new(ID, &document).illust_type().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_document_without_illust_root() {
        let document = MetadataDocument::new(json!({ "user": {} }));
        match document.artwork(ID) {
            Err(PixivError::MetadataNotFound { key }) => assert_eq!(key, "illust"),
            other => panic!("expected MetadataNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_illust_type_code() {
        let mut value = test_document().into_value();
        value["illust"]["12345678"]["illustType"] = json!(7);
        let document = MetadataDocument::new(value);

        let err = ArtworkInfo::new(ID, &document).illust_type().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_from_ajax_body() {
        let document = MetadataDocument::from_ajax_body(ID, json!({ "pageCount": 1 }));
        let artwork = ArtworkInfo::new(ID, &document);
        assert_eq!(artwork.page_count().unwrap(), 1);
    }

    #[test]
    fn test_document_from_str() {
        let document: MetadataDocument = r#"{"illust":{"5":{"pageCount":2}}}"#.parse().unwrap();
        assert_eq!(ArtworkInfo::new(5, &document).page_count().unwrap(), 2);

        let err = "{not json".parse::<MetadataDocument>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
