/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::{Client, Photo};
use async_stream::try_stream;
use futures::Stream;
use num_enum::IntoPrimitive;
use serde::Deserialize;
use std::str::FromStr;
use strum_macros::EnumString;

/// Extras requested when the caller does not name any
pub const DEFAULT_EXTRAS: &str =
    "license,date_upload,date_taken,owner_name,original_format,last_update,tags";

/// Content safety level requested on listing calls. Sent as `safe_search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoPrimitive)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(u8)]
pub enum ContentFilter {
    Safe = 1,
    Moderate = 2,
    Restricted = 3,
}

/// Options for the paged photo listings
#[derive(Debug, Clone, Default)]
pub struct ListingOptions {
    /// Photos per page. Without it a single page is fetched.
    pub per_page: Option<u32>,
    pub content_filter: Option<ContentFilter>,
    /// Comma separated extras, [`DEFAULT_EXTRAS`] when not set
    pub extras: Option<String>,
    /// First page to fetch, starting at 1
    pub start_page: Option<u32>,
}

impl ListingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn content_filter(mut self, filter: ContentFilter) -> Self {
        self.content_filter = Some(filter);
        self
    }

    /// Sets the content filter from its name (`safe`, `moderate` or `restricted`).
    ///
    /// Unknown names are ignored and leave the filter unchanged.
    pub fn content_filter_name(mut self, name: &str) -> Self {
        match ContentFilter::from_str(name) {
            Ok(filter) => self.content_filter = Some(filter),
            Err(_) => log::warn!("ignoring unknown content filter '{name}'"),
        }
        self
    }

    pub fn extras(mut self, extras: &str) -> Self {
        self.extras = Some(extras.into());
        self
    }

    pub fn start_page(mut self, page: u32) -> Self {
        self.start_page = Some(page);
        self
    }

    /// Cursor over the pages of a collection holding `total_count` items
    pub fn cursor(&self, total_count: u64) -> PageCursor {
        PageCursor::new(total_count, self.per_page, self.start_page.unwrap_or(1))
    }

    // Query parameters shared by every page request
    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("per_page", self.per_page.filter(|n| *n > 0).map(|n| n.to_string())),
            (
                "safe_search",
                self.content_filter.map(|f| u8::from(f).to_string()),
            ),
            (
                "extras",
                Some(self.extras.clone().unwrap_or_else(|| DEFAULT_EXTRAS.into())),
            ),
        ]
    }
}

/// Tracks which page of a listing comes next.
///
/// The last page is `total_count / per_page + 1`, or 1 when there is no page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: u32,
    max_pages: u32,
    started: bool,
}

impl PageCursor {
    pub fn new(total_count: u64, per_page: Option<u32>, start_page: u32) -> Self {
        let max_pages = match per_page {
            Some(per_page) if per_page > 0 => {
                u32::try_from(total_count / u64::from(per_page) + 1).unwrap_or(u32::MAX)
            }
            _ => 1,
        };
        Self {
            page: start_page.max(1),
            max_pages,
            started: false,
        }
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Page that was last handed out, if any
    pub fn current_page(&self) -> Option<u32> {
        self.started.then_some(self.page)
    }

    /// Advances to the next page. Returns `None` once the last page was handed out.
    pub fn next_page(&mut self) -> Option<u32> {
        if !self.started {
            self.started = true;
            return (self.page <= self.max_pages).then_some(self.page);
        }
        if self.page >= self.max_pages {
            return None;
        }
        self.page += 1;
        Some(self.page)
    }
}

/// Streams every photo of a paged listing method.
///
/// Pages are fetched one at a time, and only once every photo of the previous page has
/// been taken from the stream. A failed page yields its error and ends the stream. An
/// empty body, or an `ok` response without a `<photos>` element, ends it quietly. A
/// `<photos>` element holding no photos is still a page, so the next one is fetched
/// until the last page is reached.
pub(crate) fn stream_photos(
    client: Client,
    method: &'static str,
    owner_params: Vec<(&'static str, Option<String>)>,
    total_count: u64,
    options: &ListingOptions,
) -> impl Stream<Item = Result<Photo, FlickrError>> + use<> {
    let mut cursor = options.cursor(total_count);
    let mut params = owner_params;
    params.extend(options.params());

    try_stream! {
        while let Some(page) = cursor.next_page() {
            let page_str = page.to_string();
            let mut page_params: Vec<(&str, Option<&str>)> = params
                .iter()
                .map(|(name, value)| (*name, value.as_deref()))
                .collect();
            page_params.push(("page", Some(page_str.as_str())));

            log::debug!("{method}: fetching page {page} of {}", cursor.max_pages());
            let Some(photos) = client
                .get::<PhotosResponse>(method, &page_params)
                .await?
                .and_then(|resp| resp.photos)
            else {
                break;
            };
            log::debug!(
                "{method}: page {} of {} holds {} photos ({} total)",
                photos.page,
                photos.pages,
                photos.photos.len(),
                photos.total
            );

            for mut photo in photos.photos {
                photo.enrich(&client);
                yield photo;
            }
        }
    }
}

// Expected response for a listing request
#[derive(Deserialize, Debug)]
struct PhotosResponse {
    #[serde(default, rename = "photos")]
    photos: Option<PhotoPage>,
}

#[derive(Deserialize, Debug)]
struct PhotoPage {
    #[serde(default, rename = "@page")]
    page: u32,

    #[serde(default, rename = "@pages")]
    pages: u32,

    #[serde(default, rename = "@total")]
    total: u64,

    #[serde(default, rename = "photo")]
    photos: Vec<Photo>,
}
