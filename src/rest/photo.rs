/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::parsers::{
    from_empty_str_to_none, from_flag, from_tag_list, from_taken_date, from_unix_timestamp,
};
use crate::rest::{Client, PhotoUrls};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A photo as returned by the listing methods.
///
/// The extra fields are only filled in when the matching extra was requested.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.people.getPublicPhotos.html)
/// for more details on the individual fields.
#[derive(Deserialize, Clone, Debug)]
pub struct Photo {
    #[serde(skip)]
    pub(crate) client: Option<Client>,

    /// Computed after the photo is fetched
    #[serde(skip)]
    pub urls: PhotoUrls,

    #[serde(rename = "@id")]
    pub id: String,

    /// NSID of the owner
    #[serde(rename = "@owner")]
    pub owner: String,

    #[serde(rename = "@secret")]
    pub secret: String,

    #[serde(rename = "@server")]
    pub server: String,

    #[serde(default, rename = "@farm")]
    pub farm: u32,

    #[serde(default, rename = "@title")]
    pub title: String,

    #[serde(default, rename = "@ispublic", deserialize_with = "from_flag")]
    pub is_public: bool,

    #[serde(default, rename = "@isfriend", deserialize_with = "from_flag")]
    pub is_friend: bool,

    #[serde(default, rename = "@isfamily", deserialize_with = "from_flag")]
    pub is_family: bool,

    // Extras
    #[serde(rename = "@license")]
    pub license: Option<u32>,

    #[serde(default, rename = "@dateupload", deserialize_with = "from_unix_timestamp")]
    pub date_uploaded: Option<DateTime<Utc>>,

    #[serde(default, rename = "@datetaken", deserialize_with = "from_taken_date")]
    pub date_taken: Option<NaiveDateTime>,

    #[serde(default, rename = "@ownername", deserialize_with = "from_empty_str_to_none")]
    pub owner_name: Option<String>,

    #[serde(
        default,
        rename = "@originalsecret",
        deserialize_with = "from_empty_str_to_none"
    )]
    pub original_secret: Option<String>,

    #[serde(
        default,
        rename = "@originalformat",
        deserialize_with = "from_empty_str_to_none"
    )]
    pub original_format: Option<String>,

    #[serde(default, rename = "@lastupdate", deserialize_with = "from_unix_timestamp")]
    pub last_update: Option<DateTime<Utc>>,

    #[serde(default, rename = "@tags", deserialize_with = "from_tag_list")]
    pub tags: Vec<String>,
}

impl Photo {
    // Fills in the fields that are derived rather than returned
    pub(crate) fn enrich(&mut self, client: &Client) {
        self.urls = PhotoUrls::build(
            &self.id,
            self.farm,
            &self.server,
            &self.secret,
            self.original_secret
                .as_deref()
                .map(|s| (s, self.original_format.as_deref())),
        );
        self.client = Some(client.clone());
    }

    /// Retrieves the full metadata for this photo
    pub async fn info(&self) -> Result<PhotoInfo, FlickrError> {
        let client = self
            .client
            .as_ref()
            .ok_or(FlickrError::ClientNotFound())?
            .clone();
        PhotoInfo::from_id(client, &self.id, Some(&self.secret)).await
    }
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Photo {}

impl Hash for Photo {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.id.hash(state);
    }
}

impl PartialOrd for Photo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Photo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::fmt::Display for Photo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "title: {}, id: {}", self.title, self.id)
    }
}

/// Holds information returned from `flickr.photos.getInfo`.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photos.getInfo.html) for
/// more details on the individual fields.
#[derive(Deserialize, Debug)]
pub struct PhotoInfo {
    /// Computed after the photo is fetched
    #[serde(skip)]
    pub urls: PhotoUrls,

    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@secret")]
    pub secret: String,

    #[serde(rename = "@server")]
    pub server: String,

    #[serde(default, rename = "@farm")]
    pub farm: u32,

    #[serde(rename = "@license")]
    pub license: Option<u32>,

    #[serde(default, rename = "@isfavorite", deserialize_with = "from_flag")]
    pub is_favorite: bool,

    #[serde(
        default,
        rename = "@originalsecret",
        deserialize_with = "from_empty_str_to_none"
    )]
    pub original_secret: Option<String>,

    #[serde(
        default,
        rename = "@originalformat",
        deserialize_with = "from_empty_str_to_none"
    )]
    pub original_format: Option<String>,

    #[serde(rename = "owner")]
    pub owner: PhotoOwner,

    #[serde(default, rename = "title")]
    pub title: String,

    #[serde(default, rename = "description")]
    pub description: String,

    #[serde(rename = "visibility")]
    pub visibility: Option<Visibility>,

    #[serde(rename = "dates")]
    pub dates: Option<PhotoDates>,

    #[serde(rename = "comments")]
    pub comment_count: Option<u32>,

    #[serde(default, rename = "tags")]
    tags: PhotoTags,

    #[serde(default, rename = "urls")]
    web_urls: PhotoWebUrls,
}

impl PhotoInfo {
    /// Returns information for the specified photo id.
    ///
    /// Passing the secret skips the permission check for photos the caller can already see.
    pub async fn from_id(
        client: Client,
        id: &str,
        secret: Option<&str>,
    ) -> Result<Self, FlickrError> {
        let params = [("photo_id", Some(id)), ("secret", secret)];
        client
            .get::<PhotoInfoResponse>("flickr.photos.getInfo", &params)
            .await?
            .ok_or(FlickrError::ResponseMissing())
            .map(|v| {
                let mut photo = v.photo;
                photo.urls = PhotoUrls::build(
                    &photo.id,
                    photo.farm,
                    &photo.server,
                    &photo.secret,
                    photo
                        .original_secret
                        .as_deref()
                        .map(|s| (s, photo.original_format.as_deref())),
                );
                photo
            })
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags.tags
    }

    /// Url of the photo page on the site
    pub fn photo_page(&self) -> Option<&str> {
        self.web_urls
            .urls
            .iter()
            .find(|u| u.kind == "photopage")
            .map(|u| u.value.as_str())
    }
}

#[derive(Deserialize, Debug)]
pub struct PhotoOwner {
    #[serde(rename = "@nsid")]
    pub nsid: String,

    #[serde(default, rename = "@username")]
    pub username: String,

    #[serde(default, rename = "@realname", deserialize_with = "from_empty_str_to_none")]
    pub real_name: Option<String>,

    #[serde(default, rename = "@location", deserialize_with = "from_empty_str_to_none")]
    pub location: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct Visibility {
    #[serde(default, rename = "@ispublic", deserialize_with = "from_flag")]
    pub is_public: bool,

    #[serde(default, rename = "@isfriend", deserialize_with = "from_flag")]
    pub is_friend: bool,

    #[serde(default, rename = "@isfamily", deserialize_with = "from_flag")]
    pub is_family: bool,
}

#[derive(Deserialize, Debug)]
pub struct PhotoDates {
    #[serde(default, rename = "@posted", deserialize_with = "from_unix_timestamp")]
    pub posted: Option<DateTime<Utc>>,

    #[serde(default, rename = "@taken", deserialize_with = "from_taken_date")]
    pub taken: Option<NaiveDateTime>,

    #[serde(default, rename = "@lastupdate", deserialize_with = "from_unix_timestamp")]
    pub last_update: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Debug)]
pub struct Tag {
    #[serde(rename = "@id")]
    pub id: String,

    /// Tag as the user typed it
    #[serde(default, rename = "@raw")]
    pub raw: String,

    /// Normalized tag
    #[serde(default, rename = "$text")]
    pub value: String,
}

#[derive(Deserialize, Debug, Default)]
struct PhotoTags {
    #[serde(default, rename = "tag")]
    tags: Vec<Tag>,
}

#[derive(Deserialize, Debug, Default)]
struct PhotoWebUrls {
    #[serde(default, rename = "url")]
    urls: Vec<WebUrl>,
}

#[derive(Deserialize, Debug)]
struct WebUrl {
    #[serde(rename = "@type")]
    kind: String,

    #[serde(rename = "$text")]
    value: String,
}

// Expected response for a request to get a Photo's info
#[derive(Deserialize, Debug)]
struct PhotoInfoResponse {
    #[serde(rename = "photo")]
    photo: PhotoInfo,
}
