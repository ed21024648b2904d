/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::listing::stream_photos;
use crate::rest::{Client, ListingOptions, Photo};
use futures::Stream;
use serde::Deserialize;

/// Holds a user account as found by the lookup methods.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.people.findByUsername.html)
/// for more details on the individual fields.
#[derive(Deserialize, Clone, Debug)]
pub struct User {
    #[serde(skip)]
    pub(crate) client: Option<Client>,

    #[serde(rename = "@nsid")]
    pub nsid: String,

    #[serde(default, rename = "username")]
    pub username: String,

    /// Number of photos the user has, used to bound the photo listings
    #[serde(skip)]
    pub photo_count: u64,
}

impl User {
    /// Creates a user from an already known NSID
    pub fn new(client: Client, nsid: &str) -> Self {
        Self {
            client: Some(client),
            nsid: nsid.into(),
            username: String::new(),
            photo_count: 0,
        }
    }

    /// Sets the number of photos the listings should expect
    pub fn with_photo_count(mut self, photo_count: u64) -> Self {
        self.photo_count = photo_count;
        self
    }

    async fn find(
        client: Client,
        method: &str,
        param: &str,
        value: &str,
    ) -> Result<Self, FlickrError> {
        let params = [(param, Some(value))];
        client
            .get::<UserResponse>(method, &params)
            .await?
            .ok_or(FlickrError::ResponseMissing())
            .map(|mut v| {
                v.user.client = Some(client.clone());
                v.user
            })
    }

    /// Returns the user with the given username
    pub async fn from_username(client: Client, username: &str) -> Result<Self, FlickrError> {
        Self::find(client, "flickr.people.findByUsername", "username", username).await
    }

    /// Returns the user with the given email address
    pub async fn from_email(client: Client, email: &str) -> Result<Self, FlickrError> {
        Self::find(client, "flickr.people.findByEmail", "find_email", email).await
    }

    /// Streams the public photos of this user.
    ///
    /// The number of pages fetched follows [`User::photo_count`] and
    /// [`ListingOptions::per_page`]. The stream ends early with an error item if a page
    /// fails.
    pub fn public_photos(
        &self,
        options: &ListingOptions,
    ) -> Result<impl Stream<Item = Result<Photo, FlickrError>> + use<>, FlickrError> {
        let client = self
            .client
            .as_ref()
            .ok_or(FlickrError::ClientNotFound())?
            .clone();
        Ok(stream_photos(
            client,
            "flickr.people.getPublicPhotos",
            vec![("user_id", Some(self.nsid.clone()))],
            self.photo_count,
            options,
        ))
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "username: {}, nsid: {}", self.username, self.nsid)
    }
}

// Expected response from a user lookup
#[derive(Deserialize, Debug)]
struct UserResponse {
    #[serde(rename = "user")]
    user: User,
}
