/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr
//!
//! This Flickr library was created for working with the Flickr REST API.
//!
//! For further details on the Rest API refer to the [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - User lookup by username or email
//! - Public photo listing of a user, streamed page by page
//! - Photo information
//!     - Static image urls for every size
//! - Desktop authentication (frob, auth url, token exchange and check)
//! - Lower level interface for handling the raw communication
//!
//! *Requests are signed with the API secret when one is configured. Calls without a
//! secret are sent unsigned, which is enough for the public methods.*
//!
//! *If you want to use this library for more that is currently implemented,
//! [`rest::Client::get`] is a way to make request/responses in a more direct way*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! flickr = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an API key (and secret for signed calls) from Flickr prior to
//! using the API**
//!
//! ```rust,no_run
//! use flickr::rest::{Client, ContentFilter, Creds, ListingOptions, User};
//! use futures::{pin_mut, StreamExt};
//!
//! async fn print_photo_urls(api_key: &str, username: &str, photo_count: u64) -> anyhow::Result<()> {
//!     let client = Client::new(Creds::from_tokens(api_key, None, None));
//!
//!     // Find the account and tell it how many photos to expect
//!     let user = User::from_username(client.clone(), username)
//!         .await?
//!         .with_photo_count(photo_count);
//!
//!     let options = ListingOptions::new()
//!         .per_page(50)
//!         .content_filter(ContentFilter::Safe);
//!
//!     // Pages are only fetched as the stream is consumed
//!     let photos = user.public_photos(&options)?;
//!     pin_mut!(photos);
//!     while let Some(photo) = photos.next().await {
//!         let photo = photo?;
//!         println!("{}: {}", photo.title, photo.urls.medium);
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod rest;
