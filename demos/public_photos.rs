/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate flickr;

use anyhow::Result;
use dotenvy::dotenv;
use flickr::rest::{Client, ContentFilter, Creds, ListingOptions, User};
use futures::{StreamExt, pin_mut};

// Lists the public photos of a user and prints their urls.
// NOTE: the photo count bounds how many pages are requested.
async fn print_public_photos(client: Client, username: &str, photo_count: u64) -> Result<()> {
    let user = User::from_username(client, username)
        .await?
        .with_photo_count(photo_count);
    println!("Found user: {user}");

    let options = ListingOptions::new()
        .per_page(25)
        .content_filter(ContentFilter::Safe);
    let photos = user.public_photos(&options)?;

    pin_mut!(photos);
    let mut count = 0;
    while let Some(photo) = photos.next().await {
        let photo = photo?;
        println!(
            "{photo} taken: {:?} medium: {} original: {:?}",
            photo.date_taken, photo.urls.medium, photo.urls.original
        );
        count += 1;
    }
    println!("Listed {count} photos");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let username = args.next().unwrap_or_else(|| "Stewart".into());
    let photo_count = args.next().and_then(|n| n.parse().ok()).unwrap_or(100);

    let client = Client::new(Creds::from_env()?);
    print_public_photos(client, &username, photo_count).await
}
