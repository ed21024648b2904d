/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

// Original images without a recorded format are served as jpg
const DEFAULT_ORIGINAL_FORMAT: &str = "jpg";

/// Sizes a photo is served in
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum PhotoSize {
    Square,
    Thumbnail,
    Small,
    Medium,
    Large,
    Original,
}

impl PhotoSize {
    // Suffix appended to `{id}_{secret}` in the file name
    fn suffix(self) -> &'static str {
        match self {
            PhotoSize::Square => "_s",
            PhotoSize::Thumbnail => "_t",
            PhotoSize::Small => "_m",
            PhotoSize::Medium => "",
            PhotoSize::Large => "_b",
            PhotoSize::Original => "_o",
        }
    }
}

/// Static image urls for a photo.
///
/// `original` is only known when the service returned the original secret, which
/// requires the `original_format` extra.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoUrls {
    pub square: String,
    pub thumbnail: String,
    pub small: String,
    pub medium: String,
    pub large: String,
    pub original: Option<String>,
}

impl PhotoUrls {
    /// Builds the url set from a photo's id, farm, server and secrets.
    ///
    /// `original` is the original secret and, if known, the original format.
    pub fn build(
        id: &str,
        farm: u32,
        server: &str,
        secret: &str,
        original: Option<(&str, Option<&str>)>,
    ) -> Self {
        let url = |secret: &str, size: PhotoSize, format: &str| {
            format!(
                "http://farm{farm}.static.flickr.com/{server}/{id}_{secret}{}.{format}",
                size.suffix()
            )
        };
        Self {
            square: url(secret, PhotoSize::Square, "jpg"),
            thumbnail: url(secret, PhotoSize::Thumbnail, "jpg"),
            small: url(secret, PhotoSize::Small, "jpg"),
            medium: url(secret, PhotoSize::Medium, "jpg"),
            large: url(secret, PhotoSize::Large, "jpg"),
            original: original.map(|(original_secret, format)| {
                url(
                    original_secret,
                    PhotoSize::Original,
                    format.unwrap_or(DEFAULT_ORIGINAL_FORMAT),
                )
            }),
        }
    }

    /// Returns the url for a given size
    pub fn get(&self, size: PhotoSize) -> Option<&str> {
        match size {
            PhotoSize::Square => Some(&self.square),
            PhotoSize::Thumbnail => Some(&self.thumbnail),
            PhotoSize::Small => Some(&self.small),
            PhotoSize::Medium => Some(&self.medium),
            PhotoSize::Large => Some(&self.large),
            PhotoSize::Original => self.original.as_deref(),
        }
    }
}
