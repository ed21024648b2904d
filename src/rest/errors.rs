/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::rest::ApiErrorCodes;
use num_enum::TryFromPrimitiveError;
use std::fmt;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum FlickrError {
    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] quick_xml::de::DeError),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Client not found")]
    ClientNotFound(),

    #[error("Expected response missing")]
    ResponseMissing(),

    #[error("API Response was error: {0}")]
    ApiResponse(ErrorRecord),

    #[error("API Response status is not recognized: {0}")]
    UnknownStatus(String),

    #[error("API Response error code is not a standard code")]
    ApiResponseCode(#[from] TryFromPrimitiveError<ApiErrorCodes>),
}

impl FlickrError {
    /// Returns the failure reported by the service, if that is what this error is
    pub fn record(&self) -> Option<&ErrorRecord> {
        match self {
            FlickrError::ApiResponse(record) => Some(record),
            _ => None,
        }
    }
}

/// Failure reported by the service for a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Remote method that was called, e.g. `flickr.people.getPublicPhotos`
    pub method: String,
    pub code: u32,
    pub message: String,
}

impl ErrorRecord {
    /// Maps the code onto the error codes every method can return.
    ///
    /// Method specific codes (1 through 94) are not standard and return an error.
    pub fn standard_code(&self) -> Result<ApiErrorCodes, FlickrError> {
        Ok(ApiErrorCodes::try_from(self.code)?)
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed with code {}: {}", self.method, self.code, self.message)
    }
}
