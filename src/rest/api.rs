/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::{ErrorRecord, FlickrError};
use crate::rest::signer::sign;
use num_enum::TryFromPrimitive;
use serde::Deserialize;
use serde::de::DeserializeOwned;

// Root Flickr REST endpoint
pub const API_ENDPOINT: &str = "http://api.flickr.com/services/rest/";

// Where users are sent to authorize a frob
pub const AUTH_ENDPOINT: &str = "http://flickr.com/services/auth/";

const USER_AGENT: &str = concat!("flickr-rs/", env!("CARGO_PKG_VERSION"));

/// Parameters passed to a remote method. Parameters with a `None` value are not sent.
pub type ApiParams<'a> = [(&'a str, Option<&'a str>)];

/// Where and how the client talks to the service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub auth_endpoint: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: API_ENDPOINT.into(),
            auth_endpoint: AUTH_ENDPOINT.into(),
            user_agent: USER_AGENT.into(),
        }
    }
}

impl ClientConfig {
    /// Points both the REST and the auth endpoints under the given base url
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            endpoint: format!("{base_url}/services/rest/"),
            auth_endpoint: format!("{base_url}/services/auth/"),
            ..Default::default()
        }
    }
}

/// Directly communicates with the API.
#[derive(Default, Clone)]
pub struct ApiClient {
    pub(crate) creds: Creds,
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new API client from the provided credentials
    pub fn new(creds: Creds) -> Self {
        Self::with_config(creds, ClientConfig::default())
    }

    /// Creates a new API client talking to the endpoints in `config`
    pub fn with_config(creds: Creds, config: ClientConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .unwrap_or_else(|err| {
                log::warn!("falling back to a default http client: {err}");
                reqwest::Client::new()
            });
        Self {
            creds,
            config,
            http_client,
        }
    }

    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the full request url for a remote method.
    ///
    /// `method` and `api_key` lead, the remaining parameters follow sorted by name
    /// ignoring case, and `api_sig` closes the query when a secret is configured.
    pub fn request_url(
        &self,
        method: &str,
        params: &ApiParams<'_>,
    ) -> Result<url::Url, FlickrError> {
        let mut sorted: Vec<(&str, &str)> = params
            .iter()
            .filter_map(|(name, value)| value.map(|v| (*name, v)))
            .collect();
        if !sorted.iter().any(|(name, _)| *name == "auth_token") {
            if let Some(token) = self.creds.auth_token.as_deref() {
                sorted.push(("auth_token", token));
            }
        }
        sorted.sort_by_key(|(name, _)| name.to_lowercase());

        let mut query: Vec<(&str, &str)> = Vec::with_capacity(sorted.len() + 3);
        query.push(("method", method));
        query.push(("api_key", self.creds.api_key.as_str()));
        query.extend(sorted);

        let signed: Vec<(&str, Option<&str>)> =
            query.iter().map(|(name, value)| (*name, Some(*value))).collect();
        let api_sig = sign(self.creds.api_secret.as_deref(), &signed);
        if let Some(api_sig) = api_sig.as_deref() {
            query.push(("api_sig", api_sig));
        }

        Ok(url::Url::parse_with_params(&self.config.endpoint, &query)?)
    }

    /// Calls a remote method and decodes the `<rsp>` envelope into `T`.
    ///
    /// An empty body returns `Ok(None)`. A `fail` status returns the reported
    /// [`ErrorRecord`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &ApiParams<'_>,
    ) -> Result<Option<T>, FlickrError> {
        let req_url = self.request_url(method, params)?;
        log::debug!("calling {method}");
        let body = self
            .http_client
            .get(req_url)
            .send()
            .await?
            .text()
            .await?;
        parse_response(method, &body)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("creds", &self.creds)
            .field("endpoint", &self.config.endpoint)
            .finish()
    }
}

/// Decodes a response body returned for `method`
pub(crate) fn parse_response<T: DeserializeOwned>(
    method: &str,
    body: &str,
) -> Result<Option<T>, FlickrError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let status: ResponseStatus = quick_xml::de::from_str(body)?;
    status.into_result(method)?;
    Ok(Some(quick_xml::de::from_str(body)?))
}

/// Error codes that every method can return per the Flickr API site
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiErrorCodes {
    SslRequired = 95,
    InvalidSignature = 96,
    MissingSignature = 97,
    LoginFailed = 98,
    InsufficientPermissions = 99,
    InvalidApiKey = 100,
    ServiceUnavailable = 105,
    WriteOperationFailed = 106,
    FormatNotFound = 111,
    MethodNotFound = 112,
    InvalidSoapEnvelope = 114,
    InvalidXmlRpcCall = 115,
    BadUrlFound = 116,
}

/// Keys and tokens used to call the API
#[derive(Default, Clone)]
pub struct Creds {
    api_key: String,
    api_secret: Option<String>,
    pub(crate) auth_token: Option<String>,
}

impl Creds {
    pub fn from_tokens(api_key: &str, api_secret: Option<&str>, auth_token: Option<&str>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.map(String::from),
            auth_token: auth_token.map(String::from),
        }
    }

    /// Reads `FLICKR_API_KEY` and the optional `FLICKR_API_SECRET` and `FLICKR_AUTH_TOKEN`
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            api_key: std::env::var("FLICKR_API_KEY")?,
            api_secret: std::env::var("FLICKR_API_SECRET").ok(),
            auth_token: std::env::var("FLICKR_AUTH_TOKEN").ok(),
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> Option<&str> {
        self.api_secret.as_deref()
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("api_key", &"xxx")
            .field("api_secret", &"xxx")
            .field("auth_token", &"xxx")
            .finish()
    }
}

// Status part of every response body
#[derive(Deserialize, Debug)]
struct ResponseStatus {
    #[serde(rename = "@stat")]
    stat: String,

    #[serde(rename = "err")]
    err: Option<ResponseError>,
}

#[derive(Deserialize, Debug)]
struct ResponseError {
    #[serde(rename = "@code")]
    code: u32,

    #[serde(rename = "@msg")]
    msg: String,
}

impl ResponseStatus {
    fn into_result(self, method: &str) -> Result<(), FlickrError> {
        match (self.stat.as_str(), self.err) {
            ("ok", _) => Ok(()),
            (_, Some(err)) => Err(FlickrError::ApiResponse(ErrorRecord {
                method: method.into(),
                code: err.code,
                message: err.msg,
            })),
            (stat, None) => {
                log::warn!("{method} returned status '{stat}' without an error");
                Err(FlickrError::UnknownStatus(stat.into()))
            }
        }
    }
}
