/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::{ApiClient, ApiParams, ClientConfig, Creds};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Handle used by all the API objects to talk to the service.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
}

impl Client {
    pub fn new(creds: Creds) -> Self {
        Self {
            api_client: Arc::new(ApiClient::new(creds)),
        }
    }

    /// Creates a client talking to the endpoints in `config`
    pub fn with_config(creds: Creds, config: ClientConfig) -> Self {
        Self {
            api_client: Arc::new(ApiClient::with_config(creds, config)),
        }
    }

    /// Replaces the session token used by this client.
    ///
    /// Clones made before this call keep their previous token.
    pub fn set_auth_token(&mut self, token: &str) {
        Arc::make_mut(&mut self.api_client).creds.auth_token = Some(token.into());
    }

    pub fn creds(&self) -> &Creds {
        &self.api_client.creds
    }

    pub(crate) fn api_client(&self) -> &ApiClient {
        &self.api_client
    }

    /// Calls a remote method and decodes its response
    pub async fn get<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &ApiParams<'_>,
    ) -> Result<Option<T>, FlickrError> {
        self.api_client.get(method, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_auth_token_only_changes_this_handle() {
        let original = Client::new(Creds::from_tokens("key", Some("secret"), None));
        let mut authed = original.clone();
        authed.set_auth_token("token");

        assert_eq!(authed.creds().auth_token(), Some("token"));
        assert_eq!(original.creds().auth_token(), None);
        assert_eq!(authed.creds().api_key(), "key");
    }
}
