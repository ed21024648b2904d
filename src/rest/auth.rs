/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
//! Desktop application authentication.
//!
//! The handshake is: get a frob, send the user to [`Client::auth_url`] to approve it,
//! then trade the frob for a session token with [`Client::get_token`].
use crate::rest::errors::FlickrError;
use crate::rest::parsers::from_permission;
use crate::rest::signer::sign;
use crate::rest::Client;
use serde::Deserialize;
use strum_macros::{EnumString, IntoStaticStr};

/// Access level requested from, or granted by, the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Permission {
    #[strum(serialize = "none")]
    NoAccess,
    Read,
    Write,
    Delete,
}

/// Session token and the account it belongs to
#[derive(Deserialize, Debug, Clone)]
pub struct Auth {
    #[serde(rename = "token")]
    pub token: String,

    #[serde(rename = "perms", deserialize_with = "from_permission")]
    pub perms: Permission,

    #[serde(rename = "user")]
    pub user: AuthUser,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AuthUser {
    #[serde(rename = "@nsid")]
    pub nsid: String,

    #[serde(default, rename = "@username")]
    pub username: String,

    #[serde(default, rename = "@fullname")]
    pub full_name: String,
}

impl Client {
    /// Gets a frob to start the handshake with
    pub async fn frob(&self) -> Result<String, FlickrError> {
        self.get::<FrobResponse>("flickr.auth.getFrob", &[])
            .await?
            .ok_or(FlickrError::ResponseMissing())
            .map(|v| v.frob)
    }

    /// Url the user visits to grant `perms` for the given frob
    pub fn auth_url(&self, frob: &str, perms: Permission) -> Result<url::Url, FlickrError> {
        let api_client = self.api_client();
        let creds = &api_client.creds;
        let perms: &'static str = perms.into();
        let mut query = vec![("api_key", creds.api_key()), ("perms", perms), ("frob", frob)];

        let signed: Vec<(&str, Option<&str>)> =
            query.iter().map(|(name, value)| (*name, Some(*value))).collect();
        let api_sig = sign(creds.api_secret(), &signed);
        if let Some(api_sig) = api_sig.as_deref() {
            query.push(("api_sig", api_sig));
        }
        Ok(url::Url::parse_with_params(
            &api_client.config().auth_endpoint,
            &query,
        )?)
    }

    /// Trades an approved frob for a session token.
    ///
    /// On success this client uses the new token for its following calls.
    pub async fn get_token(&mut self, frob: &str) -> Result<Auth, FlickrError> {
        let auth = self
            .get::<AuthResponse>("flickr.auth.getToken", &[("frob", Some(frob))])
            .await?
            .ok_or(FlickrError::ResponseMissing())?
            .auth;
        log::debug!("received a {:?} token for {}", auth.perms, auth.user.nsid);
        self.set_auth_token(&auth.token);
        Ok(auth)
    }

    /// Returns what the given token grants, failing if it is no longer valid
    pub async fn check_token(&self, token: &str) -> Result<Auth, FlickrError> {
        self.get::<AuthResponse>("flickr.auth.checkToken", &[("auth_token", Some(token))])
            .await?
            .ok_or(FlickrError::ResponseMissing())
            .map(|v| v.auth)
    }
}

#[derive(Deserialize, Debug)]
struct FrobResponse {
    #[serde(rename = "frob")]
    frob: String,
}

#[derive(Deserialize, Debug)]
struct AuthResponse {
    #[serde(rename = "auth")]
    auth: Auth,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::api::parse_response;
    use crate::rest::Creds;

    #[test]
    fn auth_url_is_signed() {
        let client = Client::new(Creds::from_tokens("key", Some("secret"), None));
        let url = client.auth_url("frob1", Permission::Write).unwrap();
        assert!(url.as_str().starts_with("http://flickr.com/services/auth/?"));

        let expected = format!("{:x}", md5::compute("secretapi_keykeyfrobfrob1permswrite"));
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("api_key".to_string(), "key".to_string()),
                ("perms".to_string(), "write".to_string()),
                ("frob".to_string(), "frob1".to_string()),
                ("api_sig".to_string(), expected),
            ]
        );
    }

    #[test]
    fn auth_url_without_secret_is_unsigned() {
        let client = Client::new(Creds::from_tokens("key", None, None));
        let url = client.auth_url("frob1", Permission::Read).unwrap();
        assert!(!url.as_str().contains("api_sig"));
    }

    #[test]
    fn auth_response_is_decoded() {
        let xml = r#"<rsp stat="ok">
<auth>
    <token>976598454353455</token>
    <perms>write</perms>
    <user nsid="12037949754@N01" username="Bees" fullname="Cal H" />
</auth>
</rsp>"#;
        let auth = parse_response::<AuthResponse>("flickr.auth.getToken", xml)
            .unwrap()
            .unwrap()
            .auth;
        assert_eq!(auth.token, "976598454353455");
        assert_eq!(auth.perms, Permission::Write);
        assert_eq!(auth.user.username, "Bees");
        assert_eq!(auth.user.full_name, "Cal H");
    }
}
