/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{self, fail_body, mount_method};
    use dotenvy::dotenv;
    use flickr::rest::{ApiErrorCodes, Client, Permission, User};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const AUTH_BODY: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="ok">
<auth>
    <token>976598454353455</token>
    <perms>write</perms>
    <user nsid="12037949754@N01" username="Bees" fullname="Cal H" />
</auth>
</rsp>"#;

    #[tokio::test]
    async fn frob_request_is_signed() {
        let server = MockServer::start().await;
        let api_sig = format!(
            "{:x}",
            md5::compute("secretapi_keytest-keymethodflickr.auth.getFrob")
        );
        Mock::given(method("GET"))
            .and(path(helpers::REST_PATH))
            .and(query_param("method", "flickr.auth.getFrob"))
            .and(query_param("api_key", "test-key"))
            .and(query_param("api_sig", api_sig))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<rsp stat="ok"><frob>746563215463214621</frob></rsp>"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = helpers::client_for(&server, Some("secret"));
        assert_eq!(client.frob().await.unwrap(), "746563215463214621");
    }

    #[tokio::test]
    async fn auth_url_points_at_the_auth_endpoint() {
        let server = MockServer::start().await;
        let client = helpers::client_for(&server, Some("secret"));
        let url = client.auth_url("746563215463214621", Permission::Delete).unwrap();

        assert!(url.as_str().starts_with(&format!("{}/services/auth/?", server.uri())));
        assert!(url.query_pairs().any(|(k, v)| k == "perms" && v == "delete"));
        assert!(url.query_pairs().any(|(k, _)| k == "api_sig"));
    }

    #[tokio::test]
    async fn token_exchange_stores_the_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(helpers::REST_PATH))
            .and(query_param("method", "flickr.auth.getToken"))
            .and(query_param("frob", "746563215463214621"))
            .respond_with(ResponseTemplate::new(200).set_body_string(AUTH_BODY))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(helpers::REST_PATH))
            .and(query_param("method", "flickr.people.findByUsername"))
            .and(query_param("auth_token", "976598454353455"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<rsp stat="ok"><user id="12037949754@N01" nsid="12037949754@N01"><username>Bees</username></user></rsp>"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = helpers::client_for(&server, Some("secret"));
        let auth = client.get_token("746563215463214621").await.unwrap();

        assert_eq!(auth.token, "976598454353455");
        assert_eq!(auth.perms, Permission::Write);
        assert_eq!(auth.user.nsid, "12037949754@N01");
        assert_eq!(client.creds().auth_token(), Some("976598454353455"));

        // Later calls carry the new token
        let user = User::from_username(client.clone(), "Bees").await.unwrap();
        assert_eq!(user.nsid, "12037949754@N01");
    }

    #[tokio::test]
    async fn failed_exchange_keeps_the_old_token() {
        let server = MockServer::start().await;
        mount_method(&server, "flickr.auth.getToken", fail_body(108, "Invalid frob"), 1).await;

        let mut client = helpers::client_for(&server, Some("secret"));
        let err = client.get_token("stale").await.unwrap_err();

        assert_eq!(err.record().unwrap().code, 108);
        assert_eq!(client.creds().auth_token(), None);
    }

    #[tokio::test]
    async fn check_token_reports_invalid_tokens() {
        let server = MockServer::start().await;
        mount_method(&server, "flickr.auth.checkToken", fail_body(98, "Invalid auth token"), 1)
            .await;

        let client = helpers::client_for(&server, Some("secret"));
        let err = client.check_token("expired").await.unwrap_err();
        let record = err.record().unwrap();

        assert_eq!(record.method, "flickr.auth.checkToken");
        assert_eq!(record.standard_code().unwrap(), ApiErrorCodes::LoginFailed);
    }

    #[tokio::test]
    async fn check_token_returns_the_grant() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(helpers::REST_PATH))
            .and(query_param("method", "flickr.auth.checkToken"))
            .and(query_param("auth_token", "976598454353455"))
            .respond_with(ResponseTemplate::new(200).set_body_string(AUTH_BODY))
            .expect(1)
            .mount(&server)
            .await;

        let client = helpers::client_for(&server, Some("secret"));
        let auth = client.check_token("976598454353455").await.unwrap();
        assert_eq!(auth.user.username, "Bees");
    }

    // Needs FLICKR_API_KEY, FLICKR_API_SECRET and FLICKR_AUTH_TOKEN
    #[ignore]
    #[tokio::test]
    async fn live_check_token() {
        dotenv().ok();
        let creds = helpers::get_full_creds().unwrap();
        let token = creds.auth_token().unwrap().to_string();
        let client = Client::new(creds);
        let auth = client.check_token(&token).await.unwrap();
        println!("Auth info: {:?}", auth);
    }
}
