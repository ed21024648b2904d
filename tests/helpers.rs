/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use flickr::rest::{Client, ClientConfig, Creds};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub(crate) const REST_PATH: &str = "/services/rest/";

#[allow(dead_code)]
pub(crate) fn get_read_only_creds() -> anyhow::Result<Creds> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    Ok(Creds::from_tokens(&api_key, None, None))
}

#[allow(dead_code)]
pub(crate) fn get_full_creds() -> anyhow::Result<Creds> {
    Ok(Creds::from_env()?)
}

/// Client pointed at the mock server
#[allow(dead_code)]
pub(crate) fn client_for(server: &MockServer, secret: Option<&str>) -> Client {
    Client::with_config(
        Creds::from_tokens("test-key", secret, None),
        ClientConfig::with_base_url(&server.uri()),
    )
}

/// One page of a photo listing holding the given photo ids
#[allow(dead_code)]
pub(crate) fn photos_page(page: u32, pages: u32, per_page: u32, total: u64, ids: &[&str]) -> String {
    let photos: String = ids
        .iter()
        .map(|id| {
            format!(
                r#"<photo id="{id}" owner="47058503995@N01" secret="s{id}" server="2" farm="1" title="photo {id}" ispublic="1" isfriend="0" isfamily="0" license="4" dateupload="1100897479" datetaken="2004-11-19 12:51:19" ownername="Bees" originalsecret="o{id}" originalformat="png" tags="cat dog" />"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="ok">
<photos page="{page}" pages="{pages}" perpage="{per_page}" total="{total}">
{photos}
</photos>
</rsp>"#
    )
}

/// Body of a failed call
#[allow(dead_code)]
pub(crate) fn fail_body(code: u32, msg: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="fail">
    <err code="{code}" msg="{msg}" />
</rsp>"#
    )
}

/// Serves `body` for `api_method`, expecting it to be called `times` times
#[allow(dead_code)]
pub(crate) async fn mount_method(server: &MockServer, api_method: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(REST_PATH))
        .and(query_param("method", api_method))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Serves `body` for one page of the public photo listing
#[allow(dead_code)]
pub(crate) async fn mount_page(server: &MockServer, page: u32, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(REST_PATH))
        .and(query_param("method", "flickr.people.getPublicPhotos"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(times)
        .mount(server)
        .await;
}
