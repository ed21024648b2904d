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
use flickr::rest::{Client, Creds, Permission};
use std::io::BufRead;

// Walks through the desktop authentication handshake and prints the session token.
// NOTE: FLICKR_API_SECRET must be set, the handshake calls are all signed.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let mut client = Client::new(Creds::from_env()?);

    let frob = client.frob().await?;
    let url = client.auth_url(&frob, Permission::Read)?;
    println!("Authorize this application at:\n{url}\nthen press enter");

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    let auth = client.get_token(&frob).await?;
    println!(
        "Token for {} ({:?} access): {}",
        auth.user.username, auth.perms, auth.token
    );

    let checked = client.check_token(&auth.token).await?;
    println!("Token is valid for {}", checked.user.nsid);
    Ok(())
}
