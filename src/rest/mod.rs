/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod auth;
pub mod client;
pub mod errors;
pub mod listing;
mod parsers;
pub mod photo;
pub mod signer;
pub mod urls;
pub mod user;

pub use api::*;
pub use auth::*;
pub use client::*;
pub use errors::*;
pub use listing::*;
pub use photo::*;
pub use signer::*;
pub use urls::*;
pub use user::*;
