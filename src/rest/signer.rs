/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use std::collections::BTreeMap;

/// Computes the `api_sig` value for a set of request parameters.
///
/// The secret is followed by every parameter name and value, ordered by name, and the
/// MD5 of that string is returned as lowercase hex. An absent value signs as an empty
/// string.
///
/// Returns `None` when there is no secret, as unauthenticated calls are sent unsigned.
pub fn sign(secret: Option<&str>, params: &[(&str, Option<&str>)]) -> Option<String> {
    let secret = secret.filter(|s| !s.is_empty())?;

    let sorted: BTreeMap<&str, &str> = params
        .iter()
        .map(|(name, value)| (*name, value.unwrap_or_default()))
        .collect();

    let mut payload = String::from(secret);
    for (name, value) in sorted {
        payload.push_str(name);
        payload.push_str(value);
    }
    Some(format!("{:x}", md5::compute(payload.as_bytes())))
}
