/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::Permission;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde::de::Error;
use std::str::FromStr;

// Format of the "taken" dates
const TAKEN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Parses "0"/"1" flags
pub fn from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    match s.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" | "" => Ok(false),
        other => Err(D::Error::custom(format!("invalid flag '{other}'"))),
    }
}

// Parses strings that may be "" and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    if s.is_empty() { Ok(None) } else { Ok(Some(s)) }
}

// Parses unix timestamps given as strings. "" and "0" mean unknown
pub fn from_unix_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    let s = s.trim();
    if s.is_empty() || s == "0" {
        return Ok(None);
    }
    let secs: i64 = s.parse().map_err(D::Error::custom)?;
    Ok(DateTime::from_timestamp(secs, 0))
}

// Parses "taken" dates. Photos without a taken date report all zeros
pub fn from_taken_date<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Ok(NaiveDateTime::parse_from_str(s.trim(), TAKEN_FORMAT).ok())
}

// Parses permission levels, anything unknown grants nothing
pub fn from_permission<'de, D>(deserializer: D) -> Result<Permission, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Permission::from_str(s.trim()).or(Ok(Permission::NoAccess))
}

// Splits the space separated tag list
pub fn from_tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Ok(s.split_whitespace().map(String::from).collect())
}
