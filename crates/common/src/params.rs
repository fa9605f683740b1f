//! Request parameter coercion helpers
//!
//! Path and query parameters arrive as strings; these helpers coerce them
//! into typed values and report the offending parameter name on failure.
//! They operate on the string maps produced by axum's
//! `Path<HashMap<String, String>>` and `Query<HashMap<String, String>>`
//! extractors.

use std::collections::HashMap;

use crate::error::Error;

fn missing(name: &str) -> Error {
    Error::InvalidParameter {
        name: name.to_string(),
        message: format!("no {name}"),
    }
}

fn invalid(name: &str) -> Error {
    Error::InvalidParameter {
        name: name.to_string(),
        message: format!("invalid {name}"),
    }
}

fn non_empty<'a>(map: &'a HashMap<String, String>, name: &str) -> Result<&'a str, Error> {
    match map.get(name).map(String::as_str) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(missing(name)),
    }
}

/// Read a named path parameter and coerce it to an integer.
pub fn path_int(params: &HashMap<String, String>, name: &str) -> Result<i64, Error> {
    non_empty(params, name)?
        .parse::<i64>()
        .map_err(|_| invalid(name))
}

/// Read a named query parameter and coerce it to an integer.
pub fn query_int(query: &HashMap<String, String>, name: &str) -> Result<i64, Error> {
    non_empty(query, name)?
        .parse::<i64>()
        .map_err(|_| invalid(name))
}

/// Read a named query parameter and coerce it to a boolean.
///
/// Accepts `1`, `t`, `T`, `true`, `TRUE`, `True` and their false
/// counterparts; anything else is invalid.
pub fn query_bool(query: &HashMap<String, String>, name: &str) -> Result<bool, Error> {
    match non_empty(query, name)? {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(invalid(name)),
    }
}
