use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, ResolveResult};

/// Parsed form of a JA3 fingerprint string.
///
/// Extension identifiers stay as strings: they key the registry and surface
/// verbatim in unsupported-extension errors. The version token is kept in
/// string form for a later extension-version mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ja3Descriptor {
    pub tls_version: String,
    pub cipher_suites: Vec<u16>,
    pub extension_ids: Vec<String>,
    pub curves: Vec<u16>,
    pub point_formats: Vec<u8>,
}

impl Ja3Descriptor {
    /// Splits and validates the five comma fields of a JA3 string.
    ///
    /// An empty list field decodes to an empty list, not to a one-element
    /// list holding the empty string.
    pub fn parse(ja3: &str) -> ResolveResult<Self> {
        let fields: Vec<&str> = ja3.split(',').collect();
        if fields.len() != 5 {
            return Err(ResolveError::MalformedInput(format!(
                "expected 5 comma-separated fields, found {}",
                fields.len()
            )));
        }

        // The token itself is retained; it still has to be a valid u16.
        parse_u16(fields[0])?;

        Ok(Self {
            tls_version: fields[0].to_string(),
            cipher_suites: dash_list(fields[1], parse_u16)?,
            extension_ids: dash_tokens(fields[2]),
            curves: dash_list(fields[3], parse_u16)?,
            point_formats: dash_list(fields[4], parse_u8)?,
        })
    }
}

fn dash_tokens(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field.split('-').map(str::to_string).collect()
}

fn dash_list<T>(field: &str, parse: fn(&str) -> ResolveResult<T>) -> ResolveResult<Vec<T>> {
    if field.is_empty() {
        return Ok(Vec::new());
    }
    field.split('-').map(parse).collect()
}

fn parse_u16(token: &str) -> ResolveResult<u16> {
    token
        .parse::<u16>()
        .map_err(|_| ResolveError::MalformedInput(format!("non-numeric token `{token}`")))
}

fn parse_u8(token: &str) -> ResolveResult<u8> {
    token
        .parse::<u8>()
        .map_err(|_| ResolveError::MalformedInput(format!("non-numeric token `{token}`")))
}
