use thiserror::Error;

/// Terminal failures from fingerprint resolution.
///
/// Both kinds are deterministic for a given input: retrying cannot succeed,
/// the caller must correct the string or the registry must grow an entry.
/// No fallback plan is ever returned; a partial extension set would change
/// the handshake's fingerprint.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The JA3 string is structurally invalid.
    #[error("malformed ja3 string: {0}")]
    MalformedInput(String),

    /// The extension-order field names an identifier with no registry entry.
    #[error("unsupported extension id {identifier}, no registry entry")]
    UnsupportedExtension { identifier: String },
}

pub type ResolveResult<T> = Result<T, ResolveError>;
