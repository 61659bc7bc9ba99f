use bytes::BytesMut;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::extension::ExtensionDescriptor;

/// Digest contract for deriving the ClientHello session_id field from
/// caller-supplied session material. The algorithm is part of the emulated
/// fingerprint, so the variant set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionIdDigest {
    Sha256,
}

impl SessionIdDigest {
    /// Derives the 32-byte session id.
    pub fn derive(&self, material: &[u8]) -> [u8; 32] {
        match self {
            Self::Sha256 => Sha256::digest(material).into(),
        }
    }
}

/// Fully-resolved ClientHello construction plan.
///
/// Consumed as-is by a handshake engine. Cipher and extension order are part
/// of the fingerprint and must not be rearranged downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientHelloPlan {
    pub cipher_suites: Vec<u16>,
    pub extensions: Vec<ExtensionDescriptor>,
    pub compression_methods: Vec<u8>,
    pub session_id: SessionIdDigest,
}

impl ClientHelloPlan {
    /// Appends every extension's wire form, in plan order, to `out`.
    pub fn encode_extensions_into(&self, out: &mut BytesMut) {
        for ext in &self.extensions {
            ext.encode_into(out);
        }
    }
}
