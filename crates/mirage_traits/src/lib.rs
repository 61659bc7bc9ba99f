pub mod extension;
pub mod grease;
pub mod plan;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use extension::{boring_padding_len, ExtensionDescriptor, KeyShareEntry};
pub use grease::{is_grease, random_grease, GREASE_PLACEHOLDER, GREASE_VALUES};
pub use plan::{ClientHelloPlan, SessionIdDigest};

/// Outcome of a completed handshake, as reported by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandshakeReport {
    pub negotiated_version: u16,
    pub negotiated_cipher: u16,
    pub alpn: Option<String>,
}

#[async_trait]
pub trait HandshakeEngine: Send + Sync {
    /// Performs the TLS handshake against `server_name`, emitting the
    /// ClientHello exactly as the plan prescribes. Engines must not reorder
    /// ciphers or extensions; that order is the fingerprint.
    async fn handshake(
        &self,
        plan: &ClientHelloPlan,
        server_name: &str,
    ) -> anyhow::Result<HandshakeReport>;
}
