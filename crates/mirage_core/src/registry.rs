use std::collections::HashMap;

use once_cell::sync::Lazy;

use mirage_traits::{ExtensionDescriptor, KeyShareEntry, GREASE_PLACEHOLDER};

/// Offered protocol versions, newest first, GREASE leading.
const SUPPORTED_VERSIONS: [u16; 5] = [GREASE_PLACEHOLDER, 0x0304, 0x0303, 0x0302, 0x0301];

/// ECDSA P-256/384/521, RSA-PSS, RSA-PKCS1, then the legacy SHA-1 pair.
const SIGNATURE_SCHEMES: [u16; 11] = [
    0x0403, 0x0503, 0x0603, 0x0804, 0x0805, 0x0806, 0x0401, 0x0501, 0x0601, 0x0203, 0x0201,
];

/// Fixed-content extension templates, keyed by their JA3 identifier token.
///
/// Ids 10 and 11 are deliberately missing: curves and point formats are
/// synthesized per call from the fingerprint's own fields. The payloads here
/// pin one browser's canonical content; editing them changes which browser
/// the resolved hello impersonates.
static REGISTRY: Lazy<HashMap<&'static str, ExtensionDescriptor>> = Lazy::new(|| {
    HashMap::from([
        (
            "0",
            ExtensionDescriptor::ServerName {
                host: String::new(),
            },
        ),
        ("5", ExtensionDescriptor::StatusRequest),
        (
            "13",
            ExtensionDescriptor::SignatureAlgorithms {
                schemes: SIGNATURE_SCHEMES.to_vec(),
            },
        ),
        (
            "16",
            ExtensionDescriptor::Alpn {
                protocols: vec!["h2".to_string(), "http/1.1".to_string()],
            },
        ),
        ("18", ExtensionDescriptor::SignedCertTimestamp),
        ("21", ExtensionDescriptor::Padding),
        // encrypt_then_mac, identifier-only placeholder
        (
            "22",
            ExtensionDescriptor::Opaque {
                id: 22,
                payload: Vec::new(),
            },
        ),
        ("23", ExtensionDescriptor::ExtendedMasterSecret),
        (
            "27",
            ExtensionDescriptor::CertificateCompression {
                algorithms: vec![2], // brotli
            },
        ),
        ("28", ExtensionDescriptor::RecordSizeLimit { limit: 0x4001 }),
        (
            "34",
            ExtensionDescriptor::Opaque {
                id: 34,
                payload: Vec::new(),
            },
        ),
        ("35", ExtensionDescriptor::SessionTicket),
        // pre_shared_key: real binders are a handshake-time product, this
        // entry only keeps the extension order intact
        (
            "41",
            ExtensionDescriptor::Opaque {
                id: 41,
                payload: Vec::new(),
            },
        ),
        (
            "43",
            ExtensionDescriptor::SupportedVersions {
                versions: SUPPORTED_VERSIONS.to_vec(),
            },
        ),
        ("44", ExtensionDescriptor::Cookie),
        (
            "45",
            ExtensionDescriptor::PskKeyExchangeModes {
                modes: vec![1], // psk_dhe_ke
            },
        ),
        // post_handshake_auth, identifier-only placeholder
        (
            "49",
            ExtensionDescriptor::Opaque {
                id: 49,
                payload: Vec::new(),
            },
        ),
        // signature_algorithms_cert, identifier-only placeholder
        (
            "50",
            ExtensionDescriptor::Opaque {
                id: 50,
                payload: Vec::new(),
            },
        ),
        (
            "51",
            ExtensionDescriptor::KeyShare {
                entries: vec![
                    KeyShareEntry {
                        group: GREASE_PLACEHOLDER,
                        data: vec![0],
                    },
                    KeyShareEntry {
                        group: 0x001d, // x25519, key data engine-completed
                        data: Vec::new(),
                    },
                ],
            },
        ),
        (
            "30032",
            ExtensionDescriptor::Opaque {
                id: 0x7550,
                payload: vec![0],
            },
        ),
        ("13172", ExtensionDescriptor::NextProtoNegotiation),
        ("65281", ExtensionDescriptor::RenegotiationInfo),
    ])
});

/// Looks up the template for a fixed-content extension identifier.
pub fn lookup(id: &str) -> Option<ExtensionDescriptor> {
    REGISTRY.get(id).cloned()
}
