use bytes::{BufMut, BytesMut};
use serde::{Deserialize, Serialize};

use crate::grease::GREASE_PLACEHOLDER;

/// One key_share entry: a named group plus its key exchange data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyShareEntry {
    pub group: u16,
    pub data: Vec<u8>,
}

/// Closed set of ClientHello extensions the planner can emit.
///
/// Payloads are either fingerprint constants or engine-completed placeholders
/// (SNI host, x25519 key data, padding body). Position in the plan's
/// extension list is what carries meaning, not the variant order here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtensionDescriptor {
    /// server_name (0). Host is empty in templates; the engine fills in the target.
    ServerName { host: String },
    /// status_request (5): OCSP, empty responder and request lists.
    StatusRequest,
    /// signature_algorithms (13).
    SignatureAlgorithms { schemes: Vec<u16> },
    /// application_layer_protocol_negotiation (16).
    Alpn { protocols: Vec<String> },
    /// signed_certificate_timestamp (18).
    SignedCertTimestamp,
    /// padding (21). Body is sized by the engine, see [`boring_padding_len`].
    Padding,
    /// extended_master_secret (23).
    ExtendedMasterSecret,
    /// compress_certificate (27).
    CertificateCompression { algorithms: Vec<u16> },
    /// record_size_limit (28).
    RecordSizeLimit { limit: u16 },
    /// session_ticket (35), offering an empty ticket.
    SessionTicket,
    /// Identifier-only stand-in for extensions whose payload is not reproduced.
    Opaque { id: u16, payload: Vec<u8> },
    /// supported_versions (43).
    SupportedVersions { versions: Vec<u16> },
    /// cookie (44).
    Cookie,
    /// psk_key_exchange_modes (45).
    PskKeyExchangeModes { modes: Vec<u8> },
    /// key_share (51). X25519 key data is engine-completed.
    KeyShare { entries: Vec<KeyShareEntry> },
    /// next_protocol_negotiation (13172), empty in the ClientHello direction.
    NextProtoNegotiation,
    /// renegotiation_info (65281), renegotiate-once-as-client.
    RenegotiationInfo,
    /// supported_groups (10), synthesized from the fingerprint's curve field.
    SupportedCurves { curves: Vec<u16> },
    /// ec_point_formats (11), synthesized from the fingerprint's point field.
    SupportedPoints { formats: Vec<u8> },
    /// GREASE marker; engines may swap the placeholder for any GREASE value.
    Grease,
}

impl ExtensionDescriptor {
    /// Numeric extension type as it appears on the wire.
    pub fn extension_id(&self) -> u16 {
        match self {
            Self::ServerName { .. } => 0,
            Self::StatusRequest => 5,
            Self::SupportedCurves { .. } => 10,
            Self::SupportedPoints { .. } => 11,
            Self::SignatureAlgorithms { .. } => 13,
            Self::Alpn { .. } => 16,
            Self::SignedCertTimestamp => 18,
            Self::Padding => 21,
            Self::ExtendedMasterSecret => 23,
            Self::CertificateCompression { .. } => 27,
            Self::RecordSizeLimit { .. } => 28,
            Self::SessionTicket => 35,
            Self::SupportedVersions { .. } => 43,
            Self::Cookie => 44,
            Self::PskKeyExchangeModes { .. } => 45,
            Self::KeyShare { .. } => 51,
            Self::NextProtoNegotiation => 13172,
            Self::RenegotiationInfo => 65281,
            Self::Opaque { id, .. } => *id,
            Self::Grease => GREASE_PLACEHOLDER,
        }
    }

    /// True for GREASE markers.
    pub fn is_grease_marker(&self) -> bool {
        matches!(self, Self::Grease)
    }

    /// Appends the wire form (u16 type, u16 body length, body) to `out`.
    pub fn encode_into(&self, out: &mut BytesMut) {
        out.put_u16(self.extension_id());
        out.put_u16(0); // length, backpatched once the body has landed
        let body_start = out.len();
        self.encode_body_into(out);
        let body_len = (out.len() - body_start) as u16;
        out[body_start - 2..body_start].copy_from_slice(&body_len.to_be_bytes());
    }

    fn encode_body_into(&self, out: &mut BytesMut) {
        match self {
            Self::ServerName { host } => {
                // server_name_list with a single host_name entry
                out.put_u16((host.len() + 3) as u16);
                out.put_u8(0);
                out.put_u16(host.len() as u16);
                out.put_slice(host.as_bytes());
            }
            Self::StatusRequest => {
                out.put_u8(1); // OCSP
                out.put_u16(0); // responder_id_list
                out.put_u16(0); // request_extensions
            }
            Self::SignatureAlgorithms { schemes } => {
                out.put_u16((schemes.len() * 2) as u16);
                for scheme in schemes {
                    out.put_u16(*scheme);
                }
            }
            Self::Alpn { protocols } => {
                let list_len: usize = protocols.iter().map(|p| p.len() + 1).sum();
                out.put_u16(list_len as u16);
                for proto in protocols {
                    out.put_u8(proto.len() as u8);
                    out.put_slice(proto.as_bytes());
                }
            }
            Self::CertificateCompression { algorithms } => {
                out.put_u8((algorithms.len() * 2) as u8);
                for alg in algorithms {
                    out.put_u16(*alg);
                }
            }
            Self::RecordSizeLimit { limit } => out.put_u16(*limit),
            Self::SupportedVersions { versions } => {
                out.put_u8((versions.len() * 2) as u8);
                for version in versions {
                    out.put_u16(*version);
                }
            }
            Self::PskKeyExchangeModes { modes } => {
                out.put_u8(modes.len() as u8);
                out.put_slice(modes);
            }
            Self::KeyShare { entries } => {
                let total: usize = entries.iter().map(|e| e.data.len() + 4).sum();
                out.put_u16(total as u16);
                for entry in entries {
                    out.put_u16(entry.group);
                    out.put_u16(entry.data.len() as u16);
                    out.put_slice(&entry.data);
                }
            }
            Self::RenegotiationInfo => out.put_u8(0),
            Self::SupportedCurves { curves } => {
                out.put_u16((curves.len() * 2) as u16);
                for curve in curves {
                    out.put_u16(*curve);
                }
            }
            Self::SupportedPoints { formats } => {
                out.put_u8(formats.len() as u8);
                out.put_slice(formats);
            }
            Self::Opaque { payload, .. } => out.put_slice(payload),
            // Empty bodies; padding is sized by the engine at send time.
            Self::SignedCertTimestamp
            | Self::Padding
            | Self::ExtendedMasterSecret
            | Self::SessionTicket
            | Self::Cookie
            | Self::NextProtoNegotiation
            | Self::Grease => {}
        }
    }
}

/// BoringSSL-style padding body length: pad the ClientHello out to 0x200
/// bytes when its unpadded length falls in (0xff, 0x200), accounting for the
/// four framing bytes the padding extension itself adds.
pub fn boring_padding_len(unpadded: usize) -> Option<usize> {
    if unpadded > 0xff && unpadded < 0x200 {
        let padding = 0x200 - unpadded;
        Some(if padding >= 5 { padding - 4 } else { 1 })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(ext: &ExtensionDescriptor) -> Vec<u8> {
        let mut buf = BytesMut::new();
        ext.encode_into(&mut buf);
        buf.to_vec()
    }

    #[test]
    fn alpn_wire_form() {
        let ext = ExtensionDescriptor::Alpn {
            protocols: vec!["h2".to_string(), "http/1.1".to_string()],
        };
        assert_eq!(
            wire(&ext),
            vec![
                0x00, 0x10, 0x00, 0x0e, 0x00, 0x0c, 0x02, b'h', b'2', 0x08, b'h', b't', b't',
                b'p', b'/', b'1', b'.', b'1',
            ]
        );
    }

    #[test]
    fn empty_server_name_wire_form() {
        let ext = ExtensionDescriptor::ServerName {
            host: String::new(),
        };
        assert_eq!(wire(&ext), vec![0x00, 0x00, 0x00, 0x05, 0x00, 0x03, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn server_name_carries_host() {
        let ext = ExtensionDescriptor::ServerName {
            host: "a.io".to_string(),
        };
        assert_eq!(
            wire(&ext),
            vec![0x00, 0x00, 0x00, 0x09, 0x00, 0x07, 0x00, 0x00, 0x04, b'a', b'.', b'i', b'o']
        );
    }

    #[test]
    fn status_request_wire_form() {
        let ext = ExtensionDescriptor::StatusRequest;
        assert_eq!(wire(&ext), vec![0x00, 0x05, 0x00, 0x05, 0x01, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn supported_versions_wire_form() {
        let ext = ExtensionDescriptor::SupportedVersions {
            versions: vec![0x0a0a, 0x0304, 0x0303, 0x0302, 0x0301],
        };
        assert_eq!(
            wire(&ext),
            vec![
                0x00, 0x2b, 0x00, 0x0b, 0x0a, 0x0a, 0x0a, 0x03, 0x04, 0x03, 0x03, 0x03, 0x02,
                0x03, 0x01,
            ]
        );
    }

    #[test]
    fn key_share_wire_form() {
        let ext = ExtensionDescriptor::KeyShare {
            entries: vec![
                KeyShareEntry {
                    group: 0x0a0a,
                    data: vec![0],
                },
                KeyShareEntry {
                    group: 0x001d,
                    data: Vec::new(),
                },
            ],
        };
        assert_eq!(
            wire(&ext),
            vec![
                0x00, 0x33, 0x00, 0x0b, 0x00, 0x09, 0x0a, 0x0a, 0x00, 0x01, 0x00, 0x00, 0x1d,
                0x00, 0x00,
            ]
        );
    }

    #[test]
    fn renegotiation_info_wire_form() {
        let ext = ExtensionDescriptor::RenegotiationInfo;
        assert_eq!(wire(&ext), vec![0xff, 0x01, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn grease_marker_wire_form() {
        assert_eq!(wire(&ExtensionDescriptor::Grease), vec![0x0a, 0x0a, 0x00, 0x00]);
    }

    #[test]
    fn supported_curves_wire_form() {
        let ext = ExtensionDescriptor::SupportedCurves {
            curves: vec![0x0a0a, 29, 23, 24],
        };
        assert_eq!(
            wire(&ext),
            vec![0x00, 0x0a, 0x00, 0x0a, 0x00, 0x08, 0x0a, 0x0a, 0x00, 0x1d, 0x00, 0x17, 0x00, 0x18]
        );
    }

    #[test]
    fn supported_points_wire_form() {
        let ext = ExtensionDescriptor::SupportedPoints { formats: vec![0] };
        assert_eq!(wire(&ext), vec![0x00, 0x0b, 0x00, 0x02, 0x01, 0x00]);
    }

    #[test]
    fn opaque_payload_passes_through() {
        let ext = ExtensionDescriptor::Opaque {
            id: 0x7550,
            payload: vec![0],
        };
        assert_eq!(wire(&ext), vec![0x75, 0x50, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn extension_ids_match_wire_registry() {
        let cases: [(ExtensionDescriptor, u16); 8] = [
            (ExtensionDescriptor::ServerName { host: String::new() }, 0),
            (ExtensionDescriptor::Padding, 21),
            (ExtensionDescriptor::ExtendedMasterSecret, 23),
            (ExtensionDescriptor::SessionTicket, 35),
            (ExtensionDescriptor::Cookie, 44),
            (ExtensionDescriptor::NextProtoNegotiation, 13172),
            (ExtensionDescriptor::RenegotiationInfo, 65281),
            (ExtensionDescriptor::Grease, 0x0a0a),
        ];
        for (ext, id) in cases {
            assert_eq!(ext.extension_id(), id);
        }
    }

    #[test]
    fn sequential_encoding_concatenates() {
        let mut buf = BytesMut::new();
        ExtensionDescriptor::Grease.encode_into(&mut buf);
        ExtensionDescriptor::ExtendedMasterSecret.encode_into(&mut buf);
        assert_eq!(buf.to_vec(), vec![0x0a, 0x0a, 0x00, 0x00, 0x00, 0x17, 0x00, 0x00]);
    }

    #[test]
    fn padding_sizing_matches_boring_rule() {
        assert_eq!(boring_padding_len(0x100), Some(0xfc));
        assert_eq!(boring_padding_len(0x1ff), Some(1));
        assert_eq!(boring_padding_len(0x1fb), Some(1));
        assert_eq!(boring_padding_len(0x1fa), Some(2));
        assert_eq!(boring_padding_len(0xff), None);
        assert_eq!(boring_padding_len(0x200), None);
        assert_eq!(boring_padding_len(64), None);
    }
}
