use mirage_traits::{ClientHelloPlan, ExtensionDescriptor, SessionIdDigest, GREASE_PLACEHOLDER};

use crate::error::{ResolveError, ResolveResult};
use crate::ja3::Ja3Descriptor;
use crate::profile::BrowserProfile;
use crate::registry;

/// Resolves a JA3 fingerprint string into a ClientHello construction plan.
///
/// Pure and deterministic: the same inputs always yield the same plan, and a
/// failure recurs identically on retry. The caller's `user_agent` is sniffed
/// and logged but does not steer the plan yet; profile selection stays
/// pinned to Chrome until the Firefox GREASE layout has been verified
/// against captures (see DESIGN.md).
pub fn resolve(ja3: &str, user_agent: &str) -> ResolveResult<ClientHelloPlan> {
    let profile = BrowserProfile::from_user_agent("chrome");
    if BrowserProfile::from_user_agent(user_agent) != profile {
        tracing::warn!(user_agent, "user-agent hint ignored, profile pinned to chrome");
    }

    let descriptor = Ja3Descriptor::parse(ja3)?;
    tracing::debug!(
        ciphers = descriptor.cipher_suites.len(),
        extensions = descriptor.extension_ids.len(),
        ?profile,
        "resolving fingerprint"
    );

    // Curves always open with a GREASE id, whatever the profile says.
    let mut curves = Vec::with_capacity(descriptor.curves.len() + 1);
    curves.push(GREASE_PLACEHOLDER);
    curves.extend_from_slice(&descriptor.curves);
    let supported_curves = ExtensionDescriptor::SupportedCurves { curves };
    let supported_points = ExtensionDescriptor::SupportedPoints {
        formats: descriptor.point_formats.clone(),
    };

    let mut extensions = Vec::with_capacity(descriptor.extension_ids.len() + 2);
    if profile.inserts_grease() {
        extensions.push(ExtensionDescriptor::Grease);
    }
    for id in &descriptor.extension_ids {
        let resolved = match id.as_str() {
            "10" => supported_curves.clone(),
            "11" => supported_points.clone(),
            other => {
                registry::lookup(other).ok_or_else(|| ResolveError::UnsupportedExtension {
                    identifier: other.to_string(),
                })?
            }
        };
        if id == "21" && profile.inserts_grease() {
            extensions.push(ExtensionDescriptor::Grease);
        }
        extensions.push(resolved);
    }

    let mut cipher_suites = Vec::with_capacity(descriptor.cipher_suites.len() + 1);
    if profile.inserts_grease() {
        cipher_suites.push(GREASE_PLACEHOLDER);
    }
    cipher_suites.extend_from_slice(&descriptor.cipher_suites);

    Ok(ClientHelloPlan {
        cipher_suites,
        extensions,
        compression_methods: vec![0],
        session_id: SessionIdDigest::Sha256,
    })
}
