use rand::Rng;

/// Fixed GREASE value used in plan templates (RFC 8701).
pub const GREASE_PLACEHOLDER: u16 = 0x0a0a;

/// The sixteen reserved GREASE code points.
pub const GREASE_VALUES: [u16; 16] = [
    0x0a0a, 0x1a1a, 0x2a2a, 0x3a3a, 0x4a4a, 0x5a5a, 0x6a6a, 0x7a7a, 0x8a8a, 0x9a9a, 0xaaaa,
    0xbaba, 0xcaca, 0xdada, 0xeaea, 0xfafa,
];

/// True if `value` is one of the reserved GREASE code points.
pub fn is_grease(value: u16) -> bool {
    let hi = (value >> 8) as u8;
    let lo = (value & 0xff) as u8;
    hi == lo && (lo & 0x0f) == 0x0a
}

/// Picks a GREASE value at random, for engine-side substitution of the
/// deterministic placeholder at send time.
pub fn random_grease() -> u16 {
    let mut rng = rand::thread_rng();
    GREASE_VALUES[rng.gen_range(0..GREASE_VALUES.len())]
}
