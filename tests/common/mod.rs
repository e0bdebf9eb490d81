//! Shared input builders for the integration tests.

/// `count` copies of `pattern` concatenated.
pub fn repeated(pattern: &[u8], count: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(pattern.len() * count);
    for _ in 0..count {
        out.extend_from_slice(pattern);
    }
    out
}

/// A deterministic pseudo-random buffer (xorshift32): incompressible-ish
/// data without pulling a RNG into the tests.
pub fn noise(len: usize, mut seed: u32) -> Vec<u8> {
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            (seed >> 24) as u8
        })
        .collect()
}

/// A buffer that must compress: a 40-byte repeated pattern followed by 10
/// distinct bytes.
pub fn pattern_then_distinct() -> Vec<u8> {
    let mut input = repeated(b"0123456789", 4);
    input.extend_from_slice(&[0xF0, 0xE1, 0xD2, 0xC3, 0xB4, 0xA5, 0x96, 0x87, 0x78, 0x69]);
    input
}
