//! 32-bit FNV-1a over UTF-16 code units.
//!
//! Text labels are turned into PRNG seeds with this hash. It walks UTF-16
//! code units rather than bytes or scalar values, so characters outside the
//! BMP contribute their two surrogate halves. This keeps seeds identical to
//! the ones a browser computes with `charCodeAt`.

/// FNV-1a 32-bit offset basis. Also the hash of the empty string.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Hash `text` into a 32-bit seed.
///
/// ```
/// use daily_digest::hash::fnv1a_32;
///
/// assert_eq!(fnv1a_32(""), 2166136261);
/// assert_eq!(fnv1a_32("a"), 3826002220);
/// ```
pub fn fnv1a_32(text: &str) -> u32 {
    text.encode_utf16().fold(FNV_OFFSET_BASIS, |acc, unit| {
        (acc ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}
