//! Inverses of the two shift-XOR idioms used by the tempering transform.
//!
//! Neither `x ^ (x >> s)` nor `x ^ ((x << s) & m)` can be undone by
//! rearranging terms, since `x` appears on both sides. Both are undone by
//! fixed-point iteration instead: every pass fixes another `s` bits, starting
//! from the end the shift fills with zeroes.

/// Number of passes after which every bit of the candidate is settled.
fn passes(shift: u32) -> u32 {
    32u32.div_ceil(shift)
}

/// Recovers `x` from `y = x ^ (x >> shift)`.
///
/// The top `shift` bits of `y` are already the top bits of `x`; each pass
/// extends the correct prefix by another `shift` bits.
pub fn unshift_right(y: u32, shift: u32) -> u32 {
    assert!((1..32).contains(&shift), "shift out of range: {}", shift);

    let mut x = y;

    for _ in 0..passes(shift) {
        x = y ^ x.wrapping_shr(shift);
    }

    x
}

/// Recovers `x` from `y = x ^ ((x << shift) & mask)`.
pub fn unshift_left(y: u32, shift: u32, mask: u32) -> u32 {
    assert!((1..32).contains(&shift), "shift out of range: {}", shift);

    let mut x = y;

    for _ in 0..passes(shift) {
        x = y ^ (x.wrapping_shl(shift) & mask);
    }

    x
}
