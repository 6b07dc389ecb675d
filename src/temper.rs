use crate::unshift::{unshift_left, unshift_right};

const U: u32 = 11;
const S: u32 = 7;
const B: u32 = 0x9d2c_5680;
const T: u32 = 15;
const C: u32 = 0xefc6_0000;
const L: u32 = 18;

/// Mixes a raw state word into the value the generator hands out.
pub fn temper(x: u32) -> u32 {
    let mut y = x;

    y ^= y.wrapping_shr(U);
    y ^= y.wrapping_shl(S) & B;
    y ^= y.wrapping_shl(T) & C;
    y ^ y.wrapping_shr(L)
}

/// Recovers the raw state word behind an observed output.
pub fn untemper(y: u32) -> u32 {
    let x = unshift_right(y, L);
    let x = unshift_left(x, T, C);
    let x = unshift_left(x, S, B);
    unshift_right(x, U)
}
