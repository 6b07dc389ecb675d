/// Words in one full generator state.
pub const STATE_WORDS: usize = 624;

/// Distance back to the word that receives the low bits, relative to a new word.
pub const NEXT_LAG: usize = STATE_WORDS - 1;

/// Distance back to the word XORed into a new word (624 - 397).
pub const MIDDLE_LAG: usize = STATE_WORDS - 397;

const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
const MATRIX_A: u32 = 0x9908_b0df;

/// Produces raw word `i` from the words at `i - 624`, `i - 623` and `i - 227`.
pub fn twist(oldest: u32, next: u32, middle: u32) -> u32 {
    let x = (oldest & UPPER_MASK) | (next & LOWER_MASK);

    let mut xa = x.wrapping_shr(1);

    if (x & 1) > 0 {
        xa ^= MATRIX_A;
    }

    middle ^ xa
}

/// The raw word that follows `words`, which must hold at least one full state.
pub(crate) fn twist_next(words: &[u32]) -> u32 {
    let i = words.len();

    twist(
        words[i - STATE_WORDS],
        words[i - NEXT_LAG],
        words[i - MIDDLE_LAG],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn lags() {
        assert_eq!(STATE_WORDS, 624);
        assert_eq!(NEXT_LAG, 623);
        assert_eq!(MIDDLE_LAG, 227);
    }

    #[rstest]
    #[case(0, 0, 0, 0)]
    #[case(0x8000_0000, 0, 0, 0x4000_0000)]
    #[case(0, 1, 0, 0x9908_b0df)]
    #[case(0, 0, 5, 5)]
    #[case(0xffff_ffff, 0xffff_ffff, 0xffff_ffff, 0x1908_b0df)]
    fn known_twists(
        #[case] oldest: u32,
        #[case] next: u32,
        #[case] middle: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(twist(oldest, next, middle), expected);
    }

    #[test]
    fn only_high_bit_of_oldest_matters() {
        assert_eq!(twist(0x8000_0000, 7, 9), twist(0xffff_ffff, 7, 9));
        assert_eq!(twist(0, 7, 9), twist(0x7fff_ffff, 7, 9));
    }

    #[test]
    fn only_low_bits_of_next_matter() {
        assert_eq!(twist(3, 0x8000_0001, 9), twist(3, 0x0000_0001, 9));
    }

    #[test]
    fn twist_next_reads_the_right_offsets() {
        let mut words = vec![0u32; STATE_WORDS];
        words[0] = 0x8000_0000;
        words[1] = 1;
        words[STATE_WORDS - MIDDLE_LAG] = 0x1234_5678;

        assert_eq!(twist_next(&words), twist(0x8000_0000, 1, 0x1234_5678));
    }
}
