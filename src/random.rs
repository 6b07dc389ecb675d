use crate::temper::temper;
use crate::twist::{twist, STATE_WORDS};

const INIT_MULTIPLIER: u32 = 1812433253;

/// MT19937, regenerating one state word per output.
#[derive(Clone)]
pub struct MersenneTwister {
    index: usize,
    state: [u32; STATE_WORDS],
}

impl MersenneTwister {
    pub fn new(seed: u32) -> Self {
        let mut state = [0; STATE_WORDS];

        state[0] = seed;

        let mut seed = seed;

        for (i, slot) in state.iter_mut().enumerate().skip(1) {
            seed = INIT_MULTIPLIER
                .wrapping_mul(seed ^ (seed.wrapping_shr(30)))
                .wrapping_add(i as u32);

            *slot = seed;
        }

        Self { index: 0, state }
    }

    /// Resumes from 624 consecutive raw words; the next output is derived
    /// from the word after the last one given.
    pub fn from_state(state: &[u32; STATE_WORDS]) -> Self {
        Self {
            index: 0,
            state: *state,
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let x = twist(
            self.state[self.index],
            self.state[(self.index + 1) % STATE_WORDS],
            self.state[(self.index + 397) % STATE_WORDS],
        );

        self.state[self.index] = x;

        self.index = (self.index + 1) % STATE_WORDS;

        temper(x)
    }
}

impl Iterator for MersenneTwister {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_u32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, [2357136044, 2546248239, 3071714933])]
    #[case(5489, [3499211612, 581869302, 3890346734])]
    fn first_outputs_for_seed(#[case] seed: u32, #[case] values: [u32; 3]) {
        let mut rng = MersenneTwister::new(seed);

        assert_eq!(rng.next_u32(), values[0]);
        assert_eq!(rng.next_u32(), values[1]);
        assert_eq!(rng.next_u32(), values[2]);
    }

    #[test]
    fn ten_thousandth_output_of_default_seed() {
        let rng = MersenneTwister::new(5489);

        assert_eq!(rng.skip(9999).next(), Some(4123659995));
    }

    #[test]
    fn from_state_resumes_after_window() {
        let seeded = MersenneTwister::new(7);
        let mut resumed = MersenneTwister::from_state(&seeded.state);
        let mut seeded = seeded;

        for _ in 0..2000 {
            assert_eq!(resumed.next_u32(), seeded.next_u32());
        }
    }
}
