use tracing::{debug, trace};

use crate::error::RecoveryError;
use crate::random::MersenneTwister;
use crate::temper::{temper, untemper};
use crate::twist::{twist_next, STATE_WORDS};

/// Accumulates untempered observations until the generator's whole state is
/// known, then predicts what it emits next.
///
/// Observations must arrive in the order the generator emitted them, with
/// nothing skipped. Reordering or gaps cannot be detected; they only show up
/// as wrong predictions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateRecoveryStream {
    raw: Vec<u32>,
}

impl StateRecoveryStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: Vec::with_capacity(capacity),
        }
    }

    pub fn append_observed(&mut self, outputs: &[u32]) {
        let was_recovered = self.is_fully_recovered();

        self.raw.extend(outputs.iter().map(|&output| untemper(output)));

        if !was_recovered && self.is_fully_recovered() {
            debug!(observed = self.raw.len(), "generator state recovered");
        }
    }

    /// Like [`append_observed`](Self::append_observed), for callers holding
    /// wider integers. Nothing is appended if any value exceeds 32 bits.
    pub fn append_observed_wide(&mut self, outputs: &[u64]) -> Result<(), RecoveryError> {
        let narrowed = outputs
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                u32::try_from(value).map_err(|_| RecoveryError::DomainRange { index, value })
            })
            .collect::<Result<Vec<u32>, _>>()?;

        self.append_observed(&narrowed);

        Ok(())
    }

    pub fn is_fully_recovered(&self) -> bool {
        self.raw.len() >= STATE_WORDS
    }

    /// Number of observations ingested so far.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The recovered raw words, one per observation, oldest first.
    pub fn raw_words(&self) -> &[u32] {
        &self.raw
    }

    /// The next `length` outputs of the observed generator.
    ///
    /// Works on a private copy of the last full state, so repeated calls see
    /// the same history and agree on every common prefix.
    pub fn get_continuation(&self, length: usize) -> Result<Vec<u32>, RecoveryError> {
        let window = self.window()?;

        trace!(length, observed = self.raw.len(), "predicting continuation");

        let mut extension = Vec::with_capacity(STATE_WORDS + length);
        extension.extend_from_slice(window);

        let mut outputs = Vec::with_capacity(length);

        for _ in 0..length {
            let word = twist_next(&extension);

            extension.push(word);
            outputs.push(temper(word));
        }

        Ok(outputs)
    }

    /// Unbounded lazy form of [`get_continuation`](Self::get_continuation).
    pub fn continuation(&self) -> Result<Continuation, RecoveryError> {
        Ok(Continuation {
            twister: self.clone_generator()?,
        })
    }

    /// A generator in the same position as the observed one.
    pub fn clone_generator(&self) -> Result<MersenneTwister, RecoveryError> {
        let window: &[u32; STATE_WORDS] = self
            .window()?
            .try_into()
            .map_err(|_| self.insufficient())?;

        Ok(MersenneTwister::from_state(window))
    }

    /// The most recent full state.
    fn window(&self) -> Result<&[u32], RecoveryError> {
        if !self.is_fully_recovered() {
            return Err(self.insufficient());
        }

        Ok(&self.raw[self.raw.len() - STATE_WORDS..])
    }

    fn insufficient(&self) -> RecoveryError {
        RecoveryError::InsufficientState {
            recovered: self.raw.len(),
            required: STATE_WORDS,
        }
    }
}

impl Extend<u32> for StateRecoveryStream {
    fn extend<T: IntoIterator<Item = u32>>(&mut self, iter: T) {
        let outputs: Vec<u32> = iter.into_iter().collect();
        self.append_observed(&outputs);
    }
}

impl FromIterator<u32> for StateRecoveryStream {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        let mut stream = Self::new();
        stream.extend(iter);
        stream
    }
}

/// Predicted outputs, continuing right after the last observation.
///
/// Owns its own copy of the state; the accumulator it came from is untouched.
#[derive(Clone)]
pub struct Continuation {
    twister: MersenneTwister,
}

impl Iterator for Continuation {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.twister.next_u32())
    }
}
