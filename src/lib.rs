//! Recovers the internal state of an MT19937 generator from 624 consecutive
//! outputs and predicts everything it emits afterwards.

pub mod error;
pub mod observed;
pub mod random;
pub mod recovery;
pub mod stream;
pub mod temper;
pub mod twist;
pub mod unshift;

pub use error::RecoveryError;
pub use random::MersenneTwister;
pub use recovery::{Continuation, StateRecoveryStream};
pub use stream::WordBytes;
pub use temper::{temper, untemper};
pub use twist::{twist, STATE_WORDS};
pub use unshift::{unshift_left, unshift_right};
