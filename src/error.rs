use std::fmt;

/// Why the engine refused a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryError {
    /// Fewer raw words are known than one full state; feed more observations.
    InsufficientState { recovered: usize, required: usize },
    /// An observation does not fit in 32 bits. `index` is its position in the
    /// rejected batch.
    DomainRange { index: usize, value: u64 },
    /// A line of textual input is not an integer.
    Malformed { line: usize, text: String },
}

impl fmt::Display for RecoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientState {
                recovered,
                required,
            } => write!(
                f,
                "state not yet recovered: {} of {} words observed",
                recovered, required
            ),
            Self::DomainRange { index, value } => write!(
                f,
                "observation {} is out of 32-bit range: {:#x}",
                index, value
            ),
            Self::Malformed { line, text } => {
                write!(f, "line {}: not an integer: {:?}", line, text)
            }
        }
    }
}

impl std::error::Error for RecoveryError {}
