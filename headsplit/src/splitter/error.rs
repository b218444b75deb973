use std::fmt;

/// Why a header marker was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerProblem {
    Empty,
    MixedCharacters,
}

impl fmt::Display for MarkerProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerProblem::Empty => write!(f, "marker is empty"),
            MarkerProblem::MixedCharacters => {
                write!(f, "marker must be a single repeated character")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// The header spec at `index` in the caller's list has an unusable marker.
    InvalidHeaderSpec {
        index: usize,
        marker: String,
        problem: MarkerProblem,
    },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::InvalidHeaderSpec {
                index,
                marker,
                problem,
            } => write!(
                f,
                "invalid header spec #{} ({:?}): {}",
                index + 1,
                marker,
                problem
            ),
        }
    }
}

impl std::error::Error for SplitError {}
