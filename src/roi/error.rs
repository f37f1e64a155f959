use std::fmt;
use thiserror::Error;

/// Errors surfaced by ROI extraction.
///
/// Grids too small to hold an interior pixel are not an error; they produce
/// an empty map.
#[derive(Debug, Error)]
pub enum RoiError {
    /// The input container carries more than one channel.
    #[error("ROI extraction requires a single-channel image, got {channels} channels")]
    MultiChannel { channels: usize },
    /// A traversal queue reached its one-entry-per-pixel ceiling.
    #[error("{queue} queue hit its ceiling of {limit} entries while labeling region {region}")]
    QueueCapacity {
        queue: QueueKind,
        limit: usize,
        region: i32,
    },
}

/// Which traversal queue overflowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueKind {
    Plateau,
    Growth,
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueKind::Plateau => write!(f, "plateau"),
            QueueKind::Growth => write!(f, "growth"),
        }
    }
}
