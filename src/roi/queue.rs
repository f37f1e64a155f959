//! FIFO work queue for pixel traversal.
//!
//! The queue grows on demand under an explicit ceiling of one entry per
//! image pixel. A push past the ceiling is rejected with an error instead of
//! wrapping around and overwriting pending entries; the processed-flag
//! discipline keeps the ceiling unreachable during a well-formed traversal.

use std::collections::VecDeque;

/// Push rejected: the queue is at its ceiling.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct QueueFull;

#[derive(Debug)]
pub(super) struct PixelQueue {
    entries: VecDeque<usize>,
    limit: usize,
}

impl PixelQueue {
    pub(super) fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(64)),
            limit,
        }
    }

    pub(super) fn push(&mut self, index: usize) -> Result<(), QueueFull> {
        if self.entries.len() >= self.limit {
            return Err(QueueFull);
        }
        self.entries.push_back(index);
        Ok(())
    }

    pub(super) fn pop(&mut self) -> Option<usize> {
        self.entries.pop_front()
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(super) fn limit(&self) -> usize {
        self.limit
    }

    /// Drop entries pushed after the queue held `len` items, keeping order.
    pub(super) fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }
}
