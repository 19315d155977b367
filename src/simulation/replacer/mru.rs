//! MRU (Most-Recently-Used) replacement policy.
//!
//! Only the page touched by the immediately preceding access is tracked,
//! not a full recency order. On a fault with full frames that page is the
//! victim.

use std::fmt;

use super::{replay, Access, Replacer};
use crate::simulation::Trace;

/// Evicts the page used by the previous access.
///
/// Frames keep insertion order; hits do not reorder them.
pub struct MruReplacer<P> {
    frames: Vec<P>,
    /// Page of the previous access (hit or fault).
    most_recent: Option<P>,
    capacity: usize,
}

impl<P> MruReplacer<P> {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: Vec::new(),
            most_recent: None,
            capacity,
        }
    }
}

impl<P: Clone + Eq> MruReplacer<P> {
    /// Index of the frame to evict when full.
    ///
    /// The previous access is always resident once capacity >= 1, so the
    /// fallback to the newest frame only keeps the capacity bound strict.
    fn victim(&self) -> Option<usize> {
        self.most_recent
            .as_ref()
            .and_then(|mru| self.frames.iter().position(|p| p == mru))
            .or_else(|| self.frames.len().checked_sub(1))
    }
}

impl<P: Clone + Eq> Replacer<P> for MruReplacer<P> {
    fn access(&mut self, _position: usize, page: &P) -> Access<P> {
        let access = if self.frames.contains(page) {
            Access::Hit
        } else if self.capacity == 0 {
            Access::Fault { evicted: None }
        } else {
            let evicted = if self.frames.len() >= self.capacity {
                self.victim().map(|idx| self.frames.remove(idx))
            } else {
                None
            };
            self.frames.push(page.clone());
            Access::Fault { evicted }
        };

        self.most_recent = Some(page.clone());
        access
    }

    fn snapshot(&self) -> Vec<P> {
        self.frames.clone()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Run the MRU policy over `sequence` with `capacity` frames.
pub fn simulate_mru<P: Clone + Eq + fmt::Debug>(sequence: &[P], capacity: usize) -> Trace<P> {
    replay(MruReplacer::new(capacity), sequence)
}
