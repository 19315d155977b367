//! LRU (Least-Recently-Used) replacement policy.

use std::collections::VecDeque;
use std::fmt;

use super::{replay, Access, Replacer};
use crate::simulation::Trace;

/// Evicts the page whose last access is oldest.
///
/// Frames are kept in recency order: front = least recently used,
/// back = most recently used. A hit moves the page to the back.
pub struct LruReplacer<P> {
    frames: VecDeque<P>,
    capacity: usize,
}

impl<P> LruReplacer<P> {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: VecDeque::new(),
            capacity,
        }
    }
}

impl<P: Clone + Eq> Replacer<P> for LruReplacer<P> {
    fn access(&mut self, _position: usize, page: &P) -> Access<P> {
        if let Some(pos) = self.frames.iter().position(|p| p == page) {
            // Refresh recency
            if let Some(hit) = self.frames.remove(pos) {
                self.frames.push_back(hit);
            }
            return Access::Hit;
        }

        if self.capacity == 0 {
            return Access::Fault { evicted: None };
        }

        let evicted = if self.frames.len() >= self.capacity {
            self.frames.pop_front()
        } else {
            None
        };
        self.frames.push_back(page.clone());
        Access::Fault { evicted }
    }

    fn snapshot(&self) -> Vec<P> {
        self.frames.iter().cloned().collect()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Run the LRU policy over `sequence` with `capacity` frames.
pub fn simulate_lru<P: Clone + Eq + fmt::Debug>(sequence: &[P], capacity: usize) -> Trace<P> {
    replay(LruReplacer::new(capacity), sequence)
}
