//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;
use std::fmt;

use super::{replay, Access, Replacer};
use crate::simulation::Trace;

/// Evicts pages in the order they were loaded.
///
/// Hits change nothing: FIFO order is insertion order, not access order.
pub struct FifoReplacer<P> {
    /// Resident pages.
    frames: Vec<P>,

    /// Pages in insertion order (front = oldest).
    queue: VecDeque<P>,

    capacity: usize,
}

impl<P> FifoReplacer<P> {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: Vec::new(),
            queue: VecDeque::new(),
            capacity,
        }
    }
}

impl<P: Clone + Eq> FifoReplacer<P> {
    /// Pop the oldest queued page that is still resident and remove it
    /// from the frames.
    fn evict(&mut self) -> Option<P> {
        while let Some(oldest) = self.queue.pop_front() {
            if let Some(pos) = self.frames.iter().position(|p| *p == oldest) {
                return Some(self.frames.remove(pos));
            }
            // Already gone from the frames, skip it
        }
        None
    }
}

impl<P: Clone + Eq> Replacer<P> for FifoReplacer<P> {
    fn access(&mut self, _position: usize, page: &P) -> Access<P> {
        if self.frames.contains(page) {
            return Access::Hit;
        }

        if self.capacity == 0 {
            return Access::Fault { evicted: None };
        }

        let evicted = if self.frames.len() >= self.capacity {
            self.evict()
        } else {
            None
        };
        self.frames.push(page.clone());
        self.queue.push_back(page.clone());
        Access::Fault { evicted }
    }

    fn snapshot(&self) -> Vec<P> {
        self.frames.clone()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Run the FIFO policy over `sequence` with `capacity` frames.
pub fn simulate_fifo<P: Clone + Eq + fmt::Debug>(sequence: &[P], capacity: usize) -> Trace<P> {
    replay(FifoReplacer::new(capacity), sequence)
}
