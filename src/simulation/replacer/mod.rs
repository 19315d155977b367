//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`LruReplacer`] - Least Recently Used
//! - [`MruReplacer`] - Most Recently Used (previous access)
//! - [`FifoReplacer`] - First In First Out
//! - [`OptimalReplacer`] - Belady's clairvoyant policy
//!
//! Every replacer starts empty and is owned by a single run. [`replay`]
//! drives one over a sequence and snapshots the frames after each access.

mod fifo;
mod lru;
mod mru;
mod optimal;

use std::fmt;

use log::trace;

use crate::simulation::Trace;

pub use fifo::{simulate_fifo, FifoReplacer};
pub use lru::{simulate_lru, LruReplacer};
pub use mru::{simulate_mru, MruReplacer};
pub use optimal::{simulate_optimal, OptimalReplacer};

/// Outcome of a single access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access<P> {
    /// The page was already resident.
    Hit,
    /// The page was not resident; `evicted` is the page removed to make
    /// room for it, if any.
    Fault { evicted: Option<P> },
}

impl<P> Access<P> {
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Access::Fault { .. })
    }
}

/// A page replacement policy over a fixed number of frames.
///
/// With capacity 0 nothing is ever resident: every access is a fault and
/// no page is inserted.
pub trait Replacer<P> {
    /// Process the access to `page` at index `position` of the sequence.
    fn access(&mut self, position: usize, page: &P) -> Access<P>;

    /// Copy of the resident set in the policy's internal order.
    fn snapshot(&self) -> Vec<P>;

    /// Maximum number of resident pages.
    fn capacity(&self) -> usize;
}

/// Replay `sequence` through `replacer`, recording one step per access.
pub fn replay<P, R>(mut replacer: R, sequence: &[P]) -> Trace<P>
where
    P: fmt::Debug,
    R: Replacer<P>,
{
    let mut out = Trace::with_len(replacer.capacity(), sequence.len());

    for (position, page) in sequence.iter().enumerate() {
        let access = replacer.access(position, page);
        let evicted = match &access {
            Access::Fault {
                evicted: Some(victim),
            } => {
                trace!("step {}: {:?} evicted {:?}", position, page, victim);
                true
            }
            _ => false,
        };
        out.record(replacer.snapshot(), access.is_fault(), evicted);
    }

    out
}
