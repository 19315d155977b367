//! Optimal (Belady) replacement policy.
//!
//! Evicts the resident page whose next use lies farthest in the future, or
//! that is never used again. Next-use indices are computed once with a
//! reverse scan, so each fault costs O(capacity) instead of a rescan of the
//! remaining sequence.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::{replay, Access, Replacer};
use crate::simulation::Trace;

/// Next-use index for a page that never recurs.
const NEVER: usize = usize::MAX;

/// Clairvoyant replacer bound to one reference sequence.
///
/// `access` must be driven with the positions of the sequence given to
/// [`OptimalReplacer::new`].
pub struct OptimalReplacer<P> {
    /// Resident pages in insertion order.
    frames: Vec<P>,

    /// `next_use[i]` = index of the next access to `sequence[i]` after `i`.
    next_use: Vec<usize>,

    /// Next use of each resident page, as of its latest access.
    resident_next: HashMap<P, usize>,

    capacity: usize,
}

impl<P: Clone + Eq + Hash> OptimalReplacer<P> {
    pub fn new(sequence: &[P], capacity: usize) -> Self {
        let mut next_use = vec![NEVER; sequence.len()];
        let mut seen: HashMap<&P, usize> = HashMap::new();

        for (i, page) in sequence.iter().enumerate().rev() {
            if let Some(&later) = seen.get(page) {
                next_use[i] = later;
            }
            seen.insert(page, i);
        }

        // Never more resident pages than accesses
        let resident = capacity.min(sequence.len());
        Self {
            frames: Vec::with_capacity(resident),
            next_use,
            resident_next: HashMap::with_capacity(resident),
            capacity,
        }
    }

    /// Index of the frame whose next use is farthest away.
    ///
    /// Ties (only possible between pages never used again) go to the
    /// earliest frame in resident order.
    fn victim(&self) -> Option<usize> {
        let mut victim = None;
        let mut farthest = 0;

        for (idx, page) in self.frames.iter().enumerate() {
            let next = self.resident_next.get(page).copied().unwrap_or(NEVER);
            if victim.is_none() || next > farthest {
                victim = Some(idx);
                farthest = next;
            }
        }
        victim
    }
}

impl<P: Clone + Eq + Hash> Replacer<P> for OptimalReplacer<P> {
    fn access(&mut self, position: usize, page: &P) -> Access<P> {
        let next = self.next_use.get(position).copied().unwrap_or(NEVER);

        if self.frames.contains(page) {
            self.resident_next.insert(page.clone(), next);
            return Access::Hit;
        }

        if self.capacity == 0 {
            return Access::Fault { evicted: None };
        }

        let evicted = if self.frames.len() < self.capacity {
            None
        } else {
            self.victim().map(|idx| {
                let victim = self.frames.remove(idx);
                self.resident_next.remove(&victim);
                victim
            })
        };
        self.frames.push(page.clone());
        self.resident_next.insert(page.clone(), next);
        Access::Fault { evicted }
    }

    fn snapshot(&self) -> Vec<P> {
        self.frames.clone()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Run the optimal policy over `sequence` with `capacity` frames.
pub fn simulate_optimal<P>(sequence: &[P], capacity: usize) -> Trace<P>
where
    P: Clone + Eq + Hash + fmt::Debug,
{
    replay(OptimalReplacer::new(sequence, capacity), sequence)
}
