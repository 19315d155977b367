//! Page replacement simulation.
//!
//! Replays a reference sequence against a fixed number of frames under one
//! of four policies and records, for every access, the resident set and
//! whether the access faulted.
//!
//! # Components
//! - [`Policy`] - Policy selector, parsed from wire names
//! - [`Trace`] / [`StepRecord`] - Per-step snapshots and fault flags
//! - [`TraceStats`] - Summary counters for a run
//! - [`replacer`] - The policy implementations
//!
//! Every run is a pure function of `(policy, sequence, capacity)`: all state
//! is created inside the call and dropped with it.
//!
//! # Example
//! ```
//! use pagesim::simulation::{simulate, Policy};
//!
//! let trace = simulate(Policy::Lru, &[1, 2, 3, 1, 2, 4], 3);
//! assert_eq!(trace.faults(), vec![true, true, true, false, false, true]);
//! assert_eq!(trace.final_frames(), Some(&[1, 2, 4][..]));
//! ```

mod policy;
pub mod replacer;
mod stats;
mod trace;

use std::fmt;
use std::hash::Hash;

use log::debug;

use crate::common::{Error, Result};

pub use policy::Policy;
pub use replacer::{simulate_fifo, simulate_lru, simulate_mru, simulate_optimal};
pub use stats::TraceStats;
pub use trace::{StepRecord, Trace};

/// Run `policy` over `sequence` with `capacity` frames.
///
/// Capacity 0 is valid: every access faults and every snapshot is empty.
pub fn simulate<P>(policy: Policy, sequence: &[P], capacity: usize) -> Trace<P>
where
    P: Clone + Eq + Hash + fmt::Debug,
{
    let trace = match policy {
        Policy::Lru => simulate_lru(sequence, capacity),
        Policy::Mru => simulate_mru(sequence, capacity),
        Policy::Fifo => simulate_fifo(sequence, capacity),
        Policy::Optimal => simulate_optimal(sequence, capacity),
    };

    debug!(
        "{} over {} accesses with {} frames: {}",
        policy,
        sequence.len(),
        capacity,
        trace.stats()
    );
    trace
}

/// Validated entry point taking the policy by name and a signed capacity.
///
/// # Errors
/// - `Error::UnknownPolicy` if `name` is not `LRU`, `MRU`, `FIFO` or `Optimal`
/// - `Error::InvalidCapacity` if `capacity` is negative
pub fn simulate_named<P>(name: &str, sequence: &[P], capacity: i64) -> Result<Trace<P>>
where
    P: Clone + Eq + Hash + fmt::Debug,
{
    let policy: Policy = name.parse()?;
    let capacity = validate_capacity(capacity)?;
    Ok(simulate(policy, sequence, capacity))
}

/// Convert a caller-supplied frame count to a capacity.
///
/// # Errors
/// `Error::InvalidCapacity` if `capacity < 0`.
pub fn validate_capacity(capacity: i64) -> Result<usize> {
    usize::try_from(capacity).map_err(|_| Error::InvalidCapacity(capacity))
}

/// Run every policy on the same input and return their stats in
/// [`Policy::ALL`] order.
pub fn compare<P>(sequence: &[P], capacity: usize) -> Vec<(Policy, TraceStats)>
where
    P: Clone + Eq + Hash + fmt::Debug,
{
    Policy::ALL
        .into_iter()
        .map(|policy| (policy, simulate(policy, sequence, capacity).stats()))
        .collect()
}
