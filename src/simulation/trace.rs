//! Step records and the full trace of a simulation run.

use crate::simulation::TraceStats;

/// Resident set immediately after one access, plus whether it faulted.
///
/// `frames` is an owned copy taken at that step, so later steps never
/// change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord<P> {
    /// Resident pages in the policy's internal order.
    pub frames: Vec<P>,

    /// True iff the page was not resident before this access.
    pub fault: bool,
}

/// Ordered step records for one run; one entry per input access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<P> {
    steps: Vec<StepRecord<P>>,
    capacity: usize,
    evictions: u64,
}

impl<P> Trace<P> {
    /// Empty trace with room for `len` steps.
    pub(crate) fn with_len(capacity: usize, len: usize) -> Self {
        Self {
            steps: Vec::with_capacity(len),
            capacity,
            evictions: 0,
        }
    }

    /// Append the outcome of one access.
    pub(crate) fn record(&mut self, frames: Vec<P>, fault: bool, evicted: bool) {
        if evicted {
            self.evictions += 1;
        }
        self.steps.push(StepRecord { frames, fault });
    }

    /// Number of steps (equals the input sequence length).
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Frame capacity the run used.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All step records in access order.
    pub fn steps(&self) -> &[StepRecord<P>] {
        &self.steps
    }

    /// Fault flags in access order.
    pub fn faults(&self) -> Vec<bool> {
        self.steps.iter().map(|step| step.fault).collect()
    }

    pub fn fault_count(&self) -> usize {
        self.steps.iter().filter(|step| step.fault).count()
    }

    pub fn hit_count(&self) -> usize {
        self.len() - self.fault_count()
    }

    /// Resident set after the last access, or `None` for an empty run.
    pub fn final_frames(&self) -> Option<&[P]> {
        self.steps.last().map(|step| step.frames.as_slice())
    }

    /// Summary counters for this run.
    pub fn stats(&self) -> TraceStats {
        let faults = self.fault_count() as u64;
        TraceStats {
            accesses: self.len() as u64,
            faults,
            hits: self.len() as u64 - faults,
            evictions: self.evictions,
            capacity: self.capacity,
        }
    }

    /// Split into `(snapshots, fault_flags)`, the shape the HTTP endpoint
    /// returns as `result` / `page_faults`.
    pub fn into_parts(self) -> (Vec<Vec<P>>, Vec<bool>) {
        self.steps
            .into_iter()
            .map(|step| (step.frames, step.fault))
            .unzip()
    }
}
