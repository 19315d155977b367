//! Per-run statistics.

use std::fmt;

use serde::Serialize;

/// Summary counters for one simulation run.
///
/// Derived from a [`Trace`](crate::simulation::Trace) after the run; a
/// run never shares counters with another run.
///
/// # Example
/// ```
/// use pagesim::simulation::simulate_fifo;
///
/// let trace = simulate_fifo(&[1, 2, 3, 1], 2);
/// let stats = trace.stats();
/// assert_eq!(stats.faults, 4);
/// assert_eq!(stats.evictions, 2);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceStats {
    /// Number of accesses replayed (the sequence length).
    pub accesses: u64,

    /// Accesses to a page that was not resident.
    pub faults: u64,

    /// Accesses to a page that was already resident.
    pub hits: u64,

    /// Pages removed to make room for a faulting page.
    pub evictions: u64,

    /// Frame capacity the run used.
    pub capacity: usize,
}

impl TraceStats {
    /// Fraction of accesses that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.faults as f64 / self.accesses as f64
        }
    }

    /// Fraction of accesses that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }
}

impl fmt::Display for TraceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ accesses: {}, faults: {}, hits: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.accesses,
            self.faults,
            self.hits,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(faults: u64, hits: u64) -> TraceStats {
        TraceStats {
            accesses: faults + hits,
            faults,
            hits,
            evictions: 0,
            capacity: 3,
        }
    }

    #[test]
    fn test_rates_empty() {
        let s = stats(0, 0);
        assert_eq!(s.fault_rate(), 0.0);
        assert_eq!(s.hit_rate(), 0.0);
    }

    #[test]
    fn test_rates() {
        let s = stats(3, 7);
        assert_eq!(s.hit_rate(), 0.7);
        assert_eq!(s.fault_rate(), 0.3);
    }

    #[test]
    fn test_stats_display() {
        let mut s = stats(20, 80);
        s.evictions = 5;
        let display = format!("{}", s);

        assert!(display.contains("faults: 20"));
        assert!(display.contains("hits: 80"));
        assert!(display.contains("evictions: 5"));
        assert!(display.contains("80.00%"));
    }
}
