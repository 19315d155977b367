//! Replacement policy selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::Error;

/// The four supported page replacement policies.
///
/// Names on the wire are case-sensitive: `"LRU"`, `"MRU"`, `"FIFO"` and
/// `"Optimal"`.
///
/// # Example
/// ```
/// use pagesim::Policy;
///
/// let policy: Policy = "FIFO".parse().unwrap();
/// assert_eq!(policy, Policy::Fifo);
/// assert!("fifo".parse::<Policy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// Least-Recently-Used.
    #[serde(rename = "LRU")]
    Lru,
    /// Most-Recently-Used (evicts the page touched by the previous access).
    #[serde(rename = "MRU")]
    Mru,
    /// First-In-First-Out.
    #[serde(rename = "FIFO")]
    Fifo,
    /// Belady's clairvoyant policy.
    #[serde(rename = "Optimal")]
    Optimal,
}

impl Policy {
    /// Every policy, in display order.
    pub const ALL: [Policy; 4] = [Policy::Lru, Policy::Mru, Policy::Fifo, Policy::Optimal];

    /// Wire name of the policy.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Lru => "LRU",
            Policy::Mru => "MRU",
            Policy::Fifo => "FIFO",
            Policy::Optimal => "Optimal",
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::ALL
            .into_iter()
            .find(|policy| policy.name() == s)
            .ok_or_else(|| Error::UnknownPolicy(s.to_string()))
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
