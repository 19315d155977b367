//! pagesim - A page replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Transport (server/, bin/pagesim)                  │   │
//! │  │   POST /simulate · POST /compare · CLI run/compare       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Simulation (simulation/)  [pure, stateless]     │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │   Replacers: LRU | MRU | FIFO | Optimal         │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │          Policy + Trace + StepRecord + TraceStats        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Common (common/)                              │   │
//! │  │          PageId + Error + ServerConfig                   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`simulation`] - Replacement policies and traces
//! - [`server`] - HTTP endpoint and front-end
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, Policy};
//!
//! let trace = simulate(Policy::Fifo, &[1, 2, 3, 1, 2, 3], 2);
//! assert_eq!(trace.fault_count(), 6);
//! ```

pub mod common;
pub mod server;
pub mod simulation;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, Result, ServerConfig};

pub use simulation::{
    compare, simulate, simulate_named, Policy, StepRecord, Trace, TraceStats,
};
