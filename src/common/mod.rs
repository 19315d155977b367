//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`ServerConfig`]
//! - Error types
//! - [`PageId`], the page identifier used on the wire

pub mod config;
pub mod error;
mod page_id;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use page_id::PageId;
