//! Common utilities for the Wren selector tools.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored, deduplicated terminal diagnostics

pub mod warning;
