//! Common utilities for the selkit crates.
//!
//! This crate provides shared infrastructure used by the library crates:
//! - **Warning System** - colored, deduplicated diagnostics on stderr

pub mod warning;
