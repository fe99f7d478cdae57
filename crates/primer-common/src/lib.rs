//! Common utilities for the Primer crates.
//!
//! This crate provides shared infrastructure used by every Primer component:
//! - **Warning System** - deduplicated, colored terminal output for inputs
//!   that are accepted but probably not what the caller meant

pub mod warning;
