//! Common utilities for the Age layout engine.
//!
//! This crate provides shared infrastructure used by all Age components:
//! - **Warning System** - colored, deduplicated terminal output for recovered
//!   style problems (negative lengths, conflicting min/max constraints, ...)

pub mod warning;
