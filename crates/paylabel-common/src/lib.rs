//! Common utilities for the paylabel renderer.
//!
//! This crate provides shared infrastructure used by all label components:
//! - **Warning System** - deduplicated warnings for precondition violations

pub mod warning;
