//! Shared numeric helpers used across the indicator library.

pub mod math;
