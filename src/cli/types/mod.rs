//! Type-safe wrappers for player directory data.

pub mod ids;
