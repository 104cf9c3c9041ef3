//! Derive macros shared by the value types of the crate.

pub use derive_more::Display;
