//! Prelude module for the datecalc crate.
//!
//! Re-exports the derive_more macros used by the crate's value types.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, From, Into};
