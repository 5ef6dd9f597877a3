//! Hashing primitives shared by the parameter registry

mod hash;
mod quark;

pub use hash::*;
pub use quark::quark;
