//! Binary cache of compiled translation tables.
//!
//! One artifact per language identifier, named by the SHA-256 of the
//! identifier and validated against source modification times on load.

mod artifact;
mod store;

pub use artifact::{CacheArtifact, Staleness};
pub use store::{CacheLookup, CacheManager, CacheMiss};
