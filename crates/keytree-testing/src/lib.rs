//! Testing infrastructure for keytree tests.
//!
//! This crate provides utilities for writing robust tests:
//! - `MemoryStore`: in-memory key store with Redis glob semantics
//! - `TestWorld`: isolated environment for running the CLI binary
//! - `assertions`: structural checks over rendered tree output
//! - `fixtures`: sample keyspaces

pub mod assertions;
pub mod fixtures;
pub mod glob;
pub mod memory;
pub mod world;

pub use memory::{Lookup, MemoryStore};
pub use world::TestWorld;
