//! Infrastructure adapters for external systems.

pub mod mock;
pub mod pokeapi;
