//! Named-value registry the flight plan is read from.
//!
//! The producer (a flight-plan downloader running in the same simulator)
//! publishes each flight-plan field as an independently updated entry in a
//! shared registry, addressed by name (`sbh/destination`, `sbh/cdm/tobt`, ...).
//! This module defines the contract the sync consumes from such a registry
//! and two implementations of it:
//!
//! - [`MemoryRegistry`] - in-process store; the producer writes through
//!   `set_*` calls on a shared `Arc`
//! - [`DirectoryRegistry`] - one file per entry under a root directory, so
//!   any external process can act as the producer
//!
//! # Contract
//!
//! Lookups resolve a name to an opaque [`RegistryHandle`] once; the handle
//! stays valid for the registry's lifetime. Byte entries are read with a
//! two-phase protocol: [`DataRegistry::query_len`] returns the current size,
//! then [`DataRegistry::read_into`] copies up to `buf.len()` bytes starting at
//! offset zero. Reads never fail; an entry that disappeared after lookup reads
//! as empty (bytes) or zero (integers).

mod directory;
mod error;
mod memory;
mod r#trait;

pub use directory::DirectoryRegistry;
pub use error::RegistryError;
pub use memory::{MemoryRegistry, RegistryValue};
pub use r#trait::{DataRegistry, RegistryHandle};
