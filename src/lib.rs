#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// A hash map built on the Robin Hood table.
///
/// This module provides a `HashMap` that wraps the `HashTable` with a
/// standard key-value interface and configurable hashers.
pub mod hash_map;

/// A hash set built on the Robin Hood table.
///
/// This module provides a `HashSet` that wraps the `HashTable` with a
/// standard set interface and configurable hashers.
pub mod hash_set;

pub mod hash_table;

pub mod murmur3;

pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use hash_table::HashTable;

/// Hasher builder used by [`HashMap`] and [`HashSet`] unless one is
/// supplied.
pub type DefaultHashBuilder = murmur3::Murmur3BuildHasher;
