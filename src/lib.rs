//! # Logbook Map
//!
//! A from-scratch hash map that iterates in insertion order.
//!
//! The container composes two parts:
//!
//! - a **locator directory**: a power-of-two array of slots resolved by
//!   linear probing, mapping key hashes to storage rows
//! - an **entry log**: append-only storage of records, which fixes the
//!   iteration order at first insertion
//!
//! The directory doubles once it is half full, and deletions tombstone log
//! rows in place, so row indices stay stable for the life of the map.
//!
//! ## Basic Usage
//!
//! ```rust
//! use logbook::LogbookMap;
//!
//! let mut map = LogbookMap::new();
//!
//! // Insert values
//! map.set("apple", 1);
//! map.set("banana", 2);
//!
//! // Retrieve values
//! assert_eq!(map.get(&"apple"), Ok(&1));
//!
//! // Update values in place
//! map.set("apple", 10);
//! assert_eq!(map.get(&"apple"), Ok(&10));
//!
//! // Remove values; a failed lookup names the offending key
//! assert_eq!(map.delete(&"apple"), Ok(10));
//! assert!(map.get(&"apple").is_err());
//! ```
//!
//! ## Insertion Order
//!
//! ```rust
//! use logbook::LogbookMap;
//!
//! let map = LogbookMap::from_pairs([("one", 1), ("two", 2), ("three", 3)]);
//!
//! // Iteration follows insertion order, never hash order
//! let keys: Vec<&&str> = map.keys().collect();
//! assert_eq!(keys, vec![&"one", &"two", &"three"]);
//! assert_eq!(map.len(), 3);
//! ```

/// Module implementing the append-only entry log
mod entry_log;
/// Module implementing the linear-probing locator directory
mod locator;
/// Module implementing the public map container
mod logbook_map;
/// Utility extension trait for the map
mod utils;

#[cfg(test)]
mod proptests;

pub use logbook_map::{Iter, KeyNotFound, Keys, LogbookMap, Values};
pub use utils::MapExtensions;
