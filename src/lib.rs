#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod codec;
mod error;
mod multi_map;
mod query_store;
mod query_view;

// Public API
pub use codec::{decode_query, encode_query};
pub use error::QueryError;
pub use multi_map::QueryMultiMap;
pub use query_store::{QueryStore, QueryStoreExt};
pub use query_view::QueryView;

pub type Result<T> = core::result::Result<T, QueryError>;
