//! # SmartCalc Profile Store
//!
//! On-device persistence for the single shared [`core_types::UserProfile`],
//! kept as one JSON file on disk. There is no other persistent state anywhere
//! in the system.

pub mod error;
pub mod store;

// Re-export the core types to provide a clean public API.
pub use error::StoreError;
pub use store::{ProfileStore, ProfileUpdate};
