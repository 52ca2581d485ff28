//! Shared type definitions for the Menagerie animal catalogue.
//!
//! This crate is the single source of truth for the record shape used by
//! the persistence gateway (`menagerie-db`) and the HTTP layer
//! (`menagerie-server`).
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for animal identifiers
//! - [`animal`] -- The [`Animal`] record, its writable [`AnimalInput`], and
//!   the [`AnimalPatch`] applied by updates
//! - [`seed`] -- The fixed starter dataset

pub mod animal;
pub mod ids;
pub mod seed;

// Re-export all public types at crate root for convenience.
pub use animal::{Animal, AnimalInput, AnimalPatch};
pub use ids::{AnimalId, InvalidIdError};
pub use seed::{SEED_COUNT, seed_animals};
