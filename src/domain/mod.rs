//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep DTO/report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.

pub mod models;
