//! Service layer containing output and side-effect helpers.
//!
//! ## Service map
//! - `output.rs` — JSON/text output helpers.
//! - `storage.rs` — best-effort query audit log.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod output;
pub mod storage;
