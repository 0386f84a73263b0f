//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate query logic to `roster`, rendering to `services/output`.
//! - Keep behavior and output schema stable.

pub mod queries;

pub use queries::handle_query_commands;
