//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — deploy/status/clean/history (touch the server tree).
//! - `project.rs` — resolve/render/validate (project-side only).
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod project;
pub mod runtime;

pub use project::handle_project_commands;
pub use runtime::handle_runtime_commands;
