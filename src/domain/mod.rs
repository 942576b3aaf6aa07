//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep descriptor/report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — project descriptor, report/output structs.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs and integration
//! contracts. Keep schema-impacting changes synchronized with
//! `docs/contracts/*`.

pub mod models;
