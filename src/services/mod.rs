//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `project.rs` — project descriptor loading/validation + path defaults.
//! - `resolve.rs` — server directory resolution precedence + precondition.
//! - `deploy.rs` — archive copy into the server plugins directory.
//! - `template.rs` — `${token}` expansion for resource files.
//! - `inventory.rs` — plugins-dir jar listing/classification/removal.
//! - `history.rs` — project-local deploy log (JSONL).
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod deploy;
pub mod history;
pub mod inventory;
pub mod output;
pub mod project;
pub mod resolve;
pub mod template;
