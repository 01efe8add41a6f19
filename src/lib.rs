//! TUI entity dot (workspace facade crate).
//!
//! Re-exports the `tui_entity_dot::{core,term,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_entity_dot_core as core;
pub use tui_entity_dot_term as term;
pub use tui_entity_dot_types as types;
