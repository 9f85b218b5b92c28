//! Match-3 simulation (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so callers can write
//! `match3::{core,engine,types}` while the implementation lives under `crates/`.

pub use match3_core as core;
pub use match3_engine as engine;
pub use match3_types as types;
