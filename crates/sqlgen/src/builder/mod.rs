//! Fluent builders producing the statement ASTs.
//!
//! Builders stage their methods through typestate where call order
//! matters: a marker type parameter decides which methods exist, so an
//! invalid sequence fails to compile instead of failing to render.

pub mod create_schema;
pub mod create_table;
pub mod delete;
pub mod drop_schema;
pub mod drop_table;
pub mod insert;
pub mod select;
pub mod update;

// --- Typestate Marker Structs ---
// Zero-sized states shared by the staged builders.

/// Marker: no drop mode chosen yet; `cascade()` and `restrict()` are
/// still on the table.
#[derive(Debug, Default, Clone)]
pub struct ModeOpen;

/// Marker: the drop mode is fixed; only `build()` remains.
#[derive(Debug, Default, Clone)]
pub struct ModeSet;
