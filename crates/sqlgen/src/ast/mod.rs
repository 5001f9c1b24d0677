//! Statement trees.
//!
//! Builders produce these, renderers walk them. The types are plain data:
//! construction never validates against a dialect, so the same tree can be
//! rendered for several targets.

pub mod common;
pub mod create_schema;
pub mod create_table;
pub mod delete;
pub mod drop_schema;
pub mod drop_table;
pub mod expr;
pub mod insert;
pub mod select;
pub mod statement;
pub mod update;
