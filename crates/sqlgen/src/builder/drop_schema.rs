//! Staged builder for `DropSchema` ASTs.

use crate::ast::{
    common::{DropMode, SchemaRef},
    drop_schema::DropSchema,
};
use crate::builder::{ModeOpen, ModeSet};

/// Builds a DROP SCHEMA statement.
///
/// `if_exists` is decided at construction and never changes afterwards;
/// use the `drop_schema` / `drop_schema_if_exists` entry points. The drop
/// mode can be set at most once: after `cascade()` or `restrict()` the
/// builder moves to a state where only `build()` exists.
#[derive(Debug, Clone)]
pub struct DropSchemaBuilder<State> {
    ast: DropSchema,
    state: State,
}

impl DropSchemaBuilder<ModeOpen> {
    pub fn new(schema: impl Into<SchemaRef>, if_exists: bool) -> Self {
        Self {
            ast: DropSchema { schema: schema.into(), if_exists, drop_mode: None },
            state: ModeOpen,
        }
    }

    /// Drops dependent objects along with the schema.
    pub fn cascade(mut self) -> DropSchemaBuilder<ModeSet> {
        self.ast.drop_mode = Some(DropMode::Cascade);
        DropSchemaBuilder { ast: self.ast, state: ModeSet }
    }

    /// Refuses the drop while dependent objects remain.
    pub fn restrict(mut self) -> DropSchemaBuilder<ModeSet> {
        self.ast.drop_mode = Some(DropMode::Restrict);
        DropSchemaBuilder { ast: self.ast, state: ModeSet }
    }
}

impl<State> DropSchemaBuilder<State> {
    /// Finalizes and returns the constructed `DropSchema` AST.
    pub fn build(self) -> DropSchema {
        self.ast
    }
}
