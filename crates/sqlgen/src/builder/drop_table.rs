//! Staged builder for `DropTable` ASTs.

use crate::ast::{
    common::{DropMode, TableRef},
    drop_table::DropTable,
};
use crate::builder::{ModeOpen, ModeSet};

/// Builds a DROP TABLE statement, with the same staging as the schema
/// variant: `if_exists` fixed at construction, mode set at most once.
#[derive(Debug, Clone)]
pub struct DropTableBuilder<State> {
    ast: DropTable,
    state: State,
}

impl DropTableBuilder<ModeOpen> {
    pub fn new(table: impl Into<TableRef>, if_exists: bool) -> Self {
        Self {
            ast: DropTable { table: table.into(), if_exists, drop_mode: None },
            state: ModeOpen,
        }
    }

    pub fn cascade(mut self) -> DropTableBuilder<ModeSet> {
        self.ast.drop_mode = Some(DropMode::Cascade);
        DropTableBuilder { ast: self.ast, state: ModeSet }
    }

    pub fn restrict(mut self) -> DropTableBuilder<ModeSet> {
        self.ast.drop_mode = Some(DropMode::Restrict);
        DropTableBuilder { ast: self.ast, state: ModeSet }
    }
}

impl<State> DropTableBuilder<State> {
    /// Finalizes and returns the constructed `DropTable` AST.
    pub fn build(self) -> DropTable {
        self.ast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_drop_table() {
        let ast = DropTableBuilder::new("users", true).build();

        assert!(ast.if_exists);
        assert_eq!(ast.table.name, "users");
        assert_eq!(ast.drop_mode, None);
    }

    #[test]
    fn test_build_drop_table_cascade() {
        let ast = DropTableBuilder::new(("app", "users"), false).cascade().build();

        assert_eq!(ast.table.schema.as_deref(), Some("app"));
        assert_eq!(ast.drop_mode, Some(DropMode::Cascade));
    }
}
