//! Provides a fluent builder for constructing `Update` ASTs.

use crate::ast::{
    common::TableRef,
    expr::Expr,
    update::{Assignment, Update},
};

#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    ast: Update,
}

impl UpdateBuilder {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            ast: Update { table: table.into(), ..Default::default() },
        }
    }

    /// Adds one `column = value` assignment. Call once per column.
    pub fn set(mut self, column: &str, value: Expr) -> Self {
        self.ast.assignments.push(Assignment { column: column.to_string(), value });
        self
    }

    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.ast.where_clause = Some(condition);
        self
    }

    pub fn build(self) -> Update {
        self.ast
    }
}
