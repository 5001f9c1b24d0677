//! Provides a fluent builder for constructing `Delete` ASTs.

use crate::ast::{common::TableRef, delete::Delete, expr::Expr};

#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    ast: Delete,
}

impl DeleteBuilder {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            ast: Delete { table: table.into(), where_clause: None },
        }
    }

    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.ast.where_clause = Some(condition);
        self
    }

    pub fn build(self) -> Delete {
        self.ast
    }
}
