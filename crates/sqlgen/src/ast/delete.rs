//! Defines the AST for a DELETE statement.

use crate::ast::{common::TableRef, expr::Expr};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    pub table: TableRef,
    pub where_clause: Option<Expr>,
}
