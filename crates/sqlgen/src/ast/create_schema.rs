//! Defines the AST for a CREATE SCHEMA statement.

use crate::ast::common::SchemaRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSchema {
    pub schema: SchemaRef,
    pub if_not_exists: bool,
}
