//! Defines the AST for a DROP SCHEMA statement.

use crate::ast::common::{DropMode, SchemaRef};
use serde::{Deserialize, Serialize};

/// Represents a complete DROP SCHEMA statement.
///
/// `if_exists` is fixed when the statement is constructed and cannot be
/// toggled afterwards; the two entry points (`drop_schema`,
/// `drop_schema_if_exists`) are distinct statements, not a flag to flip
/// mid-build. `drop_mode` is tri-state: unset means the author expressed
/// no preference and leaves room for dialect-mandated defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropSchema {
    pub schema: SchemaRef,
    pub if_exists: bool,
    pub drop_mode: Option<DropMode>,
}
