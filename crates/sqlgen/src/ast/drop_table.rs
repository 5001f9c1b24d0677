//! Defines the AST for a DROP TABLE statement.

use crate::ast::common::{DropMode, TableRef};
use serde::{Deserialize, Serialize};

/// Represents a complete DROP TABLE statement.
///
/// Follows the same conventions as DROP SCHEMA: `if_exists` is fixed at
/// construction, `drop_mode` is tri-state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTable {
    pub table: TableRef,
    pub if_exists: bool,
    pub drop_mode: Option<DropMode>,
}
