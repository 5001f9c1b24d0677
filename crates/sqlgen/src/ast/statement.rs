//! A closed sum of every statement the engine renders.

use crate::ast::{
    create_schema::CreateSchema, create_table::CreateTable, delete::Delete,
    drop_schema::DropSchema, drop_table::DropTable, insert::Insert, select::Select,
    update::Update,
};
use serde::{Deserialize, Serialize};

/// Any renderable statement. Useful for callers that route statements
/// generically, e.g. a migration runner holding a mixed batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    CreateSchema(CreateSchema),
    DropSchema(DropSchema),
    CreateTable(CreateTable),
    DropTable(DropTable),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    Select(Select),
}

impl From<CreateSchema> for Statement {
    fn from(stmt: CreateSchema) -> Self {
        Statement::CreateSchema(stmt)
    }
}

impl From<DropSchema> for Statement {
    fn from(stmt: DropSchema) -> Self {
        Statement::DropSchema(stmt)
    }
}

impl From<CreateTable> for Statement {
    fn from(stmt: CreateTable) -> Self {
        Statement::CreateTable(stmt)
    }
}

impl From<DropTable> for Statement {
    fn from(stmt: DropTable) -> Self {
        Statement::DropTable(stmt)
    }
}

impl From<Insert> for Statement {
    fn from(stmt: Insert) -> Self {
        Statement::Insert(stmt)
    }
}

impl From<Update> for Statement {
    fn from(stmt: Update) -> Self {
        Statement::Update(stmt)
    }
}

impl From<Delete> for Statement {
    fn from(stmt: Delete) -> Self {
        Statement::Delete(stmt)
    }
}

impl From<Select> for Statement {
    fn from(stmt: Select) -> Self {
        Statement::Select(stmt)
    }
}
