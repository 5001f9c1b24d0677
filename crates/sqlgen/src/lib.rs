//! Dialect-aware SQL statement builder and renderer.
//!
//! Statements are assembled as typed ASTs through the fluent builders,
//! then rendered to SQL text for a target [`Dialect`]. Where a dialect
//! lacks native syntax for a construct (`IF EXISTS` on `DROP SCHEMA`,
//! `ON CONFLICT`, `LIMIT`), the renderer substitutes an equivalent
//! emulation or fails with a [`RenderError`] naming the construct.

use crate::ast::expr::{Expr, Ident};
use model::Value;

pub mod ast;
pub mod builder;
pub mod capability;
pub mod clause;
pub mod dialect;
pub mod error;
pub mod macros;
pub mod renderer;

pub use crate::capability::Capabilities;
pub use crate::dialect::Dialect;
pub use crate::error::RenderError;
pub use crate::renderer::{KeywordCase, ParamMode, Render, RenderConfig, Renderer};

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}

pub fn value(val: Value) -> Expr {
    Expr::Value(val)
}

// Statement entry points. Each hands back the statement's builder with the
// construction-time fields already fixed.

pub fn create_schema(schema: impl Into<ast::common::SchemaRef>) -> builder::create_schema::CreateSchemaBuilder {
    builder::create_schema::CreateSchemaBuilder::new(schema)
}

pub fn drop_schema(
    schema: impl Into<ast::common::SchemaRef>,
) -> builder::drop_schema::DropSchemaBuilder<builder::ModeOpen> {
    builder::drop_schema::DropSchemaBuilder::new(schema, false)
}

pub fn drop_schema_if_exists(
    schema: impl Into<ast::common::SchemaRef>,
) -> builder::drop_schema::DropSchemaBuilder<builder::ModeOpen> {
    builder::drop_schema::DropSchemaBuilder::new(schema, true)
}

pub fn create_table(table: impl Into<ast::common::TableRef>) -> builder::create_table::CreateTableBuilder {
    builder::create_table::CreateTableBuilder::new(table)
}

pub fn drop_table(
    table: impl Into<ast::common::TableRef>,
) -> builder::drop_table::DropTableBuilder<builder::ModeOpen> {
    builder::drop_table::DropTableBuilder::new(table, false)
}

pub fn drop_table_if_exists(
    table: impl Into<ast::common::TableRef>,
) -> builder::drop_table::DropTableBuilder<builder::ModeOpen> {
    builder::drop_table::DropTableBuilder::new(table, true)
}

pub fn insert_into(table: impl Into<ast::common::TableRef>) -> builder::insert::InsertBuilder {
    builder::insert::InsertBuilder::new(table)
}

pub fn update(table: impl Into<ast::common::TableRef>) -> builder::update::UpdateBuilder {
    builder::update::UpdateBuilder::new(table)
}

pub fn delete_from(table: impl Into<ast::common::TableRef>) -> builder::delete::DeleteBuilder {
    builder::delete::DeleteBuilder::new(table)
}

pub fn select(columns: Vec<Expr>) -> builder::select::SelectBuilder<builder::select::SelectState> {
    builder::select::SelectBuilder::new().select(columns)
}

/// Entry point for turning a finished AST into SQL.
///
/// Implemented for every [`Render`] node, so whole statements and bare
/// expressions alike can be rendered directly.
pub trait ToSql {
    /// Renders for `dialect` with the default configuration: bound
    /// parameters, upper-case keywords.
    fn to_sql(&self, dialect: Dialect) -> Result<(String, Vec<Value>), RenderError> {
        self.to_sql_with(dialect, RenderConfig::default())
    }

    /// Renders for `dialect` with an explicit configuration.
    fn to_sql_with(
        &self,
        dialect: Dialect,
        config: RenderConfig,
    ) -> Result<(String, Vec<Value>), RenderError>;
}

impl<T: Render> ToSql for T {
    fn to_sql_with(
        &self,
        dialect: Dialect,
        config: RenderConfig,
    ) -> Result<(String, Vec<Value>), RenderError> {
        let mut renderer = Renderer::with_config(dialect, config);
        renderer.visit(self)?;
        renderer.finish()
    }
}
