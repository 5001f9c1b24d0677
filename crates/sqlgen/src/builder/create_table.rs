//! Provides a fluent builder for constructing `CreateTable` ASTs.

use crate::ast::{
    common::TableRef,
    create_table::{ColumnDef, CreateTable, TableConstraint},
    expr::Expr,
};
use model::DataType;

#[derive(Debug, Clone)]
pub struct CreateTableBuilder {
    ast: CreateTable,
}

impl CreateTableBuilder {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            ast: CreateTable { table: table.into(), ..Default::default() },
        }
    }

    pub fn if_not_exists(mut self) -> Self {
        self.ast.if_not_exists = true;
        self
    }

    /// Starts a column definition; finish it with [`ColumnBuilder::add`].
    pub fn column(
        self,
        name: &str,
        data_type: DataType,
        max_length: Option<usize>,
    ) -> ColumnBuilder {
        ColumnBuilder::new(self, name, data_type, max_length)
    }

    pub fn primary_key(mut self, columns: &[&str]) -> Self {
        self.ast.constraints.push(TableConstraint::PrimaryKey {
            columns: columns.iter().map(|c| c.to_string()).collect(),
        });
        self
    }

    pub fn unique(mut self, columns: &[&str]) -> Self {
        self.ast.constraints.push(TableConstraint::Unique {
            columns: columns.iter().map(|c| c.to_string()).collect(),
        });
        self
    }

    pub fn foreign_key(
        mut self,
        columns: &[&str],
        references: impl Into<TableRef>,
        referenced_columns: &[&str],
    ) -> Self {
        self.ast.constraints.push(TableConstraint::ForeignKey {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            references: references.into(),
            referenced_columns: referenced_columns.iter().map(|c| c.to_string()).collect(),
        });
        self
    }

    pub fn build(self) -> CreateTable {
        self.ast
    }
}

pub struct ColumnBuilder {
    table_builder: CreateTableBuilder,
    column: ColumnDef,
}

impl ColumnBuilder {
    fn new(
        table_builder: CreateTableBuilder,
        name: &str,
        data_type: DataType,
        max_length: Option<usize>,
    ) -> Self {
        Self {
            table_builder,
            column: ColumnDef {
                name: name.to_string(),
                data_type,
                is_nullable: false, // Columns are NOT NULL by default
                is_primary_key: false,
                default_value: None,
                max_length,
            },
        }
    }

    pub fn nullable(mut self) -> Self {
        self.column.is_nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.column.is_primary_key = true;
        self
    }

    pub fn default_value(mut self, default_value: Expr) -> Self {
        self.column.default_value = Some(default_value);
        self
    }

    /// Appends the column and hands control back to the table builder.
    pub fn add(mut self) -> CreateTableBuilder {
        self.table_builder.ast.columns.push(self.column);
        self.table_builder
    }
}
