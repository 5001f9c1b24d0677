//! Provides a fluent builder for constructing `Insert` ASTs.

use crate::ast::{
    common::TableRef,
    expr::Expr,
    insert::{ConflictAction, ConflictAssignment, Insert, OnConflict},
    select::Select,
};

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    ast: Insert,
}

impl InsertBuilder {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            ast: Insert { table: table.into(), ..Default::default() },
        }
    }

    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.ast.columns = columns.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Adds a row of values to the insert statement.
    /// This can be called multiple times for a batch insert.
    /// Row arity against the column list is checked at render time.
    pub fn values(mut self, values: Vec<Expr>) -> Self {
        self.ast.values.push(values);
        self
    }

    /// Uses a query as the data source instead of literal rows.
    pub fn from_select(mut self, select: Select) -> Self {
        self.ast.select = Some(select);
        self
    }

    /// On a key collision over `columns`, keep the existing row.
    pub fn on_conflict_do_nothing(mut self, columns: &[&str]) -> Self {
        self.ast.on_conflict = Some(OnConflict {
            columns: columns.iter().map(|s| s.to_string()).collect(),
            action: ConflictAction::DoNothing,
        });
        self
    }

    /// On a key collision over `columns`, update the listed columns.
    pub fn on_conflict_do_update(
        mut self,
        columns: &[&str],
        assignments: Vec<(&str, Expr)>,
    ) -> Self {
        self.ast.on_conflict = Some(OnConflict {
            columns: columns.iter().map(|s| s.to_string()).collect(),
            action: ConflictAction::DoUpdate {
                assignments: assignments
                    .into_iter()
                    .map(|(column, value)| ConflictAssignment {
                        column: column.to_string(),
                        value,
                    })
                    .collect(),
            },
        });
        self
    }

    pub fn build(self) -> Insert {
        self.ast
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Value;

    fn value(val: Value) -> Expr {
        Expr::Value(val)
    }

    #[test]
    fn test_build_single_insert() {
        let ast = InsertBuilder::new("users")
            .columns(&["name", "email"])
            .values(vec![value(Value::from("Alice")), value(Value::from("a@test.com"))])
            .build();

        assert_eq!(ast.table.name, "users");
        assert_eq!(ast.columns, vec!["name", "email"]);
        assert_eq!(ast.values.len(), 1);
        assert_eq!(ast.values[0].len(), 2);
    }

    #[test]
    fn test_build_batch_insert() {
        let ast = InsertBuilder::new("logs")
            .columns(&["level", "message"])
            .values(vec![value(Value::from("info")), value(Value::from("started"))])
            .values(vec![value(Value::from("warn")), value(Value::from("deprecated"))])
            .build();

        assert_eq!(ast.values.len(), 2);
    }

    #[test]
    fn test_build_upsert() {
        let ast = InsertBuilder::new("users")
            .columns(&["email", "name"])
            .values(vec![value(Value::from("a@x.io")), value(Value::from("Alice"))])
            .on_conflict_do_update(
                &["email"],
                vec![("name", Expr::Literal("EXCLUDED.name".into()))],
            )
            .build();

        let on_conflict = ast.on_conflict.unwrap();
        assert_eq!(on_conflict.columns, vec!["email"]);
        assert!(matches!(on_conflict.action, ConflictAction::DoUpdate { .. }));
    }
}
