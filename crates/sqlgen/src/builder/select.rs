//! Provides a type-safe, fluent builder for constructing `Select` ASTs.

// The builder stages its methods through the typestate markers below, so
// clauses can only be added in the order the grammar reads.

use crate::ast::{
    common::{JoinKind, OrderDir, TableRef},
    expr::Expr,
    select::{FromClause, JoinClause, OrderByExpr, Select},
};

/// The initial state of the builder before any clauses have been added.
#[derive(Debug, Default, Clone)]
pub struct InitialState;

/// The state after the `SELECT` clause has been added.
#[derive(Debug, Default, Clone)]
pub struct SelectState;

/// The state after the `FROM` clause has been added.
#[derive(Debug, Default, Clone)]
pub struct FromState;

#[derive(Debug, Clone)]
pub struct SelectBuilder<State> {
    ast: Select,
    state: State,
}

impl SelectBuilder<InitialState> {
    pub fn new() -> Self {
        Self { ast: Select::default(), state: InitialState }
    }

    /// Adds a `SELECT` clause with a list of columns.
    /// This is the entry point for building a select query.
    pub fn select(mut self, columns: Vec<Expr>) -> SelectBuilder<SelectState> {
        self.ast.columns = columns;
        SelectBuilder { ast: self.ast, state: SelectState }
    }
}

impl Default for SelectBuilder<InitialState> {
    fn default() -> Self {
        Self::new()
    }
}

/// The only valid next step after `SELECT` is to specify a `FROM` table.
impl SelectBuilder<SelectState> {
    pub fn distinct(mut self) -> Self {
        self.ast.distinct = true;
        self
    }

    /// Adds a `FROM` clause specifying the primary table.
    pub fn from(mut self, table: impl Into<TableRef>, alias: Option<&str>) -> SelectBuilder<FromState> {
        self.ast.from = Some(FromClause {
            table: table.into(),
            alias: alias.map(String::from),
        });
        SelectBuilder { ast: self.ast, state: FromState }
    }
}

/// After `FROM`, the optional clauses can be added in any order.
impl SelectBuilder<FromState> {
    /// Adds a `JOIN` clause to the query.
    pub fn join(
        mut self,
        kind: JoinKind,
        table: impl Into<TableRef>,
        alias: Option<&str>,
        on: Expr,
    ) -> Self {
        self.ast.joins.push(JoinClause {
            kind,
            table: table.into(),
            alias: alias.map(String::from),
            on,
        });
        self
    }

    /// Adds a `WHERE` clause to the query.
    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.ast.where_clause = Some(condition);
        self
    }

    /// Adds a `GROUP BY` expression.
    pub fn group_by(mut self, expr: Expr) -> Self {
        self.ast.group_by.push(expr);
        self
    }

    /// Adds a `HAVING` condition over the grouped rows.
    pub fn having(mut self, condition: Expr) -> Self {
        self.ast.having = Some(condition);
        self
    }

    /// Adds an `ORDER BY` clause to the query.
    pub fn order_by(mut self, expr: Expr, direction: Option<OrderDir>) -> Self {
        self.ast.order_by.push(OrderByExpr { expr, direction });
        self
    }

    /// Caps the number of returned rows.
    pub fn limit(mut self, limit: u64) -> Self {
        self.ast.limit = Some(limit);
        self
    }

    /// Skips the first `offset` rows.
    pub fn offset(mut self, offset: u64) -> Self {
        self.ast.offset = Some(offset);
        self
    }

    /// Finalizes and returns the constructed `Select` AST.
    pub fn build(self) -> Select {
        self.ast
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::expr::{BinaryOp, BinaryOperator, Ident};
    use model::Value;

    fn ident(name: &str) -> Expr {
        Expr::Identifier(Ident { qualifier: None, name: name.to_string() })
    }

    #[test]
    fn test_build_select_in_stages() {
        let ast = SelectBuilder::new()
            .select(vec![ident("id"), ident("name")])
            .from("users", Some("u"))
            .join(
                JoinKind::Inner,
                "posts",
                Some("p"),
                Expr::BinaryOp(Box::new(BinaryOp {
                    left: ident("p.user_id"),
                    op: BinaryOperator::Eq,
                    right: ident("u.id"),
                })),
            )
            .where_clause(Expr::BinaryOp(Box::new(BinaryOp {
                left: ident("active"),
                op: BinaryOperator::Eq,
                right: Expr::Value(Value::Boolean(true)),
            })))
            .order_by(ident("name"), Some(OrderDir::Asc))
            .limit(25)
            .offset(50)
            .build();

        assert_eq!(ast.columns.len(), 2);
        assert_eq!(ast.joins.len(), 1);
        assert!(ast.where_clause.is_some());
        assert_eq!(ast.limit, Some(25));
        assert_eq!(ast.offset, Some(50));
    }

    #[test]
    fn test_build_distinct_aggregation() {
        let ast = SelectBuilder::new()
            .select(vec![ident("dept")])
            .distinct()
            .from("employees", None)
            .group_by(ident("dept"))
            .having(Expr::BinaryOp(Box::new(BinaryOp {
                left: ident("headcount"),
                op: BinaryOperator::Gt,
                right: Expr::Value(Value::Int(5)),
            })))
            .build();

        assert!(ast.distinct);
        assert_eq!(ast.group_by.len(), 1);
        assert!(ast.having.is_some());
    }
}
