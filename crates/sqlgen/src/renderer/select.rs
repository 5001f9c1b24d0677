use crate::{
    ast::{
        common::{JoinKind, OrderDir},
        select::{FromClause, JoinClause, OrderByExpr, Select},
    },
    capability::LimitStyle,
    clause::Clause,
    error::RenderError,
    renderer::{Render, Renderer},
};
use tracing::trace;

impl Render for Select {
    fn clauses(&self) -> &'static [Clause] {
        &[Clause::Select]
    }

    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        // 1. SELECT clause
        r.keyword("SELECT");
        if self.distinct {
            r.sql(" ");
            r.keyword("DISTINCT");
        }
        r.sql(" ");
        r.start(Clause::SelectColumns);
        if self.columns.is_empty() {
            r.sql("*");
        } else {
            for (i, col) in self.columns.iter().enumerate() {
                if i > 0 {
                    r.sql(", ");
                }
                r.visit(col)?;
            }
        }
        r.end(Clause::SelectColumns);

        // 2. FROM
        if let Some(from) = &self.from {
            r.start(Clause::SelectFrom);
            r.sql(" ");
            r.visit(from)?;
            r.end(Clause::SelectFrom);
        }

        // 3. JOIN
        for join in &self.joins {
            r.start(Clause::SelectJoin);
            r.sql(" ");
            r.visit(join)?;
            r.end(Clause::SelectJoin);
        }

        // 4. WHERE
        if let Some(where_clause) = &self.where_clause {
            r.start(Clause::SelectWhere);
            r.sql(" ");
            r.keyword("WHERE");
            r.sql(" ");
            r.visit(where_clause)?;
            r.end(Clause::SelectWhere);
        }

        // 5. GROUP BY / HAVING
        if !self.group_by.is_empty() {
            r.start(Clause::SelectGroupBy);
            r.sql(" ");
            r.keyword("GROUP BY");
            r.sql(" ");
            for (i, expr) in self.group_by.iter().enumerate() {
                if i > 0 {
                    r.sql(", ");
                }
                r.visit(expr)?;
            }
            r.end(Clause::SelectGroupBy);
        }
        if let Some(having) = &self.having {
            r.start(Clause::SelectHaving);
            r.sql(" ");
            r.keyword("HAVING");
            r.sql(" ");
            r.visit(having)?;
            r.end(Clause::SelectHaving);
        }

        // 6. ORDER BY
        if !self.order_by.is_empty() {
            r.start(Clause::SelectOrderBy);
            r.sql(" ");
            r.keyword("ORDER BY");
            r.sql(" ");
            for (i, order) in self.order_by.iter().enumerate() {
                if i > 0 {
                    r.sql(", ");
                }
                r.visit(order)?;
            }
            r.end(Clause::SelectOrderBy);
        }

        // 7. LIMIT / OFFSET, in the style the family expects
        if self.limit.is_some() || self.offset.is_some() {
            render_paging(self, r);
        }
        Ok(())
    }
}

/// Renders the row-limit clause. Counts are part of the statement shape
/// rather than data, so they are always rendered as plain numbers, never
/// bound.
fn render_paging(select: &Select, r: &mut Renderer) {
    r.start(Clause::SelectLimit);
    match r.capabilities().limit_style(r.family()) {
        LimitStyle::LimitOffset => {
            if let Some(limit) = select.limit {
                r.sql(" ");
                r.keyword("LIMIT");
                r.sql(&format!(" {limit}"));
            }
            if let Some(offset) = select.offset {
                r.sql(" ");
                r.keyword("OFFSET");
                r.sql(&format!(" {offset}"));
            }
        }
        LimitStyle::OffsetFetch => {
            if select.order_by.is_empty()
                && r.capabilities().offset_requires_order_by.contains(r.family())
            {
                // The grammar allows OFFSET only after ORDER BY; a
                // constant ordering satisfies it without changing the
                // result.
                trace!(dialect = %r.dialect(), "injecting constant ORDER BY for paging");
                r.sql(" ");
                r.keyword("ORDER BY");
                r.sql(" (");
                r.keyword("SELECT NULL");
                r.sql(")");
            }
            r.sql(" ");
            r.keyword("OFFSET");
            r.sql(&format!(" {} ", select.offset.unwrap_or(0)));
            r.keyword("ROWS");
            if let Some(limit) = select.limit {
                r.sql(" ");
                r.keyword("FETCH NEXT");
                r.sql(&format!(" {limit} "));
                r.keyword("ROWS ONLY");
            }
        }
        LimitStyle::RowsRange => {
            let offset = select.offset.unwrap_or(0);
            let first = offset.saturating_add(1);
            let last = match select.limit {
                Some(limit) => offset.saturating_add(limit),
                // No count given; run to the end of the keyset.
                None => i64::MAX as u64,
            };
            r.sql(" ");
            r.keyword("ROWS");
            r.sql(&format!(" {first} "));
            r.keyword("TO");
            r.sql(&format!(" {last}"));
        }
    }
    r.end(Clause::SelectLimit);
}

impl Render for FromClause {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        r.keyword("FROM");
        r.sql(" ");
        r.visit(&self.table)?;
        if let Some(alias) = &self.alias {
            r.sql(" ");
            r.keyword("AS");
            r.sql(" ");
            r.name(alias);
        }
        Ok(())
    }
}

impl Render for JoinClause {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        let join_str = match self.kind {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL OUTER JOIN",
        };
        r.keyword(join_str);
        r.sql(" ");
        r.visit(&self.table)?;
        if let Some(alias) = &self.alias {
            r.sql(" ");
            r.keyword("AS");
            r.sql(" ");
            r.name(alias);
        }
        r.sql(" ");
        r.keyword("ON");
        r.sql(" ");
        r.visit(&self.on)?;
        Ok(())
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        r.visit(&self.expr)?;
        if let Some(dir) = &self.direction {
            let dir_str = match dir {
                OrderDir::Asc => "ASC",
                OrderDir::Desc => "DESC",
            };
            r.sql(" ");
            r.keyword(dir_str);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        common::TableRef,
        expr::{BinaryOp, BinaryOperator, Expr, FunctionCall, Ident},
    };
    use crate::dialect::Dialect;
    use model::Value;

    fn ident(name: &str) -> Expr {
        Expr::Identifier(Ident { qualifier: None, name: name.to_string() })
    }

    fn qual_ident(qualifier: &str, name: &str) -> Expr {
        Expr::Identifier(Ident {
            qualifier: Some(qualifier.to_string()),
            name: name.to_string(),
        })
    }

    fn value(val: Value) -> Expr {
        Expr::Value(val)
    }

    fn from(table: &str) -> Option<FromClause> {
        Some(FromClause { table: TableRef::new(table), alias: None })
    }

    fn render(ast: &Select, dialect: Dialect) -> (String, Vec<Value>) {
        let mut r = Renderer::new(dialect);
        r.visit(ast).unwrap();
        r.finish().unwrap()
    }

    #[test]
    fn test_simple_select_postgres() {
        let ast = Select {
            columns: vec![ident("id"), ident("name")],
            from: from("users"),
            where_clause: Some(Expr::BinaryOp(Box::new(BinaryOp {
                left: ident("active"),
                op: BinaryOperator::Eq,
                right: value(Value::Boolean(true)),
            }))),
            ..Default::default()
        };

        let (sql, params) = render(&ast, Dialect::Postgres);
        assert_eq!(sql, r#"SELECT "id", "name" FROM "users" WHERE ("active" = $1)"#);
        assert_eq!(params, vec![Value::Boolean(true)]);
    }

    #[test]
    fn test_select_star_when_no_columns() {
        let ast = Select { from: from("users"), ..Default::default() };
        let (sql, _) = render(&ast, Dialect::Postgres);
        assert_eq!(sql, r#"SELECT * FROM "users""#);
    }

    #[test]
    fn test_select_with_join_and_alias() {
        let ast = Select {
            columns: vec![qual_ident("u", "name"), qual_ident("p", "title")],
            from: Some(FromClause { table: TableRef::new("users"), alias: Some("u".into()) }),
            joins: vec![JoinClause {
                kind: JoinKind::Left,
                table: TableRef::new("posts"),
                alias: Some("p".into()),
                on: Expr::BinaryOp(Box::new(BinaryOp {
                    left: qual_ident("p", "user_id"),
                    op: BinaryOperator::Eq,
                    right: qual_ident("u", "id"),
                })),
            }],
            ..Default::default()
        };

        let (sql, _) = render(&ast, Dialect::Postgres);
        assert_eq!(
            sql,
            r#"SELECT "u"."name", "p"."title" FROM "users" AS "u" LEFT JOIN "posts" AS "p" ON ("p"."user_id" = "u"."id")"#
        );
    }

    #[test]
    fn test_select_distinct_group_by_having() {
        let ast = Select {
            distinct: true,
            columns: vec![
                ident("dept"),
                Expr::Alias {
                    expr: Box::new(Expr::FunctionCall(FunctionCall {
                        name: "COUNT".to_string(),
                        args: vec![],
                        wildcard: true,
                    })),
                    alias: "headcount".to_string(),
                },
            ],
            from: from("employees"),
            group_by: vec![ident("dept")],
            having: Some(Expr::BinaryOp(Box::new(BinaryOp {
                left: Expr::FunctionCall(FunctionCall {
                    name: "COUNT".to_string(),
                    args: vec![],
                    wildcard: true,
                }),
                op: BinaryOperator::Gt,
                right: value(Value::Int(5)),
            }))),
            ..Default::default()
        };

        let (sql, params) = render(&ast, Dialect::Postgres);
        assert_eq!(
            sql,
            r#"SELECT DISTINCT "dept", COUNT(*) AS "headcount" FROM "employees" GROUP BY "dept" HAVING (COUNT(*) > $1)"#
        );
        assert_eq!(params, vec![Value::Int(5)]);
    }

    #[test]
    fn test_limit_offset_styles() {
        let ast = Select {
            columns: vec![ident("id")],
            from: from("users"),
            limit: Some(10),
            offset: Some(20),
            ..Default::default()
        };

        let (sql, _) = render(&ast, Dialect::Postgres);
        assert!(sql.ends_with("LIMIT 10 OFFSET 20"), "{sql}");

        let (sql, _) = render(&ast, Dialect::Oracle);
        assert!(sql.ends_with("OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"), "{sql}");
        assert!(!sql.contains("(SELECT NULL)"), "Oracle needs no ordering: {sql}");

        let (sql, _) = render(&ast, Dialect::Firebird);
        assert!(sql.ends_with("ROWS 21 TO 30"), "{sql}");
    }

    #[test]
    fn test_sql_server_paging_orders_by_a_constant_when_unordered() {
        let ast = Select {
            columns: vec![ident("id")],
            from: from("users"),
            limit: Some(10),
            offset: Some(20),
            ..Default::default()
        };

        let (sql, _) = render(&ast, Dialect::SqlServer);
        assert!(
            sql.ends_with("ORDER BY (SELECT NULL) OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"),
            "{sql}"
        );
    }

    #[test]
    fn test_sql_server_paging_keeps_the_real_ordering() {
        let ast = Select {
            columns: vec![ident("id")],
            from: from("users"),
            order_by: vec![OrderByExpr { expr: ident("id"), direction: Some(OrderDir::Desc) }],
            limit: Some(10),
            ..Default::default()
        };

        let (sql, _) = render(&ast, Dialect::SqlServer);
        assert!(
            sql.ends_with("ORDER BY [id] DESC OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY"),
            "{sql}"
        );
        assert!(!sql.contains("(SELECT NULL)"));
    }

    #[test]
    fn test_firebird_paging_edges() {
        let limit_only = Select {
            columns: vec![ident("id")],
            from: from("users"),
            limit: Some(10),
            ..Default::default()
        };
        let (sql, _) = render(&limit_only, Dialect::Firebird);
        assert!(sql.ends_with("ROWS 1 TO 10"), "{sql}");

        let offset_only = Select {
            columns: vec![ident("id")],
            from: from("users"),
            offset: Some(20),
            ..Default::default()
        };
        let (sql, _) = render(&offset_only, Dialect::Firebird);
        assert!(sql.ends_with("ROWS 21 TO 9223372036854775807"), "{sql}");
    }
}
