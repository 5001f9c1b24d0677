use crate::{
    ast::update::Update,
    clause::Clause,
    error::RenderError,
    renderer::{Render, Renderer},
};

impl Render for Update {
    fn clauses(&self) -> &'static [Clause] {
        &[Clause::Update]
    }

    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        if self.assignments.is_empty() {
            return Err(RenderError::MissingField {
                statement: "UPDATE",
                field: "assignments",
            });
        }

        r.keyword("UPDATE");
        r.sql(" ");
        r.visit(&self.table)?;

        r.start(Clause::UpdateSet);
        r.sql(" ");
        r.keyword("SET");
        r.sql(" ");
        for (i, assignment) in self.assignments.iter().enumerate() {
            if i > 0 {
                r.sql(", ");
            }
            r.name(&assignment.column);
            r.sql(" = ");
            r.visit(&assignment.value)?;
        }
        r.end(Clause::UpdateSet);

        if let Some(where_clause) = &self.where_clause {
            r.start(Clause::UpdateWhere);
            r.sql(" ");
            r.keyword("WHERE");
            r.sql(" ");
            r.visit(where_clause)?;
            r.end(Clause::UpdateWhere);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        common::TableRef,
        expr::{BinaryOp, BinaryOperator, Expr, Ident},
        update::Assignment,
    };
    use crate::dialect::Dialect;
    use model::Value;

    fn ident(name: &str) -> Expr {
        Expr::Identifier(Ident { qualifier: None, name: name.to_string() })
    }

    #[test]
    fn test_render_update_with_where() {
        let ast = Update {
            table: TableRef::new("users"),
            assignments: vec![
                Assignment {
                    column: "name".to_string(),
                    value: Expr::Value(Value::String("Alice".to_string())),
                },
                Assignment {
                    column: "active".to_string(),
                    value: Expr::Value(Value::Boolean(false)),
                },
            ],
            where_clause: Some(Expr::BinaryOp(Box::new(BinaryOp {
                left: ident("id"),
                op: BinaryOperator::Eq,
                right: Expr::Value(Value::Int(7)),
            }))),
        };

        let mut r = Renderer::new(Dialect::Postgres);
        r.visit(&ast).unwrap();
        let (sql, params) = r.finish().unwrap();

        assert_eq!(
            sql,
            r#"UPDATE "users" SET "name" = $1, "active" = $2 WHERE ("id" = $3)"#
        );
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_update_requires_assignments() {
        let ast = Update { table: TableRef::new("users"), ..Default::default() };

        let mut r = Renderer::new(Dialect::Postgres);
        let err = r.visit(&ast).unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingField { statement: "UPDATE", field: "assignments" }
        );
    }
}
