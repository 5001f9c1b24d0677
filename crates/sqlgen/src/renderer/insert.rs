use crate::{
    ast::insert::{ConflictAction, Insert, OnConflict},
    capability::UpsertSyntax,
    clause::Clause,
    error::RenderError,
    renderer::{Render, Renderer},
};
use tracing::trace;

impl Render for Insert {
    fn clauses(&self) -> &'static [Clause] {
        &[Clause::Insert]
    }

    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        validate(self)?;

        let upsert = match &self.on_conflict {
            Some(_) => {
                let syntax = r.capabilities().upsert_syntax(r.family());
                if syntax == UpsertSyntax::Unsupported {
                    return Err(RenderError::Unsupported {
                        construct: "INSERT ON CONFLICT",
                        dialect: r.dialect(),
                    });
                }
                Some(syntax)
            }
            None => None,
        };

        // The do-nothing form has no trailing clause in the MySQL grammar;
        // it is spelt INSERT IGNORE up front instead.
        let ignore = matches!(
            (&self.on_conflict, upsert),
            (
                Some(OnConflict { action: ConflictAction::DoNothing, .. }),
                Some(UpsertSyntax::OnDuplicateKey)
            )
        );

        // 1. INSERT INTO table (...)
        r.keyword("INSERT");
        if ignore {
            trace!(dialect = %r.dialect(), "emulating do-nothing upsert with INSERT IGNORE");
            r.sql(" ");
            r.keyword("IGNORE");
        }
        r.sql(" ");
        r.keyword("INTO");
        r.sql(" ");
        r.visit(&self.table)?;
        r.sql(" (");
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql(", ");
            }
            r.name(column);
        }
        r.sql(")");

        // 2. VALUES (...) or a SELECT source
        if !self.values.is_empty() {
            render_values(self, r)?;
        } else if let Some(select) = &self.select {
            r.start(Clause::InsertSelect);
            r.sql(" ");
            r.visit(select)?;
            r.end(Clause::InsertSelect);
        }

        if let Some(on_conflict) = &self.on_conflict {
            match upsert {
                Some(UpsertSyntax::OnConflict) => render_on_conflict(on_conflict, r)?,
                Some(UpsertSyntax::OnDuplicateKey) => {
                    render_on_duplicate_key(on_conflict, r)?
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn validate(insert: &Insert) -> Result<(), RenderError> {
    if insert.columns.is_empty() {
        return Err(RenderError::MissingField { statement: "INSERT", field: "columns" });
    }
    if insert.values.is_empty() && insert.select.is_none() {
        return Err(RenderError::MissingField { statement: "INSERT", field: "values" });
    }
    for row in &insert.values {
        if row.len() != insert.columns.len() {
            return Err(RenderError::ArityMismatch {
                statement: "INSERT",
                expected: insert.columns.len(),
                found: row.len(),
            });
        }
    }
    Ok(())
}

fn render_values(insert: &Insert, r: &mut Renderer) -> Result<(), RenderError> {
    r.start(Clause::InsertValues);
    r.sql(" ");
    r.keyword("VALUES");
    r.sql(" ");
    for (i, row) in insert.values.iter().enumerate() {
        if i > 0 {
            r.sql(", ");
        }
        r.sql("(");
        for (j, val) in row.iter().enumerate() {
            if j > 0 {
                r.sql(", ");
            }
            r.visit(val)?;
        }
        r.sql(")");
    }
    r.end(Clause::InsertValues);
    Ok(())
}

fn render_on_conflict(on_conflict: &OnConflict, r: &mut Renderer) -> Result<(), RenderError> {
    r.start(Clause::InsertOnConflict);
    r.sql(" ");
    r.keyword("ON CONFLICT");
    if !on_conflict.columns.is_empty() {
        r.sql(" (");
        for (i, column) in on_conflict.columns.iter().enumerate() {
            if i > 0 {
                r.sql(", ");
            }
            r.name(column);
        }
        r.sql(")");
    }

    match &on_conflict.action {
        ConflictAction::DoNothing => {
            r.sql(" ");
            r.keyword("DO NOTHING");
        }
        ConflictAction::DoUpdate { assignments } => {
            // An update with nothing to set degenerates to DO NOTHING.
            if assignments.is_empty() {
                r.sql(" ");
                r.keyword("DO NOTHING");
            } else {
                r.sql(" ");
                r.keyword("DO UPDATE SET");
                r.sql(" ");
                for (i, assignment) in assignments.iter().enumerate() {
                    if i > 0 {
                        r.sql(", ");
                    }
                    r.name(&assignment.column);
                    r.sql(" = ");
                    r.visit(&assignment.value)?;
                }
            }
        }
    }
    r.end(Clause::InsertOnConflict);
    Ok(())
}

fn render_on_duplicate_key(
    on_conflict: &OnConflict,
    r: &mut Renderer,
) -> Result<(), RenderError> {
    let ConflictAction::DoUpdate { assignments } = &on_conflict.action else {
        // DoNothing was handled by INSERT IGNORE.
        return Ok(());
    };

    if !on_conflict.columns.is_empty() {
        // The MySQL grammar has no conflict target; the duplicate key
        // decides. The statement still renders, the target is advisory.
        trace!(
            dialect = %r.dialect(),
            "conflict target columns have no ON DUPLICATE KEY equivalent"
        );
    }

    r.start(Clause::InsertOnConflict);
    r.sql(" ");
    r.keyword("ON DUPLICATE KEY UPDATE");
    r.sql(" ");
    if assignments.is_empty() {
        // Nothing to set; touch the first conflict column with itself,
        // the idiomatic no-op.
        let column = on_conflict.columns.first().map(String::as_str).unwrap_or("id");
        r.name(column);
        r.sql(" = ");
        r.name(column);
    } else {
        for (i, assignment) in assignments.iter().enumerate() {
            if i > 0 {
                r.sql(", ");
            }
            r.name(&assignment.column);
            r.sql(" = ");
            r.visit(&assignment.value)?;
        }
    }
    r.end(Clause::InsertOnConflict);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        common::TableRef,
        expr::{Expr, Ident},
        insert::ConflictAssignment,
        select::{FromClause, Select},
    };
    use crate::dialect::Dialect;
    use model::Value;

    fn value(val: Value) -> Expr {
        Expr::Value(val)
    }

    fn render(stmt: &Insert, dialect: Dialect) -> Result<(String, Vec<Value>), RenderError> {
        let mut r = Renderer::new(dialect);
        r.visit(stmt)?;
        r.finish()
    }

    fn user_insert() -> Insert {
        Insert {
            table: TableRef::new("users"),
            columns: vec!["name".to_string(), "is_active".to_string()],
            values: vec![
                vec![value(Value::String("Alice".to_string())), value(Value::Boolean(true))],
                vec![value(Value::String("Bob".to_string())), value(Value::Boolean(false))],
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_batch_insert_postgres() {
        let (sql, params) = render(&user_insert(), Dialect::Postgres).unwrap();

        assert_eq!(
            sql,
            r#"INSERT INTO "users" ("name", "is_active") VALUES ($1, $2), ($3, $4)"#
        );
        assert_eq!(params.len(), 4);
        assert_eq!(params[0], Value::String("Alice".to_string()));
        assert_eq!(params[3], Value::Boolean(false));
    }

    #[test]
    fn test_render_batch_insert_mysql() {
        let (sql, params) = render(&user_insert(), Dialect::MySql).unwrap();

        assert_eq!(sql, "INSERT INTO `users` (`name`, `is_active`) VALUES (?, ?), (?, ?)");
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn test_render_insert_on_conflict_do_update() {
        let ast = Insert {
            table: TableRef::new("users"),
            columns: vec!["email".to_string(), "name".to_string()],
            values: vec![vec![
                value(Value::String("a@x.io".to_string())),
                value(Value::String("Alice".to_string())),
            ]],
            on_conflict: Some(OnConflict {
                columns: vec!["email".to_string()],
                action: ConflictAction::DoUpdate {
                    assignments: vec![ConflictAssignment {
                        column: "name".to_string(),
                        value: Expr::Literal("EXCLUDED.name".to_string()),
                    }],
                },
            }),
            ..Default::default()
        };

        let (sql, params) = render(&ast, Dialect::Postgres).unwrap();
        assert_eq!(
            sql,
            r#"INSERT INTO "users" ("email", "name") VALUES ($1, $2) ON CONFLICT ("email") DO UPDATE SET "name" = EXCLUDED.name"#
        );
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_render_on_conflict_do_nothing_without_target() {
        let ast = Insert {
            on_conflict: Some(OnConflict {
                columns: vec![],
                action: ConflictAction::DoNothing,
            }),
            ..user_insert()
        };

        let (sql, _) = render(&ast, Dialect::Sqlite).unwrap();
        assert!(sql.ends_with("ON CONFLICT DO NOTHING"), "{sql}");
    }

    #[test]
    fn test_do_nothing_becomes_insert_ignore_on_mysql() {
        let ast = Insert {
            on_conflict: Some(OnConflict {
                columns: vec!["name".to_string()],
                action: ConflictAction::DoNothing,
            }),
            ..user_insert()
        };

        let (sql, _) = render(&ast, Dialect::MariaDb).unwrap();
        assert!(sql.starts_with("INSERT IGNORE INTO `users`"), "{sql}");
        assert!(!sql.contains("ON CONFLICT"));
        assert!(!sql.contains("ON DUPLICATE KEY"));
    }

    #[test]
    fn test_do_update_becomes_on_duplicate_key_on_mysql() {
        let ast = Insert {
            on_conflict: Some(OnConflict {
                columns: vec!["name".to_string()],
                action: ConflictAction::DoUpdate {
                    assignments: vec![ConflictAssignment {
                        column: "is_active".to_string(),
                        value: value(Value::Boolean(true)),
                    }],
                },
            }),
            ..user_insert()
        };

        let (sql, params) = render(&ast, Dialect::MySql).unwrap();
        assert!(sql.ends_with("ON DUPLICATE KEY UPDATE `is_active` = ?"), "{sql}");
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn test_upsert_fails_where_no_syntax_exists() {
        let ast = Insert {
            on_conflict: Some(OnConflict {
                columns: vec![],
                action: ConflictAction::DoNothing,
            }),
            ..user_insert()
        };

        let err = render(&ast, Dialect::H2).unwrap_err();
        assert_eq!(
            err,
            RenderError::Unsupported { construct: "INSERT ON CONFLICT", dialect: Dialect::H2 }
        );
    }

    #[test]
    fn test_render_insert_from_select() {
        let ast = Insert {
            table: TableRef::new("archive"),
            columns: vec!["id".to_string()],
            select: Some(Select {
                columns: vec![Expr::Identifier(Ident {
                    qualifier: None,
                    name: "id".to_string(),
                })],
                from: Some(FromClause { table: TableRef::new("users"), alias: None }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let (sql, params) = render(&ast, Dialect::Postgres).unwrap();
        assert_eq!(sql, r#"INSERT INTO "archive" ("id") SELECT "id" FROM "users""#);
        assert!(params.is_empty());
    }

    #[test]
    fn test_row_arity_is_checked() {
        let ast = Insert {
            table: TableRef::new("users"),
            columns: vec!["a".to_string(), "b".to_string()],
            values: vec![vec![value(Value::Int(1))]],
            ..Default::default()
        };

        let err = render(&ast, Dialect::Postgres).unwrap_err();
        assert_eq!(
            err,
            RenderError::ArityMismatch { statement: "INSERT", expected: 2, found: 1 }
        );
    }

    #[test]
    fn test_insert_without_source_is_rejected() {
        let ast = Insert {
            table: TableRef::new("users"),
            columns: vec!["a".to_string()],
            ..Default::default()
        };

        let err = render(&ast, Dialect::Postgres).unwrap_err();
        assert_eq!(err, RenderError::MissingField { statement: "INSERT", field: "values" });
    }
}
