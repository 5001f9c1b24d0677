use crate::{
    ast::{common::DropMode, drop_schema::DropSchema},
    clause::Clause,
    error::RenderError,
    renderer::{
        emulation::{self, DdlStatement},
        Render, Renderer,
    },
};
use tracing::trace;

impl Render for DropSchema {
    fn clauses(&self) -> &'static [Clause] {
        &[Clause::DropSchema]
    }

    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        if self.if_exists && !supports_if_exists(r) {
            emulation::begin_try_catch(r, DdlStatement::DropSchema)?;
            render_drop_schema(self, r)?;
            emulation::end_try_catch(r, DdlStatement::DropSchema)?;
        } else {
            render_drop_schema(self, r)?;
        }
        Ok(())
    }
}

fn supports_if_exists(r: &Renderer) -> bool {
    !r.capabilities().no_drop_schema_if_exists.contains(r.family())
}

fn render_drop_schema(stmt: &DropSchema, r: &mut Renderer) -> Result<(), RenderError> {
    r.start(Clause::DropSchemaBody);
    r.keyword("DROP SCHEMA");
    if stmt.if_exists && supports_if_exists(r) {
        r.sql(" ");
        r.keyword("IF EXISTS");
    }
    r.sql(" ");
    r.visit(&stmt.schema)?;

    // An explicit mode always renders as written; the grammar-mandated
    // RESTRICT only fills the gap when the author chose nothing.
    match stmt.drop_mode {
        Some(DropMode::Cascade) => {
            r.sql(" ");
            r.keyword("CASCADE");
        }
        Some(DropMode::Restrict) => {
            r.sql(" ");
            r.keyword("RESTRICT");
        }
        None if r.capabilities().requires_drop_mode.contains(r.family()) => {
            trace!(dialect = %r.dialect(), "dialect demands a drop mode, emitting RESTRICT");
            r.sql(" ");
            r.keyword("RESTRICT");
        }
        None => {}
    }
    r.end(Clause::DropSchemaBody);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::common::SchemaRef, dialect::Dialect};
    use model::Value;

    fn drop_schema(name: &str, if_exists: bool, drop_mode: Option<DropMode>) -> DropSchema {
        DropSchema { schema: SchemaRef::new(name), if_exists, drop_mode }
    }

    fn render(stmt: &DropSchema, dialect: Dialect) -> (String, Vec<Value>) {
        let mut r = Renderer::new(dialect);
        r.visit(stmt).unwrap();
        r.finish().unwrap()
    }

    #[test]
    fn test_render_plain_drop_schema() {
        let (sql, params) = render(&drop_schema("archive", false, None), Dialect::Postgres);
        assert!(params.is_empty());
        assert_eq!(sql, r#"DROP SCHEMA "archive""#);

        let (sql, _) = render(&drop_schema("archive", false, None), Dialect::MySql);
        assert_eq!(sql, "DROP SCHEMA `archive`");
    }

    #[test]
    fn test_explicit_modes_render_everywhere() {
        for dialect in Dialect::ALL {
            let (sql, _) = render(
                &drop_schema("archive", false, Some(DropMode::Cascade)),
                dialect,
            );
            assert!(sql.contains("CASCADE"), "{dialect}: {sql}");

            let (sql, _) = render(
                &drop_schema("archive", false, Some(DropMode::Restrict)),
                dialect,
            );
            assert!(sql.contains("RESTRICT"), "{dialect}: {sql}");
        }
    }

    #[test]
    fn test_unset_mode_defaults_to_restrict_only_where_mandated() {
        let (sql, _) = render(&drop_schema("archive", false, None), Dialect::Derby);
        assert_eq!(sql, r#"DROP SCHEMA "archive" RESTRICT"#);

        let (sql, _) = render(&drop_schema("archive", false, None), Dialect::Postgres);
        assert_eq!(sql, r#"DROP SCHEMA "archive""#);
    }

    #[test]
    fn test_explicit_cascade_beats_the_mandate() {
        let (sql, _) = render(
            &drop_schema("archive", false, Some(DropMode::Cascade)),
            Dialect::Derby,
        );
        assert_eq!(sql, r#"DROP SCHEMA "archive" CASCADE"#);
    }

    #[test]
    fn test_native_if_exists() {
        let (sql, _) = render(&drop_schema("archive", true, None), Dialect::Postgres);
        assert_eq!(sql, r#"DROP SCHEMA IF EXISTS "archive""#);

        let (sql, _) = render(&drop_schema("archive", true, None), Dialect::H2);
        assert_eq!(sql, r#"DROP SCHEMA IF EXISTS "archive""#);
    }

    #[test]
    fn test_emulated_if_exists_on_firebird() {
        let (sql, params) = render(&drop_schema("archive", true, None), Dialect::Firebird);
        assert!(params.is_empty());
        assert_eq!(
            sql,
            "EXECUTE BLOCK AS BEGIN EXECUTE STATEMENT 'DROP SCHEMA \"archive\"'; \
             WHEN SQLCODE -607 DO BEGIN END END"
        );
        // The emulated form must not leak the unsupported keyword.
        assert!(!sql.contains("IF EXISTS"));
    }

    #[test]
    fn test_emulated_if_exists_on_derby_keeps_the_mandated_restrict() {
        let (sql, _) = render(&drop_schema("archive", true, None), Dialect::Derby);
        assert_eq!(
            sql,
            "BEGIN ATOMIC DECLARE CONTINUE HANDLER FOR SQLSTATE '42Y07' BEGIN END; \
             DROP SCHEMA \"archive\" RESTRICT; END"
        );
    }

    #[test]
    fn test_no_guard_without_if_exists() {
        let (sql, _) = render(&drop_schema("archive", false, None), Dialect::Firebird);
        assert_eq!(sql, r#"DROP SCHEMA "archive""#);
    }
}
