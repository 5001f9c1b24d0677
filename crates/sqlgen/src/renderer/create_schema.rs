use crate::{
    ast::create_schema::CreateSchema,
    clause::Clause,
    error::RenderError,
    renderer::{
        emulation::{self, DdlStatement},
        Render, Renderer,
    },
};

impl Render for CreateSchema {
    fn clauses(&self) -> &'static [Clause] {
        &[Clause::CreateSchema]
    }

    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        if self.if_not_exists && !supports_if_not_exists(r) {
            emulation::begin_try_catch(r, DdlStatement::CreateSchema)?;
            render_create_schema(self, r)?;
            emulation::end_try_catch(r, DdlStatement::CreateSchema)?;
        } else {
            render_create_schema(self, r)?;
        }
        Ok(())
    }
}

fn supports_if_not_exists(r: &Renderer) -> bool {
    !r.capabilities().no_create_schema_if_not_exists.contains(r.family())
}

fn render_create_schema(stmt: &CreateSchema, r: &mut Renderer) -> Result<(), RenderError> {
    r.start(Clause::CreateSchemaBody);
    r.keyword("CREATE SCHEMA");
    if stmt.if_not_exists && supports_if_not_exists(r) {
        r.sql(" ");
        r.keyword("IF NOT EXISTS");
    }
    r.sql(" ");
    r.visit(&stmt.schema)?;
    r.end(Clause::CreateSchemaBody);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::common::SchemaRef, dialect::Dialect};

    fn create_schema(name: &str, if_not_exists: bool) -> CreateSchema {
        CreateSchema { schema: SchemaRef::new(name), if_not_exists }
    }

    fn render(stmt: &CreateSchema, dialect: Dialect) -> String {
        let mut r = Renderer::new(dialect);
        r.visit(stmt).unwrap();
        let (sql, _) = r.finish().unwrap();
        sql
    }

    #[test]
    fn test_render_create_schema() {
        let sql = render(&create_schema("reporting", false), Dialect::Postgres);
        assert_eq!(sql, r#"CREATE SCHEMA "reporting""#);
    }

    #[test]
    fn test_native_if_not_exists() {
        let sql = render(&create_schema("reporting", true), Dialect::Postgres);
        assert_eq!(sql, r#"CREATE SCHEMA IF NOT EXISTS "reporting""#);

        let sql = render(&create_schema("reporting", true), Dialect::MariaDb);
        assert_eq!(sql, "CREATE SCHEMA IF NOT EXISTS `reporting`");
    }

    #[test]
    fn test_emulated_if_not_exists_on_sql_server() {
        let sql = render(&create_schema("reporting", true), Dialect::SqlServer);
        assert_eq!(
            sql,
            "BEGIN TRY EXEC ('CREATE SCHEMA [reporting]'); \
             END TRY BEGIN CATCH IF ERROR_NUMBER() <> 2714 THROW; END CATCH"
        );
        assert!(!sql.contains("IF NOT EXISTS"));
    }
}
