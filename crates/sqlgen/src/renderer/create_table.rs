use crate::{
    ast::create_table::{ColumnDef, CreateTable, TableConstraint},
    clause::Clause,
    error::RenderError,
    renderer::{
        emulation::{self, DdlStatement},
        Render, Renderer,
    },
};

impl Render for CreateTable {
    fn clauses(&self) -> &'static [Clause] {
        &[Clause::CreateTable]
    }

    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        if self.columns.is_empty() {
            return Err(RenderError::MissingField {
                statement: "CREATE TABLE",
                field: "columns",
            });
        }

        // DDL cannot carry binds; column defaults render as literals.
        r.begin_inline();
        let result = if self.if_not_exists && !supports_if_not_exists(r) {
            emulation::begin_try_catch(r, DdlStatement::CreateTable)
                .and_then(|_| render_create_table(self, r))
                .and_then(|_| emulation::end_try_catch(r, DdlStatement::CreateTable))
        } else {
            render_create_table(self, r)
        };
        r.end_inline();
        result
    }
}

fn supports_if_not_exists(r: &Renderer) -> bool {
    !r.capabilities().no_create_table_if_not_exists.contains(r.family())
}

fn render_create_table(stmt: &CreateTable, r: &mut Renderer) -> Result<(), RenderError> {
    r.start(Clause::CreateTableBody);
    r.keyword("CREATE TABLE");
    if stmt.if_not_exists && supports_if_not_exists(r) {
        r.sql(" ");
        r.keyword("IF NOT EXISTS");
    }
    r.sql(" ");
    r.visit(&stmt.table)?;
    r.sql(" (");

    r.start(Clause::CreateTableColumns);
    let num_cols = stmt.columns.len();
    for (i, col) in stmt.columns.iter().enumerate() {
        r.sql("\n\t");
        r.visit(col)?;
        if i < num_cols - 1 || !stmt.constraints.is_empty() {
            r.sql(",");
        }
    }

    for (i, constraint) in stmt.constraints.iter().enumerate() {
        r.sql("\n\t");
        r.visit(constraint)?;
        if i < stmt.constraints.len() - 1 {
            r.sql(",");
        }
    }
    r.end(Clause::CreateTableColumns);

    r.sql("\n)");
    r.end(Clause::CreateTableBody);
    Ok(())
}

impl Render for ColumnDef {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        // Name and Type
        r.name(&self.name);
        r.sql(" ");
        let type_sql = r.dialect().render_data_type(&self.data_type, self.max_length);
        r.sql(&type_sql);

        // Constraints
        if self.is_primary_key {
            r.sql(" ");
            r.keyword("PRIMARY KEY");
        }
        if !self.is_nullable {
            r.sql(" ");
            r.keyword("NOT NULL");
        }
        if let Some(default) = &self.default_value {
            r.sql(" ");
            r.keyword("DEFAULT");
            r.sql(" ");
            r.visit(default)?;
        }
        Ok(())
    }
}

impl Render for TableConstraint {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        match self {
            TableConstraint::PrimaryKey { columns } => {
                r.keyword("PRIMARY KEY");
                r.sql(" (");
                render_column_list(columns, r);
                r.sql(")");
            }
            TableConstraint::Unique { columns } => {
                r.keyword("UNIQUE");
                r.sql(" (");
                render_column_list(columns, r);
                r.sql(")");
            }
            TableConstraint::ForeignKey { columns, references, referenced_columns } => {
                r.keyword("FOREIGN KEY");
                r.sql(" (");
                render_column_list(columns, r);
                r.sql(") ");
                r.keyword("REFERENCES");
                r.sql(" ");
                r.visit(references)?;
                r.sql(" (");
                render_column_list(referenced_columns, r);
                r.sql(")");
            }
        }
        Ok(())
    }
}

fn render_column_list(columns: &[String], r: &mut Renderer) {
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            r.sql(", ");
        }
        r.name(column);
    }
}
