use crate::{
    ast::{common::DropMode, drop_table::DropTable},
    clause::Clause,
    error::RenderError,
    renderer::{
        emulation::{self, DdlStatement},
        Render, Renderer,
    },
};

impl Render for DropTable {
    fn clauses(&self) -> &'static [Clause] {
        &[Clause::DropTable]
    }

    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        // Refuse an explicit mode the target grammar cannot say, before
        // any text is emitted. Dropping the modifier silently would
        // change what the statement does.
        if let Some(mode) = self.drop_mode
            && r.capabilities().no_drop_table_cascade.contains(r.family())
        {
            return Err(RenderError::Unsupported {
                construct: match mode {
                    DropMode::Cascade => "DROP TABLE CASCADE",
                    DropMode::Restrict => "DROP TABLE RESTRICT",
                },
                dialect: r.dialect(),
            });
        }

        if self.if_exists && !supports_if_exists(r) {
            emulation::begin_try_catch(r, DdlStatement::DropTable)?;
            render_drop_table(self, r)?;
            emulation::end_try_catch(r, DdlStatement::DropTable)?;
        } else {
            render_drop_table(self, r)?;
        }
        Ok(())
    }
}

fn supports_if_exists(r: &Renderer) -> bool {
    !r.capabilities().no_drop_table_if_exists.contains(r.family())
}

fn render_drop_table(stmt: &DropTable, r: &mut Renderer) -> Result<(), RenderError> {
    r.start(Clause::DropTableBody);
    r.keyword("DROP TABLE");
    if stmt.if_exists && supports_if_exists(r) {
        r.sql(" ");
        r.keyword("IF EXISTS");
    }
    r.sql(" ");
    r.visit(&stmt.table)?;

    match stmt.drop_mode {
        Some(DropMode::Cascade) => {
            r.sql(" ");
            r.keyword("CASCADE");
        }
        Some(DropMode::Restrict) => {
            r.sql(" ");
            r.keyword("RESTRICT");
        }
        None => {}
    }
    r.end(Clause::DropTableBody);
    Ok(())
}
