use crate::{
    ast::delete::Delete,
    clause::Clause,
    error::RenderError,
    renderer::{Render, Renderer},
};

impl Render for Delete {
    fn clauses(&self) -> &'static [Clause] {
        &[Clause::Delete]
    }

    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        r.keyword("DELETE FROM");
        r.sql(" ");
        r.visit(&self.table)?;

        if let Some(where_clause) = &self.where_clause {
            r.start(Clause::DeleteWhere);
            r.sql(" ");
            r.keyword("WHERE");
            r.sql(" ");
            r.visit(where_clause)?;
            r.end(Clause::DeleteWhere);
        }
        Ok(())
    }
}
