use crate::{
    ast::expr::{BinaryOp, BinaryOperator, Expr, FunctionCall, Ident},
    error::RenderError,
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        match self {
            Expr::Identifier(ident) => r.visit(ident),
            Expr::Value(val) => {
                r.add_param(val.clone());
                Ok(())
            }
            Expr::BinaryOp(op) => r.visit(op.as_ref()),
            Expr::FunctionCall(func) => r.visit(func),
            Expr::Alias { expr, alias } => {
                r.visit(expr.as_ref())?;
                r.sql(" ");
                r.keyword("AS");
                r.sql(" ");
                r.name(alias);
                Ok(())
            }
            Expr::Literal(raw) => {
                r.sql(raw);
                Ok(())
            }
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        if let Some(qualifier) = &self.qualifier {
            r.name(qualifier);
            r.sql(".");
        }
        r.name(&self.name);
        Ok(())
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        // Always parenthesised, so operator precedence never depends on
        // the dialect.
        r.sql("(");
        r.visit(&self.left)?;

        let op_str = match self.op {
            BinaryOperator::Eq => " = ",
            BinaryOperator::NotEq => " <> ",
            BinaryOperator::Lt => " < ",
            BinaryOperator::LtEq => " <= ",
            BinaryOperator::Gt => " > ",
            BinaryOperator::GtEq => " >= ",
            BinaryOperator::And => " AND ",
            BinaryOperator::Or => " OR ",
        };
        match self.op {
            BinaryOperator::And | BinaryOperator::Or => {
                r.sql(" ");
                r.keyword(op_str.trim());
                r.sql(" ");
            }
            _ => r.sql(op_str),
        }

        r.visit(&self.right)?;
        r.sql(")");
        Ok(())
    }
}

impl Render for FunctionCall {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        r.sql(&self.name);
        r.sql("(");
        if self.wildcard {
            r.sql("*");
        } else {
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    r.sql(", ");
                }
                r.visit(arg)?;
            }
        }
        r.sql(")");
        Ok(())
    }
}
