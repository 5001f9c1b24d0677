//! Provides a fluent builder for constructing `CreateSchema` ASTs.

use crate::ast::{common::SchemaRef, create_schema::CreateSchema};

#[derive(Debug, Clone)]
pub struct CreateSchemaBuilder {
    ast: CreateSchema,
}

impl CreateSchemaBuilder {
    pub fn new(schema: impl Into<SchemaRef>) -> Self {
        Self {
            ast: CreateSchema { schema: schema.into(), if_not_exists: false },
        }
    }

    pub fn if_not_exists(mut self) -> Self {
        self.ast.if_not_exists = true;
        self
    }

    pub fn build(self) -> CreateSchema {
        self.ast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_create_schema() {
        let ast = CreateSchemaBuilder::new("reporting").if_not_exists().build();

        assert_eq!(ast.schema.name, "reporting");
        assert!(ast.if_not_exists);
    }
}
