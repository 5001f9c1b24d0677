//! Common, reusable AST nodes shared by several statements.

use serde::{Deserialize, Serialize};

/// A schema referenced by name. The reference carries no catalog metadata;
/// whether the schema exists is the server's business at execution time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRef {
    pub name: String,
}

impl SchemaRef {
    pub fn new(name: impl Into<String>) -> Self {
        SchemaRef { name: name.into() }
    }
}

impl From<&str> for SchemaRef {
    fn from(name: &str) -> Self {
        SchemaRef::new(name)
    }
}

/// A table referenced by name, optionally schema-qualified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    pub schema: Option<String>,
    pub name: String,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> Self {
        TableRef { schema: None, name: name.into() }
    }

    pub fn with_schema(schema: impl Into<String>, name: impl Into<String>) -> Self {
        TableRef { schema: Some(schema.into()), name: name.into() }
    }
}

impl From<&str> for TableRef {
    fn from(name: &str) -> Self {
        TableRef::new(name)
    }
}

impl From<(&str, &str)> for TableRef {
    fn from((schema, name): (&str, &str)) -> Self {
        TableRef::with_schema(schema, name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderDir {
    Asc,
    Desc,
}

/// What happens to dependent objects when their parent is dropped.
///
/// `None` on the statement means the author expressed no preference; the
/// renderer may still emit RESTRICT where a dialect's grammar demands an
/// explicit mode. An explicit choice here is always rendered as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropMode {
    Cascade,
    Restrict,
}
