use serde::{Deserialize, Serialize};
use std::fmt;

/// Column data types, named after the ANSI spelling where one exists.
///
/// `generic_name` gives the portable spelling; dialect-specific deviations
/// (BYTEA vs BLOB, VARCHAR2, UNIQUEIDENTIFIER) are applied where the target
/// dialect is known, at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    SmallInt,
    Int,
    BigInt,
    Decimal,
    Float,
    Double,
    Boolean,
    Char,
    VarChar,
    Text,
    Date,
    Time,
    Timestamp,
    Uuid,
    Json,
    Bytes,
    /// Escape hatch for engine-specific types, rendered verbatim.
    Custom(String),
}

impl DataType {
    pub fn generic_name(&self) -> &str {
        match self {
            DataType::SmallInt => "SMALLINT",
            DataType::Int => "INTEGER",
            DataType::BigInt => "BIGINT",
            DataType::Decimal => "DECIMAL",
            DataType::Float => "REAL",
            DataType::Double => "DOUBLE PRECISION",
            DataType::Boolean => "BOOLEAN",
            DataType::Char => "CHAR",
            DataType::VarChar => "VARCHAR",
            DataType::Text => "TEXT",
            DataType::Date => "DATE",
            DataType::Time => "TIME",
            DataType::Timestamp => "TIMESTAMP",
            DataType::Uuid => "UUID",
            DataType::Json => "JSON",
            DataType::Bytes => "BLOB",
            DataType::Custom(name) => name,
        }
    }

    /// Whether the type takes a length argument, as in `VARCHAR(255)`.
    pub fn supports_length(&self) -> bool {
        matches!(self, DataType::Char | DataType::VarChar)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.generic_name())
    }
}
