//! Dialect and family identifiers plus the per-dialect syntax rules.

use model::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete database dialect targeted by the renderer.
///
/// The set is closed: rendering rules are looked up by matching on the
/// variant, so every dialect the engine claims to support is handled
/// exhaustively at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    Postgres,
    CockroachDb,
    Redshift,
    MySql,
    MariaDb,
    Sqlite,
    DuckDb,
    SqlServer,
    Oracle,
    Derby,
    Firebird,
    H2,
    Hsqldb,
}

/// A dialect lineage. Capability rules are keyed by family so that close
/// derivatives (CockroachDB speaking the PostgreSQL grammar, MariaDB the
/// MySQL one) inherit the rules of their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    Postgres,
    Redshift,
    MySql,
    Sqlite,
    DuckDb,
    SqlServer,
    Oracle,
    Derby,
    Firebird,
    H2,
    Hsqldb,
}

impl Dialect {
    pub const ALL: [Dialect; 13] = [
        Dialect::Postgres,
        Dialect::CockroachDb,
        Dialect::Redshift,
        Dialect::MySql,
        Dialect::MariaDb,
        Dialect::Sqlite,
        Dialect::DuckDb,
        Dialect::SqlServer,
        Dialect::Oracle,
        Dialect::Derby,
        Dialect::Firebird,
        Dialect::H2,
        Dialect::Hsqldb,
    ];

    pub fn family(self) -> Family {
        match self {
            Dialect::Postgres | Dialect::CockroachDb => Family::Postgres,
            Dialect::Redshift => Family::Redshift,
            Dialect::MySql | Dialect::MariaDb => Family::MySql,
            Dialect::Sqlite => Family::Sqlite,
            Dialect::DuckDb => Family::DuckDb,
            Dialect::SqlServer => Family::SqlServer,
            Dialect::Oracle => Family::Oracle,
            Dialect::Derby => Family::Derby,
            Dialect::Firebird => Family::Firebird,
            Dialect::H2 => Family::H2,
            Dialect::Hsqldb => Family::Hsqldb,
        }
    }

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Postgres => "PostgreSQL",
            Dialect::CockroachDb => "CockroachDB",
            Dialect::Redshift => "Redshift",
            Dialect::MySql => "MySQL",
            Dialect::MariaDb => "MariaDB",
            Dialect::Sqlite => "SQLite",
            Dialect::DuckDb => "DuckDB",
            Dialect::SqlServer => "SQL Server",
            Dialect::Oracle => "Oracle",
            Dialect::Derby => "Derby",
            Dialect::Firebird => "Firebird",
            Dialect::H2 => "H2",
            Dialect::Hsqldb => "HSQLDB",
        }
    }

    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect, doubling any embedded quote
    /// character.
    ///
    /// - PostgreSQL and most others use double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    /// - SQL Server uses brackets: `[my_column]`
    pub fn quote_identifier(self, ident: &str) -> String {
        match self.family() {
            Family::MySql => format!("`{}`", ident.replace('`', "``")),
            Family::SqlServer => format!("[{}]", ident.replace(']', "]]")),
            _ => format!(r#""{}""#, ident.replace('"', "\"\"")),
        }
    }

    /// Returns the placeholder for a parameterized query. `index` is the
    /// zero-based position of the parameter in the bind list.
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - Oracle uses `:1`, SQL Server uses `@p1`
    /// - MySQL, SQLite and the rest use `?`
    pub fn placeholder(self, index: usize) -> String {
        match self.family() {
            Family::Postgres | Family::Redshift => format!("${}", index + 1),
            Family::Oracle => format!(":{}", index + 1),
            Family::SqlServer => format!("@p{}", index + 1),
            _ => "?".into(),
        }
    }

    /// Renders a generic `DataType` into a database-specific SQL type
    /// string. Only the spellings that deviate from the ANSI name are
    /// matched here.
    pub fn render_data_type(self, data_type: &DataType, max_length: Option<usize>) -> String {
        let mut type_name = self.type_name(data_type).to_string();
        if data_type.supports_length()
            && let Some(max_len) = max_length
        {
            type_name = format!("{type_name}({max_len})");
        }
        type_name
    }

    fn type_name(self, data_type: &DataType) -> &str {
        match (self.family(), data_type) {
            (Family::Postgres | Family::Redshift, DataType::Json) => "JSONB",
            (Family::Postgres | Family::Redshift | Family::DuckDb, DataType::Bytes) => "BYTEA",
            (Family::MySql, DataType::Int) => "INT",
            (Family::MySql, DataType::Double) => "DOUBLE",
            (Family::MySql, DataType::Uuid) => "CHAR(36)",
            (Family::Sqlite, DataType::Double) => "REAL",
            (Family::SqlServer, DataType::Boolean) => "BIT",
            (Family::SqlServer, DataType::Double) => "FLOAT",
            (Family::SqlServer, DataType::Text) => "VARCHAR(MAX)",
            (Family::SqlServer, DataType::Timestamp) => "DATETIME2",
            (Family::SqlServer, DataType::Uuid) => "UNIQUEIDENTIFIER",
            (Family::SqlServer, DataType::Bytes) => "VARBINARY(MAX)",
            (Family::Oracle, DataType::VarChar) => "VARCHAR2",
            (Family::Oracle, DataType::Text) => "CLOB",
            (Family::Oracle, DataType::BigInt) => "NUMBER(19)",
            (Family::Oracle, DataType::Boolean) => "NUMBER(1)",
            (Family::Oracle, DataType::Uuid) => "RAW(16)",
            _ => data_type.generic_name(),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Family {
    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// A fixed set of families, used for the capability tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FamilySet {
    bits: u16,
}

impl FamilySet {
    pub const EMPTY: FamilySet = FamilySet { bits: 0 };

    pub const fn of(families: &[Family]) -> FamilySet {
        let mut bits = 0u16;
        let mut i = 0;
        while i < families.len() {
            bits |= families[i].bit();
            i += 1;
        }
        FamilySet { bits }
    }

    pub const fn contains(self, family: Family) -> bool {
        self.bits & family.bit() != 0
    }

    pub const fn with(self, family: Family) -> FamilySet {
        FamilySet { bits: self.bits | family.bit() }
    }

    pub const fn without(self, family: Family) -> FamilySet {
        FamilySet { bits: self.bits & !family.bit() }
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }
}
