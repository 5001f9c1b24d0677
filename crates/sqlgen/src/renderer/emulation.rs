//! Existence-guard emulations for DDL.
//!
//! Dialects that lack `IF EXISTS` / `IF NOT EXISTS` get the same effect
//! from a block that swallows exactly the error the missing clause would
//! have prevented. The block texts live here as a fixed registry keyed by
//! family and statement; renderers never branch on dialects directly.
//!
//! Guard text is emitted verbatim and is not subject to the keyword-case
//! setting.

use crate::{
    dialect::Family,
    error::RenderError,
    renderer::Renderer,
};
use tracing::trace;

/// The DDL statement being guarded. Selects the error code the guard
/// suppresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdlStatement {
    CreateSchema,
    CreateTable,
    DropSchema,
    DropTable,
}

impl DdlStatement {
    /// The construct name reported when no guard exists for a family.
    pub fn construct(self) -> &'static str {
        match self {
            DdlStatement::CreateSchema => "CREATE SCHEMA IF NOT EXISTS",
            DdlStatement::CreateTable => "CREATE TABLE IF NOT EXISTS",
            DdlStatement::DropSchema => "DROP SCHEMA IF EXISTS",
            DdlStatement::DropTable => "DROP TABLE IF EXISTS",
        }
    }
}

/// One guard template. `open` precedes the core statement, `close` follows
/// it. When `dynamic` is set the core is carried inside a `'..'` string
/// (dynamic SQL), because the family's block grammar cannot hold bare DDL;
/// `open` then ends with the opening quote and `close` starts with the
/// closing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guard {
    pub open: &'static str,
    pub close: &'static str,
    pub dynamic: bool,
}

/// Looks up the guard template for a family and statement. `None` means
/// the family has no registered emulation; rendering then fails rather
/// than producing SQL with silently altered meaning.
pub fn existence_guard(family: Family, statement: DdlStatement) -> Option<Guard> {
    use DdlStatement::*;

    match (family, statement) {
        // Derby has no dynamic SQL; an ATOMIC block with a continue
        // handler for the exact SQLSTATE stands in.
        (Family::Derby, DropSchema) => Some(Guard {
            open: "BEGIN ATOMIC DECLARE CONTINUE HANDLER FOR SQLSTATE '42Y07' BEGIN END;",
            close: "; END",
            dynamic: false,
        }),
        (Family::Derby, DropTable) => Some(Guard {
            open: "BEGIN ATOMIC DECLARE CONTINUE HANDLER FOR SQLSTATE '42Y55' BEGIN END;",
            close: "; END",
            dynamic: false,
        }),
        (Family::Derby, CreateSchema) => Some(Guard {
            open: "BEGIN ATOMIC DECLARE CONTINUE HANDLER FOR SQLSTATE 'X0Y68' BEGIN END;",
            close: "; END",
            dynamic: false,
        }),
        (Family::Derby, CreateTable) => Some(Guard {
            open: "BEGIN ATOMIC DECLARE CONTINUE HANDLER FOR SQLSTATE 'X0Y32' BEGIN END;",
            close: "; END",
            dynamic: false,
        }),

        // Firebird blocks take DDL only through EXECUTE STATEMENT;
        // SQLCODE -607 is the unsuccessful-metadata-update class raised
        // both for missing and for already-existing objects.
        (Family::Firebird, _) => Some(Guard {
            open: "EXECUTE BLOCK AS BEGIN EXECUTE STATEMENT '",
            close: "'; WHEN SQLCODE -607 DO BEGIN END END",
            dynamic: true,
        }),

        (Family::Oracle, DropTable) => Some(Guard {
            open: "BEGIN EXECUTE IMMEDIATE '",
            close: "'; EXCEPTION WHEN OTHERS THEN IF SQLCODE != -942 THEN RAISE; END IF; END;",
            dynamic: true,
        }),
        (Family::Oracle, DropSchema) => Some(Guard {
            open: "BEGIN EXECUTE IMMEDIATE '",
            close: "'; EXCEPTION WHEN OTHERS THEN IF SQLCODE != -1918 THEN RAISE; END IF; END;",
            dynamic: true,
        }),
        (Family::Oracle, CreateSchema) => Some(Guard {
            open: "BEGIN EXECUTE IMMEDIATE '",
            close: "'; EXCEPTION WHEN OTHERS THEN IF SQLCODE != -1920 THEN RAISE; END IF; END;",
            dynamic: true,
        }),
        (Family::Oracle, CreateTable) => Some(Guard {
            open: "BEGIN EXECUTE IMMEDIATE '",
            close: "'; EXCEPTION WHEN OTHERS THEN IF SQLCODE != -955 THEN RAISE; END IF; END;",
            dynamic: true,
        }),

        // CREATE SCHEMA must be alone in its batch on SQL Server, hence
        // the EXEC wrapper; error 2714 is "there is already an object
        // named .. in the database".
        (Family::SqlServer, CreateSchema | CreateTable) => Some(Guard {
            open: "BEGIN TRY EXEC ('",
            close: "'); END TRY BEGIN CATCH IF ERROR_NUMBER() <> 2714 THROW; END CATCH",
            dynamic: true,
        }),

        _ => None,
    }
}

/// Opens the guard block around a DDL statement, or fails when the family
/// has none registered.
pub(crate) fn begin_try_catch(
    r: &mut Renderer,
    statement: DdlStatement,
) -> Result<(), RenderError> {
    let guard = lookup(r, statement)?;
    trace!(
        dialect = %r.dialect(),
        statement = ?statement,
        "emulating existence clause with an error guard"
    );
    r.sql(guard.open);
    if guard.dynamic {
        r.enter_string_literal();
    } else {
        r.sql(" ");
    }
    Ok(())
}

/// Closes the guard block opened by [`begin_try_catch`].
pub(crate) fn end_try_catch(
    r: &mut Renderer,
    statement: DdlStatement,
) -> Result<(), RenderError> {
    let guard = lookup(r, statement)?;
    if guard.dynamic {
        r.exit_string_literal();
    }
    r.sql(guard.close);
    Ok(())
}

fn lookup(r: &Renderer, statement: DdlStatement) -> Result<Guard, RenderError> {
    existence_guard(r.family(), statement).ok_or(RenderError::Unsupported {
        construct: statement.construct(),
        dialect: r.dialect(),
    })
}
