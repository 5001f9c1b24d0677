//! Clause tags and the listener seam.
//!
//! Renderers surround each traversal step with start/end events carrying a
//! `Clause` tag. Listeners observe the statement structure without parsing
//! SQL text; events always nest and are balanced by the time rendering
//! finishes.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Structural positions in a statement, emitted as start/end event pairs.
///
/// Statement-level tags (`DropSchema`) enclose everything rendered for the
/// statement, including any emulation scaffolding. The `..Body` tags
/// enclose only the core statement text, so a guarded rendering still
/// reports where the real statement begins and ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Clause {
    CreateSchema,
    CreateSchemaBody,
    DropSchema,
    DropSchemaBody,
    CreateTable,
    CreateTableBody,
    CreateTableColumns,
    DropTable,
    DropTableBody,
    Insert,
    InsertValues,
    InsertSelect,
    InsertOnConflict,
    Update,
    UpdateSet,
    UpdateWhere,
    Delete,
    DeleteWhere,
    Select,
    SelectColumns,
    SelectFrom,
    SelectJoin,
    SelectWhere,
    SelectGroupBy,
    SelectHaving,
    SelectOrderBy,
    SelectLimit,
}

/// Observes clause boundaries during rendering.
///
/// `clause_start` and `clause_end` arrive strictly nested, mirroring the
/// traversal of the statement tree.
pub trait ClauseListener {
    fn clause_start(&mut self, clause: Clause);
    fn clause_end(&mut self, clause: Clause);
}

/// Forwards clause events to the `tracing` subscriber at TRACE level.
#[derive(Debug, Default)]
pub struct TraceListener;

impl ClauseListener for TraceListener {
    fn clause_start(&mut self, clause: Clause) {
        trace!(?clause, "clause start");
    }

    fn clause_end(&mut self, clause: Clause) {
        trace!(?clause, "clause end");
    }
}
