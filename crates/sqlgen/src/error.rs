use crate::dialect::Dialect;
use thiserror::Error;

/// All errors coming from the rendering layer.
///
/// Rendering either succeeds completely or fails with one of these; no
/// partial SQL is handed back on the error path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The target dialect has neither native syntax nor a registered
    /// emulation for the requested construct.
    #[error("{construct} is not supported on {dialect}")]
    Unsupported { construct: &'static str, dialect: Dialect },

    /// The statement is missing a part its grammar cannot do without.
    #[error("{statement} requires {field}")]
    MissingField { statement: &'static str, field: &'static str },

    /// A row carries a different number of values than the column list.
    #[error("{statement} lists {expected} column(s) but a row carries {found} value(s)")]
    ArityMismatch { statement: &'static str, expected: usize, found: usize },

    /// A renderer opened clauses it never closed. Indicates a broken
    /// `Render` implementation, surfaced at `finish` time.
    #[error("clause events are unbalanced: {depth} clause(s) left open")]
    UnbalancedClauses { depth: usize },
}
