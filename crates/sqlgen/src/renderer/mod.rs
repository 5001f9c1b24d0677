//! Defines the core rendering trait and context for converting AST to SQL.

use crate::{
    ast::common::{SchemaRef, TableRef},
    ast::statement::Statement,
    capability::Capabilities,
    clause::{Clause, ClauseListener},
    dialect::{Dialect, Family},
    error::RenderError,
};
use model::Value;
use tracing::debug;

pub mod create_schema;
pub mod create_table;
pub mod delete;
pub mod drop_schema;
pub mod drop_table;
pub mod emulation;
pub mod expr;
pub mod insert;
pub mod select;
pub mod update;

/// A trait for any AST node that can be rendered into a SQL string.
///
/// Nodes are rendered through [`Renderer::visit`], which brackets the
/// node's output with the clause events named by [`Render::clauses`].
pub trait Render {
    /// Clause tags surrounding this node's output, outermost first.
    fn clauses(&self) -> &'static [Clause] {
        &[]
    }

    fn render(&self, r: &mut Renderer) -> Result<(), RenderError>;
}

/// How parameter values travel with the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamMode {
    /// Emit dialect placeholders and collect values in the bind list.
    #[default]
    Bind,
    /// Fold values into the SQL text as dialect-specific literals.
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordCase {
    #[default]
    Upper,
    Lower,
}

/// Immutable per-render settings. Cheap to copy; build one and share it
/// across threads freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub param_mode: ParamMode,
    pub keyword_case: KeywordCase,
    pub capabilities: Capabilities,
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters, provides access to
/// the dialect for syntax-specific details, and fans clause events out to
/// the registered listeners. One renderer serves one statement; state
/// never leaks between renders.
pub struct Renderer<'a> {
    sql: String,
    params: Vec<Value>,
    dialect: Dialect,
    config: RenderConfig,
    listeners: Vec<&'a mut dyn ClauseListener>,
    open_clauses: Vec<Clause>,
    /// Depth of `'..'` string nesting; quotes double per level.
    literal_depth: u32,
    /// Non-zero while inside a statement that cannot carry binds (DDL).
    inline_only: u32,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: Dialect) -> Self {
        Self::with_config(dialect, RenderConfig::default())
    }

    pub fn with_config(dialect: Dialect, config: RenderConfig) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
            config,
            listeners: Vec::new(),
            open_clauses: Vec::new(),
            literal_depth: 0,
            inline_only: 0,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn family(&self) -> Family {
        self.dialect.family()
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.config.capabilities
    }

    pub fn add_listener(&mut self, listener: &'a mut dyn ClauseListener) {
        self.listeners.push(listener);
    }

    /// Renders a node with its clause events.
    pub fn visit<N: Render + ?Sized>(&mut self, node: &N) -> Result<(), RenderError> {
        let clauses = node.clauses();
        for &clause in clauses {
            self.start(clause);
        }
        node.render(self)?;
        for &clause in clauses.iter().rev() {
            self.end(clause);
        }
        Ok(())
    }

    /// Opens a clause and notifies the listeners.
    pub fn start(&mut self, clause: Clause) {
        self.open_clauses.push(clause);
        for listener in self.listeners.iter_mut() {
            listener.clause_start(clause);
        }
    }

    /// Closes the innermost clause, which must be `clause`.
    pub fn end(&mut self, clause: Clause) {
        let open = self.open_clauses.pop();
        debug_assert_eq!(open, Some(clause), "mismatched clause end");
        for listener in self.listeners.iter_mut() {
            listener.clause_end(clause);
        }
    }

    /// Appends raw SQL text.
    pub fn sql(&mut self, s: &str) {
        self.push_text(s);
    }

    /// Appends a keyword, following the configured case. Call sites spell
    /// keywords in upper case.
    pub fn keyword(&mut self, kw: &str) {
        match self.config.keyword_case {
            KeywordCase::Upper => self.push_text(kw),
            KeywordCase::Lower => {
                let lowered = kw.to_ascii_lowercase();
                self.push_text(&lowered);
            }
        }
    }

    /// Appends an identifier, quoted for the dialect.
    pub fn name(&mut self, ident: &str) {
        let quoted = self.dialect.quote_identifier(ident);
        self.push_text(&quoted);
    }

    /// Appends a parameter: a placeholder plus bind-list entry in `Bind`
    /// mode, an inline literal otherwise.
    pub fn add_param(&mut self, value: Value) {
        if self.binds() {
            self.params.push(value);
            let placeholder = self.dialect.placeholder(self.params.len() - 1);
            self.sql.push_str(&placeholder);
        } else {
            self.push_literal(&value);
        }
    }

    /// Consumes the renderer and returns the final SQL string and
    /// parameters. Fails if any renderer left clause events open.
    pub fn finish(self) -> Result<(String, Vec<Value>), RenderError> {
        if !self.open_clauses.is_empty() {
            return Err(RenderError::UnbalancedClauses { depth: self.open_clauses.len() });
        }
        debug!(
            dialect = %self.dialect,
            params = self.params.len(),
            bytes = self.sql.len(),
            "rendering finished"
        );
        Ok((self.sql, self.params))
    }

    /// Marks the start of a region that cannot carry binds, such as DDL.
    /// Parameters inside it are folded to literals regardless of mode.
    pub fn begin_inline(&mut self) {
        self.inline_only += 1;
    }

    pub fn end_inline(&mut self) {
        debug_assert!(self.inline_only > 0);
        self.inline_only -= 1;
    }

    /// Enters a `'..'` string being built up in the output, as used by
    /// emulations that wrap a statement in dynamic SQL. While inside,
    /// everything appended has its quotes doubled, and parameters are
    /// folded inline since a bind cannot cross the string boundary.
    pub(crate) fn enter_string_literal(&mut self) {
        self.literal_depth += 1;
    }

    pub(crate) fn exit_string_literal(&mut self) {
        debug_assert!(self.literal_depth > 0);
        self.literal_depth -= 1;
    }

    fn binds(&self) -> bool {
        self.config.param_mode == ParamMode::Bind
            && self.inline_only == 0
            && self.literal_depth == 0
    }

    fn push_text(&mut self, s: &str) {
        if self.literal_depth == 0 {
            self.sql.push_str(s);
            return;
        }
        // Inside n nested string literals a quote doubles n times over.
        let quotes = 1usize << self.literal_depth;
        for ch in s.chars() {
            if ch == '\'' {
                for _ in 0..quotes {
                    self.sql.push('\'');
                }
            } else {
                self.sql.push(ch);
            }
        }
    }

    fn push_literal(&mut self, value: &Value) {
        match value {
            Value::Null => self.keyword("NULL"),
            Value::Int(v) => self.push_text(&v.to_string()),
            Value::Uint(v) => self.push_text(&v.to_string()),
            Value::Float(v) => self.push_text(&v.to_string()),
            Value::Boolean(v) => {
                let lit = match self.family() {
                    // No boolean literals in these grammars.
                    Family::SqlServer | Family::Oracle => {
                        if *v { "1" } else { "0" }
                    }
                    _ => {
                        if *v { "TRUE" } else { "FALSE" }
                    }
                };
                self.push_text(lit);
            }
            Value::String(v) => self.push_string_literal(v),
            Value::Json(v) => {
                let payload = v.data().to_string();
                self.push_string_literal(&payload);
            }
            Value::Uuid(v) => self.push_string_literal(&v.to_string()),
            Value::Date(v) => self.push_string_literal(&v.to_string()),
            Value::Timestamp(v) => {
                let formatted = v.format("%Y-%m-%d %H:%M:%S%.f").to_string();
                self.push_string_literal(&formatted);
            }
            Value::Bytes(v) => {
                let hex: String = v.iter().map(|b| format!("{b:02x}")).collect();
                let lit = match self.family() {
                    Family::Postgres | Family::Redshift | Family::DuckDb => {
                        format!("'\\x{hex}'")
                    }
                    Family::SqlServer => format!("0x{hex}"),
                    _ => format!("X'{hex}'"),
                };
                self.push_text(&lit);
            }
        }
    }

    fn push_string_literal(&mut self, s: &str) {
        let escaped = s.replace('\'', "''");
        // push_text doubles the outer quotes when nested in an emulation
        // string, so only the payload is escaped here.
        self.push_text("'");
        self.push_text(&escaped);
        self.push_text("'");
    }
}

impl Render for SchemaRef {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        r.name(&self.name);
        Ok(())
    }
}

impl Render for TableRef {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        if let Some(schema) = &self.schema {
            r.name(schema);
            r.sql(".");
        }
        r.name(&self.name);
        Ok(())
    }
}

impl Render for Statement {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        match self {
            Statement::CreateSchema(stmt) => r.visit(stmt),
            Statement::DropSchema(stmt) => r.visit(stmt),
            Statement::CreateTable(stmt) => r.visit(stmt),
            Statement::DropTable(stmt) => r.visit(stmt),
            Statement::Insert(stmt) => r.visit(stmt),
            Statement::Update(stmt) => r.visit(stmt),
            Statement::Delete(stmt) => r.visit(stmt),
            Statement::Select(stmt) => r.visit(stmt),
        }
    }
}
