//! Per-construct capability tables.
//!
//! Each table lists the families that deviate from the common grammar for
//! one construct. The renderers consult these instead of matching on
//! dialects directly, so a new dialect only needs a family assignment and,
//! where it deviates, a row here. The defaults can be overridden through
//! `RenderConfig` for callers that know their server version better.

use crate::dialect::{Family, FamilySet};

/// How a dialect family spells single-statement upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertSyntax {
    /// `ON CONFLICT (..) DO NOTHING | DO UPDATE SET ..`
    OnConflict,
    /// `ON DUPLICATE KEY UPDATE ..`, with `INSERT IGNORE` for the
    /// do-nothing form.
    OnDuplicateKey,
    Unsupported,
}

/// How a dialect family spells row limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitStyle {
    /// `LIMIT n OFFSET m`
    LimitOffset,
    /// `OFFSET m ROWS FETCH NEXT n ROWS ONLY`
    OffsetFetch,
    /// Firebird's `ROWS a TO b`
    RowsRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Families without native `IF EXISTS` on DROP SCHEMA.
    pub no_drop_schema_if_exists: FamilySet,
    /// Families without native `IF EXISTS` on DROP TABLE.
    pub no_drop_table_if_exists: FamilySet,
    /// Families without native `IF NOT EXISTS` on CREATE SCHEMA.
    pub no_create_schema_if_not_exists: FamilySet,
    /// Families without native `IF NOT EXISTS` on CREATE TABLE.
    pub no_create_table_if_not_exists: FamilySet,
    /// Families whose DROP SCHEMA grammar demands an explicit drop mode.
    /// When the statement leaves the mode unset, RESTRICT is emitted.
    pub requires_drop_mode: FamilySet,
    /// Families whose DROP TABLE grammar has no CASCADE/RESTRICT clause at
    /// all. An explicit mode on these is an error, never silently dropped.
    pub no_drop_table_cascade: FamilySet,
    /// Families with native `ON CONFLICT`.
    pub upsert_on_conflict: FamilySet,
    /// Families with `ON DUPLICATE KEY UPDATE` instead.
    pub upsert_on_duplicate_key: FamilySet,
    /// Families that page with `OFFSET .. ROWS FETCH NEXT ..`.
    pub limit_offset_fetch: FamilySet,
    /// Families that page with `ROWS a TO b`.
    pub limit_rows_range: FamilySet,
    /// Families whose paging clause is only legal after ORDER BY. A
    /// constant placeholder ordering is injected when the query has none.
    pub offset_requires_order_by: FamilySet,
}

impl Capabilities {
    pub fn upsert_syntax(&self, family: Family) -> UpsertSyntax {
        if self.upsert_on_conflict.contains(family) {
            UpsertSyntax::OnConflict
        } else if self.upsert_on_duplicate_key.contains(family) {
            UpsertSyntax::OnDuplicateKey
        } else {
            UpsertSyntax::Unsupported
        }
    }

    pub fn limit_style(&self, family: Family) -> LimitStyle {
        if self.limit_offset_fetch.contains(family) {
            LimitStyle::OffsetFetch
        } else if self.limit_rows_range.contains(family) {
            LimitStyle::RowsRange
        } else {
            LimitStyle::LimitOffset
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities {
            no_drop_schema_if_exists: FamilySet::of(&[Family::Derby, Family::Firebird]),
            no_drop_table_if_exists: FamilySet::of(&[
                Family::Derby,
                Family::Firebird,
                Family::Oracle,
            ]),
            no_create_schema_if_not_exists: FamilySet::of(&[
                Family::Derby,
                Family::Firebird,
                Family::Oracle,
                Family::SqlServer,
            ]),
            no_create_table_if_not_exists: FamilySet::of(&[
                Family::Derby,
                Family::Firebird,
                Family::Oracle,
                Family::SqlServer,
            ]),
            requires_drop_mode: FamilySet::of(&[Family::Derby]),
            no_drop_table_cascade: FamilySet::of(&[Family::Derby, Family::SqlServer]),
            upsert_on_conflict: FamilySet::of(&[
                Family::Postgres,
                Family::Sqlite,
                Family::DuckDb,
            ]),
            upsert_on_duplicate_key: FamilySet::of(&[Family::MySql]),
            limit_offset_fetch: FamilySet::of(&[Family::SqlServer, Family::Oracle]),
            limit_rows_range: FamilySet::of(&[Family::Firebird]),
            offset_requires_order_by: FamilySet::of(&[Family::SqlServer]),
        }
    }
}
