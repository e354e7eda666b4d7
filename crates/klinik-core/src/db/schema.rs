//! SQLite schema definition.

/// Complete database schema for the clinic key-value store.
///
/// Every slot holds one JSON document, mirroring the browser storage layout.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Key-Value Slots
-- ============================================================================

CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,                         -- JSON document (or raw string for counters)
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;
