//! SQL schema for the Permitted SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- The applicability vocabulary. Seeded administratively, immutable while
-- serving. `value` is UNIQUE across the whole table, not per dimension:
-- client filters carry a bare value with no dimension, so the value is the
-- sole join key.
CREATE TABLE IF NOT EXISTS contexts (
    context_id  TEXT PRIMARY KEY,
    dimension   TEXT NOT NULL,          -- 'stage' | 'province' | 'program'
    value       TEXT NOT NULL UNIQUE,
    label       TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS questions (
    question_id TEXT PRIMARY KEY,
    slug        TEXT NOT NULL UNIQUE,   -- ^[a-z0-9-]+$
    title       TEXT NOT NULL,
    category    TEXT NOT NULL
);

-- At most one answer per question; owned by it.
CREATE TABLE IF NOT EXISTS answers (
    answer_id    TEXT PRIMARY KEY,
    question_id  TEXT NOT NULL UNIQUE REFERENCES questions(question_id) ON DELETE CASCADE,
    allowed      TEXT NOT NULL,         -- 'YES' | 'NO' | 'DEPENDS'
    conditions   TEXT,
    consequences TEXT,
    verified_at  TEXT NOT NULL          -- ISO 8601 UTC
);

CREATE TABLE IF NOT EXISTS sources (
    source_id   TEXT PRIMARY KEY,
    answer_id   TEXT NOT NULL REFERENCES answers(answer_id) ON DELETE CASCADE,
    name        TEXT NOT NULL,
    url         TEXT NOT NULL,
    authority   TEXT NOT NULL,
    accessed_at TEXT NOT NULL,
    position    INTEGER NOT NULL        -- stable iteration order
);

-- The question <-> context tagging relation.
CREATE TABLE IF NOT EXISTS question_contexts (
    question_id TEXT NOT NULL REFERENCES questions(question_id) ON DELETE CASCADE,
    context_id  TEXT NOT NULL REFERENCES contexts(context_id),
    PRIMARY KEY (question_id, context_id)
);

CREATE INDEX IF NOT EXISTS question_contexts_context_idx ON question_contexts(context_id);
CREATE INDEX IF NOT EXISTS sources_answer_idx            ON sources(answer_id);

PRAGMA user_version = 1;
";
