//! SQL schema for the roster SQLite store.
//!
//! The bootstrap script runs once, inside a single transaction, when the
//! `wrestlers` table is missing. Connection pragmas are applied on every
//! open because SQLite does not persist them.

/// Applied on every connection before anything else.
pub const PRAGMAS: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;
";

/// The table whose presence marks a bootstrapped database.
pub const SENTINEL_TABLE: &str = "wrestlers";

/// Full schema DDL. Must run inside a transaction.
pub const SCHEMA: &str = "
CREATE TABLE shows (
    id    INTEGER PRIMARY KEY,
    name  TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0)
);

CREATE TABLE factions (
    id    INTEGER PRIMARY KEY,
    name  TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0)
);

CREATE TABLE weight_classes (
    id    INTEGER PRIMARY KEY,
    name  TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0)
);

CREATE TABLE wrestler_types (
    id    INTEGER PRIMARY KEY,
    name  TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0)
);

CREATE TABLE wrestlers (
    id               INTEGER PRIMARY KEY,
    name             TEXT    NOT NULL CHECK (length(trim(name)) > 0),
    brand_id         INTEGER NOT NULL REFERENCES shows(id),
    faction_id       INTEGER REFERENCES factions(id),
    type_id          INTEGER NOT NULL REFERENCES wrestler_types(id),
    weight_class_id  INTEGER NOT NULL REFERENCES weight_classes(id),
    alignment        TEXT    NOT NULL DEFAULT 'face'
                     CHECK (alignment IN ('face', 'heel', 'tweener')),
    is_champion      INTEGER NOT NULL DEFAULT 0 CHECK (is_champion IN (0, 1)),
    is_in_faction    INTEGER NOT NULL DEFAULT 0 CHECK (is_in_faction IN (0, 1))
);

-- current_holder_id NULL means the title is vacant.
CREATE TABLE championships (
    id                 INTEGER PRIMARY KEY,
    title_name         TEXT    NOT NULL CHECK (length(trim(title_name)) > 0),
    show_id            INTEGER NOT NULL REFERENCES shows(id),
    is_tag_team        INTEGER NOT NULL DEFAULT 0 CHECK (is_tag_team IN (0, 1)),
    current_holder_id  INTEGER REFERENCES wrestlers(id)
);

CREATE INDEX wrestlers_brand_idx        ON wrestlers(brand_id);
CREATE INDEX wrestlers_faction_idx      ON wrestlers(faction_id);
CREATE INDEX wrestlers_type_idx         ON wrestlers(type_id);
CREATE INDEX wrestlers_weight_class_idx ON wrestlers(weight_class_id);
CREATE INDEX championships_show_idx     ON championships(show_id);
CREATE INDEX championships_holder_idx   ON championships(current_holder_id);

PRAGMA user_version = 1;
";
