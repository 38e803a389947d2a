//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the appointments table.
pub const CREATE_TABLES: &str = r#"
-- Appointments table
CREATE TABLE IF NOT EXISTS appointments (
    id TEXT PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    time TEXT NOT NULL,
    date TEXT NOT NULL,
    phone TEXT NOT NULL,
    email TEXT NOT NULL,
    created_at TEXT NOT NULL
);
"#;

pub const INSERT_APPOINTMENT: &str = r#"
INSERT INTO appointments (id, first_name, last_name, time, date, phone, email, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub const SELECT_APPOINTMENT_BY_ID: &str = r#"
SELECT id, first_name, last_name, time, date, phone, email, created_at
FROM appointments
WHERE id = ?1
"#;

pub const UPDATE_APPOINTMENT_SCHEDULE: &str = r#"
UPDATE appointments
SET date = ?2, time = ?3
WHERE id = ?1
"#;
