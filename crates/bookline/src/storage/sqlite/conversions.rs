//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, Utc};
use rusqlite::Row;
use uuid::Uuid;

use bookline_core::appointment::Appointment;

/// Convert a SQLite row to an Appointment.
///
/// Expected columns: id, first_name, last_name, time, date, phone, email, created_at
pub fn row_to_appointment(row: &Row) -> rusqlite::Result<Appointment> {
    let id: String = row.get(0)?;
    let first_name: String = row.get(1)?;
    let last_name: String = row.get(2)?;
    let time: String = row.get(3)?;
    let date: String = row.get(4)?;
    let phone: String = row.get(5)?;
    let email: String = row.get(6)?;
    let created_at: String = row.get(7)?;

    Ok(Appointment {
        id: parse_uuid(&id)?,
        first_name,
        last_name,
        time,
        date,
        phone,
        email,
        created_at: parse_datetime(&created_at)?,
    })
}

/// Format a datetime for storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Parse a stored UUID, mapping failures to a rusqlite conversion error.
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a stored RFC 3339 datetime.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime_round_trips() {
        let dt = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let formatted = format_datetime(&dt);

        assert_eq!(parse_datetime(&formatted).unwrap(), dt);
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert!(parse_datetime("not-a-datetime").is_err());
    }

    #[test]
    fn test_parse_uuid_rejects_garbage() {
        assert!(parse_uuid("not-a-uuid").is_err());
    }
}
