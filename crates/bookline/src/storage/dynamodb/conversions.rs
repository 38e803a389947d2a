//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and the
//! Appointment type. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use bookline_core::appointment::Appointment;
use bookline_core::storage::RepositoryError;

/// Partition key attribute. Matches the original table layout.
pub const KEY_ATTRIBUTE: &str = "appointmentId";

/// Convert an Appointment to a DynamoDB item.
pub fn appointment_to_item(appointment: &Appointment) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        KEY_ATTRIBUTE.to_string(),
        AttributeValue::S(appointment.id.to_string()),
    );
    item.insert(
        "firstName".to_string(),
        AttributeValue::S(appointment.first_name.clone()),
    );
    item.insert(
        "lastName".to_string(),
        AttributeValue::S(appointment.last_name.clone()),
    );
    item.insert(
        "time".to_string(),
        AttributeValue::S(appointment.time.clone()),
    );
    item.insert(
        "date".to_string(),
        AttributeValue::S(appointment.date.clone()),
    );
    item.insert(
        "phone".to_string(),
        AttributeValue::S(appointment.phone.clone()),
    );
    item.insert(
        "email".to_string(),
        AttributeValue::S(appointment.email.clone()),
    );
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(appointment.created_at.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item to an Appointment.
pub fn item_to_appointment(
    item: &HashMap<String, AttributeValue>,
) -> Result<Appointment, RepositoryError> {
    Ok(Appointment {
        id: get_uuid(item, KEY_ATTRIBUTE)?,
        first_name: get_string(item, "firstName")?,
        last_name: get_string(item, "lastName")?,
        time: get_string(item, "time")?,
        date: get_string(item, "date")?,
        phone: get_string(item, "phone")?,
        email: get_string(item, "email")?,
        created_at: get_datetime(item, "createdAt")?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required UUID attribute.
fn get_uuid(item: &HashMap<String, AttributeValue>, key: &str) -> Result<Uuid, RepositoryError> {
    let s = get_string(item, key)?;
    Uuid::parse_str(&s)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid UUID {}: {}", key, e)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}
