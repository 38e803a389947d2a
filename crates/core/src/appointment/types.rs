use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RegisterAppointment;

/// A booking record with client contact info, a date, and a time.
///
/// The `id` is generated server-side and is never accepted from the client.
/// `created_at` is set once at write time and never mutated. The `time`,
/// `date`, `phone` and `email` fields are stored verbatim; no format
/// validation is applied to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub time: String,
    pub date: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Creates an appointment from a validated registration payload.
    ///
    /// Assigns a fresh v4 id and stamps `created_at` with the current time.
    pub fn from_registration(payload: RegisterAppointment) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: payload.first_name,
            last_name: payload.last_name,
            time: payload.time,
            date: payload.date,
            phone: payload.phone,
            email: payload.email,
            created_at: Utc::now(),
        }
    }

    /// Sets a specific ID for this appointment (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> RegisterAppointment {
        RegisterAppointment {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            time: "10:00".to_string(),
            date: "2024-05-01".to_string(),
            phone: "555-1234".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    #[test]
    fn test_from_registration_copies_fields() {
        let appointment = Appointment::from_registration(sample_payload());

        assert_eq!(appointment.first_name, "Jane");
        assert_eq!(appointment.last_name, "Doe");
        assert_eq!(appointment.time, "10:00");
        assert_eq!(appointment.date, "2024-05-01");
        assert_eq!(appointment.phone, "555-1234");
        assert_eq!(appointment.email, "jane@example.com");
    }

    #[test]
    fn test_from_registration_generates_distinct_ids() {
        let first = Appointment::from_registration(sample_payload());
        let second = Appointment::from_registration(sample_payload());

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_created_at_is_stamped_at_construction() {
        let before = Utc::now();
        let appointment = Appointment::from_registration(sample_payload());
        let after = Utc::now();

        assert!(appointment.created_at >= before);
        assert!(appointment.created_at <= after);
    }

    #[test]
    fn test_serializes_with_camel_case_field_names() {
        let appointment = Appointment::from_registration(sample_payload());
        let json = serde_json::to_value(&appointment).unwrap();

        assert!(json.get("firstName").is_some());
        assert!(json.get("lastName").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("first_name").is_none());
    }
}
