//! Request payloads for the appointment endpoints.
//!
//! All payloads default missing JSON fields to empty strings so that a
//! request with an absent field deserializes cleanly and is rejected by the
//! field-presence checks rather than by the JSON extractor.

use serde::Deserialize;

/// Payload for `POST /registerAppointment`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterAppointment {
    pub first_name: String,
    pub last_name: String,
    pub time: String,
    pub date: String,
    pub phone: String,
    pub email: String,
}

impl RegisterAppointment {
    /// Returns the names of all required fields that are empty.
    ///
    /// An empty vec means the payload is valid. Field names are reported in
    /// wire (camelCase) form for logging.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.first_name.is_empty() {
            missing.push("firstName");
        }
        if self.last_name.is_empty() {
            missing.push("lastName");
        }
        if self.time.is_empty() {
            missing.push("time");
        }
        if self.date.is_empty() {
            missing.push("date");
        }
        if self.phone.is_empty() {
            missing.push("phone");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        missing
    }
}

/// Payload for `POST /verify_appointment`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VerifyAppointment {
    pub appointment_number: String,
}

/// Payload for `POST /update_appointment` (reschedule).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RescheduleAppointment {
    pub id: String,
    pub new_date: String,
    pub new_time: String,
}

impl RescheduleAppointment {
    /// Returns true if any required field is empty.
    pub fn has_missing_fields(&self) -> bool {
        self.id.is_empty() || self.new_date.is_empty() || self.new_time.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> RegisterAppointment {
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
    fn test_valid_payload_has_no_missing_fields() {
        assert!(valid_registration().missing_fields().is_empty());
    }

    #[test]
    fn test_empty_field_is_reported_missing() {
        let mut payload = valid_registration();
        payload.phone = String::new();

        assert_eq!(payload.missing_fields(), vec!["phone"]);
    }

    #[test]
    fn test_each_field_is_checked() {
        let payload = RegisterAppointment::default();

        assert_eq!(
            payload.missing_fields(),
            vec!["firstName", "lastName", "time", "date", "phone", "email"]
        );
    }

    #[test]
    fn test_whitespace_only_field_counts_as_present() {
        // Presence is an emptiness check, not a trim check, matching the
        // truthiness semantics of the original service.
        let mut payload = valid_registration();
        payload.phone = " ".to_string();

        assert!(payload.missing_fields().is_empty());
    }

    #[test]
    fn test_absent_json_field_deserializes_to_empty() {
        let payload: RegisterAppointment = serde_json::from_str(
            r#"{"firstName":"Jane","lastName":"Doe","time":"10:00","date":"2024-05-01","phone":"555-1234"}"#,
        )
        .unwrap();

        assert_eq!(payload.missing_fields(), vec!["email"]);
    }

    #[test]
    fn test_reschedule_missing_fields() {
        let payload = RescheduleAppointment {
            id: "abc".to_string(),
            new_date: "2024-06-01".to_string(),
            new_time: String::new(),
        };

        assert!(payload.has_missing_fields());
    }

    #[test]
    fn test_reschedule_complete_payload() {
        let payload = RescheduleAppointment {
            id: "abc".to_string(),
            new_date: "2024-06-01".to_string(),
            new_time: "11:30".to_string(),
        };

        assert!(!payload.has_missing_fields());
    }
}
