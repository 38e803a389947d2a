use async_trait::async_trait;
use uuid::Uuid;

use crate::appointment::Appointment;

use super::Result;

/// Repository for appointment operations.
///
/// Implemented by each storage backend (SQLite, DynamoDB, in-memory); the
/// server holds it as a trait object so handlers never see backend details.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Gets an appointment by its ID.
    async fn get_appointment(&self, id: Uuid) -> Result<Option<Appointment>>;

    /// Stores a new appointment as a single atomic write.
    async fn create_appointment(&self, appointment: &Appointment) -> Result<()>;

    /// Updates the date and time of an existing appointment.
    ///
    /// Returns [`RepositoryError::NotFound`](super::RepositoryError::NotFound)
    /// if no appointment exists with the given ID. All other fields,
    /// including `created_at`, are left untouched.
    async fn reschedule_appointment(&self, id: Uuid, date: &str, time: &str) -> Result<()>;
}
