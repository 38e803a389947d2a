//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use bookline_core::appointment::Appointment;
use bookline_core::storage::{AppointmentRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    appointments: Arc<RwLock<HashMap<Uuid, Appointment>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryRepository {
    async fn get_appointment(&self, id: Uuid) -> Result<Option<Appointment>> {
        let appointments = self.appointments.read().await;
        Ok(appointments.get(&id).cloned())
    }

    async fn create_appointment(&self, appointment: &Appointment) -> Result<()> {
        let mut appointments = self.appointments.write().await;
        appointments.insert(appointment.id, appointment.clone());
        Ok(())
    }

    async fn reschedule_appointment(&self, id: Uuid, date: &str, time: &str) -> Result<()> {
        let mut appointments = self.appointments.write().await;
        match appointments.get_mut(&id) {
            Some(appointment) => {
                appointment.date = date.to_string();
                appointment.time = time.to_string();
                Ok(())
            }
            None => Err(RepositoryError::NotFound {
                entity_type: "Appointment",
                id: id.to_string(),
            }),
        }
    }
}
