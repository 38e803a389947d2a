//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds the appointment repository as a trait object
//! and selects the concrete backend at compile time via feature flags.

use std::sync::Arc;

use bookline_core::storage::AppointmentRepository;

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "dynamodb"))]
compile_error!("Cannot enable both 'sqlite' and 'dynamodb' storage features");

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory', 'sqlite', or 'dynamodb'");

/// Shared application state.
///
/// This is cloned for each request handler. The repository handle is the
/// only shared resource; there is no cross-request mutable state here.
#[derive(Clone)]
pub struct AppState {
    /// Appointment repository backing the intake endpoints.
    pub appointments: Arc<dyn AppointmentRepository>,
}

impl AppState {
    /// Creates a new AppState with the given repository.
    fn build(appointments: Arc<dyn AppointmentRepository>) -> Self {
        Self { appointments }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for testing without any external dependencies.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            Ok(Self::build(Arc::new(InMemoryRepository::new())))
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = SqliteRepository::new(&config.sqlite_path).await?;
            Ok(Self::build(Arc::new(repo)))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = DynamoDbRepository::from_config(config).await;
            Ok(Self::build(Arc::new(repo)))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;

    use std::collections::HashMap;

    use async_trait::async_trait;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    use bookline_core::appointment::Appointment;
    use bookline_core::storage::{AppointmentRepository, RepositoryError, Result};

    /// Minimal in-memory repository for tests.
    ///
    /// Kept independent of the feature-gated backends so router tests compile
    /// regardless of which storage feature is selected.
    #[derive(Debug, Default)]
    struct TestRepository {
        appointments: RwLock<HashMap<Uuid, Appointment>>,
    }

    #[async_trait]
    impl AppointmentRepository for TestRepository {
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

    impl Default for AppState {
        /// Creates an AppState with in-memory storage for testing.
        fn default() -> Self {
            Self::build(Arc::new(TestRepository::default()))
        }
    }
}
