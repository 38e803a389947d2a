//! SQLite repository implementation.
//!
//! Implements the repository trait from `bookline_core::storage` using a
//! single `tokio_rusqlite::Connection`. The connection owns a dedicated
//! worker thread, so concurrent requests serialize on it explicitly rather
//! than through hidden shared state.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use bookline_core::appointment::Appointment;
use bookline_core::storage::{AppointmentRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_appointment};
use super::error::map_tokio_rusqlite_error_with_id;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl AppointmentRepository for SqliteRepository {
    async fn get_appointment(&self, id: Uuid) -> Result<Option<Appointment>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_APPOINTMENT_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_appointment) {
                    Ok(appointment) => Ok(Some(appointment)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Appointment", id.to_string()))
    }

    async fn create_appointment(&self, appointment: &Appointment) -> Result<()> {
        let id = appointment.id.to_string();
        let first_name = appointment.first_name.clone();
        let last_name = appointment.last_name.clone();
        let time = appointment.time.clone();
        let date = appointment.date.clone();
        let phone = appointment.phone.clone();
        let email = appointment.email.clone();
        let created_at = format_datetime(&appointment.created_at);
        let appointment_id = appointment.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_APPOINTMENT,
                    rusqlite::params![
                        id, first_name, last_name, time, date, phone, email, created_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Appointment", appointment_id))
    }

    async fn reschedule_appointment(&self, id: Uuid, date: &str, time: &str) -> Result<()> {
        let id_str = id.to_string();
        let date = date.to_string();
        let time = time.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_APPOINTMENT_SCHEDULE,
                        rusqlite::params![id_str, date, time],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Appointment", id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookline_core::appointment::RegisterAppointment;

    fn sample_appointment() -> Appointment {
        Appointment::from_registration(RegisterAppointment {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            time: "10:00".to_string(),
            date: "2024-05-01".to_string(),
            phone: "555-1234".to_string(),
            email: "jane@example.com".to_string(),
        })
    }

    #[tokio::test]
    async fn test_create_and_get_appointment() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let appointment = sample_appointment();

        repo.create_appointment(&appointment).await.unwrap();

        let stored = repo.get_appointment(appointment.id).await.unwrap().unwrap();
        assert_eq!(stored.id, appointment.id);
        assert_eq!(stored.email, appointment.email);
        // RFC 3339 storage keeps sub-second precision
        assert_eq!(stored.created_at, appointment.created_at);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let appointment = sample_appointment();

        repo.create_appointment(&appointment).await.unwrap();
        let result = repo.create_appointment(&appointment).await;

        assert!(matches!(
            result,
            Err(RepositoryError::AlreadyExists { .. })
        ));
    }

    #[tokio::test]
    async fn test_reschedule_updates_row() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let appointment = sample_appointment();
        repo.create_appointment(&appointment).await.unwrap();

        repo.reschedule_appointment(appointment.id, "2024-06-01", "11:30")
            .await
            .unwrap();

        let stored = repo.get_appointment(appointment.id).await.unwrap().unwrap();
        assert_eq!(stored.date, "2024-06-01");
        assert_eq!(stored.time, "11:30");
        assert_eq!(stored.created_at, appointment.created_at);
    }

    #[tokio::test]
    async fn test_reschedule_unknown_id_is_not_found() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let result = repo
            .reschedule_appointment(Uuid::new_v4(), "2024-06-01", "11:30")
            .await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }
}
