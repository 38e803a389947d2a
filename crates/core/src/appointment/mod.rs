mod requests;
mod types;

pub use requests::{RegisterAppointment, RescheduleAppointment, VerifyAppointment};
pub use types::Appointment;
