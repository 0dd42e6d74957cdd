//! Booking workflow: the half-hour slot generator and the step-by-step
//! wizard that collects a patient's selections before an appointment is
//! inserted.

pub mod slots;
pub mod wizard;

pub use wizard::{BookingIntent, BookingWizard};
