//! Appointment entity.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::{AppointmentId, AppointmentStatus, SellerId};

/// A booked appointment.
///
/// Created with status `pending`; status transitions are caller-driven and
/// unrestricted. Hard-deleted on request, no archival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Store-assigned identifier.
    pub id: AppointmentId,
    /// Name of the client the appointment is for (free text, not a
    /// reference into the clients table).
    pub client_name: String,
    /// Calendar date of the appointment.
    pub date: NaiveDate,
    /// Clock time of the appointment.
    pub time: NaiveTime,
    /// Service category (free text).
    pub service: String,
    /// Current lifecycle status.
    pub status: AppointmentStatus,
    /// Optional notes.
    pub notes: Option<String>,
    /// Weak reference to the seller handling the appointment.
    pub seller_id: Option<SellerId>,
}

/// Payload for creating an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub client_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub service: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub seller_id: Option<SellerId>,
}

impl NewAppointment {
    /// A fresh booking: status `pending`, no notes, unassigned.
    #[must_use]
    pub fn booking(
        client_name: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        service: impl Into<String>,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            date,
            time,
            service: service.into(),
            status: AppointmentStatus::Pending,
            notes: None,
            seller_id: None,
        }
    }
}
