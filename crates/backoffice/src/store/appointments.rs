//! Appointment operations for the row gateway.

use tracing::instrument;

use mw_core::{Appointment, AppointmentId, AppointmentStatus, NewAppointment};

use super::rows::{AppointmentRow, AppointmentStatusPatch, NewAppointmentRow};
use super::{StoreClient, StoreError};

const TABLE: &str = "appointments";

impl StoreClient {
    /// Fetch all appointments, in store-native order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unconfigured, unreachable, or
    /// rejects the request.
    #[instrument(skip(self))]
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, StoreError> {
        let rows: Vec<AppointmentRow> = self.select_all(TABLE).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Insert one appointment and return it with the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the insert; the caller decides
    /// how to surface it.
    #[instrument(skip(self, new), fields(client_name = %new.client_name))]
    pub async fn create_appointment(
        &self,
        new: NewAppointment,
    ) -> Result<Appointment, StoreError> {
        let row: AppointmentRow = self
            .insert_one(TABLE, &NewAppointmentRow::from(new))
            .await?;
        Ok(row.into())
    }

    /// Set the status of one appointment. Any status may be set to any
    /// other; there is no enforced state machine.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the patch.
    #[instrument(skip(self), fields(id = %id, status = %status))]
    pub async fn set_appointment_status(
        &self,
        id: &AppointmentId,
        status: AppointmentStatus,
    ) -> Result<(), StoreError> {
        let _: AppointmentRow = self
            .patch_by_id(TABLE, id.as_str(), &AppointmentStatusPatch { status })
            .await?;
        Ok(())
    }

    /// Hard-delete one appointment.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the delete.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_appointment(&self, id: &AppointmentId) -> Result<(), StoreError> {
        self.delete_by_id(TABLE, id.as_str()).await
    }
}
