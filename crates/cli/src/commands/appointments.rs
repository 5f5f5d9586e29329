//! Appointment commands.

use mw_backoffice::{AppState, DataCache};
use mw_core::{AppointmentId, AppointmentStatus, NewAppointment, SellerId};

use super::{CliError, parse_date, parse_time, require_session};

pub async fn add(
    state: &AppState,
    client: &str,
    date: &str,
    time: &str,
    service: &str,
    notes: Option<String>,
    seller: Option<String>,
) -> Result<(), CliError> {
    require_session(state)?;

    let mut new = NewAppointment::booking(client, parse_date(date)?, parse_time(time)?, service);
    new.notes = notes;
    new.seller_id = seller.map(SellerId::new);

    let created = state.store().create_appointment(new).await?;
    println!("Booked appointment {} for {}", created.id, created.client_name);
    Ok(())
}

pub async fn set_status(state: &AppState, id: &str, status: &str) -> Result<(), CliError> {
    require_session(state)?;

    let status: AppointmentStatus = status
        .parse()
        .map_err(|_| CliError::invalid("status", status))?;

    // Load-then-mutate so the optimistic path (and its revert) is the one
    // exercised, same as a long-lived UI session would.
    let mut cache = DataCache::load(state.store()).await?;
    cache
        .set_appointment_status(state.store(), &AppointmentId::new(id), status)
        .await?;
    println!("Appointment {id} is now {status}");
    Ok(())
}

pub async fn delete(state: &AppState, id: &str) -> Result<(), CliError> {
    require_session(state)?;

    let mut cache = DataCache::load(state.store()).await?;
    cache
        .delete_appointment(state.store(), &AppointmentId::new(id))
        .await?;
    println!("Deleted appointment {id}");
    Ok(())
}
