//! Table occupation workflow
//!
//! Drives a table from `Free` to `Occupied`: identify the client (or
//! register a new one), pick a party size, then create the reservation
//! and flip the table status. One `OccupySession` lives for one modal
//! interaction and owns nothing but its own form state; it signals
//! completion through [`RefreshTables`] instead of touching the list
//! controller's collection.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Local, Timelike};
use shared::models::{Client, ClientCreate, Reservation, ReservationCreate, Table, TableStatus};
use shared::util::{digits, format_cpf, is_valid_cpf};

use crate::error::{FrontError, FrontResult};
use crate::store::{GuestStore, ReservationStore, TableStore};
use crate::tables::TableListController;

/// Callback invoked after a successful occupation so the visible table
/// list reconciles with the server.
#[async_trait]
pub trait RefreshTables: Send + Sync {
    async fn refresh_tables(&self);
}

#[async_trait]
impl RefreshTables for TableListController {
    async fn refresh_tables(&self) {
        self.refresh().await;
    }
}

/// Where the workflow currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum OccupyPhase {
    /// No client searched yet.
    Idle,
    /// Lookup in flight.
    Searching,
    /// Lookup answered "no such client"; registration is the way out.
    ClientNotFound,
    /// A client is attached; party size is editable and confirm is
    /// available.
    ClientFound(Client),
    /// Reservation + status change in flight.
    Occupying(Client),
    /// Both steps done and the refresh callback invoked.
    Succeeded(Client),
}

impl OccupyPhase {
    pub fn client(&self) -> Option<&Client> {
        match self {
            OccupyPhase::ClientFound(c)
            | OccupyPhase::Occupying(c)
            | OccupyPhase::Succeeded(c) => Some(c),
            _ => None,
        }
    }
}

/// Snapshot of the workflow's form state.
#[derive(Debug, Clone)]
pub struct OccupyState {
    pub phase: OccupyPhase,
    /// CPF as typed, progressively formatted.
    pub cpf_input: String,
    pub party_size: i32,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// One modal-scoped occupation attempt for a single table.
pub struct OccupySession {
    guests: Arc<dyn GuestStore>,
    reservations: Arc<dyn ReservationStore>,
    tables: Arc<dyn TableStore>,
    refresh: Arc<dyn RefreshTables>,
    table: Table,
    staff_id: Option<i64>,
    state: Mutex<OccupyState>,
}

impl OccupySession {
    pub fn new(
        table: Table,
        staff_id: Option<i64>,
        guests: Arc<dyn GuestStore>,
        reservations: Arc<dyn ReservationStore>,
        tables: Arc<dyn TableStore>,
        refresh: Arc<dyn RefreshTables>,
    ) -> Self {
        let state = OccupyState {
            phase: OccupyPhase::Idle,
            cpf_input: String::new(),
            // Suggest a full table until the staff member edits it.
            party_size: table.capacity,
            error: None,
            success: None,
        };
        Self {
            guests,
            reservations,
            tables,
            refresh,
            table,
            staff_id,
            state: Mutex::new(state),
        }
    }

    pub fn snapshot(&self) -> OccupyState {
        self.state.lock().unwrap().clone()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Reset the form, keeping the table. Used when the modal reopens.
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        state.phase = OccupyPhase::Idle;
        state.cpf_input.clear();
        state.party_size = self.table.capacity;
        state.error = None;
        state.success = None;
    }

    /// Update the CPF field. The value is progressively formatted and
    /// any previously found client is discarded, since it no longer
    /// matches what is typed.
    pub fn set_cpf_input(&self, raw: &str) {
        let mut state = self.state.lock().unwrap();
        state.cpf_input = format_cpf(raw);
        state.phase = OccupyPhase::Idle;
    }

    /// Set the party size. Out-of-range values are rejected without
    /// being stored, so the last valid size survives a bad edit.
    pub fn set_party_size(&self, party_size: i32) -> FrontResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Err(e) = self.check_party_size(party_size) {
            state.error = Some(e.user_message());
            return Err(e);
        }
        state.party_size = party_size;
        state.error = None;
        Ok(())
    }

    fn check_party_size(&self, party_size: i32) -> FrontResult<()> {
        if party_size < 1 {
            return Err(FrontError::Validation(
                "Party size must be at least 1.".to_string(),
            ));
        }
        if party_size > self.table.capacity {
            return Err(FrontError::Validation(format!(
                "Party size exceeds the table capacity ({}).",
                self.table.capacity
            )));
        }
        Ok(())
    }

    /// Look up the typed CPF. Not-found is a distinct outcome that
    /// points the staff member at registration; a transport failure
    /// returns to `Idle` so the search can simply be retried.
    pub async fn search_client(&self) -> FrontResult<()> {
        let cpf = {
            let mut state = self.state.lock().unwrap();
            state.error = None;
            state.success = None;
            if !is_valid_cpf(&state.cpf_input) {
                let message = "Enter a valid 11-digit CPF.".to_string();
                state.error = Some(message.clone());
                return Err(FrontError::Validation(message));
            }
            state.phase = OccupyPhase::Searching;
            digits(&state.cpf_input)
        };

        let result = self.guests.find_client_by_cpf(&cpf).await;

        let mut state = self.state.lock().unwrap();
        match result {
            Ok(Some(client)) => {
                state.success = Some(format!("Client \"{}\" found.", client.name));
                state.phase = OccupyPhase::ClientFound(client);
                Ok(())
            }
            Ok(None) => {
                state.error = Some("Client not found. Register them first.".to_string());
                state.phase = OccupyPhase::ClientNotFound;
                Ok(())
            }
            Err(e) => {
                state.error = Some(e.user_message());
                state.phase = OccupyPhase::Idle;
                Err(e.into())
            }
        }
    }

    /// Register a new client and adopt it as the found client, with the
    /// CPF field pre-filled, so the staff member is not forced to
    /// re-search.
    pub async fn register_client(&self, form: ClientCreate) -> FrontResult<Client> {
        {
            let mut state = self.state.lock().unwrap();
            state.error = None;
            state.success = None;
        }
        if form.name.trim().is_empty() || form.email.trim().is_empty() || form.phone.trim().is_empty()
        {
            return self.fail_validation("Fill in all required fields.");
        }
        if !is_valid_cpf(&form.cpf) {
            return self.fail_validation("Enter a valid 11-digit CPF.");
        }

        match self.guests.create_client(&form).await {
            Ok(client) => {
                let mut state = self.state.lock().unwrap();
                state.success = Some(format!("Client {} registered.", client.name));
                state.cpf_input = format_cpf(&client.cpf);
                state.phase = OccupyPhase::ClientFound(client.clone());
                Ok(client)
            }
            Err(e) => {
                let mut state = self.state.lock().unwrap();
                state.error = Some(e.user_message());
                Err(e.into())
            }
        }
    }

    fn fail_validation<T>(&self, message: &str) -> FrontResult<T> {
        let mut state = self.state.lock().unwrap();
        state.error = Some(message.to_string());
        Err(FrontError::Validation(message.to_string()))
    }

    /// Confirm the occupation: create a reservation dated now, then
    /// flip the table to `Occupied`, then ask the list to refresh.
    ///
    /// There is no compensation between the two remote steps: if the
    /// status change fails after the reservation was created, the
    /// reservation is left in place and the error is surfaced. The
    /// session returns to `ClientFound` on any failure so the attempt
    /// can be retried without redoing the search.
    pub async fn confirm(&self) -> FrontResult<Reservation> {
        let (client, party_size) = {
            let mut state = self.state.lock().unwrap();
            state.error = None;
            state.success = None;

            let client = match &state.phase {
                OccupyPhase::ClientFound(client) => client.clone(),
                _ => {
                    let message = "Find or register a client before occupying the table.";
                    state.error = Some(message.to_string());
                    return Err(FrontError::Validation(message.to_string()));
                }
            };
            if let Err(e) = self.check_party_size(state.party_size) {
                state.error = Some(e.user_message());
                return Err(e);
            }
            if self.staff_id.is_none() {
                state.error = Some(FrontError::SessionRequired.user_message());
                return Err(FrontError::SessionRequired);
            }

            state.phase = OccupyPhase::Occupying(client.clone());
            (client, state.party_size)
        };

        let now = Local::now();
        let time = now.time();
        let payload = ReservationCreate {
            client_id: client.id,
            table_id: self.table.id,
            employee_id: self.staff_id,
            date: now.date_naive(),
            time: time
                .with_second(0)
                .and_then(|t| t.with_nanosecond(0))
                .unwrap_or(time),
            party_size,
        };

        let result = self.occupy(&payload).await;

        match result {
            Ok(reservation) => {
                {
                    let mut state = self.state.lock().unwrap();
                    state.success = Some(format!(
                        "Table {} occupied by {}.",
                        self.table.number, client.name
                    ));
                    state.phase = OccupyPhase::Succeeded(client);
                }
                self.refresh.refresh_tables().await;
                Ok(reservation)
            }
            Err(e) => {
                let mut state = self.state.lock().unwrap();
                state.error = Some(e.user_message());
                // Retryable: the found client survives the failure.
                state.phase = OccupyPhase::ClientFound(client);
                Err(e)
            }
        }
    }

    async fn occupy(&self, payload: &ReservationCreate) -> FrontResult<Reservation> {
        let reservation = self.reservations.create_reservation(payload).await?;
        tracing::info!(
            reservation_id = reservation.id,
            table = self.table.number,
            "Reservation created, occupying table"
        );
        self.tables
            .update_table_status(self.table.id, TableStatus::Occupied)
            .await?;
        Ok(reservation)
    }
}
