//! Reservation endpoints (`/api/reservas`)

use shared::models::{Reservation, ReservationCreate};

use crate::dto::{ReservationCreateDto, ReservationDto};
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

// ========== Reservation API ==========

impl HttpClient {
    /// Create a reservation linking a client, a table, and the acting
    /// staff member to a date, time, and party size.
    pub async fn create_reservation(
        &self,
        payload: &ReservationCreate,
    ) -> ClientResult<Reservation> {
        let body = ReservationCreateDto::from(payload);
        let created: ReservationDto = self.post("/api/reservas", &body).await?;
        tracing::debug!(reservation_id = created.id, "Reservation created");
        created
            .try_into()
            .map_err(|e: chrono::ParseError| ClientError::InvalidResponse(e.to_string()))
    }

    /// Confirm a reserved party's arrival, completing the reservation
    /// server-side.
    pub async fn confirm_reservation_arrival(&self, id: i64) -> ClientResult<Reservation> {
        let updated: ReservationDto = self
            .patch_empty(&format!("/api/reservas/{id}/confirmar"))
            .await?;
        updated
            .try_into()
            .map_err(|e: chrono::ParseError| ClientError::InvalidResponse(e.to_string()))
    }
}
