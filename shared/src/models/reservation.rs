//! Reservation Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::table::TableStatus;

/// Reservation lifecycle status, tracked server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
    Completed,
}

/// Client summary embedded in a reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationClient {
    pub id: i64,
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
}

/// Table summary embedded in a reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationTable {
    pub id: i64,
    pub number: i32,
    pub capacity: i32,
    pub status: TableStatus,
}

/// Employee summary embedded in a reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationEmployee {
    pub id: i64,
    pub name: String,
}

/// Reservation entity: links a client, a table, a staff member, and a
/// time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub client: ReservationClient,
    pub table: ReservationTable,
    pub employee: Option<ReservationEmployee>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub party_size: i32,
    pub status: ReservationStatus,
}

/// Create reservation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub client_id: i64,
    pub table_id: i64,
    pub employee_id: Option<i64>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub party_size: i32,
}
