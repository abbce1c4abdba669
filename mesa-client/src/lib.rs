//! Mesa Client - HTTP client for the restaurant API
//!
//! Provides network-based calls to the table-management backend and the
//! translation between its wire vocabulary and the domain types in
//! `shared`.

pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod http;

pub use api::TableQuery;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{
    Client, ClientCreate, Employee, EmployeeUpdate, Reservation, ReservationCreate, SortKey, Table,
    TableFilter, TableStatus,
};
pub use shared::{ApiResponse, Page};
