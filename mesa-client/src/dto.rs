//! Backend wire representations
//!
//! The backend speaks a Portuguese field vocabulary (`numero`,
//! `capacidade`, `LIVRE`, ...). Every entity gets one explicit DTO with
//! serde renames plus a total conversion into the domain type, instead
//! of ad hoc field renaming at call sites.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use shared::models::{
    Client, ClientCreate, Employee, EmployeeRole, EmployeeUpdate, Reservation, ReservationClient,
    ReservationCreate, ReservationEmployee, ReservationStatus, ReservationTable, Table,
    TableFilter, TableStatus,
};
use shared::util::digits;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

// ============================================================================
// Table
// ============================================================================

/// Table status as the backend spells it.
///
/// `Unknown` absorbs codes this client does not recognize so that
/// deserialization, and therefore display mapping, is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackendTableStatus {
    Livre,
    Ocupado,
    Reservada,
    #[serde(other)]
    Unknown,
}

impl BackendTableStatus {
    /// Backend -> display mapping. Total: an unrecognized code shows as
    /// `Free` rather than failing the whole page render.
    pub fn to_display(self) -> TableStatus {
        match self {
            BackendTableStatus::Livre => TableStatus::Free,
            BackendTableStatus::Ocupado => TableStatus::Occupied,
            BackendTableStatus::Reservada => TableStatus::Reserved,
            BackendTableStatus::Unknown => TableStatus::Free,
        }
    }

    /// Display -> backend mapping. Defined on the three real statuses
    /// only; the "all" filter sentinel never reaches this function
    /// because `TableFilter::status()` strips it first.
    pub fn from_display(status: TableStatus) -> Self {
        match status {
            TableStatus::Free => BackendTableStatus::Livre,
            TableStatus::Occupied => BackendTableStatus::Ocupado,
            TableStatus::Reserved => BackendTableStatus::Reservada,
        }
    }
}

/// Backend status parameter for a filter, `None` meaning "all".
pub fn filter_param(filter: TableFilter) -> Option<BackendTableStatus> {
    filter.status().map(BackendTableStatus::from_display)
}

/// Wire representation of a table (`ListarMesaDto`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDto {
    pub id: i64,
    #[serde(rename = "numero")]
    pub number: i32,
    #[serde(rename = "capacidade")]
    pub capacity: i32,
    pub status: BackendTableStatus,
    #[serde(rename = "valorConta", default, skip_serializing_if = "Option::is_none")]
    pub total_order: Option<f64>,
    #[serde(rename = "ativo")]
    pub active: bool,
}

impl From<TableDto> for Table {
    fn from(dto: TableDto) -> Self {
        Table {
            id: dto.id,
            number: dto.number,
            capacity: dto.capacity,
            status: dto.status.to_display(),
            total_order: dto.total_order,
            is_active: dto.active,
        }
    }
}

/// Create table payload (`CadastrarMesaDto`).
#[derive(Debug, Clone, Serialize)]
pub struct TableCreateDto {
    #[serde(rename = "numero")]
    pub number: i32,
    #[serde(rename = "capacidade")]
    pub capacity: i32,
}

/// Status update payload for PATCH `/api/mesas/{id}/status`.
#[derive(Debug, Clone, Serialize)]
pub struct TableStatusUpdateDto {
    pub status: BackendTableStatus,
}

// ============================================================================
// Client
// ============================================================================

/// Wire representation of a client (`ListarClienteDto`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientDto {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub cpf: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "observacoes", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "ativo")]
    pub active: bool,
}

impl From<ClientDto> for Client {
    fn from(dto: ClientDto) -> Self {
        Client {
            id: dto.id,
            name: dto.name,
            cpf: dto.cpf,
            email: dto.email,
            phone: dto.phone,
            notes: dto.notes,
            is_active: dto.active,
        }
    }
}

/// Create client payload (`CadastrarClienteDto`). CPF and phone are
/// normalized to bare digits here, at the wire boundary.
#[derive(Debug, Clone, Serialize)]
pub struct ClientCreateDto {
    #[serde(rename = "nome")]
    pub name: String,
    pub cpf: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "observacoes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&ClientCreate> for ClientCreateDto {
    fn from(payload: &ClientCreate) -> Self {
        ClientCreateDto {
            name: payload.name.clone(),
            cpf: digits(&payload.cpf),
            email: payload.email.clone(),
            phone: digits(&payload.phone),
            notes: payload.notes.clone(),
        }
    }
}

// ============================================================================
// Reservation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendReservationStatus {
    #[serde(rename = "CONFIRMADA")]
    Confirmed,
    #[serde(rename = "CANCELADA")]
    Cancelled,
    #[serde(rename = "CONCLUIDA")]
    Completed,
}

impl From<BackendReservationStatus> for ReservationStatus {
    fn from(status: BackendReservationStatus) -> Self {
        match status {
            BackendReservationStatus::Confirmed => ReservationStatus::Confirmed,
            BackendReservationStatus::Cancelled => ReservationStatus::Cancelled,
            BackendReservationStatus::Completed => ReservationStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationClientDto {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub cpf: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationTableDto {
    pub id: i64,
    #[serde(rename = "numero")]
    pub number: i32,
    #[serde(rename = "capacidade")]
    pub capacity: i32,
    pub status: BackendTableStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationEmployeeDto {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Wire representation of a reservation (`ListarReservaDto`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationDto {
    pub id: i64,
    #[serde(rename = "cliente")]
    pub client: ReservationClientDto,
    #[serde(rename = "mesa")]
    pub table: ReservationTableDto,
    #[serde(rename = "funcionario", default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<ReservationEmployeeDto>,
    #[serde(rename = "dataReserva")]
    pub date: String,
    #[serde(rename = "horaReserva")]
    pub time: String,
    #[serde(rename = "quantidadePessoas")]
    pub party_size: i32,
    pub status: BackendReservationStatus,
}

impl TryFrom<ReservationDto> for Reservation {
    type Error = chrono::ParseError;

    fn try_from(dto: ReservationDto) -> Result<Self, Self::Error> {
        Ok(Reservation {
            id: dto.id,
            client: ReservationClient {
                id: dto.client.id,
                name: dto.client.name,
                cpf: dto.client.cpf,
                email: dto.client.email,
                phone: dto.client.phone,
            },
            table: ReservationTable {
                id: dto.table.id,
                number: dto.table.number,
                capacity: dto.table.capacity,
                status: dto.table.status.to_display(),
            },
            employee: dto.employee.map(|e| ReservationEmployee {
                id: e.id,
                name: e.name,
            }),
            date: NaiveDate::parse_from_str(&dto.date, DATE_FORMAT)?,
            time: NaiveTime::parse_from_str(&dto.time, TIME_FORMAT)?,
            party_size: dto.party_size,
            status: dto.status.into(),
        })
    }
}

/// Create reservation payload (`CadastrarReservaDto`). Date and time go
/// out as `YYYY-MM-DD` / `HH:MM` strings.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationCreateDto {
    #[serde(rename = "clienteId")]
    pub client_id: i64,
    #[serde(rename = "mesaId")]
    pub table_id: i64,
    #[serde(rename = "funcionarioId", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    #[serde(rename = "dataReserva")]
    pub date: String,
    #[serde(rename = "horaReserva")]
    pub time: String,
    #[serde(rename = "quantidadePessoas")]
    pub party_size: i32,
}

impl From<&ReservationCreate> for ReservationCreateDto {
    fn from(payload: &ReservationCreate) -> Self {
        ReservationCreateDto {
            client_id: payload.client_id,
            table_id: payload.table_id,
            employee_id: payload.employee_id,
            date: payload.date.format(DATE_FORMAT).to_string(),
            time: payload.time.format(TIME_FORMAT).to_string(),
            party_size: payload.party_size,
        }
    }
}

// ============================================================================
// Employee
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendEmployeeRole {
    #[serde(rename = "GARCOM")]
    Waiter,
    #[serde(rename = "COZINHEIRO")]
    Cook,
    #[serde(rename = "RECEPCIONISTA")]
    Receptionist,
    #[serde(rename = "GERENTE")]
    Manager,
}

impl From<BackendEmployeeRole> for EmployeeRole {
    fn from(role: BackendEmployeeRole) -> Self {
        match role {
            BackendEmployeeRole::Waiter => EmployeeRole::Waiter,
            BackendEmployeeRole::Cook => EmployeeRole::Cook,
            BackendEmployeeRole::Receptionist => EmployeeRole::Receptionist,
            BackendEmployeeRole::Manager => EmployeeRole::Manager,
        }
    }
}

impl From<EmployeeRole> for BackendEmployeeRole {
    fn from(role: EmployeeRole) -> Self {
        match role {
            EmployeeRole::Waiter => BackendEmployeeRole::Waiter,
            EmployeeRole::Cook => BackendEmployeeRole::Cook,
            EmployeeRole::Receptionist => BackendEmployeeRole::Receptionist,
            EmployeeRole::Manager => BackendEmployeeRole::Manager,
        }
    }
}

/// Wire representation of an employee (`ListarFuncionarioDto`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub cpf: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    pub email: String,
    #[serde(rename = "cargo")]
    pub role: BackendEmployeeRole,
    #[serde(rename = "salario")]
    pub salary: f64,
    #[serde(rename = "dataContratacao")]
    pub hired_at: String,
}

impl TryFrom<EmployeeDto> for Employee {
    type Error = chrono::ParseError;

    fn try_from(dto: EmployeeDto) -> Result<Self, Self::Error> {
        Ok(Employee {
            id: dto.id,
            name: dto.name,
            cpf: dto.cpf,
            phone: dto.phone,
            email: dto.email,
            role: dto.role.into(),
            salary: dto.salary,
            hired_at: NaiveDate::parse_from_str(&dto.hired_at, DATE_FORMAT)?,
        })
    }
}

/// Partial employee update payload (`AtualizarFuncionarioDto`).
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeUpdateDto {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "cargo", skip_serializing_if = "Option::is_none")]
    pub role: Option<BackendEmployeeRole>,
}

impl From<&EmployeeUpdate> for EmployeeUpdateDto {
    fn from(payload: &EmployeeUpdate) -> Self {
        EmployeeUpdateDto {
            name: payload.name.clone(),
            email: payload.email.clone(),
            phone: payload.phone.clone(),
            role: payload.role.map(Into::into),
        }
    }
}
