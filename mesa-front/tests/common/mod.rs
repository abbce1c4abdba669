//! Recording test doubles for the store traits.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use mesa_client::{ClientError, ClientResult};
use mesa_front::{GuestStore, RefreshTables, ReservationStore, StaffDirectory, TableStore};
use shared::Page;
use shared::models::{
    Client, ClientCreate, Employee, EmployeeRole, EmployeeUpdate, Reservation, ReservationClient,
    ReservationCreate, ReservationEmployee, ReservationStatus, ReservationTable, Table,
    TableFilter, TableStatus,
};
use tokio::sync::oneshot;

/// Shared, ordered log of every remote call the doubles receive.
#[derive(Default)]
pub struct CallLog(Mutex<Vec<String>>);

impl CallLog {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

pub fn table(id: i64, number: i32, status: TableStatus) -> Table {
    Table {
        id,
        number,
        capacity: 4,
        status,
        total_order: None,
        is_active: true,
    }
}

pub fn page(tables: Vec<Table>) -> Page<Table> {
    let total = tables.len() as u64;
    Page {
        items: tables,
        total_elements: total,
        total_pages: 1,
    }
}

pub fn client(id: i64, name: &str) -> Client {
    Client {
        id,
        name: name.to_string(),
        cpf: "52998224725".to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "11987654321".to_string(),
        notes: None,
        is_active: true,
    }
}

pub fn employee(id: i64, name: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        cpf: "52998224725".to_string(),
        phone: "11987654321".to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: EmployeeRole::Waiter,
        salary: 2500.0,
        hired_at: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    }
}

/// One scripted answer for a `list_tables` call, optionally held back
/// until a gate fires so completion order can be controlled.
pub struct ScriptedPage {
    pub gate: Option<oneshot::Receiver<()>>,
    pub result: ClientResult<Page<Table>>,
}

impl ScriptedPage {
    pub fn ready(result: ClientResult<Page<Table>>) -> Self {
        Self { gate: None, result }
    }

    pub fn gated(result: ClientResult<Page<Table>>) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                gate: Some(rx),
                result,
            },
            tx,
        )
    }
}

/// Table store double with scripted page responses.
pub struct MockTableStore {
    pub log: Arc<CallLog>,
    pages: Mutex<VecDeque<ScriptedPage>>,
    pub status_update_error: Mutex<Option<ClientError>>,
}

impl MockTableStore {
    pub fn new(log: Arc<CallLog>) -> Self {
        Self {
            log,
            pages: Mutex::new(VecDeque::new()),
            status_update_error: Mutex::new(None),
        }
    }

    pub fn push_page(&self, scripted: ScriptedPage) {
        self.pages.lock().unwrap().push_back(scripted);
    }
}

fn filter_label(filter: TableFilter) -> String {
    match filter {
        TableFilter::All => "all".to_string(),
        TableFilter::Only(status) => format!("{status:?}"),
    }
}

#[async_trait]
impl TableStore for MockTableStore {
    async fn list_tables(
        &self,
        page: u32,
        page_size: u32,
        filter: TableFilter,
    ) -> ClientResult<Page<Table>> {
        self.log.record(format!(
            "list_tables page={page} size={page_size} filter={}",
            filter_label(filter)
        ));
        let scripted = self.pages.lock().unwrap().pop_front();
        match scripted {
            Some(ScriptedPage { gate, result }) => {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                result
            }
            None => Ok(page_of_nothing()),
        }
    }

    async fn create_table(&self, number: i32, capacity: i32) -> ClientResult<Table> {
        self.log
            .record(format!("create_table number={number} capacity={capacity}"));
        Ok(table(99, number, TableStatus::Free))
    }

    async fn update_table_status(&self, id: i64, status: TableStatus) -> ClientResult<Table> {
        self.log
            .record(format!("update_table_status id={id} status={status:?}"));
        if let Some(error) = self.status_update_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(table(id, 1, status))
    }
}

fn page_of_nothing() -> Page<Table> {
    Page {
        items: Vec::new(),
        total_elements: 0,
        total_pages: 0,
    }
}

/// Guest store double backed by a single known client.
pub struct MockGuestStore {
    pub log: Arc<CallLog>,
    pub known: Option<Client>,
    pub search_error: Mutex<Option<ClientError>>,
    pub create_error: Mutex<Option<ClientError>>,
}

impl MockGuestStore {
    pub fn new(log: Arc<CallLog>, known: Option<Client>) -> Self {
        Self {
            log,
            known,
            search_error: Mutex::new(None),
            create_error: Mutex::new(None),
        }
    }
}

#[async_trait]
impl GuestStore for MockGuestStore {
    async fn find_client_by_cpf(&self, cpf: &str) -> ClientResult<Option<Client>> {
        self.log.record(format!("find_client cpf={cpf}"));
        if let Some(error) = self.search_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(self
            .known
            .as_ref()
            .filter(|c| c.cpf == cpf)
            .cloned())
    }

    async fn create_client(&self, payload: &ClientCreate) -> ClientResult<Client> {
        self.log.record(format!("create_client name={}", payload.name));
        if let Some(error) = self.create_error.lock().unwrap().take() {
            return Err(error);
        }
        let mut created = client(42, &payload.name);
        created.cpf = shared::util::digits(&payload.cpf);
        Ok(created)
    }
}

/// Reservation store double echoing the payload back.
pub struct MockReservationStore {
    pub log: Arc<CallLog>,
    pub error: Mutex<Option<ClientError>>,
}

impl MockReservationStore {
    pub fn new(log: Arc<CallLog>) -> Self {
        Self {
            log,
            error: Mutex::new(None),
        }
    }
}

#[async_trait]
impl ReservationStore for MockReservationStore {
    async fn create_reservation(&self, payload: &ReservationCreate) -> ClientResult<Reservation> {
        self.log.record(format!(
            "create_reservation client={} table={} party={}",
            payload.client_id, payload.table_id, payload.party_size
        ));
        if let Some(error) = self.error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(Reservation {
            id: 777,
            client: ReservationClient {
                id: payload.client_id,
                name: "Ana".to_string(),
                cpf: "52998224725".to_string(),
                email: "ana@example.com".to_string(),
                phone: "11987654321".to_string(),
            },
            table: ReservationTable {
                id: payload.table_id,
                number: 1,
                capacity: 4,
                status: TableStatus::Free,
            },
            employee: payload.employee_id.map(|id| ReservationEmployee {
                id,
                name: "Bruno".to_string(),
            }),
            date: payload.date,
            time: payload.time,
            party_size: payload.party_size,
            status: ReservationStatus::Confirmed,
        })
    }
}

/// Refresh callback double counting invocations.
#[derive(Default)]
pub struct MockRefresh {
    pub log: Arc<CallLog>,
}

impl MockRefresh {
    pub fn new(log: Arc<CallLog>) -> Self {
        Self { log }
    }
}

#[async_trait]
impl RefreshTables for MockRefresh {
    async fn refresh_tables(&self) {
        self.log.record("refresh");
    }
}

/// Staff directory double with one known employee.
pub struct MockStaffDirectory {
    pub log: Arc<CallLog>,
    pub known: Option<Employee>,
}

impl MockStaffDirectory {
    pub fn new(log: Arc<CallLog>, known: Option<Employee>) -> Self {
        Self { log, known }
    }
}

#[async_trait]
impl StaffDirectory for MockStaffDirectory {
    async fn find_employee_by_cpf(&self, cpf: &str) -> ClientResult<Employee> {
        self.log.record(format!("find_employee cpf={cpf}"));
        self.known
            .as_ref()
            .filter(|e| e.cpf == cpf)
            .cloned()
            .ok_or_else(|| ClientError::NotFound("Funcionário não encontrado".to_string()))
    }

    async fn update_employee(&self, id: i64, payload: &EmployeeUpdate) -> ClientResult<Employee> {
        self.log.record(format!("update_employee id={id}"));
        let mut updated = self
            .known
            .clone()
            .ok_or_else(|| ClientError::NotFound("Funcionário não encontrado".to_string()))?;
        if let Some(name) = &payload.name {
            updated.name = name.clone();
        }
        if let Some(email) = &payload.email {
            updated.email = email.clone();
        }
        if let Some(phone) = &payload.phone {
            updated.phone = phone.clone();
        }
        if let Some(role) = payload.role {
            updated.role = role;
        }
        Ok(updated)
    }
}
