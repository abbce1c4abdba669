//! Remote store ports
//!
//! Trait seams between the controllers and the HTTP client, so the
//! workflow logic can be exercised against recording doubles. The
//! production implementation is `mesa_client::HttpClient`.

use async_trait::async_trait;
use mesa_client::{ClientResult, HttpClient, TableQuery};
use shared::Page;
use shared::models::{
    Client, ClientCreate, Employee, EmployeeUpdate, Reservation, ReservationCreate, Table,
    TableFilter, TableStatus,
};

/// Paginated table queries and table mutations.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Fetch one page of active tables matching `filter`.
    async fn list_tables(
        &self,
        page: u32,
        page_size: u32,
        filter: TableFilter,
    ) -> ClientResult<Page<Table>>;

    async fn create_table(&self, number: i32, capacity: i32) -> ClientResult<Table>;

    async fn update_table_status(&self, id: i64, status: TableStatus) -> ClientResult<Table>;
}

/// Client lookup and registration.
#[async_trait]
pub trait GuestStore: Send + Sync {
    /// `Ok(None)` is the explicit not-found signal.
    async fn find_client_by_cpf(&self, cpf: &str) -> ClientResult<Option<Client>>;

    async fn create_client(&self, payload: &ClientCreate) -> ClientResult<Client>;
}

/// Reservation creation.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    async fn create_reservation(&self, payload: &ReservationCreate) -> ClientResult<Reservation>;
}

/// Employee lookup and update, used by the staff session.
#[async_trait]
pub trait StaffDirectory: Send + Sync {
    async fn find_employee_by_cpf(&self, cpf: &str) -> ClientResult<Employee>;

    async fn update_employee(&self, id: i64, payload: &EmployeeUpdate) -> ClientResult<Employee>;
}

#[async_trait]
impl TableStore for HttpClient {
    async fn list_tables(
        &self,
        page: u32,
        page_size: u32,
        filter: TableFilter,
    ) -> ClientResult<Page<Table>> {
        // The list view only ever shows active tables.
        let query = TableQuery::new(page, page_size, filter).active_only();
        HttpClient::list_tables(self, &query).await
    }

    async fn create_table(&self, number: i32, capacity: i32) -> ClientResult<Table> {
        HttpClient::create_table(self, number, capacity).await
    }

    async fn update_table_status(&self, id: i64, status: TableStatus) -> ClientResult<Table> {
        HttpClient::update_table_status(self, id, status).await
    }
}

#[async_trait]
impl GuestStore for HttpClient {
    async fn find_client_by_cpf(&self, cpf: &str) -> ClientResult<Option<Client>> {
        HttpClient::find_client_by_cpf(self, cpf).await
    }

    async fn create_client(&self, payload: &ClientCreate) -> ClientResult<Client> {
        HttpClient::create_client(self, payload).await
    }
}

#[async_trait]
impl ReservationStore for HttpClient {
    async fn create_reservation(&self, payload: &ReservationCreate) -> ClientResult<Reservation> {
        HttpClient::create_reservation(self, payload).await
    }
}

#[async_trait]
impl StaffDirectory for HttpClient {
    async fn find_employee_by_cpf(&self, cpf: &str) -> ClientResult<Employee> {
        HttpClient::find_employee_by_cpf(self, cpf).await
    }

    async fn update_employee(&self, id: i64, payload: &EmployeeUpdate) -> ClientResult<Employee> {
        HttpClient::update_employee(self, id, payload).await
    }
}
