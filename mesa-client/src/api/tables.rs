//! Table endpoints (`/api/mesas`)

use serde::Serialize;
use shared::models::{Table, TableFilter, TableStatus};
use shared::{Page, PageResponse};

use crate::dto::{self, BackendTableStatus, TableCreateDto, TableDto, TableStatusUpdateDto};
use crate::error::ClientResult;
use crate::http::HttpClient;

/// Query parameters for the paged table listing.
#[derive(Debug, Clone, Serialize)]
pub struct TableQuery {
    #[serde(rename = "pagina")]
    pub page: u32,
    #[serde(rename = "tamanho")]
    pub size: u32,
    /// Absent means "all statuses".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BackendTableStatus>,
    #[serde(rename = "capacidade", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(rename = "ativo", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl TableQuery {
    pub fn new(page: u32, size: u32, filter: TableFilter) -> Self {
        Self {
            page,
            size,
            status: dto::filter_param(filter),
            capacity: None,
            active: None,
        }
    }

    pub fn active_only(mut self) -> Self {
        self.active = Some(true);
        self
    }

    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

// ========== Table API ==========

impl HttpClient {
    /// Fetch one page of tables.
    pub async fn list_tables(&self, query: &TableQuery) -> ClientResult<Page<Table>> {
        let page: PageResponse<TableDto> = self.get_query("/api/mesas", query).await?;
        Ok(Page {
            items: page.content.into_iter().map(Table::from).collect(),
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        })
    }

    /// Create a table with a display number and seating capacity.
    pub async fn create_table(&self, number: i32, capacity: i32) -> ClientResult<Table> {
        let body = TableCreateDto { number, capacity };
        let created: TableDto = self.post("/api/mesas", &body).await?;
        tracing::debug!(number = created.number, "Table created");
        Ok(created.into())
    }

    /// Change a table's status.
    pub async fn update_table_status(
        &self,
        id: i64,
        status: TableStatus,
    ) -> ClientResult<Table> {
        let body = TableStatusUpdateDto {
            status: BackendTableStatus::from_display(status),
        };
        let updated: TableDto = self.patch(&format!("/api/mesas/{id}/status"), &body).await?;
        Ok(updated.into())
    }

    /// Deactivate a table. Tables are never deleted, only flagged
    /// inactive.
    pub async fn deactivate_table(&self, id: i64) -> ClientResult<()> {
        let _: String = self.delete(&format!("/api/mesas/{id}")).await?;
        Ok(())
    }

    /// Reactivate a previously deactivated table.
    pub async fn reactivate_table(&self, id: i64) -> ClientResult<()> {
        let _: String = self.patch_empty(&format!("/api/mesas/{id}")).await?;
        Ok(())
    }
}
