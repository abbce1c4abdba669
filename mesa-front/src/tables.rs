//! Table list controller
//!
//! Single owner of the page of tables currently on screen. Everything
//! the list shows goes through `load`/`refresh`; mutations never patch
//! the collection locally, they re-fetch the server's authoritative
//! state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use mesa_client::ClientResult;
use shared::models::{SortKey, Table, TableFilter};

use crate::store::TableStore;

/// Snapshot of the list state handed to the rendering layer.
#[derive(Debug, Clone)]
pub struct ListState {
    pub tables: Vec<Table>,
    pub filter: TableFilter,
    pub sort: SortKey,
    /// Page index, 0-based.
    pub page: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            tables: Vec::new(),
            filter: TableFilter::All,
            sort: SortKey::Number,
            page: 0,
            page_size: 10,
            total_elements: 0,
            total_pages: 0,
            loading: false,
            error: None,
        }
    }
}

/// Controller for the paginated, filtered, sorted table list.
pub struct TableListController {
    store: Arc<dyn TableStore>,
    state: Mutex<ListState>,
    /// Monotonic request token; only the response matching the latest
    /// token may touch the collection.
    seq: AtomicU64,
}

impl TableListController {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self {
            store,
            state: Mutex::new(ListState::default()),
            seq: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> ListState {
        self.state.lock().unwrap().clone()
    }

    /// Fetch one page of tables and replace the collection.
    ///
    /// Safe to call while a previous load is still in flight: each call
    /// takes a fresh token and a response is dropped whenever a newer
    /// request has been issued meanwhile, so the last call wins
    /// regardless of completion order. A failed load keeps the previous
    /// collection and surfaces the error instead of flashing an empty
    /// list.
    pub async fn load(&self, page: u32, page_size: u32, filter: TableFilter) {
        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().unwrap();
            state.page = page;
            state.page_size = page_size;
            state.filter = filter;
            state.loading = true;
        }

        let result = self.store.list_tables(page, page_size, filter).await;

        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;
        if self.seq.load(Ordering::SeqCst) != token {
            tracing::debug!(token, "Dropping superseded table page response");
            return;
        }
        state.loading = false;
        match result {
            Ok(fetched) => {
                state.total_elements = fetched.total_elements;
                state.total_pages = fetched.total_pages;
                state.tables = fetched.items;
                state.error = None;
                sort_tables(&mut state.tables, state.sort);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load tables");
                state.error = Some(e.user_message());
            }
        }
    }

    /// Change the active filter. Filter changes always restart from the
    /// first page; the next `refresh` picks both up.
    pub fn set_filter(&self, filter: TableFilter) {
        let mut state = self.state.lock().unwrap();
        state.filter = filter;
        state.page = 0;
    }

    /// Change the client-side sort key and re-sort the fetched page.
    /// Never triggers a fetch.
    pub fn set_sort(&self, sort: SortKey) {
        let mut state = self.state.lock().unwrap();
        state.sort = sort;
        sort_tables(&mut state.tables, sort);
    }

    /// Re-issue `load` with the current page, size, and filter. Called
    /// after every mutating action to reconcile with the server.
    pub async fn refresh(&self) {
        let (page, page_size, filter) = {
            let state = self.state.lock().unwrap();
            (state.page, state.page_size, state.filter)
        };
        self.load(page, page_size, filter).await;
    }

    /// Create a table, then refresh. A server rejection (for example a
    /// duplicate number) is returned to the caller, never swallowed.
    pub async fn create_table(&self, number: i32, capacity: i32) -> ClientResult<Table> {
        let created = self.store.create_table(number, capacity).await?;
        tracing::info!(number = created.number, "Table created, refreshing list");
        self.refresh().await;
        Ok(created)
    }
}

/// Stable sort so equal-status tables keep their server response order.
fn sort_tables(tables: &mut [Table], sort: SortKey) {
    match sort {
        SortKey::Number => tables.sort_by_key(|t| t.number),
        SortKey::Status => tables.sort_by_key(|t| t.status.sort_priority()),
    }
}
