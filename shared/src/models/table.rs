//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Status a table actually holds. A table is always in exactly one of
/// these three states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableStatus {
    Free,
    Occupied,
    Reserved,
}

impl TableStatus {
    /// Priority used by the status sort: Free < Reserved < Occupied.
    pub fn sort_priority(self) -> u8 {
        match self {
            TableStatus::Free => 0,
            TableStatus::Reserved => 1,
            TableStatus::Occupied => 2,
        }
    }
}

/// Filter option for table queries.
///
/// `All` is a query-side sentinel, never a status a table can hold.
/// Because `All` carries no status value, it cannot reach the backend
/// status mapping by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFilter {
    #[default]
    All,
    Only(TableStatus),
}

impl TableFilter {
    /// The concrete status this filter asks for, if any.
    pub fn status(self) -> Option<TableStatus> {
        match self {
            TableFilter::All => None,
            TableFilter::Only(status) => Some(status),
        }
    }

    pub fn matches(self, status: TableStatus) -> bool {
        match self {
            TableFilter::All => true,
            TableFilter::Only(wanted) => wanted == status,
        }
    }
}

/// Sort key applied client-side to the fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// By table number, ascending.
    #[default]
    Number,
    /// By status priority (Free < Reserved < Occupied), ties keep
    /// server response order.
    Status,
}

/// Dining table entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: i64,
    pub number: i32,
    pub capacity: i32,
    pub status: TableStatus,
    /// Running order total, when the backend reports one.
    pub total_order: Option<f64>,
    pub is_active: bool,
}
