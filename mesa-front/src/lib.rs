//! Mesa Front - table-management front-end logic
//!
//! Headless controllers for the staff-facing table view: an explicit
//! staff session, the paginated table list, and the occupy-table
//! workflow. Rendering is out of scope; each controller exposes a
//! snapshot of its state for whatever surface sits on top.

pub mod error;
pub mod occupy;
pub mod session;
pub mod store;
pub mod tables;

pub use error::{FrontError, FrontResult};
pub use occupy::{OccupyPhase, OccupySession, OccupyState, RefreshTables};
pub use session::Session;
pub use store::{GuestStore, ReservationStore, StaffDirectory, TableStore};
pub use tables::{ListState, TableListController};
