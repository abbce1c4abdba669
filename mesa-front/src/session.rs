//! Staff session
//!
//! A single owned session object constructed at startup and passed to
//! the components that need the authenticated identity. The current
//! employee is persisted as JSON under a fixed file name so a restart
//! restores the session without a network call.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use shared::models::{Employee, EmployeeUpdate};
use shared::util::{digits, is_valid_cpf};

use crate::error::{FrontError, FrontResult};
use crate::store::StaffDirectory;

/// File name the current employee record is cached under.
const SESSION_FILE: &str = "current_employee.json";

/// Authenticated staff context.
pub struct Session {
    directory: Arc<dyn StaffDirectory>,
    file_path: PathBuf,
    current: Mutex<Option<Employee>>,
}

impl Session {
    /// Create a session rooted at `storage_dir`, restoring a previously
    /// persisted employee if one exists. A corrupt cache entry is
    /// discarded rather than blocking startup.
    pub fn restore(directory: Arc<dyn StaffDirectory>, storage_dir: &Path) -> Self {
        let file_path = storage_dir.join(SESSION_FILE);
        let current = Self::load_cached(&file_path);
        if let Some(employee) = &current {
            tracing::info!(employee = %employee.name, "Restored staff session");
        }
        Self {
            directory,
            file_path,
            current: Mutex::new(current),
        }
    }

    fn load_cached(path: &Path) -> Option<Employee> {
        if !path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(employee) => Some(employee),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding corrupt session cache");
                let _ = std::fs::remove_file(path);
                None
            }
        }
    }

    fn persist(&self, employee: &Employee) -> FrontResult<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(employee)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(employee = %employee.name, "Session persisted");
        Ok(())
    }

    /// Authenticate by CPF. A not-found lookup denies the login; any
    /// other failure is reported as-is.
    pub async fn login(&self, cpf: &str) -> FrontResult<Employee> {
        if !is_valid_cpf(cpf) {
            return Err(FrontError::Validation(
                "CPF must have exactly 11 digits.".to_string(),
            ));
        }

        let employee = self.directory.find_employee_by_cpf(&digits(cpf)).await?;
        self.persist(&employee)?;
        *self.current.lock().unwrap() = Some(employee.clone());
        tracing::info!(employee = %employee.name, "Staff member signed in");
        Ok(employee)
    }

    /// Clear the session in memory and on disk.
    pub fn logout(&self) {
        let previous = self.current.lock().unwrap().take();
        if self.file_path.exists() {
            let _ = std::fs::remove_file(&self.file_path);
        }
        if let Some(employee) = previous {
            tracing::info!(employee = %employee.name, "Staff member signed out");
        }
    }

    /// Drop the session after a request revealed it is no longer valid.
    pub fn invalidate(&self) {
        tracing::warn!("Staff session invalidated");
        self.logout();
    }

    /// Push a partial profile update for the signed-in employee and
    /// re-persist the record the server returns.
    pub async fn update_profile(&self, update: &EmployeeUpdate) -> FrontResult<Employee> {
        let id = self
            .current_employee()
            .ok_or(FrontError::SessionRequired)?
            .id;
        let updated = self.directory.update_employee(id, update).await?;
        self.persist(&updated)?;
        *self.current.lock().unwrap() = Some(updated.clone());
        Ok(updated)
    }

    pub fn current_employee(&self) -> Option<Employee> {
        self.current.lock().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.lock().unwrap().is_some()
    }
}
