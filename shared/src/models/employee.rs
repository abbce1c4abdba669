//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Staff role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeRole {
    Waiter,
    Cook,
    Receptionist,
    Manager,
}

/// Employee entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    /// CPF, digits only.
    pub cpf: String,
    pub phone: String,
    pub email: String,
    pub role: EmployeeRole,
    pub salary: f64,
    pub hired_at: NaiveDate,
}

/// Partial employee update payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<EmployeeRole>,
}
