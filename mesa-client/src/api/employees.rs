//! Employee endpoints (`/api/funcionarios`)

use serde::Serialize;
use shared::models::{Employee, EmployeeUpdate};
use shared::util::digits;

use crate::dto::{EmployeeDto, EmployeeUpdateDto};
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

#[derive(Serialize)]
struct CpfQuery<'a> {
    cpf: &'a str,
}

// ========== Employee API ==========

impl HttpClient {
    /// Look up an employee by CPF. Drives staff login: a 404 stays a
    /// `NotFound` error so the caller can deny the login explicitly.
    pub async fn find_employee_by_cpf(&self, cpf: &str) -> ClientResult<Employee> {
        let clean = digits(cpf);
        if clean.len() != 11 {
            return Err(ClientError::Validation("CPF must have 11 digits".to_string()));
        }
        let query = CpfQuery { cpf: &clean };
        let dto: EmployeeDto = self.get_query("/api/funcionarios/buscar", &query).await?;
        dto.try_into()
            .map_err(|e: chrono::ParseError| ClientError::InvalidResponse(e.to_string()))
    }

    /// Apply a partial update to an employee record.
    pub async fn update_employee(
        &self,
        id: i64,
        payload: &EmployeeUpdate,
    ) -> ClientResult<Employee> {
        let body = EmployeeUpdateDto::from(payload);
        let updated: EmployeeDto = self.put(&format!("/api/funcionarios/{id}"), &body).await?;
        tracing::debug!(employee_id = id, "Employee updated");
        updated
            .try_into()
            .map_err(|e: chrono::ParseError| ClientError::InvalidResponse(e.to_string()))
    }
}
