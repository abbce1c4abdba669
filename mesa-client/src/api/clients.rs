//! Client endpoints (`/api/clientes`)

use serde::Serialize;
use shared::models::{Client, ClientCreate};
use shared::util::digits;

use crate::dto::{ClientCreateDto, ClientDto};
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

#[derive(Serialize)]
struct CpfQuery<'a> {
    cpf: &'a str,
}

// ========== Client API ==========

impl HttpClient {
    /// Register a new client. CPF and phone are normalized to digits
    /// before sending.
    pub async fn create_client(&self, payload: &ClientCreate) -> ClientResult<Client> {
        let body = ClientCreateDto::from(payload);
        let created: ClientDto = self.post("/api/clientes", &body).await?;
        tracing::debug!(client_id = created.id, "Client registered");
        Ok(created.into())
    }

    /// Look up a client by CPF. `Ok(None)` is the explicit not-found
    /// signal, distinguished from transport failure.
    pub async fn find_client_by_cpf(&self, cpf: &str) -> ClientResult<Option<Client>> {
        let clean = digits(cpf);
        if clean.len() != 11 {
            return Err(ClientError::Validation("CPF must have 11 digits".to_string()));
        }
        let query = CpfQuery { cpf: &clean };
        match self
            .get_query::<ClientDto, _>("/api/clientes/buscar", &query)
            .await
        {
            Ok(dto) => Ok(Some(dto.into())),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
