//! Client (restaurant patron) Model

use serde::{Deserialize, Serialize};

/// Client entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    /// CPF, digits only.
    pub cpf: String,
    pub email: String,
    /// Phone, digits only.
    pub phone: String,
    pub notes: Option<String>,
    pub is_active: bool,
}

/// Create client payload. CPF and phone may arrive formatted; they are
/// normalized to digits before hitting the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientCreate {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
    pub notes: Option<String>,
}
