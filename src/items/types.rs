//! # Tipos del Recurso Item
//! src/items/types.rs
//!
//! Define la entidad `Item` y el payload que llega en los bodies
//! de POST/PUT.

use serde::{Deserialize, Serialize};

/// Un item del registro
///
/// El `id` lo asigna siempre el registro, nunca el cliente.
/// `name` y `description` pueden estar ausentes: un POST sin esos
/// campos crea un item que se serializa solo con su `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identificador único dentro del registro
    pub id: u64,

    /// Nombre del item (opcional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Descripción del item (opcional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    /// Crea un item con ambos campos presentes (útil para seeds y tests)
    pub fn new(id: u64, name: &str, description: &str) -> Self {
        Self {
            id,
            name: Some(name.to_string()),
            description: Some(description.to_string()),
        }
    }
}

/// Campos que el cliente puede enviar al crear o actualizar un item
///
/// Ambos campos son opcionales. Un body malformado o vacío se tolera:
/// se interpreta como "ningún campo enviado".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl ItemPayload {
    /// Parsea un payload desde el body JSON de un request
    ///
    /// Nunca falla: un body que no sea un objeto JSON válido produce
    /// un payload sin campos.
    ///
    /// # Ejemplo
    /// ```
    /// use items_server::items::ItemPayload;
    ///
    /// let payload = ItemPayload::from_json(br#"{"name": "Item 3"}"#);
    /// assert_eq!(payload.name.as_deref(), Some("Item 3"));
    /// assert!(payload.description.is_none());
    ///
    /// let empty = ItemPayload::from_json(b"not json");
    /// assert!(empty.name.is_none());
    /// ```
    pub fn from_json(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}
