//! # Handlers HTTP para Items
//! src/items/handlers.rs
//!
//! Implementa los endpoints del recurso de items:
//! - GET    /items
//! - GET    /items/:id
//! - POST   /items
//! - PUT    /items/:id
//! - DELETE /items/:id
//!
//! Cada handler toma el lock del registro, ejecuta una única operación
//! y traduce el resultado a una response HTTP. El único error de
//! dominio (`NotFound`) se responde como 404 con body
//! `{"message": "Item not found"}`.

use crate::http::{Request, Response, StatusCode};
use crate::items::types::ItemPayload;
use crate::items::SharedRegistry;
use crate::router::PathParams;

/// Handler para GET /items
///
/// Retorna el array JSON completo de items, en orden de inserción.
///
/// # Ejemplo de response
/// ```json
/// [{"id":1,"name":"Item 1","description":"This is item 1"}, ...]
/// ```
pub fn list_handler(_req: &Request, _params: &PathParams, registry: &SharedRegistry) -> Response {
    let registry = registry.lock().unwrap();

    let body = serde_json::to_string(registry.list()).unwrap_or_else(|_| "[]".to_string());
    Response::json(&body)
}

/// Handler para GET /items/:id
///
/// Retorna el item con ese id, o 404 si no existe.
pub fn get_handler(_req: &Request, params: &PathParams, registry: &SharedRegistry) -> Response {
    let id = match parse_id(params) {
        Some(id) => id,
        None => return item_not_found(),
    };

    let registry = registry.lock().unwrap();

    match registry.get(id) {
        Ok(item) => {
            let body = serde_json::to_string(item).unwrap_or_else(|_| "{}".to_string());
            Response::json(&body)
        }
        Err(_) => item_not_found(),
    }
}

/// Handler para POST /items
///
/// Crea un item nuevo con los campos del body y retorna 201 con el
/// item creado. Nunca falla: un body malformado o incompleto produce
/// un item con campos ausentes.
///
/// # Ejemplo de response
/// ```json
/// {"id":3,"name":"Item 3","description":"d3"}
/// ```
pub fn create_handler(req: &Request, _params: &PathParams, registry: &SharedRegistry) -> Response {
    let payload = ItemPayload::from_json(req.body());

    let mut registry = registry.lock().unwrap();
    let created = registry.create(payload);

    let body = serde_json::to_string(&created).unwrap_or_else(|_| "{}".to_string());
    Response::json_with_status(StatusCode::Created, &body)
}

/// Handler para PUT /items/:id
///
/// Actualización parcial: solo los campos presentes y no vacíos del
/// body reemplazan a los existentes. Retorna el item actualizado, o
/// 404 si el id no existe.
pub fn update_handler(req: &Request, params: &PathParams, registry: &SharedRegistry) -> Response {
    let id = match parse_id(params) {
        Some(id) => id,
        None => return item_not_found(),
    };

    let payload = ItemPayload::from_json(req.body());

    let mut registry = registry.lock().unwrap();

    match registry.update(id, payload) {
        Ok(item) => {
            let body = serde_json::to_string(&item).unwrap_or_else(|_| "{}".to_string());
            Response::json(&body)
        }
        Err(_) => item_not_found(),
    }
}

/// Handler para DELETE /items/:id
///
/// Elimina el item y confirma con un mensaje, o retorna 404.
///
/// # Ejemplo de response
/// ```json
/// {"message": "Item deleted successfully"}
/// ```
pub fn delete_handler(_req: &Request, params: &PathParams, registry: &SharedRegistry) -> Response {
    let id = match parse_id(params) {
        Some(id) => id,
        None => return item_not_found(),
    };

    let mut registry = registry.lock().unwrap();

    match registry.delete(id) {
        Ok(()) => Response::json(r#"{"message": "Item deleted successfully"}"#),
        Err(_) => item_not_found(),
    }
}

/// Parsea el parámetro de path `:id` como entero base 10
///
/// Un id no numérico no es un error de parseo para el cliente: se
/// comporta igual que un id que no matchea ningún item (404).
fn parse_id(params: &PathParams) -> Option<u64> {
    params.get("id")?.parse().ok()
}

/// Response 404 estándar del recurso
fn item_not_found() -> Response {
    Response::error(StatusCode::NotFound, "Item not found")
}
