//! # Recurso de Items
//!
//! El núcleo del servidor: un registro CRUD de items en memoria.
//!
//! ## Endpoints
//!
//! - `GET /items` - Listar todos los items
//! - `GET /items/:id` - Consultar un item
//! - `POST /items` - Crear un item (id asignado por el servidor)
//! - `PUT /items/:id` - Actualización parcial de un item
//! - `DELETE /items/:id` - Eliminar un item
//!
//! El registro en sí (`ItemRegistry`) es síncrono y no hace I/O; como
//! el servidor atiende cada conexión en su propio thread, se comparte
//! detrás de un `Mutex`.

pub mod handlers;
pub mod registry;
pub mod types;

pub use registry::{ItemRegistry, RegistryError};
pub use types::{Item, ItemPayload};

use std::sync::{Arc, Mutex};

/// Handle compartido al registro, uno por proceso
///
/// El composition root lo construye una vez y lo pasa a los handlers;
/// cada operación toma el lock y corre como un paso atómico.
pub type SharedRegistry = Arc<Mutex<ItemRegistry>>;

/// Envuelve un registro para compartirlo entre threads
pub fn new_shared_registry(registry: ItemRegistry) -> SharedRegistry {
    Arc::new(Mutex::new(registry))
}
