//! # Comandos Básicos
//! src/commands/mod.rs
//!
//! Handlers sin estado del servidor:
//! - /: Mensaje de bienvenida
//! - /status: Estado del servidor

use crate::http::{Request, Response};
use crate::items::SharedRegistry;
use crate::router::PathParams;

/// Handler para GET /
///
/// Retorna un mensaje de bienvenida en texto plano.
pub fn home_handler(_req: &Request, _params: &PathParams, _registry: &SharedRegistry) -> Response {
    Response::text("Welcome to the Items API")
}

/// Handler para GET /status
///
/// Retorna información básica sobre el estado del servidor.
///
/// # Ejemplo de response
/// ```json
/// {
///   "status": "running",
///   "version": "0.1.0",
///   "server": "ItemsServer-HTTP/1.0"
/// }
/// ```
pub fn status_handler(_req: &Request, _params: &PathParams, _registry: &SharedRegistry) -> Response {
    let body = r#"{
  "status": "running",
  "version": "0.1.0",
  "server": "ItemsServer-HTTP/1.0"
}"#;

    Response::json(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;
    use crate::items::{new_shared_registry, ItemRegistry};
    use std::collections::HashMap;

    #[test]
    fn test_home_handler() {
        let req = Request::parse(b"GET / HTTP/1.0\r\n\r\n").unwrap();
        let registry = new_shared_registry(ItemRegistry::new());

        let response = home_handler(&req, &HashMap::new(), &registry);

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"Welcome to the Items API");
    }

    #[test]
    fn test_status_handler() {
        let req = Request::parse(b"GET /status HTTP/1.0\r\n\r\n").unwrap();
        let registry = new_shared_registry(ItemRegistry::new());

        let response = status_handler(&req, &HashMap::new(), &registry);

        assert_eq!(response.status(), StatusCode::Ok);
        let body = String::from_utf8(response.body().to_vec()).unwrap();
        assert!(body.contains("running"));
    }
}
