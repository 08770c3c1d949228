//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa el router que mapea método + path HTTP a
//! handlers específicos.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! Los patrones de ruta soportan parámetros de path con la sintaxis
//! `:nombre` (ej: `/items/:id`). El router examina método y path del
//! request, extrae los parámetros y dirige al handler apropiado.
//! Si ninguna ruta matchea, retorna 404 Not Found.

use crate::http::{Method, Request, Response, StatusCode};
use crate::items::SharedRegistry;
use std::collections::HashMap;

/// Parámetros extraídos del path (ej: {"id": "2"} para /items/2)
pub type PathParams = HashMap<String, String>;

/// Tipo de función handler
///
/// Un handler recibe el Request, los parámetros de path y el handle
/// al registro, y retorna una Response.
pub type Handler = fn(&Request, &PathParams, &SharedRegistry) -> Response;

/// Una ruta registrada: método + patrón + handler
struct Route {
    method: Method,
    pattern: String,
    handler: Handler,
}

/// Router que mapea (método, patrón) a handlers
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registra una ruta con su handler
    ///
    /// # Ejemplo
    /// ```
    /// use items_server::router::Router;
    /// use items_server::http::Method;
    /// use items_server::items::handlers;
    ///
    /// let mut router = Router::new();
    /// router.register(Method::GET, "/items/:id", handlers::get_handler);
    /// ```
    pub fn register(&mut self, method: Method, pattern: &str, handler: Handler) {
        self.routes.push(Route {
            method,
            pattern: pattern.to_string(),
            handler,
        });
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// Las rutas se prueban en orden de registro (scan lineal). Si
    /// ninguna matchea en método y path, retorna 404 Not Found.
    pub fn route(&self, request: &Request, registry: &SharedRegistry) -> Response {
        for route in &self.routes {
            if route.method != request.method() {
                continue;
            }

            if let Some(params) = match_pattern(&route.pattern, request.path()) {
                let mut response = (route.handler)(request, &params, registry);
                self.add_common_headers(&mut response);
                return response;
            }
        }

        // Ninguna ruta matcheó este método + path
        let mut response = Response::error(
            StatusCode::NotFound,
            &format!("Route not found: {}", request.path()),
        );
        self.add_common_headers(&mut response);
        response
    }

    /// Agrega headers comunes a todas las respuestas
    fn add_common_headers(&self, response: &mut Response) {
        response.add_header("Server", "ItemsServer-HTTP/1.0");
        response.add_header("Connection", "close");
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Matchea un path concreto contra un patrón con parámetros
///
/// Retorna los parámetros capturados si el path matchea, o `None`.
/// Los segmentos `:nombre` capturan cualquier segmento no vacío;
/// el resto debe coincidir literalmente.
fn match_pattern(pattern: &str, path: &str) -> Option<PathParams> {
    let pattern_segments = split_segments(pattern);
    let path_segments = split_segments(path);

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = PathParams::new();

    for (pattern_seg, path_seg) in pattern_segments.iter().zip(path_segments.iter()) {
        if let Some(name) = pattern_seg.strip_prefix(':') {
            params.insert(name.to_string(), path_seg.to_string());
        } else if pattern_seg != path_seg {
            return None;
        }
    }

    Some(params)
}

/// Divide un path en segmentos, ignorando barras redundantes
///
/// "/" produce cero segmentos, "/items/2" produce ["items", "2"].
fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}
