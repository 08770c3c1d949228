//! # Items HTTP Server
//! src/lib.rs
//!
//! Servidor HTTP/1.0 implementado desde cero que expone un recurso CRUD
//! de items en memoria: crear, listar, consultar, actualizar y borrar
//! registros identificados por un entero asignado por el servidor.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing y manejo del protocolo HTTP/1.0
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `router`: Enrutamiento de peticiones (método + path con parámetros)
//! - `items`: El registro de items y sus handlers HTTP
//! - `commands`: Handlers simples sin estado (/, /status)
//! - `metrics`: Recolección de métricas y observabilidad
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use items_server::server::Server;
//! use items_server::config::Config;
//!
//! let config = Config::default();
//! let server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod commands;
pub mod config;
pub mod http;
pub mod items;
pub mod metrics;
pub mod router;
pub mod server;
