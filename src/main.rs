//! # Items Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor HTTP/1.0 de items.

use items_server::config::Config;
use items_server::server::Server;

fn main() {
    println!("=================================");
    println!("  Items HTTP/1.0 Server");
    println!("=================================\n");

    // Crear configuración desde CLI args / variables de entorno
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    // Crear el servidor
    let server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
