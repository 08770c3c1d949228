//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor HTTP con soporte
//! para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./items_server --port 3000 --host 0.0.0.0
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=3000 HTTP_HOST=0.0.0.0 ./items_server
//! ```

use clap::Parser;

/// Configuración del servidor HTTP/1.0
#[derive(Debug, Clone, Parser)]
#[command(name = "items_server")]
#[command(about = "Servidor HTTP/1.0 con API CRUD de items en memoria")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "3000", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Arrancar con el registro vacío (sin los dos items iniciales)
    #[arg(long = "no-seed", env = "NO_SEED")]
    pub no_seed: bool,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use items_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:3000");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔════════════════════════════════════════╗");
        println!("║   Items HTTP/1.0 Server Configuration  ║");
        println!("╚════════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Address:    {}", self.address());
        println!();
        println!("📦 Registry:");
        if self.no_seed {
            println!("   Seed items: disabled (empty registry)");
        } else {
            println!("   Seed items: 2 (id=1, id=2)");
        }
        println!();
        println!("═════════════════════════════════════════");
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
            no_seed: false,
        }
    }
}
