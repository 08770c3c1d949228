//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio
//! thread; el registro de items se comparte detrás de un Mutex.

use crate::commands;
use crate::config::Config;
use crate::http::{Method, Request, Response, StatusCode};
use crate::items::{self, handlers as item_handlers, ItemRegistry, SharedRegistry};
use crate::metrics::MetricsCollector;
use crate::router::Router;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Servidor HTTP/1.0 concurrente con métricas
pub struct Server {
    config: Config,
    router: Arc<Router>,
    metrics: Arc<MetricsCollector>,
    registry: SharedRegistry,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let mut router = Router::new();

        // Rutas básicas
        router.register(Method::GET, "/", commands::home_handler);
        router.register(Method::GET, "/status", commands::status_handler);

        // Recurso de items
        router.register(Method::GET, "/items", item_handlers::list_handler);
        router.register(Method::GET, "/items/:id", item_handlers::get_handler);
        router.register(Method::POST, "/items", item_handlers::create_handler);
        router.register(Method::PUT, "/items/:id", item_handlers::update_handler);
        router.register(Method::DELETE, "/items/:id", item_handlers::delete_handler);

        // Nota: /metrics se maneja especialmente en handle_connection_static

        // Composition root del registro: se construye una sola vez y
        // se comparte con todos los threads de conexión
        let registry = if config.no_seed {
            ItemRegistry::new()
        } else {
            ItemRegistry::with_seed_items()
        };

        Self {
            config,
            router: Arc::new(router),
            metrics: Arc::new(MetricsCollector::new()),
            registry: items::new_shared_registry(registry),
        }
    }

    /// Hace bind en la dirección configurada y atiende conexiones
    ///
    /// Bloquea el thread actual indefinidamente.
    pub fn run(&self) -> std::io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", address);
        println!("[*] Modo concurrente: un thread por conexion\n");

        self.serve(listener)
    }

    /// Atiende conexiones sobre un listener ya creado
    ///
    /// Separado de `run` para poder usar puertos efímeros en tests.
    pub fn serve(&self, listener: TcpListener) -> std::io::Result<()> {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let metrics = Arc::clone(&self.metrics);
                    let registry = Arc::clone(&self.registry);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    println!(" ✅ Nueva conexión desde: {} (spawning thread)", peer_addr);

                    // Incrementar contador de threads activos
                    metrics.increment_active_threads();

                    thread::spawn(move || {
                        if let Err(e) =
                            Self::handle_connection_static(stream, router, metrics.clone(), registry)
                        {
                            eprintln!("   ❌ Error en thread: {}", e);
                        }
                        // Decrementar al terminar
                        metrics.decrement_active_threads();
                    });
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    fn handle_connection_static(
        mut stream: TcpStream,
        router: Arc<Router>,
        metrics: Arc<MetricsCollector>,
        registry: SharedRegistry,
    ) -> std::io::Result<()> {
        let start = Instant::now();

        // Generar Request ID único
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        start.elapsed().as_nanos().hash(&mut hasher);
        thread::current().id().hash(&mut hasher);
        let request_id = format!("{:016x}", hasher.finish());
        let thread_id = format!("{:?}", thread::current().id());

        let mut buffer = [0u8; 8192];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            println!("   ✅ Conexión cerrada");
            return Ok(());
        }

        println!("   ✅ {} bytes [req_id: {}]", bytes_read, &request_id[..8]);

        let (response, path) = match Request::parse(&buffer[..bytes_read]) {
            Ok(request) => {
                let path = request.path().to_string();
                println!("   ✅ {} {}", request.method().as_str(), path);

                // /metrics se responde directamente desde el collector
                let response = if path == "/metrics" {
                    Response::json(&metrics.get_metrics_json())
                } else {
                    router.route(&request, &registry)
                };

                (response, path)
            }
            Err(e) => {
                println!("   ❌ Parse error: {}", e);
                (
                    Response::error(StatusCode::BadRequest, &format!("Invalid: {}", e)),
                    "/error".to_string(),
                )
            }
        };

        // Agregar headers de observabilidad
        let mut response = response;
        response.add_header("X-Request-Id", &request_id);
        response.add_header("X-Worker-Thread", &thread_id);

        let process_id = std::process::id();
        response.add_header("X-Worker-Pid", &process_id.to_string());

        let response_bytes = response.to_bytes();
        stream.write_all(&response_bytes)?;
        stream.flush()?;

        let latency = start.elapsed();
        let status_code = response.status().as_u16();

        // Registrar métricas
        metrics.record_request(&path, status_code, latency);

        println!(
            "   ✅ {} ({:.2}ms)\n",
            response.status(),
            latency.as_secs_f64() * 1000.0
        );

        Ok(())
    }
}
