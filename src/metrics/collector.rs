//! # Collector de Métricas
//! src/metrics/collector.rs
//!
//! Recolecta y agrega métricas del servidor en tiempo real.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Collector de métricas thread-safe
#[derive(Clone)]
pub struct MetricsCollector {
    inner: Arc<Mutex<MetricsData>>,
    start_time: Instant,
}

/// Datos internos de métricas
struct MetricsData {
    /// Contador total de requests
    total_requests: u64,

    /// Requests por código de estado
    status_codes: HashMap<u16, u64>,

    /// Requests por ruta
    requests_per_path: HashMap<String, u64>,

    /// Threads activos actualmente
    active_threads: u64,

    /// Suma de latencias (microsegundos), para el promedio
    latency_total_us: u64,

    /// Latencia máxima observada (microsegundos)
    latency_max_us: u64,
}

impl MetricsCollector {
    /// Crea un nuevo collector de métricas
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MetricsData {
                total_requests: 0,
                status_codes: HashMap::new(),
                requests_per_path: HashMap::new(),
                active_threads: 0,
                latency_total_us: 0,
                latency_max_us: 0,
            })),
            start_time: Instant::now(),
        }
    }

    /// Registra un nuevo request
    pub fn record_request(&self, path: &str, status_code: u16, latency: Duration) {
        let mut data = self.inner.lock().unwrap();

        data.total_requests += 1;
        *data.status_codes.entry(status_code).or_insert(0) += 1;
        *data.requests_per_path.entry(path.to_string()).or_insert(0) += 1;

        let latency_us = latency.as_micros() as u64;
        data.latency_total_us += latency_us;
        data.latency_max_us = data.latency_max_us.max(latency_us);
    }

    /// Incrementa el contador de threads activos
    pub fn increment_active_threads(&self) {
        let mut data = self.inner.lock().unwrap();
        data.active_threads += 1;
    }

    /// Decrementa el contador de threads activos
    pub fn decrement_active_threads(&self) {
        let mut data = self.inner.lock().unwrap();
        if data.active_threads > 0 {
            data.active_threads -= 1;
        }
    }

    /// Obtiene el número de threads activos
    pub fn active_threads(&self) -> u64 {
        let data = self.inner.lock().unwrap();
        data.active_threads
    }

    /// Obtiene las métricas actuales en formato JSON
    pub fn get_metrics_json(&self) -> String {
        let data = self.inner.lock().unwrap();

        let uptime_secs = self.start_time.elapsed().as_secs();
        let latency_avg_us = if data.total_requests > 0 {
            data.latency_total_us / data.total_requests
        } else {
            0
        };

        // Formatear status codes
        let status_codes_json = data
            .status_codes
            .iter()
            .map(|(code, count)| format!(r#""{}": {}"#, code, count))
            .collect::<Vec<_>>()
            .join(", ");

        // Rutas más accedidas
        let mut paths: Vec<_> = data.requests_per_path.iter().collect();
        paths.sort_by(|a, b| b.1.cmp(a.1));
        let top_paths_json = paths
            .iter()
            .take(10)
            .map(|(path, count)| format!(r#"{{"path": "{}", "count": {}}}"#, path, count))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"{{
  "server": {{
    "uptime_seconds": {}
  }},
  "requests": {{
    "total": {},
    "active_threads": {},
    "status_codes": {{{}}},
    "top_paths": [{}]
  }},
  "latency_us": {{
    "avg": {},
    "max": {}
  }}
}}"#,
            uptime_secs,
            data.total_requests,
            data.active_threads,
            status_codes_json,
            top_paths_json,
            latency_avg_us,
            data.latency_max_us
        )
    }

    /// Obtiene un snapshot de las métricas
    pub fn get_snapshot(&self) -> MetricsSnapshot {
        let data = self.inner.lock().unwrap();
        let latency_avg_us = if data.total_requests > 0 {
            data.latency_total_us / data.total_requests
        } else {
            0
        };

        MetricsSnapshot {
            total_requests: data.total_requests,
            active_threads: data.active_threads,
            uptime_secs: self.start_time.elapsed().as_secs(),
            latency_avg_us,
            latency_max_us: data.latency_max_us,
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot de métricas (para uso externo)
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub active_threads: u64,
    pub uptime_secs: u64,
    pub latency_avg_us: u64,
    pub latency_max_us: u64,
}
