//! # Módulo de Métricas
//!
//! Recolección de métricas del servidor: totales de requests, status
//! codes, rutas más usadas, threads activos y latencias. Expuestas en
//! el endpoint `/metrics`.

pub mod collector;

pub use collector::{MetricsCollector, MetricsSnapshot};
