//! Servicios del sistema
//!
//! Lógica que no toca disco: el pipeline de consulta que los clientes
//! ejecutan sobre la lista completa ya descargada.

pub mod listing_pipeline;
