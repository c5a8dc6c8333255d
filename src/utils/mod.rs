//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y
//! generación de identificadores.

pub mod errors;
pub mod id;
