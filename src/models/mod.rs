//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al documento JSON persistido y al schema GraphQL.

pub mod vehicle;
