//! Repositorios de acceso a datos
//!
//! Un único repositorio: el almacén de vehículos sobre archivo JSON plano.

pub mod vehicle_repository;
