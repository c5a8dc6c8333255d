//! EV Marketplace - API GraphQL para anuncios de vehículos eléctricos
//!
//! Backend del marketplace: schema GraphQL (vehicles, vehicle, addVehicle,
//! removeVehicle) sobre un archivo JSON plano, más el pipeline de
//! filtrado/ordenación/paginación que consumen los clientes.

pub mod client;
pub mod config;
pub mod graphql;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
