//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El repositorio vive como data del schema;
//! los handlers solo necesitan el schema y la configuración.

use crate::config::environment::EnvironmentConfig;
use crate::graphql::schema::{build_schema, MarketplaceSchema};
use crate::repositories::vehicle_repository::VehicleRepository;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub schema: MarketplaceSchema,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        let repository = VehicleRepository::new(config.data_path());
        let schema = build_schema(repository);
        Self { config, schema }
    }
}
