//! Schema GraphQL del marketplace
//!
//! Cuatro operaciones, todas mapeadas directamente al repositorio:
//! vehicles, vehicle(id), addVehicle(vehicle), removeVehicle(id).
//! Sin filtrado ni paginación server-side: el pipeline corre en el cliente.

use async_graphql::{Context, EmptySubscription, Object, Schema, ID};

use crate::models::vehicle::{Vehicle, VehicleInput};
use crate::repositories::vehicle_repository::VehicleRepository;

pub type MarketplaceSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Construir el schema ejecutable con el repositorio inyectado
pub fn build_schema(repository: VehicleRepository) -> MarketplaceSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(repository)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    // Lista completa tal cual está en disco
    async fn vehicles(&self, ctx: &Context<'_>) -> Vec<Vehicle> {
        let repository = ctx.data_unchecked::<VehicleRepository>();
        repository.list()
    }

    // Búsqueda lineal; null cuando no existe (el cliente lo trata como not found)
    async fn vehicle(&self, ctx: &Context<'_>, id: ID) -> Option<Vehicle> {
        let repository = ctx.data_unchecked::<VehicleRepository>();
        repository.find_by_id(id.as_str())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    // Sin validación más allá de los campos requeridos del schema
    async fn add_vehicle(&self, ctx: &Context<'_>, vehicle: VehicleInput) -> Option<Vehicle> {
        let repository = ctx.data_unchecked::<VehicleRepository>();
        Some(repository.add(vehicle))
    }

    // true si el id existía y se eliminó; false sin escribir nada si no
    async fn remove_vehicle(&self, ctx: &Context<'_>, id: ID) -> Option<bool> {
        let repository = ctx.data_unchecked::<VehicleRepository>();
        Some(repository.remove(id.as_str()))
    }
}
