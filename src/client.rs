//! Cliente HTTP del API GraphQL del marketplace
//!
//! Este módulo contiene el cliente que consumen el pipeline de listado y
//! cualquier otra herramienta: descarga la lista completa una sola vez y
//! envuelve las cuatro operaciones del schema. Sin retries ni timeouts.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::vehicle::{Vehicle, VehicleInput};
use crate::utils::errors::{AppError, AppResult};

/// Campos de Vehicle que piden todas las queries del cliente
const VEHICLE_FIELDS: &str = "id brand model year price range_km color condition \
    battery_capacity_kWh charging_speed_kW seats drivetrain location autopilot \
    kilometer_count accidents accident_description images";

/// Cliente HTTP para el endpoint GraphQL del marketplace
pub struct MarketplaceClient {
    client: Client,
    endpoint: String,
}

/// Sobre estándar de una respuesta GraphQL
#[derive(Debug, Deserialize)]
struct GraphQLEnvelope<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLErrorMessage>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
struct VehiclesData {
    vehicles: Vec<Vehicle>,
}

#[derive(Debug, Deserialize)]
struct VehicleData {
    vehicle: Option<Vehicle>,
}

#[derive(Debug, Deserialize)]
struct AddVehicleData {
    #[serde(rename = "addVehicle")]
    add_vehicle: Option<Vehicle>,
}

#[derive(Debug, Deserialize)]
struct RemoveVehicleData {
    #[serde(rename = "removeVehicle")]
    remove_vehicle: Option<bool>,
}

impl MarketplaceClient {
    /// Crear un cliente apuntando al endpoint GraphQL (p.ej.
    /// "http://localhost:3000/api/graphql")
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Descargar la lista completa de anuncios
    pub async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        let query = format!("query GetVehicles {{ vehicles {{ {} }} }}", VEHICLE_FIELDS);
        let data: VehiclesData = self.execute(&query, Value::Null).await?;
        Ok(data.vehicles)
    }

    /// Detalle de un anuncio; None cuando el id no existe
    pub async fn get_vehicle(&self, id: &str) -> AppResult<Option<Vehicle>> {
        let query = format!(
            "query GetVehicle($id: ID!) {{ vehicle(id: $id) {{ {} }} }}",
            VEHICLE_FIELDS
        );
        let data: VehicleData = self.execute(&query, json!({ "id": id })).await?;
        Ok(data.vehicle)
    }

    /// Publicar un anuncio; devuelve el registro creado con su id asignado
    pub async fn add_vehicle(&self, input: &VehicleInput) -> AppResult<Vehicle> {
        let query = format!(
            "mutation AddVehicle($vehicle: VehicleInput!) {{ addVehicle(vehicle: $vehicle) {{ {} }} }}",
            VEHICLE_FIELDS
        );
        let data: AddVehicleData = self
            .execute(&query, json!({ "vehicle": input }))
            .await?;
        data.add_vehicle
            .ok_or_else(|| AppError::Internal("addVehicle devolvió null".to_string()))
    }

    /// Eliminar un anuncio; false cuando el id no existía
    pub async fn remove_vehicle(&self, id: &str) -> AppResult<bool> {
        let query = "mutation RemoveVehicle($id: ID!) { removeVehicle(id: $id) }";
        let data: RemoveVehicleData = self.execute(query, json!({ "id": id })).await?;
        Ok(data.remove_vehicle.unwrap_or(false))
    }

    /// Ejecutar una operación y desempaquetar el sobre `{data, errors}`
    async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> AppResult<T> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error de red: {}", e)))?;

        let envelope: GraphQLEnvelope<T> = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Respuesta inválida: {}", e)))?;

        if let Some(errors) = envelope.errors {
            if let Some(first) = errors.first() {
                return Err(AppError::ExternalApi(first.message.clone()));
            }
        }

        envelope
            .data
            .ok_or_else(|| AppError::Internal("Respuesta GraphQL sin campo 'data'".to_string()))
    }
}
