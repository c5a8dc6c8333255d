//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su variante de entrada para la
//! mutación addVehicle. Los nombres de campo mapean exactamente al documento
//! JSON persistido y al contrato GraphQL (battery_capacity_kWh incluido).

use async_graphql::{ComplexObject, InputObject, SimpleObject, ID};
use serde::{Deserialize, Serialize};

/// Vehículo publicado en el marketplace
///
/// `condition` ("New"|"Used") y `drivetrain` ("RWD"|"FWD"|"AWD") viajan como
/// strings planos; el servidor no valida sus valores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Vehicle {
    /// Identificador generado por el servidor. Los registros antiguos pueden
    /// no tenerlo en disco; el repositorio lo rellena al leer.
    #[serde(default)]
    #[graphql(skip)]
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub range_km: i32,
    pub color: String,
    pub condition: String,
    #[serde(rename = "battery_capacity_kWh")]
    #[graphql(name = "battery_capacity_kWh")]
    pub battery_capacity_kwh: f64,
    #[serde(rename = "charging_speed_kW")]
    #[graphql(name = "charging_speed_kW")]
    pub charging_speed_kw: f64,
    pub seats: i32,
    pub drivetrain: String,
    pub location: String,
    pub autopilot: bool,
    pub kilometer_count: i32,
    pub accidents: bool,
    // Por convención solo está presente cuando accidents es true; no se valida
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accident_description: Option<String>,
    pub images: Vec<String>,
}

#[ComplexObject]
impl Vehicle {
    async fn id(&self) -> ID {
        ID::from(self.id.clone())
    }
}

impl Vehicle {
    /// Construir un Vehicle a partir del input de la mutación y el id asignado
    pub fn from_input(id: String, input: VehicleInput) -> Self {
        Self {
            id,
            brand: input.brand,
            model: input.model,
            year: input.year,
            price: input.price,
            range_km: input.range_km,
            color: input.color,
            condition: input.condition,
            battery_capacity_kwh: input.battery_capacity_kwh,
            charging_speed_kw: input.charging_speed_kw,
            seats: input.seats,
            drivetrain: input.drivetrain,
            location: input.location,
            autopilot: input.autopilot,
            kilometer_count: input.kilometer_count,
            accidents: input.accidents,
            accident_description: input.accident_description,
            images: input.images,
        }
    }
}

/// Input de la mutación addVehicle - mismos campos que Vehicle menos el id
#[derive(Debug, Clone, Serialize, Deserialize, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct VehicleInput {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub range_km: i32,
    pub color: String,
    pub condition: String,
    #[serde(rename = "battery_capacity_kWh")]
    #[graphql(name = "battery_capacity_kWh")]
    pub battery_capacity_kwh: f64,
    #[serde(rename = "charging_speed_kW")]
    #[graphql(name = "charging_speed_kW")]
    pub charging_speed_kw: f64,
    pub seats: i32,
    pub drivetrain: String,
    pub location: String,
    pub autopilot: bool,
    pub kilometer_count: i32,
    pub accidents: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accident_description: Option<String>,
    pub images: Vec<String>,
}

/// Documento persistido en disco: `{ count, data }`
///
/// Invariante prevista pero no forzada: `count == data.len()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleDocument {
    pub count: usize,
    pub data: Vec<Vehicle>,
}
