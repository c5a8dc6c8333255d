//! Repositorio de vehículos sobre archivo JSON plano
//!
//! Lee y escribe el documento completo `{count, data}` en cada operación.
//! No hay locking ni escritura atómica: dos escritores concurrentes pueden
//! pisarse (last-writer-wins). Limitación conocida y aceptada; ver DESIGN.md.

use std::fs;
use std::path::PathBuf;

use tracing::{error, info};

use crate::models::vehicle::{Vehicle, VehicleDocument, VehicleInput};
use crate::utils::id::generate_vehicle_id;

/// Almacén de vehículos respaldado por un único archivo JSON
///
/// La ruta se inyecta explícitamente (sin path global ambiental); ver
/// `EnvironmentConfig::data_path`.
#[derive(Debug, Clone)]
pub struct VehicleRepository {
    data_path: PathBuf,
}

impl VehicleRepository {
    pub fn new(data_path: PathBuf) -> Self {
        Self { data_path }
    }

    /// Leer el documento completo
    ///
    /// Si el archivo no existe se crea con `{count: 0, data: []}`. Los
    /// registros sin identificador lo reciben aquí y, si hubo alguno, el
    /// documento corregido se persiste antes de devolverse. Cualquier fallo
    /// de I/O o de parseo se registra y se sustituye por el documento vacío;
    /// la corrupción se absorbe, nunca se propaga al caller.
    pub fn read(&self) -> VehicleDocument {
        if !self.data_path.exists() {
            info!(
                "📄 Archivo de datos no encontrado, creando documento vacío en {}",
                self.data_path.display()
            );
            let document = VehicleDocument::default();
            self.write(&document);
            return document;
        }

        let raw = match fs::read_to_string(&self.data_path) {
            Ok(raw) => raw,
            Err(e) => {
                error!("❌ Error leyendo archivo de datos: {}", e);
                return VehicleDocument::default();
            }
        };

        let mut document: VehicleDocument = match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(e) => {
                error!("❌ Error parseando archivo de datos: {}", e);
                return VehicleDocument::default();
            }
        };

        let mut backfilled = 0;
        for vehicle in &mut document.data {
            if vehicle.id.is_empty() {
                vehicle.id = generate_vehicle_id(&vehicle.brand, &vehicle.model, vehicle.year);
                backfilled += 1;
            }
        }

        if backfilled > 0 {
            info!(
                "🔧 {} registros sin identificador, regenerando y persistiendo",
                backfilled
            );
            self.write(&document);
        }

        document
    }

    /// Escribir el documento completo (sobrescritura total, no atómica)
    ///
    /// Los fallos se registran y no se propagan: se asume que el estado
    /// anterior del archivo sigue vigente.
    pub fn write(&self, document: &VehicleDocument) {
        if let Some(parent) = self.data_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    error!("❌ Error creando directorio de datos: {}", e);
                    return;
                }
            }
        }

        match serde_json::to_string_pretty(document) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.data_path, json) {
                    error!("❌ Error escribiendo archivo de datos: {}", e);
                }
            }
            Err(e) => {
                error!("❌ Error serializando documento de vehículos: {}", e);
            }
        }
    }

    /// Lista completa, tal cual está en disco
    pub fn list(&self) -> Vec<Vehicle> {
        self.read().data
    }

    /// Búsqueda lineal por identificador
    pub fn find_by_id(&self, id: &str) -> Option<Vehicle> {
        self.read().data.into_iter().find(|v| v.id == id)
    }

    /// Crear un vehículo: asigna id, lo añade al final y persiste el documento
    pub fn add(&self, input: VehicleInput) -> Vehicle {
        let mut document = self.read();

        let id = generate_vehicle_id(&input.brand, &input.model, input.year);
        let vehicle = Vehicle::from_input(id, input);

        document.data.push(vehicle.clone());
        document.count = document.data.len();
        self.write(&document);

        info!("✅ Vehículo creado: {}", vehicle.id);
        vehicle
    }

    /// Eliminar por identificador
    ///
    /// Devuelve true y persiste la lista filtrada solo si el id existía;
    /// si no, no se escribe nada y devuelve false.
    pub fn remove(&self, id: &str) -> bool {
        let mut document = self.read();
        let initial_length = document.data.len();

        document.data.retain(|v| v.id != id);

        if document.data.len() < initial_length {
            document.count = document.data.len();
            self.write(&document);
            info!("🗑️ Vehículo eliminado: {}", id);
            true
        } else {
            false
        }
    }
}
