//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y la selección de la
//! ruta del archivo de datos. Todas las variables tienen default: el
//! servidor arranca sin configuración previa.

use std::env;
use std::path::PathBuf;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    /// Override explícito de la ruta del archivo de datos (DATA_PATH)
    pub data_path: Option<PathBuf>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            data_path: env::var("DATA_PATH").ok().map(PathBuf::from),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Ruta del archivo de datos
    ///
    /// El override explícito (DATA_PATH) gana siempre. Si no, en desarrollo
    /// se usa data/vehicle_data.json bajo el directorio de trabajo y en
    /// cualquier otro entorno la ubicación temporal /tmp/vehicle_data.json.
    pub fn data_path(&self) -> PathBuf {
        if let Some(path) = &self.data_path {
            return path.clone();
        }
        if self.is_development() {
            PathBuf::from("data/vehicle_data.json")
        } else {
            PathBuf::from("/tmp/vehicle_data.json")
        }
    }
}
