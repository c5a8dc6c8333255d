//! Generación de identificadores de vehículos
//!
//! Esquema prefijo-determinista + sufijo-aleatorio: marca-modelo-año en
//! minúsculas más el primer segmento de un UUID v4 (8 caracteres hex).
//! La probabilidad de colisión es despreciable y no se maneja.

use uuid::Uuid;

/// Generar un identificador legible para un vehículo
///
/// "Tesla", "Model 3", 2023 produce algo como "tesla-model-3-2023-a1b2c3d4".
/// Los espacios se colapsan a guiones y se descarta cualquier carácter fuera
/// de `[a-z0-9-]`.
pub fn generate_vehicle_id(brand: &str, model: &str, year: i32) -> String {
    let base = format!("{}-{}-{}", brand, model, year).to_lowercase();

    let mut id = String::with_capacity(base.len() + 9);
    let mut previous_was_space = false;
    for c in base.chars() {
        if c.is_whitespace() {
            if !previous_was_space {
                id.push('-');
            }
            previous_was_space = true;
        } else {
            previous_was_space = false;
            if matches!(c, 'a'..='z' | '0'..='9' | '-') {
                id.push(c);
            }
        }
    }

    let uuid = Uuid::new_v4().to_string();
    let suffix = uuid.split('-').next().unwrap_or_default();

    format!("{}-{}", id, suffix)
}
