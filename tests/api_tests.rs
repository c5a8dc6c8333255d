//! Tests end-to-end del endpoint GraphQL sobre HTTP

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;

use ev_marketplace::config::environment::EnvironmentConfig;
use ev_marketplace::routes::create_router;
use ev_marketplace::state::AppState;

// Función helper para crear la app de test con un archivo de datos temporal
fn create_test_server(dir: &TempDir) -> TestServer {
    let config = EnvironmentConfig {
        environment: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![],
        data_path: Some(dir.path().join("vehicle_data.json")),
    };
    let app = create_router(AppState::new(config));
    TestServer::new(app).expect("no se pudo crear el servidor de test")
}

fn sample_vehicle_input() -> Value {
    json!({
        "brand": "Tesla",
        "model": "Model 3",
        "year": 2023,
        "price": 35000.0,
        "range_km": 500,
        "color": "Rojo",
        "condition": "New",
        "battery_capacity_kWh": 75.0,
        "charging_speed_kW": 250.0,
        "seats": 5,
        "drivetrain": "RWD",
        "location": "Berlin",
        "autopilot": true,
        "kilometer_count": 0,
        "accidents": false,
        "images": ["https://example.com/m3.jpg"]
    })
}

const ADD_VEHICLE: &str = "mutation AddVehicle($vehicle: VehicleInput!) { \
    addVehicle(vehicle: $vehicle) { id brand model price battery_capacity_kWh } }";

#[tokio::test]
async fn test_health_check() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["service"], "ev-marketplace");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_ciclo_completo_add_list_get_remove() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    // Publicar un anuncio
    let response = server
        .post("/api/graphql")
        .json(&json!({ "query": ADD_VEHICLE, "variables": { "vehicle": sample_vehicle_input() } }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert!(body["errors"].is_null(), "errores inesperados: {}", body["errors"]);
    let id = body["data"]["addVehicle"]["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("tesla-model-3-2023-"));
    assert_eq!(body["data"]["addVehicle"]["battery_capacity_kWh"], 75.0);

    // Listar: debe aparecer exactamente una vez
    let response = server
        .post("/api/graphql")
        .json(&json!({ "query": "{ vehicles { id brand } }" }))
        .await;
    let body: Value = response.json();
    let vehicles = body["data"]["vehicles"].as_array().unwrap();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0]["id"], id.as_str());

    // Detalle por id
    let response = server
        .post("/api/graphql")
        .json(&json!({
            "query": "query GetVehicle($id: ID!) { vehicle(id: $id) { brand location } }",
            "variables": { "id": id }
        }))
        .await;
    let body: Value = response.json();
    assert_eq!(body["data"]["vehicle"]["brand"], "Tesla");
    assert_eq!(body["data"]["vehicle"]["location"], "Berlin");

    // Eliminar y verificar que la lista queda vacía
    let response = server
        .post("/api/graphql")
        .json(&json!({
            "query": "mutation RemoveVehicle($id: ID!) { removeVehicle(id: $id) }",
            "variables": { "id": id }
        }))
        .await;
    let body: Value = response.json();
    assert_eq!(body["data"]["removeVehicle"], true);

    let response = server
        .post("/api/graphql")
        .json(&json!({ "query": "{ vehicles { id } }" }))
        .await;
    let body: Value = response.json();
    assert_eq!(body["data"]["vehicles"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_remove_de_id_inexistente_devuelve_false() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    let response = server
        .post("/api/graphql")
        .json(&json!({
            "query": "mutation { removeVehicle(id: \"no-existe\") }"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["removeVehicle"], false);
}

#[tokio::test]
async fn test_vehicle_inexistente_devuelve_null() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    let response = server
        .post("/api/graphql")
        .json(&json!({ "query": "{ vehicle(id: \"no-existe\") { id } }" }))
        .await;

    let body: Value = response.json();
    assert!(body["errors"].is_null());
    assert!(body["data"]["vehicle"].is_null());
}

#[tokio::test]
async fn test_query_vacia_produce_bad_request() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    let response = server
        .post("/api/graphql")
        .json(&json!({ "query": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_query_invalida_viaja_en_el_sobre_de_errores() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    let response = server
        .post("/api/graphql")
        .json(&json!({ "query": "{ campoQueNoExiste }" }))
        .await;

    // El fallo de ejecución GraphQL va dentro del sobre, no en el status
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_mutacion_sin_accident_description() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    // accidents true sin descripción: la convención no se fuerza
    let mut input = sample_vehicle_input();
    input["accidents"] = json!(true);

    let response = server
        .post("/api/graphql")
        .json(&json!({ "query": ADD_VEHICLE, "variables": { "vehicle": input } }))
        .await;

    let body: Value = response.json();
    assert!(body["errors"].is_null(), "errores inesperados: {}", body["errors"]);
    assert!(body["data"]["addVehicle"]["id"].as_str().is_some());
}

#[tokio::test]
async fn test_playground_disponible_en_get() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    let response = server.get("/api/graphql").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("GraphQL Playground"));
}

#[tokio::test]
async fn test_documento_persistido_con_count_consistente() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    for _ in 0..2 {
        server
            .post("/api/graphql")
            .json(&json!({ "query": ADD_VEHICLE, "variables": { "vehicle": sample_vehicle_input() } }))
            .await;
    }

    // El archivo en disco debe ser JSON pretty con {count, data} coherentes
    let raw = std::fs::read_to_string(dir.path().join("vehicle_data.json")).unwrap();
    assert!(raw.contains('\n'));
    let document: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(document["count"], 2);
    assert_eq!(document["data"].as_array().unwrap().len(), 2);
}
