//! Endpoint GraphQL
//!
//! Un único POST que acepta `{query, variables}` y devuelve el sobre
//! estándar `{data, errors}`. Los fallos de ejecución GraphQL viajan dentro
//! del sobre; solo las requests malformadas producen un status no-200.
//! El GET sirve el playground para desarrollo.

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql::Variables;
use axum::{
    extract::State,
    response::Html,
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_graphql_router() -> Router<AppState> {
    Router::new().route("/", post(execute_graphql).get(graphql_playground))
}

/// Cuerpo de una request GraphQL sobre HTTP
#[derive(Debug, Deserialize)]
pub struct GraphQLHttpRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub variables: Option<serde_json::Value>,
}

async fn execute_graphql(
    State(state): State<AppState>,
    Json(payload): Json<GraphQLHttpRequest>,
) -> Result<Json<async_graphql::Response>, AppError> {
    if payload.query.trim().is_empty() {
        return Err(AppError::BadRequest(
            "El campo 'query' es requerido".to_string(),
        ));
    }

    let mut request = async_graphql::Request::new(payload.query);
    if let Some(variables) = payload.variables {
        request = request.variables(Variables::from_json(variables));
    }

    Ok(Json(state.schema.execute(request).await))
}

async fn graphql_playground() -> Html<String> {
    Html(playground_source(GraphQLPlaygroundConfig::new(
        "/api/graphql",
    )))
}
