//! Server Handlers
//!
//! HTTP handlers for server configuration CRUD operations. Servers are
//! addressed by MAC address, the identifier a booting host presents.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::server::{
    CreateServerDto, ServerResponseDto, UpdateServerDto,
};
use crate::infrastructure::driving_adapters::api_rest::extract::ApiJson;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for server endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_servers).post(create_server).delete(delete_all_servers))
        .route(
            "/{mac_address}",
            get(find_server).put(update_server).delete(delete_server),
        )
}

/// GET /servers - List all server configurations
///
/// # Responses
///
/// * 200 OK - List of servers (empty when none are registered)
#[axum::debug_handler]
async fn list_servers(State(state): State<AppState>) -> Result<Json<Vec<ServerResponseDto>>, ApiError> {
    let servers = state.list_servers_use_case.execute().await?;

    let response: Vec<ServerResponseDto> = servers.into_iter().map(ServerResponseDto::from).collect();
    Ok(Json(response))
}

/// POST /servers - Register a new server
///
/// # Responses
///
/// * 201 Created - Server created, body carries the store-assigned id
/// * 400 Bad Request - Malformed body or validation error
/// * 409 Conflict - A server with the same MAC address already exists
#[axum::debug_handler]
async fn create_server(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreateServerDto>,
) -> Result<(StatusCode, Json<ServerResponseDto>), ApiError> {
    dto.validate()?;

    let server = state.create_server_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(ServerResponseDto::from(server))))
}

/// DELETE /servers - Remove every server configuration
///
/// # Responses
///
/// * 204 No Content
#[axum::debug_handler]
async fn delete_all_servers(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.delete_all_servers_use_case.execute().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /servers/{mac_address} - Look up a server by MAC address
///
/// # Responses
///
/// * 200 OK - Server found
/// * 404 Not Found - No server has this MAC address
#[axum::debug_handler]
async fn find_server(
    State(state): State<AppState>,
    Path(mac_address): Path<String>,
) -> Result<Json<ServerResponseDto>, ApiError> {
    let server = state.find_server_use_case.execute(&mac_address).await?;

    Ok(Json(ServerResponseDto::from(server)))
}

/// PUT /servers/{mac_address} - Update gateway, hostname, ip and netmask
///
/// # Responses
///
/// * 204 No Content - Update applied (also when no server matched)
/// * 400 Bad Request - Validation error or body MAC differs from path
#[axum::debug_handler]
async fn update_server(
    State(state): State<AppState>,
    Path(mac_address): Path<String>,
    ApiJson(dto): ApiJson<UpdateServerDto>,
) -> Result<StatusCode, ApiError> {
    dto.validate()?;

    if dto.conflicts_with(&mac_address) {
        return Err(ApiError::BadRequest(
            "mac_address in body does not match the path and cannot be changed".to_string(),
        ));
    }

    state
        .update_server_use_case
        .execute(dto.into_data(mac_address))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /servers/{mac_address} - Remove a server configuration
///
/// # Responses
///
/// * 204 No Content - Deleted (also when no server matched)
#[axum::debug_handler]
async fn delete_server(
    State(state): State<AppState>,
    Path(mac_address): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.delete_server_use_case.execute(&mac_address).await?;

    Ok(StatusCode::NO_CONTENT)
}
