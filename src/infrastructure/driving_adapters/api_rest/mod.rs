//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::servers::{
    CreateServerUseCase, DeleteAllServersUseCase, DeleteServerUseCase, FindServerUseCase,
    ListServersUseCase, UpdateServerUseCase,
};
use crate::domain::gateways::ServerRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub list_servers_use_case: Arc<ListServersUseCase>,
    pub find_server_use_case: Arc<FindServerUseCase>,
    pub create_server_use_case: Arc<CreateServerUseCase>,
    pub update_server_use_case: Arc<UpdateServerUseCase>,
    pub delete_server_use_case: Arc<DeleteServerUseCase>,
    pub delete_all_servers_use_case: Arc<DeleteAllServersUseCase>,
}

impl AppState {
    /// Wire every server use case to the same repository
    #[must_use]
    pub fn new(server_repository: Arc<dyn ServerRepository>) -> Self {
        Self {
            list_servers_use_case: Arc::new(ListServersUseCase::new(server_repository.clone())),
            find_server_use_case: Arc::new(FindServerUseCase::new(server_repository.clone())),
            create_server_use_case: Arc::new(CreateServerUseCase::new(server_repository.clone())),
            update_server_use_case: Arc::new(UpdateServerUseCase::new(server_repository.clone())),
            delete_server_use_case: Arc::new(DeleteServerUseCase::new(server_repository.clone())),
            delete_all_servers_use_case: Arc::new(DeleteAllServersUseCase::new(server_repository)),
        }
    }
}

/// Build the API router with request correlation and HTTP tracing
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/servers", handlers::servers::router())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
