//! Router assembly.

use axum::Router;

use crate::state::AppState;

pub mod employees;
pub mod health;

/// Build a router with all routes registered (no state applied).
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(employees::router())
        .merge(health::router())
}

/// Build the finished application; used by the server binary and by tests
/// driving the router in process.
pub fn build_app(state: AppState) -> Router {
    build_router().with_state(state)
}
