//! HTTP surface for the staffdir employee directory.
//!
//! Thin transport layer only: request/response shaping and status-code
//! mapping. All CRUD semantics live in `staffdir_core`.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{build_app, build_router};
pub use state::AppState;
