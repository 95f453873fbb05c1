pub mod health;
pub mod roles;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /roles         list the seeded roles (GET)
/// /roles/{id}    fetch one role by ID (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(roles::router())
}
