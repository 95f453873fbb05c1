use axum::extract::{Path, State};
use axum::{routing::get, Json, Router};

use polls_core::error::CoreError;
use polls_core::types::DbId;
use polls_db::models::role::Role;
use polls_db::repositories::RoleRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /roles -- list the seeded roles, ordered by ID.
async fn list_roles(State(state): State<AppState>) -> AppResult<Json<Vec<Role>>> {
    let roles = RoleRepo::list(&state.pool).await?;
    Ok(Json(roles))
}

/// GET /roles/{id} -- fetch a single role by its internal ID.
async fn get_role(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Role>> {
    let role = RoleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "role", id })?;
    Ok(Json(role))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/roles", get(list_roles))
        .route("/roles/{id}", get(get_role))
}
