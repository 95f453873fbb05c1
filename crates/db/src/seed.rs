//! Startup seed data for the `roles` table.
//!
//! Runs once during process bootstrap, before the server accepts
//! requests. Idempotent: rows already present are left untouched, so
//! every boot after the first is a no-op.

use async_trait::async_trait;
use sqlx::PgPool;

use polls_core::roles::RoleName;

use crate::models::role::Role;
use crate::repositories::RoleRepo;

/// Storage collaborator for roles: lookup by name and save.
#[async_trait]
pub trait RoleStore: Sync {
    async fn find_by_name(&self, name: RoleName) -> Result<Option<Role>, sqlx::Error>;
    async fn save(&self, name: RoleName) -> Result<Role, sqlx::Error>;
}

#[async_trait]
impl RoleStore for PgPool {
    async fn find_by_name(&self, name: RoleName) -> Result<Option<Role>, sqlx::Error> {
        RoleRepo::find_by_name(self, name).await
    }

    async fn save(&self, name: RoleName) -> Result<Role, sqlx::Error> {
        RoleRepo::create(self, name).await
    }
}

/// Ensure every name in [`RoleName::ALL`] has a row, inserting whichever
/// are missing.
///
/// Errors from the store propagate immediately; names after the failing
/// one are not processed. The caller is expected to treat any error as
/// fatal to startup.
pub async fn ensure_default_roles<S: RoleStore>(store: &S) -> Result<(), sqlx::Error> {
    for name in RoleName::ALL {
        if store.find_by_name(name).await?.is_none() {
            let role = store.save(name).await?;
            tracing::info!(role = %role.name, id = role.id, "Inserted missing role");
        }
    }
    Ok(())
}
