//! Integration tests for the startup role seeder against a real database.

use sqlx::PgPool;

use polls_core::roles::RoleName;
use polls_db::repositories::RoleRepo;
use polls_db::seed::ensure_default_roles;

async fn role_names(pool: &PgPool) -> Vec<String> {
    RoleRepo::list(pool)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeding_empty_database_creates_both_roles(pool: PgPool) {
    ensure_default_roles(&pool).await.unwrap();

    assert_eq!(role_names(&pool).await, vec!["ROLE_USER", "ROLE_ADMIN"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeding_is_idempotent(pool: PgPool) {
    ensure_default_roles(&pool).await.unwrap();
    let first = RoleRepo::list(&pool).await.unwrap();

    ensure_default_roles(&pool).await.unwrap();
    let second = RoleRepo::list(&pool).await.unwrap();

    // Same rows, same IDs: the second run inserted nothing.
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeding_fills_in_only_the_missing_role(pool: PgPool) {
    let existing = RoleRepo::create(&pool, RoleName::User).await.unwrap();

    ensure_default_roles(&pool).await.unwrap();

    let roles = RoleRepo::list(&pool).await.unwrap();
    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0].id, existing.id, "pre-existing row kept its ID");
    assert_eq!(roles[0].name, "ROLE_USER");
    assert_eq!(roles[1].name, "ROLE_ADMIN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_name_distinguishes_the_two_roles(pool: PgPool) {
    ensure_default_roles(&pool).await.unwrap();

    let user = RoleRepo::find_by_name(&pool, RoleName::User).await.unwrap();
    let admin = RoleRepo::find_by_name(&pool, RoleName::Admin).await.unwrap();

    let user = user.expect("ROLE_USER should exist after seeding");
    let admin = admin.expect("ROLE_ADMIN should exist after seeding");
    assert_ne!(user.id, admin.id);

    let by_id = RoleRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(by_id.name, user.name);
}
