/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for user entity

use chrono::{TimeZone, Utc};
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

fn sample_user(role: user::UserRole) -> user::Model {
    let created = Utc.with_ymd_and_hms(2026, 1, 15, 8, 0, 0).unwrap();

    user::Model {
        id: Uuid::new_v4(),
        name: "Grace Hopper".to_owned(),
        email: "grace@example.com".to_owned(),
        password: "$argon2id$v=19$placeholder".to_owned(),
        role,
        status: user::UserStatus::Active,
        created_at: created,
        updated_at: created,
    }
}

#[tokio::test]
async fn test_find_user_by_id() -> Result<(), DbErr> {
    let model = sample_user(user::UserRole::Member);
    let user_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model]])
        .into_connection();

    let result = user::Entity::find_by_id(user_id).one(&db).await?;

    assert!(result.is_some());
    let user = result.unwrap();
    assert_eq!(user.email, "grace@example.com");
    assert_eq!(user.role, user::UserRole::Member);
    assert!(!user.is_admin());

    Ok(())
}

#[tokio::test]
async fn test_find_missing_user() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    let result = user::Entity::find_by_id(Uuid::new_v4()).one(&db).await?;
    assert!(result.is_none());

    Ok(())
}

#[test]
fn test_admin_flag() {
    assert!(sample_user(user::UserRole::Admin).is_admin());
    assert!(!sample_user(user::UserRole::Member).is_admin());
}

#[test]
fn test_password_not_serialized() {
    let json = serde_json::to_value(sample_user(user::UserRole::Member)).unwrap();

    assert!(json.get("password").is_none());
    assert_eq!(json["name"], "Grace Hopper");
    assert_eq!(json["created_at"], "2026-01-15T08:00:00Z");
}
