/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for task and project entities

use chrono::{NaiveDate, Utc};
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, QueryOrder, entity::prelude::*};
use uuid::Uuid;

fn sample_task(title: &str, status: task::TaskStatus) -> task::Model {
    task::Model {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        description: "".to_owned(),
        project_id: Some(Uuid::new_v4()),
        assigned_to: None,
        priority: task::TaskPriority::High,
        status,
        due_date: NaiveDate::from_ymd_opt(2026, 4, 30),
        estimated_hours: Some(6.5),
        actual_hours: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_filter_tasks_by_status() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            sample_task("Ship v1", task::TaskStatus::Done),
            sample_task("Write docs", task::TaskStatus::Done),
        ]])
        .into_connection();

    let tasks = task::Entity::find()
        .filter(task::Column::Status.eq(task::TaskStatus::Done))
        .order_by_desc(task::Column::CreatedAt)
        .all(&db)
        .await?;

    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| t.status == task::TaskStatus::Done));

    Ok(())
}

#[test]
fn test_task_serialization() {
    let task = sample_task("Ship v1", task::TaskStatus::InProgress);
    let json = serde_json::to_value(&task).unwrap();

    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["due_date"], "2026-04-30");
    assert_eq!(json["estimated_hours"], 6.5);
    assert!(json["assigned_to"].is_null());
}

#[test]
fn test_project_optional_due_date() {
    let project = project::Model {
        id: Uuid::new_v4(),
        name: "Infra".to_owned(),
        description: "Cluster upgrade".to_owned(),
        owner_id: Uuid::new_v4(),
        status: project::ProjectStatus::Completed,
        due_date: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["status"], "completed");
    assert!(json["due_date"].is_null());
}
