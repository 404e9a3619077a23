/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    #[sea_orm(string_value = "task_created")]
    TaskCreated,
    #[sea_orm(string_value = "task_updated")]
    TaskUpdated,
    #[sea_orm(string_value = "task_deleted")]
    TaskDeleted,
    #[sea_orm(string_value = "task_completed")]
    TaskCompleted,
    #[sea_orm(string_value = "project_created")]
    ProjectCreated,
    #[sea_orm(string_value = "project_updated")]
    ProjectUpdated,
    #[sea_orm(string_value = "project_deleted")]
    ProjectDeleted,
    #[sea_orm(string_value = "user_registered")]
    UserRegistered,
    #[sea_orm(string_value = "user_logged_in")]
    UserLoggedIn,
    #[sea_orm(string_value = "user_logged_out")]
    UserLoggedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    #[sea_orm(string_value = "task")]
    Task,
    #[sea_orm(string_value = "project")]
    Project,
    #[sea_orm(string_value = "user")]
    User,
}

impl std::str::FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "task" => Ok(EntityType::Task),
            "project" => Ok(EntityType::Project),
            "user" => Ok(EntityType::User),
            _ => Err(format!("Unknown entity type: {}", s)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "activity")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: ActivityAction,
    pub entity_type: EntityType,
    pub entity_id: Option<Uuid>,
    pub metadata: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl ActiveModelBehavior for ActiveModel {}
