/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::Utc;
use entity::activity::{ActivityAction, EntityType};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use serde_json::Value;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(25)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(300));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database connected");
    Ok(db)
}

pub async fn get_user_by_email<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<Option<MUser>, DbErr> {
    EUser::find()
        .filter(CUser::Email.eq(email.trim().to_lowercase()))
        .one(db)
        .await
}

/// A single entry for the activity feed.
#[derive(Debug, Clone)]
pub struct ActivityRecord {
    pub user_id: Option<Uuid>,
    pub action: ActivityAction,
    pub entity_type: EntityType,
    pub entity_id: Option<Uuid>,
    pub metadata: Value,
}

impl ActivityRecord {
    pub fn new(
        user_id: Uuid,
        action: ActivityAction,
        entity_type: EntityType,
        entity_id: Uuid,
    ) -> Self {
        ActivityRecord {
            user_id: Some(user_id),
            action,
            entity_type,
            entity_id: Some(entity_id),
            metadata: Value::Object(Default::default()),
        }
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = metadata;
        self
    }
}

pub async fn insert_activity<C: ConnectionTrait>(
    db: &C,
    record: ActivityRecord,
) -> Result<MActivity, DbErr> {
    let activity = AActivity {
        id: Set(Uuid::new_v4()),
        user_id: Set(record.user_id),
        action: Set(record.action),
        entity_type: Set(record.entity_type),
        entity_id: Set(record.entity_id),
        metadata: Set(record.metadata),
        created_at: Set(Utc::now()),
    };

    activity.insert(db).await
}

/// Writes to the activity feed never fail the operation that triggered them.
pub async fn record_activity<C: ConnectionTrait>(db: &C, record: ActivityRecord) {
    let action = record.action.clone();

    if let Err(e) = insert_activity(db, record).await {
        tracing::warn!("Failed to record activity {:?}: {}", action, e);
    }
}
