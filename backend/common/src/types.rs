/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "Taskdeck", display_name = "Taskdeck", bin_name = "taskdeck-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "TASKDECK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "TASKDECK_DEBUG", default_value = "false")]
    pub debug: bool,
    #[arg(long, env = "TASKDECK_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "TASKDECK_PORT", value_parser = port_in_range, default_value_t = 8080)]
    pub port: u16,
    #[arg(long, env = "TASKDECK_SERVE_URL", default_value = "http://127.0.0.1:3000")]
    pub serve_url: String,
    #[arg(long, env = "TASKDECK_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "TASKDECK_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "TASKDECK_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "TASKDECK_ACCESS_TOKEN_HOURS", value_parser = greater_than_zero::<i64>, default_value = "24")]
    pub access_token_hours: i64,
    #[arg(long, env = "TASKDECK_REFRESH_TOKEN_DAYS", value_parser = greater_than_zero::<i64>, default_value = "7")]
    pub refresh_token_days: i64,
    #[arg(long, env = "TASKDECK_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub jwt_secret: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

/// Raw `limit`/`offset` query values. Both are kept as strings so that
/// garbage input falls back to the defaults instead of rejecting the request.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl From<&PaginationQuery> for Pagination {
    fn from(query: &PaginationQuery) -> Self {
        let limit = query
            .limit
            .as_deref()
            .and_then(|l| l.trim().parse::<i64>().ok())
            .filter(|l| *l > 0)
            .map(|l| (l as u64).min(MAX_PAGE_LIMIT))
            .unwrap_or(DEFAULT_PAGE_LIMIT);

        let offset = query
            .offset
            .as_deref()
            .and_then(|o| o.trim().parse::<i64>().ok())
            .filter(|o| *o >= 0)
            .map(|o| o as u64)
            .unwrap_or(0);

        Pagination { limit, offset }
    }
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, pagination: Pagination) -> Self {
        Page {
            items,
            total,
            limit: pagination.limit,
            offset: pagination.offset,
        }
    }
}

pub type EActivity = activity::Entity;
pub type EProject = project::Entity;
pub type ETask = task::Entity;
pub type EUser = user::Entity;

pub type MActivity = activity::Model;
pub type MProject = project::Model;
pub type MTask = task::Model;
pub type MUser = user::Model;

pub type AActivity = activity::ActiveModel;
pub type AProject = project::ActiveModel;
pub type ATask = task::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CActivity = activity::Column;
pub type CProject = project::Column;
pub type CTask = task::Column;
pub type CUser = user::Column;
