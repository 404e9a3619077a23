/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_table_user;
mod m20260301_000002_create_table_project;
mod m20260301_000003_create_table_task;
mod m20260301_000004_create_table_activity;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_table_user::Migration),
            Box::new(m20260301_000002_create_table_project::Migration),
            Box::new(m20260301_000003_create_table_task::Migration),
            Box::new(m20260301_000004_create_table_activity::Migration),
        ]
    }
}
