/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const DEFAULT_PAGE_LIMIT: u64 = 50;
pub const MAX_PAGE_LIMIT: u64 = 500;

pub const USER_NAME_LENGTH: RangeInclusive<usize> = 2..=100;
pub const PASSWORD_LENGTH: RangeInclusive<usize> = 6..=128;
pub const PROJECT_NAME_LENGTH: RangeInclusive<usize> = 3..=100;
pub const TASK_TITLE_LENGTH: RangeInclusive<usize> = 3..=200;
pub const MAX_HOURS: f64 = 10_000.0;

pub const API_NAME: &str = "Taskdeck API";
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
