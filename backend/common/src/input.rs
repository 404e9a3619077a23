/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result, bail};
use email_address::EmailAddress;
use std::ops::RangeInclusive;

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn load_secret(f: &str) -> Result<String> {
    let s = std::fs::read_to_string(f).with_context(|| format!("Failed to read {}", f))?;
    let s = s.trim().replace(char::from(25), "");

    if s.is_empty() {
        bail!("Secret file {} is empty", f);
    }

    Ok(s)
}

fn check_length(field: &str, s: &str, range: RangeInclusive<usize>) -> Result<(), String> {
    let len = s.trim().chars().count();

    if len < *range.start() {
        return Err(format!(
            "{} must be at least {} characters",
            field,
            range.start()
        ));
    }

    if len > *range.end() {
        return Err(format!("{} cannot exceed {} characters", field, range.end()));
    }

    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), String> {
    check_length("Name", name, USER_NAME_LENGTH)
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required".to_string());
    }

    if !EmailAddress::is_valid(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() < *PASSWORD_LENGTH.start() {
        return Err(format!(
            "Password must be at least {} characters",
            PASSWORD_LENGTH.start()
        ));
    }

    if password.len() > *PASSWORD_LENGTH.end() {
        return Err(format!(
            "Password cannot exceed {} characters",
            PASSWORD_LENGTH.end()
        ));
    }

    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("Password must contain at least one letter".to_string());
    }

    Ok(())
}

pub fn validate_project_name(name: &str) -> Result<(), String> {
    check_length("Project name", name, PROJECT_NAME_LENGTH)
}

pub fn validate_task_title(title: &str) -> Result<(), String> {
    check_length("Title", title, TASK_TITLE_LENGTH)
}

pub fn validate_hours(hours: f64) -> Result<(), String> {
    if !hours.is_finite() || hours < 0.0 {
        return Err("Hours must be a positive number".to_string());
    }

    if hours > MAX_HOURS {
        return Err(format!("Hours cannot exceed {}", MAX_HOURS));
    }

    Ok(())
}

/// Collects every failing check so a form can report all problems at once.
pub fn collect_errors(checks: Vec<Result<(), String>>) -> Result<(), Vec<String>> {
    let errors: Vec<String> = checks.into_iter().filter_map(Result::err).collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
