/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

use common::input::*;
use std::io::Write;

#[test]
fn test_port_in_range() {
    let port = port_in_range("8080").unwrap();
    assert_eq!(port, 8080);

    let port = port_in_range("65535").unwrap();
    assert_eq!(port, 65535);

    let port = port_in_range("65536").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("0").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("http").unwrap_err();
    assert_eq!(port, "`http` is not a port number");
}

#[test]
fn test_greater_than_zero() {
    assert_eq!(greater_than_zero::<i64>("24").unwrap(), 24);
    assert_eq!(
        greater_than_zero::<i64>("0").unwrap_err(),
        "`0` is not larger than 0"
    );
    assert_eq!(
        greater_than_zero::<i64>("day").unwrap_err(),
        "`day` is not a valid number"
    );
}

#[test]
fn test_validate_name() {
    assert!(validate_name("Al").is_ok());
    assert!(validate_name(&"x".repeat(100)).is_ok());

    assert_eq!(
        validate_name(" A ").unwrap_err(),
        "Name must be at least 2 characters"
    );
    assert_eq!(
        validate_name(&"x".repeat(101)).unwrap_err(),
        "Name cannot exceed 100 characters"
    );
}

#[test]
fn test_validate_email() {
    assert!(validate_email("ada@example.com").is_ok());
    assert_eq!(validate_email("  ").unwrap_err(), "Email is required");
    assert_eq!(
        validate_email("ada.example.com").unwrap_err(),
        "Invalid email format"
    );
}

#[test]
fn test_validate_password() {
    assert!(validate_password("secret1").is_ok());
    assert!(validate_password("abcdef").is_ok());

    assert_eq!(validate_password("").unwrap_err(), "Password is required");
    assert_eq!(
        validate_password("abc").unwrap_err(),
        "Password must be at least 6 characters"
    );
    assert_eq!(
        validate_password(&"a".repeat(129)).unwrap_err(),
        "Password cannot exceed 128 characters"
    );
    assert_eq!(
        validate_password("12345678").unwrap_err(),
        "Password must contain at least one letter"
    );
}

#[test]
fn test_validate_project_name_and_title() {
    assert!(validate_project_name("CRM").is_ok());
    assert_eq!(
        validate_project_name("ab").unwrap_err(),
        "Project name must be at least 3 characters"
    );

    assert!(validate_task_title(&"t".repeat(200)).is_ok());
    assert_eq!(
        validate_task_title(&"t".repeat(201)).unwrap_err(),
        "Title cannot exceed 200 characters"
    );
}

#[test]
fn test_validate_hours() {
    assert!(validate_hours(0.0).is_ok());
    assert!(validate_hours(10_000.0).is_ok());

    assert_eq!(
        validate_hours(-0.5).unwrap_err(),
        "Hours must be a positive number"
    );
    assert_eq!(
        validate_hours(f64::NAN).unwrap_err(),
        "Hours must be a positive number"
    );
    assert_eq!(
        validate_hours(10_000.5).unwrap_err(),
        "Hours cannot exceed 10000"
    );
}

#[test]
fn test_collect_errors() {
    assert!(collect_errors(vec![Ok(()), Ok(())]).is_ok());

    let errors = collect_errors(vec![
        Err("first".to_string()),
        Ok(()),
        Err("second".to_string()),
    ])
    .unwrap_err();
    assert_eq!(errors, vec!["first", "second"]);
}

#[test]
fn test_load_secret() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "  super-secret  ").unwrap();

    let secret = load_secret(file.path().to_str().unwrap()).unwrap();
    assert_eq!(secret, "super-secret");
}

#[test]
fn test_load_secret_empty_or_missing() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert!(load_secret(file.path().to_str().unwrap()).is_err());

    assert!(load_secret("/nonexistent/taskdeck/secret").is_err());
}
