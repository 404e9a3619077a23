/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::Result;
use clap::Parser;
use common::init_state;
use common::types::Cli;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},hyper=warn", cli.log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.debug)
        .init();

    let state = init_state(cli).await?;
    web::serve_web(Arc::clone(&state)).await?;

    Ok(())
}
