//! `telconf` -- operator CLI for telephony application configuration.
//!
//! Drives the application form and the account list against the admin
//! REST backend. Notices raised along the way are printed after each
//! command.
//!
//! # Environment variables
//!
//! | Variable               | Default                     | Description                   |
//! |------------------------|-----------------------------|-------------------------------|
//! | `API_BASE_URL`         | `http://127.0.0.1:3000/v1`  | Admin API base URL            |
//! | `TELCONF_TOKEN_FILE`   | `$HOME/.telconf/token`      | Where `login` stores the token |
//! | `REQUEST_TIMEOUT_SECS` | `30`                        | Per-request timeout           |
//! | `RUST_LOG`             | `telconf_cli=info,telconf_client=info` | Log filter         |

mod args;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use telconf_client::config::ClientConfig;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "telconf_cli=info,telconf_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = args::Cli::parse();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(
        api_base_url = %config.api_base_url,
        token_file = %config.token_file.display(),
        "Configuration loaded",
    );

    match commands::run(cli.command, &config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
