//! This module implements the CLI interface for s3-upload-action: command parsing,
//! wiring of the real runner collaborators, and mapping failure to the runner's
//! failed status.
//!
//! All action logic (input rules, command execution, notices) lives in the
//! [`s3-upload-action-core`] crate. This module is strictly glue.
//!
//! ## How To Use
//! - On a runner: the container entrypoint runs `s3-upload-action run` and inputs arrive
//!   as `INPUT_*` environment variables.
//! - Locally: pass inputs with `--input my-input=my-bucket --input dist-folder=build`,
//!   or put them in `.env` / `--env-file` using the underscored keys (`INPUT_MY_INPUT=my-bucket`),
//!   since env files cannot declare the runner's hyphenated `INPUT_MY-INPUT` form.
//! - For programmatic/integration use: call [`run`] with a constructed [`Cli`].
//!
//! [`s3-upload-action-core`]: ../../s3-upload-action-core/

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use s3_upload_action_core::action::run_action;
use s3_upload_action_core::exec::ProcessCommandRunner;
use s3_upload_action_core::inputs::{EnvConfigReader, LayeredConfigReader};
use s3_upload_action_core::notice::{Notifier, WorkflowCommandNotifier};
use s3_upload_action_core::platform::GitHubClient;
use std::path::PathBuf;

/// CLI for s3-upload-action: read action inputs and prepare the bucket upload.
#[derive(Parser)]
#[clap(
    name = "s3-upload-action",
    version,
    about = "CI action that prepares an upload of a build folder to an S3 bucket"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the action with inputs from the runner environment
    Run {
        /// Override an action input, e.g. `--input my-input=my-bucket` (repeatable)
        #[clap(long = "input", value_name = "NAME=VALUE", value_parser = parse_input_override)]
        inputs: Vec<(String, String)>,

        /// Load extra environment variables from this file before reading inputs
        #[clap(long, env = "S3_UPLOAD_ACTION_ENV_FILE")]
        env_file: Option<PathBuf>,
    },
}

/// Splits `NAME=VALUE` on the first `=`. The value may be empty or contain further `=`.
pub fn parse_input_override(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, _)) if name.is_empty() => Err(format!("missing input name in `{raw}`")),
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected NAME=VALUE, got `{raw}`")),
    }
}

/// A local `.env` is only honoured off-runner: on a runner it would come from the checked-out repository.
pub fn should_load_dotenv(github_actions: Option<&str>) -> bool {
    !matches!(github_actions, Some(value) if !value.is_empty())
}

/// Loads `.env` from the working directory unless running on a runner.
pub fn load_local_dotenv() {
    let github_actions = std::env::var("GITHUB_ACTIONS").ok();
    if should_load_dotenv(github_actions.as_deref()) {
        dotenvy::dotenv().ok();
    }
}

/// Async CLI entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { inputs, env_file } => {
            if let Some(path) = env_file {
                dotenvy::from_path(&path)
                    .with_context(|| format!("Failed to load env file {}", path.display()))?;
                tracing::info!(env_file = %path.display(), "Loaded env file");
            }

            tracing::info!(command = "run", overrides = inputs.len(), "Starting action");
            let reader = LayeredConfigReader::new(inputs, EnvConfigReader);
            let notifier = WorkflowCommandNotifier::stdout();
            let github = match GitHubClient::from_env() {
                Ok(client) => Some(client),
                Err(e) => {
                    tracing::warn!(error = %e, "GitHub client unavailable, continuing without it");
                    None
                }
            };

            match run_action(&reader, &ProcessCommandRunner, &notifier, github.as_ref()).await {
                Ok(report) => {
                    tracing::info!(
                        command = "run",
                        storage_uri = %report.storage_uri,
                        "Action complete"
                    );
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(command = "run", error = %e, "Action failed");
                    notifier.error(&e.to_string());
                    Err(e.into())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_splits_on_first_equals() {
        assert_eq!(
            parse_input_override("my-input=a=b").unwrap(),
            ("my-input".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_input_override("my-input-2=").unwrap(),
            ("my-input-2".to_string(), String::new())
        );
    }

    #[test]
    fn override_requires_name_and_equals() {
        assert!(parse_input_override("my-input").is_err());
        assert!(parse_input_override("=value").is_err());
    }

    #[test]
    fn dotenv_is_skipped_on_runner() {
        assert!(!should_load_dotenv(Some("true")));
        assert!(should_load_dotenv(Some("")));
        assert!(should_load_dotenv(None));
    }

    #[test]
    fn parses_repeated_inputs() {
        let cli = Cli::parse_from([
            "s3-upload-action",
            "run",
            "--input",
            "my-input=bucket-x",
            "--input",
            "dist-folder=build",
        ]);
        let Commands::Run { inputs, .. } = cli.command;
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[1], ("dist-folder".to_string(), "build".to_string()));
    }
}
