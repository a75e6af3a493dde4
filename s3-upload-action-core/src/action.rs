//! Action entry point: read inputs → log → build storage URI → run command → notice.
//!
//! [`run_action`] is a single straight-line pass over three injected capabilities:
//!   - a [`ConfigReader`] supplying the `my-input`, `my-input-2` and `dist-folder` inputs
//!   - a [`CommandRunner`] for the placeholder shell command
//!   - a [`Notifier`] for the runner annotation
//!
//! An optional [`GitHubClient`] handle may be passed in; the action keeps it
//! available but makes no API calls with it.
//!
//! # Error Handling
//! A missing required input fails the run before anything is printed or spawned.
//! The command's outcome is traced and otherwise ignored, so it can never fail the run.
//!
//! # Extension Points
//! The eventual upload is `aws s3 sync <dist-folder> <storage-uri> --region <my-input-2>`;
//! `dist_folder` and `region` are carried in [`ActionInputs`] for that step.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ActionError;
use crate::exec::CommandRunner;
use crate::inputs::{get_input, ConfigReader, InputOptions};
use crate::notice::Notifier;
use crate::platform::GitHubClient;
use crate::storage::StorageUri;

pub const BUCKET_INPUT: &str = "my-input";
pub const REGION_INPUT: &str = "my-input-2";
pub const DIST_FOLDER_INPUT: &str = "dist-folder";

/// Placeholder command run in place of the bucket sync.
pub const PLACEHOLDER_COMMAND: &str = r#"echo "Hello World!""#;

pub const NOTICE_MESSAGE: &str = "Hello from my custom Rust Action!";

/// The three action inputs, as read from the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionInputs {
    /// `my-input`: target bucket name.
    pub bucket: String,
    /// `my-input-2`: empty when not supplied.
    pub region: String,
    /// `dist-folder`: local folder to upload.
    pub dist_folder: String,
}

impl ActionInputs {
    pub fn read<R>(reader: &R) -> Result<Self, ActionError>
    where
        R: ConfigReader + ?Sized,
    {
        let bucket = get_input(reader, BUCKET_INPUT, &InputOptions::required())?;
        let region = get_input(reader, REGION_INPUT, &InputOptions::optional())?;
        let dist_folder = get_input(reader, DIST_FOLDER_INPUT, &InputOptions::required())?;
        Ok(ActionInputs {
            bucket,
            region,
            dist_folder,
        })
    }

    /// The inputs space-separated in declaration order. An empty region leaves two adjacent spaces.
    pub fn to_line(&self) -> String {
        format!("{} {} {}", self.bucket, self.region, self.dist_folder)
    }
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionReport {
    pub inputs: ActionInputs,
    pub input_line: String,
    pub storage_uri: StorageUri,
    pub command: String,
    pub notice: String,
}

pub async fn run_action<R, C, N>(
    reader: &R,
    runner: &C,
    notifier: &N,
    github: Option<&GitHubClient>,
) -> Result<ActionReport, ActionError>
where
    R: ConfigReader + ?Sized,
    C: CommandRunner + ?Sized,
    N: Notifier + ?Sized,
{
    info!("[ACTION] Reading inputs");
    let inputs = ActionInputs::read(reader)?;

    let input_line = inputs.to_line();
    println!("{input_line}");

    let storage_uri = StorageUri::for_bucket(&inputs.bucket);
    info!(
        storage_uri = %storage_uri,
        dist_folder = %inputs.dist_folder,
        "[ACTION] Resolved upload target"
    );

    match runner.run(PLACEHOLDER_COMMAND).await {
        Ok(output) => debug!(exit_code = output.exit_code, "[ACTION] Command finished"),
        Err(e) => debug!(error = %e, "[ACTION] Command failed, ignoring"),
    }

    notifier.notice(NOTICE_MESSAGE);

    if let Some(github) = github {
        debug!(
            repository = github.context().repository.as_deref().unwrap_or("<unknown>"),
            "[ACTION] GitHub client available"
        );
    }

    let report = ActionReport {
        inputs,
        input_line,
        storage_uri,
        command: PLACEHOLDER_COMMAND.to_string(),
        notice: NOTICE_MESSAGE.to_string(),
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => debug!(json = %json, "[ACTION] Run report"),
        Err(e) => debug!(error = ?e, "[ACTION] Failed to serialize run report"),
    }
    Ok(report)
}
