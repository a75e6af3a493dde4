//! Process execution: runs a command line as a child process.
//!
//! [`CommandRunner`] is the seam the action calls through; [`ProcessCommandRunner`]
//! is the real implementation used by the CLI.

use std::io::Write;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, info, warn};

pub use crate::error::ExecError;

/// Captured result of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs a single command line.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command_line` to completion and report its output.
    async fn run(&self, command_line: &str) -> Result<ExecOutput, ExecError>;
}

/// Splits a command line into a tool and its arguments.
///
/// Double quotes group words and are dropped. Inside quotes `\"` yields a literal
/// quote; every other backslash is kept as written. Unquoted spaces separate
/// arguments and empty arguments are discarded.
pub fn split_command_line(command_line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut arg = String::new();
    let mut in_quotes = false;
    let mut escaped = false;

    let push = |arg: &mut String, escaped: &mut bool, c: char| {
        if *escaped && c != '"' {
            arg.push('\\');
        }
        arg.push(c);
        *escaped = false;
    };

    for c in command_line.chars() {
        match c {
            '"' if !escaped => in_quotes = !in_quotes,
            '"' => push(&mut arg, &mut escaped, c),
            '\\' if escaped => push(&mut arg, &mut escaped, c),
            '\\' if in_quotes => escaped = true,
            ' ' if !in_quotes => {
                if !arg.is_empty() {
                    args.push(std::mem::take(&mut arg));
                }
            }
            _ => push(&mut arg, &mut escaped, c),
        }
    }

    if !arg.is_empty() {
        args.push(arg.trim().to_string());
    }
    args
}

/// Resolves `tool` against `PATH` the way the runner does before echoing a command.
pub fn resolve_tool(tool: &str) -> Result<PathBuf, ExecError> {
    which::which(tool).map_err(|source| ExecError::NotFound {
        tool: tool.to_string(),
        source,
    })
}

/// Copies `from` into `to` as it arrives and returns everything copied.
async fn tee<R, W>(from: Option<R>, mut to: W) -> Vec<u8>
where
    R: AsyncRead + Unpin,
    W: Write,
{
    let mut captured = Vec::new();
    let Some(mut from) = from else {
        return captured;
    };
    let mut buf = [0u8; 8192];
    loop {
        match from.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                // A broken stdout/stderr is not the command's failure.
                let _ = to.write_all(&buf[..n]).and_then(|_| to.flush());
                captured.extend_from_slice(&buf[..n]);
            }
            Err(e) => {
                warn!(error = ?e, "Failed to read child output");
                break;
            }
        }
    }
    captured
}

/// Spawns commands with `tokio::process`, echoing them and streaming their output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessCommandRunner;

#[async_trait]
impl CommandRunner for ProcessCommandRunner {
    async fn run(&self, command_line: &str) -> Result<ExecOutput, ExecError> {
        let mut parts = split_command_line(command_line).into_iter();
        let tool = parts.next().ok_or(ExecError::EmptyCommand)?;
        let args: Vec<String> = parts.collect();
        let tool_path = resolve_tool(&tool)?;

        // The runner log shows each invocation as `[command]<resolved tool> <args>`.
        let mut echoed = tool_path.display().to_string();
        for arg in &args {
            echoed.push(' ');
            echoed.push_str(arg);
        }
        println!("[command]{echoed}");
        info!(tool = %tool_path.display(), args = ?args, "Spawning command");

        let spawn_error = |source: std::io::Error| ExecError::Spawn {
            tool: tool.clone(),
            source,
        };
        let mut child = tokio::process::Command::new(&tool_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        let (stdout, stderr) = tokio::join!(
            tee(child.stdout.take(), std::io::stdout()),
            tee(child.stderr.take(), std::io::stderr()),
        );
        let status = child.wait().await.map_err(spawn_error)?;

        let exit_code = status
            .code()
            .ok_or_else(|| ExecError::Terminated { tool: tool.clone() })?;
        debug!(tool = %tool, exit_code, "Command finished");

        if exit_code != 0 {
            return Err(ExecError::NonZeroExit {
                tool,
                code: exit_code,
            });
        }

        Ok(ExecOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        })
    }
}
