//! Notice emission through runner workflow commands.
//!
//! The runner scans the action's stdout for lines of the form `::<command>::<message>`
//! and turns them into annotations on the workflow run.

use std::fmt;
use std::io::Write;
use std::sync::Mutex;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;
use tracing::warn;

/// Surfaces messages to the CI host's annotation channel.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait Notifier: Send + Sync {
    /// Emit an informational notice.
    fn notice(&self, message: &str);

    /// Emit an error annotation. The runner marks the step failed once the process exits non-zero.
    fn error(&self, message: &str);
}

/// A single `::command::message` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowCommand<'a> {
    pub command: &'a str,
    pub message: &'a str,
}

impl fmt::Display for WorkflowCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::{}::{}", self.command, escape_data(self.message))
    }
}

/// Escapes a message so it stays on one line and survives the runner's decoding.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Writes workflow commands to `W`, stdout by default.
pub struct WorkflowCommandNotifier<W: Write + Send> {
    out: Mutex<W>,
}

impl WorkflowCommandNotifier<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> WorkflowCommandNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn issue(&self, command: WorkflowCommand<'_>) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(out, "{command}").and_then(|_| out.flush()) {
            warn!(error = ?e, command = command.command, "Failed to write workflow command");
        }
    }
}

impl<W: Write + Send> Notifier for WorkflowCommandNotifier<W> {
    fn notice(&self, message: &str) {
        self.issue(WorkflowCommand {
            command: "notice",
            message,
        });
    }

    fn error(&self, message: &str) {
        self.issue(WorkflowCommand {
            command: "error",
            message,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_percent_and_newlines() {
        assert_eq!(escape_data("50% done\r\nnext"), "50%25 done%0D%0Anext");
    }

    #[test]
    fn writes_one_line_per_command() {
        let notifier = WorkflowCommandNotifier::new(Vec::new());
        notifier.notice("first");
        notifier.error("line one\nline two");

        let written = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(written, "::notice::first\n::error::line one%0Aline two\n");
    }
}
