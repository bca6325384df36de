//! Rebuild coordinator — runs the external graph generator.
//!
//! The generator is an opaque collaborator: a single command run in a fixed
//! working directory that is expected to leave a serialized graph document
//! at a known relative path. The coordinator invokes it synchronously, reads
//! the artifact back through the loader, and performs no retries — rebuilds
//! are operator-triggered.
//!
//! The generator writes to a fixed output path, so two rebuilds must never
//! run concurrently against the same working directory. The blocking,
//! single-threaded design here upholds that by construction.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tracing::info;

use crate::model::Document;
use crate::{loader, Error, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Configuration for the external graph generator.
#[derive(Debug, Clone, Deserialize)]
pub struct Generator {
    /// Program to invoke (e.g. `cargo`).
    pub command: String,
    /// Arguments to pass (e.g. `["run", "--release"]`).
    #[serde(default)]
    pub args: Vec<String>,
    /// Directory holding the generator; the command runs here.
    pub working_dir: PathBuf,
    /// Expected output artifact, relative to `working_dir`.
    pub artifact: PathBuf,
    /// Kill the generator and fail with `RebuildTimeout` after this long.
    /// `None` blocks indefinitely.
    #[serde(default, with = "option_secs")]
    pub timeout: Option<Duration>,
}

mod option_secs {
    use super::Duration;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_secs))
    }
}

impl Generator {
    pub fn new(
        command: impl Into<String>,
        working_dir: impl AsRef<Path>,
        artifact: impl AsRef<Path>,
    ) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            working_dir: working_dir.as_ref().to_path_buf(),
            artifact: artifact.as_ref().to_path_buf(),
            timeout: None,
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Run the generator and load the document it produced.
    ///
    /// - Non-zero exit → [`Error::RebuildFailed`] carrying the process's
    ///   diagnostic output verbatim (stderr, falling back to stdout).
    /// - Timeout expiry → [`Error::RebuildTimeout`], the process is killed.
    /// - Exit zero but no artifact → [`Error::ArtifactMissing`].
    /// - Otherwise the artifact goes through the loader, with its full error
    ///   taxonomy.
    pub fn rebuild(&self) -> Result<Document> {
        info!(
            command = %self.command,
            working_dir = %self.working_dir.display(),
            "invoking graph generator"
        );

        let (status, stdout, stderr) = self.run()?;

        if !status.success() {
            let diagnostic = if stderr.trim().is_empty() { stdout } else { stderr };
            return Err(Error::RebuildFailed(diagnostic));
        }

        let artifact = self.working_dir.join(&self.artifact);
        if !artifact.exists() {
            return Err(Error::ArtifactMissing(artifact));
        }

        info!(artifact = %artifact.display(), "generator succeeded, loading artifact");
        loader::load_path(artifact)
    }

    fn run(&self) -> Result<(std::process::ExitStatus, String, String)> {
        let mut command = Command::new(&self.command);
        command
            .args(&self.args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let Some(timeout) = self.timeout else {
            let output = command.output()?;
            return Ok((
                output.status,
                String::from_utf8_lossy(&output.stdout).into_owned(),
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        };

        let mut child = command.spawn()?;

        // Drain the pipes on their own threads so a chatty generator cannot
        // fill a pipe buffer and stall while we poll for exit.
        let stdout_handle = drain(child.stdout.take());
        let stderr_handle = drain(child.stderr.take());

        let deadline = Instant::now() + timeout;
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(Error::RebuildTimeout(timeout));
            }
            thread::sleep(POLL_INTERVAL);
        };

        let stdout = stdout_handle.join().unwrap_or_default();
        let stderr = stderr_handle.join().unwrap_or_default();
        Ok((status, stdout, stderr))
    }
}

fn drain(pipe: Option<impl Read + Send + 'static>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}
