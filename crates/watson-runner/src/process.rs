//! Sherlock subprocess execution with line-by-line output streaming.

use async_trait::async_trait;
use std::ffi::OsString;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

use watson_common::{Result, WatsonError};
use watson_config::SherlockConfig;

/// How long to wait for stderr after the child has been killed.
const STDERR_GRACE: Duration = Duration::from_secs(2);

/// Receives stdout lines while the tool is running.
#[async_trait]
pub trait OutputSink: Send + Sync {
    async fn line(&self, line: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The process exited on its own. `exit_code` is `None` when it was
    /// terminated by a signal.
    Exited { exit_code: Option<i32>, stderr: String },
    /// The deadline passed and the process was killed.
    TimedOut { stderr: String },
}

/// Wrapper for Sherlock execution.
#[derive(Debug, Clone)]
pub struct SherlockRunner {
    executable: String,
    prefix_args: Vec<String>,
    timeout: Option<Duration>,
}

impl SherlockRunner {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            prefix_args: Vec::new(),
            timeout: None,
        }
    }

    pub fn from_config(config: &SherlockConfig) -> Self {
        Self::new(config.executable.clone())
            .with_prefix_args(config.prefix_args.clone())
            .with_timeout(config.search_timeout())
    }

    pub fn with_prefix_args(mut self, prefix_args: Vec<String>) -> Self {
        self.prefix_args = prefix_args;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn launch_error(&self, reason: impl ToString) -> WatsonError {
        WatsonError::Launch { program: self.executable.clone(), reason: reason.to_string() }
    }

    /// Run the tool with `args`, handing each stdout line to `sink`.
    pub async fn run(&self, args: &[OsString], sink: &dyn OutputSink) -> Result<RunOutcome> {
        debug!("Spawning {} {:?} {:?}", self.executable, self.prefix_args, args);

        let mut child = Command::new(&self.executable)
            .args(&self.prefix_args)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.launch_error(e))?;

        let stdout = child.stdout.take().ok_or_else(|| self.launch_error("stdout not captured"))?;
        let mut stderr = child.stderr.take().ok_or_else(|| self.launch_error("stderr not captured"))?;

        // Drain stderr concurrently so a chatty tool never blocks on a full pipe.
        let stderr_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            let _ = stderr.read_to_end(&mut buf).await;
            String::from_utf8_lossy(&buf).into_owned()
        });

        let drive = async {
            let mut reader = BufReader::new(stdout);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                if reader.read_until(b'\n', &mut buf).await? == 0 {
                    break;
                }
                let line = String::from_utf8_lossy(&buf);
                sink.line(line.trim_end_matches(['\n', '\r'])).await;
            }
            let status = child.wait().await?;
            Ok::<_, std::io::Error>(status)
        };

        let finished = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, drive).await.ok(),
            None => Some(drive.await),
        };

        match finished {
            Some(status) => {
                let status = status?;
                let stderr = stderr_task.await.unwrap_or_default();
                info!("{} exited with {}", self.executable, status);
                Ok(RunOutcome::Exited { exit_code: status.code(), stderr })
            }
            None => {
                warn!("{} exceeded {:?}, killing it", self.executable, self.timeout);
                if let Err(e) = child.kill().await {
                    warn!("Failed to kill {}: {}", self.executable, e);
                }
                let stderr = match tokio::time::timeout(STDERR_GRACE, stderr_task).await {
                    Ok(joined) => joined.unwrap_or_default(),
                    Err(_) => String::new(),
                };
                Ok(RunOutcome::TimedOut { stderr })
            }
        }
    }
}
