//! Python sidecar transport
//!
//! The Resolve scripting API is only exposed to Python and Lua, so the
//! bridge stages an embedded helper script, spawns an interpreter, and
//! exchanges line-delimited JSON over its stdio. Calls are synchronous
//! and single-threaded; the child is killed on drop.

use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HostError;

const SIDECAR_SOURCE: &str = include_str!("sidecar.py");

/// Env var overriding the Python interpreter used for the sidecar.
pub(crate) const PYTHON_ENV: &str = "RESNAP_PYTHON";

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<String>,
}

#[derive(Debug)]
pub(crate) struct Bridge {
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    child: Child,
}

impl Bridge {
    /// Stage the sidecar script and spawn the interpreter.
    pub(crate) fn spawn() -> Result<Self, HostError> {
        let script = stage_sidecar()?;
        let python = env::var(PYTHON_ENV).unwrap_or_else(|_| default_python().to_string());
        debug!("spawning scripting bridge: {python} {}", script.display());

        let mut child = Command::new(&python)
            .arg(&script)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(HostError::Spawn)?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| HostError::Protocol("couldn't capture sidecar stdin".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| HostError::Protocol("couldn't capture sidecar stdout".to_string()))?;

        Ok(Self {
            stdin,
            stdout: BufReader::new(stdout),
            child,
        })
    }

    /// Perform one request/response round trip.
    pub(crate) fn call(&mut self, method: &str, params: Value) -> Result<Value, HostError> {
        let request = serde_json::to_string(&RpcRequest { method, params })
            .map_err(|e| HostError::Protocol(e.to_string()))?;
        trace!("-> {request}");

        writeln!(self.stdin, "{request}")?;
        self.stdin.flush()?;

        let mut line = String::new();
        if self.stdout.read_line(&mut line)? == 0 {
            return Err(HostError::Protocol(
                "sidecar closed the connection".to_string(),
            ));
        }
        trace!("<- {}", line.trim_end());

        let response: RpcResponse = serde_json::from_str(&line)
            .map_err(|e| HostError::Protocol(format!("bad response: {e}")))?;

        if let Some(error) = response.error {
            return Err(map_rpc_error(error));
        }
        Ok(response.result.unwrap_or(Value::Null))
    }
}

impl Drop for Bridge {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Precondition failures come back as well-known error codes from the
/// sidecar's connect method.
fn map_rpc_error(error: String) -> HostError {
    match error.as_str() {
        "not_running" => HostError::NotRunning,
        "no_project" => HostError::NoProject,
        "no_timeline" => HostError::NoTimeline,
        "no_media_pool" => HostError::NoMediaPool,
        _ => HostError::Rpc(error),
    }
}

fn default_python() -> &'static str {
    if cfg!(windows) { "python" } else { "python3" }
}

/// Write the embedded sidecar script somewhere the interpreter can read it.
fn stage_sidecar() -> Result<PathBuf, HostError> {
    let path = env::temp_dir().join(format!("resnap-sidecar-{}.py", std::process::id()));
    fs::write(&path, SIDECAR_SOURCE)?;
    Ok(path)
}
