//! Subprocess execution
//!
//! Interactive runs inherit all three standard streams; captured runs are
//! bounded by a deadline and never read stdin.

use crate::core::types::{Invocation, ManagerProfile};
use crate::error::{Result, UniError};
use crate::traits::ExecutableFinder;
use crate::ui;
use std::io::Read;
use std::process::{Command, ExitStatus, Output, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Fail with the manager's install hint unless `invocation.program` is on PATH.
pub fn ensure_executable(
    profile: &ManagerProfile,
    invocation: &Invocation,
    finder: &dyn ExecutableFinder,
) -> Result<()> {
    match finder.find(&invocation.program) {
        Some(path) => {
            ui::verbose(&format!("{} -> {}", invocation.program, path.display()));
            Ok(())
        }
        None => Err(UniError::ExecutableNotFound {
            manager: profile.display_name.to_string(),
            executable: invocation.program.clone(),
            hint: profile.install_hint.to_string(),
        }),
    }
}

/// Verify, echo, then run `invocation` with inherited stdio.
pub fn run_for_profile(
    profile: &ManagerProfile,
    invocation: &Invocation,
    finder: &dyn ExecutableFinder,
) -> Result<()> {
    ensure_executable(profile, invocation, finder)?;
    ui::command_echo(&invocation.command_line());
    run_inherited(invocation)
}

/// Run with inherited stdin/stdout/stderr and mirror a non-zero exit.
pub fn run_inherited(invocation: &Invocation) -> Result<()> {
    let status = Command::new(&invocation.program)
        .args(&invocation.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| UniError::SystemCommandFailed {
            command: invocation.command_line(),
            reason: e.to_string(),
        })?;

    check_status(invocation, status)
}

fn check_status(invocation: &Invocation, status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    Err(UniError::ChildFailed {
        command: invocation.command_line(),
        // Killed by a signal: no code to mirror.
        code: status.code().unwrap_or(1),
    })
}

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Run with stdout and stderr captured, killing the child once `deadline` passes.
///
/// Several captured runs can share one deadline so that a whole multi-step
/// query stays within a single wait.
pub fn run_captured(invocation: &Invocation, deadline: Instant) -> Result<Output> {
    let failed = |reason: String| UniError::SystemCommandFailed {
        command: invocation.command_line(),
        reason,
    };

    let mut child = Command::new(&invocation.program)
        .args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| failed(e.to_string()))?;

    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = loop {
        if let Some(status) = child.try_wait().map_err(|e| failed(e.to_string()))? {
            break status;
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            // Readers are left detached: a grandchild may still hold the pipes.
            return Err(failed("timed out waiting for output".to_string()));
        }
        thread::sleep(POLL_INTERVAL);
    };

    Ok(Output {
        status,
        stdout: stdout.join().unwrap_or_default(),
        stderr: stderr.join().unwrap_or_default(),
    })
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

#[cfg(test)]
mod tests;
