use super::*;
use crate::core::registry::lookup;
use std::path::PathBuf;

struct NothingOnPath;

impl ExecutableFinder for NothingOnPath {
    fn find(&self, _name: &str) -> Option<PathBuf> {
        None
    }
}

#[test]
fn missing_executable_reports_install_hint() {
    let profile = lookup("pnpm").unwrap();
    let inv = Invocation::new("pnpm", vec!["add".into(), "foo".into()]);
    let err = run_for_profile(profile, &inv, &NothingOnPath).unwrap_err();
    match err {
        UniError::ExecutableNotFound {
            manager,
            executable,
            hint,
        } => {
            assert_eq!(manager, "PNPM");
            assert_eq!(executable, "pnpm");
            assert_eq!(hint, "Run: npm install -g pnpm");
        }
        other => panic!("expected ExecutableNotFound, got {:?}", other),
    }
}

#[test]
fn spawn_failure_is_system_command_error() {
    let inv = Invocation::new("uni-test-no-such-binary", Vec::new());
    let err = run_inherited(&inv).unwrap_err();
    assert!(matches!(err, UniError::SystemCommandFailed { .. }));
}

#[cfg(unix)]
#[test]
fn child_exit_code_is_mirrored() {
    let inv = Invocation::new("sh", vec!["-c".into(), "exit 3".into()]);
    match run_inherited(&inv).unwrap_err() {
        UniError::ChildFailed { code, .. } => assert_eq!(code, 3),
        other => panic!("expected ChildFailed, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn captured_run_collects_stdout() {
    let inv = Invocation::new("sh", vec!["-c".into(), "echo hello".into()]);
    let output = run_captured(&inv, Instant::now() + Duration::from_secs(5)).unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
}

#[cfg(unix)]
#[test]
fn captured_run_times_out() {
    let inv = Invocation::new("sh", vec!["-c".into(), "sleep 5".into()]);
    let err = run_captured(&inv, Instant::now() + Duration::from_millis(200)).unwrap_err();
    match err {
        UniError::SystemCommandFailed { reason, .. } => assert!(reason.contains("timed out")),
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn captured_run_with_expired_deadline_stops_promptly() {
    let inv = Invocation::new("sh", vec!["-c".into(), "exec sleep 5".into()]);
    let started = Instant::now();
    let err = run_captured(&inv, started).unwrap_err();
    assert!(matches!(err, UniError::SystemCommandFailed { .. }));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[cfg(unix)]
#[test]
fn captured_run_collects_stderr_separately() {
    let inv = Invocation::new("sh", vec!["-c".into(), "echo out; echo err >&2; exit 2".into()]);
    let output = run_captured(&inv, Instant::now() + Duration::from_secs(5)).unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "out");
    assert_eq!(String::from_utf8_lossy(&output.stderr).trim(), "err");
}
