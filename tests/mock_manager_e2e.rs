//! End-to-end runs against fake manager executables on a private PATH.
#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn uni() -> Command {
    Command::new(env!("CARGO_BIN_EXE_uni"))
}

struct TestEnv {
    _tmp: TempDir,
    project_dir: PathBuf,
    mock_bin_dir: PathBuf,
    log_dir: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = tmp.path().to_path_buf();

        let project_dir = root.join("project");
        let mock_bin_dir = root.join("bin");
        let log_dir = root.join("logs");

        fs::create_dir_all(&project_dir).expect("mkdir project");
        fs::create_dir_all(&mock_bin_dir).expect("mkdir bin dir");
        fs::create_dir_all(&log_dir).expect("mkdir logs");

        Self {
            _tmp: tmp,
            project_dir,
            mock_bin_dir,
            log_dir,
        }
    }

    fn touch(&self, name: &str) {
        fs::write(self.project_dir.join(name), "").expect("write project file");
    }

    /// Fake executable recording its arguments as `arg|arg|` and exiting with `code`.
    fn mock(&self, name: &str, code: i32) {
        let log = self.log_dir.join(format!("{}.log", name));
        let script = format!(
            "#!/bin/sh\nprintf '%s|' \"$@\" > '{}'\nexit {}\n",
            log.display(),
            code
        );
        let path = self.mock_bin_dir.join(name);
        fs::write(&path, script).expect("write mock binary");

        let mut perms = fs::metadata(&path).expect("metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod");
    }

    /// Fake executable with a hand-written shell body.
    fn script(&self, name: &str, body: &str) {
        let path = self.mock_bin_dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write mock script");

        let mut perms = fs::metadata(&path).expect("metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod");
    }

    fn received(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.log_dir.join(format!("{}.log", name))).ok()
    }

    fn cmd(&self) -> Command {
        let mut cmd = uni();
        cmd.current_dir(&self.project_dir)
            .env("PATH", &self.mock_bin_dir)
            .env("NO_COLOR", "1")
            .env_remove("UNI_COLOR")
            .env_remove("UNI_NPM_REGISTRY")
            .env_remove("UNI_COCOAPODS_SEARCH");
        cmd
    }
}

#[test]
fn e2e_pnpm_lock_install_uses_add() {
    let env = TestEnv::new();
    env.touch("pnpm-lock.yaml");
    env.mock("pnpm", 0);

    env.cmd()
        .args(["install", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 'pnpm-lock.yaml' lock file, using PNPM."))
        .stderr(predicate::str::contains("+ pnpm add foo"));

    assert_eq!(env.received("pnpm").as_deref(), Some("add|foo|"));
}

#[test]
fn e2e_bare_install_uses_install_all_verb() {
    let env = TestEnv::new();
    env.touch("yarn.lock");
    env.mock("yarn", 0);

    env.cmd().arg("i").assert().success();

    assert_eq!(env.received("yarn").as_deref(), Some("install|"));
}

#[test]
fn e2e_system_manager_install_is_unmodified() {
    let env = TestEnv::new();
    env.mock("brew", 0);

    env.cmd()
        .args(["add", "wget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("falling back to system package manager"));

    assert_eq!(env.received("brew").as_deref(), Some("install|wget|"));
}

#[test]
fn e2e_fallback_manager_without_brew() {
    let env = TestEnv::new();
    env.mock("pkgx", 0);

    env.cmd().args(["install", "node"]).assert().success();

    assert_eq!(env.received("pkgx").as_deref(), Some("install|node|"));
}

#[test]
fn e2e_marker_beats_lock_file() {
    let env = TestEnv::new();
    env.touch("pnpm-lock.yaml");
    fs::write(env.project_dir.join(".unirc"), "yarn\n").unwrap();
    env.mock("pnpm", 0);
    env.mock("yarn", 0);

    env.cmd()
        .args(["remove", "lodash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found '.unirc' config file, using Yarn."));

    assert_eq!(env.received("yarn").as_deref(), Some("remove|lodash|"));
    assert!(env.received("pnpm").is_none());
}

#[test]
fn e2e_override_beats_marker() {
    let env = TestEnv::new();
    fs::write(env.project_dir.join(".unirc"), "yarn").unwrap();
    env.mock("bun", 0);

    env.cmd()
        .args(["--pkg=bun", "add", "zod"])
        .assert()
        .success();

    assert_eq!(env.received("bun").as_deref(), Some("add|zod|"));
}

#[test]
fn e2e_uninstall_unsupported_spawns_nothing() {
    let env = TestEnv::new();
    env.touch("Podfile");
    env.mock("pod", 0);

    env.cmd()
        .args(["uninstall", "Alamofire"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "CocoaPods does not have a standard uninstall command",
        ));

    assert!(env.received("pod").is_none());
}

#[test]
fn e2e_missing_executable_shows_hint() {
    let env = TestEnv::new();
    env.touch("pnpm-lock.yaml");

    env.cmd()
        .args(["install", "foo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("PNPM (pnpm) is not installed"))
        .stderr(predicate::str::contains("Run: npm install -g pnpm"));
}

#[test]
fn e2e_child_exit_code_is_mirrored() {
    let env = TestEnv::new();
    env.touch("package-lock.json");
    env.mock("npm", 4);

    env.cmd().args(["run", "test"]).assert().code(4);

    assert_eq!(env.received("npm").as_deref(), Some("run|test|"));
}

#[test]
fn e2e_passthrough_keeps_unknown_verbs() {
    let env = TestEnv::new();
    env.touch("go.mod");
    env.mock("go", 0);

    env.cmd()
        .args(["mod", "tidy", "-v"])
        .assert()
        .success();

    assert_eq!(env.received("go").as_deref(), Some("mod|tidy|-v|"));
}

#[test]
fn e2e_exec_joined_for_pnpm() {
    let env = TestEnv::new();
    env.touch("pnpm-lock.yaml");
    env.mock("pnpm", 0);

    env.cmd()
        .args(["x", "cowsay", "hi"])
        .assert()
        .success();

    assert_eq!(env.received("pnpm").as_deref(), Some("dlx cowsay hi|"));
}

#[test]
fn e2e_exec_standalone_for_npm() {
    let env = TestEnv::new();
    env.touch("package-lock.json");
    env.mock("npx", 0);

    env.cmd()
        .args(["exec", "cowsay", "hi"])
        .assert()
        .success();

    assert_eq!(env.received("npx").as_deref(), Some("cowsay|hi|"));
}

#[test]
fn e2e_init_writes_marker_and_runs_init() {
    let env = TestEnv::new();
    env.mock("npm", 0);

    env.cmd()
        .args(["init", "npm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created '.unirc' to use NPM"));

    let marker = fs::read_to_string(env.project_dir.join(".unirc")).unwrap();
    assert_eq!(marker.trim(), "npm");
    assert_eq!(env.received("npm").as_deref(), Some("init|-y|"));
}

#[test]
fn e2e_search_without_api_uses_native_command() {
    let env = TestEnv::new();
    env.touch("requirements.txt");
    env.mock("pip", 0);

    env.cmd()
        .args(["search", "requests"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Pip does not support API search. Falling back to CLI.",
        ));

    assert_eq!(env.received("pip").as_deref(), Some("search|requests|"));
}

#[test]
fn e2e_search_network_failure_is_a_warning() {
    let env = TestEnv::new();
    env.touch("package-lock.json");

    env.cmd()
        .env("UNI_NPM_REGISTRY", "http://127.0.0.1:9")
        .env("UNI_HTTP_TIMEOUT", "2")
        .args(["s", "left-pad"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Search failed"));
}

#[test]
fn e2e_which_reports_source() {
    let env = TestEnv::new();
    env.touch("bun.lockb");
    env.mock("bun", 0);

    env.cmd()
        .arg("which")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bun (bun)"))
        .stdout(predicate::str::contains("lock file 'bun.lockb'"));
}

#[test]
fn e2e_flags_after_verb_reach_the_manager() {
    let env = TestEnv::new();
    env.touch("requirements.txt");
    env.mock("pip", 0);

    env.cmd().args(["install", "-q", "requests"]).assert().success();

    assert_eq!(env.received("pip").as_deref(), Some("install|-q|requests|"));
}

#[test]
fn e2e_help_verb_is_passed_through() {
    let env = TestEnv::new();
    env.touch("package-lock.json");
    env.mock("npm", 0);

    env.cmd().args(["help", "install"]).assert().success();

    assert_eq!(env.received("npm").as_deref(), Some("help|install|"));
}

#[test]
fn e2e_homebrew_search_shares_one_deadline() {
    let env = TestEnv::new();
    env.script(
        "brew",
        "if [ \"$1\" = search ]; then printf 'a\\nb\\nc\\nd\\ne\\nf\\n'; exit 0; fi\nexec /bin/sleep 5",
    );

    let started = Instant::now();
    env.cmd()
        .env("UNI_HTTP_TIMEOUT", "1")
        .args(["search", "slow"])
        .assert()
        .success()
        .stderr(predicate::str::contains("partial results"));

    assert!(
        started.elapsed() < Duration::from_secs(4),
        "search took {:?}",
        started.elapsed()
    );
}
