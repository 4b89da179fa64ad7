use crate::services::utils::{normalize_project_name, run_in_root};
use anyhow::Result;

const NEXTEST_OUTPUT: &[&str] =
    &["--failure-output", "immediate-final", "--success-output", "never", "--status-level", "skip"];

/// Which crates a test run covers. `None` and `"all"` both mean the whole workspace.
fn scope(project: Option<&str>) -> Vec<String> {
    match project.filter(|name| *name != "all") {
        Some(name) => vec!["-p".into(), normalize_project_name(name)],
        None => vec!["--workspace".into()],
    }
}

/// Cargo arguments for the unit and integration test run.
fn test_args(project: Option<&str>, nextest: bool) -> Vec<String> {
    let mut args: Vec<String> = if nextest {
        vec!["nextest".into(), "run".into()]
    } else {
        vec!["test".into()]
    };
    args.extend(scope(project));
    args.push("--all-features".into());

    let tail: &[&str] =
        if nextest { NEXTEST_OUTPUT } else { &["--tests", "--lib", "--bins", "--", "-q"] };
    args.extend(tail.iter().map(|arg| (*arg).to_owned()));
    args
}

fn doctest_args(project: Option<&str>) -> Vec<String> {
    let mut args = vec!["test".into(), "--doc".into()];
    args.extend(scope(project));
    args.push("--all-features".into());
    args
}

fn cargo(args: &[String]) -> Result<()> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    run_in_root("cargo", &args)
}

fn has_nextest() -> bool {
    std::process::Command::new("cargo-nextest").arg("--version").output().is_ok()
}

/// Runs tests in the workspace or a single crate, through nextest when installed.
///
/// # Errors
/// Returns an error if cargo cannot be started or a test fails.
pub fn run_tests(project: Option<&str>) -> Result<()> {
    let nextest = has_nextest();
    println!("🧪 Running tests via '{}'...", if nextest { "nextest" } else { "cargo test" });
    cargo(&test_args(project, nextest))
}

/// Runs doc tests in the workspace or a single crate.
///
/// # Errors
/// Returns an error if cargo cannot be started or a doc test fails.
pub fn run_doctests(project: Option<&str>) -> Result<()> {
    println!("📚 Running doc tests...");
    cargo(&doctest_args(project))
}
