use anyhow::{Context, Result};
use std::process::Command;

/// Tools required for development
const REQUIRED_TOOLS: &[(&str, &str)] = &[("dx", "dioxus-cli"), ("cargo-nextest", "cargo-nextest")];

/// Targets required for WASM development
const REQUIRED_TARGETS: &[&str] = &["wasm32-unknown-unknown"];

/// Set up the development environment for Folio.
///
/// # Errors
/// Returns an error if tool installation fails or required targets cannot be added.
pub fn setup_project() -> Result<()> {
    println!("🛠️  Starting Folio development setup...");

    for (bin, package) in REQUIRED_TOOLS {
        if is_tool_installed(bin) {
            println!("✅ {bin} is already installed. Trying update...");
        } else {
            println!("📥 Installing {package}...");
        }
        run_command("cargo", &["install", package, "--locked"])?;
    }

    let installed_targets_output = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
        .with_context(|| "Failed to list installed rustup targets")?;

    let installed_targets = String::from_utf8_lossy(&installed_targets_output.stdout);

    for target in REQUIRED_TARGETS {
        if installed_targets.contains(target) {
            println!("✅ Target {target} is already installed.");
            continue;
        }

        println!("🦀 Adding rustup target: {target}...");
        run_command("rustup", &["target", "add", target])?;
    }

    println!("\n✨ Setup complete! Run 'cargo xtask serve' to start the site.");
    Ok(())
}

fn is_tool_installed(tool: &str) -> bool {
    Command::new(tool)
        .arg("--version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

fn run_command(cmd: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(cmd)
        .args(args)
        .status()
        .with_context(|| format!("Failed to execute {cmd}"))?;

    if !status.success() {
        anyhow::bail!("Command '{cmd} {args:?}' failed with status {status}");
    }
    Ok(())
}
