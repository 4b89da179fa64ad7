use crate::services::utils::{get_project_root, run_in_root};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const WEB_PACKAGE: &str = "folio-web";

/// Serves the web app through `dx serve`, rebuilding on change.
///
/// # Errors
/// Returns an error if `dx` is missing or exits unsuccessfully.
pub fn serve(release: bool, port: u16) -> Result<()> {
    println!("🚀 Serving {WEB_PACKAGE} on http://localhost:{port} ...");

    let port = port.to_string();
    let mut args = vec!["serve", "--package", WEB_PACKAGE, "--platform", "web", "--port", port.as_str()];
    if release {
        args.push("--release");
    }

    run_in_root("dx", &args)
}

/// Builds the release bundle through `dx bundle`, optionally copying it to `out_dir`.
///
/// # Errors
/// Returns an error if the bundle build fails or the output cannot be copied.
pub fn bundle(out_dir: Option<&str>) -> Result<()> {
    println!("📦 Bundling {WEB_PACKAGE}...");
    run_in_root("dx", &["bundle", "--package", WEB_PACKAGE, "--platform", "web", "--release"])?;

    let Some(out_dir) = out_dir else {
        println!("✅ Bundle ready in 'target/dx/{WEB_PACKAGE}/release/web/public'.");
        return Ok(());
    };

    let root = get_project_root()?;
    let public = root.join("target/dx").join(WEB_PACKAGE).join("release/web/public");
    copy_dir(&public, Path::new(out_dir))
        .with_context(|| format!("Failed to copy the bundle to '{out_dir}'"))?;

    println!("✅ Bundle copied to '{out_dir}'.");
    Ok(())
}

fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), target)?;
        }
    }
    Ok(())
}
