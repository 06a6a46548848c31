//! Startup prerequisite checks
//!
//! The model artifacts are external files; verify they exist before binding
//! the listener so a misconfigured deployment fails immediately.

use anyhow::{bail, Result};
use std::path::Path;
use tracing::error;

/// Verify the model artifacts exist
///
/// Reports every missing file, not just the first.
pub fn check_prerequisites(config_path: &Path, weights_path: &Path) -> Result<()> {
    let required = [config_path, weights_path];

    let missing: Vec<&Path> = required.iter().copied().filter(|p| !p.exists()).collect();

    if !missing.is_empty() {
        error!("Missing required files:");
        for path in &missing {
            error!("  - {}", path.display());
        }
        bail!("Prerequisites not met");
    }

    Ok(())
}
