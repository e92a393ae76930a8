//! Role inventory: every immediate subdirectory of the roles directory.
//!
//! Plain files next to the role directories (READMEs, requirements files)
//! are not roles and are skipped silently.

use std::fs;
use std::path::Path;

use crate::error::{IoResultExt, RolesResult};

/// Lists the role names present under `roles_path`.
///
/// Order follows the filesystem listing and is not meaningful.
pub fn list_roles(roles_path: &Path) -> RolesResult<Vec<String>> {
    let mut roles = Vec::new();

    for entry in fs::read_dir(roles_path).with_path(roles_path)? {
        let entry = entry.with_path(roles_path)?;
        let file_type = entry.file_type().with_path(entry.path())?;

        if file_type.is_dir() {
            roles.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    tracing::debug!(
        roles_path = %roles_path.display(),
        count = roles.len(),
        "listed role inventory"
    );
    Ok(roles)
}
