//! Role metadata reading (`<roles>/<role>/meta/main.yml`).
//!
//! A role without a metadata file simply has no dependencies. Any other
//! failure to read or decode the file is an error for that role.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{RolesError, RolesResult};
use crate::parse::parse_yaml;

/// Location of the metadata file relative to a role directory.
pub const META_FILE: &[&str] = &["meta", "main.yml"];

/// Decoded shape of a role's `meta/main.yml`.
#[derive(Debug, Default, Deserialize)]
pub struct RoleMeta {
    /// Declared dependencies; `dependencies:` with no value is allowed.
    #[serde(default)]
    pub dependencies: Option<Vec<DependencyEntry>>,
}

/// One entry of the `dependencies` list.
#[derive(Debug, Default, Deserialize)]
pub struct DependencyEntry {
    pub role: Option<String>,
}

impl RoleMeta {
    /// Dependency role names in declaration order.
    pub fn role_names(self) -> Vec<String> {
        self.dependencies
            .unwrap_or_default()
            .into_iter()
            .filter_map(|dep| dep.role)
            .collect()
    }
}

/// Source of per-role dependency lists.
///
/// The closure engine discovers the dependency graph one role at a time
/// through this trait; it never needs the whole graph up front.
pub trait MetadataSource {
    /// Returns the roles `role` declares as dependencies, in declared order.
    fn dependencies_of(&self, role: &str) -> RolesResult<Vec<String>>;
}

/// Filesystem-backed metadata source rooted at a roles directory.
#[derive(Debug, Clone)]
pub struct RolesDir {
    root: PathBuf,
}

impl RolesDir {
    /// Creates a metadata source reading roles under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Roles directory this source reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the metadata file for `role`.
    pub fn meta_path(&self, role: &str) -> PathBuf {
        META_FILE
            .iter()
            .fold(self.root.join(role), |path, part| path.join(part))
    }
}

impl MetadataSource for RolesDir {
    fn dependencies_of(&self, role: &str) -> RolesResult<Vec<String>> {
        dependencies_of(role, &self.root)
    }
}

/// Reads the dependency role names declared by `role` under `roles_path`.
///
/// Returns an empty list when the role has no metadata file.
pub fn dependencies_of(role: &str, roles_path: &Path) -> RolesResult<Vec<String>> {
    let meta_path = RolesDir::new(roles_path).meta_path(role);

    let content = match std::fs::read_to_string(&meta_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(RolesError::read(meta_path, e)),
    };

    let meta: RoleMeta = parse_yaml(&meta_path, &content)?;
    Ok(meta.role_names())
}
