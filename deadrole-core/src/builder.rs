//! Builder pattern API for deadrole analysis.
//!
//! Provides a fluent interface for configuring and running the analysis
//! while keeping the intermediate results around for reporting:
//!
//! ```rust,ignore
//! use deadrole_core::prelude::*;
//!
//! let result = Deadrole::new("site.yml", "roles")
//!     .ignore_patterns(["common", "legacy_*"])
//!     .analyze()?;
//!
//! println!("Unused roles: {:?}", result.unused);
//! ```

use std::path::PathBuf;

use crate::closure::{trace_closure, DependencyEdge};
use crate::detect::find_unused;
use crate::error::{RolesResult, Stage};
use crate::inventory::list_roles;
use crate::meta::RolesDir;
use crate::playbook::roles_of;

/// Builder for configuring unused-role analysis.
#[derive(Debug, Clone)]
pub struct Deadrole {
    /// Playbook whose roles seed the traversal
    playbook: PathBuf,

    /// Directory holding one subdirectory per role
    roles: PathBuf,

    /// Role name patterns never reported as unused
    ignored_patterns: Vec<String>,
}

impl Deadrole {
    /// Create a new analysis builder for a playbook and roles directory.
    pub fn new(playbook: impl Into<PathBuf>, roles: impl Into<PathBuf>) -> Self {
        Self {
            playbook: playbook.into(),
            roles: roles.into(),
            ignored_patterns: Vec::new(),
        }
    }

    /// Add patterns for roles to ignore.
    ///
    /// A pattern is an exact role name, a prefix ending in `*`, or a suffix
    /// starting with `*`.
    pub fn ignore_patterns(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ignored_patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Run the analysis and return results.
    pub fn analyze(&self) -> RolesResult<AnalysisResult> {
        // 1. Roles referenced directly by the playbook
        let playbook_roles =
            roles_of(&self.playbook).map_err(|e| e.at_stage(Stage::ReadingPlaybook))?;

        // 2. Transitive closure over declared dependencies
        let source = RolesDir::new(&self.roles);
        let trace = trace_closure(playbook_roles.iter().cloned(), &source)
            .map_err(|e| e.at_stage(Stage::ComputingDependencies))?;

        // 3. Everything on disk
        let all_roles = list_roles(source.root()).map_err(|e| e.at_stage(Stage::ListingRoles))?;

        // 4. Difference, then split out ignored roles
        let (ignored, unused): (Vec<String>, Vec<String>) = find_unused(&all_roles, &trace.visited)
            .into_iter()
            .partition(|role| self.is_ignored(role));

        let mut reachable: Vec<String> = trace.visited.into_iter().collect();
        reachable.sort();

        tracing::info!(
            playbook = %self.playbook.display(),
            total = all_roles.len(),
            reachable = reachable.len(),
            unused = unused.len(),
            ignored = ignored.len(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            playbook: self.playbook.clone(),
            roles_path: self.roles.clone(),
            playbook_roles,
            total_roles: all_roles.len(),
            reachable,
            unused,
            ignored,
            edges: trace.edges,
        })
    }

    /// Check if a role name matches any ignored pattern.
    fn is_ignored(&self, name: &str) -> bool {
        self.ignored_patterns.iter().any(|pattern| {
            if let Some(prefix) = pattern.strip_suffix('*') {
                name.starts_with(prefix)
            } else if let Some(suffix) = pattern.strip_prefix('*') {
                name.ends_with(suffix)
            } else {
                name == pattern
            }
        })
    }
}

/// Result of running unused-role analysis.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Playbook that was analyzed
    pub playbook: PathBuf,

    /// Roles directory that was listed
    pub roles_path: PathBuf,

    /// Roles referenced directly by the playbook, in document order
    pub playbook_roles: Vec<String>,

    /// Number of roles present on disk
    pub total_roles: usize,

    /// Roles reachable from the playbook, sorted (may include roles not on disk)
    pub reachable: Vec<String>,

    /// Unused roles, sorted
    pub unused: Vec<String>,

    /// Unused roles suppressed by an ignore pattern, sorted
    pub ignored: Vec<String>,

    /// Dependency edges discovered during traversal
    pub edges: Vec<DependencyEdge>,
}

impl AnalysisResult {
    /// Get percentage of roles on disk that are unused.
    pub fn unused_percentage(&self) -> f64 {
        if self.total_roles == 0 {
            0.0
        } else {
            (self.unused.len() as f64 / self.total_roles as f64) * 100.0
        }
    }
}
