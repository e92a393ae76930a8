//! Unused-role resolution: playbook roles, their closure, and the inventory.

use std::path::Path;

use crate::closure::closure_of;
use crate::detect::find_unused;
use crate::error::{RolesResult, Stage};
use crate::inventory::list_roles;
use crate::meta::RolesDir;
use crate::playbook::roles_of;

/// Returns the roles under `roles_path` that `playbook_path` never reaches,
/// sorted ascending.
///
/// Stages run in a fixed order and the first failure stops the run:
/// 1. read the playbook's directly referenced roles
/// 2. compute their dependency closure
/// 3. list every role on disk
pub fn find_unused_roles(playbook_path: &Path, roles_path: &Path) -> RolesResult<Vec<String>> {
    let playbook_roles = roles_of(playbook_path).map_err(|e| e.at_stage(Stage::ReadingPlaybook))?;

    let reachable = closure_of(playbook_roles, &RolesDir::new(roles_path))
        .map_err(|e| e.at_stage(Stage::ComputingDependencies))?;

    let all_roles = list_roles(roles_path).map_err(|e| e.at_stage(Stage::ListingRoles))?;

    let unused = find_unused(&all_roles, &reachable);
    tracing::info!(
        total = all_roles.len(),
        reachable = reachable.len(),
        unused = unused.len(),
        "resolved unused roles"
    );
    Ok(unused)
}
