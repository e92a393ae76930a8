//! Dependency closure over the implicit role graph using BFS.
//!
//! The graph is never materialized: a role's out-edges are read from its
//! metadata only when the role is first popped from the work queue.
//!
//! Visiting is decided at pop time rather than at enqueue time. Duplicate
//! names may sit in the queue, but each role is processed at most once, so
//! cycles and diamond-shaped dependency graphs terminate.

use std::collections::{HashSet, VecDeque};
use std::path::Path;

use crate::error::RolesResult;
use crate::meta::{MetadataSource, RolesDir};

/// A discovered dependency edge: `from` declares `to` as a dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    pub from: String,
    pub to: String,
}

/// Result of a closure traversal.
#[derive(Debug, Clone, Default)]
pub struct ClosureTrace {
    /// Every role reachable from the seeds, seeds included.
    pub visited: HashSet<String>,
    /// Roles in the order they were processed.
    pub order: Vec<String>,
    /// Edges in discovery order.
    pub edges: Vec<DependencyEdge>,
}

/// Walks declared dependencies from `seeds`, recording visit order and edges.
///
/// Fails on the first role whose metadata cannot be read or parsed; the
/// error names that role and no partial trace is returned.
pub fn trace_closure<I, S>(seeds: I, source: &impl MetadataSource) -> RolesResult<ClosureTrace>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut trace = ClosureTrace::default();
    let mut queue: VecDeque<String> = seeds.into_iter().map(Into::into).collect();

    while let Some(role) = queue.pop_front() {
        // insert() returns false if the role was already visited
        if !trace.visited.insert(role.clone()) {
            continue;
        }

        let deps = source
            .dependencies_of(&role)
            .map_err(|e| e.for_role(role.as_str()))?;

        tracing::debug!(role = %role, dependencies = deps.len(), "visited role");

        for dep in deps {
            trace.edges.push(DependencyEdge {
                from: role.clone(),
                to: dep.clone(),
            });
            queue.push_back(dep);
        }
        trace.order.push(role);
    }

    Ok(trace)
}

/// Computes the set of roles reachable from `seeds` via declared dependencies.
pub fn closure_of<I, S>(seeds: I, source: &impl MetadataSource) -> RolesResult<HashSet<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    trace_closure(seeds, source).map(|trace| trace.visited)
}

/// Convenience wrapper reading metadata from the roles directory at `roles_path`.
pub fn closure_in<I, S>(seeds: I, roles_path: &Path) -> RolesResult<HashSet<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    closure_of(seeds, &RolesDir::new(roles_path))
}
