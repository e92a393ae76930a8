//! Graphviz DOT visualization for the role dependency graph.
//!
//! Only the part of the graph discovered during traversal has edges; unused
//! roles appear as isolated nodes.

use std::fmt::Write;

use crate::builder::AnalysisResult;

/// Generate a Graphviz DOT representation of an analysis.
///
/// - reachable roles are lightgreen
/// - unused roles are lightcoral
/// - ignored roles are lightgray
/// - edges are declared dependencies, in discovery order
///
/// Nodes are emitted in sorted order so the output is stable between runs.
pub fn generate_dot(result: &AnalysisResult) -> String {
    let node_count = result.reachable.len() + result.unused.len() + result.ignored.len();
    let estimated_capacity = (node_count * 60) + (result.edges.len() * 40) + 150;

    let mut dot = String::with_capacity(estimated_capacity);

    if let Err(e) = write_dot_content(&mut dot, result) {
        tracing::warn!(error = %e, "failed to generate DOT string");
        return "digraph deadrole {\n}\n".to_string();
    }

    dot
}

fn write_dot_content(dot: &mut String, result: &AnalysisResult) -> std::fmt::Result {
    writeln!(dot, "digraph deadrole {{")?;
    writeln!(dot, "  rankdir=LR;")?;
    writeln!(
        dot,
        "  node [shape=box, style=filled, fontname=\"JetBrains Mono\"];"
    )?;
    writeln!(dot)?;

    for role in &result.reachable {
        writeln!(dot, "  {} [fillcolor=lightgreen];", quote(role))?;
    }
    for role in &result.unused {
        writeln!(dot, "  {} [fillcolor=lightcoral];", quote(role))?;
    }
    for role in &result.ignored {
        writeln!(dot, "  {} [fillcolor=lightgray];", quote(role))?;
    }

    writeln!(dot)?;

    for edge in &result.edges {
        writeln!(dot, "  {} -> {};", quote(&edge.from), quote(&edge.to))?;
    }

    writeln!(dot, "}}")?;
    Ok(())
}

/// Quote a role name as a DOT identifier.
fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}
