//! Output formatting - plaintext and JSON.
//!
//! Plain output is just the role names so it can be piped into other tools.

use serde_json::json;

use crate::builder::AnalysisResult;

/// Prints unused roles one per line; prints nothing when there are none.
pub fn print_plain(unused: &[String]) {
    print!("{}", render_plain(unused));
}

/// Renders unused roles one per line.
pub fn render_plain(unused: &[String]) -> String {
    unused.iter().map(|role| format!("{}\n", role)).collect()
}

/// Builds the JSON report for an analysis.
pub fn render_json(result: &AnalysisResult) -> serde_json::Value {
    json!({
        "playbook": result.playbook.display().to_string(),
        "roles_path": result.roles_path.display().to_string(),
        "playbook_roles": result.playbook_roles,
        "total": result.total_roles,
        "reachable": result.reachable.len(),
        "unused": result.unused,
        "unused_percentage": result.unused_percentage(),
        "ignored": result.ignored,
    })
}

/// Prints the analysis in JSON format.
///
/// Falls back to a simple format if serialization fails (it cannot for
/// string arrays, but the report is never allowed to panic).
pub fn print_json(result: &AnalysisResult) {
    match serde_json::to_string_pretty(&render_json(result)) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::warn!(error = %e, "JSON serialization failed");
            println!("{{\"unused\": {:?}}}", result.unused);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_render_plain() {
        let unused = vec!["a".to_string(), "b".to_string()];
        assert_eq!(render_plain(&unused), "a\nb\n");
        assert_eq!(render_plain(&[]), "");
    }

    #[test]
    fn test_render_json() {
        let result = AnalysisResult {
            playbook: PathBuf::from("site.yml"),
            roles_path: PathBuf::from("roles"),
            playbook_roles: vec!["web".into()],
            total_roles: 3,
            reachable: vec!["db".into(), "web".into()],
            unused: vec!["monitoring".into()],
            ignored: Vec::new(),
            edges: Vec::new(),
        };

        let value = render_json(&result);
        assert_eq!(value["total"].as_u64(), Some(3));
        assert_eq!(value["reachable"].as_u64(), Some(2));
        assert_eq!(value["unused"][0], "monitoring");
        assert!(value["ignored"].as_array().unwrap().is_empty());
        assert_eq!(value["playbook_roles"], json!(["web"]));
        let pct = value["unused_percentage"].as_f64().unwrap();
        assert!((pct - 100.0 / 3.0).abs() < 0.01);
    }
}
