//! Playbook role extraction.

use std::path::Path;

use serde::Deserialize;

use crate::error::RolesResult;
use crate::parse::read_yaml;

/// A single play; only its `roles` list matters here.
#[derive(Debug, Default, Deserialize)]
pub struct Play {
    #[serde(default)]
    pub roles: Option<Vec<String>>,
}

/// Returns every role referenced by the plays of `playbook_path`, in document order.
///
/// Duplicates are kept; the closure engine deduplicates them.
pub fn roles_of(playbook_path: &Path) -> RolesResult<Vec<String>> {
    let plays: Vec<Play> = read_yaml(playbook_path)?;

    let roles: Vec<String> = plays
        .into_iter()
        .flat_map(|play| play.roles.unwrap_or_default())
        .collect();

    tracing::debug!(
        playbook = %playbook_path.display(),
        count = roles.len(),
        "extracted playbook roles"
    );
    Ok(roles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RolesError;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn write_playbook(name: &str, content: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir()
            .join("deadrole_playbook_test")
            .join(format!("{}_{}_{}", name, std::process::id(), id));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("site.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_roles_concatenated_in_document_order() {
        let path = write_playbook(
            "order",
            r#"
- hosts: web
  become: true
  roles:
    - nginx
    - app
- hosts: db
  roles:
    - postgres
    - app
"#,
        );

        assert_eq!(roles_of(&path).unwrap(), vec!["nginx", "app", "postgres", "app"]);
    }

    #[test]
    fn test_plays_without_roles() {
        let path = write_playbook(
            "no_roles",
            "- hosts: all\n  tasks:\n    - ping:\n- hosts: db\n  roles:\n",
        );

        assert!(roles_of(&path).unwrap().is_empty());
    }

    #[test]
    fn test_empty_playbook() {
        let path = write_playbook("empty", "");
        assert!(roles_of(&path).unwrap().is_empty());

        let path = write_playbook("empty_list", "[]\n");
        assert!(roles_of(&path).unwrap().is_empty());
    }

    #[test]
    fn test_mapping_is_parse_error() {
        let path = write_playbook("mapping", "hosts: all\nroles:\n  - web\n");

        let err = roles_of(&path).unwrap_err();
        assert!(matches!(err, RolesError::Parse { .. }));
    }

    #[test]
    fn test_missing_playbook_is_read_error() {
        let err = roles_of(Path::new("/no/such/site.yml")).unwrap_err();
        assert!(matches!(err, RolesError::Read { .. }));
    }
}
