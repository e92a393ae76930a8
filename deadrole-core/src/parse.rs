//! YAML document loading shared by the playbook and metadata readers.
//!
//! Both readers accept documents that carry no data at all (an empty file, a
//! lone `---` marker, only comments, or an explicit `null`) and treat them
//! as the default value of the expected shape.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{IoResultExt, RolesError, RolesResult};

/// Reads `path` fully and deserializes it as `T`.
///
/// The file handle is released before parsing starts.
pub fn read_yaml<T>(path: &Path) -> RolesResult<T>
where
    T: DeserializeOwned + Default,
{
    let content = fs::read_to_string(path).with_path(path)?;
    parse_yaml(path, &content)
}

/// Deserializes `content` as `T`, attributing failures to `path`.
pub fn parse_yaml<T>(path: &Path, content: &str) -> RolesResult<T>
where
    T: DeserializeOwned + Default,
{
    if is_blank_document(content) {
        return Ok(T::default());
    }

    serde_yaml::from_str::<Option<T>>(content)
        .map(Option::unwrap_or_default)
        .map_err(|e| RolesError::parse(path, e.to_string()))
}

/// True if the document has no content besides markers, comments and whitespace.
fn is_blank_document(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}
