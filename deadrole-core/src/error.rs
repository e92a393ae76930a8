//! Typed error handling for deadrole.
//!
//! Every failure carries enough context to be rendered as a single line:
//! the stage of the pipeline, the role being processed (if any), and the
//! path of the file that could not be read or parsed.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline stage in which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Extracting the directly referenced roles from the playbook.
    ReadingPlaybook,
    /// Walking declared role dependencies.
    ComputingDependencies,
    /// Listing the roles directory.
    ListingRoles,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::ReadingPlaybook => "error reading playbook",
            Stage::ComputingDependencies => "error getting dependencies",
            Stage::ListingRoles => "error getting all roles",
        };
        f.write_str(label)
    }
}

/// Main error type for deadrole operations.
#[derive(Error, Debug)]
pub enum RolesError {
    /// A file or directory could not be opened, read or listed.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document did not have the expected YAML shape.
    #[error("parse error in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// A failure attributed to a specific role during dependency traversal.
    #[error("role '{role}': {source}")]
    Role {
        role: String,
        #[source]
        source: Box<RolesError>,
    },

    /// A failure wrapped with the pipeline stage that produced it.
    #[error("{stage}: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<RolesError>,
    },
}

impl RolesError {
    /// Create a read error with path context.
    pub fn read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source: err,
        }
    }

    /// Create a parse error with path context.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Attribute this error to a role.
    pub fn for_role(self, role: impl Into<String>) -> Self {
        Self::Role {
            role: role.into(),
            source: Box::new(self),
        }
    }

    /// Wrap this error with the stage that produced it.
    pub fn at_stage(self, stage: Stage) -> Self {
        Self::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// Outermost stage label, if the error has been wrapped with one.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Name of the role that triggered the failure, searching through wrappers.
    pub fn role(&self) -> Option<&str> {
        match self {
            Self::Role { role, .. } => Some(role),
            Self::Stage { source, .. } => source.role(),
            _ => None,
        }
    }

    /// Path of the underlying file, searching through wrappers.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => Some(path),
            Self::Role { source, .. } | Self::Stage { source, .. } => source.path(),
        }
    }

    /// True if the root cause is a parse failure rather than an I/O failure.
    pub fn is_parse(&self) -> bool {
        match self {
            Self::Parse { .. } => true,
            Self::Read { .. } => false,
            Self::Role { source, .. } | Self::Stage { source, .. } => source.is_parse(),
        }
    }
}

/// Convenience type alias for deadrole results.
pub type RolesResult<T> = Result<T, RolesError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> RolesResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> RolesResult<T> {
        self.map_err(|e| RolesError::read(path, e))
    }
}
