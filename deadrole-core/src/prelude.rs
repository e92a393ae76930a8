//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use deadrole_core::prelude::*;
//! ```

// Errors
pub use crate::error::{RolesError, RolesResult, Stage};

// Pipeline and builder
pub use crate::builder::{AnalysisResult, Deadrole};
pub use crate::resolver::find_unused_roles;

// Building blocks
pub use crate::closure::{closure_of, trace_closure};
pub use crate::inventory::list_roles;
pub use crate::meta::{dependencies_of, MetadataSource, RolesDir};
pub use crate::playbook::roles_of;

// Configuration
pub use crate::config::{load_config, DeadroleConfig};
