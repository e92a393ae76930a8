//! deadrole-core: unused Ansible role detection library
//!
//! Finds the roles of a roles directory that a playbook can never reach,
//! neither directly nor through the `dependencies` declared in each role's
//! `meta/main.yml`.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use deadrole_core::prelude::*;
//!
//! for role in find_unused_roles("site.yml".as_ref(), "roles".as_ref())? {
//!     println!("{}", role);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`playbook`]: roles referenced directly by a playbook
//! - [`meta`]: per-role dependency metadata
//! - [`inventory`]: roles present on disk
//! - [`closure`]: transitive dependency closure (lazy BFS)
//! - [`detect`]: set difference between inventory and closure
//! - [`resolver`]: the end-to-end pipeline
//! - [`builder`]: configurable analysis keeping intermediate results
//! - [`error`]: typed error handling
//!
//! # Cargo Features
//!
//! - `dot` (default): Graphviz DOT export of the dependency graph

pub mod builder;
pub mod closure;
pub mod config;
pub mod detect;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod meta;
pub mod parse;
pub mod playbook;
pub mod prelude;
pub mod report;
pub mod resolver;

#[cfg(feature = "dot")]
pub mod visualize;

// Error types
pub use error::{IoResultExt, RolesError, RolesResult, Stage};

// Builder API
pub use builder::{AnalysisResult, Deadrole};

// Closure engine
pub use closure::{closure_in, closure_of, trace_closure, ClosureTrace, DependencyEdge};

// Configuration
pub use config::{load_config, DeadroleConfig, OutputConfig};

// Core detection
pub use detect::find_unused;

// Readers
pub use inventory::list_roles;
pub use meta::{dependencies_of, MetadataSource, RoleMeta, RolesDir};
pub use playbook::{roles_of, Play};

// Logging
pub use logging::{init_structured_logging, log_info, log_warn};

// Reporting
pub use report::{print_json, print_plain, render_json, render_plain};

// Pipeline
pub use resolver::find_unused_roles;

#[cfg(feature = "dot")]
pub use visualize::generate_dot;
