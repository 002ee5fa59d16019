//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```
//! use portfolio_model::prelude::*;
//!
//! let status: ProjectStatus = "Active".parse().unwrap();
//! assert_eq!(status, ProjectStatus::Active);
//! ```

// Error types
pub use crate::error::{Error, Result};

// Data models
pub use crate::models::{Department, Personnel, Project, ProjectStatus};
