//! Record types for the project portfolio view.
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use portfolio_model::prelude::*;
//! ```
//!
//! This re-exports [`Project`], [`ProjectStatus`], [`Department`], [`Personnel`]
//! and the error types.
//!
//! [`Project`]: models::Project
//! [`ProjectStatus`]: models::ProjectStatus
//! [`Department`]: models::Department
//! [`Personnel`]: models::Personnel

pub mod error;
pub mod models;
pub mod prelude;
