//! Data types for portfolio records.
//!
//! Projects reference a department and a lead by id. The referenced records
//! live in separate collections and may be missing from them.

mod directory;
mod project;
mod status;

pub use directory::*;
pub use project::*;
pub use status::*;
