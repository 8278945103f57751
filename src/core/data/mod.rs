//! Catalog data model.
//!
//! - `catalog`: catalog, context, message and translation types
//! - `catalog_file`: a parsed catalog bound to its file and message lines
//! - `message`: locations used when reporting issues

mod catalog;
mod catalog_file;
mod message;

pub use catalog::*;
pub use catalog_file::*;
pub use message::*;
