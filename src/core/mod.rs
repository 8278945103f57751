//! Catalog engine.
//!
//! - `data`: catalog model and issue locations
//! - `parsers`: `.ts` XML parsing
//! - `writer`: `.ts` serialization in the lupdate layout
//! - `lookup`: runtime lookup table with source-text fallback
//! - `plural`: plural form selection per language
//! - `stats`: translation progress counters
//! - `file_scanner`: catalog discovery
//! - `context`: config + scan + parse for a command run

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod lookup;
pub mod parsers;
pub mod plural;
pub mod stats;
pub mod writer;

pub use context::CheckContext;
pub use data::*;
pub use lookup::{LookupPolicy, LookupTable, Resolved};
pub use plural::PluralRule;
pub use stats::{CatalogStats, ContextStats, MessageCounts};
