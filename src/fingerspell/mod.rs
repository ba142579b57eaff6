//! Fingerspelling module
//!
//! Maps text to a sequence of ASL alphabet image references.

mod mapper;
mod types;

pub use mapper::{alphabet_inventory, map_text, to_json};
pub use types::*;
