//! Core operations.
//!
//! Business logic for dbdraw commands, separated from argument parsing,
//! prompts and output rendering.

pub mod generate;
pub mod sync;

pub use generate::generate;
pub use sync::sync;

use dbdraw_graph::{Collection, duplicate_collection_names};

/// Warnings for collections whose files would overwrite each other.
fn duplicate_warnings(collections: &[Collection]) -> Vec<String> {
    duplicate_collection_names(collections)
        .into_iter()
        .map(|name| {
            format!(
                "Collection '{}' appears more than once; later files overwrite earlier ones",
                name
            )
        })
        .collect()
}
