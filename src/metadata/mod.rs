//! Shared schema for component metadata documents and the aggregate registry.
//!
//! The extractor writes one [`ComponentMetadata`] document per component; the
//! registry generator reads them back and folds them into a single
//! [`ComponentRegistry`]. The two tools share no state beyond these types and
//! the filesystem conventions captured by the constants below.

mod category;
mod component_metadata;
mod component_registry;

pub use category::Category;
pub use component_metadata::{ComponentMetadata, PropMetadata};
pub use component_registry::ComponentRegistry;

/// Canonical stem of a component's entry file.
pub const ENTRY_STEM: &str = "index";

/// Source extensions recognized for entry files and test siblings.
pub const ENTRY_EXTENSIONS: &[&str] = &["tsx", "ts"];

/// Filename of the per-component metadata document.
pub const METADATA_FILENAME: &str = "metadata.json";

/// Sibling filename whose presence sets `hasReadme`.
pub const README_FILENAME: &str = "README.md";

/// Environment variable consulted for the registry version.
pub const VERSION_ENV_VAR: &str = "REGISTRY_VERSION";

/// Registry version recorded when the environment supplies none.
pub const VERSION_FALLBACK: &str = "1.0.0";
