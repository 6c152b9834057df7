//! Command-line surface for componentry.
//!
//! Two subcommands map one-to-one onto the pipeline's stages:
//!
//! - **extract**: discover component entry files, derive metadata, apply the
//!   `forwardRef` migration, and materialize the template tree
//! - **registry**: fold every extracted metadata document into the versioned
//!   registry file
//!
//! Each command parses its arguments, initializes logging, builds the
//! corresponding config struct, and awaits the library entry point. Errors
//! propagate to `main`, which exits non-zero with the error on stderr.

mod common;
mod extract;
mod registry;

pub use extract::{ExtractArgs, process_extract};
pub use registry::{RegistryArgs, process_registry};
