//! Batch tooling for a component library's build pipeline.
//!
//! # Overview
//!
//! `componentry` turns a tree of UI component sources into a distributable
//! template tree plus a machine-readable registry. It is two cooperating
//! offline batch tools that communicate purely through the filesystem:
//!
//! - **extract** walks `src/components/{atoms|molecules|organisms}/<name>/`,
//!   derives structural metadata from each component's `index.<ext>` entry
//!   file, applies the `forwardRef` migration to the source, and writes a
//!   transformed copy plus a `metadata.json` document per component.
//! - **registry** collects every `metadata.json` the extractor produced and
//!   merges them into a single versioned `registry.json`, keyed by
//!   lower-cased `{category}/{name}`.
//!
//! # Basic Usage
//!
//! Run the full pipeline from a library checkout:
//!
//! ```bash
//! componentry extract --source src/components --output templates/components
//! componentry registry --templates templates/components --output registry.json
//! ```
//!
//! Both commands exit `0` on success and non-zero on any error, with the
//! error written to stderr. Re-running either command fully regenerates its
//! output; nothing is updated incrementally.
//!
//! # Source Layout
//!
//! A component is recognized only when its entry file sits at
//! `<category>/<name>/index.tsx` (or `.ts`) with `<category>` one of `atoms`,
//! `molecules`, or `organisms`. Anything else in the tree — helper modules,
//! stories, stylesheets, unknown categories — is silently ignored by the
//! extractor's discovery filter, though sibling files of a recognized
//! component are copied into its output directory verbatim.
//!
//! # Metadata
//!
//! Each `metadata.json` records the component's name, category, leading block
//! comment, external imports, exported identifiers, and whether test/readme
//! siblings exist. The import and export scans are syntactic: re-exports,
//! export lists, and computed identifiers are not detected.
//!
//! # Registry Version
//!
//! The registry's `version` field comes from `--registry-version`, the
//! `REGISTRY_VERSION` environment variable, or the fallback `1.0.0`, in that
//! order of precedence:
//!
//! ```bash
//! REGISTRY_VERSION=$(node -p "require('./package.json').version") \
//!     componentry registry
//! ```
//!
//! # Diagnostics
//!
//! Both commands accept `--log-level <none|error|warn|info|debug|trace>` for
//! diagnostic output on stderr; `RUST_LOG` overrides it when set.

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use componentry::Result;

mod commands;

use crate::commands::{ExtractArgs, RegistryArgs, process_extract, process_registry};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "componentry", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract component templates and metadata from a source tree
    Extract(ExtractArgs),

    /// Aggregate extracted metadata into a versioned registry
    Registry(RegistryArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    match &Cli::parse().command {
        Command::Extract(args) => process_extract(args).await,
        Command::Registry(args) => process_registry(args).await,
    }
}
