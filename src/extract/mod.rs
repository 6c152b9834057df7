//! The extractor: walks a component source tree, derives a metadata document
//! per component, applies the ref-forwarding migration, and materializes a
//! normalized copy of each component under the output root.
//!
//! Each run fully regenerates its output; there is no incremental diffing.
//! Components are processed strictly sequentially in traversal order, and the
//! first error aborts the whole run.

mod analyzer;
mod discovery;
mod rewrite;

use crate::Result;
use crate::metadata::{Category, ComponentMetadata, ENTRY_EXTENSIONS, METADATA_FILENAME, README_FILENAME};
use camino::{Utf8Path, Utf8PathBuf};
use discovery::EntryFile;
use ohno::IntoAppError;
use std::fs;
use strum::IntoEnumIterator;

pub(crate) const LOG_TARGET: &str = "  extract";

/// Where the extractor reads component sources and writes its output.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Root containing `<category>/<name>/index.<ext>` sources.
    pub source_root: Utf8PathBuf,

    /// Root receiving `<category>/<name>/{index.<ext>, metadata.json, ...}`.
    pub output_root: Utf8PathBuf,
}

/// Summary of a completed extractor run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractReport {
    /// Number of components extracted.
    pub extracted: usize,
}

/// Run the extractor over `config.source_root`.
///
/// # Errors
///
/// Fails on traversal errors and on any per-component read, transform, or
/// write failure. Paths that do not match the entry-file conventions are not
/// errors; they are silently excluded by the discovery filter.
pub async fn run(config: &ExtractorConfig) -> Result<ExtractReport> {
    // Materialize the output tree up front, one directory per category.
    for category in Category::iter() {
        let dir = config.output_root.join(category.to_string());
        fs::create_dir_all(&dir).into_app_err_with(|| format!("creating output directory '{dir}'"))?;
    }

    let entries = discovery::discover(config.source_root.as_std_path())?;
    log::debug!(target: LOG_TARGET, "Discovered {} component entry files under '{}'", entries.len(), config.source_root);

    for entry in &entries {
        process_component(config, entry)?;
    }

    Ok(ExtractReport { extracted: entries.len() })
}

/// Extract one component: transformed entry file, verbatim sibling copies, and
/// the metadata document.
fn process_component(config: &ExtractorConfig, entry: &EntryFile) -> Result<()> {
    let source =
        fs::read_to_string(&entry.path).into_app_err_with(|| format!("reading entry file '{}'", entry.path.display()))?;

    let analysis = analyzer::analyze(&source);
    let doc = ComponentMetadata::new(
        entry.name.clone(),
        entry.category,
        analysis.description,
        analysis.dependencies,
        analysis.exports,
        has_test_sibling(entry),
        entry.dir.join(README_FILENAME).is_file(),
    );

    let out_dir = config.output_root.join(entry.category.to_string()).join(&entry.name);
    fs::create_dir_all(&out_dir).into_app_err_with(|| format!("creating component directory '{out_dir}'"))?;

    let transformed = rewrite::migrate_forward_ref(&source);
    let out_entry = out_dir.join(&entry.file_name);
    fs::write(&out_entry, transformed).into_app_err_with(|| format!("writing entry file '{out_entry}'"))?;

    copy_siblings(entry, &out_dir)?;

    let json = serde_json::to_string_pretty(&doc)
        .into_app_err_with(|| format!("serializing metadata for '{}/{}'", entry.category, entry.name))?;
    let metadata_path = out_dir.join(METADATA_FILENAME);
    fs::write(&metadata_path, json).into_app_err_with(|| format!("writing metadata document '{metadata_path}'"))?;

    log::info!(target: LOG_TARGET, "Extracted {}/{}", entry.category, entry.name);
    Ok(())
}

/// Whether a `<name>.test.<ext>` sibling exists for any recognized extension.
fn has_test_sibling(entry: &EntryFile) -> bool {
    ENTRY_EXTENSIONS
        .iter()
        .any(|ext| entry.dir.join(format!("{}.test.{ext}", entry.name)).is_file())
}

/// Copy every other regular file from the component's source directory into
/// the output directory unchanged. Directories are not descended into, and the
/// entry file itself is skipped since its transformed copy is already written.
fn copy_siblings(entry: &EntryFile, out_dir: &Utf8Path) -> Result<()> {
    let listing =
        fs::read_dir(&entry.dir).into_app_err_with(|| format!("listing component directory '{}'", entry.dir.display()))?;

    for item in listing {
        let item = item.into_app_err_with(|| format!("listing component directory '{}'", entry.dir.display()))?;
        let path = item.path();
        if !path.is_file() {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if file_name == entry.file_name {
            continue;
        }

        let destination = out_dir.join(file_name);
        let _ = fs::copy(&path, &destination)
            .into_app_err_with(|| format!("copying sibling '{}' to '{destination}'", path.display()))?;
    }

    Ok(())
}
