//! The registry generator: aggregates every per-component metadata document
//! under the extractor's output root into a single versioned registry file.

use crate::Result;
use crate::metadata::{ComponentMetadata, ComponentRegistry, METADATA_FILENAME};
use camino::Utf8PathBuf;
use chrono::Utc;
use ohno::IntoAppError;
use std::collections::BTreeMap;
use std::fs;

pub(crate) const LOG_TARGET: &str = " registry";

const MAX_DEPTH: usize = 50;

/// Where the generator reads metadata documents and writes the registry.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Extractor output root to scan for metadata documents.
    pub templates_root: Utf8PathBuf,

    /// Path of the registry file to write.
    pub output_path: Utf8PathBuf,

    /// Version string recorded in the registry document.
    pub version: String,
}

/// Build the registry from every metadata document under
/// `config.templates_root` and write it to `config.output_path`, overwriting
/// any previous registry unconditionally.
///
/// # Errors
///
/// Fails on traversal errors, unreadable or malformed metadata documents, and
/// output write failures. The first error aborts the run; no partial registry
/// is written.
pub async fn generate(config: &RegistryConfig) -> Result<ComponentRegistry> {
    let mut components: BTreeMap<String, ComponentMetadata> = BTreeMap::new();

    for item in walkdir::WalkDir::new(config.templates_root.as_std_path())
        .follow_links(false)
        .max_depth(MAX_DEPTH)
    {
        let item = item.into_app_err_with(|| format!("walking templates tree '{}'", config.templates_root))?;
        if !item.file_type().is_file() || item.file_name().to_str() != Some(METADATA_FILENAME) {
            continue;
        }

        let path = item.path();
        let raw =
            fs::read_to_string(path).into_app_err_with(|| format!("reading metadata document '{}'", path.display()))?;
        let doc: ComponentMetadata =
            serde_json::from_str(&raw).into_app_err_with(|| format!("parsing metadata document '{}'", path.display()))?;

        let key = doc.registry_key();
        if components.contains_key(&key) {
            // Last writer wins; a duplicate key means the upstream tree is
            // inconsistent, which is not this tool's problem to repair.
            log::warn!(target: LOG_TARGET, "Duplicate registry key '{key}', keeping the last document seen");
        }
        let _ = components.insert(key, doc);
    }

    let registry = ComponentRegistry {
        components,
        version: config.version.clone(),
        last_updated: Utc::now(),
    };

    if let Some(parent) = config.output_path.parent()
        && !parent.as_str().is_empty()
    {
        fs::create_dir_all(parent).into_app_err_with(|| format!("creating output directory '{parent}'"))?;
    }

    let json = serde_json::to_string_pretty(&registry)
        .into_app_err_with(|| format!("serializing registry '{}'", config.output_path))?;
    fs::write(&config.output_path, json)
        .into_app_err_with(|| format!("writing registry '{}'", config.output_path))?;

    log::info!(
        target: LOG_TARGET,
        "Wrote registry with {} components to '{}'",
        registry.components.len(),
        config.output_path
    );

    Ok(registry)
}
