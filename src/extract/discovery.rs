use crate::Result;
use crate::metadata::{Category, ENTRY_EXTENSIONS, ENTRY_STEM};
use ohno::IntoAppError;
use std::path::{Path, PathBuf};

const MAX_DEPTH: usize = 50;

/// A component entry file that survived the discovery filter.
#[derive(Debug, Clone)]
pub(crate) struct EntryFile {
    /// Full path to `index.<ext>`.
    pub path: PathBuf,

    /// Component source directory, the parent of the entry file.
    pub dir: PathBuf,

    /// Entry filename including its extension.
    pub file_name: String,

    /// Component name, taken from the parent directory.
    pub name: String,

    /// Category parsed from the grandparent directory.
    pub category: Category,
}

/// Enumerate canonical entry files under `source_root`.
///
/// The filter is a pure predicate: paths that are not a recognized
/// `<category>/<name>/index.<ext>` are skipped without comment. Traversal
/// failures (unreadable root, permission errors) are fatal.
pub(crate) fn discover(source_root: &Path) -> Result<Vec<EntryFile>> {
    let mut entries = Vec::new();

    for item in walkdir::WalkDir::new(source_root).follow_links(false).max_depth(MAX_DEPTH) {
        let item = item.into_app_err_with(|| format!("walking source tree '{}'", source_root.display()))?;
        if !item.file_type().is_file() {
            continue;
        }

        if let Some(entry) = classify(item.path()) {
            entries.push(entry);
        }
    }

    Ok(entries)
}

/// Apply the entry-file predicate to a single path.
fn classify(path: &Path) -> Option<EntryFile> {
    let stem = path.file_stem()?.to_str()?;
    let ext = path.extension()?.to_str()?;
    if stem != ENTRY_STEM || !ENTRY_EXTENSIONS.contains(&ext) {
        return None;
    }

    let dir = path.parent()?;
    let name = dir.file_name()?.to_str()?.to_string();
    let category = dir.parent()?.file_name()?.to_str()?.parse::<Category>().ok()?;

    Some(EntryFile {
        path: path.to_path_buf(),
        dir: dir.to_path_buf(),
        file_name: path.file_name()?.to_str()?.to_string(),
        name,
        category,
    })
}
