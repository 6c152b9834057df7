//! Integration tests for the extractor over fixture component trees.

use camino::Utf8PathBuf;
use componentry::extract::{ExtractorConfig, run};
use std::fs;
use std::path::Path;

const BUTTON_ENTRY: &str = "\
/**
 * Primary button.
 */
import React, { forwardRef } from 'react';
import clsx from 'clsx';
import { palette } from './palette';

export interface ButtonProps {
  label: string;
}

export const Button = forwardRef<HTMLButtonElement, ButtonProps>(({ label }, ref) => {
  return (
    <button ref={ref} className={clsx('btn')}>
      {label}
    </button>
  );
});
";

const BUTTON_HELPERS: &str = "export const classes = (base: string) => [base, 'btn'].join(' ');\n";

const DIVIDER_ENTRY: &str = "\
/** Horizontal rule. */
export const Divider = () => <hr />;
";

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn utf8(path: &Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(path.to_path_buf()).unwrap()
}

fn read_metadata(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_extracts_component_with_metadata_and_siblings() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("src/components");
    let output = tmp.path().join("templates/components");

    write(&source.join("atoms/button/index.tsx"), BUTTON_ENTRY);
    write(&source.join("atoms/button/helpers.tsx"), BUTTON_HELPERS);
    write(&source.join("atoms/button/button.test.tsx"), "test('renders', () => {});\n");
    write(&source.join("atoms/button/README.md"), "# Button\n");

    let config = ExtractorConfig {
        source_root: utf8(&source),
        output_root: utf8(&output),
    };
    let report = run(&config).await.unwrap();
    assert_eq!(report.extracted, 1);

    // Transformed entry: forwardRef wrapper gone, destructured props kept.
    let entry = fs::read_to_string(output.join("atoms/button/index.tsx")).unwrap();
    assert!(entry.contains("export const Button = ({ label }: ButtonProps) => {"));
    assert!(!entry.contains("forwardRef"));
    assert!(entry.contains("ref?: React.Ref<HTMLElement>;"));

    // Siblings copied verbatim.
    assert_eq!(fs::read_to_string(output.join("atoms/button/helpers.tsx")).unwrap(), BUTTON_HELPERS);
    assert!(output.join("atoms/button/README.md").is_file());

    // Metadata document.
    let doc = read_metadata(&output.join("atoms/button/metadata.json"));
    assert_eq!(doc["name"], "button");
    assert_eq!(doc["type"], "atoms");
    assert_eq!(doc["description"], "Primary button.");
    assert_eq!(doc["dependencies"], serde_json::json!(["react", "clsx"]));
    assert_eq!(doc["exports"], serde_json::json!(["ButtonProps", "Button"]));
    assert_eq!(doc["hasTests"], true);
    assert_eq!(doc["hasReadme"], true);
}

#[tokio::test]
async fn test_skips_non_entry_files_and_unknown_categories() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("src/components");
    let output = tmp.path().join("templates/components");

    write(&source.join("atoms/divider/index.tsx"), DIVIDER_ENTRY);
    write(&source.join("atoms/divider/stories.tsx"), "export default {};\n");
    write(&source.join("widgets/gizmo/index.tsx"), "export const Gizmo = 1;\n");
    write(&source.join("atoms/notes.txt"), "not a component\n");

    let config = ExtractorConfig {
        source_root: utf8(&source),
        output_root: utf8(&output),
    };
    let report = run(&config).await.unwrap();
    assert_eq!(report.extracted, 1);

    assert!(output.join("atoms/divider/metadata.json").is_file());
    assert!(!output.join("widgets").exists());
    assert!(!output.join("atoms/notes.txt").exists());

    // Category directories are materialized up front even when empty.
    for category in ["atoms", "molecules", "organisms"] {
        assert!(output.join(category).is_dir(), "missing category directory '{category}'");
    }
}

#[tokio::test]
async fn test_non_matching_source_passes_through_unchanged() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("src/components");
    let output = tmp.path().join("templates/components");

    write(&source.join("atoms/divider/index.tsx"), DIVIDER_ENTRY);

    let config = ExtractorConfig {
        source_root: utf8(&source),
        output_root: utf8(&output),
    };
    run(&config).await.unwrap();

    assert_eq!(fs::read_to_string(output.join("atoms/divider/index.tsx")).unwrap(), DIVIDER_ENTRY);

    let doc = read_metadata(&output.join("atoms/divider/metadata.json"));
    assert_eq!(doc["description"], "Horizontal rule.");
    assert_eq!(doc["dependencies"], serde_json::json!([]));
    assert_eq!(doc["hasTests"], false);
    assert_eq!(doc["hasReadme"], false);
}

#[tokio::test]
async fn test_rerun_overwrites_previous_output() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("src/components");
    let output = tmp.path().join("templates/components");

    write(&source.join("atoms/divider/index.tsx"), DIVIDER_ENTRY);

    let config = ExtractorConfig {
        source_root: utf8(&source),
        output_root: utf8(&output),
    };
    run(&config).await.unwrap();

    // Source changes, a rerun fully regenerates the component's output.
    write(&source.join("atoms/divider/index.tsx"), "/** Rule. */\nexport const Divider = () => <hr />;\n");
    run(&config).await.unwrap();

    let doc = read_metadata(&output.join("atoms/divider/metadata.json"));
    assert_eq!(doc["description"], "Rule.");
}

#[tokio::test]
async fn test_missing_source_root_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();

    let config = ExtractorConfig {
        source_root: utf8(&tmp.path().join("does-not-exist")),
        output_root: utf8(&tmp.path().join("templates")),
    };
    assert!(run(&config).await.is_err());
}
