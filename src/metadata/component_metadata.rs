use super::Category;
use serde::{Deserialize, Serialize};

/// Structural facts about a single component, persisted as `metadata.json`
/// next to the component's extracted sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    /// Immediate parent directory of the component's entry file.
    pub name: String,

    /// Category of the component, serialized under the `type` key.
    #[serde(rename = "type")]
    pub category: Category,

    /// First `/** ... */` comment of the entry file, continuation markers
    /// stripped. Empty when the file carries no block comment.
    pub description: String,

    /// External package specifiers imported by the entry file, in first-use
    /// order with duplicates collapsed. Relative imports never appear here.
    pub dependencies: Vec<String>,

    /// Identifiers introduced by top-level export declarations, in source
    /// order. This is a syntactic scan: re-exports and export lists are not
    /// seen.
    pub exports: Vec<String>,

    /// Whether a sibling `<name>.test.<ext>` file exists.
    pub has_tests: bool,

    /// Whether a sibling `README.md` exists.
    pub has_readme: bool,

    // Reserved enrichment fields. The extractor leaves these unset; downstream
    // tooling may populate them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Vec<PropMetadata>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Reserved per-prop schema for future enrichment of `props`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropMetadata {
    pub name: String,

    #[serde(rename = "type")]
    pub prop_type: String,

    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ComponentMetadata {
    /// Create a metadata document from extracted facts, leaving every reserved
    /// enrichment field unset.
    #[must_use]
    pub fn new(
        name: String,
        category: Category,
        description: String,
        dependencies: Vec<String>,
        exports: Vec<String>,
        has_tests: bool,
        has_readme: bool,
    ) -> Self {
        Self {
            name,
            category,
            description,
            dependencies,
            exports,
            has_tests,
            has_readme,
            props: None,
            variants: None,
            examples: None,
            tags: None,
            author: None,
            version: None,
        }
    }

    /// Registry key for this component: lower-cased `{category}/{name}`.
    #[must_use]
    pub fn registry_key(&self) -> String {
        format!("{}/{}", self.category, self.name).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ComponentMetadata {
        ComponentMetadata::new(
            "Button".to_string(),
            Category::Atoms,
            "Primary button.".to_string(),
            vec!["react".to_string()],
            vec!["Button".to_string(), "ButtonProps".to_string()],
            true,
            false,
        )
    }

    #[test]
    fn test_registry_key_is_lowercase() {
        assert_eq!(sample().registry_key(), "atoms/button");
    }

    #[test]
    fn test_serializes_with_camel_case_and_type_key() {
        let json: serde_json::Value = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["name"], "Button");
        assert_eq!(json["type"], "atoms");
        assert_eq!(json["hasTests"], true);
        assert_eq!(json["hasReadme"], false);
        assert!(json.get("category").is_none());
        assert!(json.get("has_tests").is_none());
    }

    #[test]
    fn test_reserved_fields_are_omitted_when_unset() {
        let json: serde_json::Value = serde_json::to_value(sample()).unwrap();
        for field in ["props", "variants", "examples", "tags", "author", "version"] {
            assert!(json.get(field).is_none(), "unset field '{field}' should be omitted");
        }
    }

    #[test]
    fn test_deserializes_without_reserved_fields() {
        let raw = r#"{
            "name": "Divider",
            "type": "atoms",
            "description": "",
            "dependencies": [],
            "exports": ["Divider"],
            "hasTests": false,
            "hasReadme": true
        }"#;
        let doc: ComponentMetadata = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.name, "Divider");
        assert_eq!(doc.category, Category::Atoms);
        assert!(doc.has_readme);
        assert!(doc.props.is_none());
    }

    #[test]
    fn test_prop_metadata_shape() {
        let prop = PropMetadata {
            name: "label".to_string(),
            prop_type: "string".to_string(),
            required: true,
            default_value: None,
            description: Some("Visible text".to_string()),
        };
        let json: serde_json::Value = serde_json::to_value(prop).unwrap();
        assert_eq!(json["type"], "string");
        assert!(json.get("defaultValue").is_none());
    }
}
