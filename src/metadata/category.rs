use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Structural classification of a component within the source tree.
///
/// Derived from the grandparent directory of a component's entry file. Paths
/// whose grandparent is not one of these names are filtered out before any
/// metadata is created, so every persisted document carries a member of this
/// set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Atoms,
    Molecules,
    Organisms,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_categories() {
        assert_eq!("atoms".parse::<Category>().unwrap(), Category::Atoms);
        assert_eq!("molecules".parse::<Category>().unwrap(), Category::Molecules);
        assert_eq!("organisms".parse::<Category>().unwrap(), Category::Organisms);
    }

    #[test]
    fn test_parse_rejects_unrecognized() {
        assert!("templates".parse::<Category>().is_err());
        assert!("Atoms ".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for category in [Category::Atoms, Category::Molecules, Category::Organisms] {
            let text = category.to_string();
            assert_eq!(text.parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Molecules).unwrap();
        assert_eq!(json, "\"molecules\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Molecules);
    }
}
