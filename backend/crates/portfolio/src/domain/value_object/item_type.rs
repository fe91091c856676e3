//! Item Type Value Object
//!
//! The fixed three-value category for portfolio items. The display strings
//! are the wire and storage representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a portfolio item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ItemType {
    WorkExperience,
    Resume,
    Certification,
}

/// Error returned for a string outside the three-value enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidItemType(pub String);

impl fmt::Display for InvalidItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid item type '{}'. Must be one of: Work Experience, Resume, Certification",
            self.0
        )
    }
}

impl std::error::Error for InvalidItemType {}

impl ItemType {
    /// Display / storage string
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::WorkExperience => "Work Experience",
            ItemType::Resume => "Resume",
            ItemType::Certification => "Certification",
        }
    }

    /// Parse the display string, trimming surrounding whitespace
    pub fn parse(input: &str) -> Result<Self, InvalidItemType> {
        match input.trim() {
            "Work Experience" => Ok(ItemType::WorkExperience),
            "Resume" => Ok(ItemType::Resume),
            "Certification" => Ok(ItemType::Certification),
            other => Err(InvalidItemType(other.to_string())),
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ItemType {
    type Error = InvalidItemType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ItemType> for String {
    fn from(item_type: ItemType) -> Self {
        item_type.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_variants() {
        assert_eq!(
            ItemType::parse("Work Experience").unwrap(),
            ItemType::WorkExperience
        );
        assert_eq!(ItemType::parse("Resume").unwrap(), ItemType::Resume);
        assert_eq!(
            ItemType::parse("Certification").unwrap(),
            ItemType::Certification
        );
    }

    #[test]
    fn test_parse_trims() {
        assert_eq!(ItemType::parse("  Resume  ").unwrap(), ItemType::Resume);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(ItemType::parse("").is_err());
        assert!(ItemType::parse("resume").is_err());
        assert!(ItemType::parse("Hobby").is_err());
    }

    #[test]
    fn test_serde_uses_display_string() {
        let json = serde_json::to_string(&ItemType::WorkExperience).unwrap();
        assert_eq!(json, "\"Work Experience\"");

        let back: ItemType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ItemType::WorkExperience);
    }
}
