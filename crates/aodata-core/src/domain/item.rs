use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_ITEM_ID_LEN: usize = 64;

/// Tier-prefixed identifier of a traded good (e.g. `T4_MAIN_CURSEDSTAFF`).
///
/// Enchantment suffixes such as `@1` are part of the identifier and pass
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Parse and normalize an item id to uppercase.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyItemId);
        }

        let normalized = trimmed.to_ascii_uppercase();
        let len = normalized.chars().count();
        if len > MAX_ITEM_ID_LEN {
            return Err(ValidationError::ItemIdTooLong {
                len,
                max: MAX_ITEM_ID_LEN,
            });
        }

        for (index, ch) in normalized.chars().enumerate() {
            let valid = ch.is_ascii_alphanumeric() || ch == '_' || ch == '@' || ch == '.';
            if !valid {
                return Err(ValidationError::ItemIdInvalidChar { ch, index });
            }
        }

        let mut chars = normalized.chars();
        let tiered = matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some('T'), Some(tier), Some('_')) if tier.is_ascii_digit()
        );
        if !tiered {
            return Err(ValidationError::ItemIdMissingTier { value: normalized });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ItemId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for ItemId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}
