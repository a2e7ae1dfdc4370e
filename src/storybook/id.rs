use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StorybookError};

/// Unique, non-blank identifier for a story (e.g. `"button.primary"`).
///
/// The registry keys stories by this value; it is validated once at
/// construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StoryId(String);

impl StoryId {
    /// Create a new story id.
    ///
    /// # Errors
    ///
    /// Returns `StorybookError::BlankStoryId` if the value is empty or only whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(StorybookError::BlankStoryId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for StoryId {
    type Error = StorybookError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for StoryId {
    type Error = StorybookError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for StoryId {
    type Err = StorybookError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<StoryId> for String {
    fn from(id: StoryId) -> String {
        id.0
    }
}

impl AsRef<str> for StoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
