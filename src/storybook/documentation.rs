//! Story documentation: four optional long-text fields shown in a docs tab.

use serde::{Deserialize, Serialize};

/// Structured documentation for a story. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Documentation {
    /// What the component is and when to use it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Usage example, usually a code snippet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    /// Reference for the component's props
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<String>,
    /// Warnings, accessibility notes, best practices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Section headings, in the order a viewer shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentationSection {
    Description,
    Usage,
    Props,
    Notes,
}

impl DocumentationSection {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Usage => "Usage",
            Self::Props => "Props",
            Self::Notes => "Notes",
        }
    }

    /// Usage is rendered as a code block; everything else as body text.
    pub fn is_code(&self) -> bool {
        matches!(self, Self::Usage)
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

impl Documentation {
    pub fn builder() -> DocumentationBuilder {
        DocumentationBuilder::default()
    }

    /// True when every field is missing or blank.
    pub fn is_empty(&self) -> bool {
        self.sections().next().is_none()
    }

    /// Non-blank sections in display order.
    pub fn sections(&self) -> impl Iterator<Item = (DocumentationSection, &str)> + '_ {
        [
            (DocumentationSection::Description, &self.description),
            (DocumentationSection::Usage, &self.usage),
            (DocumentationSection::Props, &self.props),
            (DocumentationSection::Notes, &self.notes),
        ]
        .into_iter()
        .filter_map(|(section, field)| non_blank(field).map(|text| (section, text)))
    }
}

/// Chained builder used inside `StoryBuilder::documentation`.
#[derive(Debug, Default)]
pub struct DocumentationBuilder {
    docs: Documentation,
}

impl DocumentationBuilder {
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.docs.description = Some(text.into());
        self
    }

    pub fn usage(mut self, text: impl Into<String>) -> Self {
        self.docs.usage = Some(text.into());
        self
    }

    pub fn props(mut self, text: impl Into<String>) -> Self {
        self.docs.props = Some(text.into());
        self
    }

    pub fn notes(mut self, text: impl Into<String>) -> Self {
        self.docs.notes = Some(text.into());
        self
    }

    pub fn build(self) -> Documentation {
        self.docs
    }
}
