//! Control descriptors: how a single props field is edited.
//!
//! Each descriptor names the value type it edits through
//! [`PropControl::Value`], so a binding's getter and setter are checked
//! against the control at compile time.

use std::fmt;

use crate::error::{Result, StorybookError};

/// Kind tag for a control, used by hosts and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Text,
    Boolean,
    Enum,
}

impl ControlKind {
    pub fn name(&self) -> &'static str {
        match self {
            ControlKind::Text => "text",
            ControlKind::Boolean => "boolean",
            ControlKind::Enum => "enum",
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A control descriptor for values of type [`PropControl::Value`].
pub trait PropControl: Send + Sync + 'static {
    type Value;

    fn label(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn kind(&self) -> ControlKind;
}

/// Free-form text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextControl {
    label: String,
    description: Option<String>,
}

impl TextControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl PropControl for TextControl {
    type Value = String;

    fn label(&self) -> &str {
        &self.label
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn kind(&self) -> ControlKind {
        ControlKind::Text
    }
}

/// On/off switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanControl {
    label: String,
    description: Option<String>,
}

impl BooleanControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl PropControl for BooleanControl {
    type Value = bool;

    fn label(&self) -> &str {
        &self.label
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn kind(&self) -> ControlKind {
        ControlKind::Boolean
    }
}

/// Choice among a fixed, ordered, non-empty set of values.
///
/// Options are shown to the user by their `Debug` rendering, which for a
/// plain Rust enum is the variant name.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumControl<T> {
    label: String,
    values: Vec<T>,
    description: Option<String>,
}

impl<T> EnumControl<T>
where
    T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
{
    /// Create an enum control over `values`, kept in the given order.
    ///
    /// # Errors
    ///
    /// Returns `StorybookError::EmptyEnumValues` if `values` is empty.
    pub fn new(label: impl Into<String>, values: impl IntoIterator<Item = T>) -> Result<Self> {
        let label = label.into();
        let values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return Err(StorybookError::EmptyEnumValues { label });
        }
        Ok(Self {
            label,
            values,
            description: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Display labels for each option, in order.
    pub fn option_labels(&self) -> Vec<String> {
        self.values.iter().map(|v| format!("{:?}", v)).collect()
    }

    /// Position of `value` among the options, if it is one of them.
    pub fn position_of(&self, value: &T) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }
}

impl<T> PropControl for EnumControl<T>
where
    T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
{
    type Value = T;

    fn label(&self) -> &str {
        &self.label
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn kind(&self) -> ControlKind {
        ControlKind::Enum
    }
}
