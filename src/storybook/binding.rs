//! Prop bindings: one control coupled to a getter/setter pair over an
//! immutable props value.
//!
//! A story keeps its bindings as `Vec<AnyPropBinding<P>>`: the props type is
//! shared, while each entry's field type is fixed by its variant. Hosts dispatch
//! with a `match`; because the enum is `#[non_exhaustive]`, hosts built outside
//! this crate must carry a fallback arm for control kinds they do not know.

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, StorybookError};

use super::control::{BooleanControl, ControlKind, EnumControl, PropControl, TextControl};

type Getter<P, T> = Arc<dyn Fn(&P) -> T + Send + Sync>;
type Setter<P, T> = Arc<dyn Fn(&P, T) -> P + Send + Sync>;

/// Binds one field of `P` to the control `C`.
///
/// The setter must return a new props value in which only this binding's
/// field differs from the input. That contract is not checked here.
pub struct PropBinding<P, C: PropControl> {
    key: String,
    control: C,
    getter: Getter<P, C::Value>,
    setter: Setter<P, C::Value>,
}

impl<P, C: PropControl> PropBinding<P, C> {
    /// # Errors
    ///
    /// Returns `StorybookError::BlankControlKey` if `key` is blank.
    pub fn new(
        key: impl Into<String>,
        control: C,
        getter: impl Fn(&P) -> C::Value + Send + Sync + 'static,
        setter: impl Fn(&P, C::Value) -> P + Send + Sync + 'static,
    ) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(StorybookError::BlankControlKey);
        }
        Ok(Self {
            key,
            control,
            getter: Arc::new(getter),
            setter: Arc::new(setter),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    /// Read this binding's field from `props`.
    pub fn get_value(&self, props: &P) -> C::Value {
        (self.getter)(props)
    }

    /// Produce new props with this binding's field set to `value`.
    pub fn update_value(&self, props: &P, value: C::Value) -> P {
        (self.setter)(props, value)
    }
}

impl<P, C: PropControl + fmt::Debug> fmt::Debug for PropBinding<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropBinding")
            .field("key", &self.key)
            .field("control", &self.control)
            .finish_non_exhaustive()
    }
}

/// Operations an enum binding exposes once its value type is erased.
trait ErasedEnumBinding<P>: Send + Sync {
    fn key(&self) -> &str;
    fn label(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn option_labels(&self) -> Vec<String>;
    fn selected_index(&self, props: &P) -> Option<usize>;
    fn select(&self, props: &P, index: usize) -> Option<P>;
}

impl<P, T> ErasedEnumBinding<P> for PropBinding<P, EnumControl<T>>
where
    T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
{
    fn key(&self) -> &str {
        &self.key
    }

    fn label(&self) -> &str {
        self.control.label()
    }

    fn description(&self) -> Option<&str> {
        self.control.description()
    }

    fn option_labels(&self) -> Vec<String> {
        self.control.option_labels()
    }

    fn selected_index(&self, props: &P) -> Option<usize> {
        self.control.position_of(&self.get_value(props))
    }

    fn select(&self, props: &P, index: usize) -> Option<P> {
        let value = self.control.values().get(index)?.clone();
        Some(self.update_value(props, value))
    }
}

/// An enum binding whose value type has been erased; options are addressed by index.
pub struct EnumBinding<P> {
    inner: Box<dyn ErasedEnumBinding<P>>,
}

impl<P> EnumBinding<P> {
    pub fn key(&self) -> &str {
        self.inner.key()
    }

    pub fn label(&self) -> &str {
        self.inner.label()
    }

    pub fn description(&self) -> Option<&str> {
        self.inner.description()
    }

    pub fn option_labels(&self) -> Vec<String> {
        self.inner.option_labels()
    }

    /// Index of the current value, or `None` if the getter returned a value
    /// outside the declared options.
    pub fn selected_index(&self, props: &P) -> Option<usize> {
        self.inner.selected_index(props)
    }

    /// Props with the option at `index` selected, or `None` if out of range.
    pub fn select(&self, props: &P, index: usize) -> Option<P> {
        self.inner.select(props, index)
    }
}

impl<P> fmt::Debug for EnumBinding<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumBinding")
            .field("key", &self.key())
            .field("options", &self.option_labels())
            .finish()
    }
}

/// One entry of a story's control list.
#[non_exhaustive]
pub enum AnyPropBinding<P> {
    Text(PropBinding<P, TextControl>),
    Boolean(PropBinding<P, BooleanControl>),
    Enum(EnumBinding<P>),
}

impl<P> From<PropBinding<P, TextControl>> for AnyPropBinding<P> {
    fn from(binding: PropBinding<P, TextControl>) -> Self {
        AnyPropBinding::Text(binding)
    }
}

impl<P> From<PropBinding<P, BooleanControl>> for AnyPropBinding<P> {
    fn from(binding: PropBinding<P, BooleanControl>) -> Self {
        AnyPropBinding::Boolean(binding)
    }
}

impl<P, T> From<PropBinding<P, EnumControl<T>>> for AnyPropBinding<P>
where
    P: 'static,
    T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
{
    fn from(binding: PropBinding<P, EnumControl<T>>) -> Self {
        AnyPropBinding::Enum(EnumBinding {
            inner: Box::new(binding),
        })
    }
}

impl<P> AnyPropBinding<P> {
    pub fn key(&self) -> &str {
        match self {
            AnyPropBinding::Text(b) => b.key(),
            AnyPropBinding::Boolean(b) => b.key(),
            AnyPropBinding::Enum(b) => b.key(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AnyPropBinding::Text(b) => b.control().label(),
            AnyPropBinding::Boolean(b) => b.control().label(),
            AnyPropBinding::Enum(b) => b.label(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            AnyPropBinding::Text(b) => b.control().description(),
            AnyPropBinding::Boolean(b) => b.control().description(),
            AnyPropBinding::Enum(b) => b.description(),
        }
    }

    pub fn kind(&self) -> ControlKind {
        match self {
            AnyPropBinding::Text(_) => ControlKind::Text,
            AnyPropBinding::Boolean(_) => ControlKind::Boolean,
            AnyPropBinding::Enum(_) => ControlKind::Enum,
        }
    }

    /// Snapshot of this control against `props`, for an editor widget.
    pub fn view(&self, props: &P) -> ControlView {
        let editor = match self {
            AnyPropBinding::Text(b) => ControlEditor::Text {
                value: b.get_value(props),
            },
            AnyPropBinding::Boolean(b) => ControlEditor::Boolean {
                value: b.get_value(props),
            },
            AnyPropBinding::Enum(b) => ControlEditor::Enum {
                options: b.option_labels(),
                selected: b.selected_index(props),
            },
        };
        ControlView {
            key: self.key().to_string(),
            label: self.label().to_string(),
            description: self.description().map(str::to_string),
            editor,
        }
    }

    /// Apply an edit coming from an editor widget.
    ///
    /// # Errors
    ///
    /// - `ControlValueMismatch` if `value` is not of this control's kind
    /// - `ChoiceOutOfRange` if an enum index is past the last option
    pub fn apply(&self, props: &P, value: ControlValue) -> Result<P> {
        match (self, value) {
            (AnyPropBinding::Text(b), ControlValue::Text(text)) => Ok(b.update_value(props, text)),
            (AnyPropBinding::Boolean(b), ControlValue::Boolean(flag)) => {
                Ok(b.update_value(props, flag))
            }
            (AnyPropBinding::Enum(b), ControlValue::Choice(index)) => {
                b.select(props, index)
                    .ok_or_else(|| StorybookError::ChoiceOutOfRange {
                        key: b.key().to_string(),
                        index,
                        len: b.option_labels().len(),
                    })
            }
            (binding, value) => Err(StorybookError::ControlValueMismatch {
                key: binding.key().to_string(),
                expected: binding.kind().name(),
                found: value.kind().name(),
            }),
        }
    }
}

impl<P> fmt::Debug for AnyPropBinding<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyPropBinding::Text(b) => f.debug_tuple("Text").field(b).finish(),
            AnyPropBinding::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            AnyPropBinding::Enum(b) => f.debug_tuple("Enum").field(b).finish(),
        }
    }
}

/// A new value produced by an editor widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue {
    Text(String),
    Boolean(bool),
    /// Index into the enum control's option list.
    Choice(usize),
}

impl ControlValue {
    pub fn kind(&self) -> ControlKind {
        match self {
            ControlValue::Text(_) => ControlKind::Text,
            ControlValue::Boolean(_) => ControlKind::Boolean,
            ControlValue::Choice(_) => ControlKind::Enum,
        }
    }
}

/// What an editor widget needs to show for one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub key: String,
    pub label: String,
    pub description: Option<String>,
    pub editor: ControlEditor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ControlEditor {
    Text {
        value: String,
    },
    Boolean {
        value: bool,
    },
    Enum {
        options: Vec<String>,
        selected: Option<usize>,
    },
}

impl ControlView {
    /// Parse user-typed text into a value for this control.
    ///
    /// Booleans accept `true`/`false`/`on`/`off`; enums accept an option label
    /// (case-insensitive) or its zero-based index.
    pub fn parse_value(&self, raw: &str) -> Option<ControlValue> {
        match &self.editor {
            ControlEditor::Text { .. } => Some(ControlValue::Text(raw.to_string())),
            ControlEditor::Boolean { .. } => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => Some(ControlValue::Boolean(true)),
                "false" | "off" | "no" | "0" => Some(ControlValue::Boolean(false)),
                _ => None,
            },
            ControlEditor::Enum { options, .. } => {
                let raw = raw.trim();
                options
                    .iter()
                    .position(|o| o.eq_ignore_ascii_case(raw))
                    .or_else(|| raw.parse::<usize>().ok().filter(|i| *i < options.len()))
                    .map(ControlValue::Choice)
            }
        }
    }

    /// Current value as display text.
    pub fn display_value(&self) -> String {
        match &self.editor {
            ControlEditor::Text { value } => value.clone(),
            ControlEditor::Boolean { value } => value.to_string(),
            ControlEditor::Enum { options, selected } => selected
                .and_then(|i| options.get(i))
                .cloned()
                .unwrap_or_else(|| "<unknown>".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "binding_tests.rs"]
mod tests;
