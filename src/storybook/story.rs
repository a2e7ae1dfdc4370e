use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Result, StorybookError};

use super::binding::{AnyPropBinding, PropBinding};
use super::control::PropControl;
use super::documentation::{Documentation, DocumentationBuilder};
use super::environment::{StoryContext, StoryEnvironment};
use super::id::StoryId;
use super::runtime::{LivePreview, StoryPreview, StoryRuntimeState};

const CATEGORY_SEPARATOR: &str = " / ";

type RenderFn<P, V> = Arc<dyn Fn(&P, &StoryContext) -> V + Send + Sync>;

/// Category part of a story name: the text before the first `" / "`, or the
/// whole name when there is no separator.
pub fn story_category(name: &str) -> &str {
    name.split_once(CATEGORY_SEPARATOR)
        .map_or(name, |(category, _)| category)
}

/// A built, immutable component demo.
///
/// `P` is the props type and `V` is whatever the render hook produces for the
/// host's rendering backend.
pub struct Story<P, V> {
    id: StoryId,
    name: String,
    default_props: P,
    controls: Vec<AnyPropBinding<P>>,
    documentation: Documentation,
    render: RenderFn<P, V>,
}

impl<P, V> Story<P, V>
where
    P: Clone + Send + Sync + 'static,
    V: 'static,
{
    pub fn builder(
        id: impl Into<String>,
        name: impl Into<String>,
        default_props: P,
    ) -> Result<StoryBuilder<P, V>> {
        StoryBuilder::new(id, name, default_props)
    }

    pub fn id(&self) -> &StoryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        story_category(&self.name)
    }

    pub fn default_props(&self) -> &P {
        &self.default_props
    }

    /// Bindings in declaration order.
    pub fn controls(&self) -> &[AnyPropBinding<P>] {
        &self.controls
    }

    pub fn control(&self, key: &str) -> Option<&AnyPropBinding<P>> {
        self.controls.iter().find(|b| b.key() == key)
    }

    pub fn documentation(&self) -> &Documentation {
        &self.documentation
    }

    pub fn render(&self, props: &P, context: &StoryContext) -> V {
        (self.render)(props, context)
    }

    /// Runtime state for a fresh selection of this story.
    pub fn initial_state(&self, environment: StoryEnvironment) -> StoryRuntimeState<P> {
        StoryRuntimeState::new(self.default_props.clone(), environment)
    }
}

impl<P, V> fmt::Debug for Story<P, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Story")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("controls", &self.controls)
            .field("documentation", &self.documentation)
            .finish_non_exhaustive()
    }
}

/// Props-erased story, as stored by a registry.
pub trait AnyStory<V>: Send + Sync {
    fn id(&self) -> &StoryId;
    fn name(&self) -> &str;
    fn documentation(&self) -> &Documentation;
    fn control_count(&self) -> usize;

    fn category(&self) -> &str {
        story_category(self.name())
    }

    /// Start a live preview at the story's default props.
    fn open(self: Arc<Self>, environment: StoryEnvironment) -> Box<dyn StoryPreview<V>>;
}

impl<P, V> AnyStory<V> for Story<P, V>
where
    P: Clone + Send + Sync + 'static,
    V: 'static,
{
    fn id(&self) -> &StoryId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn documentation(&self) -> &Documentation {
        &self.documentation
    }

    fn control_count(&self) -> usize {
        self.controls.len()
    }

    fn open(self: Arc<Self>, environment: StoryEnvironment) -> Box<dyn StoryPreview<V>> {
        Box::new(LivePreview::new(self, environment))
    }
}

/// Staged builder for [`Story`].
///
/// Controls keep call order. A later `documentation` call replaces an earlier
/// one. `build` fails if `render` was never called.
pub struct StoryBuilder<P, V> {
    id: StoryId,
    name: String,
    default_props: P,
    controls: Vec<AnyPropBinding<P>>,
    documentation: Documentation,
    render: Option<RenderFn<P, V>>,
}

impl<P, V> StoryBuilder<P, V>
where
    P: Clone + Send + Sync + 'static,
    V: 'static,
{
    /// # Errors
    ///
    /// Returns `StorybookError::BlankStoryId` if `id` is blank.
    pub fn new(id: impl Into<String>, name: impl Into<String>, default_props: P) -> Result<Self> {
        Ok(Self {
            id: StoryId::new(id)?,
            name: name.into(),
            default_props,
            controls: Vec::new(),
            documentation: Documentation::default(),
            render: None,
        })
    }

    /// Add a control bound to one field of the props.
    pub fn control<C>(
        self,
        key: impl Into<String>,
        control: C,
        getter: impl Fn(&P) -> C::Value + Send + Sync + 'static,
        setter: impl Fn(&P, C::Value) -> P + Send + Sync + 'static,
    ) -> Result<Self>
    where
        C: PropControl,
        PropBinding<P, C>: Into<AnyPropBinding<P>>,
    {
        let binding = PropBinding::new(key, control, getter, setter)?;
        self.bind(binding)
    }

    /// Add an already constructed binding.
    ///
    /// # Errors
    ///
    /// Returns `StorybookError::DuplicateControlKey` if a control with the same
    /// key was already added.
    pub fn bind(mut self, binding: impl Into<AnyPropBinding<P>>) -> Result<Self> {
        let binding = binding.into();
        if self.controls.iter().any(|b| b.key() == binding.key()) {
            return Err(StorybookError::DuplicateControlKey {
                story: self.id.to_string(),
                key: binding.key().to_string(),
            });
        }
        self.controls.push(binding);
        Ok(self)
    }

    pub fn documentation(
        mut self,
        block: impl FnOnce(DocumentationBuilder) -> DocumentationBuilder,
    ) -> Self {
        self.documentation = block(Documentation::builder()).build();
        self
    }

    pub fn render(mut self, render: impl Fn(&P, &StoryContext) -> V + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// # Errors
    ///
    /// Returns `StorybookError::MissingRender` if no render hook was set.
    pub fn build(self) -> Result<Story<P, V>> {
        let render = self.render.ok_or_else(|| StorybookError::MissingRender {
            id: self.id.to_string(),
        })?;

        debug!(
            event_type = "story_built",
            story_id = %self.id,
            controls = self.controls.len(),
            documented = !self.documentation.is_empty(),
            "Story built"
        );

        Ok(Story {
            id: self.id,
            name: self.name,
            default_props: self.default_props,
            controls: self.controls,
            documentation: self.documentation,
            render,
        })
    }
}

/// Define a story in one expression.
///
/// ```ignore
/// let button = story("button.primary", "Button / Primary", ButtonProps::default(), |s| {
///     Ok(s
///         .control("text", TextControl::new("Text"), |p| p.text.clone(), |p, v| ButtonProps { text: v, ..p.clone() })?
///         .render(|props, _ctx| format!("[ {} ]", props.text)))
/// })?;
/// ```
pub fn story<P, V>(
    id: impl Into<String>,
    name: impl Into<String>,
    default_props: P,
    block: impl FnOnce(StoryBuilder<P, V>) -> Result<StoryBuilder<P, V>>,
) -> Result<Story<P, V>>
where
    P: Clone + Send + Sync + 'static,
    V: 'static,
{
    block(StoryBuilder::new(id, name, default_props)?)?.build()
}

#[cfg(test)]
#[path = "story_tests.rs"]
mod tests;
