//! What is currently on screen for the selected story.
//!
//! [`StoryRuntimeState`] is the typed (props, environment) pair with pure
//! transitions. [`StoryPreview`] is its props-erased handle: the host holds a
//! `Box<dyn StoryPreview<V>>` for the selected story and swaps the state
//! inside it on every edit.

use std::sync::Arc;

use tracing::debug;

use crate::error::{Result, StorybookError};

use super::binding::{ControlValue, ControlView};
use super::environment::{StoryContext, StoryEnvironment};
use super::id::StoryId;
use super::story::Story;

/// Immutable snapshot of the props and environment being shown.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryRuntimeState<P> {
    props: P,
    environment: StoryEnvironment,
}

impl<P: Clone> StoryRuntimeState<P> {
    pub fn new(props: P, environment: StoryEnvironment) -> Self {
        Self { props, environment }
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn environment(&self) -> &StoryEnvironment {
        &self.environment
    }

    /// New state with `props` replaced; environment unchanged.
    #[must_use]
    pub fn with_props(&self, props: P) -> Self {
        Self {
            props,
            environment: self.environment.clone(),
        }
    }

    /// New state with `environment` replaced; props unchanged.
    #[must_use]
    pub fn with_environment(&self, environment: StoryEnvironment) -> Self {
        Self {
            props: self.props.clone(),
            environment,
        }
    }
}

/// Live, props-erased view of one story for a host session.
pub trait StoryPreview<V>: Send {
    fn story_id(&self) -> &StoryId;
    fn environment(&self) -> &StoryEnvironment;
    fn set_environment(&mut self, environment: StoryEnvironment);
    /// One view per control, in declaration order.
    fn controls(&self) -> Vec<ControlView>;
    /// Run the control's setter on the current props and keep the result.
    fn edit(&mut self, key: &str, value: ControlValue) -> Result<()>;
    /// Back to the story's default props. The environment is kept.
    fn reset(&mut self);
    fn render(&self, inspection_mode: bool) -> V;
}

pub(crate) struct LivePreview<P, V> {
    story: Arc<Story<P, V>>,
    state: StoryRuntimeState<P>,
}

impl<P, V> LivePreview<P, V>
where
    P: Clone + Send + Sync + 'static,
    V: 'static,
{
    pub(crate) fn new(story: Arc<Story<P, V>>, environment: StoryEnvironment) -> Self {
        let state = story.initial_state(environment);
        Self { story, state }
    }
}

impl<P, V> StoryPreview<V> for LivePreview<P, V>
where
    P: Clone + Send + Sync + 'static,
    V: 'static,
{
    fn story_id(&self) -> &StoryId {
        self.story.id()
    }

    fn environment(&self) -> &StoryEnvironment {
        self.state.environment()
    }

    fn set_environment(&mut self, environment: StoryEnvironment) {
        self.state = self.state.with_environment(environment);
    }

    fn controls(&self) -> Vec<ControlView> {
        self.story
            .controls()
            .iter()
            .map(|binding| binding.view(self.state.props()))
            .collect()
    }

    fn edit(&mut self, key: &str, value: ControlValue) -> Result<()> {
        let binding =
            self.story
                .control(key)
                .ok_or_else(|| StorybookError::UnknownControl {
                    story: self.story.id().to_string(),
                    key: key.to_string(),
                })?;
        let props = binding.apply(self.state.props(), value)?;
        self.state = self.state.with_props(props);
        debug!(
            event_type = "control_edit",
            story_id = %self.story.id(),
            key = key,
            "Control edited"
        );
        Ok(())
    }

    fn reset(&mut self) {
        self.state = self.state.with_props(self.story.default_props().clone());
    }

    fn render(&self, inspection_mode: bool) -> V {
        let context = StoryContext::new(self.state.environment().clone())
            .with_inspection_mode(inspection_mode);
        self.story.render(self.state.props(), &context)
    }
}
