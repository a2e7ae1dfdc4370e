//! StorySession - headless host controller
//!
//! Owns the "currently displayed story" for one UI session: which story is
//! selected, its live runtime state, and the default environment new
//! selections start from. A rendering layer drives it from user input and
//! draws whatever [`StorySession::render`] and [`StorySession::controls`]
//! return. No selection (including an empty registry) is a normal state:
//! `render` returns `None` and the host shows its empty view.

use std::sync::Arc;

use tracing::info;

use crate::error::{Result, StorybookError};

use super::binding::{ControlValue, ControlView};
use super::documentation::Documentation;
use super::environment::{StoryEnvironment, ThemeMode};
use super::id::StoryId;
use super::registry::{StoryRef, StoryRegistry};
use super::runtime::StoryPreview;

pub struct StorySession<V> {
    registry: Arc<dyn StoryRegistry<V>>,
    default_environment: StoryEnvironment,
    inspection_mode: bool,
    selected: Option<Box<dyn StoryPreview<V>>>,
}

impl<V: 'static> StorySession<V> {
    /// Start a session; the first registered story, if any, is selected.
    pub fn new(registry: Arc<dyn StoryRegistry<V>>, default_environment: StoryEnvironment) -> Self {
        let mut session = Self {
            registry,
            default_environment,
            inspection_mode: true,
            selected: None,
        };
        if let Some(first) = session.registry.get_all().into_iter().next() {
            session.open(first);
        }
        session
    }

    pub fn with_inspection_mode(mut self, inspection_mode: bool) -> Self {
        self.inspection_mode = inspection_mode;
        self
    }

    pub fn registry(&self) -> &dyn StoryRegistry<V> {
        self.registry.as_ref()
    }

    pub fn stories(&self) -> Vec<StoryRef<V>> {
        self.registry.get_all()
    }

    pub fn default_environment(&self) -> &StoryEnvironment {
        &self.default_environment
    }

    /// Select a story by id. Props reset to its defaults and the environment
    /// to the session default, even when re-selecting the current story.
    pub fn select(&mut self, id: &str) -> Result<()> {
        let story = self
            .registry
            .find(id)
            .ok_or_else(|| StorybookError::StoryNotFound { id: id.to_string() })?;
        self.open(story);
        Ok(())
    }

    fn open(&mut self, story: StoryRef<V>) {
        info!(
            event_type = "session",
            action = "select",
            story_id = %story.id(),
            controls = story.control_count(),
            "Story selected"
        );
        self.selected = Some(story.open(self.default_environment.clone()));
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&StoryId> {
        self.selected.as_ref().map(|p| p.story_id())
    }

    pub fn selected_story(&self) -> Option<StoryRef<V>> {
        self.selected_id()
            .and_then(|id| self.registry.find_by_id(id))
    }

    /// Environment of the selected story, or the session default.
    pub fn environment(&self) -> &StoryEnvironment {
        self.selected
            .as_ref()
            .map_or(&self.default_environment, |p| p.environment())
    }

    /// Editor views for the selected story; empty without a selection.
    pub fn controls(&self) -> Vec<ControlView> {
        self.selected
            .as_ref()
            .map(|p| p.controls())
            .unwrap_or_default()
    }

    pub fn edit(&mut self, key: &str, value: ControlValue) -> Result<()> {
        self.selected_mut()?.edit(key, value)
    }

    pub fn reset(&mut self) -> Result<()> {
        self.selected_mut()?.reset();
        Ok(())
    }

    pub fn set_environment(&mut self, environment: StoryEnvironment) -> Result<()> {
        self.selected_mut()?.set_environment(environment);
        Ok(())
    }

    pub fn set_theme(&mut self, theme: ThemeMode) -> Result<()> {
        let environment = self.environment().with_theme(theme);
        self.set_environment(environment)
    }

    pub fn documentation(&self) -> Option<Documentation> {
        self.selected_story().map(|s| s.documentation().clone())
    }

    /// Rendered selected story, or `None` for the empty state.
    pub fn render(&self) -> Option<V> {
        self.selected
            .as_ref()
            .map(|p| p.render(self.inspection_mode))
    }

    fn selected_mut(&mut self) -> Result<&mut Box<dyn StoryPreview<V>>> {
        self.selected.as_mut().ok_or(StorybookError::NoSelection)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
