//! Story registry - explicit registration, deterministic order.
//!
//! Stories are kept in a map for lookup by id plus a Vec recording
//! registration order, so enumeration never depends on hash order. There is
//! no auto-discovery: every story is registered by a call to `register`.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::error::{Result, StorybookError};

use super::id::StoryId;
use super::story::{AnyStory, Story};

pub type StoryRef<V> = Arc<dyn AnyStory<V>>;

/// Ordered, duplicate-rejecting store of stories.
pub trait StoryRegistry<V>: Send + Sync {
    /// Register a story.
    ///
    /// # Errors
    ///
    /// Returns `StorybookError::DuplicateStory` if the id is taken; the
    /// existing entry is left as it was.
    fn register(&self, story: StoryRef<V>) -> Result<()>;

    /// All stories in registration order.
    fn get_all(&self) -> Vec<StoryRef<V>>;

    fn find_by_id(&self, id: &StoryId) -> Option<StoryRef<V>>;

    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up by raw string; blank input finds nothing.
    fn find(&self, id: &str) -> Option<StoryRef<V>> {
        StoryId::new(id).ok().and_then(|id| self.find_by_id(&id))
    }

    /// Unique categories in order of first registration.
    fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for story in self.get_all() {
            let category = story.category();
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
        categories
    }

    /// Stories in `category`, sorted by name.
    fn stories_by_category(&self, category: &str) -> Vec<StoryRef<V>> {
        let mut stories: Vec<_> = self
            .get_all()
            .into_iter()
            .filter(|s| s.category() == category)
            .collect();
        stories.sort_by(|a, b| a.name().cmp(b.name()));
        stories
    }

    /// Case-insensitive substring match on name or id. An empty query matches
    /// everything.
    fn search(&self, query: &str) -> Vec<StoryRef<V>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.get_all();
        }
        self.get_all()
            .into_iter()
            .filter(|s| {
                s.name().to_lowercase().contains(&query)
                    || s.id().as_str().to_lowercase().contains(&query)
            })
            .collect()
    }
}

struct RegistryInner<V> {
    stories: HashMap<StoryId, StoryRef<V>>,
    insertion_order: Vec<StoryId>,
}

/// In-memory [`StoryRegistry`], safe to populate from several threads.
///
/// `register` holds the write lock across the duplicate check and the insert,
/// so two racing registrations of one id cannot both succeed.
pub struct InMemoryStoryRegistry<V> {
    inner: RwLock<RegistryInner<V>>,
}

impl<V> Default for InMemoryStoryRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> InMemoryStoryRegistry<V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RegistryInner {
                stories: HashMap::new(),
                insertion_order: Vec::new(),
            }),
        }
    }
}

impl<V: 'static> InMemoryStoryRegistry<V> {
    /// Typed convenience over [`StoryRegistry::register`].
    pub fn register_story<P>(&self, story: Story<P, V>) -> Result<()>
    where
        P: Clone + Send + Sync + 'static,
    {
        self.register(Arc::new(story))
    }
}

impl<V> StoryRegistry<V> for InMemoryStoryRegistry<V> {
    fn register(&self, story: StoryRef<V>) -> Result<()> {
        let mut inner = self.inner.write();
        let id = story.id().clone();

        if inner.stories.contains_key(&id) {
            warn!(
                event_type = "story_registry",
                action = "conflict",
                story_id = %id,
                "Story with this id is already registered"
            );
            return Err(StorybookError::DuplicateStory { id: id.to_string() });
        }

        info!(
            event_type = "story_registry",
            action = "registered",
            story_id = %id,
            name = story.name(),
            position = inner.insertion_order.len(),
            "Story registered"
        );
        inner.stories.insert(id.clone(), story);
        inner.insertion_order.push(id);
        Ok(())
    }

    fn get_all(&self) -> Vec<StoryRef<V>> {
        let inner = self.inner.read();
        inner
            .insertion_order
            .iter()
            .filter_map(|id| {
                let story = inner.stories.get(id).cloned();
                if story.is_none() {
                    warn!(
                        event_type = "story_registry",
                        action = "missing_entry",
                        story_id = %id,
                        "Ordered id has no stored story, skipping"
                    );
                }
                story
            })
            .collect()
    }

    fn find_by_id(&self, id: &StoryId) -> Option<StoryRef<V>> {
        self.inner.read().stories.get(id).cloned()
    }

    fn len(&self) -> usize {
        self.inner.read().stories.len()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
