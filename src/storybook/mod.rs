//! Storybook - component showcase core
//!
//! Describes component demos ("stories") as immutable data, keeps them in an
//! ordered registry, and tracks the live props/environment of the story a
//! host is showing. Rendering is left to the host: a story's render hook
//! returns whatever value type `V` the host's backend draws.
//!
//! # Components
//!
//! - [`Story`] / [`StoryBuilder`] / [`story`] - story definition DSL
//! - [`PropBinding`] / [`AnyPropBinding`] - getter/setter pairs behind each control
//! - [`TextControl`], [`BooleanControl`], [`EnumControl`] - control descriptors
//! - [`InMemoryStoryRegistry`] - ordered, duplicate-rejecting store
//! - [`StoryRuntimeState`] - immutable (props, environment) snapshot
//! - [`StorySession`] - headless host controller: selection, edits, rendering
//!
//! # Usage
//!
//! ```ignore
//! use composebook::storybook::{story, InMemoryStoryRegistry, TextControl};
//!
//! #[derive(Clone)]
//! struct ButtonProps { text: String, enabled: bool }
//!
//! let registry = InMemoryStoryRegistry::new();
//! registry.register_story(story(
//!     "button.primary",
//!     "Button / Primary",
//!     ButtonProps { text: "Click Me".into(), enabled: true },
//!     |s| Ok(s
//!         .control("text", TextControl::new("Text"),
//!             |p| p.text.clone(),
//!             |p, v| ButtonProps { text: v, ..p.clone() })?
//!         .render(|p, _ctx| format!("[ {} ]", p.text))),
//! )?)?;
//! ```

mod binding;
mod control;
mod documentation;
mod environment;
mod id;
mod registry;
mod runtime;
mod session;
mod story;

pub use binding::{
    AnyPropBinding, ControlEditor, ControlValue, ControlView, EnumBinding, PropBinding,
};
pub use control::{BooleanControl, ControlKind, EnumControl, PropControl, TextControl};
pub use documentation::{Documentation, DocumentationBuilder, DocumentationSection};
pub use environment::{DeviceProfile, StoryContext, StoryEnvironment, ThemeMode, DEFAULT_LOCALE};
pub use id::StoryId;
pub use registry::{InMemoryStoryRegistry, StoryRef, StoryRegistry};
pub use runtime::{StoryPreview, StoryRuntimeState};
pub use session::StorySession;
pub use story::{story, story_category, AnyStory, Story, StoryBuilder};
