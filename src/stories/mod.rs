//! Sample story catalog
//!
//! Stories are registered explicitly in `register_sample_stories`; there is
//! no discovery step. They render to plain text for the terminal host.

mod badge_stories;
mod button_stories;

use crate::error::Result;
use crate::storybook::InMemoryStoryRegistry;

pub use badge_stories::{
    badge_error, badge_primary, badge_success, render_badge, BadgeProps, BadgeSize, BadgeVariant,
};
pub use button_stories::{button_disabled, button_primary, render_button, ButtonProps};

/// Register every sample story, badges first.
pub fn register_sample_stories(registry: &InMemoryStoryRegistry<String>) -> Result<()> {
    registry.register_story(badge_primary()?)?;
    registry.register_story(badge_error()?)?;
    registry.register_story(badge_success()?)?;

    registry.register_story(button_primary()?)?;
    registry.register_story(button_disabled()?)?;
    Ok(())
}

/// A fresh registry holding the sample catalog
pub fn sample_registry() -> Result<InMemoryStoryRegistry<String>> {
    let registry = InMemoryStoryRegistry::new();
    register_sample_stories(&registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorybookError;
    use crate::storybook::{
        ControlEditor, ControlValue, StoryEnvironment, StoryRegistry, ThemeMode,
    };

    #[test]
    fn test_sample_catalog_order_and_categories() {
        let registry = sample_registry().unwrap();
        let ids: Vec<String> = registry.get_all().iter().map(|s| s.id().to_string()).collect();
        assert_eq!(
            ids,
            vec![
                "badge.primary",
                "badge.error",
                "badge.success",
                "button.primary",
                "button.disabled"
            ]
        );
        assert_eq!(registry.categories(), vec!["Badge", "Button"]);
    }

    #[test]
    fn test_registering_catalog_twice_is_rejected() {
        let registry = sample_registry().unwrap();
        let err = register_sample_stories(&registry).unwrap_err();
        assert!(matches!(err, StorybookError::DuplicateStory { ref id } if id == "badge.primary"));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_button_primary_defaults_and_edits() {
        let story = button_primary().unwrap();
        assert_eq!(story.default_props().text, "Click Me");
        assert!(story.default_props().enabled);

        let text = story.control("text").unwrap();
        let updated = text
            .apply(story.default_props(), ControlValue::Text("Save".into()))
            .unwrap();
        assert_eq!(updated.text, "Save");
        assert!(updated.enabled);
        assert_eq!(story.default_props().text, "Click Me");
    }

    #[test]
    fn test_badge_enum_controls_list_every_option() {
        let story = badge_error().unwrap();
        let view = story.control("variant").unwrap().view(story.default_props());
        assert_eq!(
            view.editor,
            ControlEditor::Enum {
                options: vec![
                    "Primary".into(),
                    "Secondary".into(),
                    "Success".into(),
                    "Error".into(),
                    "Warning".into(),
                    "Info".into()
                ],
                selected: Some(3),
            }
        );
        assert_eq!(story.controls().len(), 5);
    }

    #[test]
    fn test_text_rendering_follows_props_and_context() {
        let registry = sample_registry().unwrap();
        let mut preview = registry
            .find("button.disabled")
            .unwrap()
            .open(StoryEnvironment::default());

        assert_eq!(preview.render(false), "( Disabled )");
        preview.edit("enabled", ControlValue::Boolean(true)).unwrap();
        preview.set_environment(StoryEnvironment::default().with_theme(ThemeMode::Dark));
        assert_eq!(preview.render(false), "[# Disabled #]");
        assert_eq!(preview.render(true), "[# Disabled #]  <Button enabled=true>");
    }

    #[test]
    fn test_badge_render() {
        let registry = sample_registry().unwrap();
        let mut preview = registry
            .find("badge.success")
            .unwrap()
            .open(StoryEnvironment::default());
        assert_eq!(preview.render(false), "< + Done >");

        preview.edit("outlined", ControlValue::Boolean(true)).unwrap();
        preview.edit("size", ControlValue::Choice(0)).unwrap();
        assert_eq!(preview.render(false), "(+ Done)");
    }
}
