use super::*;
use crate::storybook::binding::{ControlEditor, ControlValue};
use crate::storybook::control::{BooleanControl, EnumControl, TextControl};
use crate::storybook::environment::ThemeMode;

#[derive(Debug, Clone, PartialEq)]
struct ButtonProps {
    text: String,
    enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Size {
    Small,
    Large,
}

#[derive(Debug, Clone, PartialEq)]
struct BadgeProps {
    text: String,
    size: Size,
}

fn button_props() -> ButtonProps {
    ButtonProps {
        text: "Click Me".to_string(),
        enabled: true,
    }
}

fn button_builder(id: &str) -> StoryBuilder<ButtonProps, String> {
    StoryBuilder::new(id, "Button / Primary", button_props())
        .unwrap()
        .control(
            "text",
            TextControl::new("Text"),
            |p: &ButtonProps| p.text.clone(),
            |p: &ButtonProps, v| ButtonProps {
                text: v,
                ..p.clone()
            },
        )
        .unwrap()
        .control(
            "enabled",
            BooleanControl::new("Enabled"),
            |p: &ButtonProps| p.enabled,
            |p: &ButtonProps, v| ButtonProps {
                enabled: v,
                ..p.clone()
            },
        )
        .unwrap()
}

fn render_button(props: &ButtonProps, ctx: &StoryContext) -> String {
    format!(
        "[{}|{}|{}|{}]",
        props.text, props.enabled, ctx.environment.theme, ctx.inspection_mode
    )
}

#[test]
fn test_build_without_render_fails() {
    let result = button_builder("button.primary").build();
    match result {
        Err(StorybookError::MissingRender { id }) => assert_eq!(id, "button.primary"),
        other => panic!("expected MissingRender, got {:?}", other),
    }
}

#[test]
fn test_blank_id_fails_before_any_control() {
    let result = StoryBuilder::<ButtonProps, String>::new("  ", "Button", button_props());
    assert!(matches!(result, Err(StorybookError::BlankStoryId)));
}

#[test]
fn test_built_story_keeps_fields_and_control_order() {
    let story = button_builder("button.primary")
        .render(render_button)
        .build()
        .unwrap();

    assert_eq!(story.id().as_str(), "button.primary");
    assert_eq!(story.name(), "Button / Primary");
    assert_eq!(story.category(), "Button");
    assert_eq!(story.default_props(), &button_props());
    assert_eq!(
        story.controls().iter().map(|c| c.key()).collect::<Vec<_>>(),
        vec!["text", "enabled"]
    );
    assert!(story.documentation().is_empty());
}

#[test]
fn test_binding_update_on_default_props() {
    let story = button_builder("button.primary")
        .render(render_button)
        .build()
        .unwrap();

    let updated = story
        .control("text")
        .unwrap()
        .apply(story.default_props(), ControlValue::Text("Save".into()))
        .unwrap();

    assert_eq!(
        updated,
        ButtonProps {
            text: "Save".to_string(),
            enabled: true,
        }
    );
    // Defaults are never touched by an edit
    assert_eq!(story.default_props().text, "Click Me");
}

#[test]
fn test_duplicate_control_key_is_rejected() {
    let result = button_builder("button.primary").control(
        "text",
        TextControl::new("Label again"),
        |p: &ButtonProps| p.text.clone(),
        |p: &ButtonProps, v| ButtonProps {
            text: v,
            ..p.clone()
        },
    );
    match result {
        Err(StorybookError::DuplicateControlKey { story, key }) => {
            assert_eq!(story, "button.primary");
            assert_eq!(key, "text");
        }
        Err(other) => panic!("expected DuplicateControlKey, got {:?}", other),
        Ok(_) => panic!("expected DuplicateControlKey"),
    }
}

#[test]
fn test_documentation_last_call_wins() {
    let story = button_builder("button.primary")
        .documentation(|d| d.description("first").notes("first notes"))
        .documentation(|d| d.usage("Button(text = \"Save\")"))
        .render(render_button)
        .build()
        .unwrap();

    let docs = story.documentation();
    assert_eq!(docs.description, None);
    assert_eq!(docs.notes, None);
    assert_eq!(docs.usage.as_deref(), Some("Button(text = \"Save\")"));
}

#[test]
fn test_render_receives_props_and_context() {
    let story = button_builder("button.primary")
        .render(render_button)
        .build()
        .unwrap();
    let ctx = StoryContext::new(StoryEnvironment::default().with_theme(ThemeMode::Dark));

    let out = story.render(&button_props(), &ctx);

    assert_eq!(out, "[Click Me|true|dark|true]");
}

#[test]
fn test_story_dsl_helper() {
    let badge = story(
        "badge.primary",
        "Badge / Primary",
        BadgeProps {
            text: "New".into(),
            size: Size::Small,
        },
        |s| {
            Ok(s
                .control(
                    "size",
                    EnumControl::new("Size", [Size::Small, Size::Large])?,
                    |p: &BadgeProps| p.size,
                    |p: &BadgeProps, v| BadgeProps {
                        size: v,
                        ..p.clone()
                    },
                )?
                .render(|p: &BadgeProps, _ctx: &StoryContext| format!("({:?} {})", p.size, p.text)))
        },
    )
    .unwrap();

    assert_eq!(badge.controls().len(), 1);
    assert_eq!(badge.controls()[0].kind().name(), "enum");
}

#[test]
fn test_story_dsl_propagates_control_errors() {
    let result = story(
        "badge.broken",
        "Badge / Broken",
        BadgeProps {
            text: "New".into(),
            size: Size::Small,
        },
        |s| {
            Ok(s
                .control(
                    "size",
                    EnumControl::<Size>::new("Size", Vec::new())?,
                    |p: &BadgeProps| p.size,
                    |p: &BadgeProps, _v| p.clone(),
                )?
                .render(|_p: &BadgeProps, _ctx: &StoryContext| String::new()))
        },
    );
    assert!(matches!(result, Err(StorybookError::EmptyEnumValues { .. })));
}

#[test]
fn test_category_helper() {
    assert_eq!(story_category("Button / Primary"), "Button");
    assert_eq!(story_category("Forms / Inputs / Text"), "Forms");
    assert_eq!(story_category("Standalone"), "Standalone");
    assert_eq!(story_category("A/B"), "A/B");
}

#[test]
fn test_preview_edit_reset_and_environment() {
    let story: Arc<dyn AnyStory<String>> = Arc::new(
        button_builder("button.primary")
            .render(render_button)
            .build()
            .unwrap(),
    );
    let mut preview = story.clone().open(StoryEnvironment::default());

    assert_eq!(preview.story_id().as_str(), "button.primary");
    assert_eq!(preview.render(true), "[Click Me|true|light|true]");

    preview
        .edit("enabled", ControlValue::Boolean(false))
        .unwrap();
    preview
        .set_environment(StoryEnvironment::default().with_theme(ThemeMode::Dark));
    assert_eq!(preview.render(false), "[Click Me|false|dark|false]");

    let controls = preview.controls();
    assert_eq!(controls[1].editor, ControlEditor::Boolean { value: false });

    preview.reset();
    assert_eq!(preview.render(true), "[Click Me|true|dark|true]");
}

#[test]
fn test_preview_rejects_unknown_control_without_changing_state() {
    let story: Arc<dyn AnyStory<String>> = Arc::new(
        button_builder("button.primary")
            .render(render_button)
            .build()
            .unwrap(),
    );
    let mut preview = story.open(StoryEnvironment::default());

    let err = preview
        .edit("color", ControlValue::Text("red".into()))
        .unwrap_err();
    assert!(matches!(err, StorybookError::UnknownControl { .. }));

    let err = preview
        .edit("text", ControlValue::Boolean(true))
        .unwrap_err();
    assert!(matches!(err, StorybookError::ControlValueMismatch { .. }));

    assert_eq!(preview.render(true), "[Click Me|true|light|true]");
}
