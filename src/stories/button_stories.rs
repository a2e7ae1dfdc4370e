//! Button stories for the storybook

use crate::error::Result;
use crate::storybook::{story, BooleanControl, Story, StoryContext, TextControl, ThemeMode};

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonProps {
    pub text: String,
    pub enabled: bool,
}

/// Text rendition of a button: `[ Label ]`, dimmed when disabled
pub fn render_button(props: &ButtonProps, ctx: &StoryContext) -> String {
    let face = match (props.enabled, ctx.environment.theme) {
        (false, _) => format!("( {} )", props.text),
        (true, ThemeMode::Light) => format!("[ {} ]", props.text),
        (true, ThemeMode::Dark) => format!("[# {} #]", props.text),
    };
    if ctx.inspection_mode {
        format!("{}  <Button enabled={}>", face, props.enabled)
    } else {
        face
    }
}

fn button_story(id: &str, name: &str, defaults: ButtonProps) -> Result<Story<ButtonProps, String>> {
    story(id, name, defaults, |s| {
        Ok(s
            .documentation(|d| {
                d.description("Clickable action button with a text label.")
                    .usage("Button(text = \"Save\", enabled = true, onClick = { save() })")
                    .props("text: String - label shown on the button\nenabled: Boolean - whether the button reacts to clicks")
            })
            .control(
                "text",
                TextControl::new("Text").with_description("Button label"),
                |p: &ButtonProps| p.text.clone(),
                |p: &ButtonProps, v| ButtonProps {
                    text: v,
                    ..p.clone()
                },
            )?
            .control(
                "enabled",
                BooleanControl::new("Enabled"),
                |p: &ButtonProps| p.enabled,
                |p: &ButtonProps, v| ButtonProps {
                    enabled: v,
                    ..p.clone()
                },
            )?
            .render(render_button))
    })
}

pub fn button_primary() -> Result<Story<ButtonProps, String>> {
    button_story(
        "button.primary",
        "Button / Primary",
        ButtonProps {
            text: "Click Me".into(),
            enabled: true,
        },
    )
}

pub fn button_disabled() -> Result<Story<ButtonProps, String>> {
    button_story(
        "button.disabled",
        "Button / Disabled",
        ButtonProps {
            text: "Disabled".into(),
            enabled: false,
        },
    )
}
