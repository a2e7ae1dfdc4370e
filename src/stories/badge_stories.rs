//! Badge stories - exercises several control kinds on one component

use crate::error::Result;
use crate::storybook::{
    story, BooleanControl, EnumControl, Story, StoryContext, TextControl,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Primary,
    Secondary,
    Success,
    Error,
    Warning,
    Info,
}

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 6] = [
        BadgeVariant::Primary,
        BadgeVariant::Secondary,
        BadgeVariant::Success,
        BadgeVariant::Error,
        BadgeVariant::Warning,
        BadgeVariant::Info,
    ];

    fn marker(self) -> char {
        match self {
            BadgeVariant::Primary => '*',
            BadgeVariant::Secondary => '-',
            BadgeVariant::Success => '+',
            BadgeVariant::Error => '!',
            BadgeVariant::Warning => '?',
            BadgeVariant::Info => 'i',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeSize {
    Small,
    Medium,
    Large,
}

impl BadgeSize {
    pub const ALL: [BadgeSize; 3] = [BadgeSize::Small, BadgeSize::Medium, BadgeSize::Large];

    fn padding(self) -> usize {
        match self {
            BadgeSize::Small => 0,
            BadgeSize::Medium => 1,
            BadgeSize::Large => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BadgeProps {
    pub text: String,
    pub variant: BadgeVariant,
    pub size: BadgeSize,
    pub outlined: bool,
    pub dismissible: bool,
}

pub fn render_badge(props: &BadgeProps, ctx: &StoryContext) -> String {
    let pad = " ".repeat(props.size.padding());
    let (open, close) = if props.outlined { ('(', ')') } else { ('<', '>') };
    let dismiss = if props.dismissible { " x" } else { "" };
    let badge = format!(
        "{}{}{} {}{}{}{}",
        open,
        pad,
        props.variant.marker(),
        props.text,
        dismiss,
        pad,
        close
    );
    if ctx.inspection_mode {
        format!("{}  <Badge {:?} {:?}>", badge, props.variant, props.size)
    } else {
        badge
    }
}

fn badge_story(id: &str, name: &str, defaults: BadgeProps) -> Result<Story<BadgeProps, String>> {
    story(id, name, defaults, |s| {
        Ok(s
            .documentation(|d| {
                d.description("Small status label.")
                    .usage("Badge(text = \"New\", variant = BadgeVariant.Primary)")
                    .notes("Keep badge text to a word or two.")
            })
            .control(
                "text",
                TextControl::new("Text"),
                |p: &BadgeProps| p.text.clone(),
                |p: &BadgeProps, v| BadgeProps {
                    text: v,
                    ..p.clone()
                },
            )?
            .control(
                "variant",
                EnumControl::new("Variant", BadgeVariant::ALL)?,
                |p: &BadgeProps| p.variant,
                |p: &BadgeProps, v| BadgeProps {
                    variant: v,
                    ..p.clone()
                },
            )?
            .control(
                "size",
                EnumControl::new("Size", BadgeSize::ALL)?,
                |p: &BadgeProps| p.size,
                |p: &BadgeProps, v| BadgeProps {
                    size: v,
                    ..p.clone()
                },
            )?
            .control(
                "outlined",
                BooleanControl::new("Outlined"),
                |p: &BadgeProps| p.outlined,
                |p: &BadgeProps, v| BadgeProps {
                    outlined: v,
                    ..p.clone()
                },
            )?
            .control(
                "dismissible",
                BooleanControl::new("Dismissible").with_description("Shows a close affordance"),
                |p: &BadgeProps| p.dismissible,
                |p: &BadgeProps, v| BadgeProps {
                    dismissible: v,
                    ..p.clone()
                },
            )?
            .render(render_badge))
    })
}

fn defaults(text: &str, variant: BadgeVariant) -> BadgeProps {
    BadgeProps {
        text: text.to_string(),
        variant,
        size: BadgeSize::Medium,
        outlined: false,
        dismissible: false,
    }
}

pub fn badge_primary() -> Result<Story<BadgeProps, String>> {
    badge_story("badge.primary", "Badge / Primary", defaults("New", BadgeVariant::Primary))
}

pub fn badge_error() -> Result<Story<BadgeProps, String>> {
    badge_story("badge.error", "Badge / Error", defaults("Failed", BadgeVariant::Error))
}

pub fn badge_success() -> Result<Story<BadgeProps, String>> {
    badge_story("badge.success", "Badge / Success", defaults("Done", BadgeVariant::Success))
}
