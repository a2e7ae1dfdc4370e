use super::*;

#[derive(Debug, Clone, PartialEq)]
struct ButtonProps {
    text: String,
    enabled: bool,
    tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tone {
    Primary,
    Secondary,
    Danger,
}

fn defaults() -> ButtonProps {
    ButtonProps {
        text: "Click Me".to_string(),
        enabled: true,
        tone: Tone::Primary,
    }
}

fn text_binding() -> PropBinding<ButtonProps, TextControl> {
    PropBinding::new(
        "text",
        TextControl::new("Text"),
        |p: &ButtonProps| p.text.clone(),
        |p: &ButtonProps, v| ButtonProps {
            text: v,
            ..p.clone()
        },
    )
    .unwrap()
}

fn enabled_binding() -> PropBinding<ButtonProps, BooleanControl> {
    PropBinding::new(
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

fn tone_binding() -> PropBinding<ButtonProps, EnumControl<Tone>> {
    PropBinding::new(
        "tone",
        EnumControl::new("Tone", [Tone::Primary, Tone::Secondary, Tone::Danger]).unwrap(),
        |p: &ButtonProps| p.tone,
        |p: &ButtonProps, v| ButtonProps {
            tone: v,
            ..p.clone()
        },
    )
    .unwrap()
}

#[test]
fn test_blank_key_is_rejected() {
    for key in ["", "   "] {
        let result = PropBinding::new(
            key,
            TextControl::new("Text"),
            |p: &ButtonProps| p.text.clone(),
            |p: &ButtonProps, _v: String| p.clone(),
        );
        assert!(matches!(result, Err(StorybookError::BlankControlKey)));
    }
}

#[test]
fn test_update_text_keeps_other_fields() {
    let binding = text_binding();
    let props = defaults();

    let updated = binding.update_value(&props, "Save".to_string());

    assert_eq!(
        updated,
        ButtonProps {
            text: "Save".to_string(),
            enabled: true,
            tone: Tone::Primary,
        }
    );
    // Source value untouched
    assert_eq!(props.text, "Click Me");
}

#[test]
fn test_each_binding_round_trips_and_is_independent() {
    let props = defaults();

    let text = text_binding();
    let after_text = text.update_value(&props, "Other".to_string());
    assert_eq!(text.get_value(&after_text), "Other");
    assert_eq!(after_text.enabled, props.enabled);
    assert_eq!(after_text.tone, props.tone);

    let enabled = enabled_binding();
    let after_enabled = enabled.update_value(&props, false);
    assert!(!enabled.get_value(&after_enabled));
    assert_eq!(after_enabled.text, props.text);
    assert_eq!(after_enabled.tone, props.tone);

    let tone = tone_binding();
    let after_tone = tone.update_value(&props, Tone::Danger);
    assert_eq!(tone.get_value(&after_tone), Tone::Danger);
    assert_eq!(after_tone.text, props.text);
    assert_eq!(after_tone.enabled, props.enabled);
}

#[test]
fn test_any_binding_views_reflect_current_props() {
    let props = defaults();
    let bindings: Vec<AnyPropBinding<ButtonProps>> =
        vec![text_binding().into(), enabled_binding().into(), tone_binding().into()];

    let views: Vec<ControlView> = bindings.iter().map(|b| b.view(&props)).collect();

    assert_eq!(
        views.iter().map(|v| v.key.as_str()).collect::<Vec<_>>(),
        vec!["text", "enabled", "tone"]
    );
    assert_eq!(
        views[0].editor,
        ControlEditor::Text {
            value: "Click Me".to_string()
        }
    );
    assert_eq!(views[1].editor, ControlEditor::Boolean { value: true });
    assert_eq!(
        views[2].editor,
        ControlEditor::Enum {
            options: vec![
                "Primary".to_string(),
                "Secondary".to_string(),
                "Danger".to_string()
            ],
            selected: Some(0),
        }
    );
    assert_eq!(views[2].display_value(), "Primary");
}

#[test]
fn test_apply_dispatches_by_kind() {
    let props = defaults();
    let tone: AnyPropBinding<ButtonProps> = tone_binding().into();
    let enabled: AnyPropBinding<ButtonProps> = enabled_binding().into();

    let picked = tone.apply(&props, ControlValue::Choice(1)).unwrap();
    assert_eq!(picked.tone, Tone::Secondary);

    let toggled = enabled.apply(&props, ControlValue::Boolean(false)).unwrap();
    assert!(!toggled.enabled);
    assert_eq!(toggled.tone, Tone::Primary);
}

#[test]
fn test_apply_rejects_wrong_kind_and_bad_index() {
    let props = defaults();
    let tone: AnyPropBinding<ButtonProps> = tone_binding().into();

    match tone.apply(&props, ControlValue::Text("Danger".into())) {
        Err(StorybookError::ControlValueMismatch {
            key,
            expected,
            found,
        }) => {
            assert_eq!(key, "tone");
            assert_eq!(expected, "enum");
            assert_eq!(found, "text");
        }
        other => panic!("expected mismatch, got {:?}", other),
    }

    match tone.apply(&props, ControlValue::Choice(3)) {
        Err(StorybookError::ChoiceOutOfRange { index, len, .. }) => {
            assert_eq!(index, 3);
            assert_eq!(len, 3);
        }
        other => panic!("expected out of range, got {:?}", other),
    }
}

#[test]
fn test_parse_value_per_editor() {
    let props = defaults();
    let tone = AnyPropBinding::from(tone_binding()).view(&props);
    let enabled = AnyPropBinding::from(enabled_binding()).view(&props);
    let text = AnyPropBinding::from(text_binding()).view(&props);

    assert_eq!(tone.parse_value("danger"), Some(ControlValue::Choice(2)));
    assert_eq!(tone.parse_value("1"), Some(ControlValue::Choice(1)));
    assert_eq!(tone.parse_value("9"), None);
    assert_eq!(enabled.parse_value("off"), Some(ControlValue::Boolean(false)));
    assert_eq!(enabled.parse_value("maybe"), None);
    assert_eq!(
        text.parse_value(" spaced "),
        Some(ControlValue::Text(" spaced ".to_string()))
    );
}

#[test]
fn test_value_outside_options_has_no_selection() {
    let props = ButtonProps {
        tone: Tone::Danger,
        ..defaults()
    };
    let narrow = PropBinding::new(
        "tone",
        EnumControl::new("Tone", [Tone::Primary, Tone::Secondary]).unwrap(),
        |p: &ButtonProps| p.tone,
        |p: &ButtonProps, v| ButtonProps {
            tone: v,
            ..p.clone()
        },
    )
    .unwrap();

    let view = AnyPropBinding::from(narrow).view(&props);
    assert_eq!(view.display_value(), "<unknown>");
}
