use super::*;

// =============================================================
// button_class
// =============================================================

#[test]
fn default_button_has_primary_medium_classes() {
    assert_eq!(button_class(ButtonVariant::default(), ButtonSize::default(), ""), "btn btn--primary btn--md");
}

#[test]
fn button_extra_classes_are_appended() {
    assert_eq!(
        button_class(ButtonVariant::Destructive, ButtonSize::Sm, "  w-full "),
        "btn btn--destructive btn--sm w-full"
    );
}

#[test]
fn button_variants_resolve_to_distinct_classes() {
    let variants = [
        ButtonVariant::Default,
        ButtonVariant::Destructive,
        ButtonVariant::Warning,
        ButtonVariant::Info,
        ButtonVariant::Success,
        ButtonVariant::Outline,
        ButtonVariant::Secondary,
        ButtonVariant::Ghost,
        ButtonVariant::Link,
    ];
    let classes: Vec<String> = variants.iter().map(|v| button_class(*v, ButtonSize::Default, "")).collect();
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// alert_class / input_class
// =============================================================

#[test]
fn alert_variant_classes() {
    assert_eq!(alert_class(AlertVariant::Default), "alert alert--default");
    assert_eq!(alert_class(AlertVariant::Destructive), "alert alert--destructive");
    assert_eq!(alert_class(AlertVariant::Success), "alert alert--success");
}

#[test]
fn input_error_modifier() {
    assert_eq!(input_class(false), "input");
    assert_eq!(input_class(true), "input input--error");
}
