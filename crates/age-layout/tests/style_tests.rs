//! Integration tests for style resolution.

use age_common::warning::was_warned;
use age_layout::style::{Border, BorderSide, Color, EdgeLengths, FontDescriptor};
use age_layout::{
    Alignment, BoxTree, ElementKind, Length, PseudoState, StackDirection, StyleProperties,
    TextWrap, default_style_for_element, percent, px, resolve_style,
};

const RED: Color = Color::rgb(255, 0, 0);
const GREEN: Color = Color::rgb(0, 255, 0);
const BLUE: Color = Color::rgb(0, 0, 255);

#[test]
fn test_unset_properties_take_initial_values() {
    let style = resolve_style(&StyleProperties::new(), &[], None);
    assert_eq!(style.width, Length::Auto);
    assert_eq!(style.max_height, Length::Auto);
    assert_eq!(style.margin, EdgeLengths::ZERO);
    assert_eq!(style.font, FontDescriptor::default());
    assert_eq!(style.font.size, 16.0);
    assert_eq!(style.background_color, None);
    assert_eq!(style.text_wrap, TextWrap::Wrap);
    assert!(!style.hidden);
}

#[test]
fn test_default_style_per_element() {
    assert_eq!(
        default_style_for_element(ElementKind::Div).stack_direction,
        Some(StackDirection::Vertical)
    );
    assert_eq!(
        default_style_for_element(ElementKind::FlexBox).stack_direction,
        Some(StackDirection::Horizontal)
    );
    assert_eq!(
        default_style_for_element(ElementKind::Span),
        StyleProperties::new()
    );
}

/// Overrides are layered in Hover, Focus, Active order; the last one that
/// sets a field wins.
#[test]
fn test_override_precedence() {
    let base = StyleProperties::new()
        .background_color(RED)
        .width(px(10.0));
    let hover = StyleProperties::new()
        .background_color(GREEN)
        .height(px(5.0));
    let active = StyleProperties::new().background_color(BLUE);

    let style = resolve_style(&base, &[&hover, &active], None);
    assert_eq!(style.background_color, Some(BLUE));
    // Fields only one layer sets survive the merge.
    assert_eq!(style.width, px(10.0));
    assert_eq!(style.height, px(5.0));

    let style = resolve_style(&base, &[&hover], None);
    assert_eq!(style.background_color, Some(GREEN));
}

#[test]
fn test_merged_keeps_unset_fields() {
    let base = StyleProperties::new().width(px(10.0)).color(RED);
    let layer = StyleProperties::new().color(BLUE);
    let merged = base.merged(&layer);
    assert_eq!(merged.width, Some(px(10.0)));
    assert_eq!(merged.color, Some(BLUE));
}

#[test]
fn test_inherited_properties() {
    let parent = resolve_style(
        &StyleProperties::new()
            .font_size(24.0)
            .font_family("serif")
            .color(RED)
            .text_wrap(TextWrap::NoWrap)
            .padding(EdgeLengths::all(px(7.0))),
        &[],
        None,
    );
    let child = resolve_style(&StyleProperties::new(), &[], Some(&parent));

    assert_eq!(child.font, FontDescriptor::new("serif", 24.0));
    assert_eq!(child.color, RED);
    assert_eq!(child.text_wrap, TextWrap::NoWrap);
    // Box properties are not inherited.
    assert_eq!(child.padding, EdgeLengths::ZERO);

    let own = resolve_style(&StyleProperties::new().font_size(12.0), &[], Some(&parent));
    assert_eq!(own.font, FontDescriptor::new("serif", 12.0));
}

#[test]
fn test_negative_lengths_are_clamped() {
    let style = resolve_style(
        &StyleProperties::new()
            .width(px(-5.0))
            .min_height(percent(-10.0))
            .padding(EdgeLengths::new(px(-1.0), px(2.0), px(2.0), px(2.0)))
            .border(Border::all(BorderSide::new(-3.0, Color::BLACK))),
        &[],
        None,
    );
    assert_eq!(style.width, px(0.0));
    assert_eq!(style.min_height, percent(0.0));
    assert_eq!(style.padding.top, px(0.0));
    assert_eq!(style.padding.left, px(2.0));
    assert_eq!(style.border.top.thickness, 0.0);
    assert!(was_warned("Style", "negative width -5px clamped to 0"));
    assert!(was_warned("Style", "negative min-height -10% clamped to 0"));
}

/// Margins may be negative.
#[test]
fn test_negative_margin_is_kept() {
    let style = resolve_style(
        &StyleProperties::new().margin(EdgeLengths::all(px(-4.0))),
        &[],
        None,
    );
    assert_eq!(style.margin.left, px(-4.0));
}

/// NaN and infinite lengths become zero, margins included.
#[test]
fn test_non_finite_lengths_become_zero() {
    let style = resolve_style(
        &StyleProperties::new()
            .width(px(f32::NAN))
            .max_height(percent(f32::INFINITY))
            .margin(EdgeLengths::new(px(f32::INFINITY), px(-2.0), px(0.0), px(0.0)))
            .padding(EdgeLengths::all(px(f32::NAN)))
            .border(Border::all(BorderSide::new(f32::NAN, Color::BLACK))),
        &[],
        None,
    );
    assert_eq!(style.width, px(0.0));
    assert_eq!(style.max_height, px(0.0));
    assert_eq!(style.margin.top, px(0.0));
    assert_eq!(style.margin.right, px(-2.0));
    assert_eq!(style.padding, EdgeLengths::ZERO);
    assert_eq!(style.border.top.thickness, 0.0);
    assert!(was_warned("Style", "non-finite width NaN replaced by 0"));
    assert!(was_warned("Style", "non-finite margin-top inf replaced by 0"));
}

#[test]
fn test_non_positive_font_size_falls_back_to_inherited() {
    let parent = resolve_style(&StyleProperties::new().font_size(20.0), &[], None);
    let child = resolve_style(&StyleProperties::new().font_size(-3.0), &[], Some(&parent));
    assert_eq!(child.font.size, 20.0);
    assert!(was_warned(
        "Style",
        "non-positive font-size -3px replaced by the inherited size"
    ));

    let orphan = resolve_style(&StyleProperties::new().font_size(0.0), &[], None);
    assert_eq!(orphan.font.size, 16.0);
}

#[test]
fn test_inverted_bounds_are_reported() {
    let style = resolve_style(
        &StyleProperties::new()
            .min_width(px(100.0))
            .max_width(px(50.0)),
        &[],
        None,
    );
    // Both bounds are kept; the layout clamp lets the minimum win.
    assert_eq!(style.min_width, px(100.0));
    assert_eq!(style.max_width, px(50.0));
    assert!(was_warned(
        "Style",
        "max width 50px is below min width 100px; the minimum wins"
    ));
}

#[test]
fn test_inverted_percentage_bounds_are_reported() {
    let style = resolve_style(
        &StyleProperties::new()
            .min_height(percent(60.0))
            .max_height(percent(40.0)),
        &[],
        None,
    );
    assert_eq!(style.max_height, percent(40.0));
    assert!(was_warned(
        "Style",
        "max height 40% is below min height 60%; the minimum wins"
    ));
}

#[test]
fn test_effective_alignment_defers_to_parent() {
    let own = resolve_style(&StyleProperties::new().alignment(Alignment::End), &[], None);
    assert_eq!(own.effective_alignment(Some(Alignment::Center)), Alignment::End);

    let deferred = resolve_style(&StyleProperties::new(), &[], None);
    assert_eq!(
        deferred.effective_alignment(Some(Alignment::Center)),
        Alignment::Center
    );
    assert_eq!(deferred.effective_alignment(None), Alignment::Stretch);
}

#[test]
fn test_tree_effective_style_reflects_pseudo_states() {
    let mut tree = BoxTree::new();
    let button = tree.create_element(ElementKind::FlexBox);
    let _ = tree
        .set_style(button, StyleProperties::new().background_color(RED))
        .unwrap();

    // No override for Hover yet: toggling it changes nothing.
    assert!(!tree.set_pseudo_state(button, PseudoState::Hover, true).unwrap());
    assert!(tree.pseudo_states(button).unwrap().contains(PseudoState::Hover));

    // Adding an override for an active state needs a relayout.
    assert!(
        tree.set_state_style(
            button,
            PseudoState::Hover,
            Some(StyleProperties::new().background_color(GREEN)),
        )
        .unwrap()
    );
    assert_eq!(
        tree.effective_style(button).unwrap().background_color,
        Some(GREEN)
    );

    let _ = tree
        .set_state_style(
            button,
            PseudoState::Focus,
            Some(StyleProperties::new().background_color(BLUE)),
        )
        .unwrap();
    assert!(tree.set_pseudo_state(button, PseudoState::Focus, true).unwrap());
    assert_eq!(
        tree.effective_style(button).unwrap().background_color,
        Some(BLUE)
    );

    assert!(tree.set_pseudo_state(button, PseudoState::Focus, false).unwrap());
    assert!(tree.set_pseudo_state(button, PseudoState::Hover, false).unwrap());
    assert_eq!(
        tree.effective_style(button).unwrap().background_color,
        Some(RED)
    );
}

#[test]
fn test_tree_effective_style_inherits_from_ancestors() {
    let mut tree = BoxTree::new();
    let root = tree.create_element(ElementKind::Div);
    let middle = tree.create_element(ElementKind::Div);
    let label = tree.create_text("hi");
    let _ = tree
        .set_style(root, StyleProperties::new().font_size(30.0).color(BLUE))
        .unwrap();
    let _ = tree.append_child(root, middle).unwrap();
    let _ = tree.append_child(middle, label).unwrap();

    let style = tree.effective_style(label).unwrap();
    assert_eq!(style.font.size, 30.0);
    assert_eq!(style.color, BLUE);
    // The element default still applies under the author style.
    assert_eq!(
        tree.effective_style(middle).unwrap().stack_direction,
        StackDirection::Vertical
    );
}
