//! Integration tests for painting laid-out trees.

use age_layout::style::{Border, Color, EdgeLengths, FontDescriptor, Transform};
use age_layout::{
    ApproximateFontMetrics, AvailableSpace, BoxTree, DisplayCommand, DisplayList, ElementKind,
    NodeId, Overflow, Painter, Point, Rect, Renderer, ScrollOffsets, Size, StyleProperties, px,
    run_layout_pass,
};

const GRAY: Color = Color::rgb(128, 128, 128);
const RED: Color = Color::rgb(255, 0, 0);

fn element(tree: &mut BoxTree, kind: ElementKind, style: StyleProperties) -> NodeId {
    let id = tree.create_element(kind);
    let _ = tree.set_style(id, style).unwrap();
    id
}

fn append(tree: &mut BoxTree, parent: NodeId, children: &[NodeId]) {
    for &child in children {
        let _ = tree.append_child(parent, child).unwrap();
    }
}

fn filled(width: f32, height: f32) -> StyleProperties {
    StyleProperties::new()
        .size(px(width), px(height))
        .background_color(GRAY)
}

fn layout(tree: &mut BoxTree, root: NodeId) {
    let available = Size::new(AvailableSpace::Definite(400.0), AvailableSpace::Indefinite);
    run_layout_pass(tree, root, available, &ApproximateFontMetrics).unwrap();
}

fn paint(tree: &BoxTree, root: NodeId, scroll: &ScrollOffsets) -> DisplayList {
    let mut list = DisplayList::new();
    Painter::new(tree, scroll).paint(root, &mut list).unwrap();
    list
}

/// Border boxes and clips of the rect commands, in painting order.
fn rects(list: &DisplayList) -> Vec<(Rect, Option<Rect>)> {
    list.commands()
        .iter()
        .filter_map(|command| match command {
            DisplayCommand::Rect {
                border_box, clip, ..
            } => Some((*border_box, *clip)),
            DisplayCommand::Text { .. } => None,
        })
        .collect()
}

/// A renderer that only counts calls.
#[derive(Default)]
struct CountingRenderer {
    rects: usize,
    texts: Vec<String>,
}

impl Renderer for CountingRenderer {
    fn draw_rect(&mut self, _: Rect, _: &Border, _: Option<Color>, _: Option<Rect>) {
        self.rects += 1;
    }

    fn draw_text(
        &mut self,
        text: &str,
        _: Point,
        _: f32,
        _: &FontDescriptor,
        _: Color,
        _: Option<Rect>,
    ) {
        self.texts.push(text.to_owned());
    }
}

#[test]
fn test_paint_order_is_tree_order() {
    let mut tree = BoxTree::new();
    let root = element(&mut tree, ElementKind::Div, filled(100.0, 100.0));
    let first = element(&mut tree, ElementKind::Div, filled(50.0, 10.0));
    let nested = element(&mut tree, ElementKind::Div, filled(20.0, 5.0));
    let second = element(&mut tree, ElementKind::Div, filled(50.0, 10.0));
    append(&mut tree, root, &[first, second]);
    append(&mut tree, first, &[nested]);
    layout(&mut tree, root);

    let list = paint(&tree, root, &ScrollOffsets::new());
    let boxes: Vec<Rect> = rects(&list).into_iter().map(|(rect, _)| rect).collect();
    assert_eq!(
        boxes,
        vec![
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 50.0, 10.0),
            Rect::new(0.0, 0.0, 20.0, 5.0),
            Rect::new(0.0, 10.0, 50.0, 10.0),
        ]
    );
}

/// Boxes with neither a background nor a visible border draw nothing, but
/// their children still paint.
#[test]
fn test_invisible_boxes_are_skipped() {
    let mut tree = BoxTree::new();
    let root = element(&mut tree, ElementKind::Div, StyleProperties::new());
    let outlined = element(
        &mut tree,
        ElementKind::Div,
        StyleProperties::new()
            .height(px(10.0))
            .border(Border::uniform(1.0, Color::BLACK)),
    );
    let transparent = element(
        &mut tree,
        ElementKind::Div,
        StyleProperties::new()
            .height(px(10.0))
            .border(Border::uniform(1.0, Color::TRANSPARENT)),
    );
    let label = tree.create_text("hello");
    append(&mut tree, root, &[outlined, transparent]);
    append(&mut tree, transparent, &[label]);
    layout(&mut tree, root);

    let mut renderer = CountingRenderer::default();
    Painter::new(&tree, &ScrollOffsets::new())
        .paint(root, &mut renderer)
        .unwrap();
    assert_eq!(renderer.rects, 1);
    assert_eq!(renderer.texts, ["hello"]);
}

/// Border sides reach the renderer with their radius; a negative radius is
/// clamped to zero.
#[test]
fn test_border_radius_is_painted() {
    let mut tree = BoxTree::new();
    let root = element(&mut tree, ElementKind::Div, StyleProperties::new());
    let rounded = element(
        &mut tree,
        ElementKind::Div,
        filled(20.0, 10.0).border(Border::uniform(1.0, Color::BLACK).with_radius(4.0)),
    );
    let inverted = element(
        &mut tree,
        ElementKind::Div,
        filled(20.0, 10.0).border(Border::uniform(1.0, Color::BLACK).with_radius(-3.0)),
    );
    append(&mut tree, root, &[rounded, inverted]);
    layout(&mut tree, root);

    let radii: Vec<f32> = paint(&tree, root, &ScrollOffsets::new())
        .commands()
        .iter()
        .filter_map(|command| match command {
            DisplayCommand::Rect { border, .. } => Some(border.top.radius),
            DisplayCommand::Text { .. } => None,
        })
        .collect();
    assert_eq!(radii, [4.0, 0.0]);
}

#[test]
fn test_text_commands() {
    let mut tree = BoxTree::new();
    let root = element(
        &mut tree,
        ElementKind::Div,
        StyleProperties::new()
            .width(px(40.0))
            .padding(EdgeLengths::all(px(2.0)))
            .color(RED),
    );
    let label = tree.create_text("Hello World");
    append(&mut tree, root, &[label]);
    layout(&mut tree, root);

    let list = paint(&tree, root, &ScrollOffsets::new());
    let texts: Vec<(&str, Point, f32, &FontDescriptor, Color)> = list
        .commands()
        .iter()
        .filter_map(|command| match command {
            DisplayCommand::Text {
                text,
                position,
                baseline,
                font,
                color,
                ..
            } => Some((text.as_str(), *position, *baseline, font, *color)),
            DisplayCommand::Rect { .. } => None,
        })
        .collect();

    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].0, "Hello");
    assert_eq!(texts[0].1, Point::new(2.0, 2.0));
    assert!((texts[0].2 - 14.8).abs() < 0.01);
    assert_eq!(texts[1].0, "World");
    assert!((texts[1].1.y - 21.2).abs() < 0.01);
    assert_eq!(*texts[0].3, FontDescriptor::default());
    // Color is inherited from the container.
    assert_eq!(texts[0].4, RED);
}

#[test]
fn test_hidden_subtrees_do_not_paint() {
    let mut tree = BoxTree::new();
    let root = element(&mut tree, ElementKind::Div, filled(100.0, 100.0));
    let hidden = element(&mut tree, ElementKind::Div, filled(50.0, 10.0).hidden(true));
    let inner = element(&mut tree, ElementKind::Div, filled(20.0, 5.0));
    append(&mut tree, root, &[hidden]);
    append(&mut tree, hidden, &[inner]);
    layout(&mut tree, root);

    assert_eq!(paint(&tree, root, &ScrollOffsets::new()).len(), 1);
}

/// A transform moves the painted box and its descendants, never the
/// layout geometry.
#[test]
fn test_transforms_compose() {
    let mut tree = BoxTree::new();
    let root = element(&mut tree, ElementKind::FlexBox, StyleProperties::new());
    let moved = element(
        &mut tree,
        ElementKind::Div,
        filled(30.0, 30.0).transform(Transform::translate(10.0, 5.0)),
    );
    let inner = element(
        &mut tree,
        ElementKind::Div,
        filled(10.0, 10.0).transform(Transform::translate(1.0, 1.0)),
    );
    append(&mut tree, root, &[moved]);
    append(&mut tree, moved, &[inner]);
    layout(&mut tree, root);

    let boxes: Vec<Rect> = rects(&paint(&tree, root, &ScrollOffsets::new()))
        .into_iter()
        .map(|(rect, _)| rect)
        .collect();
    assert_eq!(
        boxes,
        vec![
            Rect::new(10.0, 5.0, 30.0, 30.0),
            Rect::new(11.0, 6.0, 10.0, 10.0),
        ]
    );
    assert_eq!(
        tree.layout(moved).unwrap().border_box,
        Rect::new(0.0, 0.0, 30.0, 30.0)
    );
}

/// Helper: a 100x50 scroll container holding five 100x20 rows (50px of
/// vertical overflow).
fn scroll_tree(tree: &mut BoxTree) -> (NodeId, Vec<NodeId>) {
    let root = element(
        tree,
        ElementKind::Div,
        filled(100.0, 50.0).overflow(Overflow::Scroll),
    );
    let rows: Vec<NodeId> = (0..5)
        .map(|_| element(tree, ElementKind::Div, filled(100.0, 20.0)))
        .collect();
    append(tree, root, &rows);
    layout(tree, root);
    (root, rows)
}

#[test]
fn test_scroll_container_clips_children() {
    let mut tree = BoxTree::new();
    let (root, _) = scroll_tree(&mut tree);
    assert_eq!(
        tree.layout(root).unwrap().scrollable_overflow,
        Size::new(0.0, 50.0)
    );

    let painted = rects(&paint(&tree, root, &ScrollOffsets::new()));
    // The container itself is not clipped by its own clip rectangle.
    assert_eq!(painted[0].1, None);
    let clip = Some(Rect::new(0.0, 0.0, 100.0, 50.0));
    for (_, row_clip) in &painted[1..] {
        assert_eq!(*row_clip, clip);
    }
}

#[test]
fn test_scroll_offset_shifts_children() {
    let mut tree = BoxTree::new();
    let (root, _) = scroll_tree(&mut tree);
    let mut scroll = ScrollOffsets::new();
    scroll.set(root, Point::new(0.0, 30.0));

    let painted = rects(&paint(&tree, root, &scroll));
    assert_eq!(painted[0].0, Rect::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(painted[1].0, Rect::new(0.0, -30.0, 100.0, 20.0));
    assert_eq!(painted[2].0, Rect::new(0.0, -10.0, 100.0, 20.0));
}

#[test]
fn test_scroll_offset_is_clamped() {
    let mut tree = BoxTree::new();
    let (root, _) = scroll_tree(&mut tree);

    let mut scroll = ScrollOffsets::new();
    scroll.set(root, Point::new(25.0, 999.0));
    let painted = rects(&paint(&tree, root, &scroll));
    // No horizontal overflow; vertical stops at 50.
    assert_eq!(painted[1].0, Rect::new(0.0, -50.0, 100.0, 20.0));

    scroll.set(root, Point::new(0.0, -40.0));
    let painted = rects(&paint(&tree, root, &scroll));
    assert_eq!(painted[1].0, Rect::new(0.0, 0.0, 100.0, 20.0));
}

/// Nested clips intersect; disjoint ones leave an empty clip.
#[test]
fn test_nested_clips_intersect() {
    let mut tree = BoxTree::new();
    let root = element(
        &mut tree,
        ElementKind::Div,
        filled(100.0, 50.0).overflow(Overflow::Clipping),
    );
    let overlapping = element(
        &mut tree,
        ElementKind::Div,
        filled(100.0, 40.0).overflow(Overflow::Clipping),
    );
    let outside = element(
        &mut tree,
        ElementKind::Div,
        filled(100.0, 10.0)
            .overflow(Overflow::Clipping)
            .margin(EdgeLengths::new(px(30.0), px(0.0), px(0.0), px(0.0))),
    );
    let inner_a = element(&mut tree, ElementKind::Div, filled(10.0, 10.0));
    let inner_b = element(&mut tree, ElementKind::Div, filled(10.0, 10.0));
    append(&mut tree, root, &[overlapping, outside]);
    append(&mut tree, overlapping, &[inner_a]);
    append(&mut tree, outside, &[inner_b]);
    layout(&mut tree, root);

    let outside_box = tree.layout(outside).unwrap().border_box;
    assert_eq!(outside_box, Rect::new(0.0, 70.0, 100.0, 10.0));

    let painted = rects(&paint(&tree, root, &ScrollOffsets::new()));
    // root, overlapping, inner_a, outside, inner_b
    assert_eq!(painted[2].1, Some(Rect::new(0.0, 0.0, 100.0, 40.0)));
    assert_eq!(painted[3].1, Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
    assert_eq!(painted[4].1, Some(Rect::new(0.0, 70.0, 0.0, 0.0)));
}
