//! Integration tests for the box tree: structure, handles and dirty tracking.

use age_layout::{
    ApproximateFontMetrics, AvailableSpace, BoxKind, BoxTree, ElementKind, LayoutError, NodeId,
    Size, StyleProperties, px, run_layout_pass,
};

fn definite(width: f32, height: f32) -> Size<AvailableSpace> {
    Size::new(AvailableSpace::Definite(width), AvailableSpace::Definite(height))
}

/// Helper: a Div root with `n` Div children.
fn root_with_children(tree: &mut BoxTree, n: usize) -> (NodeId, Vec<NodeId>) {
    let root = tree.create_element(ElementKind::Div);
    let children: Vec<NodeId> = (0..n)
        .map(|_| {
            let child = tree.create_element(ElementKind::Div);
            let _ = tree.append_child(root, child).unwrap();
            child
        })
        .collect();
    (root, children)
}

#[test]
fn test_append_and_navigate() {
    let mut tree = BoxTree::new();
    let (root, children) = root_with_children(&mut tree, 3);

    assert_eq!(tree.len(), 4);
    assert_eq!(tree.children(root).unwrap(), children.as_slice());
    assert_eq!(tree.parent(children[1]).unwrap(), Some(root));
    assert_eq!(tree.parent(root).unwrap(), None);
    assert_eq!(tree.kind(root).unwrap(), BoxKind::Container);
    assert_eq!(tree.element(root).unwrap(), ElementKind::Div);
}

#[test]
fn test_insert_before() {
    let mut tree = BoxTree::new();
    let (root, children) = root_with_children(&mut tree, 2);
    let inserted = tree.create_text("middle");

    assert!(tree.insert_before(root, inserted, children[1]).unwrap());
    assert_eq!(
        tree.children(root).unwrap(),
        &[children[0], inserted, children[1]]
    );
}

#[test]
fn test_insert_before_unknown_reference() {
    let mut tree = BoxTree::new();
    let (root, _) = root_with_children(&mut tree, 1);
    let stranger = tree.create_element(ElementKind::Div);
    let child = tree.create_element(ElementKind::Div);

    assert_eq!(
        tree.insert_before(root, child, stranger),
        Err(LayoutError::NotAChild {
            parent: root,
            child: stranger
        })
    );
    // The failed insertion left the child detached.
    assert_eq!(tree.parent(child).unwrap(), None);
}

#[test]
fn test_text_runs_cannot_own_children() {
    let mut tree = BoxTree::new();
    let label = tree.create_text("leaf");
    let child = tree.create_element(ElementKind::Div);
    assert_eq!(
        tree.append_child(label, child),
        Err(LayoutError::NotAContainer(label))
    );
}

#[test]
fn test_text_accessors() {
    let mut tree = BoxTree::new();
    let label = tree.create_text("before");
    let container = tree.create_element(ElementKind::FlexBox);

    assert_eq!(tree.text(label).unwrap(), "before");
    assert!(tree.set_text(label, "after").unwrap());
    assert!(!tree.set_text(label, "after").unwrap());
    assert_eq!(tree.text(label).unwrap(), "after");
    assert_eq!(tree.text(container), Err(LayoutError::NotAText(container)));
}

#[test]
fn test_attach_twice_is_rejected() {
    let mut tree = BoxTree::new();
    let (root, children) = root_with_children(&mut tree, 1);
    let other = tree.create_element(ElementKind::Div);

    assert_eq!(
        tree.append_child(other, children[0]),
        Err(LayoutError::AlreadyAttached(children[0]))
    );
    assert_eq!(tree.parent(children[0]).unwrap(), Some(root));
}

#[test]
fn test_cycles_are_rejected() {
    let mut tree = BoxTree::new();
    let root = tree.create_element(ElementKind::Div);
    let middle = tree.create_element(ElementKind::Div);
    let leaf = tree.create_element(ElementKind::Div);
    let _ = tree.append_child(root, middle).unwrap();
    let _ = tree.append_child(middle, leaf).unwrap();

    assert_eq!(
        tree.append_child(leaf, root),
        Err(LayoutError::WouldCreateCycle {
            parent: leaf,
            child: root
        })
    );
    let lonely = tree.create_element(ElementKind::Div);
    assert_eq!(
        tree.append_child(lonely, lonely),
        Err(LayoutError::WouldCreateCycle {
            parent: lonely,
            child: lonely
        })
    );
}

#[test]
fn test_remove_frees_the_subtree() {
    let mut tree = BoxTree::new();
    let (root, children) = root_with_children(&mut tree, 2);
    let grandchild = tree.create_text("deep");
    let _ = tree.append_child(children[0], grandchild).unwrap();

    tree.remove(children[0]).unwrap();

    assert_eq!(tree.children(root).unwrap(), &[children[1]]);
    assert_eq!(tree.len(), 2);
    assert!(!tree.contains(children[0]));
    assert_eq!(
        tree.layout(grandchild),
        Err(LayoutError::NodeFreed(grandchild))
    );
}

#[test]
fn test_stale_handle_does_not_alias_reused_slot() {
    let mut tree = BoxTree::new();
    let first = tree.create_element(ElementKind::Div);
    tree.remove(first).unwrap();
    let second = tree.create_element(ElementKind::Span);

    assert_eq!(first.index(), second.index());
    assert_ne!(first, second);
    assert_eq!(tree.element(first), Err(LayoutError::NodeFreed(first)));
    assert_eq!(tree.element(second).unwrap(), ElementKind::Span);
}

#[test]
fn test_foreign_handle_is_unknown() {
    let mut big = BoxTree::new();
    for _ in 0..3 {
        let _ = big.create_element(ElementKind::Div);
    }
    let foreign = big.create_element(ElementKind::Div);
    let small = BoxTree::new();
    assert_eq!(small.parent(foreign), Err(LayoutError::UnknownNode(foreign)));
}

#[test]
fn test_node_id_display() {
    let mut tree = BoxTree::new();
    let id = tree.create_element(ElementKind::Div);
    assert_eq!(id.to_string(), "#0v0");
    tree.remove(id).unwrap();
    let reused = tree.create_element(ElementKind::Div);
    assert_eq!(reused.to_string(), "#0v1");
}

#[test]
fn test_descendants_and_ancestors() {
    let mut tree = BoxTree::new();
    let (root, children) = root_with_children(&mut tree, 2);
    let grandchild = tree.create_text("x");
    let _ = tree.append_child(children[0], grandchild).unwrap();

    let order: Vec<NodeId> = tree.descendants(root).unwrap().collect();
    assert_eq!(order, vec![root, children[0], grandchild, children[1]]);

    let up: Vec<NodeId> = tree.ancestors(grandchild).unwrap().collect();
    assert_eq!(up, vec![children[0], root]);
}

#[test]
fn test_layout_must_start_at_root() {
    let mut tree = BoxTree::new();
    let (_, children) = root_with_children(&mut tree, 1);
    let available = definite(100.0, 100.0);

    assert_eq!(
        run_layout_pass(&mut tree, children[0], available, &ApproximateFontMetrics),
        Err(LayoutError::NotARoot(children[0]))
    );
    assert_eq!(
        tree.needs_layout(children[0], available),
        Err(LayoutError::NotARoot(children[0]))
    );
}

#[test]
fn test_dirty_tracking() {
    let mut tree = BoxTree::new();
    let (root, children) = root_with_children(&mut tree, 2);
    let available = definite(100.0, 100.0);

    assert!(tree.needs_layout(root, available).unwrap());
    run_layout_pass(&mut tree, root, available, &ApproximateFontMetrics).unwrap();
    assert!(!tree.needs_layout(root, available).unwrap());
    assert!(!tree.is_dirty(children[1]).unwrap());

    // New available space means a new pass.
    assert!(tree.needs_layout(root, definite(120.0, 100.0)).unwrap());

    // Setting an identical style is not a change.
    assert!(!tree.set_style(children[1], StyleProperties::new()).unwrap());
    assert!(!tree.needs_layout(root, available).unwrap());

    // A change on a leaf dirties the path up to the root, not the siblings.
    assert!(
        tree.set_style(children[1], StyleProperties::new().height(px(10.0)))
            .unwrap()
    );
    assert!(tree.is_dirty(children[1]).unwrap());
    assert!(tree.is_dirty(root).unwrap());
    assert!(!tree.is_dirty(children[0]).unwrap());
    assert!(tree.needs_layout(root, available).unwrap());

    run_layout_pass(&mut tree, root, available, &ApproximateFontMetrics).unwrap();
    assert!(!tree.is_dirty(root).unwrap());
    assert_eq!(tree.layout(children[1]).unwrap().border_box.height, 10.0);
}

#[test]
fn test_structural_changes_dirty_the_parent() {
    let mut tree = BoxTree::new();
    let (root, children) = root_with_children(&mut tree, 2);
    let available = definite(100.0, 100.0);
    run_layout_pass(&mut tree, root, available, &ApproximateFontMetrics).unwrap();

    assert!(tree.remove_child(root, children[0]).unwrap());
    assert!(tree.needs_layout(root, available).unwrap());
    run_layout_pass(&mut tree, root, available, &ApproximateFontMetrics).unwrap();

    let late = tree.create_text("late");
    assert!(tree.append_child(children[1], late).unwrap());
    assert!(tree.is_dirty(root).unwrap());
}

#[test]
fn test_computed_style_updates_after_pass() {
    let mut tree = BoxTree::new();
    let (root, children) = root_with_children(&mut tree, 1);
    let available = definite(100.0, 100.0);
    let _ = tree
        .set_style(root, StyleProperties::new().font_size(20.0))
        .unwrap();

    // Before the pass only `effective_style` sees the change.
    assert_eq!(tree.effective_style(children[0]).unwrap().font.size, 20.0);
    assert_eq!(tree.computed_style(children[0]).unwrap().font.size, 16.0);

    run_layout_pass(&mut tree, root, available, &ApproximateFontMetrics).unwrap();
    assert_eq!(tree.computed_style(children[0]).unwrap().font.size, 20.0);
}
