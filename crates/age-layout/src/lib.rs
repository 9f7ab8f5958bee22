//! Box layout and style resolution for the Age UI toolkit.
//!
//! Applications build a [`BoxTree`] of `Div`/`FlexBox` containers and
//! `Span` text runs, attach sparse [`StyleProperties`] (with optional
//! Hover/Focus/Active overrides), and call [`run_layout_pass`] with the
//! viewport's available space. Every node then carries a [`LayoutResult`]
//! in absolute pixels, which a [`Painter`] hands to a [`Renderer`].
//!
//! ```
//! use age_layout::{
//!     ApproximateFontMetrics, AvailableSpace, BoxTree, ElementKind, Size, StyleProperties,
//!     px, run_layout_pass,
//! };
//!
//! let mut tree = BoxTree::new();
//! let root = tree.create_element(ElementKind::FlexBox);
//! let label = tree.create_text("Hello");
//! tree.append_child(root, label).unwrap();
//! tree.set_style(root, StyleProperties::new().padding(age_layout::style::EdgeLengths::all(px(4.0))))
//!     .unwrap();
//!
//! let available = Size::new(AvailableSpace::Definite(200.0), AvailableSpace::Indefinite);
//! run_layout_pass(&mut tree, root, available, &ApproximateFontMetrics).unwrap();
//!
//! let label_box = tree.layout(label).unwrap().border_box;
//! assert_eq!((label_box.x, label_box.y), (4.0, 4.0));
//! ```

pub mod element;
pub mod error;
pub mod layout;
pub mod paint;
pub mod style;
pub mod tree;

pub use element::{BoxKind, ElementKind, default_style_for_element};
pub use error::{LayoutError, Result};
pub use layout::{
    ApproximateFontMetrics, AvailableSpace, Axis, EdgeSizes, FontMetrics, IntrinsicSizes,
    LayoutResult, Point, Rect, Size, TextLine, TextMetrics, compute_justify_offsets,
    run_layout_pass, scrollable_overflow,
};
pub use paint::{DisplayCommand, DisplayList, Painter, Renderer, ScrollOffsets};
pub use style::{
    Alignment, BoxSizing, ContentJustification, EffectiveStyle, Length, Overflow, PseudoState,
    StackDirection, StyleProperties, TextWrap, percent, px, resolve_style,
};
pub use tree::{BoxTree, NodeId};
