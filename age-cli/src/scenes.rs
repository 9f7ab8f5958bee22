//! Built-in playground scenes.
//!
//! Each scene builds a small box tree that exercises one part of the
//! engine and returns it with its root.

use age_layout::style::{Border, BorderSide, Color, EdgeLengths};
use age_layout::{
    Alignment, BoxSizing, BoxTree, ContentJustification, ElementKind, NodeId, Overflow, PseudoState, Result,
    StyleProperties, TextWrap, percent, px,
};
use strum_macros::{Display, EnumIter, EnumString};

/// A named scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Scene {
    /// Five rows, one per spacing mode of `ContentJustification`.
    Justification,
    /// Mixed font sizes aligned on a shared baseline.
    Baseline,
    /// A paragraph wrapping inside a narrow column.
    Wrapping,
    /// A scroll container holding more content than fits.
    Scroll,
    /// Percentage, pixel and content sizes mixed in one row.
    MixedSizing,
    /// A button whose hover and active styles are switched on.
    PseudoStates,
}

impl Scene {
    /// One line describing the scene.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Justification => "start / center / end / space-between / space-around / space-evenly rows",
            Self::Baseline => "text runs of 12, 24 and 36px sharing one baseline",
            Self::Wrapping => "greedy line breaking at whitespace inside a 160px column",
            Self::Scroll => "a 120px scroll container with 300px of content",
            Self::MixedSizing => "50% + 80px + auto children with border-box sizing",
            Self::PseudoStates => "hover and active overrides merged over a base style",
        }
    }

    /// Build the scene's tree.
    ///
    /// # Errors
    ///
    /// Only on a broken tree operation, which the scenes never perform.
    pub fn build(self) -> Result<(BoxTree, NodeId)> {
        let mut tree = BoxTree::new();
        let root = tree.create_element(ElementKind::Div);
        let _ = tree.set_style(
            root,
            StyleProperties::new()
                .padding(EdgeLengths::all(px(8.0)))
                .background_color(Color::WHITE),
        )?;
        match self {
            Self::Justification => build_justification(&mut tree, root)?,
            Self::Baseline => build_baseline(&mut tree, root)?,
            Self::Wrapping => build_wrapping(&mut tree, root)?,
            Self::Scroll => build_scroll(&mut tree, root)?,
            Self::MixedSizing => build_mixed_sizing(&mut tree, root)?,
            Self::PseudoStates => build_pseudo_states(&mut tree, root)?,
        }
        Ok((tree, root))
    }
}

fn swatch(tree: &mut BoxTree, color: Color, width: f32, height: f32) -> Result<NodeId> {
    let node = tree.create_element(ElementKind::Div);
    let _ = tree.set_style(
        node,
        StyleProperties::new()
            .size(px(width), px(height))
            .background_color(color),
    )?;
    Ok(node)
}

fn build_justification(tree: &mut BoxTree, root: NodeId) -> Result<()> {
    let modes = [
        ContentJustification::Start,
        ContentJustification::Center,
        ContentJustification::End,
        ContentJustification::SpaceBetween,
        ContentJustification::SpaceAround,
        ContentJustification::SpaceEvenly,
    ];
    for mode in modes {
        let row = tree.create_element(ElementKind::FlexBox);
        let _ = tree.set_style(
            row,
            StyleProperties::new()
                .width(px(300.0))
                .margin(EdgeLengths::new(px(0.0), px(0.0), px(4.0), px(0.0)))
                .content_justification(mode)
                .border(Border::uniform(1.0, Color::rgb(0x99, 0x99, 0x99))),
        )?;
        for color in [Color::rgb(0xe7, 0x4c, 0x3c), Color::rgb(0x2e, 0xcc, 0x71), Color::rgb(0x34, 0x98, 0xdb)] {
            let cell = swatch(tree, color, 40.0, 20.0)?;
            let _ = tree.append_child(row, cell)?;
        }
        let _ = tree.append_child(root, row)?;
    }
    Ok(())
}

fn build_baseline(tree: &mut BoxTree, root: NodeId) -> Result<()> {
    let row = tree.create_element(ElementKind::FlexBox);
    let _ = tree.set_style(
        row,
        StyleProperties::new().items_alignment(Alignment::Baseline),
    )?;
    for (text, size) in [("Small", 12.0), ("Medium", 24.0), ("Large", 36.0)] {
        let run = tree.create_text(text);
        let _ = tree.set_style(
            run,
            StyleProperties::new()
                .font_size(size)
                .padding(EdgeLengths::symmetric(px(0.0), px(4.0))),
        )?;
        let _ = tree.append_child(row, run)?;
    }
    let top = tree.create_text("top");
    let _ = tree.set_style(top, StyleProperties::new().alignment(Alignment::Top))?;
    let _ = tree.append_child(row, top)?;
    let _ = tree.append_child(root, row)?;
    Ok(())
}

fn build_wrapping(tree: &mut BoxTree, root: NodeId) -> Result<()> {
    let column = tree.create_element(ElementKind::Div);
    let _ = tree.set_style(
        column,
        StyleProperties::new()
            .width(px(160.0))
            .border(Border::uniform(1.0, Color::BLACK)),
    )?;
    let paragraph = tree.create_text(
        "The quick brown fox jumps over the lazy dog.\nA forced break starts this line.",
    );
    let _ = tree.append_child(column, paragraph)?;
    let unwrapped = tree.create_text("This line never wraps inside the column");
    let _ = tree.set_style(unwrapped, StyleProperties::new().text_wrap(TextWrap::NoWrap))?;
    let _ = tree.append_child(column, unwrapped)?;
    let _ = tree.append_child(root, column)?;
    Ok(())
}

fn build_scroll(tree: &mut BoxTree, root: NodeId) -> Result<()> {
    let viewport = tree.create_element(ElementKind::Div);
    let _ = tree.set_style(
        viewport,
        StyleProperties::new()
            .size(px(200.0), px(120.0))
            .overflow(Overflow::Scroll)
            .border(Border::all(BorderSide::new(2.0, Color::BLACK)).with_radius(6.0)),
    )?;
    for i in 0..5_u8 {
        let item = swatch(tree, Color::rgb(40 * i, 120, 200), 180.0, 60.0)?;
        let _ = tree.append_child(viewport, item)?;
    }
    let _ = tree.append_child(root, viewport)?;
    Ok(())
}

fn build_mixed_sizing(tree: &mut BoxTree, root: NodeId) -> Result<()> {
    let row = tree.create_element(ElementKind::FlexBox);
    let _ = tree.set_style(
        row,
        StyleProperties::new()
            .width(px(400.0))
            .content_justification(ContentJustification::SpaceBetween),
    )?;
    let half = tree.create_element(ElementKind::Div);
    let _ = tree.set_style(
        half,
        StyleProperties::new()
            .width(percent(50.0))
            .height(px(40.0))
            .box_sizing(BoxSizing::Border)
            .padding(EdgeLengths::all(px(10.0)))
            .background_color(Color::rgb(0xf1, 0xc4, 0x0f)),
    )?;
    let fixed = swatch(tree, Color::rgb(0x9b, 0x59, 0xb6), 80.0, 40.0)?;
    let auto = tree.create_text("auto width");
    for child in [half, fixed, auto] {
        let _ = tree.append_child(row, child)?;
    }
    let _ = tree.append_child(root, row)?;
    Ok(())
}

fn build_pseudo_states(tree: &mut BoxTree, root: NodeId) -> Result<()> {
    let button = tree.create_element(ElementKind::FlexBox);
    let _ = tree.set_style(
        button,
        StyleProperties::new()
            .padding(EdgeLengths::symmetric(px(6.0), px(12.0)))
            .background_color(Color::rgb(0xdd, 0xdd, 0xdd))
            .alignment(Alignment::Start),
    )?;
    let _ = tree.set_state_style(
        button,
        PseudoState::Hover,
        Some(
            StyleProperties::new()
                .background_color(Color::rgb(0xbb, 0xbb, 0xff))
                .padding(EdgeLengths::symmetric(px(8.0), px(16.0))),
        ),
    )?;
    let _ = tree.set_state_style(
        button,
        PseudoState::Active,
        Some(StyleProperties::new().background_color(Color::rgb(0x88, 0x88, 0xff))),
    )?;
    let label = tree.create_text("Press me");
    let _ = tree.append_child(button, label)?;
    let _ = tree.append_child(root, button)?;
    let _ = tree.set_pseudo_state(button, PseudoState::Hover, true)?;
    let _ = tree.set_pseudo_state(button, PseudoState::Active, true)?;
    Ok(())
}
