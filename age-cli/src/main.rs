//! Age layout playground
//!
//! Builds one of the built-in scenes, lays it out against the requested
//! viewport and prints the result.
//!
//! - `age scroll` prints the laid-out box tree
//! - `age scroll --format json` dumps every node's `LayoutResult`
//! - `age scroll --format paint` dumps the display list

mod scenes;

use std::str::FromStr;

use age_layout::{
    ApproximateFontMetrics, AvailableSpace, BoxKind, BoxTree, DisplayList, LayoutResult, NodeId,
    Painter, Point, ScrollOffsets, Size, run_layout_pass,
};
use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use serde::Serialize;
use strum::IntoEnumIterator;

use scenes::Scene;

/// Age layout playground: lay out a built-in scene and inspect the result
#[derive(Parser, Debug)]
#[command(name = "age")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # List the built-in scenes
    age --list

    # Print the layout tree of a scene in an 800px wide viewport
    age justification --width 800

    # Same scene, shrink-wrapped (no available width)
    age justification

    # Dump per-node geometry as JSON
    age scroll --width 400 --height 300 --format json

    # Dump the display list with the scroll container scrolled by 50px
    age scroll --format paint --scroll-y 50
"#)]
struct Cli {
    /// Scene to lay out
    #[arg(value_name = "SCENE", required_unless_present = "list")]
    scene: Option<String>,

    /// Available width in pixels (omit for an unconstrained width)
    #[arg(long)]
    width: Option<f32>,

    /// Available height in pixels (omit for an unconstrained height)
    #[arg(long)]
    height: Option<f32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Tree)]
    format: Format,

    /// Vertical scroll offset applied to every scroll container when painting
    #[arg(long, default_value_t = 0.0)]
    scroll_y: f32,

    /// List the built-in scenes and exit
    #[arg(long)]
    list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Indented box tree with content boxes
    Tree,
    /// Per-node layout results as JSON
    Json,
    /// Display list as JSON
    Paint,
}

/// One node of the JSON dump.
#[derive(Serialize)]
struct NodeDump<'a> {
    id: String,
    element: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    layout: &'a LayoutResult,
    children: Vec<NodeDump<'a>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        for scene in Scene::iter() {
            println!("{:<14} {}", scene.bold(), scene.description());
        }
        return Ok(());
    }

    let name = cli.scene.as_deref().context("no scene given")?;
    let scene = Scene::from_str(name).map_err(|_| {
        let known: Vec<String> = Scene::iter().map(|s| s.to_string()).collect();
        anyhow!("unknown scene '{name}' (expected one of: {})", known.join(", "))
    })?;

    let (mut tree, root) = scene.build()?;
    let available = Size::new(
        AvailableSpace::from(cli.width),
        AvailableSpace::from(cli.height),
    );
    run_layout_pass(&mut tree, root, available, &ApproximateFontMetrics)?;

    match cli.format {
        Format::Tree => {
            println!(
                "=== Layout Tree ({scene}, viewport: {}x{}) ===\n",
                describe(cli.width),
                describe(cli.height)
            );
            print_layout_box(&tree, root, 0)?;
        }
        Format::Json => {
            let dump = dump_node(&tree, root)?;
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
        Format::Paint => {
            let mut scroll = ScrollOffsets::new();
            for id in tree.descendants(root)? {
                if tree.layout(id)?.scrollable_overflow != Size::ZERO {
                    scroll.set(id, Point::new(0.0, cli.scroll_y));
                }
            }
            let mut list = DisplayList::new();
            Painter::new(&tree, &scroll).paint(root, &mut list)?;
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
    }

    Ok(())
}

fn describe(extent: Option<f32>) -> String {
    extent.map_or_else(|| "auto".to_string(), |v| v.to_string())
}

/// Recursively print a node with its boxes.
fn print_layout_box(tree: &BoxTree, id: NodeId, depth: usize) -> Result<()> {
    let indent = "  ".repeat(depth);
    let layout = tree.layout(id)?;
    let style = tree.computed_style(id)?;

    let name = match tree.kind(id)? {
        BoxKind::Container => format!("{} ({id})", tree.element(id)?),
        BoxKind::TextRun => {
            let text = tree.text(id)?;
            let preview: String = text.chars().take(30).collect::<String>().replace('\n', "\\n");
            let suffix = if text.chars().count() > 30 { "..." } else { "" };
            format!("Text(\"{preview}{suffix}\") ({id})")
        }
    };

    if style.hidden {
        println!("{indent}[{}] {}", name.dimmed(), "hidden".dimmed());
        return Ok(());
    }

    println!("{indent}[{}]", name.cyan());
    let c = layout.content_box;
    println!(
        "{indent}  content: x={:.1} y={:.1} w={:.1} h={:.1}",
        c.x, c.y, c.width, c.height
    );
    let b = layout.border_box;
    if b != c {
        println!(
            "{indent}  border:  x={:.1} y={:.1} w={:.1} h={:.1}",
            b.x, b.y, b.width, b.height
        );
    }
    let m = layout.margin;
    if m.top != 0.0 || m.right != 0.0 || m.bottom != 0.0 || m.left != 0.0 {
        println!(
            "{indent}  margin: t={:.1} r={:.1} b={:.1} l={:.1}",
            m.top, m.right, m.bottom, m.left
        );
    }
    println!(
        "{indent}  intrinsic: min={:.1}x{:.1} preferred={:.1}x{:.1} baseline={:.1}",
        layout.intrinsic_min_size.width,
        layout.intrinsic_min_size.height,
        layout.intrinsic_preferred_size.width,
        layout.intrinsic_preferred_size.height,
        layout.baseline
    );
    if let Some(clip) = layout.clip_rect {
        println!(
            "{indent}  {} x={:.1} y={:.1} w={:.1} h={:.1}",
            "clip:".yellow(),
            clip.x,
            clip.y,
            clip.width,
            clip.height
        );
    }
    let overflow = layout.scrollable_overflow;
    if overflow != Size::ZERO {
        println!(
            "{indent}  {} {:.1}x{:.1}",
            "scrollable:".yellow(),
            overflow.width,
            overflow.height
        );
    }
    for line in &layout.lines {
        println!(
            "{indent}  {} {:?} at x={:.1} y={:.1} w={:.1}",
            "line".green(),
            line.text,
            line.rect.x,
            line.rect.y,
            line.rect.width
        );
    }

    for &child in tree.children(id)? {
        print_layout_box(tree, child, depth + 1)?;
    }
    Ok(())
}

fn dump_node(tree: &BoxTree, id: NodeId) -> Result<NodeDump<'_>> {
    let text = match tree.kind(id)? {
        BoxKind::TextRun => Some(tree.text(id)?),
        BoxKind::Container => None,
    };
    let children = tree
        .children(id)?
        .iter()
        .map(|&child| dump_node(tree, child))
        .collect::<Result<Vec<_>>>()?;
    Ok(NodeDump {
        id: id.to_string(),
        element: tree.element(id)?.to_string(),
        text,
        layout: tree.layout(id)?,
        children,
    })
}
