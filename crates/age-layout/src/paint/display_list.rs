//! Display List - a recorded sequence of drawing commands
//!
//! [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html)

use serde::Serialize;

use crate::layout::{Point, Rect};
use crate::style::{Border, Color, FontDescriptor};

use super::Renderer;

/// A single drawing command.
///
/// Commands are recorded in painting order (back to front).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DisplayCommand {
    /// A box with optional background and border.
    Rect {
        /// The border box.
        border_box: Rect,
        /// Border sides to stroke inside the border box.
        border: Border,
        /// Fill for the border box, if any.
        background: Option<Color>,
        /// Active clip rectangle.
        clip: Option<Rect>,
    },

    /// One line of text.
    Text {
        /// The characters to draw.
        text: String,
        /// Top-left corner of the line box.
        position: Point,
        /// Absolute y of the baseline.
        baseline: f32,
        /// Font to draw with.
        font: FontDescriptor,
        /// Text color.
        color: Color,
        /// Active clip rectangle.
        clip: Option<Rect>,
    },
}

/// A list of drawing commands in painting order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the display list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Get the commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Get the number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Renderer for DisplayList {
    fn draw_rect(
        &mut self,
        border_box: Rect,
        border: &Border,
        background: Option<Color>,
        clip: Option<Rect>,
    ) {
        self.push(DisplayCommand::Rect {
            border_box,
            border: *border,
            background,
            clip,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        baseline: f32,
        font: &FontDescriptor,
        color: Color,
        clip: Option<Rect>,
    ) {
        self.push(DisplayCommand::Text {
            text: text.to_owned(),
            position,
            baseline,
            font: font.clone(),
            color,
            clip,
        });
    }
}
