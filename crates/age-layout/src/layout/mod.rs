//! Layout engine.
//!
//! # Relevant Specifications
//!
//! - [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//! - [CSS Flexible Box Layout Module Level 1](https://www.w3.org/TR/css-flexbox-1/)
//! - [CSS Intrinsic & Extrinsic Sizing Module Level 3](https://www.w3.org/TR/css-sizing-3/)
//! - [CSS Text Module Level 3](https://www.w3.org/TR/css-text-3/)
//! - [CSS Overflow Module Level 3](https://www.w3.org/TR/css-overflow-3/)
//!
//! # Module Structure
//!
//! - [`box_model`] - Box dimensions, rectangles, points, and edge sizes
//! - [`values`] - Axes and available space
//! - [`text`] - Font metrics, text runs, and line breaking
//! - [`result`] - Per-node layout output
//! - `intrinsic` - Bottom-up min/preferred sizing
//! - `flex` - Main-axis distribution, justification, cross-axis alignment
//! - `baseline` - Shared baselines per stacking line
//! - `overflow` - Absolute coordinates, clip rectangles, scrollable overflow
//! - `pass` - The [`run_layout_pass`] entry point

pub mod box_model;
pub mod result;
pub mod text;
pub mod values;

mod baseline;
mod flex;
mod intrinsic;
mod overflow;
mod pass;
mod sizing;

pub use box_model::{BoxDimensions, EdgeSizes, Point, Rect, Size};
pub use flex::compute_justify_offsets;
pub use overflow::scrollable_overflow;
pub use pass::run_layout_pass;
pub use result::{IntrinsicSizes, LayoutResult, TextLine};
pub use text::{ApproximateFontMetrics, FontMetrics, LineSpan, TextMetrics, TextRun};
pub use values::{AvailableSpace, Axis};
