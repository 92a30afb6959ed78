//! Draw operations emitted by the frame composer
//!
//! A bounded, ordered list of primitive operations; the renderer binds them
//! to a concrete drawing surface. Keeping the list first-class keeps the
//! composer pure and lets tests assert on exactly what a frame contains.

use embedded_graphics::pixelcolor::Rgb565;
use heapless::{String, Vec};

use crate::layout::RectF;
use crate::style::{StrokeStyle, TextStyle};

/// Upper bound on operations in one frame: background, 12 ticks, seconds
/// arc, two date fragments, date box, three battery ops, two hands.
pub const MAX_DRAW_OPS: usize = 24;

/// One frame's worth of draw operations, in paint order.
pub type DrawOpList = Vec<DrawOp, MAX_DRAW_OPS>;

/// A primitive drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill the whole surface with a color.
    Clear(Rgb565),
    /// Stroked line between two points.
    Line {
        from: (f32, f32),
        to: (f32, f32),
        style: StrokeStyle,
    },
    /// Stroked arc inside `bounds`, angles in degrees, 12 o'clock start
    /// is `start = -90`.
    Arc {
        bounds: RectF,
        start: f32,
        sweep: f32,
        style: StrokeStyle,
    },
    /// Stroked rectangle outline.
    Rect { rect: RectF, style: StrokeStyle },
    /// Text drawn with its baseline origin at `origin`.
    Text {
        text: String<16>,
        origin: (f32, f32),
        style: TextStyle,
    },
}

impl DrawOp {
    pub fn is_line(&self) -> bool {
        matches!(self, DrawOp::Line { .. })
    }

    pub fn is_arc(&self) -> bool {
        matches!(self, DrawOp::Arc { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, DrawOp::Text { .. })
    }
}
