//! Draw operation renderer
//!
//! Mechanical binding from a composed [`DrawOpList`] onto an
//! `embedded-graphics` draw target. Style features the target cannot
//! express degrade gracefully: gradients collapse to their start color,
//! blur and dash carry through the descriptors but are not rasterized
//! here. All layout and gating invariants live in the composer.

use embedded_graphics::{
    geometry::Angle,
    mono_font::{
        ascii::{FONT_6X12, FONT_6X13},
        MonoTextStyle,
    },
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Arc, Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use libm::roundf;

use crate::draw::{DrawOp, DrawOpList};
use crate::layout::RectF;
use crate::style::{StrokeStyle, TextStyle};

/// Draw every operation of a frame, in order.
pub fn render_ops<D>(ops: &DrawOpList, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for op in ops {
        match op {
            DrawOp::Clear(color) => target.clear(*color)?,
            DrawOp::Line { from, to, style } => {
                Line::new(point(*from), point(*to))
                    .into_styled(stroke(style))
                    .draw(target)?;
            }
            DrawOp::Arc {
                bounds,
                start,
                sweep,
                style,
            } => {
                Arc::new(
                    point((bounds.left, bounds.top)),
                    roundf(bounds.width()) as u32,
                    Angle::from_degrees(*start),
                    Angle::from_degrees(*sweep),
                )
                .into_styled(stroke(style))
                .draw(target)?;
            }
            DrawOp::Rect { rect, style } => {
                rectangle(rect).into_styled(stroke(style)).draw(target)?;
            }
            DrawOp::Text {
                text,
                origin,
                style,
            } => {
                Text::new(text, point(*origin), glyphs(style)).draw(target)?;
            }
        }
    }
    Ok(())
}

fn point(p: (f32, f32)) -> Point {
    Point::new(roundf(p.0) as i32, roundf(p.1) as i32)
}

fn rectangle(rect: &RectF) -> Rectangle {
    Rectangle::new(
        point((rect.left, rect.top)),
        Size::new(
            roundf(rect.width()).max(0.0) as u32,
            roundf(rect.height()).max(0.0) as u32,
        ),
    )
}

fn stroke(style: &StrokeStyle) -> PrimitiveStyle<Rgb565> {
    let color = style.gradient.map(|g| g.start).unwrap_or(style.color);
    PrimitiveStyle::with_stroke(color, roundf(style.width) as u32)
}

fn glyphs(style: &TextStyle) -> MonoTextStyle<'static, Rgb565> {
    if style.size >= 13 {
        MonoTextStyle::new(&FONT_6X13, style.color)
    } else {
        MonoTextStyle::new(&FONT_6X12, style.color)
    }
}
