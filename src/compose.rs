//! Frame composer
//!
//! Pure function from the current clock reading, battery state and cached
//! layout to the ordered draw operations of one frame. Ambient mode gates
//! everything except the background and the two hands.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use libm::{cosf, sinf};

use crate::angle::{degrees_from_twelve, sweep_angle};
use crate::battery::BatteryState;
use crate::draw::{DrawOp, DrawOpList};
use crate::layout::{battery_label, FaceLayout, ScreenGeometry};
use crate::style::{self, hand_palette, StrokeStyle};
use crate::time::ClockReading;

/// Radial distance of the tick outer endpoint from the screen edge.
const TICK_OUTER_INSET: f32 = 15.0;
/// Radial distance of the tick inner endpoint from the screen edge.
const TICK_INNER_INSET: f32 = 25.0;

/// Hand length offsets from the center, relative to `centerX` only.
/// On a non-square surface this is asymmetric; preserved deliberately.
const MINUTE_HAND_INSET: f32 = 40.0;
const HOUR_HAND_INSET: f32 = 80.0;

/// Compose the draw operations for one frame.
pub fn compose(
    reading: &ClockReading,
    battery: BatteryState,
    ambient: bool,
    geometry: ScreenGeometry,
    layout: &FaceLayout,
) -> DrawOpList {
    let mut ops = DrawOpList::new();
    let center_x = geometry.center_x();
    let center_y = geometry.center_y();

    let _ = ops.push(DrawOp::Clear(Rgb565::BLACK));

    // Everything except the hands is suppressed in ambient mode to spare
    // the battery.
    if !ambient {
        for i in 1..=12 {
            let tick_angle = sweep_angle(i as f32, 12.0);
            let (sin, cos) = (sinf(tick_angle), cosf(tick_angle));
            let _ = ops.push(DrawOp::Line {
                from: (
                    center_x + sin * (center_x - TICK_OUTER_INSET),
                    center_y - cos * (center_y - TICK_OUTER_INSET),
                ),
                to: (
                    center_x + sin * (center_x - TICK_INNER_INSET),
                    center_y - cos * (center_y - TICK_INNER_INSET),
                ),
                style: style::TICK_STROKE,
            });
        }

        // Seconds are a progress arc from 12 o'clock, not a hand.
        let second_sweep = degrees_from_twelve(sweep_angle(reading.second, 60.0));
        let _ = ops.push(DrawOp::Arc {
            bounds: layout.second_arc_bounds,
            start: -90.0,
            sweep: second_sweep,
            style: layout.second_arc_style,
        });

        let _ = ops.push(DrawOp::Text {
            text: layout.date_white.clone(),
            origin: layout.date_white_origin,
            style: layout.date_white_style,
        });
        let _ = ops.push(DrawOp::Text {
            text: layout.date_cyan.clone(),
            origin: layout.date_cyan_origin,
            style: layout.date_cyan_style,
        });
        let _ = ops.push(DrawOp::Rect {
            rect: layout.date_box,
            style: layout.date_box_style,
        });

        // No reading yet means no battery visuals at all; an empty battery
        // and "unknown" must not look alike.
        if let Some(level) = battery.percent() {
            // The sweep tracks the live level, which may have moved since
            // the layout snapshot.
            let battery_sweep = degrees_from_twelve(sweep_angle(level as f32, 100.0));
            let _ = ops.push(DrawOp::Arc {
                bounds: layout.battery_frame,
                start: 0.0,
                sweep: 360.0,
                style: style::BATTERY_FRAME_STROKE,
            });
            let _ = ops.push(DrawOp::Arc {
                bounds: layout.battery_box,
                start: -90.0,
                sweep: battery_sweep,
                style: layout.battery_arc_style,
            });
            let _ = ops.push(DrawOp::Text {
                text: battery_label(Some(level)),
                origin: layout.battery_text_origin,
                style: style::BATTERY_TEXT,
            });
        }
    }

    let palette = hand_palette(ambient);
    let _ = ops.push(hand(
        center_x,
        center_y,
        sweep_angle(reading.minute, 60.0),
        center_x - MINUTE_HAND_INSET,
        palette.minute,
    ));
    let _ = ops.push(hand(
        center_x,
        center_y,
        sweep_angle(reading.hour, 12.0),
        center_x - HOUR_HAND_INSET,
        palette.hour,
    ));

    ops
}

fn hand(center_x: f32, center_y: f32, angle: f32, length: f32, style: StrokeStyle) -> DrawOp {
    DrawOp::Line {
        from: (center_x, center_y),
        to: (
            center_x + sinf(angle) * length,
            center_y - cosf(angle) * length,
        ),
        style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{AMBIENT_HANDS, INTERACTIVE_HANDS};
    use crate::time::DateStamp;
    use chrono::Weekday;

    fn fixture(width: i32, height: i32) -> (ScreenGeometry, FaceLayout) {
        let geometry = ScreenGeometry::new(width, height).unwrap();
        let mut battery = BatteryState::unknown();
        battery.update(45);
        let date = DateStamp {
            weekday: Weekday::Sat,
            day: 29,
            month0: 7,
            year: 2026,
        };
        let layout = FaceLayout::compute(geometry, battery, date);
        (geometry, layout)
    }

    fn reading() -> ClockReading {
        // 14:07:30.500
        let second = 30.5;
        let minute = 7.0 + second / 60.0;
        ClockReading {
            hour: 2.0 + minute / 60.0,
            minute,
            second,
        }
    }

    fn battery(level: u8) -> BatteryState {
        let mut state = BatteryState::unknown();
        state.update(level);
        state
    }

    #[test]
    fn frame_starts_with_background_clear() {
        let (geometry, layout) = fixture(320, 320);
        let ops = compose(&reading(), battery(45), false, geometry, &layout);
        assert_eq!(ops[0], DrawOp::Clear(Rgb565::BLACK));
    }

    #[test]
    fn ambient_frame_is_hands_only() {
        let (geometry, layout) = fixture(320, 320);
        let ops = compose(&reading(), battery(45), true, geometry, &layout);

        // Background clear plus exactly the two hand lines.
        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0], DrawOp::Clear(Rgb565::BLACK));
        assert!(ops[1].is_line() && ops[2].is_line());
        assert!(!ops.iter().any(|op| op.is_arc() || op.is_text()));

        match (&ops[1], &ops[2]) {
            (DrawOp::Line { style: minute, .. }, DrawOp::Line { style: hour, .. }) => {
                assert_eq!(*minute, AMBIENT_HANDS.minute);
                assert_eq!(*hour, AMBIENT_HANDS.hour);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn interactive_frame_contains_every_element() {
        let (geometry, layout) = fixture(320, 320);
        let ops = compose(&reading(), battery(45), false, geometry, &layout);

        // clear + 12 ticks + seconds arc + 2 date texts + date box
        // + battery frame/arc/text + 2 hands
        assert_eq!(ops.len(), 22);
        assert_eq!(ops.iter().filter(|op| op.is_arc()).count(), 3);
        assert_eq!(ops.iter().filter(|op| op.is_text()).count(), 3);
        // 12 ticks and 2 hands
        assert_eq!(ops.iter().filter(|op| op.is_line()).count(), 14);

        match (&ops[ops.len() - 2], &ops[ops.len() - 1]) {
            (DrawOp::Line { style: minute, .. }, DrawOp::Line { style: hour, .. }) => {
                assert_eq!(*minute, INTERACTIVE_HANDS.minute);
                assert_eq!(*hour, INTERACTIVE_HANDS.hour);
            }
            _ => unreachable!("hands are the last two operations"),
        }
    }

    #[test]
    fn unknown_battery_is_skipped_not_zero() {
        let (geometry, layout) = fixture(320, 320);
        let ops = compose(&reading(), BatteryState::unknown(), false, geometry, &layout);

        // Only the seconds arc remains; no frame, level arc or text.
        assert_eq!(ops.iter().filter(|op| op.is_arc()).count(), 1);
        assert_eq!(ops.iter().filter(|op| op.is_text()).count(), 2);
        assert_eq!(ops.len(), 19);
    }

    #[test]
    fn battery_arc_tracks_live_level() {
        let (geometry, layout) = fixture(320, 320);
        let ops = compose(&reading(), battery(45), false, geometry, &layout);

        let battery_arc = ops
            .iter()
            .find(|op| matches!(op, DrawOp::Arc { bounds, .. } if *bounds == layout.battery_box))
            .unwrap();
        match battery_arc {
            DrawOp::Arc { start, sweep, .. } => {
                assert_eq!(*start, -90.0);
                assert!((sweep - 162.0).abs() < 1e-2);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn seconds_arc_sweep_matches_reading() {
        let (geometry, layout) = fixture(320, 320);
        let ops = compose(&reading(), battery(45), false, geometry, &layout);

        let arc = ops
            .iter()
            .find(|op| {
                matches!(op, DrawOp::Arc { bounds, .. } if *bounds == layout.second_arc_bounds)
            })
            .unwrap();
        match arc {
            DrawOp::Arc { start, sweep, .. } => {
                assert_eq!(*start, -90.0);
                assert!((sweep - 183.0).abs() < 1e-2);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn hand_lengths_are_center_x_offsets() {
        let (geometry, layout) = fixture(320, 320);
        let noon = ClockReading {
            hour: 0.0,
            minute: 0.0,
            second: 0.0,
        };
        let ops = compose(&noon, battery(45), true, geometry, &layout);

        let center = (geometry.center_x(), geometry.center_y());
        match &ops[1] {
            DrawOp::Line { from, to, .. } => {
                assert_eq!(*from, center);
                // Minute hand straight up at 12 o'clock.
                assert!((to.0 - center.0).abs() < 1e-4);
                assert!((to.1 - (center.1 - (center.0 - 40.0))).abs() < 1e-4);
            }
            _ => unreachable!(),
        }
        match &ops[2] {
            DrawOp::Line { to, .. } => {
                assert!((to.1 - (center.1 - (center.0 - 80.0))).abs() < 1e-4);
            }
            _ => unreachable!(),
        }
    }
}
