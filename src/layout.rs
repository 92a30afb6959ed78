//! Layout cache for the watch face
//!
//! Owns every piece of geometry derived from the surface size, the battery
//! snapshot and the formatted date. Recomputed wholesale on each
//! surface-size event and consumed read-only by every redraw; nothing in
//! here changes between surface events.

use core::f32::consts::PI;
use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use heapless::String;
use thiserror::Error;

use crate::battery::BatteryState;
use crate::style::{
    self, DashPattern, LinearGradient, StrokeStyle, TextStyle, TileMode,
};
use crate::time::{short_month, short_weekday, DateStamp};

/// Padding around the date label inside its box.
const DATE_PADDING: f32 = 3.0;

/// Inset of the seconds arc from the screen edge.
const SECOND_ARC_INSET: f32 = 20.0;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Zero or negative surface dimensions are rejected instead of
    /// producing degenerate geometry.
    #[error("degenerate surface size {width}x{height}")]
    DegenerateSurface { width: i32, height: i32 },
}

/// Screen-space rectangle in float precision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Validated surface dimensions with the derived center point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenGeometry {
    width: u32,
    height: u32,
}

impl ScreenGeometry {
    /// Capture a surface size, rejecting degenerate dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, LayoutError> {
        if width <= 0 || height <= 0 {
            return Err(LayoutError::DegenerateSurface { width, height });
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn center_x(&self) -> f32 {
        self.width as f32 / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.height as f32 / 2.0
    }
}

/// Screen size tier selected by the 320-pixel height threshold.
///
/// The threshold and the small tier's year omission are fixed contract,
/// not tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    Small,
    Large,
}

impl SizeTier {
    pub fn of(height: u32) -> Self {
        if height >= 320 {
            SizeTier::Large
        } else {
            SizeTier::Small
        }
    }

    /// Date label font size for this tier.
    pub fn font_size(self) -> u32 {
        match self {
            SizeTier::Large => 13,
            SizeTier::Small => 12,
        }
    }
}

/// Format a battery level for display, `"?%"` before the first reading.
pub fn battery_label(level: Option<u8>) -> String<16> {
    let mut text = String::new();
    let _ = match level {
        Some(level) => write!(text, "{level}%"),
        None => write!(text, "?%"),
    };
    text
}

/// All cached geometry for one surface size.
///
/// Computed once per surface-size event; calling [`FaceLayout::compute`]
/// twice with identical inputs yields identical values.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceLayout {
    pub tier: SizeTier,
    /// Bounds of the seconds arc, inset from the screen edge.
    pub second_arc_bounds: RectF,
    /// Seconds stroke with the one-dash-per-second pattern attached.
    pub second_arc_style: StrokeStyle,
    /// Weekday/day fragment, drawn in white.
    pub date_white: String<16>,
    /// Month (and year on the large tier) fragment, drawn in cyan.
    pub date_cyan: String<16>,
    pub date_white_style: TextStyle,
    pub date_cyan_style: TextStyle,
    pub date_white_origin: (f32, f32),
    pub date_cyan_origin: (f32, f32),
    /// Outline box around both date fragments.
    pub date_box: RectF,
    pub date_box_style: StrokeStyle,
    /// Inner battery arc track.
    pub battery_box: RectF,
    /// Outer battery ring frame.
    pub battery_frame: RectF,
    pub battery_arc_style: StrokeStyle,
    /// Centered origin for the percentage text.
    pub battery_text_origin: (f32, f32),
}

impl FaceLayout {
    /// Recompute the whole layout for a surface size.
    ///
    /// `battery` is the snapshot current at recompute time; it only sizes
    /// the percentage text, the arc sweep itself is taken live on every
    /// frame. With no battery reading yet the battery fields are computed
    /// anyway and the composer suppresses their use.
    pub fn compute(geometry: ScreenGeometry, battery: BatteryState, date: DateStamp) -> Self {
        let width = geometry.width() as f32;
        let center_x = geometry.center_x();
        let center_y = geometry.center_y();
        let tier = SizeTier::of(geometry.height());

        // One dash per second of arc, minus a fixed gap compensation.
        let dash = DashPattern {
            on: PI * width / 60.0 - 6.0,
            off: 4.0,
        };
        let second_arc_bounds = RectF::new(
            SECOND_ARC_INSET,
            SECOND_ARC_INSET,
            width - SECOND_ARC_INSET,
            geometry.height() as f32 - SECOND_ARC_INSET,
        );

        // Battery ring centered on the quarter-width point.
        let (battery_box, battery_frame, battery_text_y) = match tier {
            SizeTier::Large => (
                RectF::new(
                    center_x / 2.0 - 30.0,
                    center_y - 60.0,
                    center_x / 2.0 + 30.0,
                    center_y,
                ),
                RectF::new(
                    center_x / 2.0 - 40.0,
                    center_y - 70.0,
                    center_x / 2.0 + 40.0,
                    center_y + 10.0,
                ),
                center_y - 30.0,
            ),
            SizeTier::Small => (
                RectF::new(
                    center_x / 2.0 - 20.0,
                    center_y - 40.0,
                    center_x / 2.0 + 20.0,
                    center_y,
                ),
                RectF::new(
                    center_x / 2.0 - 30.0,
                    center_y - 50.0,
                    center_x / 2.0 + 30.0,
                    center_y + 10.0,
                ),
                center_y - 20.0,
            ),
        };

        let battery_text = battery_label(battery.percent());
        let battery_text_width = style::BATTERY_TEXT.measure(&battery_text);
        let battery_text_height = style::BATTERY_TEXT.line_height();
        let battery_text_origin = (
            center_x / 2.0 - battery_text_width / 2.0,
            battery_text_y - battery_text_height / 2.0,
        );

        let battery_arc_style = style::BATTERY_ARC_STROKE.with_gradient(LinearGradient {
            from: (battery_box.left - 20.0, battery_box.top),
            to: (battery_box.right - 5.0, battery_box.top - 20.0),
            start: Rgb565::GREEN,
            end: Rgb565::RED,
            tile: TileMode::Clamp,
        });

        // Two date fragments so they can be drawn in different colors;
        // the small tier drops the year to save space.
        let font_size = tier.font_size();
        let date_white_style = style::date_white_text(font_size);
        let date_cyan_style = style::date_cyan_text(font_size);

        let mut date_white: String<16> = String::new();
        let _ = write!(date_white, "{} {} ", short_weekday(date.weekday), date.day);
        let mut date_cyan: String<16> = String::new();
        match tier {
            SizeTier::Large => {
                let _ = write!(date_cyan, "{} {}", short_month(date.month0), date.year);
            }
            SizeTier::Small => {
                let _ = write!(date_cyan, "{}", short_month(date.month0));
            }
        }

        // Fixed offset right and up from the screen center.
        let date_origin_x = center_x + center_x / 4.0;
        let date_origin_y = center_y - center_y / 6.0;
        let white_width = date_white_style.measure(&date_white);
        let label_width = white_width + date_cyan_style.measure(&date_cyan);
        let label_height = date_white_style.line_height();

        let date_white_origin = (date_origin_x, date_origin_y);
        let date_cyan_origin = (date_origin_x + white_width, date_origin_y);

        // Text origins sit on the baseline, so the box extends upward.
        let date_box = RectF::new(
            date_origin_x - DATE_PADDING,
            date_origin_y - label_height - DATE_PADDING,
            date_origin_x + label_width + DATE_PADDING,
            date_origin_y + DATE_PADDING,
        );
        let date_box_style = style::DATE_BOX_STROKE.with_gradient(LinearGradient {
            from: (date_box.left, date_box.top),
            to: (date_box.right, date_box.bottom),
            start: Rgb565::CYAN,
            end: Rgb565::WHITE,
            tile: TileMode::Mirror,
        });

        Self {
            tier,
            second_arc_bounds,
            second_arc_style: style::SECOND_ARC_STROKE.with_dash(dash),
            date_white,
            date_cyan,
            date_white_style,
            date_cyan_style,
            date_white_origin,
            date_cyan_origin,
            date_box,
            date_box_style,
            battery_box,
            battery_frame,
            battery_arc_style,
            battery_text_origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn sample_date() -> DateStamp {
        DateStamp {
            weekday: Weekday::Sat,
            day: 29,
            month0: 7,
            year: 2026,
        }
    }

    fn battery(level: u8) -> BatteryState {
        let mut state = BatteryState::unknown();
        state.update(level);
        state
    }

    #[test]
    fn rejects_degenerate_surface() {
        assert!(ScreenGeometry::new(0, 240).is_err());
        assert!(ScreenGeometry::new(240, -1).is_err());
        assert!(ScreenGeometry::new(240, 240).is_ok());
    }

    #[test]
    fn tier_threshold_is_320() {
        assert_eq!(SizeTier::of(319), SizeTier::Small);
        assert_eq!(SizeTier::of(320), SizeTier::Large);
        assert_eq!(SizeTier::Small.font_size(), 12);
        assert_eq!(SizeTier::Large.font_size(), 13);
    }

    #[test]
    fn small_tier_battery_boxes() {
        let geometry = ScreenGeometry::new(280, 280).unwrap();
        let layout = FaceLayout::compute(geometry, battery(45), sample_date());
        // centerX = 140, centerY = 140
        assert_eq!(layout.battery_box, RectF::new(50.0, 100.0, 90.0, 140.0));
        assert_eq!(layout.battery_frame, RectF::new(40.0, 90.0, 100.0, 150.0));
    }

    #[test]
    fn large_tier_battery_boxes() {
        let geometry = ScreenGeometry::new(360, 360).unwrap();
        let layout = FaceLayout::compute(geometry, battery(45), sample_date());
        // centerX = 180, centerY = 180
        assert_eq!(layout.battery_box, RectF::new(60.0, 120.0, 120.0, 180.0));
        assert_eq!(layout.battery_frame, RectF::new(50.0, 110.0, 130.0, 190.0));
    }

    #[test]
    fn small_tier_omits_year() {
        let geometry = ScreenGeometry::new(280, 280).unwrap();
        let layout = FaceLayout::compute(geometry, battery(45), sample_date());
        assert_eq!(layout.date_white.as_str(), "Sat 29 ");
        assert_eq!(layout.date_cyan.as_str(), "Aug");
    }

    #[test]
    fn large_tier_includes_year() {
        let geometry = ScreenGeometry::new(360, 360).unwrap();
        let layout = FaceLayout::compute(geometry, battery(45), sample_date());
        assert_eq!(layout.date_cyan.as_str(), "Aug 2026");
    }

    #[test]
    fn recompute_is_idempotent() {
        let geometry = ScreenGeometry::new(320, 320).unwrap();
        let a = FaceLayout::compute(geometry, battery(73), sample_date());
        let b = FaceLayout::compute(geometry, battery(73), sample_date());
        assert_eq!(a, b);
    }

    #[test]
    fn dash_pattern_spans_one_second_of_arc() {
        let geometry = ScreenGeometry::new(360, 360).unwrap();
        let layout = FaceLayout::compute(geometry, battery(45), sample_date());
        let dash = layout.second_arc_style.dash.unwrap();
        assert!((dash.on - (PI * 360.0 / 60.0 - 6.0)).abs() < 1e-4);
        assert_eq!(dash.off, 4.0);
    }

    #[test]
    fn second_arc_bounds_are_inset() {
        let geometry = ScreenGeometry::new(240, 240).unwrap();
        let layout = FaceLayout::compute(geometry, battery(45), sample_date());
        assert_eq!(
            layout.second_arc_bounds,
            RectF::new(20.0, 20.0, 220.0, 220.0)
        );
    }

    #[test]
    fn date_box_encloses_both_fragments() {
        let geometry = ScreenGeometry::new(360, 360).unwrap();
        let layout = FaceLayout::compute(geometry, battery(45), sample_date());
        let label_width = layout.date_white_style.measure(&layout.date_white)
            + layout.date_cyan_style.measure(&layout.date_cyan);
        assert_eq!(layout.date_box.width(), label_width + 2.0 * DATE_PADDING);
        assert!(layout.date_cyan_origin.0 > layout.date_white_origin.0);
        assert!(layout.date_box.left < layout.date_white_origin.0);
        assert!(layout.date_box.right > layout.date_cyan_origin.0);
    }

    #[test]
    fn unknown_battery_still_computes_fields() {
        let geometry = ScreenGeometry::new(320, 320).unwrap();
        let layout = FaceLayout::compute(geometry, BatteryState::unknown(), sample_date());
        assert!(layout.battery_box.width() > 0.0);
        assert_eq!(battery_label(None).as_str(), "?%");
    }
}
