//! Drawing style descriptors
//!
//! Immutable value objects passed by reference into the drawing surface.
//! Ambient mode switches between two precomputed hand palettes instead of
//! mutating a style in place. Geometry-dependent pieces (dash pattern,
//! gradient anchors) are attached by the layout cache at recompute time.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

/// Low-contrast hour hand color for ambient mode (dark gray).
pub const AMBIENT_HOUR_COLOR: Rgb565 = Rgb565::new(8, 17, 8);

/// Blur applied to a stroke or glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blur {
    pub radius: f32,
    pub mode: BlurMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurMode {
    Normal,
    Solid,
    Outer,
    Inner,
}

/// On/off lengths of a dashed stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    pub on: f32,
    pub off: f32,
}

/// Two-color linear gradient between fixed anchor points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub start: Rgb565,
    pub end: Rgb565,
    pub tile: TileMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileMode {
    Clamp,
    Mirror,
}

/// Stroke description for lines, arcs and outlined rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb565,
    pub width: f32,
    pub antialias: bool,
    pub blur: Option<Blur>,
    pub dash: Option<DashPattern>,
    pub gradient: Option<LinearGradient>,
}

impl StrokeStyle {
    const fn solid(color: Rgb565, width: f32) -> Self {
        Self {
            color,
            width,
            antialias: true,
            blur: None,
            dash: None,
            gradient: None,
        }
    }

    /// Copy of this stroke with a dash pattern attached.
    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }

    /// Copy of this stroke with a gradient fill attached.
    pub fn with_gradient(mut self, gradient: LinearGradient) -> Self {
        self.gradient = Some(gradient);
        self
    }
}

/// Text description; `size` selects the tier's mono font in the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Rgb565,
    pub size: u32,
    pub blur: Option<Blur>,
}

impl TextStyle {
    /// Advance width of a string in this style.
    ///
    /// Both tier fonts are 6 pixels wide per glyph.
    pub fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * 6.0
    }

    /// Line height of this style.
    pub fn line_height(&self) -> f32 {
        self.size as f32
    }
}

/// Hour tick marks around the outer ring.
pub const TICK_STROKE: StrokeStyle = StrokeStyle {
    blur: Some(Blur {
        radius: 2.0,
        mode: BlurMode::Solid,
    }),
    ..StrokeStyle::solid(Rgb565::WHITE, 3.0)
};

/// Seconds progress arc; the layout attaches the per-second dash pattern.
pub const SECOND_ARC_STROKE: StrokeStyle = StrokeStyle {
    blur: Some(Blur {
        radius: 10.0,
        mode: BlurMode::Outer,
    }),
    ..StrokeStyle::solid(Rgb565::CYAN, 15.0)
};

/// Date box outline; the layout attaches the cyan→white gradient.
pub const DATE_BOX_STROKE: StrokeStyle = StrokeStyle {
    blur: Some(Blur {
        radius: 2.0,
        mode: BlurMode::Inner,
    }),
    ..StrokeStyle::solid(Rgb565::WHITE, 3.0)
};

/// Full-circle battery frame.
pub const BATTERY_FRAME_STROKE: StrokeStyle = StrokeStyle {
    blur: Some(Blur {
        radius: 3.0,
        mode: BlurMode::Normal,
    }),
    ..StrokeStyle::solid(Rgb565::WHITE, 2.0)
};

/// Battery level arc; the layout attaches the green→red gradient.
pub const BATTERY_ARC_STROKE: StrokeStyle = StrokeStyle {
    blur: Some(Blur {
        radius: 3.0,
        mode: BlurMode::Solid,
    }),
    ..StrokeStyle::solid(Rgb565::GREEN, 6.0)
};

/// Percentage text inside the battery ring.
pub const BATTERY_TEXT: TextStyle = TextStyle {
    color: Rgb565::WHITE,
    size: 13,
    blur: Some(Blur {
        radius: 2.0,
        mode: BlurMode::Solid,
    }),
};

/// Weekday/day fragment of the date label.
pub const fn date_white_text(size: u32) -> TextStyle {
    TextStyle {
        color: Rgb565::WHITE,
        size,
        blur: Some(Blur {
            radius: 2.0,
            mode: BlurMode::Solid,
        }),
    }
}

/// Month/year fragment of the date label.
pub const fn date_cyan_text(size: u32) -> TextStyle {
    TextStyle {
        color: Rgb565::CYAN,
        size,
        blur: Some(Blur {
            radius: 2.0,
            mode: BlurMode::Solid,
        }),
    }
}

/// Minute and hour hand strokes for one display mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandPalette {
    pub minute: StrokeStyle,
    pub hour: StrokeStyle,
}

const HAND_BLUR: Option<Blur> = Some(Blur {
    radius: 8.0,
    mode: BlurMode::Solid,
});

/// Full-fidelity hands for interactive mode.
pub const INTERACTIVE_HANDS: HandPalette = HandPalette {
    minute: StrokeStyle {
        blur: HAND_BLUR,
        ..StrokeStyle::solid(Rgb565::WHITE, 10.0)
    },
    hour: StrokeStyle {
        blur: HAND_BLUR,
        ..StrokeStyle::solid(Rgb565::CYAN, 10.0)
    },
};

/// Reduced-fidelity hands for ambient mode: no antialiasing, flat
/// low-contrast hour color.
pub const AMBIENT_HANDS: HandPalette = HandPalette {
    minute: StrokeStyle {
        antialias: false,
        blur: HAND_BLUR,
        ..StrokeStyle::solid(Rgb565::WHITE, 10.0)
    },
    hour: StrokeStyle {
        antialias: false,
        blur: HAND_BLUR,
        ..StrokeStyle::solid(AMBIENT_HOUR_COLOR, 10.0)
    },
};

/// Select the hand palette for the current display mode.
pub fn hand_palette(ambient: bool) -> &'static HandPalette {
    if ambient {
        &AMBIENT_HANDS
    } else {
        &INTERACTIVE_HANDS
    }
}
