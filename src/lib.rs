#![cfg_attr(not(test), no_std)]

//! Analog watch face engine for wearable displays.
//!
//! Turns a wall-clock instant, a battery level and the surface geometry
//! into the draw operations of one frame, and decides how often to ask
//! the host for a repaint. The host supplies time, events and a drawing
//! surface; this crate owns the geometry, composition and scheduling
//! logic in between.
//!
//! - [`engine::FaceEngine`] coordinates the host lifecycle events.
//! - [`layout::FaceLayout`] caches everything derived from the surface
//!   size, recomputed only when the size changes.
//! - [`compose::compose`] produces the per-frame [`draw::DrawOpList`].
//! - [`scheduler::RefreshScheduler`] keeps repaints aligned to second
//!   boundaries while the face is visible and interactive.
//! - [`render::render_ops`] binds a frame onto an `embedded-graphics`
//!   draw target.

pub mod angle;
pub mod battery;
pub mod compose;
pub mod draw;
pub mod engine;
pub mod layout;
pub mod render;
pub mod scheduler;
pub mod style;
pub mod time;

pub use battery::BatteryState;
pub use draw::{DrawOp, DrawOpList};
pub use engine::{FaceEngine, HostLink};
pub use layout::{FaceLayout, LayoutError, ScreenGeometry, SizeTier};
pub use scheduler::{RefreshScheduler, TimerDriver, INTERACTIVE_UPDATE_MS};
pub use time::{ClockReading, WallClock};
