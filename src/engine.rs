//! Watch face engine
//!
//! Coordinates the host lifecycle events: visibility, ambient mode,
//! surface size, zone changes, battery updates and timer callbacks. Owns
//! the cached layout, the battery cell and the refresh scheduler; all
//! mutation happens on the host's single logical thread.

use log::{debug, warn};

use crate::battery::BatteryState;
use crate::compose::compose;
use crate::draw::DrawOpList;
use crate::layout::{FaceLayout, LayoutError, ScreenGeometry};
use crate::scheduler::{RefreshScheduler, TimerDriver};
use crate::time::WallClock;

/// Host services the engine calls back into.
///
/// Implemented by the display-service glue; all methods are cheap and
/// non-blocking.
pub trait HostLink {
    /// Request one repaint of the face.
    fn request_redraw(&mut self);
    /// Enable or disable battery level notifications.
    fn set_battery_notifications(&mut self, enabled: bool);
    /// Enable or disable time-zone-change notifications.
    fn set_zone_notifications(&mut self, enabled: bool);
    /// Current system zone offset in seconds east of UTC.
    fn system_zone_offset(&self) -> i32;
}

/// Watch face lifecycle coordinator.
pub struct FaceEngine<H: Copy + PartialEq> {
    clock: WallClock,
    battery: BatteryState,
    geometry: Option<ScreenGeometry>,
    layout: Option<FaceLayout>,
    scheduler: RefreshScheduler<H>,
    visible: bool,
    ambient: bool,
    battery_subscribed: bool,
    zone_subscribed: bool,
}

impl<H: Copy + PartialEq> FaceEngine<H> {
    /// Create an engine with the given initial zone offset; layout stays
    /// empty until the first surface-size event.
    pub fn new(zone_offset_seconds: i32) -> Self {
        Self {
            clock: WallClock::new(zone_offset_seconds),
            battery: BatteryState::unknown(),
            geometry: None,
            layout: None,
            scheduler: RefreshScheduler::new(),
            visible: false,
            ambient: false,
            battery_subscribed: false,
            zone_subscribed: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_ambient(&self) -> bool {
        self.ambient
    }

    pub fn battery(&self) -> BatteryState {
        self.battery
    }

    /// The face became visible or was hidden.
    pub fn on_visibility_changed<T: TimerDriver<Handle = H>>(
        &mut self,
        host: &mut impl HostLink,
        driver: &mut T,
        visible: bool,
        now_millis: i64,
    ) {
        debug!("visibility changed: {visible}");
        self.visible = visible;

        if visible {
            self.set_zone_subscription(host, true);
            // The zone may have changed while we were not listening.
            self.clock.set_zone_offset(host.system_zone_offset());
            self.set_battery_subscription(host, true);
        } else {
            self.set_zone_subscription(host, false);
            self.set_battery_subscription(host, false);
        }

        self.update_timer(driver, now_millis);
    }

    /// The host switched between interactive and ambient display modes.
    pub fn on_ambient_mode_changed<T: TimerDriver<Handle = H>>(
        &mut self,
        host: &mut impl HostLink,
        driver: &mut T,
        ambient: bool,
        now_millis: i64,
    ) {
        debug!("ambient mode changed: {ambient}");
        self.ambient = ambient;

        // Battery visuals are suppressed in ambient mode, so level
        // updates would be wasted work.
        self.set_battery_subscription(host, !ambient);

        host.request_redraw();
        self.update_timer(driver, now_millis);
    }

    /// The drawing surface was (re)sized; recompute all cached layout.
    pub fn on_surface_size_changed(
        &mut self,
        width: i32,
        height: i32,
        now_millis: i64,
    ) -> Result<(), LayoutError> {
        let geometry = match ScreenGeometry::new(width, height) {
            Ok(geometry) => geometry,
            Err(err) => {
                warn!("rejecting surface size {width}x{height}");
                return Err(err);
            }
        };

        debug!("surface size changed: {width}x{height}");
        self.layout = Some(FaceLayout::compute(
            geometry,
            self.battery,
            self.clock.date(now_millis),
        ));
        self.geometry = Some(geometry);
        Ok(())
    }

    /// The system time zone changed; cached layout is unaffected.
    pub fn on_zone_changed(&mut self, offset_seconds: i32) {
        self.clock.set_zone_offset(offset_seconds);
    }

    /// A battery level notification arrived.
    pub fn on_battery_level(&mut self, level: u8) {
        self.battery.update(level);
    }

    /// Coarse system time tick (about once per minute): always repaint so
    /// the face is never more than a minute stale, even with the
    /// fine-grained timer stopped.
    pub fn on_time_tick(&mut self, host: &mut impl HostLink) {
        host.request_redraw();
    }

    /// A scheduled repaint callback fired.
    pub fn on_timer_fired<T: TimerDriver<Handle = H>>(
        &mut self,
        host: &mut impl HostLink,
        driver: &mut T,
        fired: H,
        now_millis: i64,
    ) {
        if self.scheduler.on_fired(
            driver,
            fired,
            now_millis.max(0) as u64,
            self.visible,
            self.ambient,
        ) {
            host.request_redraw();
        }
    }

    /// Compose the draw operations for the current instant.
    ///
    /// Returns `None` until the first surface-size event has produced a
    /// layout.
    pub fn render(&self, now_millis: i64) -> Option<DrawOpList> {
        let geometry = self.geometry?;
        let layout = self.layout.as_ref()?;
        Some(compose(
            &self.clock.reading(now_millis),
            self.battery,
            self.ambient,
            geometry,
            layout,
        ))
    }

    /// Final teardown: stop the timer and drop all subscriptions.
    pub fn shutdown<T: TimerDriver<Handle = H>>(
        &mut self,
        host: &mut impl HostLink,
        driver: &mut T,
    ) {
        self.scheduler.stop(driver);
        self.set_battery_subscription(host, false);
        self.set_zone_subscription(host, false);
    }

    /// Whether the fine-grained repaint timer is currently running.
    pub fn is_timer_running(&self) -> bool {
        self.scheduler.is_scheduled()
    }

    fn update_timer<T: TimerDriver<Handle = H>>(&mut self, driver: &mut T, now_millis: i64) {
        self.scheduler.start(
            driver,
            now_millis.max(0) as u64,
            self.visible,
            self.ambient,
        );
    }

    fn set_battery_subscription(&mut self, host: &mut impl HostLink, enabled: bool) {
        if self.battery_subscribed != enabled {
            self.battery_subscribed = enabled;
            host.set_battery_notifications(enabled);
        }
    }

    fn set_zone_subscription(&mut self, host: &mut impl HostLink, enabled: bool) {
        if self.zone_subscribed != enabled {
            self.zone_subscribed = enabled;
            host.set_zone_notifications(enabled);
        }
    }
}
