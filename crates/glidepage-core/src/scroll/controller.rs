//! Scroll controller: the single source of truth for the virtual scroll
//! position.
//!
//! The host drives `update()` once per frame with a monotonic virtual clock.
//! Input deltas batch between frames; each frame drains them into an eased
//! glide toward the new target, clamps the offset to the document limit, and
//! publishes a [`ScrollState`] snapshot to subscribers in registration order.
//!
//! The loop must keep running after input stops: easing keeps moving the
//! offset until the glide converges, which is why hosts poll `needs_update()`
//! rather than waiting for the next input event.

use tracing::debug;

use super::easing::EasingType;
use super::state::{ScrollDirection, ScrollState};
use super::timing::{is_complete, lerp, progress};
use crate::config::ScrollConfig;
use crate::error::{Error, Result};
use crate::visibility::geometry::Bounds;

/// Changes smaller than this are not published to subscribers
pub const EPSILON: f64 = 1e-3;

/// Opaque handle for a registered scroll callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollSubscription(u64);

/// Destination of a programmatic scroll
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollTarget {
    Top,
    Bottom,
    Offset(f64),
    /// Scroll so the element's top edge reaches the top of the viewport
    Element(Bounds),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollToOptions {
    /// Snap synchronously instead of gliding over the configured duration
    pub immediate: bool,
}

/// An in-flight eased movement toward a fixed target
#[derive(Debug, Clone)]
struct Glide {
    started: f64,
    from: f64,
    to: f64,
    duration: f64,
    easing: EasingType,
}

type Callback = Box<dyn FnMut(ScrollState) + Send>;

pub struct ScrollController {
    config: ScrollConfig,
    state: ScrollState,
    glide: Option<Glide>,
    /// Input deltas accumulated since the last frame
    pending_delta: f64,
    /// stop()/start() gate for nested scroll-prevent regions
    enabled: bool,
    subscribers: Vec<(ScrollSubscription, Callback)>,
    next_subscription: u64,
    last_frame: Option<f64>,
    last_published: ScrollState,
}

impl ScrollController {
    /// Create a controller, validating that the host can schedule frames
    pub fn new(config: ScrollConfig) -> Result<Self> {
        if config.animation_fps == 0 {
            return Err(Error::UnsupportedEnvironment(
                "host reports no frame cadence (animation_fps = 0)".to_string(),
            ));
        }
        Ok(Self {
            config,
            state: ScrollState::default(),
            glide: None,
            pending_delta: 0.0,
            enabled: true,
            subscribers: Vec::new(),
            next_subscription: 0,
            last_frame: None,
            last_published: ScrollState::default(),
        })
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Current snapshot without advancing a frame
    #[inline]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Set the maximum scrollable offset (total content minus viewport)
    ///
    /// Called by the host on mount and relayout. The current offset and any
    /// in-flight glide are clamped into the new range.
    pub fn set_limit(&mut self, limit: f64) {
        let limit = limit.max(0.0);
        self.state.limit = limit;
        self.state.offset = self.clamp_offset(self.state.offset);
        self.state.progress = if limit > 0.0 {
            (self.state.offset / limit).clamp(0.0, 1.0)
        } else {
            0.0
        };
        if let Some(glide) = self.glide.as_mut() {
            glide.to = glide.to.clamp(0.0, limit);
        }
    }

    /// Register a callback invoked with a state snapshot on every frame
    /// where offset, velocity, or progress changed beyond [`EPSILON`]
    pub fn subscribe(&mut self, callback: impl FnMut(ScrollState) + Send + 'static) -> ScrollSubscription {
        let id = ScrollSubscription(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Release a subscription; idempotent, no-op if already released
    pub fn unsubscribe(&mut self, subscription: ScrollSubscription) {
        self.subscribers.retain(|(id, _)| *id != subscription);
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// The offset the controller is currently heading toward
    pub fn target_offset(&self) -> f64 {
        self.glide
            .as_ref()
            .map(|glide| glide.to)
            .unwrap_or(self.state.offset)
    }

    /// Whether the next frame has work to do (active glide or batched input)
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.glide.is_some() || self.pending_delta != 0.0
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Scroll by a delta (positive = forward). Deltas arriving within the
    /// same frame batch together before the next glide retarget.
    pub fn scroll_by(&mut self, delta: f64) {
        if !self.enabled {
            return;
        }
        if !self.config.smooth_enabled {
            let target = self.clamp_offset(self.target_offset() + delta);
            self.snap_to(target);
            return;
        }
        self.pending_delta += delta;
    }

    /// Scroll by a touch/drag delta, scaled by the configured multiplier
    pub fn scroll_by_touch(&mut self, delta: f64) {
        if !self.config.allow_touch {
            return;
        }
        self.scroll_by(delta * self.config.touch_multiplier);
    }

    /// Programmatic scroll. Targets outside [0, limit] clamp silently.
    /// No-op while stopped, so a captured nested region stays captured.
    pub fn scroll_to(&mut self, target: ScrollTarget, options: ScrollToOptions) {
        if !self.enabled {
            return;
        }
        let resolved = self.resolve_target(target);
        if options.immediate || !self.config.smooth_enabled {
            self.snap_to(resolved);
            return;
        }
        self.pending_delta = 0.0;
        if (resolved - self.state.offset).abs() <= EPSILON {
            self.glide = None;
            return;
        }
        debug!(from = self.state.offset, to = resolved, "starting glide");
        self.glide = Some(Glide {
            // started lazily on the next frame; a placeholder start time of
            // the last frame keeps pre-first-frame scroll_to calls correct
            started: self.last_frame.unwrap_or(0.0),
            from: self.state.offset,
            to: resolved,
            duration: self.config.duration_secs,
            easing: self.config.easing,
        });
    }

    /// Pause native-to-virtual translation (scroll-prevent regions)
    pub fn stop(&mut self) {
        self.enabled = false;
        self.glide = None;
        self.pending_delta = 0.0;
    }

    /// Resume after `stop()`
    pub fn start(&mut self) {
        self.enabled = true;
    }

    /// Cancel the frame loop's work and release all subscriptions.
    /// No callback fires after this returns.
    pub fn teardown(&mut self) {
        self.glide = None;
        self.pending_delta = 0.0;
        self.enabled = false;
        self.subscribers.clear();
    }

    /// Advance one frame at virtual time `now` (seconds, monotonic) and
    /// return the resulting snapshot
    pub fn update(&mut self, now: f64) -> ScrollState {
        if !self.enabled {
            self.last_frame = Some(now);
            return self.state;
        }

        let prev_offset = self.state.offset;

        // Drain batched input into a glide retarget
        if self.pending_delta != 0.0 {
            let target = self.clamp_offset(self.target_offset() + self.pending_delta);
            self.pending_delta = 0.0;
            if !self.config.smooth_enabled {
                self.state.offset = target;
                self.glide = None;
            } else if (target - self.state.offset).abs() > EPSILON {
                self.glide = Some(Glide {
                    // Anchor at the previous frame so the drain frame itself
                    // advances the glide; no one-frame dead time after input
                    started: self.last_frame.unwrap_or(0.0),
                    from: self.state.offset,
                    to: target,
                    duration: self.config.duration_secs,
                    easing: self.config.easing,
                });
            }
        }

        // Advance the active glide
        if let Some(glide) = self.glide.as_ref() {
            if glide.started > now {
                // Guard against a non-monotonic host clock
                self.glide = None;
            } else if is_complete(glide.started, now, glide.duration) {
                self.state.offset = glide.to;
                self.glide = None;
            } else {
                let t = progress(glide.started, now, glide.duration);
                self.state.offset = lerp(glide.from, glide.to, glide.easing.apply(t));
            }
        }

        self.state.offset = self.clamp_offset(self.state.offset);

        // Derive velocity, direction, progress
        let dt = self.last_frame.map(|last| now - last).unwrap_or(0.0);
        if dt > f64::EPSILON {
            self.state.velocity = (self.state.offset - prev_offset) / dt;
        } else {
            self.state.velocity = 0.0;
        }
        if self.state.velocity > EPSILON {
            self.state.direction = ScrollDirection::Forward;
        } else if self.state.velocity < -EPSILON {
            self.state.direction = ScrollDirection::Backward;
        }
        self.state.progress = if self.state.limit > 0.0 {
            (self.state.offset / self.state.limit).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.last_frame = Some(now);

        self.publish_if_changed();
        self.state
    }

    fn publish_if_changed(&mut self) {
        let changed = (self.state.offset - self.last_published.offset).abs() > EPSILON
            || (self.state.velocity - self.last_published.velocity).abs() > EPSILON
            || (self.state.progress - self.last_published.progress).abs() > EPSILON;
        if !changed {
            return;
        }
        self.last_published = self.state;
        let snapshot = self.state;
        for (_, callback) in self.subscribers.iter_mut() {
            callback(snapshot);
        }
    }

    /// Snap to an offset within the current frame, cancelling any glide
    fn snap_to(&mut self, offset: f64) {
        self.state.offset = self.clamp_offset(offset);
        self.state.progress = if self.state.limit > 0.0 {
            (self.state.offset / self.state.limit).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.glide = None;
        self.pending_delta = 0.0;
    }

    fn resolve_target(&self, target: ScrollTarget) -> f64 {
        let raw = match target {
            ScrollTarget::Top => 0.0,
            ScrollTarget::Bottom => self.state.limit,
            ScrollTarget::Offset(offset) => offset,
            ScrollTarget::Element(bounds) => bounds.top,
        };
        raw.clamp(0.0, self.state.limit.max(0.0))
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        let limit = self.state.limit.max(0.0);
        if self.config.infinite && limit > 0.0 {
            offset.rem_euclid(limit)
        } else {
            offset.clamp(0.0, limit)
        }
    }
}
