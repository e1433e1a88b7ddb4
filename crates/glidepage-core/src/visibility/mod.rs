//! Visibility-triggered animation
//!
//! Generic "element enters/exits the viewport" machinery plus the three
//! trigger policies the page uses.
//!
//! - `geometry` - Scroll-axis bounds, viewport, root margins, ratio math
//! - `observer` - Batch intersection observer over registered watchers
//! - `triggers` - fade-in-once, progressive reveal watermark, play/pause

pub mod geometry;
pub mod observer;
pub mod triggers;

pub use geometry::{intersection_ratio, Bounds, Margin, RootMargin, Viewport};
pub use observer::{ViewportObserver, VisibilityEvent, WatcherId, WatcherOptions};
pub use triggers::{
    fade_in_once, play_pause_loop, FadeHandle, PauseBehavior, Playback, PlaybackRejected,
    RevealSequence,
};
