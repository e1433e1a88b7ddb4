//! Smooth scrolling engine
//!
//! Virtualizes the page's scroll position: input deltas ease the virtual
//! offset toward their target over a configured duration instead of jumping,
//! and every frame publishes a [`ScrollState`] snapshot to subscribers.
//!
//! - `easing` - Pure easing functions (cubic, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `state` - The per-frame scroll snapshot
//! - `controller` - The frame-driven controller combining the above
//! - `singleton` - Explicit process-wide controller lifecycle
//!
//! # Usage
//!
//! ```
//! use glidepage_core::config::ScrollConfig;
//! use glidepage_core::scroll::{ScrollController, ScrollTarget, ScrollToOptions};
//!
//! let mut controller = ScrollController::new(ScrollConfig::default()).unwrap();
//! controller.set_limit(400.0);
//!
//! // Input arrives between frames...
//! controller.scroll_by(120.0);
//!
//! // ...and the host drives frames with a monotonic virtual clock.
//! let mut now = 0.0;
//! for _ in 0..90 {
//!     now += 1.0 / 60.0;
//!     controller.update(now);
//! }
//! assert!(controller.state().offset > 115.0);
//!
//! controller.scroll_to(ScrollTarget::Top, ScrollToOptions { immediate: true });
//! assert_eq!(controller.state().offset, 0.0);
//! ```

pub mod controller;
pub mod easing;
pub mod singleton;
pub mod state;
pub mod timing;

pub use controller::{ScrollController, ScrollSubscription, ScrollTarget, ScrollToOptions, EPSILON};
pub use easing::EasingType;
pub use singleton::SharedController;
pub use state::{ScrollDirection, ScrollState};
