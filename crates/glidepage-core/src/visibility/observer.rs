//! Viewport observer: batch intersection testing over registered watchers
//!
//! A headless stand-in for the browser's IntersectionObserver. Each watcher
//! binds an element's bounds to a handler; `process()` runs one batch pass
//! against the current viewport and dispatches an event to every watcher
//! whose intersection state changed.
//!
//! Watchers are independent: events within one watcher arrive in chronological
//! order of the geometry changes, but there is no ordering guarantee across
//! watchers in the same pass. Policies that care about order (the progressive
//! reveal watermark) must not assume one.

use super::geometry::{intersection_ratio, Bounds, RootMargin, Viewport};

/// Opaque handle for a registered watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatcherId(u64);

#[derive(Debug, Clone, Copy)]
pub struct WatcherOptions {
    /// Intersection ratio in (0, 1] required to count as intersecting
    pub threshold: f64,
    /// Expansion of the effective viewport (pre-triggering, preloading)
    pub root_margin: RootMargin,
    /// Disconnect automatically after the first intersecting event
    pub once: bool,
}

impl Default for WatcherOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::default(),
            once: false,
        }
    }
}

/// Delivered to a watcher's handler when its intersection state changes
#[derive(Debug, Clone, Copy)]
pub struct VisibilityEvent {
    pub is_intersecting: bool,
    pub ratio: f64,
}

type Handler = Box<dyn FnMut(VisibilityEvent) + Send>;

struct Watcher {
    id: WatcherId,
    bounds: Bounds,
    options: WatcherOptions,
    handler: Handler,
    /// None until the first pass; the first observation always dispatches,
    /// so an element mounted already inside the viewport fires immediately
    last_intersecting: Option<bool>,
    connected: bool,
}

#[derive(Default)]
pub struct ViewportObserver {
    watchers: Vec<Watcher>,
    next_id: u64,
    created: usize,
    disconnected: usize,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a watcher; its handler fires on the next `process()` pass
    pub fn observe(
        &mut self,
        bounds: Bounds,
        options: WatcherOptions,
        handler: impl FnMut(VisibilityEvent) + Send + 'static,
    ) -> WatcherId {
        let id = WatcherId(self.next_id);
        self.next_id += 1;
        self.created += 1;
        self.watchers.push(Watcher {
            id,
            bounds,
            options,
            handler: Box::new(handler),
            last_intersecting: None,
            connected: true,
        });
        id
    }

    /// Replace a watcher's bounds after relayout
    pub fn update_bounds(&mut self, id: WatcherId, bounds: Bounds) {
        if let Some(watcher) = self.watchers.iter_mut().find(|w| w.id == id) {
            watcher.bounds = bounds;
        }
    }

    /// Stop observing; safe to call multiple times
    pub fn disconnect(&mut self, id: WatcherId) {
        if let Some(watcher) = self
            .watchers
            .iter_mut()
            .find(|w| w.id == id && w.connected)
        {
            watcher.connected = false;
            self.disconnected += 1;
        }
    }

    /// Disconnect every remaining watcher (owner teardown)
    pub fn disconnect_all(&mut self) {
        for watcher in self.watchers.iter_mut() {
            if watcher.connected {
                watcher.connected = false;
                self.disconnected += 1;
            }
        }
    }

    pub fn is_connected(&self, id: WatcherId) -> bool {
        self.watchers
            .iter()
            .any(|w| w.id == id && w.connected)
    }

    pub fn created_count(&self) -> usize {
        self.created
    }

    pub fn disconnected_count(&self) -> usize {
        self.disconnected
    }

    /// One batch pass against the current viewport
    pub fn process(&mut self, viewport: Viewport) {
        for index in 0..self.watchers.len() {
            let mut auto_disconnected = false;
            {
                let watcher = &mut self.watchers[index];
                if !watcher.connected {
                    continue;
                }
                let ratio =
                    intersection_ratio(watcher.bounds, viewport, watcher.options.root_margin);
                let threshold = watcher.options.threshold.clamp(f64::EPSILON, 1.0);
                let is_intersecting = ratio >= threshold;
                if watcher.last_intersecting == Some(is_intersecting) {
                    continue;
                }
                watcher.last_intersecting = Some(is_intersecting);
                (watcher.handler)(VisibilityEvent {
                    is_intersecting,
                    ratio,
                });
                if is_intersecting && watcher.options.once {
                    watcher.connected = false;
                    auto_disconnected = true;
                }
            }
            if auto_disconnected {
                self.disconnected += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn viewport(offset: f64) -> Viewport {
        Viewport::new(offset, 100.0)
    }

    #[test]
    fn test_mounted_already_visible_fires_on_first_pass() {
        let mut observer = ViewportObserver::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let id = observer.observe(
            Bounds::new(10.0, 30.0),
            WatcherOptions {
                once: true,
                ..Default::default()
            },
            move |event| {
                assert!(event.is_intersecting);
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );

        observer.process(viewport(0.0));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!observer.is_connected(id));
        assert_eq!(observer.disconnected_count(), 1);
    }

    #[test]
    fn test_initial_state_dispatches_even_when_hidden() {
        let mut observer = ViewportObserver::new();
        let events = Arc::new(std::sync::Mutex::new(Vec::new()));
        let log = events.clone();
        observer.observe(
            Bounds::new(500.0, 30.0),
            WatcherOptions::default(),
            move |event| log.lock().unwrap().push(event.is_intersecting),
        );

        observer.process(viewport(0.0));
        observer.process(viewport(0.0));
        assert_eq!(&events.lock().unwrap()[..], &[false]);
    }

    #[test]
    fn test_events_fire_only_on_state_changes() {
        let mut observer = ViewportObserver::new();
        let events = Arc::new(std::sync::Mutex::new(Vec::new()));
        let log = events.clone();
        observer.observe(
            Bounds::new(150.0, 50.0),
            WatcherOptions::default(),
            move |event| log.lock().unwrap().push(event.is_intersecting),
        );

        observer.process(viewport(0.0)); // hidden
        observer.process(viewport(120.0)); // visible
        observer.process(viewport(130.0)); // still visible, no event
        observer.process(viewport(400.0)); // hidden again
        assert_eq!(&events.lock().unwrap()[..], &[false, true, false]);
    }

    #[test]
    fn test_threshold_gates_intersection() {
        let mut observer = ViewportObserver::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        observer.observe(
            Bounds::new(90.0, 100.0),
            WatcherOptions {
                threshold: 0.5,
                ..Default::default()
            },
            move |event| {
                if event.is_intersecting {
                    counter.fetch_add(1, Ordering::SeqCst);
                }
            },
        );

        // Only 10 of 100 rows visible: below the 0.5 threshold
        observer.process(viewport(0.0));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        // 60 rows visible
        observer.process(viewport(50.0));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disconnect_is_idempotent_and_silences_watcher() {
        let mut observer = ViewportObserver::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let id = observer.observe(
            Bounds::new(10.0, 30.0),
            WatcherOptions::default(),
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );

        observer.disconnect(id);
        observer.disconnect(id);
        assert_eq!(observer.disconnected_count(), 1);
        observer.process(viewport(0.0));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_disconnect_all_balances_created_count() {
        let mut observer = ViewportObserver::new();
        for i in 0..4 {
            observer.observe(
                Bounds::new(i as f64 * 100.0, 50.0),
                WatcherOptions::default(),
                |_| {},
            );
        }
        observer.process(viewport(0.0));
        observer.disconnect_all();
        assert_eq!(observer.created_count(), observer.disconnected_count());
    }

    #[test]
    fn test_update_bounds_is_picked_up_next_pass() {
        let mut observer = ViewportObserver::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let id = observer.observe(
            Bounds::new(500.0, 30.0),
            WatcherOptions::default(),
            move |event| {
                if event.is_intersecting {
                    counter.fetch_add(1, Ordering::SeqCst);
                }
            },
        );

        observer.process(viewport(0.0));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        observer.update_bounds(id, Bounds::new(20.0, 30.0));
        observer.process(viewport(0.0));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
