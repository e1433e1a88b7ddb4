//! Trigger policies wiring visibility events to animation side effects
//!
//! Three policies cover everything the page does:
//! - fade-in-once for gallery tiles and lore section bodies
//! - a monotonic reveal watermark for the lore sequence
//! - play/pause for looping media clips
//!
//! Each policy returns a cheap shared handle the renderer reads; handlers
//! never reach back into component state, so an unmounted owner can simply
//! disconnect its watcher.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::warn;

use super::geometry::Bounds;
use super::observer::{ViewportObserver, WatcherId, WatcherOptions};

/// A media element declined to start playing (autoplay policy and friends).
/// Recoverable: the clip stays paused and the page carries on.
#[derive(Debug, Error)]
#[error("playback rejected: {reason}")]
pub struct PlaybackRejected {
    pub reason: String,
}

/// Seam over a playable media element
pub trait Playback: Send {
    fn play(&mut self) -> Result<(), PlaybackRejected>;
    fn pause(&mut self);
    /// Reset playback position to the start
    fn rewind(&mut self) {}
}

/// What to do when a playing clip leaves the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PauseBehavior {
    #[default]
    PauseOnly,
    /// Lore clips restart from the top on re-entry
    PauseAndRewind,
}

/// Shared visible flag set by a fade-in trigger
#[derive(Clone, Default)]
pub struct FadeHandle(Arc<AtomicBool>);

impl FadeHandle {
    pub fn is_visible(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Fade an element in the first time it intersects, and never again.
///
/// The watcher is forced to `once`, so it disconnects itself right after the
/// first qualifying event; oscillating in and out of view cannot re-trigger.
pub fn fade_in_once(
    observer: &mut ViewportObserver,
    bounds: Bounds,
    mut options: WatcherOptions,
) -> (WatcherId, FadeHandle) {
    options.once = true;
    let handle = FadeHandle::default();
    let flag = Arc::clone(&handle.0);
    let id = observer.observe(bounds, options, move |event| {
        if event.is_intersecting {
            flag.store(true, Ordering::SeqCst);
        }
    });
    (id, handle)
}

/// Monotonic watermark over an indexed sequence of sections.
///
/// When section `i` intersects, the watermark rises to at least `i + 1`;
/// it never decreases, so the reveal order is strictly top-to-bottom even
/// when a fast scroll delivers intersection events out of order.
#[derive(Clone)]
pub struct RevealSequence {
    watermark: Arc<AtomicUsize>,
}

impl RevealSequence {
    /// `initial` sections start revealed (the page mounts with the first
    /// lore section already showing)
    pub fn new(initial: usize) -> Self {
        Self {
            watermark: Arc::new(AtomicUsize::new(initial)),
        }
    }

    /// Highest revealed index plus one
    pub fn revealed(&self) -> usize {
        self.watermark.load(Ordering::SeqCst)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        index < self.revealed()
    }

    /// Watch one section of the sequence
    pub fn observe_section(
        &self,
        observer: &mut ViewportObserver,
        index: usize,
        bounds: Bounds,
        options: WatcherOptions,
    ) -> WatcherId {
        let watermark = Arc::clone(&self.watermark);
        observer.observe(bounds, options, move |event| {
            if event.is_intersecting {
                watermark.fetch_max(index + 1, Ordering::SeqCst);
            }
        })
    }
}

impl Default for RevealSequence {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Play the bound media while its element is in view, pause (and optionally
/// rewind) when it leaves. A rejected play request is logged and swallowed.
pub fn play_pause_loop(
    observer: &mut ViewportObserver,
    bounds: Bounds,
    options: WatcherOptions,
    media: Arc<Mutex<dyn Playback>>,
    behavior: PauseBehavior,
) -> WatcherId {
    observer.observe(bounds, options, move |event| {
        let mut media = match media.lock() {
            Ok(media) => media,
            Err(poisoned) => poisoned.into_inner(),
        };
        if event.is_intersecting {
            if let Err(rejected) = media.play() {
                warn!("autoplay prevented: {rejected}");
            }
        } else {
            media.pause();
            if behavior == PauseBehavior::PauseAndRewind {
                media.rewind();
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visibility::geometry::Viewport;

    fn viewport(offset: f64) -> Viewport {
        Viewport::new(offset, 100.0)
    }

    #[test]
    fn test_fade_in_fires_exactly_once_despite_oscillation() {
        let mut observer = ViewportObserver::new();
        let bounds = Bounds::new(150.0, 50.0);
        let (id, handle) = fade_in_once(&mut observer, bounds, WatcherOptions::default());
        assert!(!handle.is_visible());

        // Oscillate in and out of view ten times
        for _ in 0..10 {
            observer.process(viewport(120.0));
            observer.process(viewport(400.0));
        }
        assert!(handle.is_visible());
        assert!(!observer.is_connected(id));
        assert_eq!(observer.disconnected_count(), 1);
    }

    #[test]
    fn test_reveal_watermark_under_any_arrival_order() {
        for order in permutations(&[0usize, 1, 2, 3]) {
            let mut observer = ViewportObserver::new();
            let reveal = RevealSequence::new(0);
            // Stack all four sections inside the viewport so processing
            // order is the only variable; register in permuted order
            for &index in &order {
                reveal.observe_section(
                    &mut observer,
                    index,
                    Bounds::new(10.0 + index as f64, 5.0),
                    WatcherOptions::default(),
                );
            }
            let mut last = reveal.revealed();
            observer.process(viewport(0.0));
            assert!(reveal.revealed() >= last);
            last = reveal.revealed();
            observer.process(viewport(0.0));
            assert!(reveal.revealed() >= last, "watermark decreased");
            assert_eq!(reveal.revealed(), 4, "order {:?}", order);
            assert!(reveal.is_revealed(3));
            assert!(!reveal.is_revealed(4));
        }
    }

    #[test]
    fn test_reveal_starts_with_initial_sections() {
        let reveal = RevealSequence::new(1);
        assert!(reveal.is_revealed(0));
        assert!(!reveal.is_revealed(1));
    }

    struct FakeClip {
        log: Vec<&'static str>,
        reject: bool,
        playing: bool,
        position: u32,
    }

    impl FakeClip {
        fn new(reject: bool) -> Arc<Mutex<Self>> {
            Arc::new(Mutex::new(Self {
                log: Vec::new(),
                reject,
                playing: false,
                position: 7,
            }))
        }
    }

    impl Playback for FakeClip {
        fn play(&mut self) -> Result<(), PlaybackRejected> {
            self.log.push("play");
            if self.reject {
                return Err(PlaybackRejected {
                    reason: "autoplay policy".to_string(),
                });
            }
            self.playing = true;
            Ok(())
        }

        fn pause(&mut self) {
            self.log.push("pause");
            self.playing = false;
        }

        fn rewind(&mut self) {
            self.log.push("rewind");
            self.position = 0;
        }
    }

    #[test]
    fn test_play_pause_loop_follows_visibility() {
        let mut observer = ViewportObserver::new();
        let clip = FakeClip::new(false);
        play_pause_loop(
            &mut observer,
            Bounds::new(150.0, 50.0),
            WatcherOptions::default(),
            clip.clone(),
            PauseBehavior::PauseOnly,
        );

        observer.process(viewport(120.0)); // enter -> play
        observer.process(viewport(400.0)); // exit -> pause
        observer.process(viewport(120.0)); // re-enter -> play
        let clip = clip.lock().unwrap();
        assert_eq!(clip.log, vec!["play", "pause", "play"]);
        assert!(clip.playing);
    }

    #[test]
    fn test_rewind_variant_resets_position() {
        let mut observer = ViewportObserver::new();
        let clip = FakeClip::new(false);
        play_pause_loop(
            &mut observer,
            Bounds::new(150.0, 50.0),
            WatcherOptions::default(),
            clip.clone(),
            PauseBehavior::PauseAndRewind,
        );

        observer.process(viewport(120.0));
        observer.process(viewport(400.0));
        let clip = clip.lock().unwrap();
        assert_eq!(clip.log, vec!["play", "pause", "rewind"]);
        assert_eq!(clip.position, 0);
    }

    #[test]
    fn test_rejected_play_is_recoverable() {
        let mut observer = ViewportObserver::new();
        let clip = FakeClip::new(true);
        play_pause_loop(
            &mut observer,
            Bounds::new(150.0, 50.0),
            WatcherOptions::default(),
            clip.clone(),
            PauseBehavior::PauseOnly,
        );

        // Must not panic; the clip stays paused
        observer.process(viewport(120.0));
        observer.process(viewport(400.0));
        let clip = clip.lock().unwrap();
        assert_eq!(clip.log, vec!["play", "pause"]);
        assert!(!clip.playing);
    }

    fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut result = Vec::new();
        for (i, &head) in items.iter().enumerate() {
            let mut rest = items.to_vec();
            rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                result.push(tail);
            }
        }
        result
    }
}
