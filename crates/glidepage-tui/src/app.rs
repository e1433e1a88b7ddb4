//! Application state: one scroll surface, one observer, one page
//!
//! The app owns the frame loop glue: input becomes controller deltas, each
//! tick advances the controller on a monotonic clock, and the resulting
//! viewport drives the visibility observer, whose triggers mutate the shared
//! handles the composer reads on the next draw.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;
use tracing::debug;

use glidepage_core::page::Page;
use glidepage_core::scroll::singleton;
use glidepage_core::scroll::singleton::SharedController;
use glidepage_core::scroll::ScrollSubscription;
use glidepage_core::visibility::{
    fade_in_once, play_pause_loop, Margin, PauseBehavior, Playback, RootMargin, Viewport,
    WatcherId,
};
use glidepage_core::{
    AppConfig, ScrollController, ScrollState, ScrollTarget, ScrollToOptions, ViewportObserver,
    WatcherOptions,
};

use crate::input::Action;
use crate::layout::{compose, PageDocument, PageLayout, PageView};
use crate::media::LoopClip;
use crate::theme::Theme;
use crate::widgets::{LightboxWidget, PageWidget, StatusBarWidget};

/// Clip glyph frames advance every Nth app tick
const CLIP_TICK_DIVIDER: u64 = 6;

/// The reveal config speaks in page pixels; the terminal scrolls in rows.
/// One text row stands in for roughly 20px of page.
const PX_PER_ROW: f64 = 20.0;

pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub page: Page,
    pub running: bool,
    /// Selected gallery image while the lightbox is open
    pub lightbox: Option<usize>,

    /// Handle to the scroll surface; either the process singleton (installed
    /// by the run command) or a private controller
    controller: SharedController,
    observer: ViewportObserver,
    view: PageView,
    layout: PageLayout,
    back_to_top: Arc<AtomicBool>,
    back_to_top_subscription: Option<ScrollSubscription>,

    width: u16,
    page_height: u16,
    wired: bool,
    reveal_ids: Vec<WatcherId>,
    lore_fade_ids: Vec<WatcherId>,
    tile_fade_ids: Vec<WatcherId>,
    clip_ids: Vec<WatcherId>,

    epoch: Instant,
    ticks: u64,
}

impl App {
    /// Build the app around an existing controller handle, or a private one
    /// when the caller has not installed the singleton
    pub fn new(config: AppConfig, theme: Theme, controller: Option<SharedController>) -> Result<Self> {
        let controller = match controller {
            Some(controller) => controller,
            None => Arc::new(Mutex::new(ScrollController::new(config.scroll.clone())?)),
        };

        // The floating affordance tracks the published offset
        let back_to_top = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&back_to_top);
        let show_past = config.reveal.back_to_top_px / PX_PER_ROW;
        let subscription = lock(&controller).subscribe(move |state: ScrollState| {
            flag.store(state.offset > show_past, Ordering::SeqCst);
        });

        Ok(Self {
            config,
            theme,
            page: Page::bloodline_vengeance(),
            running: true,
            lightbox: None,
            controller,
            observer: ViewportObserver::new(),
            view: PageView::empty(),
            layout: PageLayout::default(),
            back_to_top,
            back_to_top_subscription: Some(subscription),
            width: 0,
            page_height: 0,
            wired: false,
            reveal_ids: Vec::new(),
            lore_fade_ids: Vec::new(),
            tile_fade_ids: Vec::new(),
            clip_ids: Vec::new(),
            epoch: Instant::now(),
            ticks: 0,
        })
    }

    pub fn scroll_state(&self) -> ScrollState {
        lock(&self.controller).state()
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top.load(Ordering::SeqCst)
    }

    /// Compose the page for the current size and animation state
    pub fn compose_document(&self) -> PageDocument {
        compose(&self.page, &self.view, &self.theme, self.width, self.page_height)
    }

    /// Relayout for a new terminal size; watcher bounds follow the layout
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        let status_rows = if self.config.ui.show_status_bar { 1 } else { 0 };
        self.page_height = height.saturating_sub(status_rows).max(1);

        let document = self.compose_document();
        self.layout = document.layout;
        let limit = (self.layout.total_height - self.page_height as f64).max(0.0);
        lock(&self.controller).set_limit(limit);
        debug!(width, height, limit, "relayout");

        if self.wired {
            self.update_watcher_bounds();
        } else {
            self.wire_triggers();
            self.wired = true;
        }
    }

    /// Register the page's visibility triggers against the fresh layout.
    ///
    /// The first lore section starts revealed; the rest wait on the reveal
    /// watermark. Fades use the same shrunken bottom margin as the reveals,
    /// gallery tiles pre-trigger at 85% of the viewport, and clips preload
    /// with a generous symmetric margin.
    fn wire_triggers(&mut self) {
        let reveal = &self.config.reveal;
        let lore_margin = RootMargin::px(0.0, reveal.lore_margin_px / PX_PER_ROW);
        let tile_margin = RootMargin {
            start: Margin::Px(0.0),
            end: Margin::Percent(-15.0),
        };
        let clip_margin = RootMargin::both_px(reveal.preload_margin_px / PX_PER_ROW);
        let base = WatcherOptions {
            threshold: reveal.threshold,
            ..Default::default()
        };

        self.view.reveal = glidepage_core::visibility::RevealSequence::new(1);
        for (index, bounds) in self.layout.lore_section_bounds.iter().enumerate() {
            let id = self.view.reveal.observe_section(
                &mut self.observer,
                index,
                *bounds,
                WatcherOptions {
                    root_margin: lore_margin,
                    ..base
                },
            );
            self.reveal_ids.push(id);

            let (fade_id, fade) = fade_in_once(
                &mut self.observer,
                *bounds,
                WatcherOptions {
                    root_margin: lore_margin,
                    ..base
                },
            );
            self.lore_fade_ids.push(fade_id);
            self.view.lore_fades.push(fade);
        }

        for bounds in &self.layout.gallery_tile_bounds {
            let (id, fade) = fade_in_once(
                &mut self.observer,
                *bounds,
                WatcherOptions {
                    root_margin: tile_margin,
                    ..base
                },
            );
            self.tile_fade_ids.push(id);
            self.view.tile_fades.push(fade);
        }

        for (section, bounds) in self
            .page
            .lore
            .sections
            .iter()
            .zip(self.layout.lore_media_bounds.clone())
        {
            let clip = Arc::new(Mutex::new(LoopClip::new(section.media_src)));
            let media: Arc<Mutex<dyn Playback>> = clip.clone();
            let id = play_pause_loop(
                &mut self.observer,
                bounds,
                WatcherOptions {
                    root_margin: clip_margin,
                    ..base
                },
                media,
                PauseBehavior::PauseAndRewind,
            );
            self.clip_ids.push(id);
            self.view.clips.push(clip);
        }
    }

    /// Move existing watchers to the new bounds without resetting their
    /// fired state (a fade that already ran must not reset on resize)
    fn update_watcher_bounds(&mut self) {
        for (id, bounds) in self.reveal_ids.iter().zip(&self.layout.lore_section_bounds) {
            self.observer.update_bounds(*id, *bounds);
        }
        for (id, bounds) in self.lore_fade_ids.iter().zip(&self.layout.lore_section_bounds) {
            self.observer.update_bounds(*id, *bounds);
        }
        for (id, bounds) in self.tile_fade_ids.iter().zip(&self.layout.gallery_tile_bounds) {
            self.observer.update_bounds(*id, *bounds);
        }
        for (id, bounds) in self.clip_ids.iter().zip(&self.layout.lore_media_bounds) {
            self.observer.update_bounds(*id, *bounds);
        }
    }

    /// Advance one frame: controller, then observer, then clip frames
    pub fn tick(&mut self) {
        self.ticks += 1;
        let now = self.epoch.elapsed().as_secs_f64();
        let state = lock(&self.controller).update(now);
        self.observer
            .process(Viewport::new(state.offset, self.page_height as f64));
        if self.ticks % CLIP_TICK_DIVIDER == 0 {
            for clip in &self.view.clips {
                lock_clip(clip).tick();
            }
        }
    }

    /// Whether the next tick has animation work pending
    pub fn needs_update(&self) -> bool {
        lock(&self.controller).needs_update()
    }

    /// Unmount: disconnect every watcher, pause any playing media, and
    /// release the scroll subscription. No trigger fires after this returns.
    pub fn teardown(&mut self) {
        self.observer.disconnect_all();
        for clip in &self.view.clips {
            lock_clip(clip).pause();
        }
        if let Some(subscription) = self.back_to_top_subscription.take() {
            lock(&self.controller).unsubscribe(subscription);
        }
        self.back_to_top.store(false, Ordering::SeqCst);
    }

    pub fn handle_wheel(&mut self, delta: f64) {
        lock(&self.controller).scroll_by(delta);
    }

    pub fn handle_action(&mut self, action: Action) {
        let page = self.page_height as f64;
        match action {
            Action::Quit => self.running = false,
            Action::ScrollDown => self.scroll_by(3.0),
            Action::ScrollUp => self.scroll_by(-3.0),
            Action::ScrollHalfPageDown => self.scroll_by(page / 2.0),
            Action::ScrollHalfPageUp => self.scroll_by(-page / 2.0),
            Action::ScrollPageDown => self.scroll_by(page),
            Action::ScrollPageUp => self.scroll_by(-page),
            Action::JumpToTop => self.scroll_to(ScrollTarget::Top, ScrollToOptions { immediate: true }),
            Action::JumpToBottom => {
                self.scroll_to(ScrollTarget::Bottom, ScrollToOptions { immediate: true })
            }
            Action::BackToTop => {
                // Ambient lookup with a fallback to our own handle, so the
                // affordance works even without the process singleton
                let controller = singleton::active().unwrap_or_else(|| Arc::clone(&self.controller));
                lock(&controller).scroll_to(ScrollTarget::Top, ScrollToOptions::default());
            }
            Action::OpenLightbox => self.open_lightbox(0),
            Action::CloseOverlay => self.close_lightbox(),
            Action::NextImage => self.cycle_lightbox(1),
            Action::PrevImage => self.cycle_lightbox(-1),
            Action::None => {}
        }
    }

    fn scroll_by(&mut self, delta: f64) {
        lock(&self.controller).scroll_by(delta);
    }

    fn scroll_to(&mut self, target: ScrollTarget, options: ScrollToOptions) {
        lock(&self.controller).scroll_to(target, options);
    }

    /// The lightbox is a scroll-prevent region: the page underneath holds
    /// still until it closes
    fn open_lightbox(&mut self, index: usize) {
        self.lightbox = Some(index);
        lock(&self.controller).stop();
    }

    fn close_lightbox(&mut self) {
        self.lightbox = None;
        lock(&self.controller).start();
    }

    fn cycle_lightbox(&mut self, step: isize) {
        let count = self.page.gallery.images.len() as isize;
        if count == 0 {
            return;
        }
        if let Some(index) = self.lightbox {
            let next = (index as isize + step).rem_euclid(count);
            self.lightbox = Some(next as usize);
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let constraints = if self.config.ui.show_status_bar {
            vec![Constraint::Min(0), Constraint::Length(1)]
        } else {
            vec![Constraint::Min(0)]
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(frame.area());

        PageWidget::render(frame, chunks[0], self);
        if self.config.ui.show_status_bar {
            StatusBarWidget::render(frame, chunks[1], self);
        }
        if let Some(index) = self.lightbox {
            LightboxWidget::render(frame, self, index);
        }
    }
}

fn lock(controller: &SharedController) -> MutexGuard<'_, ScrollController> {
    controller.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn lock_clip(clip: &Arc<Mutex<LoopClip>>) -> MutexGuard<'_, LoopClip> {
    clip.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
