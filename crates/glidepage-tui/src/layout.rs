//! Page composition: content model -> styled lines + scroll-axis bounds
//!
//! The whole page is composed into one column of lines; the scroll offset
//! picks the visible window. Section heights depend only on content, width,
//! and the hero height, never on animation state. Hidden elements render as
//! dimmed placeholders of the same height, so watcher bounds stay stable
//! while triggers fire.

use std::sync::{Arc, Mutex};

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use glidepage_core::page::{Page, SectionKind};
use glidepage_core::visibility::{Bounds, FadeHandle, RevealSequence};

use crate::media::LoopClip;
use crate::theme::Theme;

/// Animation state the composer reads (never writes)
pub struct PageView {
    pub reveal: RevealSequence,
    pub lore_fades: Vec<FadeHandle>,
    pub tile_fades: Vec<FadeHandle>,
    pub clips: Vec<Arc<Mutex<LoopClip>>>,
}

impl PageView {
    /// Pre-wiring placeholder: everything hidden, no clips
    pub fn empty() -> Self {
        Self {
            reveal: RevealSequence::new(1),
            lore_fades: Vec::new(),
            tile_fades: Vec::new(),
            clips: Vec::new(),
        }
    }
}

/// Scroll-axis extents of everything the animator watches
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub section_bounds: Vec<(SectionKind, Bounds)>,
    /// One per lore section (copy block + clip)
    pub lore_section_bounds: Vec<Bounds>,
    /// Clip line within each lore section
    pub lore_media_bounds: Vec<Bounds>,
    /// One per gallery tile
    pub gallery_tile_bounds: Vec<Bounds>,
    pub total_height: f64,
}

pub struct PageDocument {
    pub lines: Vec<Line<'static>>,
    pub layout: PageLayout,
}

/// Compose the full page. `hero_height` is the viewport height, mirroring the
/// site's full-screen hero banner.
pub fn compose(page: &Page, view: &PageView, theme: &Theme, width: u16, hero_height: u16) -> PageDocument {
    let mut doc = Composer::new(theme, width);

    doc.begin_section(SectionKind::Hero);
    doc.hero(page, hero_height);
    doc.end_section(SectionKind::Hero);

    doc.begin_section(SectionKind::AboutGame);
    doc.about_game(page);
    doc.end_section(SectionKind::AboutGame);

    doc.begin_section(SectionKind::GameplayLore);
    doc.gameplay_lore(page, view);
    doc.end_section(SectionKind::GameplayLore);

    doc.begin_section(SectionKind::Gallery);
    doc.gallery(page, view);
    doc.end_section(SectionKind::Gallery);

    doc.begin_section(SectionKind::AboutStudio);
    doc.about_studio(page);
    doc.end_section(SectionKind::AboutStudio);

    doc.begin_section(SectionKind::Footer);
    doc.footer(page);
    doc.end_section(SectionKind::Footer);

    doc.finish()
}

struct Composer<'a> {
    theme: &'a Theme,
    width: u16,
    lines: Vec<Line<'static>>,
    layout: PageLayout,
    section_start: f64,
}

impl<'a> Composer<'a> {
    fn new(theme: &'a Theme, width: u16) -> Self {
        Self {
            theme,
            width: width.max(20),
            lines: Vec::new(),
            layout: PageLayout::default(),
            section_start: 0.0,
        }
    }

    fn row(&self) -> f64 {
        self.lines.len() as f64
    }

    fn begin_section(&mut self, _kind: SectionKind) {
        self.section_start = self.row();
    }

    fn end_section(&mut self, kind: SectionKind) {
        let bounds = Bounds::new(self.section_start, self.row() - self.section_start);
        self.layout.section_bounds.push((kind, bounds));
    }

    fn finish(mut self) -> PageDocument {
        self.layout.total_height = self.row();
        PageDocument {
            lines: self.lines,
            layout: self.layout,
        }
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn centered(&mut self, text: String, style: Style) {
        let pad = (self.width as usize).saturating_sub(text.width()) / 2;
        self.push(Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(text, style),
        ]));
    }

    fn wrapped(&mut self, text: &str, style: Style, indent: usize) {
        let body_width = (self.width as usize).saturating_sub(indent * 2).max(10);
        for row in wrap_text(text, body_width) {
            self.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(row, style),
            ]));
        }
    }

    // ── Sections ──────────────────────────────────────────────────────

    fn hero(&mut self, page: &Page, hero_height: u16) {
        let theme = self.theme;
        let height = hero_height.max(8) as usize;
        let title_row = height / 2 - 2;
        for row in 0..height {
            if row == title_row {
                self.centered(
                    page.hero.title.to_uppercase(),
                    Style::default()
                        .fg(theme.fg0)
                        .add_modifier(Modifier::BOLD),
                );
            } else if row == title_row + 2 {
                self.centered(page.hero.tagline.to_string(), Style::default().fg(theme.fg1));
            } else if row == title_row + 4 {
                let buttons = page
                    .hero
                    .actions
                    .iter()
                    .map(|action| format!("[ {} ]", action))
                    .collect::<Vec<_>>()
                    .join("  ");
                self.centered(buttons, Style::default().fg(theme.blue));
            } else if row == height - 2 {
                self.centered("▼ scroll".to_string(), Style::default().fg(theme.grey));
            } else {
                // Dimmed banner texture standing in for the looping video
                self.centered("·".repeat(self.width as usize / 6), Style::default().fg(theme.bg2));
            }
        }
    }

    fn about_game(&mut self, page: &Page) {
        let theme = self.theme;
        self.blank();
        self.wrapped(
            page.about.heading,
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            4,
        );
        self.blank();
        self.wrapped(page.about.body, Style::default().fg(theme.fg1), 4);
        self.blank();
        for card in &page.about.cards {
            let text = format!("▪ {} — {}", card.title, card.detail);
            self.wrapped(&text, Style::default().fg(theme.grey), 6);
        }
        self.blank();
    }

    fn gameplay_lore(&mut self, page: &Page, view: &PageView) {
        let theme = self.theme;
        self.blank();
        self.centered(
            page.lore.heading.to_string(),
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        );
        self.centered(page.lore.subheading.to_string(), Style::default().fg(theme.grey));
        self.blank();

        for (index, section) in page.lore.sections.iter().enumerate() {
            let revealed = view.reveal.is_revealed(index)
                && view
                    .lore_fades
                    .get(index)
                    .map(|fade| fade.is_visible())
                    .unwrap_or(false);
            let body_style = if revealed {
                Style::default().fg(theme.fg1)
            } else {
                Style::default().fg(theme.hidden)
            };
            let title_style = if revealed {
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.hidden)
            };

            let start = self.row();
            self.wrapped(section.title, title_style, 4);
            self.blank();
            if revealed {
                self.wrapped(section.body, body_style, 4);
            } else {
                // Collapsed placeholder of identical height
                let rows = wrap_text(
                    section.body,
                    (self.width as usize).saturating_sub(8).max(10),
                )
                .len();
                for _ in 0..rows {
                    self.wrapped("░░░░░░░░", body_style, 4);
                }
            }
            self.blank();

            let media_row = self.row();
            self.clip_line(view, index, section.media_right, revealed);
            self.layout
                .lore_media_bounds
                .push(Bounds::new(media_row, 1.0));

            self.blank();
            self.layout
                .lore_section_bounds
                .push(Bounds::new(start, self.row() - start));
        }
    }

    fn clip_line(&mut self, view: &PageView, index: usize, media_right: bool, revealed: bool) {
        let theme = self.theme;
        let (frame, playing) = view
            .clips
            .get(index)
            .map(|clip| {
                let clip = clip.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                (clip.current_frame().to_string(), clip.is_playing())
            })
            .unwrap_or_else(|| ("▁▁▁▁".to_string(), false));
        let marker = if playing { "▶" } else { "⏸" };
        let style = if revealed {
            Style::default().fg(theme.cyan)
        } else {
            Style::default().fg(theme.hidden)
        };
        let text = format!("{} {} {}", marker, frame, frame);
        let pad = if media_right {
            (self.width as usize).saturating_sub(text.width() + 4)
        } else {
            4
        };
        self.push(Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(text, style),
        ]));
    }

    fn gallery(&mut self, page: &Page, view: &PageView) {
        let theme = self.theme;
        self.blank();
        self.centered(
            page.gallery.eyebrow.to_uppercase(),
            Style::default().fg(theme.blue),
        );
        self.centered(
            page.gallery.heading.to_string(),
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        );
        self.centered("────────────".to_string(), Style::default().fg(theme.cyan));
        self.wrapped(page.gallery.blurb, Style::default().fg(theme.fg1), 6);
        self.blank();

        for (index, image) in page.gallery.images.iter().enumerate() {
            let visible = view
                .tile_fades
                .get(index)
                .map(|fade| fade.is_visible())
                .unwrap_or(false);
            let start = self.row();
            let rows = if image.tall { 2 } else { 1 };
            for row in 0..rows {
                let label = if row == 0 {
                    if visible {
                        let span_mark = if image.wide { "▣▣" } else { "▣" };
                        format!("{} {}", span_mark, image.src.trim_start_matches('/'))
                    } else {
                        "· loading ·".to_string()
                    }
                } else {
                    String::from("  │")
                };
                let style = if visible {
                    Style::default().fg(theme.fg1)
                } else {
                    Style::default().fg(theme.hidden)
                };
                self.push(Line::from(vec![
                    Span::raw("    ".to_string()),
                    Span::styled(label, style),
                ]));
            }
            self.layout
                .gallery_tile_bounds
                .push(Bounds::new(start, rows as f64));
        }
        self.blank();
    }

    fn about_studio(&mut self, page: &Page) {
        let theme = self.theme;
        self.blank();
        self.centered(
            page.studio.name.to_string(),
            Style::default().fg(theme.blood_red).add_modifier(Modifier::BOLD),
        );
        self.centered(page.studio.tagline.to_string(), Style::default().fg(theme.fg1));
        self.blank();
        for feature in &page.studio.features {
            let text = format!("✦ {} — {}", feature.title, feature.detail);
            self.wrapped(&text, Style::default().fg(theme.grey), 6);
        }
        self.blank();
    }

    fn footer(&mut self, page: &Page) {
        let theme = self.theme;
        self.centered("─".repeat(self.width as usize / 2), Style::default().fg(theme.bg2));
        self.centered(
            format!("© {}", page.footer.studio),
            Style::default().fg(theme.grey),
        );
        self.centered(page.footer.links.join("  ·  "), Style::default().fg(theme.grey));
        self.blank();
    }
}

/// Greedy word wrap; every input yields at least one row
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use glidepage_core::page::Page;

    #[test]
    fn test_wrap_text() {
        let rows = wrap_text("one two three four", 9);
        assert_eq!(rows, vec!["one two", "three", "four"]);
        assert_eq!(wrap_text("", 10).len(), 1);
    }

    #[test]
    fn test_sections_cover_document_in_order() {
        let page = Page::bloodline_vengeance();
        let doc = compose(&page, &PageView::empty(), &Theme::default(), 80, 24);

        assert_eq!(doc.lines.len() as f64, doc.layout.total_height);
        let mut expected_top = 0.0;
        for (_, bounds) in &doc.layout.section_bounds {
            assert!((bounds.top - expected_top).abs() < 1e-9);
            expected_top = bounds.bottom();
        }
        assert!((expected_top - doc.layout.total_height).abs() < 1e-9);
        assert_eq!(doc.layout.lore_section_bounds.len(), 2);
        assert_eq!(doc.layout.lore_media_bounds.len(), 2);
        assert_eq!(doc.layout.gallery_tile_bounds.len(), 12);
    }

    #[test]
    fn test_heights_independent_of_animation_state() {
        use glidepage_core::visibility::{fade_in_once, RevealSequence, Viewport};
        use glidepage_core::{ViewportObserver, WatcherOptions};

        let page = Page::bloodline_vengeance();
        let hidden = compose(&page, &PageView::empty(), &Theme::default(), 80, 24);

        // Reveal everything and re-compose: heights must not move, or the
        // watcher bounds registered at mount would go stale
        let mut observer = ViewportObserver::new();
        let mut view = PageView::empty();
        view.reveal = RevealSequence::new(page.lore.sections.len());
        for _ in 0..page.lore.sections.len() {
            let (_, handle) =
                fade_in_once(&mut observer, Bounds::new(0.0, 10.0), WatcherOptions::default());
            view.lore_fades.push(handle);
        }
        for _ in 0..page.gallery.images.len() {
            let (_, handle) =
                fade_in_once(&mut observer, Bounds::new(0.0, 10.0), WatcherOptions::default());
            view.tile_fades.push(handle);
        }
        observer.process(Viewport::new(0.0, 100.0));
        let revealed = compose(&page, &view, &Theme::default(), 80, 24);
        assert_eq!(hidden.lines.len(), revealed.lines.len());
        for (a, b) in hidden
            .layout
            .section_bounds
            .iter()
            .zip(revealed.layout.section_bounds.iter())
        {
            assert_eq!(a.1, b.1);
        }
    }
}
