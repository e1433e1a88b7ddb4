use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct LightboxWidget;

impl LightboxWidget {
    /// Render the gallery lightbox overlay for the selected image.
    ///
    /// The page underneath keeps rendering; this draws on top of it, the way
    /// the modal sits over the (scroll-stopped) page.
    pub fn render(frame: &mut Frame, app: &App, index: usize) {
        let area = frame.area();
        let images = &app.page.gallery.images;
        let Some(image) = images.get(index) else {
            return;
        };

        let popup_width = 56u16.min(area.width.saturating_sub(4));
        let popup_height = 11u16.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Gallery ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.cyan))
            .style(Style::default().bg(app.theme.bg1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // image stand-in
                Constraint::Length(1), // source
                Constraint::Length(1), // counter
                Constraint::Length(1), // hints
            ])
            .split(inner);

        // Frame of block glyphs standing in for the screenshot
        let art_width = (inner.width.saturating_sub(8) as usize).max(4);
        let art: Vec<Line> = (0..chunks[0].height)
            .map(|row| {
                let glyph = if row % 2 == 0 { "▓" } else { "▒" };
                Line::from(Span::styled(
                    glyph.repeat(art_width),
                    Style::default().fg(app.theme.bg2),
                ))
                .alignment(Alignment::Center)
            })
            .collect();
        frame.render_widget(Paragraph::new(art), chunks[0]);

        let source = Paragraph::new(Line::from(Span::styled(
            image.src.trim_start_matches('/').to_string(),
            Style::default().fg(app.theme.fg0).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(source, chunks[1]);

        let counter = Paragraph::new(Line::from(Span::styled(
            format!("{} / {}", index + 1, images.len()),
            Style::default().fg(app.theme.fg1),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(counter, chunks[2]);

        let hints = Paragraph::new(Line::from(vec![
            Span::styled("[n]", Style::default().fg(app.theme.blue)),
            Span::styled("ext  ", Style::default().fg(app.theme.grey)),
            Span::styled("[p]", Style::default().fg(app.theme.blue)),
            Span::styled("rev  ", Style::default().fg(app.theme.grey)),
            Span::styled("[Esc]", Style::default().fg(app.theme.blue)),
            Span::styled(" close", Style::default().fg(app.theme.grey)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[3]);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
