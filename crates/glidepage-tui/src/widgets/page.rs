use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct PageWidget;

impl PageWidget {
    /// Render the visible window of the composed page
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let document = app.compose_document();
        let offset = app.scroll_state().offset.round().max(0.0) as u16;

        let paragraph = Paragraph::new(document.lines)
            .style(Style::default().bg(app.theme.bg0))
            .scroll((offset, 0));
        frame.render_widget(paragraph, area);

        if app.back_to_top_visible() {
            Self::render_back_to_top(frame, area, app);
        }
    }

    /// Floating affordance in the bottom-right corner, shown only once the
    /// page has scrolled past the configured offset
    fn render_back_to_top(frame: &mut Frame, area: Rect, app: &App) {
        let label = " t ↑ top ";
        let width = label.chars().count() as u16;
        if area.width < width + 2 || area.height < 3 {
            return;
        }
        let corner = Rect {
            x: area.right().saturating_sub(width + 2),
            y: area.bottom().saturating_sub(2),
            width,
            height: 1,
        };
        let hint = Paragraph::new(Line::from(Span::styled(
            label,
            Style::default().fg(app.theme.fg0).bg(app.theme.blood_red),
        )));
        frame.render_widget(hint, corner);
    }
}
