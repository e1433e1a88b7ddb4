use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let state = app.scroll_state();
        let percent = (state.progress * 100.0).round() as u32;
        let arrow = if state.velocity > 0.05 {
            "▼"
        } else if state.velocity < -0.05 {
            "▲"
        } else {
            " "
        };

        let status_text = format!(
            " {} │ {:>3}% {} │ row {:.0}/{:.0}",
            app.page.hero.title, percent, arrow, state.offset, state.limit
        );
        let help_hint = if app.lightbox.is_some() {
            " n/p:image  Esc:close "
        } else {
            " j/k:scroll  t:top  Enter:gallery  q:quit "
        };
        let padding = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.chars().count() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default()
                    .fg(app.theme.fg0)
                    .bg(app.theme.bg2)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ".repeat(padding), Style::default().bg(app.theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey).bg(app.theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
