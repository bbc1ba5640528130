use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::Theme;

/// Splash shown while the boot sequence talks to the backend.
pub struct Loading<'a> {
    theme: &'a Theme,
}

impl<'a> Loading<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Loading<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let y = area.y + area.height / 2;
        let lines = vec![
            Line::from(Span::styled(
                "vocadr",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "loading your words…",
                Style::default().fg(colors.muted()),
            )),
        ];
        let centered = Rect::new(area.x, y.saturating_sub(1), area.width, 2.min(area.height));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(centered, buf);
    }
}
