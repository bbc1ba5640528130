use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::api::models::VocabItem;
use crate::ui::theme::Theme;

/// Card showing an independent random sample from the collection. Kept
/// even when the fetch fails — the placeholder never blocks the rest of
/// the screen.
pub struct RandomCard<'a> {
    pick: Option<&'a VocabItem>,
    theme: &'a Theme,
}

impl<'a> RandomCard<'a> {
    pub fn new(pick: Option<&'a VocabItem>, theme: &'a Theme) -> Self {
        Self { pick, theme }
    }
}

impl Widget for RandomCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Random Word ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.pick {
            Some(item) => vec![
                Line::from(Span::styled(
                    format!(" {}", item.word),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(" {}", item.translation.display()),
                    Style::default().fg(colors.fg()),
                )),
                Line::from(Span::styled(
                    format!(" Day {} · {}", item.day_no, item.date),
                    Style::default().fg(colors.muted()),
                )),
                Line::from(Span::styled(
                    " [Ctrl+R] Shuffle",
                    Style::default().fg(colors.accent_dim()),
                )),
            ],
            None => vec![
                Line::from(Span::styled(
                    " Nothing to show yet.",
                    Style::default().fg(colors.muted()),
                )),
                Line::from(Span::styled(
                    " [Ctrl+R] Try again",
                    Style::default().fg(colors.accent_dim()),
                )),
            ],
        };

        Paragraph::new(lines).render(inner, buf);
    }
}
