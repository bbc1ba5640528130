use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::api::models::Stats;
use crate::ui::theme::Theme;

/// One-line top bar: app name, signed-in email, collection size, streak.
pub struct Header<'a> {
    pub email: Option<&'a str>,
    pub stats: Option<&'a Stats>,
    pub word_count: usize,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(
        email: Option<&'a str>,
        stats: Option<&'a Stats>,
        word_count: usize,
        theme: &'a Theme,
    ) -> Self {
        Self { email, stats, word_count, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        // The server-side total wins when available; the loaded collection
        // length covers the silent-degrade path.
        let word_count = match self.stats {
            Some(stats) if stats.total_words > 0 => stats.total_words as usize,
            _ => self.word_count,
        };

        let mut info = String::new();
        if let Some(email) = self.email {
            info.push_str(&format!(" {email}"));
        }
        info.push_str(&format!(" | {word_count} words"));
        if let Some(stats) = self.stats {
            if stats.streak > 0 {
                info.push_str(&format!(" | {} day streak", stats.streak));
            }
            if let Some(ref last) = stats.last {
                info.push_str(&format!(
                    " | last quiz: day {} ({:.0}%)",
                    last.day_no, last.accuracy
                ));
            }
        }

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                " vocadr ",
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                info,
                Style::default().fg(colors.muted()).bg(colors.header_bg()),
            ),
        ]))
        .style(Style::default().bg(colors.header_bg()));
        header.render(area, buf);
    }
}
