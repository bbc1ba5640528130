use std::collections::HashSet;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::api::models::VocabItem;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// Searchable, paginated table of past words with per-row translation
/// reveal.
pub struct WordTable<'a> {
    rows: &'a [&'a VocabItem],
    revealed: &'a HashSet<i64>,
    search: &'a LineInput,
    search_focused: bool,
    table_focused: bool,
    cursor_row: usize,
    page: usize,
    total_pages: usize,
    filtered_count: usize,
    total_count: usize,
    theme: &'a Theme,
}

impl<'a> WordTable<'a> {
    pub fn new(
        rows: &'a [&'a VocabItem],
        revealed: &'a HashSet<i64>,
        search: &'a LineInput,
        search_focused: bool,
        table_focused: bool,
        cursor_row: usize,
        page: usize,
        total_pages: usize,
        filtered_count: usize,
        total_count: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            rows,
            revealed,
            search,
            search_focused,
            table_focused,
            cursor_row,
            page,
            total_pages,
            filtered_count,
            total_count,
            theme,
        }
    }

    fn search_line(&self) -> Line<'_> {
        let colors = &self.theme.colors;
        let (before, cursor, after) = self.search.render_parts();

        let mut spans = vec![
            Span::styled(
                " / ",
                Style::default().fg(if self.search_focused {
                    colors.accent()
                } else {
                    colors.muted()
                }),
            ),
            Span::styled(before, Style::default().fg(colors.fg())),
        ];
        if self.search_focused {
            match cursor {
                Some(ch) => {
                    spans.push(Span::styled(
                        ch.to_string(),
                        Style::default().fg(colors.cursor_fg()).bg(colors.cursor_bg()),
                    ));
                    spans.push(Span::styled(after, Style::default().fg(colors.fg())));
                }
                None => {
                    spans.push(Span::styled(" ", Style::default().bg(colors.cursor_bg())))
                }
            }
        } else {
            if let Some(ch) = cursor {
                spans.push(Span::styled(ch.to_string(), Style::default().fg(colors.fg())));
                spans.push(Span::styled(after, Style::default().fg(colors.fg())));
            }
            if self.search.is_empty() {
                spans.push(Span::styled(
                    "search word or translation",
                    Style::default().fg(colors.accent_dim()),
                ));
            }
        }
        Line::from(spans)
    }
}

/// Pad or truncate to an exact char width (translations can be long).
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        let mut out = text.to_string();
        out.extend(std::iter::repeat_n(' ', width - count));
        return out;
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

impl Widget for WordTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = if self.table_focused || self.search_focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(format!(" Words ({}) ", self.total_count))
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 20 || inner.height < 4 {
            return;
        }

        let word_width = (inner.width as usize).saturating_sub(19) * 2 / 5;
        let translation_width =
            (inner.width as usize).saturating_sub(19 + word_width);

        let mut lines: Vec<Line> = vec![self.search_line()];

        let heading = format!(
            " {:>3}  {:<10}  {}  {}",
            "Day",
            "Date",
            fit("Word", word_width),
            fit("Translation", translation_width),
        );
        lines.push(Line::from(Span::styled(
            heading,
            Style::default().fg(colors.muted()).add_modifier(Modifier::UNDERLINED),
        )));

        if self.rows.is_empty() {
            lines.push(Line::from(Span::styled(
                " No matching words.",
                Style::default().fg(colors.muted()),
            )));
        }

        for (i, item) in self.rows.iter().enumerate() {
            let is_cursor = self.table_focused && i == self.cursor_row;
            let translation = if self.revealed.contains(&item.id) {
                item.translation.display()
            } else {
                "···".to_string()
            };

            let text = format!(
                " {:>3}  {:<10}  {}  {}",
                item.day_no,
                item.date.to_string(),
                fit(&item.word, word_width),
                fit(&translation, translation_width),
            );

            let style = if is_cursor {
                Style::default()
                    .fg(colors.accent())
                    .bg(colors.accent_dim())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        // Pin the page indicator to the bottom of the card.
        let body_height = inner.height.saturating_sub(1) as usize;
        while lines.len() < body_height {
            lines.push(Line::from(""));
        }
        lines.truncate(body_height);
        lines.push(Line::from(Span::styled(
            format!(
                " Page {}/{} · {} match{}",
                self.page,
                self.total_pages,
                self.filtered_count,
                if self.filtered_count == 1 { "" } else { "es" },
            ),
            Style::default().fg(colors.muted()),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_and_truncates_on_char_boundaries() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("แอปเปิ้ล", 4), "แอป…");
        assert_eq!(fit("", 3), "   ");
    }
}
