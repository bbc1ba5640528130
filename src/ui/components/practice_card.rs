use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::api::models::VocabItem;
use crate::app::AnswerCheck;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// The practice panel: the word for the selected day, the answer field,
/// and feedback from the most recent check.
pub struct PracticeCard<'a> {
    selected_day: u32,
    max_day: u32,
    item: Option<&'a VocabItem>,
    answer: &'a LineInput,
    last_check: Option<&'a AnswerCheck>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> PracticeCard<'a> {
    pub fn new(
        selected_day: u32,
        max_day: u32,
        item: Option<&'a VocabItem>,
        answer: &'a LineInput,
        last_check: Option<&'a AnswerCheck>,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { selected_day, max_day, item, answer, last_check, focused, theme }
    }

    fn input_line(&self) -> Line<'_> {
        let colors = &self.theme.colors;
        let (before, cursor, after) = self.answer.render_parts();

        let mut spans = vec![
            Span::styled(" Your answer: ", Style::default().fg(colors.muted())),
            Span::styled(before, Style::default().fg(colors.fg())),
        ];
        if self.focused {
            match cursor {
                Some(ch) => {
                    spans.push(Span::styled(
                        ch.to_string(),
                        Style::default().fg(colors.cursor_fg()).bg(colors.cursor_bg()),
                    ));
                    spans.push(Span::styled(after, Style::default().fg(colors.fg())));
                }
                None => spans.push(Span::styled(
                    " ",
                    Style::default().bg(colors.cursor_bg()),
                )),
            }
        } else if let Some(ch) = cursor {
            spans.push(Span::styled(
                ch.to_string(),
                Style::default().fg(colors.fg()),
            ));
            spans.push(Span::styled(after, Style::default().fg(colors.fg())));
        }
        Line::from(spans)
    }
}

impl Widget for PracticeCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = if self.focused { colors.border_focused() } else { colors.border() };
        let block = Block::bordered()
            .title(format!(" Practice — Day {}/{} ", self.selected_day, self.max_day))
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();

        match self.item {
            Some(item) => {
                lines.push(Line::from(Span::styled(
                    format!(" {}", item.word),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    format!(" assigned {}", item.date),
                    Style::default().fg(colors.muted()),
                )));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    format!(" No word assigned to day {} yet.", self.selected_day),
                    Style::default().fg(colors.muted()),
                )));
                lines.push(Line::from(""));
            }
        }

        lines.push(Line::from(""));
        lines.push(self.input_line());
        lines.push(Line::from(""));

        match self.last_check {
            Some(AnswerCheck::Correct) => lines.push(Line::from(Span::styled(
                " ✓ Correct",
                Style::default()
                    .fg(colors.success())
                    .add_modifier(Modifier::BOLD),
            ))),
            Some(AnswerCheck::Incorrect { expected }) => {
                lines.push(Line::from(vec![
                    Span::styled(" ✗ Not quite. ", Style::default().fg(colors.error())),
                    Span::styled(
                        format!("Expected: {expected}"),
                        Style::default().fg(colors.warning()),
                    ),
                ]));
            }
            None => lines.push(Line::from(Span::styled(
                " [Enter] Check  [Ctrl+←/→] Day  [Ctrl+G] Go to day",
                Style::default().fg(colors.accent_dim()),
            ))),
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
