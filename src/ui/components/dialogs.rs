use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::app::{Notice, NoticeKind};
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

fn dialog_area(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

/// Overlay for transient notices. Error notices block the screen until a
/// key is pressed.
pub struct NoticePopup<'a> {
    notice: &'a Notice,
    theme: &'a Theme,
}

impl<'a> NoticePopup<'a> {
    pub fn new(notice: &'a Notice, theme: &'a Theme) -> Self {
        Self { notice, theme }
    }
}

impl Widget for NoticePopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let (title, border) = match self.notice.kind {
            NoticeKind::Error => (" Error ", colors.error()),
            NoticeKind::Info => (" Notice ", colors.accent()),
            NoticeKind::Success => (" Success ", colors.success()),
        };

        let text_lines: Vec<&str> = self.notice.text.lines().collect();
        let max_text = (area.width.saturating_sub(6) as usize).max(24);
        let width = text_lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .clamp(24, max_text) as u16
            + 6;
        let height = text_lines.len() as u16 + 4;
        let dialog = dialog_area(area, width, height);

        Clear.render(dialog, buf);

        let mut lines = vec![Line::from("")];
        for text in &text_lines {
            lines.push(Line::from(Span::styled(
                format!("  {text}  "),
                Style::default().fg(colors.fg()),
            )));
        }
        lines.push(Line::from(Span::styled(
            "  press any key",
            Style::default().fg(colors.muted()),
        )));

        Paragraph::new(lines)
            .style(Style::default().bg(colors.bg()))
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::default().fg(border))
                    .style(Style::default().bg(colors.bg())),
            )
            .render(dialog, buf);
    }
}

/// y/n guard in front of the destructive vocabulary reset.
pub struct ConfirmResetDialog<'a> {
    theme: &'a Theme,
}

impl<'a> ConfirmResetDialog<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for ConfirmResetDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let dialog = dialog_area(area, 46, 5);

        Clear.render(dialog, buf);
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Erase all words and progress? (y/n)  ",
                Style::default().fg(colors.fg()),
            )),
        ])
        .style(Style::default().bg(colors.bg()))
        .block(
            Block::bordered()
                .title(" Confirm reset ")
                .border_style(Style::default().fg(colors.error()))
                .style(Style::default().bg(colors.bg())),
        )
        .render(dialog, buf);
    }
}

/// Small prompt for jumping straight to a day number.
pub struct DayJumpPrompt<'a> {
    input: &'a LineInput,
    theme: &'a Theme,
}

impl<'a> DayJumpPrompt<'a> {
    pub fn new(input: &'a LineInput, theme: &'a Theme) -> Self {
        Self { input, theme }
    }
}

impl Widget for DayJumpPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let dialog = dialog_area(area, 34, 5);

        Clear.render(dialog, buf);

        let (before, cursor, after) = self.input.render_parts();
        let mut spans = vec![
            Span::styled("  Day: ", Style::default().fg(colors.muted())),
            Span::styled(
                before,
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            ),
        ];
        match cursor {
            Some(ch) => {
                spans.push(Span::styled(
                    ch.to_string(),
                    Style::default().fg(colors.cursor_fg()).bg(colors.cursor_bg()),
                ));
                spans.push(Span::styled(after, Style::default().fg(colors.fg())));
            }
            None => spans.push(Span::styled(" ", Style::default().bg(colors.cursor_bg()))),
        }

        Paragraph::new(vec![Line::from(""), Line::from(spans)])
            .style(Style::default().bg(colors.bg()))
            .block(
                Block::bordered()
                    .title(" Go to day ")
                    .border_style(Style::default().fg(colors.accent()))
                    .style(Style::default().bg(colors.bg())),
            )
            .render(dialog, buf);
    }
}
