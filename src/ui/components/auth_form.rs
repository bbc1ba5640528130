use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::app::AuthField;
use crate::ui::layout::centered_rect;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// Sign-in / sign-up form. The password renders masked; the Google OAuth
/// entry is a plain link surfaced on request.
pub struct AuthForm<'a> {
    email: &'a LineInput,
    password: &'a LineInput,
    active: AuthField,
    server_url: &'a str,
    theme: &'a Theme,
}

impl<'a> AuthForm<'a> {
    pub fn new(
        email: &'a LineInput,
        password: &'a LineInput,
        active: AuthField,
        server_url: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self { email, password, active, server_url, theme }
    }

    fn field_lines(&self, label: &str, field: AuthField) -> Vec<Line<'_>> {
        let colors = &self.theme.colors;
        let is_active = self.active == field;
        let input = match field {
            AuthField::Email => self.email,
            AuthField::Password => self.password,
        };
        let masked = field == AuthField::Password;

        let indicator = if is_active { " > " } else { "   " };
        let label_style = Style::default()
            .fg(if is_active { colors.accent() } else { colors.fg() })
            .add_modifier(if is_active { Modifier::BOLD } else { Modifier::empty() });

        let (before, cursor, after) = input.render_parts();
        let mask = |s: &str| -> String {
            if masked { "•".repeat(s.chars().count()) } else { s.to_string() }
        };

        let mut value_spans = vec![
            Span::raw("     "),
            Span::styled(mask(before), Style::default().fg(colors.fg())),
        ];
        if is_active {
            match cursor {
                Some(ch) => {
                    value_spans.push(Span::styled(
                        mask(&ch.to_string()),
                        Style::default().fg(colors.cursor_fg()).bg(colors.cursor_bg()),
                    ));
                    value_spans
                        .push(Span::styled(mask(after), Style::default().fg(colors.fg())));
                }
                None => value_spans
                    .push(Span::styled(" ", Style::default().bg(colors.cursor_bg()))),
            }
        } else if let Some(ch) = cursor {
            value_spans.push(Span::styled(
                mask(&ch.to_string()),
                Style::default().fg(colors.fg()),
            ));
            value_spans.push(Span::styled(mask(after), Style::default().fg(colors.fg())));
        }

        vec![
            Line::from(Span::styled(format!("{indicator}{label}:"), label_style)),
            Line::from(value_spans),
            Line::from(""),
        ]
    }
}

impl Widget for AuthForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let popup = centered_rect(50, 70, area);
        let block = Block::bordered()
            .title(" Sign in ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(6),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(inner);

        let title = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "vocadr",
                Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "One word a day, kept for good.",
                Style::default().fg(colors.muted()),
            )),
        ])
        .alignment(Alignment::Center);
        title.render(layout[0], buf);

        let mut field_lines = self.field_lines("Email", AuthField::Email);
        field_lines.extend(self.field_lines("Password", AuthField::Password));
        Paragraph::new(field_lines).render(layout[1], buf);

        let server = Paragraph::new(Line::from(Span::styled(
            format!("server: {}", self.server_url),
            Style::default().fg(colors.accent_dim()),
        )))
        .alignment(Alignment::Center);
        server.render(layout[2], buf);

        let hints = Paragraph::new(vec![
            Line::from(Span::styled(
                "  [Enter] Sign in   [Ctrl+N] Create account",
                Style::default().fg(colors.accent_dim()),
            )),
            Line::from(Span::styled(
                "  [Tab] Switch field   [Ctrl+G] Google sign-in",
                Style::default().fg(colors.accent_dim()),
            )),
        ]);
        hints.render(layout[3], buf);
    }
}
