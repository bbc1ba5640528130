mod api;
mod app;
mod config;
mod event;
mod ui;
mod vocab;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::style::Print;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use app::{App, AuthField, Focus, Screen};
use config::Config;
use event::{AppEvent, EventHandler};
use ui::components::auth_form::AuthForm;
use ui::components::dialogs::{ConfirmResetDialog, DayJumpPrompt, NoticePopup};
use ui::components::header::Header;
use ui::components::loading::Loading;
use ui::components::practice_card::PracticeCard;
use ui::components::random_card::RandomCard;
use ui::components::word_table::WordTable;
use ui::layout::{LayoutTier, MainLayout, pack_hint_lines};
use ui::line_input::{InputResult, LineInput};
use vocab::list;

#[derive(Parser)]
#[command(name = "vocadr", version, about = "Terminal client for a daily vocabulary trainer")]
struct Cli {
    #[arg(short, long, help = "Backend base URL")]
    server: Option<String>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(server) = cli.server {
        config.server_url = server;
    }
    if let Some(theme) = cli.theme {
        if ui::theme::Theme::load(&theme).is_some() {
            config.theme = theme;
        } else {
            eprintln!(
                "Unknown theme '{theme}', falling back to '{}'. Available: {}",
                config.theme,
                ui::theme::Theme::available_themes().join(", ")
            );
        }
    }

    let mut app = App::new(config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(200));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    // First frame shows the loading splash before any network round trip.
    terminal.draw(|frame| render(frame, app))?;
    app.boot();

    loop {
        terminal.draw(|frame| render(frame, app))?;

        if app.bell {
            app.bell = false;
            execute!(terminal.backend_mut(), Print("\u{7}"))?;
        }

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Paste(text) => handle_paste(app, &text),
            AppEvent::Tick => app.expire_notice(),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // A visible notice swallows the keystroke that acknowledges it.
    if app.notice.is_some() {
        app.dismiss_notice();
        return;
    }

    match app.screen {
        Screen::Loading => {}
        Screen::Auth => handle_auth_key(app, key),
        Screen::Main => handle_main_key(app, key),
    }
}

fn handle_auth_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            app.auth_field = match app.auth_field {
                AuthField::Email => AuthField::Password,
                AuthField::Password => AuthField::Email,
            };
        }
        KeyCode::Enter => app.sign_in(),
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.sign_up()
        }
        KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.show_google_link()
        }
        KeyCode::Esc => app.should_quit = true,
        _ => {
            let input = match app.auth_field {
                AuthField::Email => &mut app.email_input,
                AuthField::Password => &mut app.password_input,
            };
            let _ = input.handle(key);
        }
    }
}

fn handle_main_key(app: &mut App, key: KeyEvent) {
    // Modal layers first: reset confirmation, then the day-jump prompt.
    if app.confirm_reset {
        match key.code {
            KeyCode::Char('y') => {
                app.confirm_reset = false;
                app.reset_vocabulary();
            }
            KeyCode::Char('n') | KeyCode::Esc => app.confirm_reset = false,
            _ => {}
        }
        return;
    }

    if let Some(ref mut jump) = app.day_jump {
        match jump.handle(key) {
            InputResult::Submit => {
                let raw = jump.value().to_string();
                app.day_jump = None;
                app.jump_to_day(&raw);
            }
            InputResult::Cancel => app.day_jump = None,
            InputResult::Continue => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Left => return app.prev_day(),
            KeyCode::Right => return app.next_day(),
            KeyCode::Char('g') => {
                app.day_jump = Some(LineInput::new(""));
                return;
            }
            KeyCode::Char('r') => return app.refresh_random(),
            KeyCode::Char('t') => return app.fetch_today(),
            KeyCode::Char('s') => return app.export_to_file(),
            KeyCode::Char('x') => {
                app.confirm_reset = true;
                return;
            }
            KeyCode::Char('o') => return app.logout(),
            _ => {}
        }
    }

    match app.focus {
        Focus::Answer => match app.answer_input.handle(key) {
            InputResult::Submit => app.check_answer(),
            InputResult::Cancel | InputResult::Continue => {}
        },
        Focus::Search => {
            let before = app.search_input.value().to_string();
            let _ = app.search_input.handle(key);
            if app.search_input.value() != before {
                app.search_changed();
            }
        }
        Focus::Table => handle_table_key(app, key),
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.table_row_up(),
        KeyCode::Down | KeyCode::Char('j') => app.table_row_down(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => app.prev_list_page(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => app.next_list_page(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_reveal_selected(),
        KeyCode::Char('/') => app.focus = Focus::Search,
        _ => {}
    }
}

fn handle_paste(app: &mut App, text: &str) {
    match app.screen {
        Screen::Loading => {}
        Screen::Auth => {
            let input = match app.auth_field {
                AuthField::Email => &mut app.email_input,
                AuthField::Password => &mut app.password_input,
            };
            input.insert_str(text);
        }
        Screen::Main => {
            if let Some(ref mut jump) = app.day_jump {
                jump.insert_str(text);
                return;
            }
            match app.focus {
                Focus::Answer => app.answer_input.insert_str(text),
                Focus::Search => {
                    app.search_input.insert_str(text);
                    app.search_changed();
                }
                Focus::Table => {}
            }
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        Screen::Loading => frame.render_widget(Loading::new(app.theme), area),
        Screen::Auth => {
            frame.render_widget(
                AuthForm::new(
                    &app.email_input,
                    &app.password_input,
                    app.auth_field,
                    &app.config.server_url,
                    app.theme,
                ),
                area,
            );
        }
        Screen::Main => render_main(frame, app),
    }

    if app.confirm_reset {
        frame.render_widget(ConfirmResetDialog::new(app.theme), area);
    }
    if let Some(ref jump) = app.day_jump {
        frame.render_widget(DayJumpPrompt::new(jump, app.theme), area);
    }
    if let Some(ref notice) = app.notice {
        frame.render_widget(NoticePopup::new(notice, app.theme), area);
    }
}

fn render_main(frame: &mut ratatui::Frame, app: &App) {
    let layout = MainLayout::new(frame.area());
    let colors = &app.theme.colors;

    frame.render_widget(
        Header::new(
            app.session.as_ref().map(|user| user.email.as_str()),
            app.stats.as_ref(),
            app.vocabulary.len(),
            app.theme,
        ),
        layout.header,
    );

    frame.render_widget(
        RandomCard::new(app.random_pick.as_ref(), app.theme),
        layout.random,
    );

    frame.render_widget(
        PracticeCard::new(
            app.selected_day,
            app.max_day(),
            app.item_for_day(app.selected_day),
            &app.answer_input,
            app.last_check.as_ref(),
            app.focus == Focus::Answer,
            app.theme,
        ),
        layout.practice,
    );

    let filtered = app.filtered();
    let rows = list::page_slice(&filtered, app.list_page);
    frame.render_widget(
        WordTable::new(
            rows,
            &app.revealed,
            &app.search_input,
            app.focus == Focus::Search,
            app.focus == Focus::Table,
            app.table_row,
            app.list_page,
            list::total_pages(filtered.len()),
            filtered.len(),
            app.vocabulary.len(),
            app.theme,
        ),
        layout.table,
    );

    let hints: &[&str] = match layout.tier {
        LayoutTier::Wide => &[
            "[Tab] Panel",
            "[Enter] Check/Reveal",
            "[Ctrl+←/→] Day",
            "[Ctrl+G] Go to day",
            "[Ctrl+R] Shuffle",
            "[Ctrl+T] Today",
            "[Ctrl+S] Export",
            "[Ctrl+X] Reset",
            "[Ctrl+O] Sign out",
            "[Ctrl+C] Quit",
        ],
        LayoutTier::Narrow => &[
            "[Tab] Panel",
            "[Enter] Check/Reveal",
            "[Ctrl+←/→] Day",
            "[Ctrl+O] Sign out",
            "[Ctrl+C] Quit",
        ],
    };
    let lines: Vec<Line> = pack_hint_lines(hints, layout.footer.width as usize)
        .into_iter()
        .take(layout.footer.height as usize)
        .map(Line::from)
        .collect();
    let footer = Paragraph::new(lines).style(Style::default().fg(colors.muted()));
    frame.render_widget(footer, layout.footer);
}
