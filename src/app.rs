use std::collections::HashSet;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::api::client::ApiClient;
use crate::api::models::{SessionUser, Stats, VocabItem};
use crate::config::Config;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;
use crate::vocab::list;
use crate::vocab::translation;

/// Which top-level view is mounted. Nothing else changes the rendered
/// shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Auth,
    Main,
}

/// Which panel of the main screen receives plain keystrokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Answer,
    Search,
    Table,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Answer => Focus::Search,
            Focus::Search => Focus::Table,
            Focus::Table => Focus::Answer,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Answer => Focus::Table,
            Focus::Search => Focus::Answer,
            Focus::Table => Focus::Search,
        }
    }
}

/// Active field on the auth screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Password,
}

/// Outcome of the most recent answer check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerCheck {
    Correct,
    Incorrect { expected: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
    Success,
}

/// Transient message rendered as an overlay. Errors block input until the
/// user dismisses them; info and success expire on their own.
#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub raised_at: Instant,
}

const NOTICE_TTL: Duration = Duration::from_secs(4);

pub struct App {
    pub screen: Screen,
    pub session: Option<SessionUser>,
    /// Pre-sorted ascending by day_no, as returned by the backend.
    pub vocabulary: Vec<VocabItem>,
    pub random_pick: Option<VocabItem>,
    pub stats: Option<Stats>,
    pub selected_day: u32,
    pub answer_input: LineInput,
    pub last_check: Option<AnswerCheck>,
    pub search_input: LineInput,
    pub list_page: usize,
    /// Row ids whose translation is shown in the table.
    pub revealed: HashSet<i64>,
    pub focus: Focus,
    /// Cursor within the visible table slice.
    pub table_row: usize,
    pub auth_field: AuthField,
    pub email_input: LineInput,
    pub password_input: LineInput,
    /// Open "go to day" prompt, if any.
    pub day_jump: Option<LineInput>,
    pub confirm_reset: bool,
    pub notice: Option<Notice>,
    /// One-shot completion signal; the draw loop emits BEL and clears it.
    pub bell: bool,
    pub theme: &'static Theme,
    pub config: Config,
    pub should_quit: bool,
    api: ApiClient,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(theme));
        let api = ApiClient::new(&config.server_url)?;

        Ok(Self {
            screen: Screen::Loading,
            session: None,
            vocabulary: Vec::new(),
            random_pick: None,
            stats: None,
            selected_day: 1,
            answer_input: LineInput::default(),
            last_check: None,
            search_input: LineInput::default(),
            list_page: 1,
            revealed: HashSet::new(),
            focus: Focus::Answer,
            table_row: 0,
            auth_field: AuthField::Email,
            email_input: LineInput::default(),
            password_input: LineInput::default(),
            day_jump: None,
            confirm_reset: false,
            notice: None,
            bell: false,
            theme,
            config,
            should_quit: false,
            api,
        })
    }

    // ---- derived state ------------------------------------------------

    /// Highest assigned day, or 1 while the collection is empty.
    pub fn max_day(&self) -> u32 {
        self.vocabulary.iter().map(|item| item.day_no).max().unwrap_or(1)
    }

    pub fn item_for_day(&self, day: u32) -> Option<&VocabItem> {
        self.vocabulary.iter().find(|item| item.day_no == day)
    }

    pub fn filtered(&self) -> Vec<&VocabItem> {
        list::filter(&self.vocabulary, self.search_input.value())
    }

    pub fn visible_rows(&self) -> Vec<&VocabItem> {
        let filtered = self.filtered();
        list::page_slice(&filtered, self.list_page).to_vec()
    }

    // ---- practice transitions (pure) ----------------------------------

    pub fn prev_day(&mut self) {
        if self.selected_day > 1 {
            self.selected_day -= 1;
            self.clear_attempt();
        }
    }

    pub fn next_day(&mut self) {
        if self.selected_day < self.max_day() {
            self.selected_day += 1;
            self.clear_attempt();
        }
    }

    /// Jump to a typed day number. Non-numeric input (and 0) is a no-op; a
    /// day with no assigned word is a valid empty state.
    pub fn jump_to_day(&mut self, raw: &str) {
        if let Ok(day) = raw.trim().parse::<u32>() {
            if day >= 1 {
                self.selected_day = day;
                self.clear_attempt();
            }
        }
    }

    pub fn check_answer(&mut self) {
        let outcome = self.item_for_day(self.selected_day).map(|item| {
            (
                translation::matches(self.answer_input.value(), &item.translation),
                item.translation.display(),
            )
        });

        let Some((correct, expected)) = outcome else {
            self.raise(NoticeKind::Info, "No word assigned to this day yet.");
            return;
        };

        if correct {
            if self.selected_day < self.max_day() {
                self.selected_day += 1;
            } else {
                // Newest word answered: stay put and signal completion.
                self.bell = true;
                self.raise(NoticeKind::Success, "Correct — you are all caught up!");
            }
            self.last_check = Some(AnswerCheck::Correct);
            self.answer_input.clear();
        } else {
            // Draft stays editable in place.
            self.last_check = Some(AnswerCheck::Incorrect { expected });
        }
    }

    fn clear_attempt(&mut self) {
        self.answer_input.clear();
        self.last_check = None;
    }

    // ---- list transitions (pure) --------------------------------------

    /// Called after every search edit: the page resets to 1.
    pub fn search_changed(&mut self) {
        self.list_page = 1;
        self.table_row = 0;
    }

    pub fn next_list_page(&mut self) {
        self.list_page = list::clamp_page(self.list_page + 1, self.filtered().len());
        self.clamp_table_row();
    }

    pub fn prev_list_page(&mut self) {
        self.list_page =
            list::clamp_page(self.list_page.saturating_sub(1), self.filtered().len());
        self.clamp_table_row();
    }

    /// Re-clamp the page after any change to the filtered set.
    pub fn clamp_list_page(&mut self) {
        self.list_page = list::clamp_page(self.list_page, self.filtered().len());
        self.clamp_table_row();
    }

    pub fn table_row_up(&mut self) {
        self.table_row = self.table_row.saturating_sub(1);
    }

    pub fn table_row_down(&mut self) {
        let visible = self.visible_rows().len();
        if visible > 0 {
            self.table_row = (self.table_row + 1).min(visible - 1);
        }
    }

    fn clamp_table_row(&mut self) {
        let visible = self.visible_rows().len();
        self.table_row = self.table_row.min(visible.saturating_sub(1));
    }

    /// Show/hide the translation of the row under the cursor. Client-only;
    /// the server never hears about reveals.
    pub fn toggle_reveal_selected(&mut self) {
        let id = self.visible_rows().get(self.table_row).map(|item| item.id);
        if let Some(id) = id {
            if !self.revealed.insert(id) {
                self.revealed.remove(&id);
            }
        }
    }

    // ---- notices ------------------------------------------------------

    pub fn raise(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice { kind, text: text.into(), raised_at: Instant::now() });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Tick handler: info/success notices expire, errors wait for the
    /// user.
    pub fn expire_notice(&mut self) {
        if let Some(ref notice) = self.notice {
            if notice.kind != NoticeKind::Error && notice.raised_at.elapsed() > NOTICE_TTL {
                self.notice = None;
            }
        }
    }

    // ---- lifecycle & network operations -------------------------------

    /// Boot: probe the session, then load the collection. A failed `/me`
    /// probe means "not signed in", not an error.
    pub fn boot(&mut self) {
        match self.api.me() {
            Ok(user) => {
                self.session = Some(user);
                self.screen = Screen::Main;
                self.load_main();
            }
            Err(_) => {
                self.screen = Screen::Auth;
            }
        }
    }

    /// Load the word list, make sure today's word exists, refresh the
    /// random pick and header stats, and select the practice day.
    fn load_main(&mut self) {
        match self.api.vocab_list() {
            Ok(items) => self.vocabulary = items,
            Err(err) => {
                self.vocabulary.clear();
                self.raise(NoticeKind::Error, err.to_string());
            }
        }

        let today = chrono::Local::now().date_naive();
        let todays_day = self
            .vocabulary
            .iter()
            .find(|item| item.date == today)
            .map(|item| item.day_no);

        match todays_day {
            Some(day) => self.selected_day = day,
            None => match self.api.today_auto(false) {
                Ok(item) => {
                    self.selected_day = item.day_no;
                    match self.api.vocab_list() {
                        Ok(items) => self.vocabulary = items,
                        // Keep the collection consistent with the server
                        // even when the refresh fails.
                        Err(_) => self.vocabulary.push(item),
                    }
                }
                Err(err) => {
                    self.selected_day = self.max_day();
                    self.raise(NoticeKind::Error, err.to_string());
                }
            },
        }

        self.refresh_random();
        self.refresh_stats();
        self.clamp_list_page();
        self.clear_attempt();
    }

    /// Silent degrade: a failed fetch leaves the card on its placeholder.
    pub fn refresh_random(&mut self) {
        self.random_pick = self.api.vocab_random().ok().flatten();
    }

    fn refresh_stats(&mut self) {
        self.stats = self.api.stats().ok();
    }

    /// Manual today-ensure (non-forcing): select the returned day and
    /// refresh dependent state.
    pub fn fetch_today(&mut self) {
        match self.api.today_auto(false) {
            Ok(item) => {
                self.selected_day = item.day_no;
                match self.api.vocab_list() {
                    Ok(items) => self.vocabulary = items,
                    Err(_) => {
                        if self.item_for_day(item.day_no).is_none() {
                            self.vocabulary.push(item);
                        }
                    }
                }
                self.refresh_random();
                self.clamp_list_page();
                self.clear_attempt();
            }
            Err(err) => self.raise(NoticeKind::Error, err.to_string()),
        }
    }

    pub fn sign_in(&mut self) {
        self.authenticate(false);
    }

    pub fn sign_up(&mut self) {
        self.authenticate(true);
    }

    fn authenticate(&mut self, create_account: bool) {
        let email = self.email_input.value().trim().to_string();
        let password = self.password_input.value().to_string();
        if email.is_empty() || password.is_empty() {
            // Validation failure: no network round trip.
            self.raise(NoticeKind::Error, "Email and password are required.");
            return;
        }

        let result = if create_account {
            self.api.sign_up(&email, &password)
        } else {
            self.api.sign_in(&email, &password)
        };

        match result {
            Ok(user) => {
                self.session = Some(user);
                self.password_input.clear();
                self.screen = Screen::Main;
                self.load_main();
            }
            // Failed auth leaves the session unset and the form intact.
            Err(err) => self.raise(NoticeKind::Error, err.to_string()),
        }
    }

    /// Best-effort server logout (POST, then GET). Local state clears
    /// regardless so the user always lands signed out.
    pub fn logout(&mut self) {
        let _ = self.api.logout();
        self.clear_local_session();
    }

    fn clear_local_session(&mut self) {
        self.session = None;
        self.vocabulary.clear();
        self.random_pick = None;
        self.stats = None;
        self.revealed.clear();
        self.selected_day = 1;
        self.list_page = 1;
        self.table_row = 0;
        self.focus = Focus::Answer;
        self.search_input.clear();
        self.password_input.clear();
        self.day_jump = None;
        self.confirm_reset = false;
        self.clear_attempt();
        self.auth_field = AuthField::Email;
        self.screen = Screen::Auth;
    }

    /// Wipe all vocabulary on the server, then rebuild from a fresh fetch.
    pub fn reset_vocabulary(&mut self) {
        match self.api.reset() {
            Ok(()) => {
                self.vocabulary.clear();
                self.random_pick = None;
                self.revealed.clear();
                self.selected_day = 1;
                self.list_page = 1;
                self.table_row = 0;
                self.clear_attempt();
                self.raise(NoticeKind::Success, "Vocabulary reset.");
                self.load_main();
            }
            Err(err) => self.raise(NoticeKind::Error, err.to_string()),
        }
    }

    /// Fetch the server's markdown export and write it beside the CWD.
    pub fn export_to_file(&mut self) {
        match self.api.export_markdown() {
            Ok(markdown) => match std::fs::write("vocab-export.md", markdown) {
                Ok(()) => {
                    self.raise(NoticeKind::Success, "Exported to vocab-export.md")
                }
                Err(err) => {
                    self.raise(NoticeKind::Error, format!("export failed: {err}"))
                }
            },
            Err(err) => self.raise(NoticeKind::Error, err.to_string()),
        }
    }

    pub fn show_google_link(&mut self) {
        let url = self.api.google_login_url();
        self.raise(
            NoticeKind::Info,
            format!("Open in your browser to sign in with Google:\n{url}"),
        );
    }
}
