use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::Config,
    quiz::{Progress, QuizError, QuizSession, QuizState},
    share::{open_share, share_text, ShareOutcome},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Question,
    Result,
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Share,
    Quit,
}

/// Holds the current quiz session plus the bits of UI state around it
#[derive(Debug)]
pub struct App {
    pub session: QuizSession,
    pub config: Config,
    /// Highlighted option on the question screen
    pub cursor: usize,
    /// One-line message shown under the result, e.g. after sharing
    pub status: Option<String>,
    rng: Option<StdRng>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            session: QuizSession::new(),
            config,
            cursor: 0,
            status: None,
            rng: None,
        }
    }

    /// Uses a seeded generator so every shuffle, retakes included, is reproducible
    pub fn with_seed(config: Config, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            session: QuizSession::with_rng(&mut rng),
            config,
            cursor: 0,
            status: None,
            rng: Some(rng),
        }
    }

    pub fn state(&self) -> AppState {
        match self.session.state() {
            QuizState::InProgress => AppState::Question,
            QuizState::Completed => AppState::Result,
        }
    }

    pub fn share_text(&self) -> Option<String> {
        self.session
            .result()
            .map(|r| share_text(r, &self.config.share_url))
    }

    fn option_count(&self) -> usize {
        self.session
            .current_question()
            .map(|q| q.options.len())
            .unwrap_or(0)
    }

    pub fn cursor_down(&mut self) {
        let len = self.option_count();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn cursor_up(&mut self) {
        let len = self.option_count();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    /// Answers with the option at `index`; bad indexes are reported in the status line
    pub fn select(&mut self, index: usize) {
        match self.session.choose(index) {
            Ok(Progress::Next(_)) | Ok(Progress::Completed(_)) => {
                self.cursor = 0;
                self.status = None;
            }
            Err(QuizError::NoSuchOption { len, .. }) => {
                self.status = Some(format!("pick an option between 1 and {len}"));
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    pub fn retake(&mut self) {
        self.session = match self.rng.as_mut() {
            Some(rng) => self.session.retake_with_rng(rng),
            None => self.session.retake(),
        };
        self.cursor = 0;
        self.status = None;
    }

    /// Opens the share intent for the current result
    pub fn share(&mut self) {
        let Some(text) = self.share_text() else {
            return;
        };
        self.status = Some(match open_share(self.config.share_target, &text) {
            Ok(ShareOutcome::Opened) => format!("shared to {}", self.config.share_target),
            Ok(ShareOutcome::BrowserUnavailable) => "no browser available to share".to_string(),
            Err(e) => format!("could not share: {e}"),
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.code == KeyCode::Esc
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        {
            return AppAction::Quit;
        }

        match self.state() {
            AppState::Question => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.cursor_up(),
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.cursor_down(),
                KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
                KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                    // digits are 1-based
                    let index = c as usize - '1' as usize;
                    self.select(index);
                }
                _ => {}
            },
            AppState::Result => match key.code {
                KeyCode::Char('r') => self.retake(),
                KeyCode::Char('s') => return AppAction::Share,
                _ => {}
            },
        }
        AppAction::Continue
    }
}
