use animalquiz::{
    app::{App, AppAction},
    config::{Config, ConfigStore, FileConfigStore},
    runtime::{CrosstermEventSource, QuizEvent, QuizEventSource},
    share::ShareTarget,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
};

/// which animal are you? a five question personality quiz
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Answer five questions and find out which animal you are: cat, dog, fox, hamster or horse. Share your result or retake the quiz for a fresh shuffle."
)]
pub struct Cli {
    /// link appended to the share text (default from config, then http://localhost:3000)
    #[clap(short = 'u', long)]
    share_url: Option<String>,

    /// where the (s)hare key posts the result
    #[clap(short = 't', long, value_enum)]
    share_target: Option<ShareTarget>,

    /// seed for the option shuffle, for reproducible runs
    #[clap(long)]
    seed: Option<u64>,

    /// write the effective share settings to the config file
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    fn to_config(&self, stored: Config) -> Config {
        stored.merged(self.share_url.clone(), self.share_target)
    }

    fn to_app(&self, config: Config) -> App {
        match self.seed {
            Some(seed) => App::with_seed(config, seed),
            None => App::new(config),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let store = FileConfigStore::new();
    let config = cli.to_config(store.load());
    if cli.save_config {
        store.save(&config)?;
        log::info!("saved config to {}", store.path().display());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = cli.to_app(config);
    let res = start_tui(&mut terminal, &mut app, &CrosstermEventSource::new());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn start_tui<B: Backend, E: QuizEventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &E,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match events.next_event() {
            QuizEvent::Closed => {
                log::warn!("input closed, leaving the quiz");
                break;
            }
            QuizEvent::Resize => {}
            QuizEvent::Key(key) => match app.handle_key(key) {
                AppAction::Quit => break,
                AppAction::Share => app.share(),
                AppAction::Continue => {}
            },
        }
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;
    }

    Ok(())
}
