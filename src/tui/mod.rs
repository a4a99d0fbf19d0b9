//! Terminal UI for Strictly Numeri

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use strictly_numeri::{
    ChallengeSource, CommandSpeaker, GameSession, RandomChallenges, SessionConfig, Settings,
    SilentSpeaker, Speaker,
};
use tracing::{error, info, instrument};

use app::App;

/// How long to wait for a key before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the terminal drill
pub fn run_tui(settings: Settings, seed: Option<u64>, mute: bool) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            settings.log_file().display()
        )
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(?seed, mute, "Starting Strictly Numeri TUI");

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let speaker: Box<dyn Speaker> = if mute {
        Box::new(SilentSpeaker)
    } else {
        Box::new(CommandSpeaker::new(settings.speech()))
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Start the session after the screen is ready so the first number is heard on it.
    let session = GameSession::start(
        RandomChallenges::new(rng),
        speaker,
        SessionConfig::from(&settings),
    );
    let res = run_loop(&mut terminal, App::new(session));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, poll, apply - until the player quits.
#[instrument(skip_all)]
fn run_loop<B, C, S>(terminal: &mut Terminal<B>, mut app: App<C, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
    C: ChallengeSource,
    S: Speaker,
{
    loop {
        let now = Instant::now();
        app.tick(now);

        let snapshot = app.session().snapshot();
        let answers = app.session().accepted_answers();
        let shaking = app.session().is_shaking(now);
        terminal.draw(|f| ui::draw(f, &snapshot, &answers, app.input(), shaking))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            let action = input::action_for(key, snapshot.feedback, snapshot.phase);
            app.handle(action, Instant::now());
        }

        if app.should_quit() {
            info!(
                score = app.session().score(),
                level = %app.session().level(),
                "User quit"
            );
            return Ok(());
        }
    }
}
