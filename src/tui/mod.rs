//! Terminal front end: event loop, input, rendering and the click track.

mod audio;
mod input;
mod ui;

pub use audio::ClickTrack;
pub use input::{InputTracker, translate_key};
pub use ui::{BoardGeometry, Scene, render};

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use tictacbeat_core::{Beatmap, GameSession, SystemClock, TickOutcome};
use tokio::time::MissedTickBehavior;
use tracing::{error, info, instrument, warn};

type Tui = Terminal<CrosstermBackend<Stdout>>;
type Session = GameSession<SystemClock, ClickTrack>;

/// Runs the game until the player quits.
#[instrument(skip(config), fields(tick_rate = config.tick_rate()))]
pub async fn run(config: AppConfig) -> Result<()> {
    let source = config.beatmap_source();
    let beatmap = Beatmap::load(&source).context("Failed to load beatmap")?;
    let audio = ClickTrack::new(&beatmap, *config.click_bell());
    let mut session = GameSession::new(*config.session(), source, SystemClock, audio)
        .context("Failed to create game session")?;

    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
    }
    info!(enhanced, "Terminal ready");
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut session, *config.tick_rate(), enhanced).await;

    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = session.shutdown() {
        warn!(error = %err, "Audio did not stop cleanly");
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Fixed-rate loop: drain events, tick the session, ring the bell, draw.
async fn run_loop(
    terminal: &mut Tui,
    session: &mut Session,
    tick_rate: u32,
    reports_release: bool,
) -> Result<()> {
    let mut ticker = tokio::time::interval(Duration::from_secs(1) / tick_rate.max(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut input = InputTracker::new(reports_release);
    let mut geometry: Option<BoardGeometry> = None;

    loop {
        ticker.tick().await;
        let now = Instant::now();

        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            if is_interrupt(&event) {
                info!("Interrupted");
                return Ok(());
            }
            input.handle_event(&event, now, geometry.as_ref());
        }

        match session.update(&input) {
            Ok(TickOutcome::Continue) => {}
            Ok(TickOutcome::Quit) => {
                info!("Quit requested");
                return Ok(());
            }
            Err(err) => warn!(error = %err, state = ?session.state(), "Tick failed, retrying"),
        }
        input.end_tick(now);

        if session.audio_mut().pump(now) {
            let backend = terminal.backend_mut();
            backend.write_all(b"\x07")?;
            backend.flush()?;
        }

        let mut scene = Scene::default();
        session.draw(&mut scene);
        terminal.draw(|frame| geometry = render(frame, &scene))?;
    }
}

fn is_interrupt(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(key)
            if key.kind == KeyEventKind::Press
                && key.code == KeyCode::Char('c')
                && key.modifiers.contains(KeyModifiers::CONTROL)
    )
}
