//! The session state machine.

use super::collaborators::{AudioPlayer, Clock, InputSource, Renderer, TextRole};
use super::config::SessionConfig;
use super::input::{KEY_BINDINGS, Key, QUIT_KEY, RESET_KEY, START_KEY};
use super::state::{GameMode, GameState, Outcome, PlayerType};
use crate::ai::{EasyAi, Minimax, Opponent, wall_clock_rng};
use crate::board::{Board, Cell, Coord, Symbol};
use crate::error::{RhythmError, SessionError};
use crate::rhythm::{Beatmap, BeatmapSource, Judgement, RhythmEngine};
use rand::Rng;
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Result of one [`GameSession::update`] tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// Keep running.
    Continue,
    /// The quit key was held long enough; call [`GameSession::shutdown`].
    Quit,
}

/// A running game: menu, countdown, rounds and scores.
///
/// The session owns its clock and audio player. Input and rendering are
/// borrowed per call, so a front end can keep them in its own event loop.
///
/// Scores survive restarts and are only cleared by holding [`RESET_KEY`].
#[derive(Debug)]
pub struct GameSession<C: Clock, A: AudioPlayer> {
    config: SessionConfig,
    beatmap_source: BeatmapSource,
    clock: C,
    audio: A,
    state: GameState,
    mode: Option<GameMode>,
    board: Board,
    current_symbol: Symbol,
    current_player_type: PlayerType,
    scores: [u32; 2],
    rounds: u32,
    outcome: Option<Outcome>,
    rhythm: Option<RhythmEngine>,
    highlighted: [Option<Coord>; 2],
    last_judgement: Option<(Symbol, Judgement)>,
    countdown: u32,
    countdown_tick: Instant,
}

impl<C: Clock, A: AudioPlayer> GameSession<C, A> {
    /// Creates a session in the menu.
    ///
    /// The beat schedule is loaded once up front so a broken asset is
    /// reported here rather than when the rhythm mode is picked.
    #[instrument(skip(clock, audio))]
    pub fn new(
        config: SessionConfig,
        beatmap_source: BeatmapSource,
        clock: C,
        audio: A,
    ) -> Result<Self, SessionError> {
        let beatmap = Beatmap::load(&beatmap_source)?;
        info!(beats = beatmap.len(), "Beat schedule available");

        let countdown_tick = clock.now();
        let session = Self {
            config,
            beatmap_source,
            clock,
            audio,
            state: GameState::Menu,
            mode: None,
            board: Board::new(),
            current_symbol: random_symbol(),
            current_player_type: PlayerType::Human,
            scores: [0; 2],
            rounds: 0,
            outcome: None,
            rhythm: None,
            highlighted: [None; 2],
            last_judgement: None,
            countdown: *config.countdown_secs(),
            countdown_tick,
        };
        info!(first = %session.current_symbol, "Session created");
        Ok(session)
    }

    /// Advances the session by one tick.
    ///
    /// On error nothing has changed phase; the same tick may be retried.
    #[instrument(skip(self, input), fields(state = ?self.state))]
    pub fn update(&mut self, input: &impl InputSource) -> Result<TickOutcome, SessionError> {
        if input.press_duration(QUIT_KEY) >= self.hold_ticks() {
            info!("Quit key held");
            return Ok(TickOutcome::Quit);
        }

        match self.state {
            GameState::Menu => self.update_menu(input)?,
            GameState::Loading => self.update_loading()?,
            GameState::Playing => self.update_playing(input)?,
            GameState::GameOver => self.update_game_over(input)?,
        }
        Ok(TickOutcome::Continue)
    }

    /// Stops the audio track. Call once when leaving the game.
    #[instrument(skip(self))]
    pub fn shutdown(&mut self) -> Result<(), SessionError> {
        self.audio.stop()?;
        info!("Session shut down");
        Ok(())
    }

    fn update_menu(&mut self, input: &impl InputSource) -> Result<(), SessionError> {
        self.check_reset(input);

        if let Some(mode) =
            GameMode::iter().find(|mode| input.is_just_pressed(Key::Char(mode.menu_key())))
        {
            self.select_mode(mode)?;
        }

        if input.is_just_pressed(START_KEY) {
            match self.mode {
                Some(mode) => {
                    self.countdown = *self.config.countdown_secs();
                    self.countdown_tick = self.clock.now();
                    self.state = GameState::Loading;
                    info!(?mode, countdown = self.countdown, "Round loading");
                }
                None => debug!("Start pressed with no mode selected"),
            }
        }
        Ok(())
    }

    #[instrument(skip(self))]
    fn select_mode(&mut self, mode: GameMode) -> Result<(), SessionError> {
        self.rhythm = match mode {
            GameMode::Rhythm => Some(RhythmEngine::new(Beatmap::load(&self.beatmap_source)?)),
            _ => None,
        };
        self.mode = Some(mode);
        info!(?mode, "Mode selected");
        Ok(())
    }

    fn update_loading(&mut self) -> Result<(), SessionError> {
        self.current_player_type = PlayerType::Human;

        if self.countdown > 0 {
            if self.clock.elapsed_since(self.countdown_tick) >= Duration::from_secs(1) {
                self.countdown -= 1;
                self.countdown_tick = self.clock.now();
                debug!(countdown = self.countdown, "Countdown");
            }
            return Ok(());
        }

        self.audio.play()?;
        self.state = GameState::Playing;
        info!(mode = ?self.mode, first = %self.current_symbol, "Round started");
        Ok(())
    }

    fn update_playing(&mut self, input: &impl InputSource) -> Result<(), SessionError> {
        let Some(mode) = self.mode else {
            warn!("Playing without a mode");
            return Ok(());
        };

        if let Some(engine) = self.rhythm.as_mut() {
            if !engine.is_started() {
                engine.start(self.clock.now());
                info!("Rhythm clock started");
            }
            let elapsed = engine.elapsed(self.clock.now())?;
            if engine.is_finished(elapsed) {
                info!(elapsed, "Track exhausted");
                self.finish(Outcome::OnPoints(self.leader()));
                return Ok(());
            }
        }

        let chosen = match (self.current_player_type, mode) {
            (PlayerType::Ai, GameMode::EasyAi) => self.ai_move(&EasyAi::new()),
            (PlayerType::Ai, GameMode::HardAi) => self.ai_move(&Minimax::new(self.current_symbol)),
            (PlayerType::Ai, _) => {
                warn!(?mode, "AI turn in a mode without an opponent");
                None
            }
            (PlayerType::Human, _) => self.human_move(input),
        };
        let Some(at) = chosen else {
            return Ok(());
        };

        if mode == GameMode::Rhythm {
            self.apply_rhythm(at)?;
        }
        self.perform_move(at, mode);

        if let Some(line) = self.board.check_winner() {
            self.scores[line.symbol.index()] += *self.config.win_bonus();
            self.finish(Outcome::Won(line));
        } else if self.board.is_full() {
            self.finish(Outcome::Draw);
        }
        Ok(())
    }

    fn ai_move(&self, opponent: &impl Opponent) -> Option<Coord> {
        let chosen = opponent.choose_move(&self.board);
        debug!(opponent = opponent.name(), symbol = %self.current_symbol, ?chosen, "AI chose");
        chosen
    }

    /// Pointer first, then the key table; the first empty target wins.
    fn human_move(&self, input: &impl InputSource) -> Option<Coord> {
        input
            .pointer_cell()
            .into_iter()
            .chain(
                KEY_BINDINGS
                    .iter()
                    .filter(|(key, _)| input.is_just_pressed(*key))
                    .map(|(_, at)| *at),
            )
            .find(|&at| self.board.is_empty(at))
    }

    #[instrument(skip(self))]
    fn apply_rhythm(&mut self, at: Coord) -> Result<(), SessionError> {
        let now = self.clock.now();
        let symbol = self.current_symbol;
        let engine = self.rhythm.as_mut().ok_or(RhythmError::NotStarted)?;

        let judgement = engine.judge_at(now)?;
        let update = engine.update(symbol, at);

        let slot = &mut self.highlighted[symbol.index()];
        if let Some(gone) = update.remove {
            self.board.remove(gone);
            if *slot == Some(gone) {
                *slot = None;
            }
            debug!(%gone, "Oldest placement removed");
        }
        if let Some(next) = update.highlight {
            *slot = Some(next);
        }

        self.scores[symbol.index()] += judgement.points();
        self.last_judgement = Some((symbol, judgement));
        debug!(?judgement, "Placement judged");
        Ok(())
    }

    fn perform_move(&mut self, at: Coord, mode: GameMode) {
        self.board.place(at, self.current_symbol);
        debug!(symbol = %self.current_symbol, %at, player = ?self.current_player_type, "Placed");

        self.current_symbol = self.current_symbol.opponent();
        if !mode.pins_player_type() {
            self.current_player_type = self.current_player_type.toggle();
        }
        self.rounds += 1;
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(
            message = %outcome.message(),
            o = self.scores[Symbol::O.index()],
            x = self.scores[Symbol::X.index()],
            "Round over"
        );
        self.outcome = Some(outcome);
        self.state = GameState::GameOver;
    }

    fn update_game_over(&mut self, input: &impl InputSource) -> Result<(), SessionError> {
        self.check_reset(input);

        if input.is_just_pressed(START_KEY) {
            self.audio.restart()?;
            self.restart_round();
            self.state = GameState::Menu;
        }
        Ok(())
    }

    #[instrument(skip(self))]
    fn restart_round(&mut self) {
        self.board.clear();
        self.rounds = 0;
        self.outcome = None;
        self.mode = None;
        self.rhythm = None;
        self.highlighted = [None; 2];
        self.last_judgement = None;
        self.countdown = *self.config.countdown_secs();
        self.current_symbol = random_symbol();
        self.current_player_type = PlayerType::Human;
        info!(first = %self.current_symbol, "Back to menu");
    }

    fn check_reset(&mut self, input: &impl InputSource) {
        if input.press_duration(RESET_KEY) == self.hold_ticks() {
            self.scores = [0; 2];
            info!("Scores reset");
        }
    }

    /// Hold length for the quit and reset keys; never below one tick.
    fn hold_ticks(&self) -> u32 {
        (*self.config.hold_ticks()).max(1)
    }

    fn leader(&self) -> Option<Symbol> {
        let (o, x) = (self.score(Symbol::O), self.score(Symbol::X));
        match o.cmp(&x) {
            std::cmp::Ordering::Greater => Some(Symbol::O),
            std::cmp::Ordering::Less => Some(Symbol::X),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Issues the draw commands for the current frame.
    pub fn draw(&self, renderer: &mut impl Renderer) {
        match self.state {
            GameState::Menu => self.draw_menu(renderer),
            GameState::Loading => {
                renderer.draw_text(TextRole::Heading, "Get ready");
                renderer.draw_text(TextRole::Countdown, &self.countdown.to_string());
            }
            GameState::Playing => self.draw_round(renderer),
            GameState::GameOver => {
                self.draw_round(renderer);
                if let Some(outcome) = &self.outcome {
                    renderer.draw_text(TextRole::Banner, &outcome.message());
                }
                renderer.draw_text(TextRole::Prompt, "Press Enter to restart");
                renderer.draw_text(TextRole::Hint, "Hold R to reset scores, hold Esc to quit");
            }
        }
    }

    fn draw_menu(&self, renderer: &mut impl Renderer) {
        renderer.draw_text(TextRole::Title, "Tic Tac Beat");
        renderer.draw_text(TextRole::Heading, "Choose a mode");
        for mode in GameMode::iter() {
            let text = format!("{}. {}", mode.menu_key(), mode.label());
            renderer.draw_text(
                TextRole::MenuItem {
                    selected: self.mode == Some(mode),
                },
                &text,
            );
        }
        renderer.draw_text(TextRole::Score, &self.score_line());
        renderer.draw_text(TextRole::Prompt, "Press Enter to start");
        renderer.draw_text(TextRole::Hint, "Hold R to reset scores, hold Esc to quit");
    }

    fn draw_round(&self, renderer: &mut impl Renderer) {
        renderer.draw_board();
        for at in Board::coords() {
            if let Cell::Occupied(symbol) = self.board.get(at) {
                let highlighted = self.highlighted[symbol.index()] == Some(at);
                renderer.draw_symbol(at, symbol, highlighted);
            }
        }
        if let Some(Outcome::Won(line)) = &self.outcome {
            renderer.draw_winning_line(line.cells);
        }

        if let Some(engine) = &self.rhythm
            && let Ok(elapsed) = engine.elapsed(self.clock.now())
        {
            let on_beat = self.state == GameState::Playing && engine.is_on_beat(elapsed);
            renderer.draw_beat_circle(on_beat);
            if on_beat {
                renderer.draw_text(TextRole::Prompt, "Click !");
            }
        }
        if let Some((symbol, judgement)) = self.last_judgement {
            renderer.draw_text(TextRole::Judgement, &format!("{}: {}", symbol, judgement.label()));
        }

        if self.state == GameState::Playing {
            renderer.draw_text(
                TextRole::Status,
                &format!(
                    "Round {} - {} to move ({:?})",
                    self.rounds + 1,
                    self.current_symbol,
                    self.current_player_type
                ),
            );
        }
        renderer.draw_text(TextRole::Score, &self.score_line());
    }

    fn score_line(&self) -> String {
        format!("O: {}  X: {}", self.score(Symbol::O), self.score(Symbol::X))
    }

    /// Current phase.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Selected mode, `None` until one is picked in the menu.
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Symbol to move next.
    pub fn current_symbol(&self) -> Symbol {
        self.current_symbol
    }

    /// Whether the next move comes from a human or the AI.
    pub fn current_player_type(&self) -> PlayerType {
        self.current_player_type
    }

    /// Running score for `symbol`.
    pub fn score(&self, symbol: Symbol) -> u32 {
        self.scores[symbol.index()]
    }

    /// Placements made in the current round.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// How the last round ended, while on the game-over screen.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Seconds left in the countdown.
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Rhythm engine of the current round, in rhythm mode.
    pub fn rhythm(&self) -> Option<&RhythmEngine> {
        self.rhythm.as_ref()
    }

    /// Cell of `symbol` marked for removal, in rhythm mode.
    pub fn highlighted(&self, symbol: Symbol) -> Option<Coord> {
        self.highlighted[symbol.index()]
    }

    /// Judgement of the most recent rhythm placement.
    pub fn last_judgement(&self) -> Option<(Symbol, Judgement)> {
        self.last_judgement
    }

    /// The clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The audio player.
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Mutable access to the audio player, for front ends that pump it.
    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }
}

fn random_symbol() -> Symbol {
    if wall_clock_rng().random_bool(0.5) {
        Symbol::O
    } else {
        Symbol::X
    }
}
