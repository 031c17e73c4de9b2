//! Game loop
//!
//! Owns the session, the held-key tracker and the high score store, and
//! drives them at a fixed 16 ms tick. Input is polled with a timeout that
//! expires at the next tick, and a frame is drawn on every iteration; the
//! renderer only writes the cells that changed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent};
use tracing::{debug, info};

use crate::config::Settings;
use crate::core::{GameSession, GameSnapshot};
use crate::highscore::{save_or_warn, HighScoreStore};
use crate::input::{InputHandler, KeyInput};
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use crate::types::{GameAction, TICK_MS};

pub struct App<S: HighScoreStore> {
    session: GameSession,
    input: InputHandler,
    store: S,
    view: GameView,
    snap: GameSnapshot,
    fb: FrameBuffer,
}

impl<S: HighScoreStore> App<S> {
    /// Build a started session from `settings`, seeded with the stored high score
    pub fn new(settings: &Settings, store: S) -> Self {
        let session = GameSession::new(settings.session).with_high_score(store.load());
        Self::with_session(session, store, settings.key_release_timeout_ms)
    }

    pub fn with_session(mut session: GameSession, store: S, key_release_timeout_ms: u32) -> Self {
        session.start();
        Self {
            session,
            input: InputHandler::new().with_key_release_timeout_ms(key_release_timeout_ms),
            store,
            view: GameView::default(),
            snap: GameSnapshot::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn should_quit(&self) -> bool {
        self.session.quit_requested()
    }

    /// Feed one terminal key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(input) = self.input.handle_key_event(key) {
            self.apply(input);
        }
        self.drain_events();
    }

    fn apply(&mut self, input: KeyInput) {
        match input {
            // The pause key doubles as "play again" on the game over screen.
            KeyInput::Press(GameAction::TogglePause) if self.session.game_over() => {
                self.restart();
            }
            KeyInput::Press(GameAction::Restart) => self.restart(),
            KeyInput::Press(action) => {
                self.session.press(action);
                // A refused hold (paused) must not leave the key stuck here.
                if action.repeats() && !self.session.is_held(action) {
                    self.input.forget(action);
                }
            }
            KeyInput::Release(action) => {
                self.session.release(action);
            }
        }
    }

    fn restart(&mut self) {
        // Keys held across a restart must be pressed again.
        self.input.reset();
        self.session.restart();
    }

    /// Advance input timeouts and the session by `elapsed_ms`
    pub fn step(&mut self, elapsed_ms: u32) {
        for action in self.input.update(elapsed_ms) {
            self.session.release(action);
        }
        self.session.tick(elapsed_ms);
        self.drain_events();
    }

    fn drain_events(&mut self) {
        let Some(event) = self.session.take_last_event() else {
            return;
        };
        if event.lines_cleared > 0 {
            debug!(
                lines = event.lines_cleared,
                points = event.line_clear_score,
                "cleared lines"
            );
        }
        if let Some(score) = event.new_high_score {
            save_or_warn(&mut self.store, score);
        }
    }

    /// Render the current state into the owned framebuffer
    pub fn frame(&mut self, viewport: Viewport) -> &mut FrameBuffer {
        self.session.snapshot_into(&mut self.snap);
        self.view.render_into(&self.snap, viewport, &mut self.fb);
        &mut self.fb
    }

    /// Run until the player quits
    pub fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let tick_duration = Duration::from_millis(u64::from(TICK_MS));
        let mut last_tick = Instant::now();

        while !self.should_quit() {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let fb = self.frame(Viewport::new(w, h));
            term.draw_swap(fb)?;

            let timeout = tick_duration.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(..) => term.invalidate(),
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_duration {
                last_tick = Instant::now();
                self.step(TICK_MS);
            }
        }
        info!(score = self.session.score(), "quit");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};

    use crate::core::{SequenceGenerator, SessionConfig};
    use crate::highscore::MemoryHighScoreStore;
    use crate::types::PieceKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn o_app(high: u32) -> App<MemoryHighScoreStore> {
        let session =
            GameSession::with_generator(SessionConfig::default(), SequenceGenerator::new([PieceKind::O]))
                .with_high_score(high);
        App::with_session(session, MemoryHighScoreStore::new(high), 150)
    }

    #[test]
    fn test_new_app_is_started() {
        let app = o_app(0);
        assert!(app.session().active().is_some());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_escape_quits() {
        let mut app = o_app(0);
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_game_over_saves_new_high_score_and_space_restarts() {
        let mut app = o_app(100);
        while !app.session().game_over() {
            app.handle_key(press(KeyCode::Enter));
        }
        assert_eq!(app.store().load(), 144);
        assert_eq!(app.store().saves(), 1);

        app.handle_key(press(KeyCode::Char(' ')));
        assert!(!app.session().game_over());
        assert_eq!(app.session().episode_id(), 1);
        assert_eq!(app.session().high_score(), 144);
    }

    #[test]
    fn test_lower_score_is_not_saved() {
        let mut app = o_app(1000);
        while !app.session().game_over() {
            app.handle_key(press(KeyCode::Enter));
        }
        assert_eq!(app.store().saves(), 0);
        assert_eq!(app.store().load(), 1000);
    }

    #[test]
    fn test_held_key_auto_releases() {
        let mut app = o_app(0);
        app.handle_key(press(KeyCode::Left));
        assert!(app.session().is_held(GameAction::MoveLeft));
        app.step(TICK_MS);
        assert!(app.session().is_held(GameAction::MoveLeft));
        for _ in 0..10 {
            app.step(TICK_MS);
        }
        assert!(!app.session().is_held(GameAction::MoveLeft));
    }

    #[test]
    fn test_key_held_through_pause_moves_after_resume() {
        let mut app = o_app(0);
        let start_x = app.session().active().map(|p| p.x);

        app.handle_key(press(KeyCode::Char('p')));
        app.handle_key(press(KeyCode::Left));
        assert!(!app.session().is_held(GameAction::MoveLeft));
        app.handle_key(press(KeyCode::Char('p')));
        assert!(!app.session().paused());

        let repeat = KeyEvent {
            kind: KeyEventKind::Repeat,
            ..press(KeyCode::Left)
        };
        for _ in 0..4 {
            app.handle_key(repeat);
            app.step(TICK_MS);
            app.step(TICK_MS);
        }

        assert!(app.session().is_held(GameAction::MoveLeft));
        let x = app.session().active().map(|p| p.x);
        assert!(x < start_x, "piece stayed at {x:?}");
    }

    #[test]
    fn test_frame_shows_score_panel() {
        let mut app = o_app(0);
        let fb = app.frame(Viewport::new(60, 24));
        assert!(fb.contains_text("SCORE"));
        assert!(fb.contains_text("NEXT"));
    }
}
