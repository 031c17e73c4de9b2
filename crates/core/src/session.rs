//! Game session module - the falling-block state machine
//!
//! Ties the board, piece catalog, placement validator and piece generator
//! together. It owns the fall timer and the held-key repeat table, applies
//! input, locks pieces, clears rows, keeps score and detects game over.
//!
//! A session is driven by two kinds of calls:
//!
//! - one entry point per [`GameAction`] (or `press`/`release` for held keys)
//! - [`GameSession::tick`] with the milliseconds elapsed since the last tick
//!
//! Invalid moves and rotations are silent no-ops. The only terminal condition
//! is a spawn that does not fit, which ends the game.

use tracing::{debug, info};

use crate::board::Board;
use crate::config::SessionConfig;
use crate::generator::PieceGenerator;
use crate::pieces::{next_rotation, prev_rotation};
use crate::placement::{is_valid, landing_y};
use crate::repeat::RepeatTimers;
use crate::scoring::{drop_points, fall_interval_ms, level_for_lines, line_clear_points};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, LockEvent, PieceKind, SPAWN_X, SPAWN_Y};

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A piece of `kind` at the spawn anchor in its spawn orientation
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn fits(&self, board: &Board) -> bool {
        is_valid(board, self.kind, self.rotation, self.x, self.y)
    }

    pub fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn with_rotation(self, rotation: u8) -> Self {
        Self { rotation, ..self }
    }
}

/// Complete session state
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    generator: Box<dyn PieceGenerator>,
    board: Board,
    active: Option<ActivePiece>,
    /// Preview of the piece that spawns next
    next: PieceKind,
    repeat: RepeatTimers,
    /// Monotonic session clock, advanced by `tick`
    clock_ms: u64,
    fall_timer_ms: u32,
    score: u32,
    lines: u32,
    level: u32,
    fall_interval_ms: u32,
    high_score: u32,
    /// Increments on every successful spawn, reset on restart
    piece_id: u32,
    /// Increments on every restart
    episode_id: u32,
    last_event: Option<LockEvent>,
    started: bool,
    paused: bool,
    game_over: bool,
    quit_requested: bool,
}

impl GameSession {
    /// Create a session whose generator is built from `config`
    pub fn new(config: SessionConfig) -> Self {
        let generator = config.randomizer.build(config.seed);
        Self::from_boxed(config, generator)
    }

    /// Create a session that draws pieces from `generator`
    pub fn with_generator<G>(config: SessionConfig, generator: G) -> Self
    where
        G: PieceGenerator + 'static,
    {
        Self::from_boxed(config, Box::new(generator))
    }

    fn from_boxed(config: SessionConfig, mut generator: Box<dyn PieceGenerator>) -> Self {
        let next = generator.draw();
        Self {
            fall_interval_ms: fall_interval_ms(1, &config.fall),
            config,
            generator,
            board: Board::new(),
            active: None,
            next,
            repeat: RepeatTimers::new(),
            clock_ms: 0,
            fall_timer_ms: 0,
            score: 0,
            lines: 0,
            level: 1,
            high_score: 0,
            piece_id: 0,
            episode_id: 0,
            last_event: None,
            started: false,
            paused: false,
            game_over: false,
            quit_requested: false,
        }
    }

    /// Seed the session with a previously persisted high score
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = high_score;
        self
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access, for building scenarios in tests and tools
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn is_held(&self, action: GameAction) -> bool {
        self.repeat.is_held(action)
    }

    fn can_act(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    /// Move the preview piece onto the board.
    ///
    /// Sets game over (without touching the board) when the spawn placement
    /// does not fit.
    pub fn spawn_piece(&mut self) -> bool {
        if self.place_next() {
            true
        } else {
            self.end_game();
            false
        }
    }

    fn place_next(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.next);
        if !piece.fits(&self.board) {
            return false;
        }
        self.active = Some(piece);
        self.next = self.generator.draw();
        self.piece_id = self.piece_id.wrapping_add(1);
        self.fall_timer_ms = 0;
        debug!(
            kind = %piece.kind,
            next = %self.next,
            piece_id = self.piece_id,
            "spawned piece"
        );
        true
    }

    /// Enter the terminal state; returns the new high score if one was set
    fn end_game(&mut self) -> Option<u32> {
        self.game_over = true;
        self.active = None;
        self.repeat.clear();
        info!(
            score = self.score,
            lines = self.lines,
            level = self.level,
            episode_id = self.episode_id,
            "game over"
        );
        if self.score > self.high_score {
            self.high_score = self.score;
            info!(high_score = self.high_score, "new high score");
            Some(self.high_score)
        } else {
            None
        }
    }

    /// Write the active piece into the board, clear rows and spawn the next piece
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board
            .lock_piece(piece.kind, piece.rotation, piece.x, piece.y);
        self.fall_timer_ms = 0;

        let cleared = self.board.clear_full_rows();
        let lines_cleared = cleared.len() as u32;
        let mut line_clear_score = 0;
        if lines_cleared > 0 {
            // Points use the level in force before these rows are counted.
            line_clear_score = line_clear_points(lines_cleared, self.level);
            self.score = self.score.saturating_add(line_clear_score);
            self.lines += lines_cleared;
            self.level = level_for_lines(self.lines);
            self.fall_interval_ms = fall_interval_ms(self.level, &self.config.fall);
            debug!(
                rows = ?cleared.as_slice(),
                points = line_clear_score,
                level = self.level,
                "cleared rows"
            );
        }
        debug!(kind = %piece.kind, x = piece.x, y = piece.y, "locked piece");

        let new_high_score = if self.place_next() {
            None
        } else {
            self.end_game()
        };

        self.last_event = Some(LockEvent {
            lines_cleared,
            line_clear_score,
            game_over: self.game_over,
            new_high_score,
        });
    }

    /// Take and clear the event recorded by the most recent lock
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        if !self.can_act() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let moved = active.shifted(dx, dy);
        if !moved.fits(&self.board) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    fn try_rotate(&mut self, clockwise: bool) -> bool {
        if !self.can_act() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let rotation = if clockwise {
            next_rotation(active.kind, active.rotation)
        } else {
            prev_rotation(active.kind, active.rotation)
        };
        // No wall kicks: the new state either fits in place or is rejected.
        let rotated = active.with_rotation(rotation);
        if !rotated.fits(&self.board) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1, 0)
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.try_rotate(true)
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.try_rotate(false)
    }

    /// Move down one row for a bonus point, or lock if the piece is resting
    pub fn soft_drop(&mut self) -> bool {
        if !self.can_act() || self.active.is_none() {
            return false;
        }
        if self.try_shift(0, 1) {
            self.score = self.score.saturating_add(drop_points(1, false));
        } else {
            self.lock_active();
        }
        true
    }

    /// Drop straight to the landing row and lock immediately
    pub fn hard_drop(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let landing = landing_y(&self.board, active.kind, active.rotation, active.x, active.y);
        let rows = (landing - active.y) as u32;
        self.score = self.score.saturating_add(drop_points(rows, true));
        self.active = Some(ActivePiece {
            y: landing,
            ..active
        });
        self.lock_active();
        true
    }

    /// Flip the paused flag. Ignored before start and after game over.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        self.paused = !self.paused;
        debug!(paused = self.paused, "toggled pause");
        true
    }

    /// Throw away the current game and start a fresh one.
    ///
    /// The generator stream and the high score carry over.
    pub fn restart(&mut self) -> bool {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.board.clear();
        self.active = None;
        self.next = self.generator.draw();
        self.repeat.clear();
        self.fall_timer_ms = 0;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.fall_interval_ms = fall_interval_ms(1, &self.config.fall);
        self.piece_id = 0;
        self.last_event = None;
        self.paused = false;
        self.game_over = false;
        self.started = true;
        info!(episode_id = self.episode_id, "restarted");
        self.spawn_piece();
        true
    }

    /// Ask the runner to leave its loop
    pub fn quit(&mut self) -> bool {
        self.quit_requested = true;
        true
    }

    /// Apply a single action. Returns whether it had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::RotateCcw => self.rotate_ccw(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
            GameAction::Quit => self.quit(),
        }
    }

    /// A key went down.
    ///
    /// Repeatable actions fire now and keep firing from `tick` while held.
    /// Everything else is applied once.
    pub fn press(&mut self, action: GameAction) -> bool {
        if !action.repeats() {
            return self.apply_action(action);
        }
        if !self.can_act() || !self.repeat.hold(action) {
            return false;
        }
        self.fire_held(action)
    }

    /// A key went up. Honored even while paused.
    pub fn release(&mut self, action: GameAction) -> bool {
        self.repeat.release(action)
    }

    fn fire_held(&mut self, action: GameAction) -> bool {
        let effect = self.apply_action(action);
        if effect {
            self.repeat.mark_fired(action, self.clock_ms);
        }
        effect
    }

    /// Advance the session clock by `elapsed_ms`.
    ///
    /// Runs due key repeats first, then the fall timer, applying at most one
    /// gravity step. Returns whether the piece or board changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.can_act() {
            return false;
        }
        self.clock_ms += u64::from(elapsed_ms);

        let mut changed = false;
        for action in self.repeat.due(self.clock_ms, &self.config.repeat) {
            changed |= self.fire_held(action);
        }

        if !self.can_act() || self.active.is_none() {
            return changed;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms >= self.fall_interval_ms {
            self.fall_timer_ms = 0;
            self.gravity_step();
            changed = true;
        }
        changed
    }

    fn gravity_step(&mut self) {
        if !self.try_shift(0, 1) {
            self.lock_active();
        }
    }

    /// Anchor row where the active piece would land
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(landing_y(
            &self.board,
            active.kind,
            active.rotation,
            active.x,
            active.y,
        ))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.to_grid();
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.high_score = self.high_score;
        out.fall_interval_ms = self.fall_interval_ms;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.piece_id = self.piece_id;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SequenceGenerator;

    fn session_with(pieces: &[PieceKind]) -> GameSession {
        GameSession::with_generator(SessionConfig::default(), SequenceGenerator::new(pieces))
    }

    fn started_with(pieces: &[PieceKind]) -> GameSession {
        let mut s = session_with(pieces);
        s.start();
        s
    }

    #[test]
    fn test_new_session() {
        let s = session_with(&[PieceKind::T, PieceKind::S]);
        assert!(!s.started());
        assert!(!s.game_over());
        assert!(!s.paused());
        assert_eq!(s.score(), 0);
        assert_eq!(s.lines(), 0);
        assert_eq!(s.level(), 1);
        assert_eq!(s.fall_interval_ms(), 500);
        assert!(s.active().is_none());
        assert_eq!(s.next_piece(), PieceKind::T);
    }

    #[test]
    fn test_start_spawns_preview_piece() {
        let mut s = session_with(&[PieceKind::T, PieceKind::S, PieceKind::Z]);
        s.start();
        let active = s.active().unwrap();
        assert_eq!(active, ActivePiece::spawn(PieceKind::T));
        assert_eq!((active.x, active.y, active.rotation), (3, 0, 0));
        assert_eq!(s.next_piece(), PieceKind::S);
        assert_eq!(s.piece_id(), 1);

        // Starting twice does nothing.
        s.start();
        assert_eq!(s.piece_id(), 1);
    }

    #[test]
    fn test_moves_stop_at_walls() {
        let mut s = started_with(&[PieceKind::O]);
        let mut left = 0;
        while s.move_left() {
            left += 1;
        }
        assert_eq!(left, 4);
        assert_eq!(s.active().unwrap().x, -1);

        let mut right = 0;
        while s.move_right() {
            right += 1;
        }
        assert_eq!(right, 8);
        assert_eq!(s.active().unwrap().x, 7);
    }

    #[test]
    fn test_soft_drop_awards_one_point_per_row() {
        let mut s = started_with(&[PieceKind::O]);
        assert!(s.soft_drop());
        assert!(s.soft_drop());
        assert_eq!(s.active().unwrap().y, 2);
        assert_eq!(s.score(), 2);
    }

    #[test]
    fn test_soft_drop_on_resting_piece_locks() {
        let mut s = started_with(&[PieceKind::O]);
        for _ in 0..16 {
            assert!(s.soft_drop());
        }
        assert_eq!(s.active().unwrap().y, 16);
        assert_eq!(s.piece_id(), 1);

        assert!(s.soft_drop());
        assert_eq!(s.piece_id(), 2);
        assert_eq!(s.board().filled_count(), 4);
        // Locking itself is not a row moved.
        assert_eq!(s.score(), 16);
        assert_eq!(s.take_last_event(), Some(LockEvent::default()));
    }

    #[test]
    fn test_hard_drop_scores_two_per_row_and_locks() {
        let mut s = started_with(&[PieceKind::O]);
        assert!(s.hard_drop());
        assert_eq!(s.score(), 32);
        assert_eq!(s.board().filled_count(), 4);
        assert!(s.board().is_occupied(4, 19));
        assert!(s.board().is_occupied(5, 18));
        assert_eq!(s.piece_id(), 2);

        let event = s.take_last_event().unwrap();
        assert_eq!(event.lines_cleared, 0);
        assert!(!event.game_over);
        assert_eq!(s.take_last_event(), None);
    }

    #[test]
    fn test_gravity_uses_fall_interval() {
        let mut s = started_with(&[PieceKind::T]);
        assert!(!s.tick(499));
        assert_eq!(s.active().unwrap().y, 0);
        assert!(s.tick(1));
        assert_eq!(s.active().unwrap().y, 1);
        // Timer restarted after the step.
        assert!(!s.tick(499));
        assert_eq!(s.active().unwrap().y, 1);
    }

    #[test]
    fn test_gravity_locks_resting_piece() {
        let mut s = started_with(&[PieceKind::O, PieceKind::I]);
        assert!(s.hard_drop());
        let before = s.board().filled_count();
        // I vertical falls onto the O in column 5 and locks there.
        for _ in 0..40 {
            s.tick(500);
            if s.piece_id() == 3 {
                break;
            }
        }
        assert_eq!(s.piece_id(), 3);
        assert_eq!(s.board().filled_count(), before + 4);
        assert_eq!(s.score(), 32);
    }

    #[test]
    fn test_rotation_cycles_states() {
        let mut s = started_with(&[PieceKind::T]);
        for expected in [1, 2, 3, 0] {
            assert!(s.rotate_cw());
            assert_eq!(s.active().unwrap().rotation, expected);
        }
        assert!(s.rotate_ccw());
        assert_eq!(s.active().unwrap().rotation, 3);
    }

    #[test]
    fn test_o_rotation_keeps_single_state() {
        let mut s = started_with(&[PieceKind::O]);
        s.rotate_cw();
        assert_eq!(s.active().unwrap().rotation, 0);
    }

    #[test]
    fn test_pause_freezes_ticks_and_moves() {
        let mut s = started_with(&[PieceKind::T]);
        assert!(s.toggle_pause());
        assert!(s.paused());
        assert!(!s.tick(5_000));
        assert!(!s.move_left());
        assert!(!s.hard_drop());
        assert!(!s.press(GameAction::MoveRight));
        assert_eq!(s.active(), Some(ActivePiece::spawn(PieceKind::T)));
        assert_eq!(s.clock_ms(), 0);

        assert!(s.toggle_pause());
        assert!(s.move_left());
    }

    #[test]
    fn test_release_honored_while_paused() {
        let mut s = started_with(&[PieceKind::T]);
        assert!(s.press(GameAction::MoveLeft));
        s.toggle_pause();
        assert!(s.release(GameAction::MoveLeft));
        assert!(!s.is_held(GameAction::MoveLeft));
    }

    #[test]
    fn test_held_move_repeats_after_interval() {
        let mut s = started_with(&[PieceKind::T]);
        assert!(s.press(GameAction::MoveLeft));
        assert_eq!(s.active().unwrap().x, 2);

        // Fired at clock 0; next repeat needs strictly more than 50ms.
        for _ in 0..3 {
            s.tick(16);
        }
        assert_eq!(s.active().unwrap().x, 2);
        s.tick(16);
        assert_eq!(s.active().unwrap().x, 1);

        s.release(GameAction::MoveLeft);
        for _ in 0..10 {
            s.tick(16);
        }
        assert_eq!(s.active().unwrap().x, 1);
    }

    #[test]
    fn test_repeated_press_of_held_key_is_absorbed() {
        let mut s = started_with(&[PieceKind::T]);
        assert!(s.press(GameAction::MoveRight));
        assert!(!s.press(GameAction::MoveRight));
        assert_eq!(s.active().unwrap().x, 4);
    }

    #[test]
    fn test_non_repeatable_press_applies_once() {
        let mut s = started_with(&[PieceKind::T]);
        assert!(s.press(GameAction::RotateCw));
        assert!(!s.is_held(GameAction::RotateCw));
        s.tick(200);
        assert_eq!(s.active().unwrap().rotation, 1);
    }

    #[test]
    fn test_stack_to_top_ends_game_with_high_score() {
        let mut s = started_with(&[PieceKind::O]);
        for _ in 0..8 {
            assert!(s.hard_drop());
            assert!(!s.game_over());
            let _ = s.take_last_event();
        }
        assert!(s.hard_drop());
        assert!(s.game_over());
        assert!(s.active().is_none());
        assert_eq!(s.score(), 144);
        assert_eq!(s.high_score(), 144);

        let event = s.take_last_event().unwrap();
        assert!(event.game_over);
        assert_eq!(event.new_high_score, Some(144));

        // Everything but restart and quit is ignored now.
        assert!(!s.toggle_pause());
        assert!(!s.tick(1_000));
        assert!(!s.move_left());
    }

    #[test]
    fn test_game_over_below_high_score_reports_none() {
        let mut s = session_with(&[PieceKind::O]).with_high_score(1_000);
        s.start();
        while !s.game_over() {
            s.hard_drop();
        }
        let event = s.take_last_event().unwrap();
        assert_eq!(event.new_high_score, None);
        assert_eq!(s.high_score(), 1_000);
    }

    #[test]
    fn test_restart_resets_game_keeps_high_score() {
        let mut s = started_with(&[PieceKind::O]);
        while !s.game_over() {
            s.hard_drop();
        }
        assert_eq!(s.episode_id(), 0);

        assert!(s.apply_action(GameAction::Restart));
        assert_eq!(s.episode_id(), 1);
        assert!(!s.game_over());
        assert_eq!(s.score(), 0);
        assert_eq!(s.lines(), 0);
        assert_eq!(s.level(), 1);
        assert_eq!(s.board().filled_count(), 0);
        assert_eq!(s.high_score(), 144);
        assert_eq!(s.piece_id(), 1);
        assert!(s.active().is_some());
    }

    #[test]
    fn test_quit_sets_flag_only() {
        let mut s = started_with(&[PieceKind::T]);
        assert!(s.apply_action(GameAction::Quit));
        assert!(s.quit_requested());
        assert!(!s.game_over());
        assert!(s.active().is_some());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut s = started_with(&[PieceKind::O, PieceKind::L]);
        s.move_left();
        let snap = s.snapshot();
        let active = snap.active.unwrap();
        assert_eq!((active.kind, active.x, active.y), (PieceKind::O, 2, 0));
        assert_eq!(snap.ghost_y, Some(16));
        assert_eq!(snap.next, PieceKind::L);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.fall_interval_ms, 500);
        assert!(snap.playable());
        assert_eq!(active.cells().count(), 4);
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let config = SessionConfig::default().with_seed(2024);
        let mut a = GameSession::new(config);
        let mut b = GameSession::new(config);
        a.start();
        b.start();
        for _ in 0..20 {
            assert_eq!(a.active().map(|p| p.kind), b.active().map(|p| p.kind));
            a.hard_drop();
            b.hard_drop();
        }
        assert_eq!(a.board(), b.board());
        assert_eq!(a.score(), b.score());
    }
}
