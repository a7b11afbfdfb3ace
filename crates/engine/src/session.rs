//! Session orchestration: the update/render loop and the input sampler.
//!
//! The game loop task owns the [`GameState`] outright. The input sampler runs as
//! a separate tokio task and only ever sends [`GameAction::Jump`] requests over
//! a bounded channel; the game loop drains that channel at the start of each
//! tick. Both loops watch the shared running flag and the [`Shutdown`] signal,
//! and whichever finishes first shuts the other down.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::sleep;
use tracing::{debug, error, info, trace, warn};

use crate::config::SessionConfig;
use crate::core::{GameSnapshot, GameState};
use crate::error::SessionError;
use crate::input::{poll_actions, KeySource};
use crate::shutdown::Shutdown;
use crate::term::{FrameBuffer, GameView, Surface};
use crate::types::{EndReason, GameAction, GAME_OVER_MESSAGE, GRID_HEIGHT, GRID_WIDTH};

/// Lifecycle of a session. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Ended,
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub reason: EndReason,
    pub ticks: u64,
    pub final_state: GameSnapshot,
}

/// Why the input sampler returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputEnd {
    Quit,
    Stopped,
}

/// Which loop finished first.
enum First {
    Game(Result<EndReason, SessionError>),
    Input(Result<Result<InputEnd, SessionError>, JoinError>),
}

pub struct Session<K, S> {
    state: GameState,
    keys: Option<K>,
    surface: S,
    view: GameView,
    config: SessionConfig,
    phase: Phase,
}

impl<K, S> Session<K, S>
where
    K: KeySource + 'static,
    S: Surface,
{
    pub fn new(keys: K, surface: S) -> Self {
        Self::with_config(keys, surface, SessionConfig::default())
    }

    pub fn with_config(keys: K, surface: S, config: SessionConfig) -> Self {
        Self {
            state: GameState::new(),
            keys: Some(keys),
            surface,
            view: GameView::default(),
            config,
            phase: Phase::Idle,
        }
    }

    /// Replace the starting state (e.g. to stage a scenario). Only meaningful before `run`.
    ///
    /// The view is rebuilt from the state's sprites so drawing and collision
    /// always use the same bitmaps.
    pub fn with_state(mut self, state: GameState) -> Self {
        self.view = GameView::new(*state.dino_sprite(), *state.obstacle_sprite());
        self.state = state;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Play one session to completion.
    ///
    /// Returns when the dino hits the cactus, a quit key is pressed, or `shutdown`
    /// is triggered. On every path the display is cleared and
    /// [`GAME_OVER_MESSAGE`] is printed. A session runs at most once.
    pub async fn run(&mut self, shutdown: Shutdown) -> Result<SessionOutcome, SessionError> {
        if self.phase != Phase::Idle {
            return Err(SessionError::AlreadyStarted);
        }
        let keys = self.keys.take().ok_or(SessionError::AlreadyStarted)?;
        self.phase = Phase::Running;
        info!(
            tick_ms = self.config.tick.as_millis() as u64,
            poll_ms = self.config.input_poll.as_millis() as u64,
            "session started"
        );

        let running = Arc::new(AtomicBool::new(self.state.running()));
        let (jump_tx, mut jump_rx) = mpsc::channel(self.config.jump_queue.max(1));
        let mut input: JoinHandle<Result<InputEnd, SessionError>> = tokio::spawn(sample_input(
            keys,
            jump_tx,
            Arc::clone(&running),
            shutdown.clone(),
            self.config.input_poll,
        ));

        let first = tokio::select! {
            res = self.tick_loop(&mut jump_rx, &running, &shutdown) => First::Game(res),
            res = &mut input => First::Input(res),
        };

        // Whoever finished first, stop the other one.
        running.store(false, Ordering::Release);
        shutdown.trigger();
        self.state.stop();

        let result = match first {
            First::Game(res) => {
                match input.await {
                    Ok(Ok(_)) => {}
                    Ok(Err(e)) => warn!(error = %e, "input sampler failed during shutdown"),
                    Err(e) => warn!(error = %e, "input task did not finish cleanly"),
                }
                res
            }
            First::Input(Ok(Ok(InputEnd::Quit))) => Ok(EndReason::QuitKey),
            First::Input(Ok(Ok(InputEnd::Stopped))) => Ok(EndReason::Cancelled),
            First::Input(Ok(Err(e))) => Err(e),
            First::Input(Err(e)) => Err(SessionError::TaskFailed(e)),
        };

        self.phase = Phase::Ended;
        let finished = self.surface.finish(GAME_OVER_MESSAGE);

        match result {
            Ok(reason) => {
                finished?;
                let outcome = SessionOutcome {
                    reason,
                    ticks: self.state.ticks(),
                    final_state: self.state.snapshot(),
                };
                info!(reason = reason.as_str(), ticks = outcome.ticks, "session ended");
                Ok(outcome)
            }
            Err(e) => {
                error!(error = %e, ticks = self.state.ticks(), "session aborted");
                if let Err(fe) = finished {
                    warn!(error = %fe, "could not print end-of-session message");
                }
                Err(e)
            }
        }
    }

    /// Update + render at the tick rate until collision or shutdown.
    async fn tick_loop(
        &mut self,
        jumps: &mut mpsc::Receiver<GameAction>,
        running: &AtomicBool,
        shutdown: &Shutdown,
    ) -> Result<EndReason, SessionError> {
        let mut fb = FrameBuffer::new(GRID_WIDTH, GRID_HEIGHT);

        loop {
            if shutdown.is_triggered() || !running.load(Ordering::Acquire) {
                return Ok(EndReason::Cancelled);
            }

            while let Ok(action) = jumps.try_recv() {
                if action == GameAction::Jump && self.state.request_jump() {
                    debug!(tick = self.state.ticks(), "jump started");
                }
            }

            self.state.update();
            self.view.render_into(&self.state.snapshot(), &mut fb);
            self.surface.present(&fb)?;

            if !self.state.running() {
                running.store(false, Ordering::Release);
                info!(
                    tick = self.state.ticks(),
                    obstacle_x = self.state.obstacle().x(),
                    dino_y = self.state.dino().y(),
                    "collision"
                );
                return Ok(EndReason::Collision);
            }

            tokio::select! {
                _ = sleep(self.config.tick) => {}
                _ = shutdown.triggered() => {}
            }
        }
    }
}

/// Poll the keyboard until the session stops or a quit key is pressed.
async fn sample_input<K: KeySource>(
    mut keys: K,
    jumps: mpsc::Sender<GameAction>,
    running: Arc<AtomicBool>,
    shutdown: Shutdown,
    poll: Duration,
) -> Result<InputEnd, SessionError> {
    loop {
        if shutdown.is_triggered() || !running.load(Ordering::Acquire) {
            return Ok(InputEnd::Stopped);
        }

        for action in poll_actions(&mut keys)? {
            match action {
                GameAction::Jump => {
                    if jumps.try_send(action).is_err() {
                        trace!("jump queue full, dropping request");
                    }
                }
                GameAction::Quit => {
                    info!("quit key pressed");
                    return Ok(InputEnd::Quit);
                }
            }
        }

        tokio::select! {
            _ = sleep(poll) => {}
            _ = shutdown.triggered() => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnimatedSprite, Sprite, CACTUS};
    use crate::input::ScriptedKeys;
    use crate::term::RecordingSurface;
    use crate::types::{DINO_COLUMN, GROUND_REST_Y};
    use crossterm::event::{KeyCode, KeyEvent};
    use std::io;

    fn session(keys: ScriptedKeys) -> Session<ScriptedKeys, RecordingSurface> {
        Session::new(keys, RecordingSurface::new())
    }

    struct BrokenSurface;

    impl Surface for BrokenSurface {
        fn present(&mut self, _fb: &FrameBuffer) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }

        fn finish(&mut self, _message: &str) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn idle_until_run() {
        let s = session(ScriptedKeys::default());
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.surface().frames().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn collision_ends_session_with_game_over() {
        let mut s = session(ScriptedKeys::default());
        let outcome = s.run(Shutdown::new()).await.unwrap();

        assert_eq!(outcome.reason, EndReason::Collision);
        assert_eq!(s.phase(), Phase::Ended);
        assert!(!s.state().running());
        assert!(!outcome.final_state.running);
        // One frame per tick, including the tick that collided.
        assert_eq!(s.surface().frames().len() as u64, outcome.ticks);
        assert_eq!(s.surface().message(), Some(GAME_OVER_MESSAGE));
    }

    const BLOCK_FRAMES: [Sprite; 1] = [Sprite::new(&["#####", "#####", "#####", "#####"])];
    const BLOCK_DINO: AnimatedSprite = AnimatedSprite::new(&BLOCK_FRAMES);

    #[tokio::test(start_paused = true)]
    async fn custom_sprites_are_drawn_and_collided() {
        let state = GameState::with_sprites(BLOCK_DINO, CACTUS);
        let mut s = session(ScriptedKeys::default()).with_state(state);

        let outcome = s.run(Shutdown::new()).await.unwrap();
        assert_eq!(outcome.reason, EndReason::Collision);

        let first = &s.surface().frames()[0];
        let row = &first[GROUND_REST_Y as usize];
        let col = DINO_COLUMN as usize;
        assert_eq!(&row[col..col + 5], "#####");

        // Contact when the cactus's left post reaches the block's last column.
        let last = s.surface().last_frame().unwrap();
        assert_eq!(&last[GROUND_REST_Y as usize + 1][col..col + 5], "#####");
        assert_eq!(outcome.final_state.obstacle_x, DINO_COLUMN + 4);
    }

    #[tokio::test(start_paused = true)]
    async fn staged_collision_ends_on_first_tick() {
        let mut state = GameState::new();
        state.place_obstacle(DINO_COLUMN);
        let mut s = session(ScriptedKeys::default()).with_state(state);

        let outcome = s.run(Shutdown::new()).await.unwrap();
        assert_eq!(outcome.reason, EndReason::Collision);
        assert_eq!(outcome.ticks, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn quit_key_ends_session() {
        let mut s = session(ScriptedKeys::new([KeyEvent::from(KeyCode::Esc)]));
        let outcome = s.run(Shutdown::new()).await.unwrap();

        assert_eq!(outcome.reason, EndReason::QuitKey);
        assert!(outcome.ticks <= 1);
        assert_eq!(s.surface().message(), Some(GAME_OVER_MESSAGE));
    }

    #[tokio::test(start_paused = true)]
    async fn external_shutdown_stops_both_loops() {
        let shutdown = Shutdown::new();
        let trigger = shutdown.clone();
        tokio::spawn(async move {
            sleep(Duration::from_millis(250)).await;
            trigger.trigger();
        });

        let mut s = session(ScriptedKeys::default());
        let outcome = s.run(shutdown).await.unwrap();

        assert_eq!(outcome.reason, EndReason::Cancelled);
        assert!((1..=4).contains(&outcome.ticks), "ticks = {}", outcome.ticks);
        assert_eq!(s.surface().message(), Some(GAME_OVER_MESSAGE));
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_before_run_ends_without_ticks() {
        let shutdown = Shutdown::new();
        shutdown.trigger();

        let mut s = session(ScriptedKeys::default());
        let outcome = s.run(shutdown).await.unwrap();
        assert_eq!(outcome.reason, EndReason::Cancelled);
        assert_eq!(outcome.ticks, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn space_starts_a_jump() {
        let shutdown = Shutdown::new();
        let trigger = shutdown.clone();
        tokio::spawn(async move {
            sleep(Duration::from_millis(350)).await;
            trigger.trigger();
        });

        let mut s = session(ScriptedKeys::new([KeyEvent::from(KeyCode::Char(' '))]));
        s.run(shutdown).await.unwrap();

        assert!(s.state().dino().is_jumping());
        assert!(s.state().dino().y() < GROUND_REST_Y);
    }

    #[tokio::test(start_paused = true)]
    async fn surface_failure_is_fatal() {
        let mut s = Session::new(ScriptedKeys::default(), BrokenSurface);
        let err = s.run(Shutdown::new()).await.unwrap_err();

        assert!(matches!(err, SessionError::Io(_)));
        assert_eq!(s.phase(), Phase::Ended);
    }

    #[tokio::test(start_paused = true)]
    async fn session_cannot_restart() {
        let mut s = session(ScriptedKeys::default());
        s.run(Shutdown::new()).await.unwrap();
        assert!(matches!(
            s.run(Shutdown::new()).await,
            Err(SessionError::AlreadyStarted)
        ));
    }
}
