//! The game state machine: movement, collisions, food, and scoring
mod board;
mod direction;
pub(crate) use self::board::{Board, Position};
pub(crate) use self::direction::Direction;
use log::{debug, info};
use rand::Rng;
use std::collections::VecDeque;

/// Which screen the game is on.  Exactly one is active at any time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    /// Waiting on the title screen for the player to start a round
    Menu,

    /// The snake is moving and the shell should keep ticking
    Playing,

    /// The snake crashed; the final board is frozen until reset
    Ended,
}

/// A discrete input forwarded from the shell
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Input {
    Turn(Direction),
    Reset,
}

/// All state for one round
#[derive(Clone, Debug, Eq, PartialEq)]
struct GameState {
    head: Position,

    /// Body segments, excluding the head, tail first.  The segment adjacent
    /// to the head is at the back.
    body: VecDeque<Position>,

    direction: Direction,
    food: Position,
    score: u32,
    phase: Phase,
}

impl GameState {
    /// State for a new round on `board`.  `food` is provisional until
    /// [`Engine::place_food()`] runs.
    fn new(board: Board) -> GameState {
        let head = board.center();
        GameState {
            head,
            body: VecDeque::new(),
            direction: Direction::Up,
            food: head,
            score: 0,
            phase: Phase::Menu,
        }
    }
}

/// Read-only snapshot of everything the shell needs in order to draw
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct RenderState<'a> {
    pub(crate) board: Board,
    pub(crate) head: Position,
    /// Body segments, tail first
    pub(crate) body: &'a VecDeque<Position>,
    pub(crate) food: Position,
    pub(crate) score: u32,
    pub(crate) phase: Phase,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Engine<R = rand::rngs::ThreadRng> {
    rng: R,
    board: Board,
    state: GameState,
}

impl<R: Rng> Engine<R> {
    /// Create an engine on the menu screen with a freshly set-up round
    pub(crate) fn new_with_rng(board: Board, rng: R) -> Engine<R> {
        let mut engine = Engine {
            rng,
            board,
            state: GameState::new(board),
        };
        engine.setup();
        engine
    }

    /// Reset the round and return to the menu.  This does not start play;
    /// see [`Engine::start_game()`].
    pub(crate) fn setup(&mut self) {
        self.state = GameState::new(self.board);
        self.place_food();
        info!(
            "Round set up on {}x{} board; showing menu",
            self.board.rows(),
            self.board.cols()
        );
    }

    /// Set up a fresh round, begin playing, and perform the first tick
    pub(crate) fn start_game(&mut self) {
        self.setup();
        self.state.phase = Phase::Playing;
        info!("Game started");
        self.tick();
    }

    /// Advance the game by one step.  Does nothing unless playing.  Returns
    /// the phase after the step; the shell should schedule another tick only
    /// if this is [`Phase::Playing`].
    pub(crate) fn tick(&mut self) -> Phase {
        if self.state.phase != Phase::Playing {
            return self.state.phase;
        }
        if self.state.body.pop_front().is_some() {
            self.state.body.push_back(self.state.head);
        }
        self.state.head = self.state.direction.step(self.state.head);
        if self.state.body.contains(&self.state.head) {
            debug!("Snake bit itself at {}", self.state.head);
            self.end();
        }
        if !self.board.contains(self.state.head) {
            debug!("Snake left the board at {}", self.state.head);
            self.end();
        }
        if self.state.head == self.state.food {
            self.state.score += 1;
            debug!("Ate food at {}; score is now {}", self.state.head, self.state.score);
            self.place_food();
            // The new segment holds the current head position; it separates
            // from the head on the next tick's shift.
            self.state.body.push_back(self.state.head);
        }
        self.state.phase
    }

    /// Apply an input from the player
    pub(crate) fn handle_input(&mut self, input: Input) {
        match (self.state.phase, input) {
            (Phase::Menu, Input::Reset) => self.start_game(),
            (Phase::Playing | Phase::Ended, Input::Reset) => self.setup(),
            (Phase::Playing, Input::Turn(direction)) => self.turn(direction),
            (Phase::Menu | Phase::Ended, Input::Turn(_)) => (),
        }
    }

    /// Pick a new random food cell.  A candidate is accepted only if it shares
    /// neither a row nor a column with the head and is not on the body.
    fn place_food(&mut self) {
        let Position {
            row: head_row,
            col: head_col,
        } = self.state.head;
        let rows = i32::from(self.board.rows());
        let cols = i32::from(self.board.cols());
        loop {
            let candidate = Position::new(
                self.rng.random_range(0..rows),
                self.rng.random_range(0..cols),
            );
            if candidate.row != head_row
                && candidate.col != head_col
                && !self.state.body.contains(&candidate)
            {
                debug!("Placed food at {candidate}");
                self.state.food = candidate;
                return;
            }
        }
    }
}

impl<R> Engine<R> {
    pub(crate) fn phase(&self) -> Phase {
        self.state.phase
    }

    pub(crate) fn render_state(&self) -> RenderState<'_> {
        RenderState {
            board: self.board,
            head: self.state.head,
            body: &self.state.body,
            food: self.state.food,
            score: self.state.score,
            phase: self.state.phase,
        }
    }

    fn turn(&mut self, direction: Direction) {
        if direction != self.state.direction.reverse() || self.state.body.is_empty() {
            self.state.direction = direction;
        } else {
            debug!("Ignoring reversal to {direction:?}");
        }
    }

    fn end(&mut self) {
        if self.state.phase != Phase::Ended {
            info!("Game over with score {}", self.state.score);
        }
        self.state.phase = Phase::Ended;
    }
}
