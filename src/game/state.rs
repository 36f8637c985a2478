use std::fmt;

use tracing::{debug, info};

use super::{rules, Cell, Color, GameSettings, Grid};
use crate::error::{MoveError, SetupError};

/// Where a game stands. `Won` and `Tie` are terminal and absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won(Color),
    Tie,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// End-of-game banner text, `None` while the game is running
    pub fn finish_message(self) -> Option<String> {
        match self {
            GameState::InProgress => None,
            GameState::Won(color) => Some(format!("{} has won!", color.name())),
            GameState::Tie => Some("It's a tie!".to_string()),
        }
    }
}

/// Result of an accepted drop: the row the token landed on and the state
/// the game is in afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub state: GameState,
}

/// Callback invoked once when a game leaves `InProgress`.
pub type FinishObserver = Box<dyn FnMut(GameState)>;

/// One game: the grid, whose turn it is, and the outcome so far.
///
/// Restarting means building a new `Engine`; dropping the old one discards
/// its finish observers along with it.
pub struct Engine {
    grid: Grid,
    settings: GameSettings,
    current_color: Color,
    state: GameState,
    last_move: Option<(usize, usize)>,
    winning_line: Vec<(usize, usize)>,
    observers: Vec<FinishObserver>,
}

impl Engine {
    /// Start a game on an empty board. Yellow moves first.
    pub fn new(settings: GameSettings) -> Result<Self, SetupError> {
        settings.validate()?;
        info!(
            width = settings.width,
            height = settings.height,
            match_length = settings.match_length,
            "new game"
        );
        Ok(Engine {
            grid: Grid::new(settings.width, settings.height),
            settings,
            current_color: Color::Yellow,
            state: GameState::InProgress,
            last_move: None,
            winning_line: Vec::new(),
            observers: Vec::new(),
        })
    }

    /// Shorthand for [`Engine::new`] with explicit dimensions.
    pub fn new_game(width: usize, height: usize, match_length: usize) -> Result<Self, SetupError> {
        Self::new(GameSettings::new(width, height, match_length))
    }

    /// Color of the token the next drop places
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn occupant(&self, column: isize, row: isize) -> Cell {
        self.grid.occupant(column, row)
    }

    pub fn move_count(&self) -> usize {
        self.grid.token_count()
    }

    /// Cell of the most recently placed token
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Cells of the completed line once the game is won, otherwise empty
    pub fn winning_line(&self) -> &[(usize, usize)] {
        &self.winning_line
    }

    /// Columns that still accept a token. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.grid.width())
            .filter(|&column| !self.grid.is_column_full(column))
            .collect()
    }

    /// Register a callback for the transition out of `InProgress`. Observers
    /// run synchronously, in registration order, before the finishing
    /// [`Engine::drop_token`] returns.
    pub fn subscribe_on_finish<F>(&mut self, observer: F)
    where
        F: FnMut(GameState) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Drop a token of the current color into `column`.
    ///
    /// A rejected drop changes nothing: no token, no color swap.
    pub fn drop_token(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let mover = self.current_color;
        let row = self.grid.place(column, mover)?;
        self.last_move = Some((column, row));
        debug!(column, row, color = mover.name(), "token placed");

        // A move that completes a line and fills the board is a win.
        if let Some(line) = rules::line_through(&self.grid, column, row, self.settings.match_length) {
            self.winning_line = line;
            self.finish(GameState::Won(mover));
        } else if self.grid.is_full() {
            self.finish(GameState::Tie);
        } else {
            self.current_color = mover.other();
        }

        Ok(Placement {
            row,
            state: self.state,
        })
    }

    fn finish(&mut self, state: GameState) {
        self.state = state;
        info!(
            moves = self.grid.token_count(),
            "game over: {}",
            state.finish_message().unwrap_or_default()
        );
        for observer in &mut self.observers {
            observer(state);
        }
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("settings", &self.settings)
            .field("current_color", &self.current_color)
            .field("state", &self.state)
            .field("last_move", &self.last_move)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
