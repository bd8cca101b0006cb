use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    GameOver,
}

impl EngineState {
    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Board and score as they were before the last move attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub score: Score,
}

/// Owns a running game and turns presentation commands into state changes.
///
/// Transitions:
/// - Playing -> GameOver, after a slide that leaves no possible move
/// - any -> Playing, on restart
///
/// Waiting on the game over screen and restarting afterwards is up to the caller.
#[derive(Clone, Debug)]
pub struct PlayEngine<S = RandomSpawner> {
    config: GameConfig,
    spawner: S,
    grid: Grid,
    score: Score,
    undo_slot: Option<Snapshot>,
    state: EngineState,
}

impl PlayEngine<RandomSpawner> {
    /// Starts a game whose spawns are seeded by `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let spawner = RandomSpawner::from_config(seed, &config);
        Self::with_spawner(config, spawner)
    }
}

impl<S: TileSpawner> PlayEngine<S> {
    pub fn with_spawner(config: GameConfig, spawner: S) -> Self {
        let mut engine = Self {
            config,
            spawner,
            grid: Grid::new(config.size),
            score: 0,
            undo_slot: None,
            state: Default::default(),
        };
        engine.restart();
        engine
    }

    /// Resumes from a given board, the state is derived from whether any move is left.
    pub fn from_grid(config: GameConfig, grid: Grid, score: Score, spawner: S) -> Result<Self> {
        if grid.size() != config.size {
            return Err(GameError::InvalidBoardShape);
        }
        let state = if is_terminal(&grid) {
            EngineState::GameOver
        } else {
            EngineState::Playing
        };
        Ok(Self {
            config,
            spawner,
            grid,
            score,
            undo_slot: None,
            state,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_slot.is_some()
    }

    pub fn max_tile(&self) -> Tile {
        self.grid.max_tile()
    }

    pub fn legal_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        legal_directions(&self.grid)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            score: self.score,
        }
    }

    /// Slides all tiles toward `direction`, spawning a tile if anything moved.
    ///
    /// Ignored once the game is over; the undo slot is overwritten on every other attempt.
    pub fn slide(&mut self, direction: Direction) -> MoveOutcome {
        if self.state.is_game_over() {
            log::debug!("Ignoring {:?}, game is over", direction);
            return MoveOutcome::NoChange;
        }

        self.undo_slot = Some(self.snapshot());

        let MoveResult {
            grid,
            changed,
            score_delta,
        } = slide(&self.grid, direction);
        self.grid = grid;
        self.score += score_delta;

        if changed {
            log::debug!("Slid {:?}, scored {}", direction, score_delta);
            self.spawner.spawn(&mut self.grid);
        } else {
            log::debug!("Slide {:?} is blocked", direction);
        }

        if is_terminal(&self.grid) {
            self.state = EngineState::GameOver;
            log::info!(
                "Game over with score {}, best tile {}",
                self.score,
                self.grid.max_tile()
            );
            MoveOutcome::GameOver { score_delta }
        } else if changed {
            MoveOutcome::Moved { score_delta }
        } else {
            MoveOutcome::NoChange
        }
    }

    /// Clears the board and score, then spawns the opening tiles.
    pub fn restart(&mut self) {
        self.grid = Grid::new(self.config.size);
        self.score = 0;
        self.undo_slot = None;
        for _ in 0..self.config.initial_tiles {
            self.spawner.spawn(&mut self.grid);
        }
        self.state = EngineState::Playing;
        log::info!("New {0}x{0} game started", self.config.size);
    }

    /// Restores the board and score from before the last move attempt.
    ///
    /// Only one step is kept, a second undo in a row does nothing. The restored
    /// board is not checked for remaining moves.
    pub fn undo(&mut self) -> bool {
        if self.state.is_game_over() {
            return false;
        }
        let Some(Snapshot { grid, score }) = self.undo_slot.take() else {
            log::debug!("Nothing to undo");
            return false;
        };
        self.grid = grid;
        self.score = score;
        log::debug!("Undid last move, score back to {}", score);
        true
    }
}
