//! Game orchestration
//!
//! Holds the active level, validates player moves against it and swaps in a
//! fresh level when the player takes the stairs.

use strum::{Display, EnumIter};

use crate::STATUS_TEXT;
use crate::dungeon::{GenerationConfig, Level, Player};
use crate::error::ConfigError;
use crate::geometry::Point;
use crate::rng::GameRng;

/// Movement direction (no diagonals)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Get the step for this direction; y grows downward
    pub const fn delta(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::South => Point::new(0, 1),
            Direction::East => Point::new(1, 0),
            Direction::West => Point::new(-1, 0),
        }
    }

    /// Direction of a single step between adjacent points
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        match (to.x - from.x, to.y - from.y) {
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }
}

/// Player command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    UseStaircase,
    Quit,
}

impl Command {
    /// Map an input token to a command
    ///
    /// Vi keys move (`h` west, `j` south, `k` north, `l` east), `d` takes the
    /// stairs, `q` and `c` quit. Anything else is not a command.
    pub const fn from_key(key: char) -> Option<Command> {
        match key {
            'h' => Some(Command::Move(Direction::West)),
            'j' => Some(Command::Move(Direction::South)),
            'k' => Some(Command::Move(Direction::North)),
            'l' => Some(Command::Move(Direction::East)),
            'd' => Some(Command::UseStaircase),
            'q' | 'c' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// What became of a movement intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Target not walkable; nothing changed
    Blocked,
    /// Player stands on a staircase and asked to use it
    TransitionRequested,
}

/// Result of handling one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// A new level replaced the old one
    Descended,
    /// Player quit
    Quit,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct Game {
    level: Level,
    config: GenerationConfig,
    rng: GameRng,
    /// Levels generated so far, the current one included
    depth: u32,
}

impl Game {
    /// Validate the config, generate the first level and place a new player
    pub fn new(config: GenerationConfig, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!("new game, seed {}", rng.seed());

        let mut level = Level::build(&config, &mut rng);
        level.put_player(Player::new(), &mut rng);
        Ok(Self {
            level,
            config,
            rng,
            depth: 1,
        })
    }

    /// Default layout with a fixed seed
    pub fn with_seed(seed: u64) -> Result<Self, ConfigError> {
        Self::new(GenerationConfig::default(), GameRng::new(seed))
    }

    /// Replace the current level with a freshly generated one
    ///
    /// The player carries over and is dropped into a random room.
    pub fn generate_level(&mut self) {
        let player = self.level.player().copied().unwrap_or_default();
        let mut level = Level::build(&self.config, &mut self.rng);
        level.put_player(player, &mut self.rng);
        self.level = level;
        self.depth += 1;
        log::info!("entered level {}", self.depth);
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub const fn depth(&self) -> u32 {
        self.depth
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn player_position(&self) -> Point {
        self.level.player_position().unwrap_or_default()
    }

    /// Step the player one cell if the target is walkable
    pub fn handle_move(&mut self, direction: Direction) -> MoveOutcome {
        let target = self.player_position() + direction.delta();
        if self.level.is_walkable(target) {
            self.level.move_player(target);
            MoveOutcome::Moved
        } else {
            log::trace!("move {direction} to {target} blocked");
            MoveOutcome::Blocked
        }
    }

    /// Ask to take the stairs under the player
    pub fn request_descend(&self) -> MoveOutcome {
        if self.level.is_staircase(self.player_position()) {
            MoveOutcome::TransitionRequested
        } else {
            MoveOutcome::Blocked
        }
    }

    /// Take the stairs if the player stands on them
    ///
    /// Returns whether a new level was generated.
    pub fn use_staircase(&mut self) -> bool {
        if self.request_descend() != MoveOutcome::TransitionRequested {
            return false;
        }
        self.generate_level();
        true
    }

    /// Apply one command
    pub fn handle_command(&mut self, command: Command) -> GameLoopResult {
        let outcome = match command {
            Command::Quit => return GameLoopResult::Quit,
            Command::Move(direction) => self.handle_move(direction),
            Command::UseStaircase => self.request_descend(),
        };

        match outcome {
            MoveOutcome::TransitionRequested => {
                self.generate_level();
                GameLoopResult::Descended
            }
            MoveOutcome::Moved | MoveOutcome::Blocked => GameLoopResult::Continue,
        }
    }

    /// Apply one input token; unknown tokens are ignored
    pub fn handle_user_input(&mut self, key: char) -> GameLoopResult {
        match Command::from_key(key) {
            Some(command) => self.handle_command(command),
            None => GameLoopResult::Continue,
        }
    }

    /// Help text for the front end
    pub const fn status(&self) -> &'static str {
        STATUS_TEXT
    }
}
