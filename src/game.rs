use crate::board::{Board, GameOutcome, Player};
use crate::error::{GameError, Result};
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::strategy::{Strategy, choose_move};
use tracing::info;

/// Default board size for a new game.
pub const DEFAULT_SIZE: usize = 3;

/// A confirmed move on the live board.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct PlayedMove {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// The result of a finished game from the human's point of view.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum HumanOutcome {
    Win,
    Lose,
    Draw,
}

/// A human-versus-computer game on a single live board.
///
/// The human moves through [`Game::play`]; the computer answers immediately with its strategy.
/// Search never touches the live board, it only sees it by reference.
pub struct Game<R: RandomGenerator = StandardRandomGenerator> {
    board: Board,
    human: Player,
    strategy: Strategy,
    random: R,
    history: Vec<PlayedMove>,
}

/// A builder for creating instances of `Game`.
pub struct GameBuilder<R: RandomGenerator> {
    size: usize,
    human: Player,
    first_player: Option<Player>,
    strategy: Strategy,
    random: R,
}

impl Default for GameBuilder<StandardRandomGenerator> {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            human: Player::Minimizer,
            first_player: None,
            strategy: Strategy::default(),
            random: StandardRandomGenerator,
        }
    }
}

impl<R: RandomGenerator> GameBuilder<R> {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Chooses the side the human plays. The computer takes the other one.
    pub fn with_human_player(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    /// Chooses who opens the game. Defaults to the human.
    pub fn with_first_player(mut self, first: Player) -> Self {
        self.first_player = Some(first);
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the random number generator used by the computer's strategy.
    pub fn with_random_generator<K: RandomGenerator>(self, random: K) -> GameBuilder<K> {
        GameBuilder {
            size: self.size,
            human: self.human,
            first_player: self.first_player,
            strategy: self.strategy,
            random,
        }
    }

    /// Builds the game. If the computer opens, its first move is already on the board.
    pub fn build(self) -> Result<Game<R>> {
        let mut game = Game {
            board: Board::new(self.size)?,
            human: self.human,
            strategy: self.strategy,
            random: self.random,
            history: Vec::new(),
        };

        info!(
            size = self.size,
            human = ?game.human,
            strategy = ?game.strategy,
            "new game"
        );

        if self.first_player.is_some_and(|first| first != game.human) {
            game.computer_move()?;
        }
        Ok(game)
    }
}

impl Game {
    pub fn builder() -> GameBuilder<StandardRandomGenerator> {
        GameBuilder::default()
    }
}

impl<R: RandomGenerator> Game<R> {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn computer(&self) -> Player {
        self.human.opponent()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Every confirmed move, oldest first.
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn status(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// `None` while the game is still in progress.
    pub fn outcome_for_human(&self) -> Option<HumanOutcome> {
        match self.status() {
            GameOutcome::InProgress => None,
            GameOutcome::Draw => Some(HumanOutcome::Draw),
            GameOutcome::Won(player) if player == self.human => Some(HumanOutcome::Win),
            GameOutcome::Won(_) => Some(HumanOutcome::Lose),
        }
    }

    /// Plays the human's move at `(row, col)` and lets the computer answer.
    ///
    /// Returns the computer's reply, or `None` when the human's move ended the game.
    pub fn play(&mut self, row: usize, col: usize) -> Result<Option<PlayedMove>> {
        if self.board.is_complete() {
            return Err(GameError::GameOver);
        }

        self.confirm(row, col, self.human)?;
        if self.board.is_complete() {
            info!(outcome = ?self.status(), "game finished");
            return Ok(None);
        }

        let reply = self.computer_move()?;
        if self.board.is_complete() {
            info!(outcome = ?self.status(), "game finished");
        }
        Ok(Some(reply))
    }

    fn computer_move(&mut self) -> Result<PlayedMove> {
        let computer = self.computer();
        let (row, col) = choose_move(self.strategy, &self.board, computer, &mut self.random)?;
        self.confirm(row, col, computer)
    }

    fn confirm(&mut self, row: usize, col: usize, player: Player) -> Result<PlayedMove> {
        self.board.mark(row, col, player)?;
        let played = PlayedMove { row, col, player };
        self.history.push(played);
        info!(row, col, ?player, "move confirmed");
        Ok(played)
    }
}
