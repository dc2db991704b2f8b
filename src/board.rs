use crate::error::{GameError, Result};
use crate::lines::{Coord, Line, LineIndex, line_index};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

/// The two sides of the game.
///
/// The search maximizes on behalf of `Maximizer` and minimizes on behalf of `Minimizer`.
/// Display labels such as "X" and "O" are a presentation concern, see [`crate::labels::Labels`].
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Player {
    Maximizer,
    Minimizer,
}

impl Player {
    /// Returns the other side.
    pub fn opponent(self) -> Player {
        match self {
            Player::Maximizer => Player::Minimizer,
            Player::Minimizer => Player::Maximizer,
        }
    }

    pub fn is_maximizer(self) -> bool {
        self == Player::Maximizer
    }
}

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress,
    /// A line was completed by this player.
    Won(Player),
    /// Every cell is marked and no line was completed.
    Draw,
}

/// Largest supported board side. Exact search is already intractable well below this.
pub const MAX_SIZE: usize = 16;

/// An N×N tic-tac-toe board.
///
/// Cells are write-once. The only in-place mutator is [`Board::mark`], meant for the live game;
/// search derives child boards with [`Board::speculate`], which copies the cells and shares the
/// line index of its parent.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
    move_count: usize,
    lines: LineIndex,
    winning_line: OnceLock<Option<usize>>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// Fails with [`GameError::InvalidSize`] unless `1 <= size <= MAX_SIZE`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_SIZE {
            return Err(GameError::InvalidSize);
        }
        let move_max = size.checked_mul(size).ok_or(GameError::InvalidSize)?;

        Ok(Self {
            size,
            cells: vec![None; move_max],
            move_count: 0,
            lines: line_index(size),
            winning_line: OnceLock::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of marked cells.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Number of cells on the board, `size²`.
    pub fn move_max(&self) -> usize {
        self.cells.len()
    }

    /// Every winning line of this board size, in scan order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the mark at the given cell, if any.
    pub fn cell(&self, row: usize, col: usize) -> Result<Option<Player>> {
        let index = self.index_of(row, col)?;
        Ok(self.cells[index])
    }

    /// Returns `true` if the cell holds no mark.
    pub fn cell_available(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.cell(row, col)?.is_none())
    }

    /// Unmarked cells in row-major order.
    pub fn available_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| (index / self.size, index % self.size))
    }

    /// Places `player`'s mark on the live board.
    ///
    /// Fails with [`GameError::IllegalMove`] if the cell is already marked.
    pub fn mark(&mut self, row: usize, col: usize, player: Player) -> Result<()> {
        let index = self.vacant_index(row, col)?;
        self.cells[index] = Some(player);
        self.move_count += 1;
        self.winning_line = OnceLock::new();
        Ok(())
    }

    /// Derives a new board equal to this one plus `player`'s mark at `(row, col)`.
    ///
    /// `self` is left untouched. The line index is shared with the child, not rebuilt.
    pub fn speculate(&self, row: usize, col: usize, player: Player) -> Result<Board> {
        let index = self.vacant_index(row, col)?;
        let mut cells = self.cells.clone();
        cells[index] = Some(player);

        Ok(Board {
            size: self.size,
            cells,
            move_count: self.move_count + 1,
            lines: Arc::clone(&self.lines),
            winning_line: OnceLock::new(),
        })
    }

    /// Returns the owner of the first completed line, scanning rows, then columns, then the
    /// diagonal and the anti-diagonal.
    pub fn winner(&self) -> Option<Player> {
        let line = self.winning_line()?;
        let (row, col) = *line.cells().first()?;
        self.cells[row * self.size + col]
    }

    /// The completed line reported by [`Board::winner`], if any.
    pub fn winning_line(&self) -> Option<&Line> {
        let index = (*self
            .winning_line
            .get_or_init(|| self.find_winning_line()))?;
        self.lines.get(index)
    }

    /// The board is complete when every cell is marked or a line has been completed.
    pub fn is_complete(&self) -> bool {
        self.move_count >= self.move_max() || self.winner().is_some()
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.winner() {
            Some(player) => GameOutcome::Won(player),
            None if self.move_count >= self.move_max() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        }
    }

    fn find_winning_line(&self) -> Option<usize> {
        self.lines.iter().position(|line| {
            let mut marks = line
                .cells()
                .iter()
                .map(|&(row, col)| self.cells[row * self.size + col]);
            match marks.next() {
                Some(Some(first)) => marks.all(|mark| mark == Some(first)),
                _ => false,
            }
        })
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.size || col >= self.size {
            return Err(GameError::InvalidCoordinate {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    fn vacant_index(&self, row: usize, col: usize) -> Result<usize> {
        let index = self.index_of(row, col)?;
        if self.cells[index].is_some() {
            return Err(GameError::IllegalMove { row, col });
        }
        Ok(index)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.cells.hash(state);
    }
}
