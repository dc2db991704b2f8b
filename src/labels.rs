use crate::board::{Board, Player};
use crate::error::{GameError, Result};

const EMPTY: char = '.';

/// Characters `parse_board` reads as free cells or row separators.
const RESERVED: [char; 6] = [EMPTY, '_', ' ', '/', '\n', '\r'];

/// Display labels for the two players.
///
/// Labels only exist at the edges of the crate; the board and the search deal in [`Player`].
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Labels {
    maximizer: char,
    minimizer: char,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            maximizer: 'X',
            minimizer: 'O',
        }
    }
}

impl Labels {
    /// Creates custom labels.
    ///
    /// Labels are matched case-insensitively when parsing, so the two must differ ignoring ASCII
    /// case. Neither may be a character `parse_board` reserves for free cells or row separators
    /// (`.`, `_`, space, `/`, newline).
    pub fn new(maximizer: char, minimizer: char) -> Result<Self> {
        if let Some(reserved) = [maximizer, minimizer]
            .into_iter()
            .find(|label| RESERVED.contains(label))
        {
            return Err(GameError::InvalidConfiguration {
                message: format!("{reserved:?} is reserved and cannot label a player"),
            });
        }
        if maximizer.eq_ignore_ascii_case(&minimizer) {
            return Err(GameError::InvalidConfiguration {
                message: format!("both players would be labelled {maximizer:?}"),
            });
        }

        Ok(Self {
            maximizer,
            minimizer,
        })
    }

    pub fn maximizer(&self) -> char {
        self.maximizer
    }

    pub fn minimizer(&self) -> char {
        self.minimizer
    }

    /// The same labels with the two players exchanged.
    pub fn swapped(self) -> Self {
        Self {
            maximizer: self.minimizer,
            minimizer: self.maximizer,
        }
    }

    pub fn label(&self, player: Player) -> char {
        match player {
            Player::Maximizer => self.maximizer,
            Player::Minimizer => self.minimizer,
        }
    }

    pub fn player(&self, label: char) -> Option<Player> {
        if label.eq_ignore_ascii_case(&self.maximizer) {
            Some(Player::Maximizer)
        } else if label.eq_ignore_ascii_case(&self.minimizer) {
            Some(Player::Minimizer)
        } else {
            None
        }
    }

    /// Renders one line per row, `.` for free cells.
    pub fn render(&self, board: &Board) -> String {
        let size = board.size();
        let mut out = String::with_capacity(size * (size + 1));
        for row in 0..size {
            for col in 0..size {
                let mark = board.cell(row, col).ok().flatten();
                out.push(mark.map_or(EMPTY, |player| self.label(player)));
            }
            out.push('\n');
        }
        out
    }

    /// Parses a square board from rows separated by newlines or `/`.
    ///
    /// Free cells may be written as `.`, `_` or a space. The board size is the number of rows.
    pub fn parse_board(&self, text: &str) -> Result<Board> {
        let rows: Vec<Vec<char>> = text
            .split(['\n', '/'])
            .map(|row| row.trim_end_matches('\r'))
            .filter(|row| !row.is_empty())
            .map(|row| row.chars().collect())
            .collect();

        let size = rows.len();
        let mut board = Board::new(size)?;
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(GameError::InvalidBoardShape {
                    expected: size,
                    got: cells.len(),
                });
            }
            for (col, &character) in cells.iter().enumerate() {
                if matches!(character, EMPTY | '_' | ' ') {
                    continue;
                }
                let player = self
                    .player(character)
                    .ok_or(GameError::InvalidCellCharacter {
                        character,
                        row,
                        col,
                    })?;
                board.mark(row, col, player)?;
            }
        }
        Ok(board)
    }
}
