use crate::board::{Board, Player};
use crate::error::{GameError, Result};
use crate::lines::Coord;
use crate::random::RandomGenerator;
use crate::search::{MinimaxSearch, optimal_move};
use tracing::instrument;

/// How the computer picks its moves.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum Strategy {
    /// Any free cell, uniformly.
    Random,
    /// Win if possible, otherwise block, otherwise take the centre or a corner.
    Heuristic,
    /// Exact minimax with alpha-beta pruning.
    #[default]
    Optimal,
}

/// Chooses a move for `player` according to `strategy`.
///
/// Fails with [`GameError::GameOver`] if the board is already complete.
#[instrument(level = "debug", skip(board, rng), fields(move_count = board.move_count()))]
pub fn choose_move<R: RandomGenerator>(
    strategy: Strategy,
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Result<Coord> {
    if board.is_complete() {
        return Err(GameError::GameOver);
    }

    match strategy {
        Strategy::Random => random_move(board, rng),
        Strategy::Heuristic => heuristic_move(board, player),
        Strategy::Optimal => optimal_move(board, player).map(|m| m.coord()),
    }
}

/// Picks uniformly among the moves that share the best exact minimax score.
///
/// Gives varied play without giving up optimality; the search itself stays deterministic.
pub fn choose_varied_optimal_move<R: RandomGenerator>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Result<Coord> {
    let moves = MinimaxSearch::default().scored_moves(board, player)?;
    let best_score = if player.is_maximizer() {
        moves.iter().map(|m| m.score).max()
    } else {
        moves.iter().map(|m| m.score).min()
    }
    .ok_or(GameError::GameOver)?;

    let best: Vec<Coord> = moves
        .iter()
        .filter(|m| m.score == best_score)
        .map(|m| m.coord())
        .collect();
    rng.get_random_from_slice(&best)
        .copied()
        .ok_or(GameError::GameOver)
}

fn random_move<R: RandomGenerator>(board: &Board, rng: &mut R) -> Result<Coord> {
    let cells: Vec<Coord> = board.available_cells().collect();
    rng.get_random_from_slice(&cells)
        .copied()
        .ok_or(GameError::GameOver)
}

fn heuristic_move(board: &Board, player: Player) -> Result<Coord> {
    if let Some(cell) = completing_cell(board, player)? {
        return Ok(cell);
    }
    if let Some(cell) = completing_cell(board, player.opponent())? {
        return Ok(cell);
    }

    let size = board.size();
    if size % 2 == 1 {
        let centre = size / 2;
        if board.cell_available(centre, centre)? {
            return Ok((centre, centre));
        }
    }

    let last = size - 1;
    for (row, col) in [(0, 0), (0, last), (last, 0), (last, last)] {
        if board.cell_available(row, col)? {
            return Ok((row, col));
        }
    }

    board.available_cells().next().ok_or(GameError::GameOver)
}

/// First free cell, in scan order, that would complete a line for `player`.
fn completing_cell(board: &Board, player: Player) -> Result<Option<Coord>> {
    for (row, col) in board.available_cells() {
        if board.speculate(row, col, player)?.winner() == Some(player) {
            return Ok(Some((row, col)));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandomGenerator;

    const MAX: Player = Player::Maximizer;
    const MIN: Player = Player::Minimizer;

    fn board_with(size: usize, marks: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(row, col, player) in marks {
            board.mark(row, col, player).unwrap();
        }
        board
    }

    #[test]
    fn random_strategy_picks_free_cells() {
        // arrange
        let board = board_with(3, &[(0, 0, MAX), (1, 1, MIN), (2, 2, MAX)]);
        let mut rng = SeededRandomGenerator::new(7);

        // act & assert
        for _ in 0..50 {
            let (row, col) = choose_move(Strategy::Random, &board, MIN, &mut rng).unwrap();
            assert_eq!(board.cell_available(row, col), Ok(true));
        }
    }

    #[test]
    fn random_strategy_is_reproducible_with_a_seed() {
        let board = Board::new(3).unwrap();
        let mut first = SeededRandomGenerator::new(11);
        let mut second = SeededRandomGenerator::new(11);

        let a: Vec<Coord> = (0..10)
            .map(|_| choose_move(Strategy::Random, &board, MAX, &mut first).unwrap())
            .collect();
        let b: Vec<Coord> = (0..10)
            .map(|_| choose_move(Strategy::Random, &board, MAX, &mut second).unwrap())
            .collect();

        assert_eq!(a, b);
    }

    #[test]
    fn heuristic_prefers_winning_over_blocking() {
        // X X .
        // O O .
        // . . .
        let board = board_with(3, &[(0, 0, MAX), (1, 0, MIN), (0, 1, MAX), (1, 1, MIN)]);
        let mut rng = SeededRandomGenerator::default();

        let for_max = choose_move(Strategy::Heuristic, &board, MAX, &mut rng).unwrap();
        let for_min = choose_move(Strategy::Heuristic, &board, MIN, &mut rng).unwrap();

        assert_eq!(for_max, (0, 2));
        assert_eq!(for_min, (1, 2));
    }

    #[test]
    fn heuristic_blocks_opponent() {
        // O O .
        // X . .
        // . . .
        let board = board_with(3, &[(0, 0, MIN), (1, 0, MAX), (0, 1, MIN)]);
        let mut rng = SeededRandomGenerator::default();

        let cell = choose_move(Strategy::Heuristic, &board, MAX, &mut rng).unwrap();

        assert_eq!(cell, (0, 2));
    }

    #[test]
    fn heuristic_takes_centre_then_corners() {
        let mut rng = SeededRandomGenerator::default();
        let empty = Board::new(3).unwrap();
        let centre_taken = board_with(3, &[(1, 1, MIN)]);
        let even = Board::new(4).unwrap();

        assert_eq!(choose_move(Strategy::Heuristic, &empty, MAX, &mut rng), Ok((1, 1)));
        assert_eq!(
            choose_move(Strategy::Heuristic, &centre_taken, MAX, &mut rng),
            Ok((0, 0))
        );
        assert_eq!(choose_move(Strategy::Heuristic, &even, MAX, &mut rng), Ok((0, 0)));
    }

    #[test]
    fn heuristic_blocks_on_a_crowded_board() {
        // X O X
        // X O .
        // O . O
        let board = board_with(
            3,
            &[
                (0, 0, MAX),
                (0, 1, MIN),
                (0, 2, MAX),
                (1, 0, MAX),
                (1, 1, MIN),
                (2, 0, MIN),
                (2, 2, MIN),
            ],
        );
        let mut rng = SeededRandomGenerator::default();

        let cell = choose_move(Strategy::Heuristic, &board, MAX, &mut rng).unwrap();

        assert_eq!(cell, (2, 1));
    }

    #[test]
    fn heuristic_falls_back_to_first_free_cell() {
        // X O X
        // . X .
        // O X O
        let board = board_with(
            3,
            &[
                (0, 0, MAX),
                (0, 1, MIN),
                (0, 2, MAX),
                (1, 1, MAX),
                (2, 0, MIN),
                (2, 1, MAX),
                (2, 2, MIN),
            ],
        );
        let mut rng = SeededRandomGenerator::default();

        let cell = choose_move(Strategy::Heuristic, &board, MIN, &mut rng).unwrap();

        assert_eq!(cell, (1, 0));
    }

    #[test]
    fn optimal_strategy_matches_search() {
        let board = board_with(3, &[(0, 0, MIN), (1, 0, MAX), (0, 1, MIN)]);
        let mut rng = SeededRandomGenerator::default();

        let cell = choose_move(Strategy::Optimal, &board, MAX, &mut rng).unwrap();

        assert_eq!(cell, optimal_move(&board, MAX).unwrap().coord());
    }

    #[test]
    fn strategies_refuse_complete_boards() {
        let board = board_with(3, &[(0, 0, MAX), (0, 1, MAX), (0, 2, MAX)]);
        let mut rng = SeededRandomGenerator::default();

        for strategy in [Strategy::Random, Strategy::Heuristic, Strategy::Optimal] {
            assert_eq!(
                choose_move(strategy, &board, MIN, &mut rng),
                Err(GameError::GameOver)
            );
        }
    }

    #[test]
    fn varied_optimal_only_picks_best_scoring_moves() {
        // arrange
        let board = Board::new(3).unwrap();
        let mut rng = SeededRandomGenerator::new(5);

        // act & assert
        for _ in 0..5 {
            let (row, col) = choose_varied_optimal_move(&board, MAX, &mut rng).unwrap();
            let child = board.speculate(row, col, MAX).unwrap();
            let reply = optimal_move(&child, MIN).unwrap();
            assert_eq!(reply.score, 0);
        }
    }

    #[test]
    fn varied_optimal_with_single_best_move_is_forced() {
        // O O .
        // X . .
        // . . .
        let board = board_with(3, &[(0, 0, MIN), (1, 0, MAX), (0, 1, MIN)]);
        let mut rng = SeededRandomGenerator::new(99);

        let cell = choose_varied_optimal_move(&board, MAX, &mut rng).unwrap();

        assert_eq!(cell, (0, 2));
    }
}
