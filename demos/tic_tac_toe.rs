extern crate tictactoe_lib;

use tictactoe_lib::board::{Board, GameOutcome, Player};
use tictactoe_lib::game::Game;
use tictactoe_lib::labels::Labels;
use tictactoe_lib::random::SeededRandomGenerator;
use tictactoe_lib::search::MinimaxSearch;
use tictactoe_lib::strategy::{Strategy, choose_move};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let labels = Labels::default();
    let mut search = MinimaxSearch::default();

    // Print the exact value of every opening move
    let board = Board::new(3).unwrap();
    for m in search.scored_moves(&board, Player::Maximizer).unwrap() {
        println!("Opening ({}, {}) = {}", m.row, m.col, m.score);
    }
    println!("Nodes searched: {}", search.stats().nodes);

    // Heuristic human against the optimal computer, which opens the game
    let mut game = Game::builder()
        .with_first_player(Player::Maximizer)
        .with_strategy(Strategy::Optimal)
        .with_random_generator(SeededRandomGenerator::default())
        .build()
        .unwrap();
    let mut human_rng = SeededRandomGenerator::new(7);
    while game.status() == GameOutcome::InProgress {
        let (row, col) =
            choose_move(Strategy::Heuristic, game.board(), game.human(), &mut human_rng).unwrap();
        game.play(row, col).unwrap();
    }

    print!("{}", labels.render(game.board()));
    match game.status() {
        GameOutcome::Won(player) => println!("{} wins", labels.label(player)),
        _ => println!("A draw"),
    }
    assert_ne!(game.status(), GameOutcome::Won(game.human()));

    if let Some(line) = game.board().winning_line() {
        println!("Winning line: {:?}", line.cells());
    }
}
