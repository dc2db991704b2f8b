use crate::board::{Board, Player};
use crate::error::{GameError, Result};
use crate::lines::Coord;
use crate::search_node::{SearchNode, SearchStats};
use ego_tree::{NodeId, Tree};
use tracing::{debug, trace};

/// Magnitude of a win on boards with at most nine cells.
pub const DEFAULT_WIN_SCORE: i32 = 10;

/// A candidate move together with its minimax value.
///
/// Positive scores favour the maximizer, negative scores the minimizer and `0` is a draw.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub score: i32,
}

impl Move {
    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }
}

/// Win magnitude used when none is configured: `10`, or `move_max + 1` on larger boards so that
/// a slower win still outranks a draw.
pub fn default_win_score(move_max: usize) -> i32 {
    i32::try_from(move_max + 1).map_or(i32::MAX, |score| score.max(DEFAULT_WIN_SCORE))
}

/// Scores a complete board reached `depth` plies below the root.
///
/// A maximizer win scores `win_score - depth`, a minimizer win `depth - win_score` and a draw `0`,
/// so faster wins and slower losses are preferred.
pub fn score_grid(board: &Board, depth: u32, win_score: i32) -> i32 {
    let depth = depth as i32;
    match board.winner() {
        None => 0,
        Some(Player::Maximizer) => win_score - depth,
        Some(Player::Minimizer) => depth - win_score,
    }
}

/// Finds the optimal move for `player` with the default search configuration.
pub fn optimal_move(board: &Board, player: Player) -> Result<Move> {
    MinimaxSearch::default().search(board, player)
}

/// Exact minimax search with optional alpha-beta pruning.
///
/// The search always solves the remaining game completely, so it is only practical on small boards
/// or on positions close to the end of the game.
pub struct MinimaxSearch {
    use_alpha_beta_pruning: bool,
    win_score: Option<i32>,
    record_tree: bool,
    stats: SearchStats,
    tree: Option<Tree<SearchNode>>,
}

impl Default for MinimaxSearch {
    fn default() -> Self {
        Self::new(true, None, false)
    }
}

/// A builder for creating instances of `MinimaxSearch`.
pub struct MinimaxSearchBuilder {
    use_alpha_beta_pruning: bool,
    win_score: Option<i32>,
    record_tree: bool,
}

impl Default for MinimaxSearchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxSearchBuilder {
    pub fn new() -> Self {
        Self {
            use_alpha_beta_pruning: true,
            win_score: None,
            record_tree: false,
        }
    }

    /// Enables or disables alpha-beta pruning. Disabling it yields plain exhaustive minimax.
    pub fn with_alpha_beta_pruning(mut self, use_abp: bool) -> Self {
        self.use_alpha_beta_pruning = use_abp;
        self
    }

    /// Overrides the win magnitude. It must exceed the number of cells of every board searched.
    pub fn with_win_score(mut self, win_score: i32) -> Self {
        self.win_score = Some(win_score);
        self
    }

    /// Records every visited position into a tree available through [`MinimaxSearch::get_tree`].
    pub fn with_tree_recording(mut self, record_tree: bool) -> Self {
        self.record_tree = record_tree;
        self
    }

    pub fn build(self) -> Result<MinimaxSearch> {
        if let Some(win_score) = self.win_score {
            if win_score <= 0 {
                return Err(GameError::InvalidConfiguration {
                    message: format!("win score must be positive, got {win_score}"),
                });
            }
        }

        Ok(MinimaxSearch::new(
            self.use_alpha_beta_pruning,
            self.win_score,
            self.record_tree,
        ))
    }
}

impl MinimaxSearch {
    pub fn builder() -> MinimaxSearchBuilder {
        MinimaxSearchBuilder::new()
    }

    fn new(use_alpha_beta_pruning: bool, win_score: Option<i32>, record_tree: bool) -> Self {
        Self {
            use_alpha_beta_pruning,
            win_score,
            record_tree,
            stats: SearchStats::default(),
            tree: None,
        }
    }

    /// Counters of the most recent call to [`search`](Self::search) or
    /// [`scored_moves`](Self::scored_moves).
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The tree recorded by the most recent search, if recording is enabled.
    pub fn get_tree(&self) -> Option<&Tree<SearchNode>> {
        self.tree.as_ref()
    }

    /// Win magnitude that will be used for `board`.
    pub fn win_score_for(&self, board: &Board) -> Result<i32> {
        let move_max = board.move_max();
        match self.win_score {
            Some(win_score) if usize::try_from(win_score).is_ok_and(|w| w > move_max) => {
                Ok(win_score)
            }
            Some(win_score) => Err(GameError::InvalidConfiguration {
                message: format!(
                    "win score {win_score} must exceed the {move_max} cells of the board"
                ),
            }),
            None => Ok(default_win_score(move_max)),
        }
    }

    /// Returns the optimal move for `player`.
    ///
    /// Cells are scanned row-major and the first move reaching the best score wins ties.
    /// Fails with [`GameError::GameOver`] on a complete board.
    pub fn search(&mut self, board: &Board, player: Player) -> Result<Move> {
        self.stats = SearchStats::default();
        self.tree = None;
        if board.is_complete() {
            return Err(GameError::GameOver);
        }
        let win_score = self.win_score_for(board)?;

        debug!(
            size = board.size(),
            move_count = board.move_count(),
            ?player,
            pruning = self.use_alpha_beta_pruning,
            "starting minimax search"
        );

        self.tree = self.record_tree.then(|| Tree::new(SearchNode::root(player)));
        let root_id = self.tree.as_ref().map(|tree| tree.root().id());
        let mut run = SearchRun {
            win_score,
            prune: self.use_alpha_beta_pruning,
            stats: SearchStats::default(),
            tree: self.tree.as_mut(),
        };
        run.stats.nodes += 1;
        let best = run.best_move(board, player, 0, None, None, root_id)?;
        self.stats = run.stats;

        let best = best.ok_or(GameError::GameOver)?;
        debug!(
            row = best.row,
            col = best.col,
            score = best.score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "minimax search finished"
        );
        Ok(best)
    }

    /// Scores every available move for `player` exactly, in scan order.
    ///
    /// Each root move is searched with an open window, so unlike [`search`](Self::search) the
    /// scores of non-best moves are exact values rather than bounds.
    pub fn scored_moves(&mut self, board: &Board, player: Player) -> Result<Vec<Move>> {
        self.stats = SearchStats::default();
        self.tree = None;
        if board.is_complete() {
            return Err(GameError::GameOver);
        }
        let win_score = self.win_score_for(board)?;

        let mut stats = SearchStats {
            nodes: 1,
            ..SearchStats::default()
        };
        let mut moves = Vec::new();
        for (row, col) in board.available_cells() {
            let child = board.speculate(row, col, player)?;
            let mut run = SearchRun {
                win_score,
                prune: self.use_alpha_beta_pruning,
                stats: SearchStats::default(),
                tree: None,
            };
            let score = run.minimax(&child, player.opponent(), 1, None, None, None)?;
            stats.absorb(run.stats);
            moves.push(Move { row, col, score });
        }
        self.stats = stats;
        Ok(moves)
    }
}

struct SearchRun<'t> {
    win_score: i32,
    prune: bool,
    stats: SearchStats,
    tree: Option<&'t mut Tree<SearchNode>>,
}

impl SearchRun<'_> {
    /// Value of `board` with `player` to move, `depth` plies below the root.
    fn minimax(
        &mut self,
        board: &Board,
        player: Player,
        depth: u32,
        alpha: Option<Move>,
        beta: Option<Move>,
        node: Option<NodeId>,
    ) -> Result<i32> {
        self.stats.nodes += 1;
        if board.is_complete() {
            self.stats.terminal_nodes += 1;
            let score = score_grid(board, depth, self.win_score);
            self.annotate(node, |n| {
                n.is_terminal = true;
                n.score = Some(score);
            });
            return Ok(score);
        }

        let best = self.best_move(board, player, depth, alpha, beta, node)?;
        best.map(|m| m.score).ok_or(GameError::GameOver)
    }

    /// Scans the children of a non-terminal board and returns the best candidate, or the
    /// inherited bound when no child improves on it.
    fn best_move(
        &mut self,
        board: &Board,
        player: Player,
        depth: u32,
        mut alpha: Option<Move>,
        mut beta: Option<Move>,
        node: Option<NodeId>,
    ) -> Result<Option<Move>> {
        let maximizing = player.is_maximizer();
        let mut is_cut_off = false;

        for (row, col) in board.available_cells() {
            let child = board.speculate(row, col, player)?;
            let child_node = self.record_child(node, (row, col), player, depth + 1);
            let (child_alpha, child_beta) = if self.prune {
                (alpha, beta)
            } else {
                (None, None)
            };
            let score = self.minimax(
                &child,
                player.opponent(),
                depth + 1,
                child_alpha,
                child_beta,
                child_node,
            )?;
            let candidate = Move { row, col, score };

            if maximizing {
                if alpha.is_none_or(|a| candidate.score > a.score) {
                    alpha = Some(candidate);
                }
            } else if beta.is_none_or(|b| candidate.score < b.score) {
                beta = Some(candidate);
            }

            if self.prune {
                if let (Some(a), Some(b)) = (alpha, beta) {
                    if b.score <= a.score {
                        trace!(depth, alpha = a.score, beta = b.score, "alpha-beta cut-off");
                        self.stats.cutoffs += 1;
                        is_cut_off = true;
                        break;
                    }
                }
            }
        }

        let best = if maximizing { alpha } else { beta };
        self.annotate(node, |n| {
            n.score = best.map(|m| m.score);
            n.is_cut_off = is_cut_off;
        });
        Ok(best)
    }

    fn record_child(
        &mut self,
        parent: Option<NodeId>,
        prev_move: Coord,
        player: Player,
        depth: u32,
    ) -> Option<NodeId> {
        let parent = parent?;
        let tree = self.tree.as_deref_mut()?;
        let mut parent = tree.get_mut(parent)?;
        Some(parent.append(SearchNode::child(prev_move, player, depth)).id())
    }

    fn annotate(&mut self, node: Option<NodeId>, update: impl FnOnce(&mut SearchNode)) {
        let Some(id) = node else { return };
        let Some(tree) = self.tree.as_deref_mut() else {
            return;
        };
        if let Some(mut node) = tree.get_mut(id) {
            update(node.value());
        }
    }
}
