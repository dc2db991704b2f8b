use crate::board::Player;
use crate::lines::Coord;

/// A single node of a recorded search tree.
///
/// Only populated when tree recording is enabled on the search; the tree mirrors the order in
/// which the search visited positions, including branches that were later cut off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// The move that led to this node from its parent. `None` for the root node.
    pub prev_move: Option<Coord>,
    /// The player who made `prev_move`, or the player to move at the root.
    pub player: Player,
    /// Plies from the root of the search.
    pub depth: u32,
    /// Minimax value backed up into this node. `None` until the node has been scored.
    pub score: Option<i32>,
    /// Whether the node is a complete board.
    pub is_terminal: bool,
    /// Whether the scan over this node's children stopped early on an alpha-beta cut-off.
    pub is_cut_off: bool,
}

impl SearchNode {
    pub(crate) fn root(player: Player) -> Self {
        Self {
            prev_move: None,
            player,
            depth: 0,
            score: None,
            is_terminal: false,
            is_cut_off: false,
        }
    }

    pub(crate) fn child(prev_move: Coord, player: Player, depth: u32) -> Self {
        Self {
            prev_move: Some(prev_move),
            player,
            depth,
            score: None,
            is_terminal: false,
            is_cut_off: false,
        }
    }
}

/// Counters collected during the most recent search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, the root included.
    pub nodes: u64,
    /// Visited positions that were complete boards.
    pub terminal_nodes: u64,
    /// Sibling scans abandoned by alpha-beta.
    pub cutoffs: u64,
}

impl SearchStats {
    pub(crate) fn absorb(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.terminal_nodes += other.terminal_nodes;
        self.cutoffs += other.cutoffs;
    }
}
