//! Depth-bounded minimax over every empty cell

use crate::board::{BoardState, Player};
use crate::evaluator::eval;

/// A plain minimax searcher
///
/// # Notes
/// Every legal move is explored at every node, so a search to depth `d` with
/// `b` empty cells visits on the order of `b^d` positions. There is no
/// pruning and no caching; a `SearchEngine` only carries its node counter.
#[derive(Clone, Debug, Default)]
pub struct SearchEngine {
    /// The number of nodes searched by this `SearchEngine` so far (for diagnostics only)
    pub node_count: usize,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self { node_count: 0 }
    }

    /// Computes the minimax value of `board` for `player`
    ///
    /// `board` is the position right after `player` moved, so the opponent is
    /// the next to move. Move selection starts this at `depth` 1; the search
    /// stops expanding once `depth` reaches `max_depth`.
    pub fn utility(
        &mut self,
        board: &BoardState,
        player: Player,
        max_depth: u32,
        depth: u32,
    ) -> i32 {
        self.minimax(board, player, player.opponent(), max_depth, depth)
    }

    /// Scores a node for `root`, with `to_move` about to play
    fn minimax(
        &mut self,
        board: &BoardState,
        root: Player,
        to_move: Player,
        max_depth: u32,
        depth: u32,
    ) -> i32 {
        self.node_count += 1;

        if let Some(score) = eval(board, depth, root, max_depth) {
            return score;
        }

        // the root player picks the best child, the opponent the worst
        let maximizing = to_move == root;
        let children = board.empty_cells().map(|(row, col)| {
            let next = board.with_mark(to_move.into(), row, col);
            self.minimax(&next, root, to_move.opponent(), max_depth, depth + 1)
        });

        // a non-terminal board always has an empty cell, so there is at least one child
        if maximizing {
            children.fold(i32::MIN, i32::max)
        } else {
            children.fold(i32::MAX, i32::min)
        }
    }
}
