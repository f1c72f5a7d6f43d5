//! Top-level move selection

use indicatif::ProgressBar;
use rayon::prelude::*;
use tracing::{debug, trace};

use std::time::{Duration, Instant};

use crate::board::{BoardState, Mark, Move, Player};
use crate::error::{GameError, Result};
use crate::search::SearchEngine;

/// The result of a top-level search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub best_move: Move,
    /// The minimax value of `best_move`, `None` for the fixed opening move
    pub value: Option<i32>,
    /// The number of nodes visited by this search
    pub node_count: usize,
    pub elapsed: Duration,
}

/// Picks moves for one player with a fixed search depth
#[derive(Clone)]
pub struct MoveSelector {
    max_depth: u32,
    parallel: bool,
    progress: Option<ProgressBar>,
}

impl MoveSelector {
    pub fn new(max_depth: u32) -> Self {
        Self {
            max_depth,
            parallel: false,
            progress: None,
        }
    }

    /// Evaluates the candidate moves of the root on the rayon thread pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Advances `progress` once for every root candidate evaluated
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Searches for the best move of `player`
    ///
    /// An empty board always gets the centre cell without searching. Otherwise
    /// every empty cell is tried with `player`'s mark and scored with
    /// [`SearchEngine::utility`]; the first cell in row-major order with the
    /// highest value wins.
    pub fn search(&self, board: &BoardState, player: Player) -> Result<Decision> {
        let start = Instant::now();

        if board.is_empty() {
            return Ok(Decision {
                best_move: (board.rows() / 2, board.cols() / 2),
                value: None,
                node_count: 0,
                elapsed: start.elapsed(),
            });
        }

        let candidates: Vec<Move> = board.empty_cells().collect();
        if candidates.is_empty() {
            return Err(GameError::NoLegalMoves);
        }

        if let Some(progress) = &self.progress {
            progress.set_position(0);
            progress.set_length(candidates.len() as u64);
        }

        // (value, nodes) per candidate, in candidate order
        let scored: Vec<(i32, usize)> = if self.parallel {
            candidates
                .par_iter()
                .map(|&candidate| self.score_candidate(board, player, candidate))
                .collect()
        } else {
            candidates
                .iter()
                .map(|&candidate| self.score_candidate(board, player, candidate))
                .collect()
        };

        let mut best: Option<(Move, i32)> = None;
        let mut node_count = 0;
        for (&candidate, &(value, nodes)) in candidates.iter().zip(scored.iter()) {
            node_count += nodes;
            // strict comparison keeps the earliest candidate on ties
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((candidate, value));
            }
        }
        let (best_move, value) = best.ok_or(GameError::NoLegalMoves)?;

        if let Some(progress) = &self.progress {
            progress.finish_and_clear();
        }

        let elapsed = start.elapsed();
        debug!(
            player = player.id(),
            nodes_generated = node_count,
            time = ?elapsed,
            ?best_move,
            value,
            "search complete"
        );

        Ok(Decision {
            best_move,
            value: Some(value),
            node_count,
            elapsed,
        })
    }

    fn score_candidate(&self, board: &BoardState, player: Player, (row, col): Move) -> (i32, usize) {
        let mut engine = SearchEngine::new();
        let next = board.with_mark(player.into(), row, col);
        let value = engine.utility(&next, player, self.max_depth, 1);
        trace!(row, col, value, nodes = engine.node_count, "candidate scored");

        if let Some(progress) = &self.progress {
            progress.inc(1);
        }
        (value, engine.node_count)
    }
}

/// Finds the best move for `player` searching `max_depth` plies
///
/// Callers must check [`terminal`](crate::evaluator::terminal) first: a full
/// board fails with [`GameError::NoLegalMoves`].
pub fn find_best_move(board: &BoardState, player: Player, max_depth: u32) -> Result<Move> {
    Ok(MoveSelector::new(max_depth).search(board, player)?.best_move)
}

/// Maps player one to player two and back
pub fn next_player(mark: Mark) -> Result<Mark> {
    Ok(Player::try_from(mark)?.opponent().into())
}

/// The search depth the command line driver gives each player by default
pub fn default_depth(player: Player) -> u32 {
    2 * player.id() as u32
}
