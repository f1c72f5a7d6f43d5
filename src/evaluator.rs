//! Terminal detection and the open-run heuristic

use crate::board::{BoardState, Line, Mark, Player};
use crate::{TERMINAL_SCORE, WIN_LENGTH};

/// The classification of a game position
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
    Ongoing,
}

impl Outcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::PlayerOneWin => Some(Player::One),
            Outcome::PlayerTwoWin => Some(Player::Two),
            _ => None,
        }
    }

    /// The value of a finished game seen from `player`, `None` while the game is ongoing
    pub fn score_for(self, player: Player) -> Option<i32> {
        match self {
            Outcome::Ongoing => None,
            Outcome::Draw => Some(0),
            _ if self.winner() == Some(player) => Some(TERMINAL_SCORE),
            _ => Some(-TERMINAL_SCORE),
        }
    }
}

/// The run shapes counted by [`heuristic`], strongest first
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Pattern {
    /// `_XXX_`
    OpenThreeBoth,
    /// `_XXX` or `XXX_`
    OpenThreeOne,
    /// `_XX_`
    OpenTwoBoth,
    /// `_XX` or `XX_`
    OpenTwoOne,
}

impl Pattern {
    /// Matching priority: only the first pattern found in a line is counted
    pub const PRIORITY: [Pattern; 4] = [
        Pattern::OpenThreeBoth,
        Pattern::OpenThreeOne,
        Pattern::OpenTwoBoth,
        Pattern::OpenTwoOne,
    ];

    /// Weight of one occurrence for the scoring player
    pub const fn mine_weight(self) -> i32 {
        match self {
            Pattern::OpenThreeBoth => 100,
            Pattern::OpenThreeOne => 100,
            Pattern::OpenTwoBoth => 2,
            Pattern::OpenTwoOne => 1,
        }
    }

    /// Weight of one occurrence for the opponent of the scoring player
    ///
    /// Deliberately not the negation of [`Pattern::mine_weight`].
    pub const fn opponent_weight(self) -> i32 {
        match self {
            Pattern::OpenThreeBoth => -10,
            Pattern::OpenThreeOne => -5,
            Pattern::OpenTwoBoth => -2,
            Pattern::OpenTwoOne => -1,
        }
    }

    fn run_length(self) -> usize {
        match self {
            Pattern::OpenThreeBoth | Pattern::OpenThreeOne => 3,
            Pattern::OpenTwoBoth | Pattern::OpenTwoOne => 2,
        }
    }

    /// Counts non-overlapping occurrences of this pattern for `mark`
    fn count(self, marks: &[Mark], mark: Mark) -> usize {
        let run_length = self.run_length();
        let shape = |open_before: bool, open_after: bool| {
            let mut pattern = Vec::with_capacity(run_length + 2);
            if open_before {
                pattern.push(Mark::Empty);
            }
            pattern.extend(std::iter::repeat(mark).take(run_length));
            if open_after {
                pattern.push(Mark::Empty);
            }
            pattern
        };
        match self {
            Pattern::OpenThreeBoth | Pattern::OpenTwoBoth => {
                count_non_overlapping(marks, &shape(true, true))
            }
            Pattern::OpenThreeOne | Pattern::OpenTwoOne => {
                count_non_overlapping(marks, &shape(true, false))
                    + count_non_overlapping(marks, &shape(false, true))
            }
        }
    }
}

/// Left-to-right, non-overlapping occurrences of `pattern` in `marks`
fn count_non_overlapping(marks: &[Mark], pattern: &[Mark]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i + pattern.len() <= marks.len() {
        if marks[i..i + pattern.len()] == *pattern {
            count += 1;
            i += pattern.len();
        } else {
            i += 1;
        }
    }
    count
}

/// Finds the strongest pattern `player` has in `line` and how often it occurs
pub fn classify(line: &Line, player: Player) -> Option<(Pattern, usize)> {
    let mark = Mark::from(player);
    Pattern::PRIORITY
        .iter()
        .map(|&pattern| (pattern, pattern.count(&line.marks, mark)))
        .find(|&(_, count)| count > 0)
}

/// Checks whether the game is won, drawn or still going
///
/// The first winning line in extraction order decides the winner.
pub fn terminal(board: &BoardState) -> Outcome {
    for line in board.extract_lines() {
        let winner = line
            .marks
            .windows(WIN_LENGTH)
            .find(|window| !window[0].is_empty() && window.iter().all(|m| *m == window[0]))
            .map(|window| window[0]);
        match winner {
            Some(Mark::PlayerOne) => return Outcome::PlayerOneWin,
            Some(Mark::PlayerTwo) => return Outcome::PlayerTwoWin,
            _ => {}
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// Scores a position for `player` by counting partially open runs in every line
pub fn heuristic(board: &BoardState, player: Player) -> i32 {
    let opponent = player.opponent();
    board
        .extract_lines()
        .iter()
        .map(|line| {
            let mine = classify(line, player)
                .map_or(0, |(pattern, n)| pattern.mine_weight() * n as i32);
            let theirs = classify(line, opponent)
                .map_or(0, |(pattern, n)| pattern.opponent_weight() * n as i32);
            mine + theirs
        })
        .sum()
}

/// Scores a leaf of the search tree
///
/// Returns the terminal value for finished games, the heuristic once `depth`
/// reaches `cutoff`, and `None` when the node still has to be expanded.
pub fn eval(board: &BoardState, depth: u32, player: Player, cutoff: u32) -> Option<i32> {
    if let Some(score) = terminal(board).score_for(player) {
        return Some(score);
    }
    if depth >= cutoff {
        return Some(heuristic(board, player));
    }
    None
}
