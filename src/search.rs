//! An agent to pick moves in a game of Connect 4

use rayon::prelude::*;

use crate::board::{Board, Cell, GameState, Player, WINDOWS};
use crate::{HEIGHT, WIDTH};

/// The score of a won position, before the depth bias is applied
pub const WIN_SCORE: i32 = 1000;

/// The search depth used by the command-line game, in plies
pub const DEFAULT_DEPTH: u32 = 6;

// weights for a single alignment window
const FOUR: i32 = 100;
const THREE: i32 = 10;
const TWO: i32 = 2;
const OPPONENT_THREE: i32 = -80;

// weight per tile held in the center column
const CENTER: i32 = 6;

/// Scores `board` from `player`'s point of view without looking ahead
///
/// Every alignment window is scored for both players with the roles
/// swapped, and tiles in the center column earn a flat bonus. An open
/// opponent three is penalised harder than an own three scores.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    alignment_score(board, player) - alignment_score(board, player.opponent())
        + center_score(board, player)
}

fn alignment_score(board: &Board, player: Player) -> i32 {
    let mut score = 0;
    for window in WINDOWS.iter() {
        let mut own = 0;
        let mut opponent = 0;
        let mut empty = 0;
        for &(row, column) in window.iter() {
            match board.get(row, column) {
                Cell::Empty => empty += 1,
                cell if cell == player.cell() => own += 1,
                _ => opponent += 1,
            }
        }
        score += window_score(own, opponent, empty);
    }
    score
}

fn window_score(own: u32, opponent: u32, empty: u32) -> i32 {
    let mut score = 0;

    if own == 4 {
        score += FOUR;
    } else if own == 3 && empty == 1 {
        score += THREE;
    } else if own == 2 && empty == 2 {
        score += TWO;
    }

    if opponent == 3 && empty == 1 {
        score += OPPONENT_THREE;
    }

    score
}

fn center_score(board: &Board, player: Player) -> i32 {
    let center = WIDTH / 2;
    let mut score = 0;
    for row in 0..HEIGHT {
        match board.get(row, center) {
            Cell::Empty => {}
            cell if cell == player.cell() => score += CENTER,
            _ => score -= CENTER,
        }
    }
    score
}

/// A column recommendation and the score backing it
///
/// The column is `None` when the position is terminal or the search ran
/// at depth 0; the score is signed from the searching player's point of
/// view.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

/// A bounded-depth minimax agent with alpha-beta pruning
///
/// # Notes
/// The search explores copies of the caller's board, never the board
/// itself, alternating a maximizing ply for the searching player with a
/// minimizing ply for the modelled opponent. Columns are tried from the
/// center outwards to tighten the pruning window early.
///
/// # Position Scoring
/// A position won for the searching player scores [`WIN_SCORE`] plus the
/// remaining depth, so nearer wins outrank distant ones; lost positions
/// mirror this below `-WIN_SCORE`. Undecided positions at the depth limit
/// fall back to [`evaluate`].
///
/// [`WIN_SCORE`]: constant.WIN_SCORE.html
/// [`evaluate`]: fn.evaluate.html
pub struct Minimax {
    depth: u32,

    /// The number of nodes searched by the last call (for diagnostics only)
    pub node_count: usize,
}

impl Minimax {
    /// Creates an agent that searches `depth` plies deep
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            node_count: 0,
        }
    }

    /// Recommends a column for `player` to play on `board`
    ///
    /// Identical inputs always produce an identical recommendation.
    pub fn best_move(&mut self, board: &Board, player: Player) -> SearchResult {
        self.node_count = 0;
        let (score, column) = self.minimax(board, player, self.depth, i32::MIN, i32::MAX, true);
        SearchResult { column, score }
    }

    /// Same contract and result as [`best_move`], with the root moves
    /// spread across rayon workers
    ///
    /// Sibling branches share no state, so every worker searches its own
    /// board copy with a full pruning window; the reduction applies the
    /// sequential tie-break (first strictly greater score in center-first
    /// order), which keeps the recommendation identical.
    ///
    /// [`best_move`]: #method.best_move
    pub fn best_move_parallel(&mut self, board: &Board, player: Player) -> SearchResult {
        if self.depth == 0 {
            return self.best_move(board, player);
        }
        match board.outcome() {
            GameState::Playing => {}
            _ => return self.best_move(board, player),
        }

        let depth = self.depth;
        let columns: Vec<usize> = board.legal_moves_center_first().collect();
        let scores: Vec<(i32, usize)> = columns
            .par_iter()
            .map(|&column| {
                let mut worker = Minimax::new(depth);
                let next = board.with_play(column, player);
                let (score, _) =
                    worker.minimax(&next, player, depth - 1, i32::MIN, i32::MAX, false);
                (score, worker.node_count)
            })
            .collect();

        self.node_count = 1;
        let mut best = SearchResult {
            column: None,
            score: i32::MIN,
        };
        for (&column, &(score, nodes)) in columns.iter().zip(scores.iter()) {
            self.node_count += nodes;
            if score > best.score {
                best = SearchResult {
                    column: Some(column),
                    score,
                };
            }
        }
        best
    }

    fn minimax(
        &mut self,
        board: &Board,
        player: Player,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<usize>) {
        self.node_count += 1;

        match board.outcome() {
            GameState::Won(winner) => {
                return if winner == player {
                    (WIN_SCORE + depth as i32, None)
                } else {
                    (-WIN_SCORE - depth as i32, None)
                };
            }
            GameState::Draw => return (evaluate(board, player), None),
            GameState::Playing => {}
        }
        if depth == 0 {
            return (evaluate(board, player), None);
        }

        let mut best_column = None;

        if maximizing {
            let mut max_score = i32::MIN;
            for column in board.legal_moves_center_first() {
                let next = board.with_play(column, player);
                let (score, _) = self.minimax(&next, player, depth - 1, alpha, beta, false);

                if score > max_score {
                    max_score = score;
                    best_column = Some(column);
                }
                alpha = alpha.max(score);
                // a perfect opponent will not let the game reach this branch
                if beta <= alpha {
                    break;
                }
            }
            (max_score, best_column)
        } else {
            let mut min_score = i32::MAX;
            for column in board.legal_moves_center_first() {
                let next = board.with_play(column, player.opponent());
                let (score, _) = self.minimax(&next, player, depth - 1, alpha, beta, true);

                if score < min_score {
                    min_score = score;
                    best_column = Some(column);
                }
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            (min_score, best_column)
        }
    }
}
