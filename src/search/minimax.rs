use log::trace;

use crate::board::Side;
use crate::movegen::movable_pieces;
use crate::search::eval::evaluate;
use crate::search::pool::{NodeId, NodePool};
use crate::search::{Score, SCORE_MAX, SCORE_MIN};

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Plies searched below each root move.
    pub depth: u32,
    pub alpha_beta: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { depth: 3, alpha_beta: true }
    }
}

/// Depth-limited minimax over a [`NodePool`]. White maximizes.
#[derive(Debug, Default)]
pub struct Searcher {
    params: SearchParams,
    pub(crate) nodes: u64,
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self { params, nodes: 0 }
    }

    pub fn params(&self) -> SearchParams { self.params }

    /// Nodes visited since construction or the last [`Searcher::reset_nodes`].
    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn reset_nodes(&mut self) { self.nodes = 0; }

    /// Resolve the score of `id` with `side` to move, storing it on the node.
    pub fn minimax(
        &mut self,
        pool: &mut NodePool,
        id: NodeId,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        side: Side,
    ) -> Score {
        self.nodes += 1;
        if is_over(pool, id, side) {
            return pool[id].score;
        }
        if depth == 0 {
            return self.leaf(pool, id);
        }
        let children = pool.expand(id, side);
        if children.is_empty() {
            return self.leaf(pool, id);
        }

        let best = match side {
            Side::White => {
                let mut max_eval = SCORE_MIN;
                for child in children.iter() {
                    let eval = self.minimax(pool, child, depth - 1, alpha, beta, Side::Black);
                    max_eval = max_eval.max(eval);
                    alpha = alpha.max(eval);
                    if self.params.alpha_beta && beta <= alpha { break; }
                }
                max_eval
            }
            Side::Black => {
                let mut min_eval = SCORE_MAX;
                for child in children.iter() {
                    let eval = self.minimax(pool, child, depth - 1, alpha, beta, Side::White);
                    min_eval = min_eval.min(eval);
                    beta = beta.min(eval);
                    if self.params.alpha_beta && beta <= alpha { break; }
                }
                min_eval
            }
        };
        trace!("node {:?} depth {} side {} -> {}", pool[id].mv, depth, side, best);
        pool[id].score = best;
        best
    }

    fn leaf(&mut self, pool: &mut NodePool, id: NodeId) -> Score {
        let score = evaluate(pool[id].board);
        pool[id].score = score;
        score
    }
}

/// Terminal test: `side` is to move and has no piece that can move. Sets
/// the node's score to the proven result when it is.
pub fn is_over(pool: &mut NodePool, id: NodeId, side: Side) -> bool {
    if movable_pieces(pool[id].board, side) != 0 {
        return false;
    }
    pool[id].score = match side {
        Side::Black => SCORE_MAX,
        Side::White => SCORE_MIN,
    };
    true
}
