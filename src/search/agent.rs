use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Side};
use crate::error::AgentError;
use crate::game::{opening_squares, PlayedMove};
use crate::movegen::Move;
use crate::search::minimax::{SearchParams, Searcher};
use crate::search::pool::{NodeId, NodePool};
use crate::search::{Score, SCORE_MAX, SCORE_MIN};

#[derive(Debug, Clone, Copy, Default)]
pub struct AgentConfig {
    pub search: SearchParams,
    /// Seed for the opening choice; `None` draws one from the OS.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentMove {
    pub mv: PlayedMove,
    /// Position after the move.
    pub board: Board,
    /// Resolved score of the chosen child; `None` for an opening.
    pub score: Option<Score>,
    /// Nodes allocated during the episode.
    pub nodes: usize,
}

impl AgentMove {
    pub fn label(&self) -> String { self.mv.to_string() }
}

/// Chooses moves for one side. Owns the node pool; one decision is one
/// episode, and the pool is reset before the decision is returned.
pub struct Agent {
    searcher: Searcher,
    pool: NodePool,
    rng: SmallRng,
}

impl Agent {
    pub fn new(config: AgentConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self { searcher: Searcher::new(config.search), pool: NodePool::new(), rng }
    }

    pub fn params(&self) -> SearchParams { self.searcher.params() }

    pub fn pool(&self) -> &NodePool { &self.pool }

    /// Nodes visited by the search across all decisions.
    pub fn visited(&self) -> u64 { self.searcher.nodes() }

    /// Decide `side`'s move on `board` without changing it.
    pub fn choose(&mut self, board: &Board, side: Side) -> Result<AgentMove, AgentError> {
        if board.is_partition_full(side) {
            let openings = opening_squares(side);
            let sq = openings[self.rng.gen_range(0..openings.len())];
            let mv = PlayedMove::Remove(sq);
            let mut next = *board;
            next.apply(mv);
            debug!("{side} opens with {mv}");
            return Ok(AgentMove { mv, board: next, score: None, nodes: 0 });
        }

        let decision = self.search_root(*board, side);
        let nodes = self.pool.len();
        // Episode boundary: nothing allocated above survives this reset.
        self.pool.reset();

        let (mv, next, score) = decision.ok_or(AgentError::ForcedLoss { side })?;
        debug!("{side} plays {mv} score {score} ({nodes} nodes)");
        Ok(AgentMove { mv: PlayedMove::Slide(mv), board: next, score: Some(score), nodes })
    }

    /// Choose and commit `side`'s move on `board`.
    pub fn play(&mut self, board: &mut Board, side: Side) -> Result<AgentMove, AgentError> {
        let chosen = self.choose(board, side)?;
        *board = chosen.board;
        Ok(chosen)
    }

    fn search_root(&mut self, board: Board, side: Side) -> Option<(Move, Board, Score)> {
        let root = self.pool.alloc_root(board);
        let children = self.pool.expand(root, side);
        let depth = self.searcher.params().depth;

        let mut best: Option<(NodeId, Score)> = None;
        for child in children.iter() {
            let score = self.searcher.minimax(&mut self.pool, child, depth, SCORE_MIN, SCORE_MAX, side.opponent());
            self.pool[child].score = score;
            trace!("root move {} -> {}", self.pool[child].label(), score);
            let better = match best {
                None => true,
                Some((_, s)) => match side {
                    Side::White => score > s,
                    Side::Black => score < s,
                },
            };
            if better { best = Some((child, score)); }
        }

        let (id, score) = best?;
        let node = &self.pool[id];
        node.mv.map(|mv| (mv, node.board, score))
    }
}
