use anyhow::{Context, Result};
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::board::{Board, Side};
use crate::error::AgentError;
use crate::game::{legal_moves, Game, PlayedMove};
use crate::search::agent::{Agent, AgentConfig};
use crate::search::minimax::SearchParams;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub depth: u32,
    pub seed: u64,
    /// Black plays uniformly random legal moves instead of searching.
    pub random_black: bool,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 1, max_plies: 200, depth: 2, seed: 0, random_black: false }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    /// 'W' or 'B'; `None` when the ply limit was reached.
    pub winner: Option<char>,
    pub plies: usize,
}

/// Play `params.games` games on the rayon pool. Each game is determined by
/// the seed and its index, so output order and content are reproducible.
pub fn generate_games<F>(params: &SelfPlayParams, on_done: F) -> Vec<GameRecord>
where
    F: Fn(&GameRecord) + Sync,
{
    (0..params.games)
        .into_par_iter()
        .map(|gi| {
            let rec = play_game(params, gi as u64);
            on_done(&rec);
            rec
        })
        .collect()
}

pub fn play_game(params: &SelfPlayParams, index: u64) -> GameRecord {
    let base = params.seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(index);
    let search = SearchParams { depth: params.depth, alpha_beta: true };
    let mut white = Agent::new(AgentConfig { search, seed: Some(base ^ 0x57) });
    let mut black = Agent::new(AgentConfig { search, seed: Some(base ^ 0x42) });
    let mut rng = SmallRng::seed_from_u64(base);

    let mut game = Game::new();
    let mut winner = None;
    while game.history.len() < params.max_plies {
        let side = game.to_move;
        let played = if side == Side::Black && params.random_black {
            select_random_move(game.board, side, &mut rng).map(|mv| {
                let mut next = game.board;
                next.apply(mv);
                (mv, next)
            })
        } else {
            let agent = if side == Side::White { &mut white } else { &mut black };
            match agent.choose(&game.board, side) {
                Ok(m) => Some((m.mv, m.board)),
                Err(AgentError::ForcedLoss { .. }) => None,
            }
        };
        match played {
            Some((mv, next)) => game.commit(mv, next),
            None => {
                winner = Some(side.opponent().to_char());
                break;
            }
        }
    }
    if winner.is_none() {
        warn!("game {index} hit the {} ply limit", params.max_plies);
    }
    debug!("game {index} finished after {} plies, winner {:?}", game.history.len(), winner);
    GameRecord {
        moves: game.history.iter().map(|m| m.to_string()).collect(),
        winner,
        plies: game.history.len(),
    }
}

fn select_random_move(board: Board, side: Side, rng: &mut SmallRng) -> Option<PlayedMove> {
    let moves = legal_moves(board, side);
    if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
}

/// Write one JSON object per line.
pub fn write_records(path: &Path, records: &[GameRecord]) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
    }
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(f);
    for rec in records {
        serde_json::to_writer(&mut w, rec).context("serialize game record")?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_records(path: &Path) -> Result<Vec<GameRecord>> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut out = Vec::new();
    for (i, line) in BufReader::new(f).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let rec = serde_json::from_str(&line).with_context(|| format!("{}:{}", path.display(), i + 1))?;
        out.push(rec);
    }
    Ok(out)
}
