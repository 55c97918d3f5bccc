use konane::board::io::load_board;
use konane::perft::perft;
use konane::{Board, Side};
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the Konane move generator")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board file; the full starting board when omitted
    #[arg(value_name = "BOARD")]
    board: Option<PathBuf>,
    /// Side to move: 'W' or 'B'
    #[arg(long, default_value = "B")]
    side: char,
    /// Split root moves across threads
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use konane::game::legal_moves;
    use rayon::prelude::*;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let side = Side::from_char(args.side).ok_or_else(|| anyhow::anyhow!("Invalid side: use 'W' or 'B'"))?;
    let board = match &args.board {
        Some(path) => load_board(path)?,
        None => Board::full(),
    };

    let t0 = Instant::now();
    let nodes = if args.threads <= 1 || args.depth <= 1 {
        perft(board, side, args.depth)
    } else {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads).build()?;
        let root = legal_moves(board, side);
        pool.install(|| {
            root.par_iter().map(|&mv| {
                let mut child = board;
                child.apply(mv);
                perft(child, side.opponent(), args.depth - 1)
            }).sum::<u64>()
        })
    };
    let dt = t0.elapsed().as_secs_f64();

    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { f64::INFINITY };
        println!("nodes: {nodes} elapsed: {dt:.3}s nps: {nps:.0}");
    } else {
        println!("nodes: {nodes}");
    }
    Ok(())
}
