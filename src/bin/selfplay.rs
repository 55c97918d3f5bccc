use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use konane::selfplay::{generate_games, write_records, SelfPlayParams};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "konane-selfplay", about = "Play engine games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value_t = 2)]
    depth: u32,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Black plays random legal moves
    #[arg(long, default_value_t = false)]
    random_black: bool,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        max_plies: a.max_plies,
        depth: a.depth,
        seed: a.seed,
        random_black: a.random_black,
    };
    eprintln!("Generating {} games (depth={}, threads={}, random_black={})", a.games, a.depth, a.threads, a.random_black);

    let bar = ProgressBar::new(a.games as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games {elapsed}")?);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(a.threads.max(1)).build()?;
    let games = pool.install(|| generate_games(&params, |_| bar.inc(1)));
    bar.finish();

    let white = games.iter().filter(|g| g.winner == Some('W')).count();
    let black = games.iter().filter(|g| g.winner == Some('B')).count();
    eprintln!("White {white}, Black {black}, unfinished {}", games.len() - white - black);

    write_records(&a.out, &games)?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
