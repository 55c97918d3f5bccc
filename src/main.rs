use anyhow::Result;
use clap::Parser;
use konane::board::io::{load_board, render, save_board};
use konane::game::{legal_moves, parse_move, Game, PlayedMove};
use konane::search::minimax::SearchParams;
use konane::{Agent, AgentConfig, Board, Side};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Konane against the alpha-beta engine", long_about = None)]
struct Args {
    /// Board file: eight rows of B, W and O
    #[arg(value_name = "BOARD")]
    board: Option<PathBuf>,

    /// Engine side: 'W' for white, 'B' for black
    #[arg(value_name = "SIDE", default_value = "B")]
    side: String,

    /// Plies searched below each root move
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Seed for the opening choice
    #[arg(long)]
    seed: Option<u64>,

    /// Disable alpha-beta pruning
    #[arg(long)]
    no_prune: bool,

    /// Side to move first
    #[arg(long, default_value = "B")]
    first: String,

    /// Where the final board is written
    #[arg(long, default_value = "dump.txt")]
    dump: PathBuf,
}

fn parse_side(s: &str) -> Result<Side> {
    match s.to_lowercase().as_str() {
        "w" | "white" => Ok(Side::White),
        "b" | "black" => Ok(Side::Black),
        _ => anyhow::bail!("Invalid side {s:?}: use 'W' or 'B'"),
    }
}

/// Read moves from stdin until a legal one arrives; `None` on quit or EOF.
fn get_human_move(game: &Game) -> Result<Option<PlayedMove>> {
    let moves = legal_moves(game.board, game.to_move);
    loop {
        print!("{} to move (e.g. {}): ", game.to_move, moves.first().map(|m| m.to_string()).unwrap_or_default());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 { return Ok(None); }
        let input = input.trim();
        if input.eq_ignore_ascii_case("quit") { return Ok(None); }

        match parse_move(game.board, game.to_move, input) {
            Ok(mv) => return Ok(Some(mv)),
            Err(e) => {
                println!("{e}. Legal moves:");
                for (i, mv) in moves.iter().enumerate() {
                    print!("{} ", mv);
                    if (i + 1) % 10 == 0 { println!(); }
                }
                println!();
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let agent_side = parse_side(&args.side)?;
    let first = parse_side(&args.first)?;
    let board = match &args.board {
        Some(path) => load_board(path)?,
        None => Board::full(),
    };
    info!("engine plays {agent_side}, depth {}", args.depth);

    let mut agent = Agent::new(AgentConfig {
        search: SearchParams { depth: args.depth, alpha_beta: !args.no_prune },
        seed: args.seed,
    });
    let mut game = Game::from_board(board, first);

    loop {
        println!("\n{}", render(&game.board));
        if let Some(winner) = game.winner() {
            println!("{} cannot move. {winner} wins!", game.to_move);
            break;
        }

        if game.to_move == agent_side {
            match agent.choose(&game.board, agent_side) {
                Ok(chosen) => {
                    println!("{}", chosen.label());
                    game.commit(chosen.mv, chosen.board);
                }
                Err(e) => {
                    println!("Lost: {e}");
                    break;
                }
            }
        } else {
            match get_human_move(&game)? {
                Some(mv) => game.play(mv),
                None => break,
            }
        }
    }

    save_board(&args.dump, &game.board)?;
    info!("final board written to {}", args.dump.display());
    Ok(())
}
