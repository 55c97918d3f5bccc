// Bitboard Konane engine with alpha-beta search
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod search;
pub mod selfplay;

pub use board::{Board, Side, Square};
pub use search::agent::{Agent, AgentConfig, AgentMove};
