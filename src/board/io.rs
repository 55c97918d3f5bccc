use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::{Board, Side, Square};

pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Board> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("read board file: {}", path.as_ref().display()))?;
    let board = text.parse::<Board>()
        .with_context(|| format!("parse board file: {}", path.as_ref().display()))?;
    Ok(board)
}

pub fn save_board<P: AsRef<Path>>(path: P, board: &Board) -> Result<()> {
    fs::write(&path, board.to_string())
        .with_context(|| format!("write board file: {}", path.as_ref().display()))
}

/// Console view with rank and file labels.
pub fn render(board: &Board) -> String {
    let mut out = String::with_capacity(128);
    for row in 0..8u8 {
        out.push((b'8' - row) as char);
        out.push(' ');
        for col in 0..8u8 {
            let c = match Square::from_row_col(row, col) {
                Some(sq) if board.is_occupied(sq) => Side::owner_of(sq).to_char(),
                _ => '.',
            };
            out.push(c);
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("  A B C D E F G H\n");
    out
}
