pub mod agent;
pub mod eval;
pub mod minimax;
pub mod pool;

/// Search scores saturate to the `i8` range so a proven result always
/// dominates any heuristic value.
pub type Score = i8;

/// White wins: Black is to move and cannot.
pub const SCORE_MAX: Score = i8::MAX;
/// Black wins: White is to move and cannot.
pub const SCORE_MIN: Score = i8::MIN;

#[inline]
pub fn saturate(v: i32) -> Score {
    v.clamp(SCORE_MIN as i32, SCORE_MAX as i32) as Score
}
