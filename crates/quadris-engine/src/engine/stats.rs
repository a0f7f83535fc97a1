use serde::Serialize;

/// Points awarded for 1-4 lines cleared in a single lock.
const SCORE_TABLE: [u32; 5] = [0, 100, 300, 500, 800];

/// Points for `lines` cleared together in one lock.
///
/// 1 → 100, 2 → 300, 3 → 500, 4 → 800; beyond four the award keeps
/// growing by 400 per extra line.
#[must_use]
pub fn line_clear_points(lines: usize) -> u32 {
    match lines {
        0..=4 => SCORE_TABLE[lines],
        #[expect(clippy::cast_possible_truncation)]
        n => 1000 + (n as u32 - 4) * 400,
    }
}

/// Score and counters accrued over a game.
///
/// Updated at exactly one point per lock ([`Self::record_lock`]), so the
/// score is monotonically non-decreasing. Serializable so the driver can
/// hand the final numbers to an external score sink when the game ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameStats {
    score: u32,
    locked_pieces: u32,
    total_cleared_lines: u32,
}

impl GameStats {
    /// All counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            locked_pieces: 0,
            total_cleared_lines: 0,
        }
    }

    /// Current score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Total number of pieces locked into the grid.
    #[must_use]
    pub const fn locked_pieces(&self) -> u32 {
        self.locked_pieces
    }

    /// Total lines cleared across the whole game.
    #[must_use]
    pub const fn total_cleared_lines(&self) -> u32 {
        self.total_cleared_lines
    }

    /// Records one lock and the number of lines it cleared.
    #[expect(clippy::cast_possible_truncation)]
    pub fn record_lock(&mut self, cleared_lines: usize) {
        self.locked_pieces += 1;
        self.total_cleared_lines += cleared_lines as u32;
        self.score += line_clear_points(cleared_lines);
    }
}
