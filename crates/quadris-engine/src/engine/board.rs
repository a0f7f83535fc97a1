use arrayvec::ArrayVec;

use crate::{
    CollisionError, SpawnBlockedError,
    core::{
        cell::Cell,
        grid::Grid,
        piece::{Piece, SPAWN_X, SPAWN_Y},
    },
};

use super::{piece_factory::PieceFactory, stats::GameStats};

#[expect(clippy::cast_possible_truncation)]
const GRID_ROWS: i32 = Grid::ROWS as i32;
#[expect(clippy::cast_possible_truncation)]
const GRID_COLS: i32 = Grid::COLS as i32;

/// Movement intent vocabulary understood by [`Board::can_place`].
///
/// `Rotate` carries a zero delta: rotation legality is checked in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
    Rotate,
}

impl Direction {
    /// The `(dx, dy)` delta applied to a piece moving in this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Up => (0, -1),
            Self::Rotate => (0, 0),
        }
    }
}

/// Lifecycle of a board.
///
/// `GameOver` is terminal: the transition is one-way and only a new board
/// starts another game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum BoardState {
    Active,
    GameOver,
}

/// The single source of truth for a running game.
///
/// Owns the settled [`Grid`], the active [`Piece`], the spawning
/// [`PieceFactory`], and the accrued [`GameStats`]. An external driver issues
/// commands against it synchronously; there is no internal concurrency, and
/// no operation suspends mid-way.
///
/// While the board is `Active` there is always a live piece. Once the state
/// reaches `GameOver` the board stops accepting placement mutations.
#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) grid: Grid,
    piece: Piece,
    factory: PieceFactory,
    stats: GameStats,
    state: BoardState,
}

impl Board {
    /// Creates a board with a randomly seeded factory and spawns the first
    /// piece.
    #[must_use]
    pub fn new() -> Self {
        Self::with_factory(PieceFactory::new())
    }

    /// Like [`Self::new`], but with a caller-supplied factory (e.g. a seeded
    /// one for deterministic play).
    #[must_use]
    pub fn with_factory(mut factory: PieceFactory) -> Self {
        let piece = factory.next_piece();
        Self {
            grid: Grid::new(),
            piece,
            factory,
            stats: GameStats::new(),
            state: BoardState::Active,
        }
    }

    /// The settled grid (without the active-piece overlay).
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The active piece.
    #[must_use]
    pub fn current_piece(&self) -> &Piece {
        &self.piece
    }

    pub(crate) fn piece_mut(&mut self) -> &mut Piece {
        &mut self.piece
    }

    /// Accrued score and counters.
    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Current score. Shorthand for `stats().score()`.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.stats.score()
    }

    #[must_use]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Rendering query for `(row, col)`.
    ///
    /// If the active piece covers the position, returns a synthetic filled
    /// cell in the piece's color; otherwise returns the settled grid cell.
    /// The overlay is computed fresh on every call and never cached.
    ///
    /// # Panics
    ///
    /// Panics if `row >= 20` or `col >= 10`, like [`Grid::get`].
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        let target = (row as i32, col as i32);
        if self.piece.occupied_cells().any(|cell| cell == target) {
            return Cell::filled(self.piece.color());
        }
        self.grid.get(row, col)
    }

    /// The single legality authority: can `piece` move one step in
    /// `direction` (or, for [`Direction::Rotate`], occupy its current
    /// position as-is)?
    ///
    /// True only if every occupied shape cell lands inside the 20×10 field
    /// on an unfilled grid cell.
    #[must_use]
    #[expect(clippy::cast_sign_loss)]
    pub fn can_place(&self, piece: &Piece, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        piece.occupied_cells_at(dx, dy).all(|(row, col)| {
            (0..GRID_ROWS).contains(&row)
                && (0..GRID_COLS).contains(&col)
                && !self.grid.cells[row as usize][col as usize].filled
        })
    }

    /// Replaces the active piece after checking it fits where it stands.
    ///
    /// Lets a driver install a specific piece (scripted openings, tests).
    /// Rejected without state change if the piece collides or the game is
    /// over.
    pub fn set_current_piece(&mut self, piece: Piece) -> Result<(), CollisionError> {
        if self.state.is_game_over() || !self.can_place(&piece, Direction::Rotate) {
            return Err(CollisionError);
        }
        self.piece = piece;
        Ok(())
    }

    /// Spawns the next random piece if the spawn cell (row 0, column 5) is
    /// unfilled.
    ///
    /// On `Err` the active piece is left untouched; [`Self::lock_piece`]
    /// treats a blocked post-lock spawn as game over.
    #[expect(clippy::cast_sign_loss)]
    pub fn spawn_piece(&mut self) -> Result<(), SpawnBlockedError> {
        if self.grid.get(SPAWN_Y as usize, SPAWN_X as usize).filled {
            return Err(SpawnBlockedError);
        }
        self.piece = self.factory.next_piece();
        Ok(())
    }

    /// Locks the active piece: hard-drop to rest, merge into the grid, clear
    /// full rows and accrue score, then either end the game or spawn the
    /// next piece.
    ///
    /// No-op once the board is `GameOver`.
    pub fn lock_piece(&mut self) {
        if self.state.is_game_over() {
            return;
        }

        while self.can_place(&self.piece, Direction::Down) {
            self.piece.offset_by(0, 1);
        }

        self.merge_current_piece();

        let cleared = self.clear_full_rows();
        self.stats.record_lock(cleared.len());

        if self.grid.is_top_row_occupied() || self.spawn_piece().is_err() {
            self.state = BoardState::GameOver;
        }
    }

    /// Copies the active piece's occupied cells into the settled grid. This
    /// is the only path by which the grid gains filled cells.
    #[expect(clippy::cast_sign_loss)]
    fn merge_current_piece(&mut self) {
        let fill = Cell::filled(self.piece.color());
        for (row, col) in self.piece.occupied_cells() {
            self.grid.cells[row as usize][col as usize] = fill;
        }
    }

    /// Scans rows top to bottom and clears every full one, shifting the rows
    /// above down and blanking row 0.
    ///
    /// The scan cursor does not advance past a row that was just cleared:
    /// content has fallen into that index and must be re-verified first.
    /// Returns the cleared row indices in scan order.
    fn clear_full_rows(&mut self) -> ArrayVec<usize, { Grid::ROWS }> {
        let mut cleared = ArrayVec::new();
        let mut row = 0;
        while row < Grid::ROWS {
            if !self.grid.is_row_full(row) {
                row += 1;
                continue;
            }
            for r in (1..=row).rev() {
                self.grid.cells[r] = self.grid.cells[r - 1];
            }
            self.grid.cells[0] = [Cell::EMPTY; Grid::COLS];
            cleared.push(row);
        }
        cleared
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
