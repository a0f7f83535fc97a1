use arrayvec::ArrayVec;
use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::cell::ColorTag;

/// Column of the spawn anchor (top-center of the field).
pub const SPAWN_X: i32 = 5;
/// Row of the spawn anchor.
pub const SPAWN_Y: i32 = 0;

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    I = 0,
    O = 1,
    T = 2,
    S = 3,
    Z = 4,
    J = 5,
    L = 6,
}

/// Uniform selection over the 7 kinds, so a seeded `Rng` can drive spawning
/// deterministically via `rng.random()`.
impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::O,
            2 => PieceKind::T,
            3 => PieceKind::S,
            4 => PieceKind::Z,
            5 => PieceKind::J,
            _ => PieceKind::L,
        }
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// All kinds, in declaration order.
    pub const ALL: [Self; Self::LEN] = [
        Self::I,
        Self::O,
        Self::T,
        Self::S,
        Self::Z,
        Self::J,
        Self::L,
    ];

    /// The fixed color for this kind.
    #[must_use]
    pub const fn color(self) -> ColorTag {
        match self {
            Self::I => ColorTag::Cyan,
            Self::O => ColorTag::Yellow,
            Self::T => ColorTag::Purple,
            Self::S => ColorTag::Green,
            Self::Z => ColorTag::Red,
            Self::J => ColorTag::Blue,
            Self::L => ColorTag::Orange,
        }
    }

    /// The canonical (spawn-orientation) shape matrix for this kind.
    #[must_use]
    pub fn canonical_shape(self) -> Shape {
        const T: bool = true;
        const F: bool = false;
        match self {
            Self::I => Shape::from_rows(&[&[T], &[T], &[T], &[T]]),
            Self::O => Shape::from_rows(&[&[T, T], &[T, T]]),
            Self::T => Shape::from_rows(&[&[F, T, F], &[T, T, T]]),
            Self::S => Shape::from_rows(&[&[F, T, T], &[T, T, F]]),
            Self::Z => Shape::from_rows(&[&[T, T, F], &[F, T, T]]),
            Self::J => Shape::from_rows(&[&[T, F, F], &[T, T, T]]),
            Self::L => Shape::from_rows(&[&[F, F, T], &[T, T, T]]),
        }
    }
}

/// Rotation sense for a 90° turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

/// A piece's occupancy matrix within its local bounding box.
///
/// `Shape` is an immutable-per-rotation-state value: rotation builds a fresh
/// matrix with swapped dimensions rather than mutating in place, so a
/// transient legality-check piece can never alias the live piece's geometry.
/// Backed by fixed-capacity storage (every tetromino fits in 4×4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    cells: ArrayVec<ArrayVec<bool, 4>, 4>,
}

impl Shape {
    /// Builds a shape from row slices.
    ///
    /// # Panics
    ///
    /// Panics if there are no rows, more than 4 rows, or rows of unequal or
    /// zero width.
    #[must_use]
    pub fn from_rows(rows: &[&[bool]]) -> Self {
        assert!(
            !rows.is_empty() && rows.len() <= 4,
            "shape must have 1..=4 rows"
        );
        let width = rows[0].len();
        assert!((1..=4).contains(&width), "shape must have 1..=4 columns");

        let mut cells = ArrayVec::new();
        for row in rows {
            assert_eq!(row.len(), width, "shape rows must have equal width");
            cells.push(row.iter().copied().collect());
        }
        Self { cells }
    }

    /// Height of the bounding box.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Width of the bounding box.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    /// True if the local cell `(row, col)` is occupied.
    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Iterates the `(row, col)` offsets of the occupied cells.
    pub fn occupied_offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter_map(move |(col, &on)| on.then_some((row, col)))
        })
    }

    /// Returns a new shape rotated 90° in the given sense.
    ///
    /// Dimensions swap on any 90° turn. Clockwise maps source `(r, c)` of an
    /// R×C matrix to `(c, R-1-r)`; counterclockwise maps it to `(C-1-c, r)`.
    #[must_use]
    pub fn rotated(&self, spin: Spin) -> Self {
        let (rows, cols) = (self.rows(), self.cols());

        let mut cells: ArrayVec<ArrayVec<bool, 4>, 4> = ArrayVec::new();
        for _ in 0..cols {
            cells.push((0..rows).map(|_| false).collect());
        }
        for (r, c) in self.occupied_offsets() {
            match spin {
                Spin::Clockwise => cells[c][rows - 1 - r] = true,
                Spin::CounterClockwise => cells[cols - 1 - c][r] = true,
            }
        }
        Self { cells }
    }
}

/// A live tetromino: kind, shape matrix, and board position.
///
/// `x`/`y` locate the top-left corner of the shape's bounding box on the
/// grid (`x` = column, `y` = row). The color is derived from the kind once at
/// construction and never changes; the shape is only ever replaced wholesale
/// by a rotation, while translation mutates `x`/`y` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: ColorTag,
    shape: Shape,
    x: i32,
    y: i32,
}

impl Piece {
    /// Creates a piece of the given kind at the spawn anchor.
    #[must_use]
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            color: kind.color(),
            shape: kind.canonical_shape(),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn color(&self) -> ColorTag {
        self.color
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Column of the bounding box's left edge.
    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Row of the bounding box's top edge.
    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Iterates the absolute `(row, col)` board coordinates of the occupied
    /// cells, shifted by `(dy, dx)`.
    ///
    /// The shift lets a caller probe a prospective position without moving
    /// the piece; coordinates may fall outside the grid and are yielded
    /// unclamped.
    pub fn occupied_cells_at(&self, dx: i32, dy: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape.occupied_offsets().map(move |(row, col)| {
            #[expect(clippy::cast_possible_truncation)]
            let cell = (self.y + dy + row as i32, self.x + dx + col as i32);
            cell
        })
    }

    /// Iterates the absolute `(row, col)` board coordinates of the occupied
    /// cells at the piece's current position.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.occupied_cells_at(0, 0)
    }

    /// A copy of this piece with a different shape at the same position.
    /// Used as the transient piece for rotation legality checks.
    #[must_use]
    pub(crate) fn with_shape(&self, shape: Shape) -> Self {
        Self {
            shape,
            ..self.clone()
        }
    }

    pub(crate) fn replace_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub(crate) fn offset_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }
}
