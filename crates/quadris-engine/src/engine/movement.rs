use crate::{
    CollisionError,
    core::piece::Spin,
};

use super::board::{Board, Direction};

/// Command layer translating discrete player intents into validated
/// mutations of the board's active piece.
///
/// Holds a mutable borrow of the [`Board`] and reads the live piece on every
/// call; nothing is cached across calls. Every command funnels through
/// [`Board::can_place`], and a rejected command leaves no partial state
/// behind, so repeating an illegal intent is harmless.
#[derive(Debug)]
pub struct Movement<'a> {
    board: &'a mut Board,
}

impl<'a> Movement<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        Self { board }
    }

    /// Moves the active piece one column left.
    pub fn try_left(&mut self) -> Result<(), CollisionError> {
        self.try_shift(Direction::Left)
    }

    /// Moves the active piece one column right.
    pub fn try_right(&mut self) -> Result<(), CollisionError> {
        self.try_shift(Direction::Right)
    }

    /// Moves the active piece one row down (soft drop step).
    pub fn try_down(&mut self) -> Result<(), CollisionError> {
        self.try_shift(Direction::Down)
    }

    /// Moves the active piece one row up.
    pub fn try_up(&mut self) -> Result<(), CollisionError> {
        self.try_shift(Direction::Up)
    }

    fn try_shift(&mut self, direction: Direction) -> Result<(), CollisionError> {
        if self.board.state().is_game_over()
            || !self.board.can_place(self.board.current_piece(), direction)
        {
            return Err(CollisionError);
        }
        let (dx, dy) = direction.delta();
        self.board.piece_mut().offset_by(dx, dy);
        Ok(())
    }

    /// Rotates the active piece 90° in place.
    ///
    /// A transient piece with the rotated matrix at the same position is
    /// checked first; only on success is the live piece's shape replaced
    /// (position unchanged). There is no wall-kick search: a rotation that
    /// does not fit where the piece stands is simply rejected.
    pub fn try_rotate(&mut self, spin: Spin) -> Result<(), CollisionError> {
        if self.board.state().is_game_over() {
            return Err(CollisionError);
        }

        let piece = self.board.current_piece();
        let rotated = piece.shape().rotated(spin);
        let transient = piece.with_shape(rotated.clone());
        if !self.board.can_place(&transient, Direction::Rotate) {
            return Err(CollisionError);
        }
        self.board.piece_mut().replace_shape(rotated);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        core::{
            cell::{Cell, ColorTag},
            piece::{Piece, PieceKind},
        },
        engine::piece_factory::PieceFactory,
    };

    use super::*;

    fn board_with_piece(kind: PieceKind) -> Board {
        let mut board = Board::with_factory(PieceFactory::with_seed(1));
        board.set_current_piece(Piece::new(kind)).unwrap();
        board
    }

    #[test]
    fn moves_shift_the_piece_by_one() {
        let mut board = board_with_piece(PieceKind::T);
        let mut movement = Movement::new(&mut board);

        movement.try_left().unwrap();
        movement.try_down().unwrap();
        assert_eq!(board.current_piece().x(), 4);
        assert_eq!(board.current_piece().y(), 1);

        let mut movement = Movement::new(&mut board);
        movement.try_right().unwrap();
        movement.try_up().unwrap();
        assert_eq!(board.current_piece().x(), 5);
        assert_eq!(board.current_piece().y(), 0);
    }

    #[test]
    fn rejected_moves_leave_the_piece_in_place() {
        let mut board = board_with_piece(PieceKind::O);
        let mut movement = Movement::new(&mut board);

        // Walk into the left wall, then keep pushing.
        while movement.try_left().is_ok() {}
        for _ in 0..3 {
            assert!(movement.try_left().is_err());
        }
        assert_eq!(board.current_piece().x(), 0);
    }

    #[test]
    fn up_from_the_top_row_is_rejected() {
        let mut board = board_with_piece(PieceKind::T);
        let mut movement = Movement::new(&mut board);
        assert!(movement.try_up().is_err());
        assert_eq!(board.current_piece().y(), 0);
    }

    #[test]
    fn down_is_blocked_by_settled_cells() {
        let mut board = board_with_piece(PieceKind::O);
        board.piece_mut().offset_by(0, 5);

        for col in [5, 6] {
            board.grid.cells[7][col] = Cell::filled(ColorTag::Red);
        }

        let mut movement = Movement::new(&mut board);
        assert!(movement.try_down().is_err());
        assert_eq!(board.current_piece().y(), 5);
    }

    #[test]
    fn rotation_replaces_the_shape_in_place() {
        let mut board = board_with_piece(PieceKind::I);
        let mut movement = Movement::new(&mut board);

        movement.try_rotate(Spin::Clockwise).unwrap();

        let piece = board.current_piece();
        assert_eq!((piece.shape().rows(), piece.shape().cols()), (1, 4));
        assert_eq!((piece.x(), piece.y()), (5, 0), "rotation must not translate");
    }

    #[test]
    fn rotation_without_room_is_rejected() {
        let mut board = board_with_piece(PieceKind::I);
        let mut movement = Movement::new(&mut board);

        // Park the vertical I against the right wall: a horizontal I would
        // span columns 9-12, out of bounds.
        while movement.try_right().is_ok() {}
        assert_eq!(board.current_piece().x(), 9);

        let shape_before = board.current_piece().shape().clone();
        let mut movement = Movement::new(&mut board);
        assert!(movement.try_rotate(Spin::Clockwise).is_err());
        assert_eq!(*board.current_piece().shape(), shape_before);
    }

    #[test]
    fn rotate_then_counter_rotate_restores_the_shape() {
        let mut board = board_with_piece(PieceKind::T);
        board.piece_mut().offset_by(0, 5);
        let original = board.current_piece().shape().clone();

        let mut movement = Movement::new(&mut board);
        movement.try_rotate(Spin::Clockwise).unwrap();
        movement.try_rotate(Spin::CounterClockwise).unwrap();

        assert_eq!(*board.current_piece().shape(), original);
    }

    #[test]
    fn commands_are_rejected_after_game_over() {
        let mut board = board_with_piece(PieceKind::I);
        for row in 4..20 {
            board.grid.cells[row][5] = Cell::filled(ColorTag::Blue);
        }
        board.lock_piece();
        assert!(board.state().is_game_over());

        let piece_before = board.current_piece().clone();
        let mut movement = Movement::new(&mut board);
        assert!(movement.try_left().is_err());
        assert!(movement.try_down().is_err());
        assert!(movement.try_rotate(Spin::Clockwise).is_err());
        assert_eq!(*board.current_piece(), piece_before);
    }

    #[test]
    fn soft_drop_walks_the_o_piece_to_the_floor() {
        // End-to-end: an O on an empty board soft-drops 18 times, the 19th
        // is blocked by the floor, and the lock settles it at rows 18-19.
        let mut board = board_with_piece(PieceKind::O);
        let mut movement = Movement::new(&mut board);

        for step in 0..18 {
            assert!(movement.try_down().is_ok(), "step {step} should succeed");
        }
        assert!(movement.try_down().is_err(), "the floor blocks further drops");

        board.lock_piece();

        for (row, col) in [(18, 5), (18, 6), (19, 5), (19, 6)] {
            assert!(board.grid().get(row, col).filled);
        }
        assert_eq!(board.score(), 0, "nothing cleared, nothing scored");
        assert!(board.state().is_active());
        assert_eq!(
            (board.current_piece().x(), board.current_piece().y()),
            (5, 0),
            "next piece spawned at the anchor"
        );
    }
}
