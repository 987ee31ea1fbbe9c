//! Placement, gravity and game-end detection.

use super::{grid, mirrored, play, DRAWN_GRID};
use crate::board::{Board, BoardError, Piece, Position, COLS};

/// A rising diagonal for A from a1 to d4
const DIAGONAL_GRID: &str = "......./......./...x.../..xx.../.xooo../xooxo..";

#[test]
fn empty_board_offers_every_column() {
    let moves = Board::new().legal_moves();
    assert_eq!(moves.len(), COLS);
    for (column, mv) in moves.iter().enumerate() {
        assert_eq!(*mv, Position(0, column));
    }
}

#[test]
fn legal_moves_follow_gravity() {
    let board = play(&[3, 3, 3]);
    let moves = board.legal_moves();
    assert_eq!(moves.len(), COLS);
    assert_eq!(moves[0], Position(0, 0));
    assert_eq!(moves[3], Position(3, 3));
    assert_eq!(board.height(3), 3);
}

#[test]
fn full_column_is_skipped() {
    let mut board = play(&[0, 0, 0, 0, 0, 0]);
    assert!(board.is_column_full(0));
    assert_eq!(board.landing(0), None);

    let moves = board.legal_moves();
    assert_eq!(moves.len(), COLS - 1);
    assert_eq!(moves.first(), Some(Position(0, 1)));
    assert!(!moves.contains(&Position(6, 0)));

    assert_eq!(
        board.drop_piece(0, Piece::A),
        Err(BoardError::ColumnFull { column: 0 })
    );
}

#[test]
fn drop_outside_board() {
    let mut board = Board::new();
    assert_eq!(
        board.drop_piece(COLS, Piece::A),
        Err(BoardError::ColumnOutOfRange { column: COLS })
    );
}

#[test]
fn place_enforces_gravity() {
    let mut board = Board::new();
    assert_eq!(
        board.place(Position(1, 2), Piece::A),
        Err(BoardError::NotPlayable {
            position: Position(1, 2)
        })
    );
    assert_eq!(board.place(Position(0, 2), Piece::A), Ok(()));
    assert_eq!(
        board.place(Position(0, 2), Piece::B),
        Err(BoardError::CellOccupied {
            position: Position(0, 2)
        })
    );
    assert_eq!(
        board.place(Position(6, 0), Piece::B),
        Err(BoardError::CellOutOfRange { row: 6, column: 0 })
    );
    assert_eq!(board.piece_at(Position(0, 2)), Some(Piece::A));
}

#[test]
fn horizontal_win() {
    let board = play(&[0, 0, 1, 1, 2, 2, 3]);
    assert!(board.has_won(Piece::A));
    assert!(!board.has_won(Piece::B));
    assert_eq!(board.winner(), Some(Piece::A));
    assert!(board.is_game_over());
}

#[test]
fn vertical_win() {
    let board = play(&[0, 1, 0, 1, 0, 1, 0]);
    assert_eq!(board.winner(), Some(Piece::A));
}

#[test]
fn three_is_not_a_win() {
    let board = play(&[0, 0, 1, 1, 2, 2]);
    assert_eq!(board.winner(), None);
    assert!(!board.is_game_over());
}

#[test]
fn diagonal_wins_both_ways() {
    let rising = grid(DIAGONAL_GRID);
    assert_eq!(rising.winner(), Some(Piece::A));

    let falling = mirrored(&rising);
    assert_eq!(falling.piece_at(Position(3, 3)), Some(Piece::A));
    assert_eq!(falling.piece_at(Position(0, 6)), Some(Piece::A));
    assert_eq!(falling.winner(), Some(Piece::A));
}

#[test]
fn full_board_without_winner_is_draw() {
    let board = grid(DRAWN_GRID);
    assert!(board.is_full());
    assert!(board.is_draw());
    assert_eq!(board.winner(), None);
    assert!(board.legal_moves().is_empty());
}

#[test]
fn side_to_move_alternates() {
    let mut board = Board::new();
    assert_eq!(board.side_to_move(), Piece::A);
    board.drop_piece(3, Piece::A).unwrap();
    assert_eq!(board.side_to_move(), Piece::B);
    board.drop_piece(3, Piece::B).unwrap();
    assert_eq!(board.side_to_move(), Piece::A);
}

#[test]
fn transposed_boards_are_equal() {
    let first = play(&[2, 4, 3]);
    let second = play(&[3, 4, 2]);
    assert_eq!(first, second);
    assert_eq!(first.hash(), second.hash());
    assert_eq!(first.hash(), first.calculate_hash());

    assert_ne!(first, play(&[2, 4, 3, 3]));
    assert_ne!(play(&[3]), play(&[4]));
}

#[test]
fn clone_is_independent() {
    let original = play(&[3, 3]);
    let mut copy = original.clone();
    copy.drop_piece(3, Piece::A).unwrap();

    assert_eq!(original.height(3), 2);
    assert_eq!(original.piece_at(Position(2, 3)), None);
    assert_ne!(original.hash(), copy.hash());
}
