//! Pieces tests - shapes, SRS rotation, wall kicks

use web_tetris::core::pieces::get_kick_table;
use web_tetris::core::{get_shape, try_rotate, Board, Piece};
use web_tetris::types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y};

// ============== Shape Tests ==============

#[test]
fn test_all_shapes_have_four_minos() {
    for kind in PieceKind::ALL {
        for r in 0..4 {
            let shape = get_shape(kind, Rotation::from_index(r));
            assert_eq!(shape.len(), 4);
            for (i, a) in shape.iter().enumerate() {
                assert!(!shape[i + 1..].contains(a), "{:?} has duplicate mino", kind);
            }
        }
    }
}

#[test]
fn test_i_piece_spawn_shape() {
    let shape = get_shape(PieceKind::I, Rotation::North);
    assert_eq!(shape, [(0, 1), (1, 1), (2, 1), (3, 1)]);
}

#[test]
fn test_o_piece_same_in_all_rotations() {
    let north = get_shape(PieceKind::O, Rotation::North);
    for r in [Rotation::East, Rotation::South, Rotation::West] {
        assert_eq!(get_shape(PieceKind::O, r), north);
    }
}

#[test]
fn test_t_piece_points_up_at_spawn() {
    let shape = get_shape(PieceKind::T, Rotation::North);
    assert!(shape.contains(&(1, 0)));
    assert!(shape.contains(&(0, 1)));
    assert!(shape.contains(&(1, 1)));
    assert!(shape.contains(&(2, 1)));
}

#[test]
fn test_piece_new_at_spawn() {
    let piece = Piece::new(PieceKind::L);
    assert_eq!(piece.x, SPAWN_X);
    assert_eq!(piece.y, SPAWN_Y);
    assert_eq!(piece.rotation, Rotation::North);
    assert_eq!(piece.cells(), [(5, 0), (3, 1), (4, 1), (5, 1)]);
}

#[test]
fn test_piece_shifted_and_covers() {
    let piece = Piece::new(PieceKind::O).shifted(2, 3);
    assert_eq!((piece.x, piece.y), (SPAWN_X + 2, SPAWN_Y + 3));
    assert!(piece.covers(6, 3));
    assert!(piece.covers(7, 4));
    assert!(!piece.covers(5, 3));
}

// ============== Rotation Tests ==============

#[test]
fn test_rotate_cw_cycle() {
    assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
}

#[test]
fn test_rotate_in_open_space_uses_no_kick() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind).shifted(0, 5);
        let rotated = piece.rotated(&board).expect("open space rotation");
        assert_eq!(rotated.rotation, Rotation::East);
        assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
    }
}

#[test]
fn test_four_rotations_restore_piece() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let start = Piece::new(kind).shifted(0, 8);
        let mut piece = start;
        for _ in 0..4 {
            piece = piece.rotated(&board).expect("open space rotation");
        }
        assert_eq!(piece, start, "{:?} did not come back", kind);
    }
}

#[test]
fn test_i_wall_kick_off_left_wall() {
    let board = Board::new();
    // Vertical I hugging the left wall; flat North would poke out at x = -1
    let piece = Piece {
        kind: PieceKind::I,
        rotation: Rotation::West,
        x: -1,
        y: 5,
    };
    assert!(piece.is_valid(&board));

    let rotated = piece.rotated(&board).expect("kick should find room");
    assert_eq!(rotated.rotation, Rotation::North);
    assert_eq!(rotated.x, 0);
    assert!(rotated.is_valid(&board));
}

#[test]
fn test_t_kick_around_obstacle() {
    let mut board = Board::new();
    // Blocks the unkicked East position of a T at (3, 5)
    board.set(4, 6, Some(PieceKind::O));

    let result = try_rotate(PieceKind::T, Rotation::North, 3, 5, |x, y| {
        board.is_valid(x, y)
    });
    assert_eq!(result, Some((Rotation::East, (-1, -1))));
}

#[test]
fn test_rotation_rejected_when_boxed_in() {
    let mut board = Board::new();
    for y in 0..20 {
        for x in 0..10 {
            board.set(x, y, Some(PieceKind::Z));
        }
    }
    let piece = Piece::new(PieceKind::T).shifted(0, 10);
    for (x, y) in piece.cells() {
        board.set(x, y, None);
    }

    assert!(piece.is_valid(&board));
    assert_eq!(piece.rotated(&board), None);
}

#[test]
fn test_kick_tables_start_with_identity() {
    for kind in PieceKind::ALL {
        for row in get_kick_table(kind) {
            assert_eq!(row[0], (0, 0));
        }
    }
}

#[test]
fn test_o_never_kicks() {
    for row in get_kick_table(PieceKind::O) {
        assert!(row.iter().all(|&k| k == (0, 0)));
    }
}
