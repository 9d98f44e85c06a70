//! Piece, projection, collision and grid properties over the shipped shape data.

use supa_tetris::core::{
    bounding_box, build_grid, is_valid, project, LockedCells, Piece, PlayfieldGrid,
    ShapeCatalog,
};
use supa_tetris::types::{Rgb, ShapeName, GRID_BACKGROUND, GRID_HEIGHT, GRID_WIDTH};

fn catalog() -> ShapeCatalog {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/shapes.txt");
    ShapeCatalog::load(path).expect("shipped shape data should parse")
}

fn rotated(catalog: &ShapeCatalog, name: ShapeName, rotation: usize) -> Piece {
    let mut piece = Piece::new(5, 5, catalog.get(name).unwrap());
    for _ in 0..rotation {
        piece.rotate();
    }
    piece
}

#[test]
fn test_shipped_data_matches_builtin() {
    let loaded = catalog();
    let builtin = ShapeCatalog::builtin().unwrap();
    assert_eq!(loaded.len(), 7);
    for (a, b) in loaded.iter().zip(builtin.iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_every_rotation_keeps_its_footprint() {
    let catalog = catalog();
    for shape in catalog.iter() {
        let base = project(&rotated(&catalog, shape.name(), 0));
        let (w, h) = bounding_box(&base).unwrap();

        for r in 0..shape.rotation_count() {
            let cells = project(&rotated(&catalog, shape.name(), r));
            assert_eq!(cells.len(), 4, "{:?} rotation {r}", shape.name());

            // Quarter turns swap width and height.
            let bbox = bounding_box(&cells).unwrap();
            assert!(
                bbox == (w, h) || bbox == (h, w),
                "{:?} rotation {r}: {bbox:?} vs {:?}",
                shape.name(),
                (w, h)
            );
        }
    }
}

#[test]
fn test_reverse_undoes_any_single_action() {
    let catalog = catalog();
    let actions: [fn(&mut Piece); 4] = [
        Piece::move_left,
        Piece::move_right,
        Piece::move_down,
        Piece::rotate,
    ];

    for name in ShapeName::ALL {
        let count = catalog.get(name).unwrap().rotation_count();
        for r in 0..count {
            for action in actions {
                let mut piece = rotated(&catalog, name, r);
                let before = (piece.x, piece.y, piece.rotation());
                action(&mut piece);
                piece.reverse();
                assert_eq!((piece.x, piece.y, piece.rotation()), before, "{name:?}");
            }
        }
    }
}

#[test]
fn test_spawned_pieces_fit_on_empty_grid() {
    let catalog = catalog();
    let grid = PlayfieldGrid::new();
    for name in ShapeName::ALL {
        let piece = Piece::spawn(name, &catalog).unwrap();
        assert!(is_valid(&piece, &grid), "{name:?} should spawn valid");
        assert!(project(&piece).iter().all(|&(_, y)| y < 0));
    }
}

#[test]
fn test_build_grid_empty() {
    let grid = build_grid(&LockedCells::new());
    assert_eq!(grid, PlayfieldGrid::new());
    assert_eq!(grid.rows().count(), GRID_HEIGHT as usize);
    for row in grid.rows() {
        assert_eq!(row.len(), GRID_WIDTH as usize);
        assert!(row.iter().all(|&c| c == GRID_BACKGROUND));
    }
}

#[test]
fn test_build_grid_single_cell() {
    let color = Rgb::new(1, 2, 3);
    let locked: LockedCells = [((3, 5), color)].into_iter().collect();
    let grid = build_grid(&locked);

    assert_eq!(grid.row(5)[3], color);
    assert_eq!(grid.get(3, 5), Some(color));
    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            if (x, y) != (3, 5) {
                assert_eq!(grid.get(x, y), Some(GRID_BACKGROUND), "({x}, {y})");
            }
        }
    }
}

#[test]
fn test_drop_to_floor_and_lock() {
    let catalog = catalog();

    for name in ShapeName::ALL {
        let mut piece = Piece::spawn(name, &catalog).unwrap();

        let mut locked = LockedCells::new();
        let filler = Rgb::new(9, 9, 9);
        for &(x, _) in project(&piece).iter() {
            locked.insert((x, GRID_HEIGHT - 1), filler);
        }
        let grid = build_grid(&locked);

        for step in 1..=GRID_HEIGHT {
            piece.move_down();
            let valid = is_valid(&piece, &grid);
            assert_eq!(valid, step < GRID_HEIGHT, "{name:?} step {step}");
            if !valid {
                piece.reverse();
            }
        }

        let cells = project(&piece);
        for &cell in &cells {
            locked.insert(cell, piece.color());
        }

        assert_eq!(cells.iter().map(|c| c.1).max(), Some(GRID_HEIGHT - 2));
        for &cell in &cells {
            assert_eq!(locked.get(cell), Some(name.color()));
        }
        assert!(!locked.check_lost());
    }
}

#[test]
fn test_loss_detection() {
    let color = ShapeName::T.color();

    let safe: LockedCells = [((0, 1), color), ((9, 19), color)].into_iter().collect();
    assert!(!safe.check_lost());

    let mut lost = safe.clone();
    lost.insert((4, 0), color);
    assert!(lost.check_lost());
}
