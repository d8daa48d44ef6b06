// tests/projection_tests.rs

use glam::vec2;
use tiled_geom::{
    MapCoord, Projection, Stagger, StaggerAxis, StaggerIndex, TileSize,
};

const ODD_X: Stagger = Stagger {
    axis: StaggerAxis::X,
    index: StaggerIndex::Odd,
};
const ODD_Y: Stagger = Stagger {
    axis: StaggerAxis::Y,
    index: StaggerIndex::Odd,
};

#[test]
fn orthogonal_screen_coords_scale_by_tile_size() {
    let p = Projection::Orthogonal;
    let size = TileSize::new(16.0, 8.0);
    assert_eq!(p.to_screen(MapCoord::new(3, 2), size), vec2(48.0, 16.0));
    assert_eq!(p.to_screen(MapCoord::new(-1, 0), size), vec2(-16.0, 0.0));
}

#[test]
fn orthogonal_round_trip() {
    let p = Projection::Orthogonal;
    for &size in &[TileSize::new(16.0, 16.0), TileSize::new(10.0, 4.0)] {
        for y in -8..8 {
            for x in -8..8 {
                let c = MapCoord::new(x, y);
                assert_eq!(p.to_coord(p.to_screen(c, size), size), c);
            }
        }
    }
}

#[test]
fn isometric_is_the_standard_diamond_shear() {
    let p = Projection::Isometric;
    let size = TileSize::new(64.0, 32.0);
    assert_eq!(p.to_screen(MapCoord::new(0, 0), size), vec2(0.0, 0.0));
    assert_eq!(p.to_screen(MapCoord::new(1, 0), size), vec2(32.0, 16.0));
    assert_eq!(p.to_screen(MapCoord::new(0, 1), size), vec2(-32.0, 16.0));
    assert_eq!(p.to_screen(MapCoord::new(2, 2), size), vec2(0.0, 64.0));
}

#[test]
fn isometric_round_trip() {
    let p = Projection::Isometric;
    for &size in &[TileSize::new(64.0, 32.0), TileSize::new(10.0, 4.0)] {
        for y in -8..8 {
            for x in -8..8 {
                let c = MapCoord::new(x, y);
                assert_eq!(p.to_coord(p.to_screen(c, size), size), c, "size={size:?}");
            }
        }
    }
}

#[test]
fn round_trips_survive_inverted_axes() {
    let size = TileSize::new(-16.0, 8.0);
    for p in [Projection::Orthogonal, Projection::Isometric] {
        for y in -4..4 {
            for x in -4..4 {
                let c = MapCoord::new(x, y);
                assert_eq!(p.to_coord(p.to_screen(c, size), size), c);
            }
        }
    }
}

#[test]
fn hex_stagger_x_pushes_odd_columns_down_half_a_tile() {
    let p = Projection::from_metadata(tiled_geom::Orientation::Hexagonal, ODD_X, 16.0);
    let size = TileSize::new(32.0, 28.0);
    for row in -4..4 {
        for col in -4..4 {
            let here = p.to_screen(MapCoord::new(col, row), size);
            let right = p.to_screen(MapCoord::new(col + 1, row), size);
            assert_eq!((right.y - here.y).abs(), size.height / 2.0);
        }
    }
}

#[test]
fn staggered_pushes_odd_rows_right_half_a_tile() {
    let p = Projection::Staggered { stagger: ODD_Y };
    let size = TileSize::new(64.0, 32.0);
    for row in -4..4 {
        for col in -4..4 {
            let here = p.to_screen(MapCoord::new(col, row), size);
            let below = p.to_screen(MapCoord::new(col, row + 1), size);
            assert_eq!((below.x - here.x).abs(), size.width / 2.0);
        }
    }
}

#[test]
fn even_stagger_index_flips_which_rows_are_pushed() {
    let odd = Projection::Staggered { stagger: ODD_Y };
    let even = Projection::Staggered {
        stagger: Stagger {
            axis: StaggerAxis::Y,
            index: StaggerIndex::Even,
        },
    };
    let size = TileSize::new(64.0, 32.0);
    // Row 0 is unpushed under odd, pushed under even.
    assert_eq!(odd.to_screen(MapCoord::new(0, 0), size).x, 0.0);
    assert_eq!(even.to_screen(MapCoord::new(0, 0), size).x, 32.0);
    assert_eq!(odd.to_screen(MapCoord::new(0, 1), size).x, 32.0);
    assert_eq!(even.to_screen(MapCoord::new(0, 1), size).x, 0.0);
}

#[test]
fn hex_cell_centers_round_trip() {
    let size = TileSize::new(32.0, 28.0);
    let half = vec2(16.0, 14.0);
    for stagger in [
        ODD_X,
        ODD_Y,
        Stagger {
            axis: StaggerAxis::X,
            index: StaggerIndex::Even,
        },
        Stagger {
            axis: StaggerAxis::Y,
            index: StaggerIndex::Even,
        },
    ] {
        let p = Projection::from_metadata(tiled_geom::Orientation::Hexagonal, stagger, 14.0);
        for row in 0..6 {
            for col in 0..6 {
                let c = MapCoord::new(col, row);
                let center = p.to_screen(c, size) + half;
                assert_eq!(p.to_coord(center, size), c, "stagger={stagger:?}");
            }
        }
    }
}

#[test]
fn staggered_cell_centers_round_trip() {
    let size = TileSize::new(64.0, 32.0);
    let half = vec2(32.0, 16.0);
    for stagger in [ODD_X, ODD_Y] {
        let p = Projection::Staggered { stagger };
        for row in 0..6 {
            for col in 0..6 {
                let c = MapCoord::new(col, row);
                let center = p.to_screen(c, size) + half;
                assert_eq!(p.to_coord(center, size), c, "stagger={stagger:?}");
            }
        }
    }
}
