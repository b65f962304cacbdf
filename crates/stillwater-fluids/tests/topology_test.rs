//! Neighbor-table tests: reciprocity, boundary sentinels, and the packed
//! face-array layout.

use stillwater_fluids::projection::topology::GridTopology;
use stillwater_fluids::ProjectionError;

#[test]
fn interior_neighbors_are_reciprocal() {
    let topo = GridTopology::new(7, 5).unwrap();

    for i in 0..topo.cell_count() {
        let n = topo.cell_neighbors(i);

        if let Some(right) = n.right {
            assert_eq!(
                topo.cell_neighbors(right).left,
                Some(i),
                "left/right reciprocity broken at cell {}",
                i
            );
        }

        if let Some(down) = n.down {
            assert_eq!(
                topo.cell_neighbors(down).up,
                Some(i),
                "up/down reciprocity broken at cell {}",
                i
            );
        }
    }
}

#[test]
fn boundary_cells_lack_off_grid_neighbors() {
    let topo = GridTopology::new(4, 3).unwrap();

    let top_left = topo.cell_neighbors(topo.idx(0, 0));
    assert_eq!(top_left.left, None);
    assert_eq!(top_left.up, None);
    assert_eq!(top_left.right, Some(1));
    assert_eq!(top_left.down, Some(4));

    let bottom_right = topo.cell_neighbors(topo.idx(3, 2));
    assert_eq!(bottom_right.right, None);
    assert_eq!(bottom_right.down, None);
    assert_eq!(bottom_right.left, Some(topo.idx(2, 2)));
    assert_eq!(bottom_right.up, Some(topo.idx(3, 1)));
}

#[test]
fn face_indices_follow_row_block_offsets() {
    // Width 4: row blocks of 9 entries, 4 vertical faces then 5 horizontal.
    let topo = GridTopology::new(4, 4).unwrap();

    let f = topo.face_neighbors(topo.idx(1, 1));
    assert_eq!(f.up, 10);
    assert_eq!(f.down, 19);
    assert_eq!(f.left, 15);
    assert_eq!(f.right, 16);
}

#[test]
fn adjacent_cells_share_faces() {
    let topo = GridTopology::new(6, 6).unwrap();

    for y in 0..6 {
        for x in 0..6 {
            let f = topo.face_neighbors(topo.idx(x, y));

            if x + 1 < 6 {
                assert_eq!(
                    f.right,
                    topo.face_neighbors(topo.idx(x + 1, y)).left,
                    "cells ({}, {}) and ({}, {}) disagree on their shared face",
                    x,
                    y,
                    x + 1,
                    y
                );
            }

            if y + 1 < 6 {
                assert_eq!(
                    f.down,
                    topo.face_neighbors(topo.idx(x, y + 1)).up,
                    "cells ({}, {}) and ({}, {}) disagree on their shared face",
                    x,
                    y,
                    x,
                    y + 1
                );
            }
        }
    }
}

#[test]
fn every_face_entry_fits_the_packed_array() {
    let topo = GridTopology::new(5, 3).unwrap();
    assert_eq!(topo.face_count(), (2 * 5 + 1) * 3 + 5);

    let max = (0..topo.cell_count())
        .map(|i| {
            let f = topo.face_neighbors(i);
            f.left.max(f.right).max(f.up).max(f.down)
        })
        .max()
        .unwrap();

    assert!(
        max < topo.face_count(),
        "face index {} exceeds packed array length {}",
        max,
        topo.face_count()
    );
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(matches!(
        GridTopology::new(0, 4),
        Err(ProjectionError::InvalidDimension { .. })
    ));
    assert!(matches!(
        GridTopology::new(4, 0),
        Err(ProjectionError::InvalidDimension { .. })
    ));
}
