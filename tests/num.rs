use autoplot::num::{centers_to_edges_1d, centers_to_edges_2d, crop2d, interp_meshgrid_2d};
use ndarray::{array, Array2};

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

#[test]
fn edges_1d_regular_spacing() {
    let edges = centers_to_edges_1d(&[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(edges.len(), 5);
    for (e, want) in edges.iter().zip([-0.5, 0.5, 1.5, 2.5, 3.5]) {
        assert_close(*e, want);
    }
}

#[test]
fn edges_1d_irregular_spacing() {
    let edges = centers_to_edges_1d(&[0.0, 1.0, 3.0]);
    // Midpoints between neighbors, outer edges extrapolated.
    assert_eq!(edges.len(), 4);
    assert_close(edges[0], -0.5);
    assert_close(edges[1], 0.5);
    assert_close(edges[2], 2.0);
    assert_close(edges[3], 4.0);
}

#[test]
fn edges_1d_degenerate_inputs() {
    assert!(centers_to_edges_1d(&[]).is_empty());
    let single = centers_to_edges_1d(&[2.0]);
    assert_close(single[0], 1.5);
    assert_close(single[1], 2.5);
}

#[test]
fn edges_2d_regular_grid() {
    // x varies along rows: x[i][j] = i
    let x = Array2::from_shape_fn((3, 4), |(i, _)| i as f64);
    let edges = centers_to_edges_2d(&x).unwrap();
    assert_eq!(edges.dim(), (4, 5));
    for i in 0..4 {
        for j in 0..5 {
            assert_close(edges[[i, j]], i as f64 - 0.5);
        }
    }
}

#[test]
fn edges_2d_rejects_degenerate_grids() {
    let row = Array2::from_shape_fn((1, 4), |(_, j)| j as f64);
    assert!(centers_to_edges_2d(&row).is_err());
    let nan = Array2::from_elem((3, 3), f64::NAN);
    assert!(centers_to_edges_2d(&nan).is_err());
}

#[test]
fn interp_fills_interior_holes() {
    let mut x = Array2::from_shape_fn((3, 4), |(_, j)| j as f64);
    let y = Array2::from_shape_fn((3, 4), |(i, _)| i as f64);
    x[[1, 2]] = f64::NAN;
    let (xi, _) = interp_meshgrid_2d(&x, &y);
    assert_close(xi[[1, 2]], 2.0);
}

#[test]
fn interp_extrapolates_row_ends() {
    let mut x = Array2::from_shape_fn((2, 4), |(_, j)| 2.0 * j as f64);
    let y = Array2::from_shape_fn((2, 4), |(i, _)| i as f64);
    x[[0, 0]] = f64::NAN;
    x[[0, 3]] = f64::NAN;
    let (xi, _) = interp_meshgrid_2d(&x, &y);
    assert_close(xi[[0, 0]], 0.0);
    assert_close(xi[[0, 3]], 6.0);
}

#[test]
fn interp_leaves_infinite_entries_for_cropping() {
    let mut x = Array2::from_shape_fn((2, 4), |(_, j)| j as f64);
    let y = Array2::from_shape_fn((2, 4), |(i, _)| i as f64);
    x[[0, 1]] = f64::INFINITY;
    x[[0, 2]] = f64::NAN;
    let (xi, _) = interp_meshgrid_2d(&x, &y);
    // The NaN hole is filled from the finite neighbors, the infinity is
    // neither a hole nor a source and must survive untouched.
    assert_close(xi[[0, 2]], 2.0);
    assert!(xi[[0, 1]].is_infinite());
}

#[test]
fn interp_fills_fully_missing_row_from_columns() {
    let mut y = Array2::from_shape_fn((3, 3), |(i, _)| i as f64);
    for j in 0..3 {
        y[[1, j]] = f64::NAN;
    }
    let x = Array2::from_shape_fn((3, 3), |(_, j)| j as f64);
    let (_, yi) = interp_meshgrid_2d(&x, &y);
    for j in 0..3 {
        assert_close(yi[[1, j]], 1.0);
    }
}

#[test]
fn crop_trims_invalid_rows_and_columns() {
    let mut x = Array2::from_shape_fn((4, 4), |(_, j)| j as f64);
    let y = Array2::from_shape_fn((4, 4), |(i, _)| i as f64);
    let z = Array2::from_shape_fn((4, 4), |(i, j)| (i * 4 + j) as f64);
    x[[0, 1]] = f64::NAN;

    let (xc, yc, zc) = crop2d(&x, &y, &z);
    // Row 0 and column 1 are tainted; the largest clean block is rows 1..4
    // and columns 2..4.
    assert_eq!(xc.dim(), (3, 2));
    assert_eq!(yc.dim(), (3, 2));
    assert_eq!(zc.dim(), (3, 2));
    assert_close(zc[[0, 0]], 6.0);
    assert_close(zc[[2, 1]], 15.0);
}

#[test]
fn crop_returns_empty_when_nothing_survives() {
    let x = Array2::from_elem((2, 2), f64::NAN);
    let y = Array2::zeros((2, 2));
    let z = Array2::zeros((2, 2));
    let (xc, _, _) = crop2d(&x, &y, &z);
    assert!(xc.is_empty());
}

#[test]
fn crop_keeps_fully_valid_grid() {
    let x = array![[0.0, 1.0], [0.0, 1.0]];
    let y = array![[0.0, 0.0], [1.0, 1.0]];
    let z = array![[1.0, 2.0], [3.0, 4.0]];
    let (xc, yc, zc) = crop2d(&x, &y, &z);
    assert_eq!(xc, x);
    assert_eq!(yc, y);
    assert_eq!(zc, z);
}
