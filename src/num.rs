//! Numeric helpers for irregular measurement meshes.
//!
//! Invalid / masked samples are represented as NaN throughout. The routines
//! here turn cell-center coordinate grids into bin edges, fill holes in
//! partially-swept meshes, and crop away regions where the coordinates are
//! unusable, so that a pseudocolor mesh can be drawn from real-world sweep
//! data that arrived incomplete.

use ndarray::Array2;

/// Returns `true` for values that cannot participate in a mesh (NaN or infinite).
#[inline]
pub fn is_invalid(v: f64) -> bool {
    !v.is_finite()
}

/// Returns `true` if every element of the grid is invalid.
pub fn all_invalid(grid: &Array2<f64>) -> bool {
    grid.iter().all(|&v| is_invalid(v))
}

/// Returns `true` if any element of the grid is invalid.
pub fn any_invalid(grid: &Array2<f64>) -> bool {
    grid.iter().any(|&v| is_invalid(v))
}

/// Returns `true` if any element of the grid is NaN. Infinities do not
/// count: they are croppable, not interpolatable.
pub fn any_nan(grid: &Array2<f64>) -> bool {
    grid.iter().any(|v| v.is_nan())
}

/// Convert 1-D cell centers to bin edges.
///
/// Edges are the midpoints between neighboring centers, with the two outer
/// edges extrapolated linearly. `n` centers yield `n + 1` edges; a single
/// center gets a unit-width bin and an empty input stays empty.
pub fn centers_to_edges_1d(centers: &[f64]) -> Vec<f64> {
    match centers.len() {
        0 => Vec::new(),
        1 => vec![centers[0] - 0.5, centers[0] + 0.5],
        n => {
            let mut edges = Vec::with_capacity(n + 1);
            edges.push(centers[0] - (centers[1] - centers[0]) / 2.0);
            for i in 0..n - 1 {
                edges.push((centers[i] + centers[i + 1]) / 2.0);
            }
            edges.push(centers[n - 1] + (centers[n - 1] - centers[n - 2]) / 2.0);
            edges
        }
    }
}

/// Convert a 2-D grid of cell centers to a grid of cell edges.
///
/// Interior edge points average the four surrounding centers; border edge
/// points come from linear extrapolation of the outermost center rows and
/// columns. An `(r, c)` center grid yields an `(r + 1, c + 1)` edge grid.
///
/// Fails when the grid is smaller than 2x2 or when extrapolation produces
/// non-finite values (the caller then skips the mesh).
pub fn centers_to_edges_2d(centers: &Array2<f64>) -> crate::Result<Array2<f64>> {
    let (r, c) = centers.dim();
    if r < 2 || c < 2 {
        return Err(crate::AutoPlotError::DegenerateMesh { rows: r, cols: c });
    }

    // Pad the center grid by one extrapolated row/column on each side, then
    // every edge point is the mean of a 2x2 block of the padded grid.
    let mut padded = Array2::<f64>::zeros((r + 2, c + 2));
    for i in 0..r {
        for j in 0..c {
            padded[[i + 1, j + 1]] = centers[[i, j]];
        }
    }
    for j in 0..c {
        padded[[0, j + 1]] = 2.0 * centers[[0, j]] - centers[[1, j]];
        padded[[r + 1, j + 1]] = 2.0 * centers[[r - 1, j]] - centers[[r - 2, j]];
    }
    for i in 0..r + 2 {
        padded[[i, 0]] = 2.0 * padded[[i, 1]] - padded[[i, 2]];
        padded[[i, c + 1]] = 2.0 * padded[[i, c]] - padded[[i, c - 1]];
    }

    let mut edges = Array2::<f64>::zeros((r + 1, c + 1));
    for i in 0..r + 1 {
        for j in 0..c + 1 {
            let e = (padded[[i, j]]
                + padded[[i, j + 1]]
                + padded[[i + 1, j]]
                + padded[[i + 1, j + 1]])
                / 4.0;
            if is_invalid(e) {
                return Err(crate::AutoPlotError::DegenerateMesh { rows: r, cols: c });
            }
            edges[[i, j]] = e;
        }
    }
    Ok(edges)
}

/// Fill NaN holes in the two coordinate grids of a partially-swept mesh.
///
/// Each grid is interpolated linearly in index space along its rows; rows
/// without any finite sample are then filled by a column-wise pass. Values
/// beyond the outermost finite samples are extrapolated from the nearest two.
/// Only NaN counts as a hole: infinite entries are left in place so the
/// cropping step can remove the affected region.
pub fn interp_meshgrid_2d(xx: &Array2<f64>, yy: &Array2<f64>) -> (Array2<f64>, Array2<f64>) {
    let mut xi = xx.clone();
    let mut yi = yy.clone();
    fill_grid(&mut xi);
    fill_grid(&mut yi);
    (xi, yi)
}

fn fill_grid(grid: &mut Array2<f64>) {
    let (r, c) = grid.dim();
    let mut buf = Vec::new();
    for i in 0..r {
        buf.clear();
        buf.extend(grid.row(i).iter().copied());
        interp_1d_inplace(&mut buf);
        for (j, v) in buf.iter().enumerate() {
            grid[[i, j]] = *v;
        }
    }
    // Rows with no finite entry at all are still NaN; fill those column-wise.
    if any_nan(grid) {
        for j in 0..c {
            buf.clear();
            buf.extend(grid.column(j).iter().copied());
            interp_1d_inplace(&mut buf);
            for (i, v) in buf.iter().enumerate() {
                grid[[i, j]] = *v;
            }
        }
    }
}

/// Linear interpolation of NaN entries over index positions, in place.
/// Finite entries are the interpolation sources; NaN entries outside the
/// finite span are extrapolated; a slice with a single finite entry fills
/// its NaNs with that constant. Infinite entries are neither holes nor
/// sources and stay where they are.
fn interp_1d_inplace(values: &mut [f64]) {
    let finite: Vec<(usize, f64)> = values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, v)| (i, *v))
        .collect();

    match finite.len() {
        0 => {}
        1 => {
            let (_, v) = finite[0];
            for slot in values.iter_mut() {
                if slot.is_nan() {
                    *slot = v;
                }
            }
        }
        _ => {
            for i in 0..values.len() {
                if !values[i].is_nan() {
                    continue;
                }
                let next = finite.iter().position(|&(fi, _)| fi > i);
                let prev = finite.iter().rposition(|&(fi, _)| fi < i);
                let ((i0, v0), (i1, v1)) = match (prev, next) {
                    (Some(p), Some(n)) => (finite[p], finite[n]),
                    // Before the first finite sample: extrapolate from the first two.
                    (None, Some(_)) => (finite[0], finite[1]),
                    // Past the last finite sample: extrapolate from the last two.
                    (Some(_), None) => (finite[finite.len() - 2], finite[finite.len() - 1]),
                    (None, None) => unreachable!(),
                };
                let t = (i as f64 - i0 as f64) / (i1 as f64 - i0 as f64);
                values[i] = v0 + t * (v1 - v0);
            }
        }
    }
}

/// Crop coordinate and value grids to the maximal contiguous block of rows
/// and columns in which every x and y coordinate is valid.
///
/// Returns empty `(0, 0)` arrays when no such block exists.
pub fn crop2d(
    x: &Array2<f64>,
    y: &Array2<f64>,
    z: &Array2<f64>,
) -> (Array2<f64>, Array2<f64>, Array2<f64>) {
    let (r, c) = x.dim();
    let valid = |i: usize, j: usize| !is_invalid(x[[i, j]]) && !is_invalid(y[[i, j]]);

    let row_ok: Vec<bool> = (0..r).map(|i| (0..c).all(|j| valid(i, j))).collect();
    let col_ok: Vec<bool> = (0..c).map(|j| (0..r).all(|i| valid(i, j))).collect();

    let rows = longest_run(&row_ok);
    let cols = longest_run(&col_ok);
    match (rows, cols) {
        (Some((r0, r1)), Some((c0, c1))) => (
            x.slice(ndarray::s![r0..r1, c0..c1]).to_owned(),
            y.slice(ndarray::s![r0..r1, c0..c1]).to_owned(),
            z.slice(ndarray::s![r0..r1, c0..c1]).to_owned(),
        ),
        _ => (
            Array2::zeros((0, 0)),
            Array2::zeros((0, 0)),
            Array2::zeros((0, 0)),
        ),
    }
}

/// Longest contiguous run of `true` flags as a half-open index range.
fn longest_run(flags: &[bool]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut start: Option<usize> = None;
    for (i, &ok) in flags.iter().enumerate() {
        match (ok, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if best.map_or(true, |(b0, b1)| i - s > b1 - b0) {
                    best = Some((s, i));
                }
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        let end = flags.len();
        if best.map_or(true, |(b0, b1)| end - s > b1 - b0) {
            best = Some((s, end));
        }
    }
    best
}
